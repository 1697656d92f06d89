// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Address-width configuration and range checks.
//!
//! A raw `usize` always fits in an address type, but only part of the word is
//! meaningful to the MMU:
//!
//! ```text
//!                     virt_bits        phys_bits
//! x86_64 (4-level)    48 (canonical)   52
//! aarch64 (4 KiB TG)  48 (canonical)   48
//! riscv64 Sv39        39 (canonical)   56
//! riscv64 Sv48        48 (canonical)   56
//! ```
//!
//! A virtual address is canonical when every bit above `virt_bits - 1` is a
//! copy of bit `virt_bits - 1`. A physical address is in range when no bit at
//! or above `phys_bits` is set.

/// Number of significant virtual and physical address bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AddrWidth {
    virt_bits: u32,
    phys_bits: u32,
}

impl AddrWidth {
    /// `x86_64` with 4-level paging.
    pub const X86_64: Self = Self {
        virt_bits: 48,
        phys_bits: 52,
    };

    /// `aarch64` with a 4 KiB granule and 48-bit output addresses.
    pub const AARCH64: Self = Self {
        virt_bits: 48,
        phys_bits: 48,
    };

    /// `riscv64` Sv39.
    pub const RISCV_SV39: Self = Self {
        virt_bits: 39,
        phys_bits: 56,
    };

    /// `riscv64` Sv48.
    pub const RISCV_SV48: Self = Self {
        virt_bits: 48,
        phys_bits: 56,
    };

    /// Every bit of the machine word is significant.
    pub const FULL: Self = Self {
        virt_bits: usize::BITS,
        phys_bits: usize::BITS,
    };

    /// Width of the compilation target.
    #[cfg(target_arch = "x86_64")]
    pub const ACTIVE: Self = Self::X86_64;

    /// Width of the compilation target.
    #[cfg(target_arch = "aarch64")]
    pub const ACTIVE: Self = Self::AARCH64;

    /// Width of the compilation target.
    #[cfg(all(target_arch = "riscv64", not(feature = "riscv-sv48")))]
    pub const ACTIVE: Self = Self::RISCV_SV39;

    /// Width of the compilation target.
    #[cfg(all(target_arch = "riscv64", feature = "riscv-sv48"))]
    pub const ACTIVE: Self = Self::RISCV_SV48;

    /// Width of the compilation target.
    #[cfg(not(any(
        target_arch = "x86_64",
        target_arch = "aarch64",
        target_arch = "riscv64"
    )))]
    pub const ACTIVE: Self = Self::FULL;

    /// Create a custom address width.
    ///
    /// Returns `None` if either width is zero or larger than 64 bits.
    #[inline]
    #[must_use]
    pub const fn new(virt_bits: u32, phys_bits: u32) -> Option<Self> {
        if virt_bits == 0 || virt_bits > 64 || phys_bits == 0 || phys_bits > 64 {
            return None;
        }
        Some(Self {
            virt_bits,
            phys_bits,
        })
    }

    /// Number of significant virtual address bits.
    #[inline]
    #[must_use]
    pub const fn virt_bits(self) -> u32 {
        self.virt_bits
    }

    /// Number of significant physical address bits.
    #[inline]
    #[must_use]
    pub const fn phys_bits(self) -> u32 {
        self.phys_bits
    }

    /// Sign-extend bit `virt_bits - 1` into the upper part of the word.
    #[inline]
    #[must_use]
    pub const fn canonicalize_virt(self, addr: usize) -> usize {
        if self.virt_bits >= usize::BITS {
            return addr;
        }
        let shift = usize::BITS - self.virt_bits;
        (((addr << shift) as isize) >> shift) as usize
    }

    /// Check whether `addr` is a canonical virtual address.
    #[inline]
    #[must_use]
    pub const fn is_canonical_virt(self, addr: usize) -> bool {
        self.canonicalize_virt(addr) == addr
    }

    /// Clear every bit at or above `phys_bits`.
    #[inline]
    #[must_use]
    pub const fn truncate_phys(self, addr: usize) -> usize {
        if self.phys_bits >= usize::BITS {
            return addr;
        }
        addr & ((1 << self.phys_bits) - 1)
    }

    /// Check whether `addr` fits in the physical address space.
    #[inline]
    #[must_use]
    pub const fn is_valid_phys(self, addr: usize) -> bool {
        self.truncate_phys(addr) == addr
    }
}

impl Default for AddrWidth {
    fn default() -> Self {
        Self::ACTIVE
    }
}

/// What raw-integer conversion does with a value outside the address width.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RangePolicy {
    /// Fail with an [`AddrError`].
    #[default]
    Reject,
    /// Force the value into range (sign-extend virtual, mask physical).
    Truncate,
}

/// Error returned by range-checked address construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AddrError {
    /// Virtual address is not canonical for the configured width.
    #[error("virtual address {addr:#x} is not canonical for a {bits}-bit address space")]
    NonCanonical {
        /// The rejected raw value.
        addr: usize,
        /// Configured virtual address width.
        bits: u32,
    },
    /// Physical address has bits set above the configured width.
    #[error("physical address {addr:#x} exceeds a {bits}-bit physical address space")]
    PhysOutOfRange {
        /// The rejected raw value.
        addr: usize,
        /// Configured physical address width.
        bits: u32,
    },
}
