// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Architecture-native flag encodings.
//!
//! Each supported architecture has its own module defining the hardware bit
//! layout and its conversion to and from [`MappingFlags`]. The modules do not
//! know about each other; adding an architecture means adding a module, a
//! [`NativeFlags`] variant, and an [`Arch`] variant.
//!
//! # Translation policy
//!
//! All adapters follow the same rules:
//!
//! 1. **The hardware only sees what it can honor**. A present page is always
//!    readable on `x86_64` and `aarch64`, so a request without `READ` is
//!    written as a non-present entry. On riscv the same happens to `W`
//!    without `R` (reserved) and to entries with none of `R`/`W`/`X` (next
//!    level pointers). Such entries keep their remaining bits plus a software
//!    marker where one is needed, so the walker faults on them and decoding
//!    still returns the request.
//! 2. **One memory type**: the hardware gets `DEVICE` when both `DEVICE` and
//!    `UNCACHED` are requested. The `UNCACHED` request survives in a software
//!    bit.
//! 3. **Unsupported bits are dropped**: [`ArchFlags::UNSUPPORTED`] lists the
//!    flags an encoding can never hold. Dropping them is not an error.
//! 4. **The empty set is an unused entry**: it encodes to zero.
//!
//! Under these rules `from_native(to_native(f))` is exactly
//! `f - UNSUPPORTED` for every `f`: a round trip never invents a flag, and
//! the only flags it loses are the fixed per-architecture set.

pub mod aarch64;
pub mod riscv;
pub mod x86_64;

#[cfg(test)]
mod native_test;
#[cfg(test)]
mod riscv_test;

use core::fmt;

use crate::flags::MappingFlags;

use self::aarch64::DescriptorAttr;
use self::riscv::PTEFlags;
use self::x86_64::PageTableFlags;

/// A supported page-table architecture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Arch {
    /// `x86_64` 4-level paging.
    X86_64,
    /// `aarch64` VMSAv8-64 stage 1, 4 KiB granule.
    Aarch64,
    /// riscv Sv39/Sv48.
    Riscv64,
}

impl Arch {
    /// Every supported architecture.
    pub const ALL: [Self; 3] = [Self::X86_64, Self::Aarch64, Self::Riscv64];

    /// The architecture being compiled for, if supported.
    #[inline]
    #[must_use]
    pub const fn current() -> Option<Self> {
        if cfg!(target_arch = "x86_64") {
            Some(Self::X86_64)
        } else if cfg!(target_arch = "aarch64") {
            Some(Self::Aarch64)
        } else if cfg!(target_arch = "riscv64") {
            Some(Self::Riscv64)
        } else {
            None
        }
    }

    /// Flags this architecture's encoding cannot represent.
    #[inline]
    #[must_use]
    pub const fn unsupported(self) -> MappingFlags {
        match self {
            Self::X86_64 => <PageTableFlags as ArchFlags>::UNSUPPORTED,
            Self::Aarch64 => <DescriptorAttr as ArchFlags>::UNSUPPORTED,
            Self::Riscv64 => <PTEFlags as ArchFlags>::UNSUPPORTED,
        }
    }

    /// Short lowercase name.
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::X86_64 => "x86_64",
            Self::Aarch64 => "aarch64",
            Self::Riscv64 => "riscv64",
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A hardware flag encoding for one architecture.
///
/// Both conversions are total and deterministic.
pub trait ArchFlags: Copy + Sized {
    /// The architecture this encoding belongs to.
    const ARCH: Arch;

    /// Flags this encoding never represents; `to_native` drops them.
    const UNSUPPORTED: MappingFlags;

    /// Encode generic flags into the native layout.
    fn to_native(flags: MappingFlags) -> Self;

    /// Decode a native value, ignoring bits with no generic meaning.
    fn from_native(native: Self) -> MappingFlags;

    /// Whether the hardware walker treats this value as a live mapping.
    fn is_present(self) -> bool;

    /// The raw bit pattern written into an entry.
    fn raw_bits(self) -> u64;

    /// Reinterpret a raw entry value, keeping only defined flag bits.
    fn from_raw_bits(bits: u64) -> Self;
}

/// A native flag value tagged with its architecture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NativeFlags {
    /// `x86_64` page-table flags.
    X86_64(PageTableFlags),
    /// `aarch64` descriptor attributes.
    Aarch64(DescriptorAttr),
    /// riscv PTE flags.
    Riscv(PTEFlags),
}

impl NativeFlags {
    /// Encode `flags` for `arch`.
    #[must_use]
    pub fn encode(arch: Arch, flags: MappingFlags) -> Self {
        let native = match arch {
            Arch::X86_64 => Self::X86_64(PageTableFlags::to_native(flags)),
            Arch::Aarch64 => Self::Aarch64(DescriptorAttr::to_native(flags)),
            Arch::Riscv64 => Self::Riscv(PTEFlags::to_native(flags)),
        };
        let dropped = flags.difference(native.decode());
        if !dropped.is_empty() {
            tracing::trace!(%arch, ?dropped, "dropping flags without a native encoding");
        }
        if !flags.is_empty() && !native.is_present() {
            tracing::trace!(%arch, ?flags, "no live encoding, writing a non-present entry");
        }
        native
    }

    /// Decode back into generic flags.
    #[must_use]
    pub fn decode(self) -> MappingFlags {
        match self {
            Self::X86_64(native) => PageTableFlags::from_native(native),
            Self::Aarch64(native) => DescriptorAttr::from_native(native),
            Self::Riscv(native) => PTEFlags::from_native(native),
        }
    }

    /// Reinterpret a raw entry value for `arch`.
    #[must_use]
    pub fn from_bits(arch: Arch, bits: u64) -> Self {
        match arch {
            Arch::X86_64 => Self::X86_64(PageTableFlags::from_raw_bits(bits)),
            Arch::Aarch64 => Self::Aarch64(DescriptorAttr::from_raw_bits(bits)),
            Arch::Riscv64 => Self::Riscv(PTEFlags::from_raw_bits(bits)),
        }
    }

    /// Whether the hardware walker treats this value as a live mapping.
    #[must_use]
    pub fn is_present(self) -> bool {
        match self {
            Self::X86_64(native) => native.is_present(),
            Self::Aarch64(native) => native.is_present(),
            Self::Riscv(native) => native.is_present(),
        }
    }

    /// The architecture this value is encoded for.
    #[inline]
    #[must_use]
    pub const fn arch(self) -> Arch {
        match self {
            Self::X86_64(_) => Arch::X86_64,
            Self::Aarch64(_) => Arch::Aarch64,
            Self::Riscv(_) => Arch::Riscv64,
        }
    }

    /// The raw bit pattern.
    #[must_use]
    pub fn bits(self) -> u64 {
        match self {
            Self::X86_64(native) => native.raw_bits(),
            Self::Aarch64(native) => native.raw_bits(),
            Self::Riscv(native) => native.raw_bits(),
        }
    }
}

impl From<NativeFlags> for MappingFlags {
    fn from(native: NativeFlags) -> Self {
        native.decode()
    }
}

/// Flag encoding of the compilation target.
#[cfg(target_arch = "x86_64")]
pub type ActiveFlags = PageTableFlags;
/// Page-table entry of the compilation target.
#[cfg(target_arch = "x86_64")]
pub type ActivePte = x86_64::X64Pte;

/// Flag encoding of the compilation target.
#[cfg(target_arch = "aarch64")]
pub type ActiveFlags = DescriptorAttr;
/// Page-table entry of the compilation target.
#[cfg(target_arch = "aarch64")]
pub type ActivePte = aarch64::A64Pte;

/// Flag encoding of the compilation target.
#[cfg(target_arch = "riscv64")]
pub type ActiveFlags = PTEFlags;
/// Page-table entry of the compilation target.
#[cfg(target_arch = "riscv64")]
pub type ActivePte = riscv::Rv64Pte;
