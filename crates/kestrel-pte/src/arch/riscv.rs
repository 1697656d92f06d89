// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! riscv Sv39/Sv48 page-table entry flags.
//!
//! Without the Svpbmt extension the entry carries no memory type, so
//! `DEVICE` and `UNCACHED` are left to the platform's PMAs and dropped here.
//!
//! `W` without `R` is a reserved encoding, and an entry with none of
//! `R`/`W`/`X` is a pointer to the next level. Requests that would produce
//! either keep their bits but leave `V` clear, so the walker faults on them
//! and decoding still returns what was asked for.

use core::fmt;

use bitflags::bitflags;
use kestrel_addr::PhysAddr;

use super::{Arch, ArchFlags};
use crate::flags::MappingFlags;
use crate::pte::GenericPte;

bitflags! {
    /// Flag bits of a riscv page-table entry.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct PTEFlags: u64 {
        /// Valid.
        const V   = 1 << 0;
        /// Readable.
        const R   = 1 << 1;
        /// Writable.
        const W   = 1 << 2;
        /// Executable.
        const X   = 1 << 3;
        /// Accessible in U-mode.
        const U   = 1 << 4;
        /// Global mapping.
        const G   = 1 << 5;
        /// Accessed.
        const A   = 1 << 6;
        /// Dirty.
        const D   = 1 << 7;
        /// Reserved for supervisor software.
        const RSW = 0b11 << 8;
    }
}

impl ArchFlags for PTEFlags {
    const ARCH: Arch = Arch::Riscv64;
    const UNSUPPORTED: MappingFlags = MappingFlags::DEVICE.union(MappingFlags::UNCACHED);

    fn to_native(flags: MappingFlags) -> Self {
        let mut native = Self::empty();
        if flags.contains(MappingFlags::READ) {
            native |= Self::R;
        }
        if flags.contains(MappingFlags::WRITE) {
            native |= Self::W;
        }
        if flags.contains(MappingFlags::EXECUTE) {
            native |= Self::X;
        }
        if flags.contains(MappingFlags::USER) {
            native |= Self::U;
        }
        if flags.contains(MappingFlags::GLOBAL) {
            native |= Self::G;
        }
        if flags.contains(MappingFlags::ACCESSED) {
            native |= Self::A;
        }
        if flags.contains(MappingFlags::DIRTY) {
            native |= Self::D;
        }
        if native.is_leaf() {
            native |= Self::V;
        }
        native
    }

    fn from_native(native: Self) -> MappingFlags {
        let mut flags = MappingFlags::empty();
        if native.contains(Self::R) {
            flags |= MappingFlags::READ;
        }
        if native.contains(Self::W) {
            flags |= MappingFlags::WRITE;
        }
        if native.contains(Self::X) {
            flags |= MappingFlags::EXECUTE;
        }
        if native.contains(Self::U) {
            flags |= MappingFlags::USER;
        }
        if native.contains(Self::G) {
            flags |= MappingFlags::GLOBAL;
        }
        if native.contains(Self::A) {
            flags |= MappingFlags::ACCESSED;
        }
        if native.contains(Self::D) {
            flags |= MappingFlags::DIRTY;
        }
        flags
    }

    fn is_present(self) -> bool {
        self.contains(Self::V)
    }

    fn raw_bits(self) -> u64 {
        self.bits()
    }

    fn from_raw_bits(bits: u64) -> Self {
        Self::from_bits_truncate(bits)
    }
}

impl PTEFlags {
    /// Whether `R`/`W`/`X` form a leaf the walker accepts.
    #[must_use]
    pub const fn is_leaf(self) -> bool {
        self.intersects(Self::R.union(Self::X))
            && (self.contains(Self::R) || !self.contains(Self::W))
    }
}

impl From<MappingFlags> for PTEFlags {
    fn from(flags: MappingFlags) -> Self {
        Self::to_native(flags)
    }
}

impl From<PTEFlags> for MappingFlags {
    fn from(native: PTEFlags) -> Self {
        PTEFlags::from_native(native)
    }
}

/// A riscv Sv39/Sv48 page-table entry.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Rv64Pte(u64);

impl Rv64Pte {
    /// PPN field, bits 10..54.
    const PPN_MASK: u64 = 0x003f_ffff_ffff_fc00;
    const PPN_SHIFT: u32 = 10;
    const PAGE_SHIFT: u32 = 12;

    /// An unused entry.
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Reinterpret a raw entry.
    #[inline]
    #[must_use]
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    /// The native flag bits of this entry.
    #[inline]
    #[must_use]
    pub const fn native_flags(self) -> PTEFlags {
        PTEFlags::from_bits_truncate(self.0)
    }

    const fn ppn_bits(paddr: PhysAddr) -> u64 {
        ((paddr.as_usize() as u64 >> Self::PAGE_SHIFT) << Self::PPN_SHIFT) & Self::PPN_MASK
    }
}

impl GenericPte for Rv64Pte {
    fn new_page(paddr: PhysAddr, flags: MappingFlags, _is_huge: bool) -> Self {
        Self(PTEFlags::to_native(flags).bits() | Self::ppn_bits(paddr))
    }

    fn new_table(paddr: PhysAddr) -> Self {
        Self(PTEFlags::V.bits() | Self::ppn_bits(paddr))
    }

    fn paddr(&self) -> PhysAddr {
        PhysAddr::new((((self.0 & Self::PPN_MASK) >> Self::PPN_SHIFT) << Self::PAGE_SHIFT) as usize)
    }

    fn flags(&self) -> MappingFlags {
        PTEFlags::from_native(self.native_flags())
    }

    fn set_paddr(&mut self, paddr: PhysAddr) {
        self.0 = (self.0 & !Self::PPN_MASK) | Self::ppn_bits(paddr);
    }

    fn set_flags(&mut self, flags: MappingFlags, _is_huge: bool) {
        self.0 = (self.0 & Self::PPN_MASK) | PTEFlags::to_native(flags).bits();
    }

    fn bits(self) -> u64 {
        self.0
    }

    fn is_unused(&self) -> bool {
        self.0 == 0
    }

    fn is_present(&self) -> bool {
        ArchFlags::is_present(self.native_flags())
    }

    /// Any valid leaf above the last level is a huge page.
    fn is_huge(&self) -> bool {
        let native = self.native_flags();
        native.contains(PTEFlags::V) && native.is_leaf()
    }

    fn clear(&mut self) {
        self.0 = 0;
    }
}

impl fmt::Debug for Rv64Pte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rv64Pte")
            .field("raw", &format_args!("{:#x}", self.0))
            .field("paddr", &self.paddr())
            .field("flags", &self.native_flags())
            .finish()
    }
}
