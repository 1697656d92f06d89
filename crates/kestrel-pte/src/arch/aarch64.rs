// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! `aarch64` stage 1 descriptor attributes (VMSAv8-64, 4 KiB granule).
//!
//! The memory type is an index into `MAIR_EL1`. The kernel programs the
//! register with [`MemAttr::MAIR_VALUE`] so that the indices used here mean
//! what [`MemAttr`] says they mean.
//!
//! Execute permission is split by privilege level. A user page is never
//! executable at EL1 and a kernel page never at EL0, so `EXECUTE` clears
//! `UXN` on user pages and `PXN` on kernel pages while the other bit stays
//! set.
//!
//! There is no software-visible dirty bit without `DBM` hardware support,
//! so `DIRTY` is not represented.
//!
//! An invalid descriptor is ignored by the walker apart from bit 0, so a
//! request without `READ` is kept in an invalid descriptor tagged with
//! [`DescriptorAttr::SW_PARKED`]. [`DescriptorAttr::SW_UNCACHED`] remembers
//! an `UNCACHED` request that `DEVICE` overrode.

use core::fmt;

use bitflags::bitflags;
use kestrel_addr::PhysAddr;

use super::{Arch, ArchFlags};
use crate::flags::{MappingFlags, MemoryType};
use crate::pte::GenericPte;

bitflags! {
    /// Attribute bits of an `aarch64` translation table descriptor.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct DescriptorAttr: u64 {
        /// The descriptor is valid.
        const VALID         = 1 << 0;
        /// Table descriptor (levels 0-2) or page descriptor (level 3).
        const NON_BLOCK     = 1 << 1;
        /// `MAIR_EL1` attribute index.
        const ATTR_INDX     = 0b111 << 2;
        /// Non-secure output address.
        const NS            = 1 << 5;
        /// EL0 may access the page.
        const AP_EL0        = 1 << 6;
        /// Read-only.
        const AP_RO         = 1 << 7;
        /// Shareability, low bit.
        const INNER         = 1 << 8;
        /// Shareability, high bit.
        const SHAREABLE     = 1 << 9;
        /// Access flag.
        const AF            = 1 << 10;
        /// Not global: the entry is tagged with the current ASID.
        const NG            = 1 << 11;
        /// Dirty bit modifier.
        const DBM           = 1 << 51;
        /// Part of a contiguous run of entries.
        const CONTIGUOUS    = 1 << 52;
        /// No execution at EL1.
        const PXN           = 1 << 53;
        /// No execution at EL0.
        const UXN           = 1 << 54;
        /// Software: invalid descriptor holding an unreadable mapping.
        const SW_PARKED     = 1 << 55;
        /// Software: `UNCACHED` was requested together with `DEVICE`.
        const SW_UNCACHED   = 1 << 56;

        /// Table descriptors: no EL1 execution below.
        const PXN_TABLE         = 1 << 59;
        /// Table descriptors: no EL0 execution below.
        const XN_TABLE          = 1 << 60;
        /// Table descriptors: no EL0 access below.
        const AP_NO_EL0_TABLE   = 1 << 61;
        /// Table descriptors: no writes below.
        const AP_NO_WRITE_TABLE = 1 << 62;
        /// Table descriptors: non-secure below.
        const NS_TABLE          = 1 << 63;
    }
}

/// `MAIR_EL1` attribute slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u64)]
pub enum MemAttr {
    /// Device-nGnRE.
    Device = 0,
    /// Normal, inner and outer write-back.
    Normal = 1,
    /// Normal, inner and outer non-cacheable.
    NormalNonCacheable = 2,
}

impl MemAttr {
    /// `MAIR_EL1` value matching the slot numbering above.
    pub const MAIR_VALUE: u64 = 0x0044_ff04;

    const fn from_index(index: u64) -> Option<Self> {
        match index {
            0 => Some(Self::Device),
            1 => Some(Self::Normal),
            2 => Some(Self::NormalNonCacheable),
            _ => None,
        }
    }
}

impl From<MemoryType> for MemAttr {
    fn from(ty: MemoryType) -> Self {
        match ty {
            MemoryType::Normal => Self::Normal,
            MemoryType::Uncached => Self::NormalNonCacheable,
            MemoryType::Device => Self::Device,
        }
    }
}

impl DescriptorAttr {
    const ATTR_INDX_SHIFT: u32 = 2;

    /// Attribute bits selecting `attr`, including its shareability.
    #[must_use]
    pub const fn from_mem_attr(attr: MemAttr) -> Self {
        let mut bits = (attr as u64) << Self::ATTR_INDX_SHIFT;
        match attr {
            MemAttr::Normal => bits |= Self::INNER.bits() | Self::SHAREABLE.bits(),
            MemAttr::NormalNonCacheable => bits |= Self::SHAREABLE.bits(),
            MemAttr::Device => {}
        }
        Self::from_bits_retain(bits)
    }

    /// The memory attribute selected by `ATTR_INDX`, if it is one we program.
    #[must_use]
    pub const fn mem_attr(self) -> Option<MemAttr> {
        MemAttr::from_index((self.bits() & Self::ATTR_INDX.bits()) >> Self::ATTR_INDX_SHIFT)
    }
}

impl ArchFlags for DescriptorAttr {
    const ARCH: Arch = Arch::Aarch64;
    const UNSUPPORTED: MappingFlags = MappingFlags::DIRTY;

    fn to_native(flags: MappingFlags) -> Self {
        let flags = flags.difference(Self::UNSUPPORTED);
        if flags.is_empty() {
            return Self::empty();
        }

        // Every valid descriptor is readable at its privilege level.
        let mut native = if flags.contains(MappingFlags::READ) {
            Self::VALID
        } else {
            Self::SW_PARKED
        };
        native |= Self::from_mem_attr(flags.memory_type().into());
        if flags.contains(MappingFlags::DEVICE | MappingFlags::UNCACHED) {
            native |= Self::SW_UNCACHED;
        }
        if !flags.contains(MappingFlags::WRITE) {
            native |= Self::AP_RO;
        }
        let execute = flags.contains(MappingFlags::EXECUTE);
        if flags.contains(MappingFlags::USER) {
            native |= Self::AP_EL0 | Self::PXN;
            if !execute {
                native |= Self::UXN;
            }
        } else {
            native |= Self::UXN;
            if !execute {
                native |= Self::PXN;
            }
        }
        if flags.contains(MappingFlags::ACCESSED) {
            native |= Self::AF;
        }
        if !flags.contains(MappingFlags::GLOBAL) {
            native |= Self::NG;
        }
        native
    }

    fn from_native(native: Self) -> MappingFlags {
        let mut flags = if native.contains(Self::VALID) {
            MappingFlags::READ
        } else if native.contains(Self::SW_PARKED) {
            MappingFlags::empty()
        } else {
            return MappingFlags::empty();
        };
        if !native.contains(Self::AP_RO) {
            flags |= MappingFlags::WRITE;
        }
        if native.contains(Self::AP_EL0) {
            flags |= MappingFlags::USER;
            if !native.contains(Self::UXN) {
                flags |= MappingFlags::EXECUTE;
            }
        } else if !native.contains(Self::PXN) {
            flags |= MappingFlags::EXECUTE;
        }
        match native.mem_attr() {
            Some(MemAttr::Device) => {
                flags |= MappingFlags::DEVICE;
                if native.contains(Self::SW_UNCACHED) {
                    flags |= MappingFlags::UNCACHED;
                }
            }
            Some(MemAttr::NormalNonCacheable) => flags |= MappingFlags::UNCACHED,
            Some(MemAttr::Normal) | None => {}
        }
        if native.contains(Self::AF) {
            flags |= MappingFlags::ACCESSED;
        }
        if !native.contains(Self::NG) {
            flags |= MappingFlags::GLOBAL;
        }
        flags
    }

    fn is_present(self) -> bool {
        self.contains(Self::VALID)
    }

    fn raw_bits(self) -> u64 {
        self.bits()
    }

    fn from_raw_bits(bits: u64) -> Self {
        Self::from_bits_truncate(bits)
    }
}

impl From<MappingFlags> for DescriptorAttr {
    fn from(flags: MappingFlags) -> Self {
        Self::to_native(flags)
    }
}

impl From<DescriptorAttr> for MappingFlags {
    fn from(native: DescriptorAttr) -> Self {
        DescriptorAttr::from_native(native)
    }
}

/// An `aarch64` translation table descriptor.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct A64Pte(u64);

impl A64Pte {
    /// Output address bits 12..48.
    const PHYS_ADDR_MASK: u64 = 0x0000_ffff_ffff_f000;

    /// An unused descriptor.
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Reinterpret a raw descriptor.
    #[inline]
    #[must_use]
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    /// The attribute bits of this descriptor.
    #[inline]
    #[must_use]
    pub const fn native_flags(self) -> DescriptorAttr {
        DescriptorAttr::from_bits_truncate(self.0)
    }

    const fn addr_bits(paddr: PhysAddr) -> u64 {
        paddr.as_usize() as u64 & Self::PHYS_ADDR_MASK
    }

    /// Block descriptors leave `NON_BLOCK` clear; level 3 pages need it set.
    fn leaf_flags(flags: MappingFlags, is_huge: bool) -> DescriptorAttr {
        let mut native = DescriptorAttr::to_native(flags);
        if !is_huge {
            native |= DescriptorAttr::NON_BLOCK;
        }
        native
    }
}

impl GenericPte for A64Pte {
    fn new_page(paddr: PhysAddr, flags: MappingFlags, is_huge: bool) -> Self {
        Self(Self::leaf_flags(flags, is_huge).bits() | Self::addr_bits(paddr))
    }

    fn new_table(paddr: PhysAddr) -> Self {
        let native = DescriptorAttr::VALID | DescriptorAttr::NON_BLOCK;
        Self(native.bits() | Self::addr_bits(paddr))
    }

    fn paddr(&self) -> PhysAddr {
        PhysAddr::new((self.0 & Self::PHYS_ADDR_MASK) as usize)
    }

    fn flags(&self) -> MappingFlags {
        DescriptorAttr::from_native(self.native_flags())
    }

    fn set_paddr(&mut self, paddr: PhysAddr) {
        self.0 = (self.0 & !Self::PHYS_ADDR_MASK) | Self::addr_bits(paddr);
    }

    fn set_flags(&mut self, flags: MappingFlags, is_huge: bool) {
        self.0 = (self.0 & Self::PHYS_ADDR_MASK) | Self::leaf_flags(flags, is_huge).bits();
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

    fn is_huge(&self) -> bool {
        let native = self.native_flags();
        native.contains(DescriptorAttr::VALID) && !native.contains(DescriptorAttr::NON_BLOCK)
    }

    fn clear(&mut self) {
        self.0 = 0;
    }
}

impl fmt::Debug for A64Pte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("A64Pte")
            .field("raw", &format_args!("{:#x}", self.0))
            .field("paddr", &self.paddr())
            .field("attr", &self.native_flags())
            .finish()
    }
}
