// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! `x86_64` page-table flags.
//!
//! 4-level paging with 4 KiB pages. The entry layout is identical at every
//! level; `HUGE_PAGE` turns a PDPT or PD entry into a 1 GiB or 2 MiB leaf.
//!
//! Memory type is selected through the legacy PAT slots reached by the
//! `WRITE_THROUGH`/`NO_CACHE` pair:
//!
//! | `NO_CACHE` | `WRITE_THROUGH` | Memory type       |
//! |------------|-----------------|-------------------|
//! | 0          | 0               | write-back        |
//! | 1          | 0               | UC- (uncached)    |
//! | 1          | 1               | UC (device)       |
//!
//! Software bits keep the round trip exact where the hardware has no room:
//! [`PageTableFlags::SW_PARKED`] marks a non-present entry that still holds a
//! request, and [`PageTableFlags::SW_UNCACHED`] remembers an `UNCACHED`
//! request that `DEVICE` overrode.

use core::fmt;

use bitflags::bitflags;
use kestrel_addr::PhysAddr;

use super::{Arch, ArchFlags};
use crate::flags::{MappingFlags, MemoryType};
use crate::pte::GenericPte;

bitflags! {
    /// Flag bits of an `x86_64` page-table entry.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct PageTableFlags: u64 {
        /// The entry is valid.
        const PRESENT         = 1 << 0;
        /// Writes are allowed.
        const WRITABLE        = 1 << 1;
        /// Ring 3 may access the page.
        const USER_ACCESSIBLE = 1 << 2;
        /// Write-through caching.
        const WRITE_THROUGH   = 1 << 3;
        /// Caching disabled.
        const NO_CACHE        = 1 << 4;
        /// Set by hardware on access.
        const ACCESSED        = 1 << 5;
        /// Set by hardware on write.
        const DIRTY           = 1 << 6;
        /// Leaf entry at the PD or PDPT level.
        const HUGE_PAGE       = 1 << 7;
        /// Not flushed from the TLB on CR3 reload.
        const GLOBAL          = 1 << 8;
        /// Software: non-present entry holding an unreadable mapping.
        const SW_PARKED       = 1 << 9;
        /// Software: `UNCACHED` was requested together with `DEVICE`.
        const SW_UNCACHED     = 1 << 10;
        /// Available to software.
        const BIT_11          = 1 << 11;
        /// Instruction fetches are forbidden.
        const NO_EXECUTE      = 1 << 63;
    }
}

impl ArchFlags for PageTableFlags {
    const ARCH: Arch = Arch::X86_64;
    const UNSUPPORTED: MappingFlags = MappingFlags::empty();

    fn to_native(flags: MappingFlags) -> Self {
        if flags.is_empty() {
            return Self::empty();
        }

        // Every present page is readable.
        let mut native = if flags.contains(MappingFlags::READ) {
            Self::PRESENT
        } else {
            Self::SW_PARKED
        };
        if flags.contains(MappingFlags::WRITE) {
            native |= Self::WRITABLE;
        }
        if !flags.contains(MappingFlags::EXECUTE) {
            native |= Self::NO_EXECUTE;
        }
        if flags.contains(MappingFlags::USER) {
            native |= Self::USER_ACCESSIBLE;
        }
        match flags.memory_type() {
            MemoryType::Device => native |= Self::NO_CACHE | Self::WRITE_THROUGH,
            MemoryType::Uncached => native |= Self::NO_CACHE,
            MemoryType::Normal => {}
        }
        if flags.contains(MappingFlags::DEVICE | MappingFlags::UNCACHED) {
            native |= Self::SW_UNCACHED;
        }
        if flags.contains(MappingFlags::GLOBAL) {
            native |= Self::GLOBAL;
        }
        if flags.contains(MappingFlags::ACCESSED) {
            native |= Self::ACCESSED;
        }
        if flags.contains(MappingFlags::DIRTY) {
            native |= Self::DIRTY;
        }
        native
    }

    fn from_native(native: Self) -> MappingFlags {
        let mut flags = if native.contains(Self::PRESENT) {
            MappingFlags::READ
        } else if native.contains(Self::SW_PARKED) {
            MappingFlags::empty()
        } else {
            return MappingFlags::empty();
        };
        if native.contains(Self::WRITABLE) {
            flags |= MappingFlags::WRITE;
        }
        if !native.contains(Self::NO_EXECUTE) {
            flags |= MappingFlags::EXECUTE;
        }
        if native.contains(Self::USER_ACCESSIBLE) {
            flags |= MappingFlags::USER;
        }
        if native.contains(Self::NO_CACHE | Self::WRITE_THROUGH) {
            flags |= MappingFlags::DEVICE;
            if native.contains(Self::SW_UNCACHED) {
                flags |= MappingFlags::UNCACHED;
            }
        } else if native.contains(Self::NO_CACHE) {
            flags |= MappingFlags::UNCACHED;
        }
        if native.contains(Self::GLOBAL) {
            flags |= MappingFlags::GLOBAL;
        }
        if native.contains(Self::ACCESSED) {
            flags |= MappingFlags::ACCESSED;
        }
        if native.contains(Self::DIRTY) {
            flags |= MappingFlags::DIRTY;
        }
        flags
    }

    fn is_present(self) -> bool {
        self.contains(Self::PRESENT)
    }

    fn raw_bits(self) -> u64 {
        self.bits()
    }

    fn from_raw_bits(bits: u64) -> Self {
        Self::from_bits_truncate(bits)
    }
}

impl From<MappingFlags> for PageTableFlags {
    fn from(flags: MappingFlags) -> Self {
        Self::to_native(flags)
    }
}

impl From<PageTableFlags> for MappingFlags {
    fn from(native: PageTableFlags) -> Self {
        PageTableFlags::from_native(native)
    }
}

/// An `x86_64` page-table entry.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct X64Pte(u64);

impl X64Pte {
    /// Physical address bits 12..52.
    const PHYS_ADDR_MASK: u64 = 0x000f_ffff_ffff_f000;

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
    pub const fn native_flags(self) -> PageTableFlags {
        PageTableFlags::from_bits_truncate(self.0)
    }

    const fn addr_bits(paddr: PhysAddr) -> u64 {
        paddr.as_usize() as u64 & Self::PHYS_ADDR_MASK
    }

    fn leaf_flags(flags: MappingFlags, is_huge: bool) -> PageTableFlags {
        let mut native = PageTableFlags::to_native(flags);
        if is_huge {
            native |= PageTableFlags::HUGE_PAGE;
        }
        native
    }
}

impl GenericPte for X64Pte {
    fn new_page(paddr: PhysAddr, flags: MappingFlags, is_huge: bool) -> Self {
        Self(Self::leaf_flags(flags, is_huge).bits() | Self::addr_bits(paddr))
    }

    fn new_table(paddr: PhysAddr) -> Self {
        // Intermediate entries grant everything; leaves restrict.
        let native = PageTableFlags::PRESENT
            | PageTableFlags::WRITABLE
            | PageTableFlags::USER_ACCESSIBLE;
        Self(native.bits() | Self::addr_bits(paddr))
    }

    fn paddr(&self) -> PhysAddr {
        PhysAddr::new((self.0 & Self::PHYS_ADDR_MASK) as usize)
    }

    fn flags(&self) -> MappingFlags {
        PageTableFlags::from_native(self.native_flags())
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
        self.native_flags().contains(PageTableFlags::HUGE_PAGE)
    }

    fn clear(&mut self) {
        self.0 = 0;
    }
}

impl fmt::Debug for X64Pte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("X64Pte")
            .field("raw", &format_args!("{:#x}", self.0))
            .field("paddr", &self.paddr())
            .field("flags", &self.native_flags())
            .finish()
    }
}
