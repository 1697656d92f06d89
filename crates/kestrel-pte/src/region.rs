// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Physical memory map entries.

use bitflags::bitflags;
use kestrel_addr::PhysAddr;

use crate::flags::MappingFlags;

bitflags! {
    /// Properties of a region in the platform's physical memory map.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct MemRegionFlags: usize {
        /// Readable.
        const READ     = 1 << 0;
        /// Writable.
        const WRITE    = 1 << 1;
        /// Executable.
        const EXECUTE  = 1 << 2;
        /// Device MMIO.
        const DEVICE   = 1 << 4;
        /// Uncached normal memory.
        const UNCACHED = 1 << 5;
        /// Reserved by firmware or the kernel image.
        const RESERVED = 1 << 6;
        /// Available to the frame allocator.
        const FREE     = 1 << 7;
    }
}

impl From<MemRegionFlags> for MappingFlags {
    fn from(region: MemRegionFlags) -> Self {
        let mut flags = Self::empty();
        if region.contains(MemRegionFlags::READ) {
            flags |= Self::READ;
        }
        if region.contains(MemRegionFlags::WRITE) {
            flags |= Self::WRITE;
        }
        if region.contains(MemRegionFlags::EXECUTE) {
            flags |= Self::EXECUTE;
        }
        if region.contains(MemRegionFlags::DEVICE) {
            flags |= Self::DEVICE;
        }
        if region.contains(MemRegionFlags::UNCACHED) {
            flags |= Self::UNCACHED;
        }
        flags
    }
}

/// A contiguous range of physical memory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MemRegion {
    /// Start address.
    pub paddr: PhysAddr,
    /// Size in bytes.
    pub size: usize,
    /// Region properties.
    pub flags: MemRegionFlags,
    /// Human-readable name, for logs.
    pub name: &'static str,
}

impl MemRegion {
    /// Create a region description.
    #[must_use]
    pub const fn new(paddr: PhysAddr, size: usize, flags: MemRegionFlags, name: &'static str) -> Self {
        Self {
            paddr,
            size,
            flags,
            name,
        }
    }

    /// One past the last byte, or `None` if the region wraps the address space.
    #[must_use]
    pub const fn end(&self) -> Option<PhysAddr> {
        self.paddr.checked_add(self.size)
    }

    /// Whether `paddr` falls inside this region.
    #[must_use]
    pub const fn contains(&self, paddr: PhysAddr) -> bool {
        paddr.as_usize() >= self.paddr.as_usize()
            && paddr.as_usize() - self.paddr.as_usize() < self.size
    }

    /// The flags a kernel mapping of this region should carry.
    #[must_use]
    pub fn mapping_flags(&self) -> MappingFlags {
        self.flags.into()
    }

    /// Whether the frame allocator may hand out this region.
    #[must_use]
    pub const fn is_free(&self) -> bool {
        self.flags.contains(MemRegionFlags::FREE) && !self.flags.contains(MemRegionFlags::RESERVED)
    }
}
