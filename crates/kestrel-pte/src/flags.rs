// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Architecture-independent mapping flags.
//!
//! This is the only permission vocabulary the address-space manager uses.
//! Bit positions are private to this crate; the hardware layouts live in
//! [`crate::arch`].

use bitflags::bitflags;

bitflags! {
    /// Permissions and attributes of a mapped memory region.
    ///
    /// Flag sets are combined with set algebra (`union`, `intersection`,
    /// `difference`), never by poking at bits.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct MappingFlags: usize {
        /// The memory is readable.
        const READ     = 1 << 0;
        /// The memory is writable.
        const WRITE    = 1 << 1;
        /// The memory is executable.
        const EXECUTE  = 1 << 2;
        /// The memory is accessible from user mode.
        const USER     = 1 << 3;
        /// The memory is device memory (strongly ordered, uncached).
        const DEVICE   = 1 << 4;
        /// The memory is normal memory with caching disabled.
        const UNCACHED = 1 << 5;
        /// The mapping is shared by all address spaces (not flushed on switch).
        const GLOBAL   = 1 << 6;
        /// The mapping has been accessed.
        const ACCESSED = 1 << 7;
        /// The mapping has been written to.
        const DIRTY    = 1 << 8;
    }
}

/// Memory type requested by a set of [`MappingFlags`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MemoryType {
    /// Normal cacheable memory.
    Normal,
    /// Normal memory with caching disabled.
    Uncached,
    /// Device memory.
    Device,
}

impl MappingFlags {
    /// Read, write, and execute permissions.
    pub const ACCESS: Self = Self::READ.union(Self::WRITE).union(Self::EXECUTE);

    /// Read-only data.
    pub const RO: Self = Self::READ;

    /// Read-write data.
    pub const RW: Self = Self::READ.union(Self::WRITE);

    /// Code.
    pub const RX: Self = Self::READ.union(Self::EXECUTE);

    /// Check whether every flag in `self` is also in `other`.
    #[inline]
    #[must_use]
    pub const fn is_subset_of(self, other: Self) -> bool {
        other.contains(self)
    }

    /// Check whether the flags grant any kind of access.
    #[inline]
    #[must_use]
    pub const fn is_accessible(self) -> bool {
        self.intersects(Self::ACCESS)
    }

    /// The memory type these flags request.
    ///
    /// `DEVICE` takes precedence over `UNCACHED`.
    #[inline]
    #[must_use]
    pub const fn memory_type(self) -> MemoryType {
        if self.contains(Self::DEVICE) {
            MemoryType::Device
        } else if self.contains(Self::UNCACHED) {
            MemoryType::Uncached
        } else {
            MemoryType::Normal
        }
    }
}

impl From<MemoryType> for MappingFlags {
    fn from(ty: MemoryType) -> Self {
        match ty {
            MemoryType::Normal => Self::empty(),
            MemoryType::Uncached => Self::UNCACHED,
            MemoryType::Device => Self::DEVICE,
        }
    }
}
