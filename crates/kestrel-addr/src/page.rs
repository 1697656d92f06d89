// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Page sizes shared by all supported architectures.

/// Standard page size (4 KiB).
pub const PAGE_SIZE_4K: usize = 0x1000;

/// Page size shift (log2 of `PAGE_SIZE_4K`).
pub const PAGE_SHIFT_4K: u32 = 12;

/// Size of a leaf mapping.
///
/// All three supported architectures use 4 KiB base pages with 2 MiB and
/// 1 GiB block mappings one and two levels up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(usize)]
pub enum PageSize {
    /// 4 KiB base page.
    Size4K = 0x1000,
    /// 2 MiB block.
    Size2M = 0x20_0000,
    /// 1 GiB block.
    Size1G = 0x4000_0000,
}

impl PageSize {
    /// Size in bytes.
    #[inline]
    #[must_use]
    pub const fn bytes(self) -> usize {
        self as usize
    }

    /// log2 of the size in bytes.
    #[inline]
    #[must_use]
    pub const fn shift(self) -> u32 {
        self.bytes().trailing_zeros()
    }

    /// Returns true for block mappings larger than a base page.
    #[inline]
    #[must_use]
    pub const fn is_huge(self) -> bool {
        !matches!(self, Self::Size4K)
    }

    /// Check whether `addr` is aligned to this page size.
    #[inline]
    #[must_use]
    pub const fn is_aligned(self, addr: usize) -> bool {
        addr & (self.bytes() - 1) == 0
    }

    /// Offset of `addr` within its page of this size.
    #[inline]
    #[must_use]
    pub const fn page_offset(self, addr: usize) -> usize {
        addr & (self.bytes() - 1)
    }
}

impl From<PageSize> for usize {
    fn from(size: PageSize) -> Self {
        size.bytes()
    }
}
