// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Architecture-independent view of a page-table entry.

use core::fmt;

use kestrel_addr::PhysAddr;

use crate::flags::MappingFlags;

/// A single page-table entry of some architecture.
///
/// Implementations pack a physical address and a flag set into one machine
/// word. Flags go through the architecture's [`ArchFlags`] adapter, so the
/// same lossy-but-never-inventing rules apply to `flags()`.
///
/// [`ArchFlags`]: crate::arch::ArchFlags
pub trait GenericPte: fmt::Debug + Clone + Copy + Send + Sync + Sized {
    /// Create a leaf entry mapping `paddr`.
    ///
    /// `is_huge` selects a block mapping above the last level.
    fn new_page(paddr: PhysAddr, flags: MappingFlags, is_huge: bool) -> Self;

    /// Create an entry pointing at the next-level table at `paddr`.
    fn new_table(paddr: PhysAddr) -> Self;

    /// The physical address this entry points at.
    fn paddr(&self) -> PhysAddr;

    /// The generic flags this entry encodes.
    fn flags(&self) -> MappingFlags;

    /// Replace the physical address, keeping the flags.
    fn set_paddr(&mut self, paddr: PhysAddr);

    /// Replace the flags, keeping the physical address.
    fn set_flags(&mut self, flags: MappingFlags, is_huge: bool);

    /// The raw entry value.
    fn bits(self) -> u64;

    /// Whether the entry is all zeroes.
    fn is_unused(&self) -> bool;

    /// Whether the hardware considers the entry valid.
    fn is_present(&self) -> bool;

    /// Whether the entry maps a huge page. Meaningless at the last level.
    fn is_huge(&self) -> bool;

    /// Reset to an unused entry.
    fn clear(&mut self);
}
