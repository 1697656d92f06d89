// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Escape hatch between the virtual and physical address spaces.
//!
//! [`VirtAddr`] and [`PhysAddr`] deliberately have no conversion between
//! them. The address-space manager still needs one for identity-mapped
//! regions (early boot, MMIO windows mapped one-to-one), and these two
//! functions are it. Each call site is a claim that the region is identity
//! mapped; grep for this module to audit them.

use crate::addr::{PhysAddr, VirtAddr};

/// The virtual address at which an identity-mapped `paddr` is visible.
#[inline]
#[must_use]
pub const fn virt_of_identity(paddr: PhysAddr) -> VirtAddr {
    VirtAddr::new(paddr.as_usize())
}

/// The physical address backing an identity-mapped `vaddr`.
#[inline]
#[must_use]
pub const fn phys_of_identity(vaddr: VirtAddr) -> PhysAddr {
    PhysAddr::new(vaddr.as_usize())
}
