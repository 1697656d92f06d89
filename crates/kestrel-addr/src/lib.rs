// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Typed physical and virtual addresses.
//!
//! This crate provides the address vocabulary shared by the mapping code:
//! - [`VirtAddr`] and [`PhysAddr`], distinct newtypes over a machine word
//! - Alignment helpers on raw `usize` values
//! - [`PageSize`] and the 4 KiB page constants
//! - [`AddrWidth`] and [`RangePolicy`] for range-checked construction
//!
//! # Design Principles
//!
//! - **No implicit mixing**: `VirtAddr` and `PhysAddr` never compare or
//!   convert to each other. The only bridge is [`reinterpret`].
//! - **Pure values**: every operation returns a new address.
//! - **Host-testable**: no target-specific code beyond width selection.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

mod addr;
mod align;
mod page;
pub mod reinterpret;
mod width;

#[cfg(test)]
mod align_test;

pub use addr::{PhysAddr, VirtAddr};
pub use align::{align_down, align_offset, align_up, is_aligned};
pub use page::{PAGE_SHIFT_4K, PAGE_SIZE_4K, PageSize};
pub use width::{AddrError, AddrWidth, RangePolicy};

static_assertions::assert_eq_size!(VirtAddr, usize);
static_assertions::assert_eq_size!(PhysAddr, usize);
static_assertions::const_assert!(PAGE_SIZE_4K.is_power_of_two());
