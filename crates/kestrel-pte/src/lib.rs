// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Page-table-entry flags for the Kestrel kernel.
//!
//! The address-space manager describes mappings with [`MappingFlags`] and
//! never touches hardware bits. The [`arch`] adapters translate those flags
//! into the native encodings of `x86_64`, `aarch64`, and riscv, and the
//! [`GenericPte`] implementations pack them together with a physical address
//! into a complete entry.
//!
//! An adapter may drop a flag the hardware cannot express, but it never adds
//! one. See [`arch`] for the rules.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

pub mod arch;
pub mod flags;
pub mod pte;
pub mod region;

#[cfg(test)]
mod pte_test;
#[cfg(test)]
mod region_test;

pub use arch::aarch64::{A64Pte, DescriptorAttr, MemAttr};
pub use arch::riscv::{PTEFlags, Rv64Pte};
pub use arch::x86_64::{PageTableFlags, X64Pte};
pub use arch::{Arch, ArchFlags, NativeFlags};
#[cfg(any(target_arch = "x86_64", target_arch = "aarch64", target_arch = "riscv64"))]
pub use arch::{ActiveFlags, ActivePte};
pub use flags::{MappingFlags, MemoryType};
pub use pte::GenericPte;
pub use region::{MemRegion, MemRegionFlags};
