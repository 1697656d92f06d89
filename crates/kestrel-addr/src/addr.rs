// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Physical and virtual address types.
//!
//! These newtypes prevent accidentally mixing address types at compile time.

use core::fmt;
use core::ops::{Add, Sub};

use crate::align;
use crate::page::PAGE_SIZE_4K;
use crate::width::{AddrError, AddrWidth, RangePolicy};

/// Operations shared by both address types.
///
/// Expanded once per type so that neither type gains an impl mentioning the
/// other.
macro_rules! address_ops {
    ($name:ident) => {
        impl $name {
            /// Create an address from a raw machine word.
            #[inline]
            #[must_use]
            pub const fn new(addr: usize) -> Self {
                Self(addr)
            }

            /// Create a null (zero) address.
            #[inline]
            #[must_use]
            pub const fn null() -> Self {
                Self(0)
            }

            /// Check if this is a null address.
            #[inline]
            #[must_use]
            pub const fn is_null(self) -> bool {
                self.0 == 0
            }

            /// Get the raw address value.
            #[inline]
            #[must_use]
            pub const fn as_usize(self) -> usize {
                self.0
            }

            /// Add an offset to this address, wrapping at the end of the word.
            #[inline]
            #[must_use]
            pub const fn add(self, offset: usize) -> Self {
                Self(self.0.wrapping_add(offset))
            }

            /// Subtract an offset from this address, wrapping at zero.
            #[inline]
            #[must_use]
            pub const fn sub(self, offset: usize) -> Self {
                Self(self.0.wrapping_sub(offset))
            }

            /// Add an offset, returning `None` on overflow.
            #[inline]
            #[must_use]
            pub const fn checked_add(self, offset: usize) -> Option<Self> {
                match self.0.checked_add(offset) {
                    Some(addr) => Some(Self(addr)),
                    None => None,
                }
            }

            /// Subtract an offset, returning `None` on underflow.
            #[inline]
            #[must_use]
            pub const fn checked_sub(self, offset: usize) -> Option<Self> {
                match self.0.checked_sub(offset) {
                    Some(addr) => Some(Self(addr)),
                    None => None,
                }
            }

            /// Calculate the difference between two addresses.
            #[inline]
            #[must_use]
            pub const fn diff(self, other: Self) -> usize {
                self.0.wrapping_sub(other.0)
            }

            /// Align this address down to the given alignment.
            ///
            /// Returns `None` if alignment is zero or not a power of two.
            #[inline]
            #[must_use]
            pub const fn align_down(self, alignment: usize) -> Option<Self> {
                match align::align_down(self.0, alignment) {
                    Some(addr) => Some(Self(addr)),
                    None => None,
                }
            }

            /// Align this address up to the given alignment.
            ///
            /// Returns `None` if alignment is zero or not a power of two, or
            /// if the result would overflow.
            #[inline]
            #[must_use]
            pub const fn align_up(self, alignment: usize) -> Option<Self> {
                match align::align_up(self.0, alignment) {
                    Some(addr) => Some(Self(addr)),
                    None => None,
                }
            }

            /// Offset of this address past the previous `alignment` boundary.
            ///
            /// Returns `None` if alignment is zero or not a power of two.
            #[inline]
            #[must_use]
            pub const fn align_offset(self, alignment: usize) -> Option<usize> {
                align::align_offset(self.0, alignment)
            }

            /// Check if this address is aligned to the given alignment.
            ///
            /// Returns `None` if alignment is zero or not a power of two.
            #[inline]
            #[must_use]
            pub const fn is_aligned(self, alignment: usize) -> Option<bool> {
                align::is_aligned(self.0, alignment)
            }

            /// Align down to a 4 KiB page boundary.
            #[inline]
            #[must_use]
            pub const fn align_down_4k(self) -> Self {
                Self(self.0 & !(PAGE_SIZE_4K - 1))
            }

            /// Align up to a 4 KiB page boundary, `None` on overflow.
            #[inline]
            #[must_use]
            pub const fn align_up_4k(self) -> Option<Self> {
                self.align_up(PAGE_SIZE_4K)
            }

            /// Offset within the containing 4 KiB page.
            #[inline]
            #[must_use]
            pub const fn align_offset_4k(self) -> usize {
                self.0 & (PAGE_SIZE_4K - 1)
            }

            /// Check if this address is 4 KiB aligned.
            #[inline]
            #[must_use]
            pub const fn is_aligned_4k(self) -> bool {
                self.align_offset_4k() == 0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({:#x})"), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{:#x}", self.0)
            }
        }

        impl fmt::LowerHex for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::LowerHex::fmt(&self.0, f)
            }
        }

        impl fmt::UpperHex for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::UpperHex::fmt(&self.0, f)
            }
        }

        impl From<usize> for $name {
            fn from(addr: usize) -> Self {
                Self(addr)
            }
        }

        impl From<$name> for usize {
            fn from(addr: $name) -> Self {
                addr.0
            }
        }

        impl Add<usize> for $name {
            type Output = Self;

            fn add(self, rhs: usize) -> Self::Output {
                self.add(rhs)
            }
        }

        impl Sub<usize> for $name {
            type Output = Self;

            fn sub(self, rhs: usize) -> Self::Output {
                self.sub(rhs)
            }
        }
    };
}

/// A physical memory address (hardware/DMA visible).
///
/// Physical addresses are what the hardware sees. They're used for:
/// - Page table entries
/// - DMA buffer addresses
/// - Device MMIO regions
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct PhysAddr(usize);

address_ops!(PhysAddr);

impl PhysAddr {
    /// Create a physical address, rejecting values beyond the target's
    /// physical address width.
    pub fn try_new(addr: usize) -> Result<Self, AddrError> {
        Self::try_new_in(addr, AddrWidth::ACTIVE)
    }

    /// Create a physical address, rejecting values beyond `width`.
    pub fn try_new_in(addr: usize, width: AddrWidth) -> Result<Self, AddrError> {
        if width.is_valid_phys(addr) {
            return Ok(Self(addr));
        }
        tracing::debug!(addr, bits = width.phys_bits(), "rejecting physical address");
        Err(AddrError::PhysOutOfRange {
            addr,
            bits: width.phys_bits(),
        })
    }

    /// Create a physical address, masking off bits beyond the target's width.
    #[inline]
    #[must_use]
    pub const fn new_truncate(addr: usize) -> Self {
        Self::new_truncate_in(addr, AddrWidth::ACTIVE)
    }

    /// Create a physical address, masking off bits beyond `width`.
    #[inline]
    #[must_use]
    pub const fn new_truncate_in(addr: usize, width: AddrWidth) -> Self {
        Self(width.truncate_phys(addr))
    }

    /// Create a physical address, handling out-of-range values per `policy`.
    pub fn from_raw_in(
        addr: usize,
        width: AddrWidth,
        policy: RangePolicy,
    ) -> Result<Self, AddrError> {
        match policy {
            RangePolicy::Reject => Self::try_new_in(addr, width),
            RangePolicy::Truncate => Ok(Self::new_truncate_in(addr, width)),
        }
    }
}

/// A virtual memory address (CPU visible).
///
/// Virtual addresses are what the CPU sees before MMU translation. They're
/// used for:
/// - Code, stack, and heap pointers
/// - The input side of every page-table walk
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct VirtAddr(usize);

address_ops!(VirtAddr);

impl VirtAddr {
    /// Create a virtual address from a pointer.
    #[inline]
    #[must_use]
    pub fn from_ptr<T>(ptr: *const T) -> Self {
        Self(ptr.addr())
    }

    /// Convert to a raw pointer (for use in unsafe code).
    #[inline]
    #[must_use]
    pub const fn as_ptr<T>(self) -> *const T {
        self.0 as *const T
    }

    /// Convert to a raw mutable pointer (for use in unsafe code).
    #[inline]
    #[must_use]
    pub const fn as_mut_ptr<T>(self) -> *mut T {
        self.0 as *mut T
    }

    /// Create a virtual address, rejecting non-canonical values for the
    /// target's virtual address width.
    pub fn try_new(addr: usize) -> Result<Self, AddrError> {
        Self::try_new_in(addr, AddrWidth::ACTIVE)
    }

    /// Create a virtual address, rejecting values not canonical in `width`.
    pub fn try_new_in(addr: usize, width: AddrWidth) -> Result<Self, AddrError> {
        if width.is_canonical_virt(addr) {
            return Ok(Self(addr));
        }
        tracing::debug!(addr, bits = width.virt_bits(), "rejecting non-canonical virtual address");
        Err(AddrError::NonCanonical {
            addr,
            bits: width.virt_bits(),
        })
    }

    /// Create a virtual address, sign-extending from the target's width.
    #[inline]
    #[must_use]
    pub const fn new_truncate(addr: usize) -> Self {
        Self::new_truncate_in(addr, AddrWidth::ACTIVE)
    }

    /// Create a virtual address, sign-extending from `width`.
    #[inline]
    #[must_use]
    pub const fn new_truncate_in(addr: usize, width: AddrWidth) -> Self {
        Self(width.canonicalize_virt(addr))
    }

    /// Create a virtual address, handling non-canonical values per `policy`.
    pub fn from_raw_in(
        addr: usize,
        width: AddrWidth,
        policy: RangePolicy,
    ) -> Result<Self, AddrError> {
        match policy {
            RangePolicy::Reject => Self::try_new_in(addr, width),
            RangePolicy::Truncate => Ok(Self::new_truncate_in(addr, width)),
        }
    }
}
