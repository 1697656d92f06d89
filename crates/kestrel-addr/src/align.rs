// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Alignment arithmetic on raw machine words.
//!
//! All functions return `None` when `alignment` is zero or not a power of
//! two, so a bad alignment can never silently produce a wrong address.

/// Round `addr` down to a multiple of `alignment`.
#[inline]
#[must_use]
pub const fn align_down(addr: usize, alignment: usize) -> Option<usize> {
    if !alignment.is_power_of_two() {
        return None;
    }
    Some(addr & !(alignment - 1))
}

/// Round `addr` up to a multiple of `alignment`.
///
/// Returns `None` if the rounded value does not fit in a `usize`.
#[inline]
#[must_use]
pub const fn align_up(addr: usize, alignment: usize) -> Option<usize> {
    if !alignment.is_power_of_two() {
        return None;
    }
    let mask = alignment - 1;
    match addr.checked_add(mask) {
        Some(bumped) => Some(bumped & !mask),
        None => None,
    }
}

/// Offset of `addr` past the previous multiple of `alignment`.
#[inline]
#[must_use]
pub const fn align_offset(addr: usize, alignment: usize) -> Option<usize> {
    if !alignment.is_power_of_two() {
        return None;
    }
    Some(addr & (alignment - 1))
}

/// Check whether `addr` is a multiple of `alignment`.
#[inline]
#[must_use]
pub const fn is_aligned(addr: usize, alignment: usize) -> Option<bool> {
    if !alignment.is_power_of_two() {
        return None;
    }
    Some(addr & (alignment - 1) == 0)
}
