// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Tests for raw alignment helpers.

use super::{align_down, align_offset, align_up, is_aligned};

#[test]
fn rejects_bad_alignment() {
    assert_eq!(align_down(0x1234, 0), None);
    assert_eq!(align_up(0x1234, 12), None);
    assert_eq!(align_offset(0x1234, 3), None);
    assert_eq!(is_aligned(0x1234, 0x1001), None);
}

#[test]
fn rounds_to_boundaries() {
    assert_eq!(align_down(0x1fff, 0x1000), Some(0x1000));
    assert_eq!(align_up(0x1001, 0x1000), Some(0x2000));
    assert_eq!(align_up(0x2000, 0x1000), Some(0x2000));
    assert_eq!(align_offset(0x1fff, 0x1000), Some(0xfff));
    assert_eq!(is_aligned(0x20_0000, 0x20_0000), Some(true));
}

#[test]
fn alignment_of_one_is_identity() {
    assert_eq!(align_down(0x1234, 1), Some(0x1234));
    assert_eq!(align_up(usize::MAX, 1), Some(usize::MAX));
    assert_eq!(is_aligned(0x1235, 1), Some(true));
}

#[test]
fn align_up_overflow() {
    assert_eq!(align_up(usize::MAX, 2), None);
}
