// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Tests for the error macros.

use super::ax::{AxError, AxResult};

fn checked_div(a: u32, b: u32) -> AxResult<u32> {
    if b == 0 {
        return ax_err!(InvalidInput, "division by zero");
    }
    Ok(a / b)
}

#[test]
fn ax_err_type() {
    assert_eq!(ax_err_type!(NotFound), AxError::NotFound);
    assert_eq!(ax_err_type!(Io, "disk gone"), AxError::Io);
}

#[test]
fn ax_err() {
    let plain: AxResult = ax_err!(Unsupported);
    assert_eq!(plain, Err(AxError::Unsupported));
    assert_eq!(checked_div(6, 3), Ok(2));
    assert_eq!(checked_div(6, 0), Err(AxError::InvalidInput));
}

#[test]
fn message_expression() {
    let frame = 0x4000_usize;
    let err = ax_err_type!(BadAddress, format_args!("frame {frame:#x} unmapped"));
    assert_eq!(err, AxError::BadAddress);
}
