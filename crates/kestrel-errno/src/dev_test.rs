// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Tests for driver-tier errors.

use super::ax::{AxError, AxResult};
use super::dev::{DevError, DevResult};
use super::linux::LinuxError;

#[test]
fn dev_to_ax() {
    assert_eq!(AxError::from(DevError::Again), AxError::WouldBlock);
    assert_eq!(AxError::from(DevError::InvalidParam), AxError::InvalidInput);
    assert_eq!(AxError::from(DevError::BadState), AxError::BadState);
    assert_eq!(AxError::from(DevError::NoMemory), AxError::NoMemory);
}

#[test]
fn dev_chain_reaches_errno() {
    let errnos: Vec<i32> = DevError::ALL
        .iter()
        .map(|&err| LinuxError::from(AxError::from(err)).code())
        .collect();
    assert_eq!(errnos, [17, 11, 9, 22, 5, 12, 16, 38]);
}

#[test]
fn question_mark_converts() {
    fn init_device() -> DevResult<u32> {
        Err(DevError::ResourceBusy)
    }
    fn open() -> AxResult<u32> {
        Ok(init_device()?)
    }
    assert_eq!(open(), Err(AxError::ResourceBusy));
}

#[test]
fn display() {
    assert_eq!(DevError::Again.to_string(), "Try again");
}
