// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Tests for capability errors.

use kestrel_errno::{AxError, AxResult, LinuxError};

use super::error::CapError;

#[test]
fn every_variant_is_permission_denied() {
    for &err in CapError::ALL {
        assert_eq!(AxError::from(err), AxError::PermissionDenied);
        assert_eq!(LinuxError::from(err), LinuxError::EACCES);
    }
}

#[test]
fn question_mark_converts() {
    fn deny() -> Result<(), CapError> {
        Err(CapError::Denied)
    }
    fn syscall() -> AxResult {
        deny()?;
        Ok(())
    }
    assert_eq!(syscall(), Err(AxError::PermissionDenied));
}

#[test]
fn display() {
    assert_eq!(CapError::Invalid.to_string(), "invalid open request");
    assert_eq!(CapError::Denied.to_string(), "capability denied");
}
