// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Tests for capability-guarded objects.

use super::cap::Cap;
use super::error::CapError;
use super::with_cap::WithCap;

#[test]
fn access_with_held_cap() {
    let obj = WithCap::new(42_u32, Cap::READ | Cap::WRITE);
    assert_eq!(obj.cap(), Cap::READ | Cap::WRITE);
    assert!(obj.can_access(Cap::READ));
    assert_eq!(obj.access(Cap::READ), Ok(&42));
    assert_eq!(obj.access(Cap::empty()), Ok(&42));
}

#[test]
fn access_denied() {
    let obj = WithCap::new(42_u32, Cap::READ);
    assert!(!obj.can_access(Cap::READ | Cap::WRITE));
    assert_eq!(obj.access(Cap::WRITE), Err(CapError::Denied));
    assert_eq!(obj.access_or_err(Cap::EXECUTE, "no exec"), Err("no exec"));
}

#[test]
fn access_mut() {
    let mut obj = WithCap::new(vec![1, 2], Cap::WRITE);
    if let Ok(items) = obj.access_mut(Cap::WRITE) {
        items.push(3);
    }
    assert_eq!(obj.access_mut(Cap::READ), Err(CapError::Denied));
    assert_eq!(obj.into_inner(), vec![1, 2, 3]);
}
