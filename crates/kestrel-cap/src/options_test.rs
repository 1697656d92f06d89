// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Tests for open requests.

use super::options::OpenOptions;

#[test]
fn default_is_empty() {
    assert_eq!(OpenOptions::default(), OpenOptions::new());
    assert!(!OpenOptions::new().is_valid());
}

#[test]
fn access_modes_are_valid() {
    assert!(OpenOptions::new().read(true).is_valid());
    assert!(OpenOptions::new().write(true).is_valid());
    assert!(OpenOptions::new().append(true).is_valid());
    assert!(OpenOptions::new().execute(true).is_valid());
}

#[test]
fn modifiers_need_write() {
    assert!(!OpenOptions::new().read(true).create(true).is_valid());
    assert!(!OpenOptions::new().read(true).create_new(true).is_valid());
    assert!(!OpenOptions::new().read(true).truncate(true).is_valid());
    assert!(OpenOptions::new().write(true).create_new(true).is_valid());
    assert!(OpenOptions::new().append(true).create(true).is_valid());
}

#[test]
fn truncate_conflicts_with_append() {
    assert!(!OpenOptions::new().append(true).truncate(true).is_valid());
    assert!(
        !OpenOptions::new()
            .write(true)
            .append(true)
            .truncate(true)
            .is_valid()
    );
}

#[test]
fn setters_can_clear() {
    let opts = OpenOptions::new().write(true).write(false);
    assert!(!opts.wants_write());
}

#[test]
fn append_implies_write() {
    let opts = OpenOptions::new().append(true);
    assert!(opts.wants_write());
    assert!(!opts.wants_read());
    assert!(!opts.wants_execute());
}
