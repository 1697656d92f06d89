// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Objects guarded by a capability.

use crate::cap::Cap;
use crate::error::CapError;

/// An object that can only be reached through its capability.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WithCap<T> {
    inner: T,
    cap: Cap,
}

impl<T> WithCap<T> {
    /// Wrap `inner`, granting `cap` on it.
    #[inline]
    #[must_use]
    pub const fn new(inner: T, cap: Cap) -> Self {
        Self { inner, cap }
    }

    /// The capability held on the object.
    #[inline]
    #[must_use]
    pub const fn cap(&self) -> Cap {
        self.cap
    }

    /// Whether every right in `cap` is held.
    #[inline]
    #[must_use]
    pub const fn can_access(&self, cap: Cap) -> bool {
        self.cap.contains(cap)
    }

    /// Borrow the object, if `cap` is held.
    pub fn access(&self, cap: Cap) -> Result<&T, CapError> {
        self.check(cap)?;
        Ok(&self.inner)
    }

    /// Mutably borrow the object, if `cap` is held.
    pub fn access_mut(&mut self, cap: Cap) -> Result<&mut T, CapError> {
        self.check(cap)?;
        Ok(&mut self.inner)
    }

    /// Borrow the object, failing with `err` if `cap` is not held.
    pub fn access_or_err<E>(&self, cap: Cap, err: E) -> Result<&T, E> {
        self.access(cap).map_err(|_| err)
    }

    /// Unwrap the object, dropping the capability.
    #[inline]
    pub fn into_inner(self) -> T {
        self.inner
    }

    fn check(&self, cap: Cap) -> Result<(), CapError> {
        if self.can_access(cap) {
            return Ok(());
        }
        tracing::debug!(held = %self.cap, needed = %cap, "capability check failed");
        Err(CapError::Denied)
    }
}
