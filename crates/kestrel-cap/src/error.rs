// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Capability errors.

use kestrel_errno::{AxError, LinuxError};
use thiserror::Error;

/// Why a capability could not be granted or used.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum CapError {
    /// The open request is malformed or asks for more than the backing
    /// store offers.
    #[error("invalid open request")]
    Invalid,
    /// An access needed a permission the capability does not hold.
    #[error("capability denied")]
    Denied,
}

impl CapError {
    /// Every variant.
    pub const ALL: &'static [Self] = &[Self::Invalid, Self::Denied];
}

impl From<CapError> for AxError {
    fn from(err: CapError) -> Self {
        match err {
            CapError::Invalid | CapError::Denied => Self::PermissionDenied,
        }
    }
}

impl From<CapError> for LinuxError {
    fn from(err: CapError) -> Self {
        AxError::from(err).into()
    }
}
