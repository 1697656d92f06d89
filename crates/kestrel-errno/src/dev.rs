// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Driver-tier errors.

use thiserror::Error;

use crate::ax::AxError;

/// Errors reported by device drivers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum DevError {
    /// The device or buffer already exists.
    #[error("Entity already exists")]
    AlreadyExists,
    /// Try again later.
    #[error("Try again")]
    Again,
    /// The device is not in a state that allows the operation.
    #[error("Bad internal state")]
    BadState,
    /// A parameter is out of range.
    #[error("Invalid parameter")]
    InvalidParam,
    /// The device reported an I/O failure.
    #[error("Input/output error")]
    Io,
    /// DMA or descriptor memory is exhausted.
    #[error("Not enough memory")]
    NoMemory,
    /// The device is busy.
    #[error("Device or resource busy")]
    ResourceBusy,
    /// The device lacks the feature.
    #[error("Unsupported operation")]
    Unsupported,
}

impl DevError {
    /// Every variant.
    pub const ALL: &'static [Self] = &[
        Self::AlreadyExists,
        Self::Again,
        Self::BadState,
        Self::InvalidParam,
        Self::Io,
        Self::NoMemory,
        Self::ResourceBusy,
        Self::Unsupported,
    ];
}

impl From<DevError> for AxError {
    fn from(err: DevError) -> Self {
        match err {
            DevError::AlreadyExists => Self::AlreadyExists,
            DevError::Again => Self::WouldBlock,
            DevError::BadState => Self::BadState,
            DevError::InvalidParam => Self::InvalidInput,
            DevError::Io => Self::Io,
            DevError::NoMemory => Self::NoMemory,
            DevError::ResourceBusy => Self::ResourceBusy,
            DevError::Unsupported => Self::Unsupported,
        }
    }
}

/// Result type of driver operations.
pub type DevResult<T = ()> = Result<T, DevError>;
