// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Error codes for the Kestrel kernel.
//!
//! Errors travel one way, from the most specific tier to the most generic:
//!
//! ```text
//! DevError ──┐
//!            ├──► AxError ──► LinuxError ──► negative errno
//! CapError ──┘
//! ```
//!
//! Every step is a total `From` conversion. Nothing converts upward.
//! `CapError` lives with the capability type in `kestrel-cap`.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

#[macro_use]
mod macros;

mod ax;
mod dev;
mod linux;

#[cfg(test)]
mod dev_test;
#[cfg(test)]
mod macros_test;

pub use ax::{AxError, AxResult};
pub use dev::{DevError, DevResult};
pub use linux::{LinuxError, LinuxResult, syscall_ret};

#[doc(hidden)]
pub mod __priv {
    pub use tracing::warn;
}
