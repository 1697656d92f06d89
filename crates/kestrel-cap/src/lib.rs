// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Access capabilities for the Kestrel kernel.
//!
//! Opening a resource yields a [`Cap`]: the rights the caller asked for in its
//! [`OpenOptions`], provided the backing store offers them. Later accesses go
//! through [`WithCap`], which checks the capability before handing out the
//! object.
//!
//! Failures are [`CapError`]s. They convert into
//! [`AxError::PermissionDenied`](kestrel_errno::AxError::PermissionDenied)
//! and from there to `EACCES`.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

mod cap;
mod error;
mod options;
mod with_cap;

#[cfg(test)]
mod error_test;
#[cfg(test)]
mod options_test;
#[cfg(test)]
mod with_cap_test;

pub use cap::Cap;
pub use error::CapError;
pub use options::OpenOptions;
pub use with_cap::WithCap;
