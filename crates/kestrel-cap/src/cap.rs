// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Capability type.

use core::fmt;

use bitflags::bitflags;

use crate::error::CapError;
use crate::options::OpenOptions;

bitflags! {
    /// Access rights held on an open resource.
    ///
    /// A capability only ever narrows: it is derived from what the caller
    /// requested, bounded by what the backing store offers, and never gains a
    /// bit afterwards.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Cap: u32 {
        /// Read the contents.
        const READ    = 1 << 0;
        /// Modify the contents.
        const WRITE   = 1 << 1;
        /// Execute the contents.
        const EXECUTE = 1 << 2;
    }
}

impl Cap {
    /// Grant the capability an open request asks for.
    ///
    /// Fails with [`CapError::Invalid`] if `options` is malformed or asks for
    /// a right `backing` does not offer. On success the result is exactly the
    /// requested set, even when `backing` offers more.
    pub fn from_open_options(options: &OpenOptions, backing: Self) -> Result<Self, CapError> {
        if !options.is_valid() {
            tracing::debug!(?options, "rejecting malformed open request");
            return Err(CapError::Invalid);
        }
        let requested = Self::from(options);
        if !backing.contains(requested) {
            tracing::debug!(
                ?requested,
                ?backing,
                missing = ?requested.difference(backing),
                "open request exceeds backing capability"
            );
            return Err(CapError::Invalid);
        }
        Ok(requested)
    }
}

impl From<&OpenOptions> for Cap {
    fn from(options: &OpenOptions) -> Self {
        let mut cap = Self::empty();
        if options.wants_read() {
            cap |= Self::READ;
        }
        if options.wants_write() {
            cap |= Self::WRITE;
        }
        if options.wants_execute() {
            cap |= Self::EXECUTE;
        }
        cap
    }
}

impl fmt::Display for Cap {
    /// `ls`-style `rwx` triple.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bit = |flag: Self, c: char| if self.contains(flag) { c } else { '-' };
        write!(
            f,
            "{}{}{}",
            bit(Self::READ, 'r'),
            bit(Self::WRITE, 'w'),
            bit(Self::EXECUTE, 'x')
        )
    }
}
