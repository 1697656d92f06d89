// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Resource-open requests.

/// How a caller asks to open a resource.
///
/// Built with chained setters:
///
/// ```
/// use kestrel_cap::OpenOptions;
///
/// let opts = OpenOptions::new().write(true).create(true).truncate(true);
/// assert!(opts.is_valid());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct OpenOptions {
    read: bool,
    write: bool,
    execute: bool,
    append: bool,
    truncate: bool,
    create: bool,
    create_new: bool,
}

impl OpenOptions {
    /// Options with every flag cleared.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            read: false,
            write: false,
            execute: false,
            append: false,
            truncate: false,
            create: false,
            create_new: false,
        }
    }

    /// Request read access.
    #[inline]
    #[must_use]
    pub const fn read(mut self, read: bool) -> Self {
        self.read = read;
        self
    }

    /// Request write access.
    #[inline]
    #[must_use]
    pub const fn write(mut self, write: bool) -> Self {
        self.write = write;
        self
    }

    /// Request execute access.
    #[inline]
    #[must_use]
    pub const fn execute(mut self, execute: bool) -> Self {
        self.execute = execute;
        self
    }

    /// Request append-only writes. Implies write access.
    #[inline]
    #[must_use]
    pub const fn append(mut self, append: bool) -> Self {
        self.append = append;
        self
    }

    /// Truncate the resource on open.
    #[inline]
    #[must_use]
    pub const fn truncate(mut self, truncate: bool) -> Self {
        self.truncate = truncate;
        self
    }

    /// Create the resource if it is missing.
    #[inline]
    #[must_use]
    pub const fn create(mut self, create: bool) -> Self {
        self.create = create;
        self
    }

    /// Create the resource, failing if it exists.
    #[inline]
    #[must_use]
    pub const fn create_new(mut self, create_new: bool) -> Self {
        self.create_new = create_new;
        self
    }

    /// Whether read access is requested.
    #[inline]
    #[must_use]
    pub const fn wants_read(&self) -> bool {
        self.read
    }

    /// Whether write access is requested, directly or through append.
    #[inline]
    #[must_use]
    pub const fn wants_write(&self) -> bool {
        self.write || self.append
    }

    /// Whether execute access is requested.
    #[inline]
    #[must_use]
    pub const fn wants_execute(&self) -> bool {
        self.execute
    }

    /// Whether the combination makes sense.
    ///
    /// Rejects requests with no access mode, modifications of the resource
    /// (`truncate`, `create`, `create_new`) without write access, and
    /// `truncate` together with `append`.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        if !self.read && !self.wants_write() && !self.execute {
            return false;
        }
        if (self.truncate || self.create || self.create_new) && !self.wants_write() {
            return false;
        }
        !(self.truncate && self.append)
    }
}
