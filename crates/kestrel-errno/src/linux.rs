// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Linux-compatible error numbers.
//!
//! Covers `errno-base` plus the few higher codes the kernel-generic errors
//! map onto. Numbers match the Linux generic ABI.

use crate::ax::AxError;

error_codes! {
    /// A Linux `errno` value.
    #[allow(clippy::upper_case_acronyms)]
    pub enum LinuxError: i32 {
        /// Operation not permitted.
        EPERM = 1 => "Operation not permitted",
        /// No such file or directory.
        ENOENT = 2 => "No such file or directory",
        /// No such process.
        ESRCH = 3 => "No such process",
        /// Interrupted system call.
        EINTR = 4 => "Interrupted system call",
        /// I/O error.
        EIO = 5 => "I/O error",
        /// No such device or address.
        ENXIO = 6 => "No such device or address",
        /// Argument list too long.
        E2BIG = 7 => "Argument list too long",
        /// Exec format error.
        ENOEXEC = 8 => "Exec format error",
        /// Bad file number.
        EBADF = 9 => "Bad file number",
        /// No child processes.
        ECHILD = 10 => "No child processes",
        /// Try again.
        EAGAIN = 11 => "Try again",
        /// Out of memory.
        ENOMEM = 12 => "Out of memory",
        /// Permission denied.
        EACCES = 13 => "Permission denied",
        /// Bad address.
        EFAULT = 14 => "Bad address",
        /// Block device required.
        ENOTBLK = 15 => "Block device required",
        /// Device or resource busy.
        EBUSY = 16 => "Device or resource busy",
        /// File exists.
        EEXIST = 17 => "File exists",
        /// Cross-device link.
        EXDEV = 18 => "Cross-device link",
        /// No such device.
        ENODEV = 19 => "No such device",
        /// Not a directory.
        ENOTDIR = 20 => "Not a directory",
        /// Is a directory.
        EISDIR = 21 => "Is a directory",
        /// Invalid argument.
        EINVAL = 22 => "Invalid argument",
        /// File table overflow.
        ENFILE = 23 => "File table overflow",
        /// Too many open files.
        EMFILE = 24 => "Too many open files",
        /// Not a typewriter.
        ENOTTY = 25 => "Not a typewriter",
        /// Text file busy.
        ETXTBSY = 26 => "Text file busy",
        /// File too large.
        EFBIG = 27 => "File too large",
        /// No space left on device.
        ENOSPC = 28 => "No space left on device",
        /// Illegal seek.
        ESPIPE = 29 => "Illegal seek",
        /// Read-only file system.
        EROFS = 30 => "Read-only file system",
        /// Too many links.
        EMLINK = 31 => "Too many links",
        /// Broken pipe.
        EPIPE = 32 => "Broken pipe",
        /// Math argument out of domain of func.
        EDOM = 33 => "Math argument out of domain of func",
        /// Math result not representable.
        ERANGE = 34 => "Math result not representable",
        /// Resource deadlock would occur.
        EDEADLK = 35 => "Resource deadlock would occur",
        /// File name too long.
        ENAMETOOLONG = 36 => "File name too long",
        /// No record locks available.
        ENOLCK = 37 => "No record locks available",
        /// Invalid system call number.
        ENOSYS = 38 => "Invalid system call number",
        /// Directory not empty.
        ENOTEMPTY = 39 => "Directory not empty",
        /// Too many symbolic links encountered.
        ELOOP = 40 => "Too many symbolic links encountered",
        /// Socket operation on non-socket.
        ENOTSOCK = 88 => "Socket operation on non-socket",
        /// Address already in use.
        EADDRINUSE = 98 => "Address already in use",
        /// Connection reset by peer.
        ECONNRESET = 104 => "Connection reset by peer",
        /// Transport endpoint is not connected.
        ENOTCONN = 107 => "Transport endpoint is not connected",
        /// Connection timed out.
        ETIMEDOUT = 110 => "Connection timed out",
        /// Connection refused.
        ECONNREFUSED = 111 => "Connection refused",
    }
}

impl LinuxError {
    /// Target of errors with no more specific number.
    pub const UNCATEGORIZED: Self = Self::EIO;

    /// The value a system call returns to report this error.
    #[inline]
    #[must_use]
    pub const fn as_syscall_ret(self) -> isize {
        -(self.code() as isize)
    }
}

impl From<AxError> for LinuxError {
    fn from(err: AxError) -> Self {
        match err {
            AxError::AddrInUse => Self::EADDRINUSE,
            AxError::AlreadyExists => Self::EEXIST,
            AxError::BadAddress => Self::EFAULT,
            AxError::BadState => Self::EBADF,
            AxError::ConnectionRefused => Self::ECONNREFUSED,
            AxError::ConnectionReset => Self::ECONNRESET,
            AxError::DirectoryNotEmpty => Self::ENOTEMPTY,
            AxError::InvalidData | AxError::InvalidInput => Self::EINVAL,
            AxError::Io | AxError::UnexpectedEof | AxError::WriteZero => Self::EIO,
            AxError::IsADirectory => Self::EISDIR,
            AxError::NoMemory => Self::ENOMEM,
            AxError::NotADirectory => Self::ENOTDIR,
            AxError::NotConnected => Self::ENOTCONN,
            AxError::NotFound => Self::ENOENT,
            AxError::PermissionDenied => Self::EACCES,
            AxError::ResourceBusy => Self::EBUSY,
            AxError::StorageFull => Self::ENOSPC,
            AxError::Unsupported => Self::ENOSYS,
            AxError::WouldBlock => Self::EAGAIN,
            AxError::Uncategorized => Self::UNCATEGORIZED,
        }
    }
}

/// Result type at the system-call boundary.
pub type LinuxResult<T = ()> = Result<T, LinuxError>;

/// Collapse a system-call result into its return register value.
///
/// Success values pass through, errors become the negated error number.
pub fn syscall_ret<T: Into<isize>>(result: LinuxResult<T>) -> isize {
    match result {
        Ok(value) => value.into(),
        Err(err) => {
            tracing::trace!(errno = err.code(), "system call failed: {err}");
            err.as_syscall_ret()
        }
    }
}
