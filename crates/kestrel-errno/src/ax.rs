// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Kernel-generic errors.

error_codes! {
    /// Error kinds shared by every kernel subsystem.
    ///
    /// Codes are stable and start at 1.
    pub enum AxError: i32 {
        /// An address is already in use.
        AddrInUse = 1 => "Address in use",
        /// An entity already exists.
        AlreadyExists = 2 => "Entity already exists",
        /// A pointer or address is invalid.
        BadAddress = 3 => "Bad address",
        /// An object is in a state that does not allow the operation.
        BadState = 4 => "Bad internal state",
        /// The remote end refused the connection.
        ConnectionRefused = 5 => "Connection refused",
        /// The remote end reset the connection.
        ConnectionReset = 6 => "Connection reset",
        /// A directory to be removed is not empty.
        DirectoryNotEmpty = 7 => "Directory not empty",
        /// Data is malformed.
        InvalidData = 8 => "Invalid data",
        /// A parameter is invalid.
        InvalidInput = 9 => "Invalid input parameter",
        /// An I/O operation failed.
        Io = 10 => "I/O error",
        /// The target is a directory.
        IsADirectory = 11 => "Is a directory",
        /// Memory is exhausted.
        NoMemory = 12 => "Not enough memory",
        /// A path component is not a directory.
        NotADirectory = 13 => "Not a directory",
        /// The socket is not connected.
        NotConnected = 14 => "Not connected",
        /// An entity was not found.
        NotFound = 15 => "Entity not found",
        /// The caller lacks the required permission.
        PermissionDenied = 16 => "Permission denied",
        /// A resource is busy.
        ResourceBusy = 17 => "Resource busy",
        /// Storage is full.
        StorageFull = 18 => "No storage space",
        /// The input ended early.
        UnexpectedEof = 19 => "Unexpected end of file",
        /// The operation is not supported.
        Unsupported = 20 => "Operation not supported",
        /// The operation would block.
        WouldBlock = 21 => "Operation would block",
        /// A write accepted zero bytes.
        WriteZero = 22 => "Write zero",
        /// Reserved fallback for errors that fit no other kind.
        Uncategorized = 23 => "Uncategorized error",
    }
}

/// Result type of kernel-generic operations.
pub type AxResult<T = ()> = Result<T, AxError>;
