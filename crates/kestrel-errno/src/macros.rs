// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Error macros.

/// Define a fieldless error enum with stable numeric codes.
///
/// Generates the enum with a `thiserror` `Display`, plus `ALL`, `code`,
/// `name`, `as_str`, `from_code`, and the `TryFrom`/`From` conversions to the
/// code type. An unknown code is handed back as the `TryFrom` error.
macro_rules! error_codes {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident: $repr:ident {
            $(
                $(#[doc = $doc:literal])*
                $variant:ident = $code:literal => $msg:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
        #[repr($repr)]
        $vis enum $name {
            $(
                $(#[doc = $doc])*
                #[error($msg)]
                $variant = $code,
            )+
        }

        impl $name {
            /// Every variant, in code order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)+];

            /// The numeric code.
            #[inline]
            #[must_use]
            pub const fn code(self) -> $repr {
                self as $repr
            }

            /// The variant name.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant),)+
                }
            }

            /// Human-readable description.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $msg,)+
                }
            }

            /// Look up a variant by its code.
            #[must_use]
            pub const fn from_code(code: $repr) -> Option<Self> {
                match code {
                    $($code => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }

        impl TryFrom<$repr> for $name {
            type Error = $repr;

            fn try_from(code: $repr) -> Result<Self, Self::Error> {
                Self::from_code(code).ok_or(code)
            }
        }

        impl From<$name> for $repr {
            fn from(err: $name) -> Self {
                err.code()
            }
        }
    };
}

/// Build an [`AxError`](crate::AxError), logging `msg` at `warn` level when
/// given.
///
/// ```
/// use kestrel_errno::{AxError, ax_err_type};
///
/// assert_eq!(ax_err_type!(NotFound), AxError::NotFound);
/// assert_eq!(ax_err_type!(NoMemory, "frame pool empty"), AxError::NoMemory);
/// ```
#[macro_export]
macro_rules! ax_err_type {
    ($err:ident) => {
        $crate::AxError::$err
    };
    ($err:ident, $msg:expr) => {{
        $crate::__priv::warn!("[AxError::{:?}] {}", $crate::AxError::$err, $msg);
        $crate::AxError::$err
    }};
}

/// Return-ready `Err(AxError)`, logging `msg` at `warn` level when given.
///
/// ```
/// use kestrel_errno::{AxError, AxResult, ax_err};
///
/// fn lookup(key: u32) -> AxResult<u32> {
///     if key == 0 {
///         return ax_err!(InvalidInput, "key 0 is reserved");
///     }
///     ax_err!(NotFound)
/// }
///
/// assert_eq!(lookup(0), Err(AxError::InvalidInput));
/// assert_eq!(lookup(7), Err(AxError::NotFound));
/// ```
#[macro_export]
macro_rules! ax_err {
    ($err:ident) => {
        Err($crate::ax_err_type!($err))
    };
    ($err:ident, $msg:expr) => {
        Err($crate::ax_err_type!($err, $msg))
    };
}
