//! Ambient last-error accessors.
//!
//! The C runtime and the operating system each keep a per-thread "last
//! error" slot (`errno`, and `GetLastError` on Windows; on Unix-likes both
//! names reach the same slot). That state is global and mutable, so it is
//! read here through two narrow functions with an explicit contract instead
//! of leaking into higher layers as implicit magic.
//!
//! # Contract
//!
//! Call the accessor immediately after the failing operation, on the same
//! thread, before any other call. Any intervening operation, including
//! logging or further I/O, may overwrite the slot.
//!
//! A slot that reads as "no error" is reported as the [`codes::UNKNOWN`]
//! sentinel, never as success: these functions are only called after a
//! failure was observed, usually when the failure recorded its code in the
//! *other* runtime's slot.

use crate::codes::{self, ErrorCode};
use std::io;

/// Normalize a captured C-runtime errno value.
///
/// Zero becomes the [`codes::UNKNOWN`] sentinel; anything else passes
/// through as the errno mirror of the unified namespace.
#[inline]
#[must_use]
pub const fn errno_or_unknown(raw: i32) -> ErrorCode {
    if raw == 0 {
        codes::UNKNOWN
    } else {
        ErrorCode::from_raw(raw)
    }
}

/// Normalize a captured native OS error value.
///
/// The OS "success" value becomes the [`codes::UNKNOWN`] sentinel; anything
/// else is encoded into the OS-origin slice via
/// [`ErrorCode::from_os_error`].
#[inline]
#[must_use]
pub const fn os_error_or_unknown(raw: i32) -> ErrorCode {
    if raw == 0 {
        codes::UNKNOWN
    } else {
        ErrorCode::from_os_error(raw)
    }
}

/// Read the C runtime's last error for this thread.
///
/// Non-blocking and read-only; see the module contract for when the value
/// is meaningful.
#[must_use]
pub fn last_errno() -> ErrorCode {
    errno_or_unknown(errno::errno().0)
}

/// Read the operating system's last error for this thread.
///
/// `GetLastError` on Windows, errno elsewhere. Non-blocking and read-only;
/// see the module contract for when the value is meaningful.
#[must_use]
pub fn last_os_error() -> ErrorCode {
    let raw = io::Error::last_os_error().raw_os_error().unwrap_or(0);
    os_error_or_unknown(raw)
}
