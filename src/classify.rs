//! Error reclassification for read-only operation.
//!
//! When the engine runs against a read-only data directory, two OS failures
//! correspond to conditions the engine already has names for: a missing
//! file and a protected file. This module maps exactly those two onto
//! [`codes::NOT_FOUND`] and [`codes::PERMISSION_DENIED`]; every other code
//! passes through untouched.

use crate::codes::{self, ErrorCode};

/// Raw OS code for the platform's "file not found" condition.
#[cfg(windows)]
pub const OS_FILE_NOT_FOUND: i32 = 2; // ERROR_FILE_NOT_FOUND
/// Raw OS code for the platform's "file not found" condition.
#[cfg(not(windows))]
pub const OS_FILE_NOT_FOUND: i32 = libc::ENOENT;

/// Raw OS code for the platform's "access denied" condition.
#[cfg(windows)]
pub const OS_ACCESS_DENIED: i32 = 5; // ERROR_ACCESS_DENIED
/// Raw OS code for the platform's "access denied" condition.
#[cfg(not(windows))]
pub const OS_ACCESS_DENIED: i32 = libc::EACCES;

/// Reinterpret an error for a read-only operational context.
///
/// Pure and total over every input. The code is expected in the unified
/// namespace, typically fresh from [`crate::last_error::last_os_error`].
#[inline]
#[must_use]
pub fn classify_read_only(code: ErrorCode) -> ErrorCode {
    if code == ErrorCode::from_os_error(OS_FILE_NOT_FOUND) {
        codes::NOT_FOUND
    } else if code == ErrorCode::from_os_error(OS_ACCESS_DENIED) {
        codes::PERMISSION_DENIED
    } else {
        code
    }
}
