//! Session handle and its reusable error buffer.
//!
//! A session owns exactly one message buffer, allocated once at creation
//! and overwritten by every resolution call that targets it. No history is
//! kept. The buffer is not synchronized; a session is single-threaded by
//! contract, and in Rust that contract is carried by the `&mut self`
//! receiver rather than by convention.

use crate::codes::ErrorCode;
use crate::resolve;
use crate::sink::{self, MessageSink, SinkError};
use std::fmt;
use std::str;

/// Default capacity of a session's error buffer, in bytes.
pub const SESSION_ERR_CAPACITY: usize = 512;

// ============================================================================
// ErrorBuf
// ============================================================================

/// Fixed-capacity, NUL-terminating message buffer owned by a [`Session`].
///
/// Allocated exactly once (a `Box<[u8]>`, no growth, no reallocation);
/// every write afterwards reuses it in place.
pub struct ErrorBuf {
    buf: Box<[u8]>,
    len: usize,
}

impl ErrorBuf {
    /// Allocate a buffer of `capacity` bytes, terminator included.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: vec![0u8; capacity].into_boxed_slice(),
            len: 0,
        }
    }

    /// Total capacity in bytes, terminator included.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }
}

impl MessageSink for ErrorBuf {
    fn set_message(&mut self, args: fmt::Arguments<'_>) -> Result<(), SinkError> {
        match sink::format_bounded(&mut self.buf, args) {
            Ok(len) => {
                self.len = len;
                Ok(())
            }
            Err(err) => {
                self.len = 0;
                Err(err)
            }
        }
    }

    fn message(&self) -> &str {
        str::from_utf8(&self.buf[..self.len]).unwrap_or("")
    }
}

// ============================================================================
// Session
// ============================================================================

/// Minimal session handle scoped to error reporting.
///
/// Holds the one reusable error buffer resolution calls may target. Borrow
/// the returned message before the next call on the same session; each call
/// overwrites the buffer.
///
/// # Example
///
/// ```rust
/// use strata_errors::{codes, Session};
///
/// let mut session = Session::new();
/// assert_eq!(
///     session.strerror(codes::NOT_FOUND),
///     "STRATA_NOT_FOUND: item not found",
/// );
/// ```
pub struct Session {
    err: ErrorBuf,
}

impl Session {
    /// Create a session with the default error-buffer capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(SESSION_ERR_CAPACITY)
    }

    /// Create a session with an explicit error-buffer capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            err: ErrorBuf::with_capacity(capacity),
        }
    }

    /// Resolve `code` into this session's buffer.
    ///
    /// Constant-catalog hits come back as static strings and leave the
    /// buffer alone; everything else overwrites it. See
    /// [`crate::resolve::strerror`] for the tier order.
    #[must_use]
    pub fn strerror(&mut self, code: ErrorCode) -> &str {
        resolve::strerror(code, &mut self.err)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
