//! Unified error-code space and the OS error bijection.
//!
//! The engine reports every failure as a single signed integer drawn from
//! three origins:
//!
//! - **Named engine constants** (block `-31000..=-31007`), returned by the
//!   engine itself for conditions the OS has no word for.
//! - **C-runtime errno values** (small positive integers, roughly 0-200),
//!   carried through unchanged.
//! - **OS-origin codes**, native operating-system error numbers (documented
//!   as `0..=15999` on Windows, far smaller on Unix-likes) encoded into a
//!   reserved negative slice via a fixed offset.
//!
//! # Namespace layout
//!
//! ```text
//! -31007..=-31000    engine constants
//! -29000..=-13001    OS-origin slice (native code + OS_ERROR_OFFSET)
//!              0     success
//!       1..= ~200    C-runtime errno values
//! ```
//!
//! The offset is large enough in magnitude that the OS-origin slice can
//! never collide with either of the other origins; the `tests` module at the
//! bottom of this file pins that invariant.
//!
//! # Zero-Allocation Guarantee
//!
//! Everything in this module is `Copy` data and `const` arithmetic. The
//! `Display` implementation writes directly to the provided formatter.

use crate::catalog;
use std::fmt;
use std::io;

// ============================================================================
// Offset and range constants
// ============================================================================

/// Fixed offset defining the bijection between native OS error numbers and
/// the OS-origin slice of [`ErrorCode`].
///
/// A native code `os` is carried internally as `os + OS_ERROR_OFFSET`; the
/// reverse mapping subtracts it back out. The constant is negative so the
/// whole OS-origin slice sits below zero, away from the errno mirror.
pub const OS_ERROR_OFFSET: i32 = -29_000;

/// Largest native OS error number the encoding reserves room for.
///
/// Windows system error codes are documented as `0..=15999`; Unix errno
/// values top out two orders of magnitude below that.
pub const OS_ERROR_MAX: i32 = 15_999;

// ============================================================================
// ErrorCode
// ============================================================================

/// A single code in the engine's unified signed error namespace.
///
/// `ErrorCode` is a plain `i32` wrapper, cheap to copy and stable across
/// the C API boundary. Which origin a code belongs to is a property of the
/// numeric value rather than of the type, so a code can be stored and
/// forwarded without losing its origin.
///
/// # Example
///
/// ```rust
/// use strata_errors::{codes, ErrorCode};
///
/// let code = ErrorCode::from_os_error(5);
/// assert!(code.is_os_origin());
/// assert_eq!(code.to_os_error(), 5);
/// assert!(codes::SUCCESS.is_success());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ErrorCode(i32);

impl ErrorCode {
    /// Wrap a raw value already expressed in the unified namespace.
    #[inline]
    pub const fn from_raw(raw: i32) -> Self {
        Self(raw)
    }

    /// The raw numeric value.
    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Whether this code denotes success.
    #[inline]
    pub const fn is_success(self) -> bool {
        self.0 == 0
    }

    /// Whether this code lies in the OS-origin slice, i.e. decodes to a
    /// native OS error number in `0..=OS_ERROR_MAX`.
    #[inline]
    pub const fn is_os_origin(self) -> bool {
        self.0 >= OS_ERROR_OFFSET && self.0 <= OS_ERROR_OFFSET + OS_ERROR_MAX
    }

    /// Decode this code back to the native OS error number.
    ///
    /// # Panics
    ///
    /// Panics if the code is non-negative. A non-negative input here means a
    /// calling layer confused the errno mirror with the OS-origin slice;
    /// that is a bug in the caller, not a runtime condition, and must not be
    /// reported as a recoverable result.
    #[inline]
    pub const fn to_os_error(self) -> i32 {
        assert!(self.0 < 0, "OS-origin mapping requires a negative code");
        self.0 - OS_ERROR_OFFSET
    }

    /// Encode a native OS error number into the unified namespace.
    ///
    /// Total over the documented native range; the inverse of
    /// [`ErrorCode::to_os_error`] for every code in the OS-origin slice.
    #[inline]
    pub const fn from_os_error(os: i32) -> Self {
        Self(os + OS_ERROR_OFFSET)
    }
}

// ============================================================================
// Named engine constants
// ============================================================================

/// Success, the absence of an error.
pub const SUCCESS: ErrorCode = ErrorCode(0);

/// Unknown-error sentinel.
///
/// Returned by the ambient accessors when the last-error slot reads as
/// "no error" even though the caller just observed a failure, and by
/// conversions that have no raw code to work with.
pub const UNKNOWN: ErrorCode = ErrorCode(-31_000);

/// Conflict between concurrent operations; the losing operation was rolled
/// back and may be retried by the caller.
pub const CONFLICT: ErrorCode = ErrorCode(-31_001);

/// Attempt to insert a key that already exists in the target object.
pub const DUPLICATE_KEY: ErrorCode = ErrorCode(-31_002);

/// The requested item was not found.
pub const NOT_FOUND: ErrorCode = ErrorCode(-31_003);

/// Fatal failure; the engine must be restarted and recovered.
pub const PANIC: ErrorCode = ErrorCode(-31_004);

/// Access to a storage resource was denied.
pub const PERMISSION_DENIED: ErrorCode = ErrorCode(-31_005);

/// The operation must be restarted by the caller.
pub const RESTART: ErrorCode = ErrorCode(-31_006);

/// The operation would overflow the engine cache.
pub const CACHE_FULL: ErrorCode = ErrorCode(-31_007);

// ============================================================================
// Trait implementations
// ============================================================================

impl fmt::Display for ErrorCode {
    /// Human-readable description, written directly to the formatter.
    ///
    /// Mirrors the tiers of [`crate::resolve::strerror`] without needing a
    /// sink: the constant catalog first, then the OS's own description for
    /// OS-origin codes, then a generic rendering of the raw value.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(msg) = catalog::message(*self) {
            return f.write_str(msg);
        }
        if self.is_os_origin() {
            return write!(f, "{}", io::Error::from_raw_os_error(self.to_os_error()));
        }
        write!(f, "error return: {}", self.0)
    }
}

impl std::error::Error for ErrorCode {}

impl From<io::Error> for ErrorCode {
    /// Capture the OS error carried by `err` into the unified namespace.
    ///
    /// On Windows the raw value is a native system error and lands in the
    /// OS-origin slice; elsewhere it is an errno value and passes through as
    /// the C-runtime mirror. Errors constructed without a raw OS code map to
    /// the [`UNKNOWN`] sentinel.
    fn from(err: io::Error) -> Self {
        match err.raw_os_error() {
            #[cfg(windows)]
            Some(raw) => Self::from_os_error(raw),
            #[cfg(not(windows))]
            Some(raw) => Self::from_raw(raw),
            None => UNKNOWN,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
