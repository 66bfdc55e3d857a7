//! Tiered error-message resolution.
//!
//! [`strerror`] turns any code in the unified namespace into usable text.
//! It never fails: each tier degrades into the next, and the last resort is
//! a fixed static string. Nothing on this path allocates.
//!
//! # Tiers
//!
//! 1. A constant-catalog hit returns the canonical static string; the sink
//!    is left untouched.
//! 2. A negative code is decoded to its native OS error number and the OS's
//!    own description is rendered into a fixed staging area, then copied
//!    into the sink.
//! 3. Otherwise, or when the OS render produced nothing or the sink write
//!    failed, the sink receives `error return: <code>`.
//! 4. If even that write fails, the fixed fallback string is returned.

use crate::catalog;
use crate::codes::ErrorCode;
use crate::sink::{self, MessageSink};
use std::io;
use std::str;

/// Capacity of the staging area for OS-native message rendering, in bytes.
const OS_MESSAGE_CAPACITY: usize = 512;

/// Returned when no tier managed to place text in the sink.
pub const UNRESOLVABLE: &str = "Unable to return error string";

/// Resolve `code` to a human-readable description.
///
/// Returns either a static string (constant catalog hits and the final
/// fallback) or the text written into `sink`. When `sink` is a session's
/// buffer its previous contents are overwritten; concurrent resolution into
/// one session is ruled out by the `&mut` borrow.
///
/// # Example
///
/// ```rust
/// use strata_errors::{codes, strerror, BufSink, ErrorCode};
///
/// let mut buf = [0u8; 64];
/// let mut sink = BufSink::new(&mut buf);
///
/// // A named constant needs no buffer at all.
/// assert_eq!(
///     strerror(codes::DUPLICATE_KEY, &mut sink),
///     "STRATA_DUPLICATE_KEY: attempt to insert an existing key",
/// );
///
/// // An unmatched code degrades to a generic description.
/// assert_eq!(strerror(ErrorCode::from_raw(999), &mut sink), "error return: 999");
/// ```
#[must_use]
pub fn strerror<'a, S>(code: ErrorCode, sink: &'a mut S) -> &'a str
where
    S: MessageSink + ?Sized,
{
    // Constant strings need no buffer.
    if let Some(msg) = catalog::message(code) {
        return msg;
    }

    let mut wrote = false;

    // Negative codes carry an encoded OS error; ask the OS to describe it.
    if code.raw() < 0 {
        let mut staging = [0u8; OS_MESSAGE_CAPACITY];
        if let Some(msg) = os_message(code, &mut staging) {
            wrote = sink.set_message(format_args!("{msg}")).is_ok();
        }
    }

    // Generic tier, covering unmatched codes and failed OS rendering.
    if !wrote {
        wrote = sink
            .set_message(format_args!("error return: {}", code.raw()))
            .is_ok();
    }

    if wrote { sink.message() } else { UNRESOLVABLE }
}

/// Render the OS's description of an encoded OS error into `staging`.
///
/// Returns `None` when the code does not decode into the documented native
/// range or the render produced no text, sending the caller to the generic
/// tier.
fn os_message<'s>(code: ErrorCode, staging: &'s mut [u8]) -> Option<&'s str> {
    if !code.is_os_origin() {
        return None;
    }
    let os = code.to_os_error();
    let len = sink::format_bounded(
        staging,
        format_args!("{}", io::Error::from_raw_os_error(os)),
    )
    .ok()?;
    if len == 0 {
        return None;
    }
    str::from_utf8(&staging[..len]).ok()
}
