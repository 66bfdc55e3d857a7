//! Bounded, NUL-terminating text sinks.
//!
//! Resolved messages are written into byte buffers that may be handed
//! across the engine's C API boundary, so every write obeys the same
//! discipline: never overflow, truncate at a UTF-8 character boundary, and
//! leave a NUL terminator behind whenever the buffer can hold one.
//!
//! The [`MessageSink`] trait is the single abstraction the resolver is
//! written against; whether the bytes live in a caller-supplied slice
//! ([`BufSink`]) or a session-owned buffer makes no difference to the
//! fallback logic.
//!
//! Truncation is not an error. A sink write fails only when the buffer
//! cannot hold even an empty NUL-terminated string, or when a `Display`
//! implementation reports failure mid-render.

use std::fmt;
use std::str;

// ============================================================================
// Errors
// ============================================================================

/// Failure to place any text in a sink.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SinkError {
    /// The buffer has no room for a NUL terminator.
    ZeroCapacity,
    /// A `Display` implementation failed while rendering.
    FormatFailed,
}

impl fmt::Display for SinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroCapacity => f.write_str("sink has no room for a NUL terminator"),
            Self::FormatFailed => f.write_str("formatting failed while writing to sink"),
        }
    }
}

impl std::error::Error for SinkError {}

// ============================================================================
// Bounded formatted write
// ============================================================================

/// Render `args` into `buf`, truncating rather than overflowing.
///
/// One byte is reserved for the NUL terminator, which is always written
/// when the buffer is non-empty. Truncation happens at a UTF-8 character
/// boundary so the written prefix is always valid text. Returns the number
/// of text bytes written, terminator excluded.
///
/// # Errors
///
/// [`SinkError::ZeroCapacity`] if `buf` is empty, [`SinkError::FormatFailed`]
/// if a `Display` implementation itself reported failure. A truncated write
/// is a success.
pub fn format_bounded(buf: &mut [u8], args: fmt::Arguments<'_>) -> Result<usize, SinkError> {
    if buf.is_empty() {
        return Err(SinkError::ZeroCapacity);
    }
    let cap = buf.len() - 1;

    let mut cursor = Cursor {
        buf: &mut buf[..cap],
        len: 0,
        truncated: false,
    };
    let res = fmt::write(&mut cursor, args);
    let (len, truncated) = (cursor.len, cursor.truncated);

    // Our cursor only raises fmt::Error to stop rendering at the capacity
    // limit; an error without the truncation flag came from the value being
    // formatted.
    if res.is_err() && !truncated {
        buf[0] = 0;
        return Err(SinkError::FormatFailed);
    }

    buf[len] = 0;
    Ok(len)
}

/// Truncating adapter between `fmt::write` and a byte slice.
struct Cursor<'a> {
    buf: &'a mut [u8],
    len: usize,
    truncated: bool,
}

impl fmt::Write for Cursor<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let avail = self.buf.len() - self.len;
        if s.len() <= avail {
            self.buf[self.len..self.len + s.len()].copy_from_slice(s.as_bytes());
            self.len += s.len();
            Ok(())
        } else {
            let cut = floor_char_boundary(s, avail);
            self.buf[self.len..self.len + cut].copy_from_slice(&s.as_bytes()[..cut]);
            self.len += cut;
            self.truncated = true;
            Err(fmt::Error)
        }
    }
}

/// Largest index `<= at` that falls on a character boundary of `s`.
fn floor_char_boundary(s: &str, at: usize) -> usize {
    if at >= s.len() {
        return s.len();
    }
    let mut idx = at;
    while !s.is_char_boundary(idx) {
        idx -= 1;
    }
    idx
}

// ============================================================================
// MessageSink
// ============================================================================

/// A bounded, writable, NUL-terminating text destination.
///
/// Sinks hold exactly one message: each successful [`set_message`] replaces
/// whatever was there before. There is no history and no synchronization;
/// exclusive access is expressed through `&mut self`.
///
/// [`set_message`]: MessageSink::set_message
pub trait MessageSink {
    /// Replace the sink's contents with the rendered `args`, truncating to
    /// the sink's capacity.
    ///
    /// # Errors
    ///
    /// See [`format_bounded`]. After an error the sink reads as empty.
    fn set_message(&mut self, args: fmt::Arguments<'_>) -> Result<(), SinkError>;

    /// The text placed by the most recent successful [`set_message`], or
    /// the empty string if there has been none.
    ///
    /// [`set_message`]: MessageSink::set_message
    fn message(&self) -> &str;
}

/// [`MessageSink`] over a caller-supplied buffer with explicit capacity.
///
/// # Example
///
/// ```rust
/// use strata_errors::{BufSink, MessageSink};
///
/// let mut buf = [0u8; 16];
/// let mut sink = BufSink::new(&mut buf);
/// sink.set_message(format_args!("short")).unwrap();
/// assert_eq!(sink.message(), "short");
/// ```
pub struct BufSink<'a> {
    buf: &'a mut [u8],
    len: usize,
}

impl<'a> BufSink<'a> {
    /// Wrap `buf` as an empty sink. The buffer's length is the capacity,
    /// terminator included.
    #[inline]
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, len: 0 }
    }

    /// Total capacity in bytes, terminator included.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }
}

impl MessageSink for BufSink<'_> {
    fn set_message(&mut self, args: fmt::Arguments<'_>) -> Result<(), SinkError> {
        match format_bounded(self.buf, args) {
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
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_writes_are_verbatim_and_terminated() {
        let mut buf = [0xAAu8; 16];
        let len = format_bounded(&mut buf, format_args!("code {}", 7)).unwrap();
        assert_eq!(&buf[..len], b"code 7");
        assert_eq!(buf[len], 0);
    }

    #[test]
    fn long_writes_truncate_without_overflow() {
        let mut buf = [0xAAu8; 4];
        let len = format_bounded(&mut buf, format_args!("a rather long message")).unwrap();
        assert_eq!(len, 3);
        assert_eq!(&buf[..3], b"a r");
        assert_eq!(buf[3], 0);
    }

    #[test]
    fn truncation_respects_utf8_boundaries() {
        // "hé" is three bytes; a four-byte buffer has room for all of it
        // but not for the next character.
        let mut buf = [0u8; 4];
        let len = format_bounded(&mut buf, format_args!("héllo")).unwrap();
        assert_eq!(len, 3);
        assert_eq!(str::from_utf8(&buf[..len]).unwrap(), "hé");
    }

    #[test]
    fn empty_buffer_is_an_error() {
        let mut buf = [0u8; 0];
        assert_eq!(
            format_bounded(&mut buf, format_args!("x")),
            Err(SinkError::ZeroCapacity)
        );
    }

    #[test]
    fn one_byte_buffer_holds_only_the_terminator() {
        let mut buf = [0xAAu8; 1];
        let len = format_bounded(&mut buf, format_args!("anything")).unwrap();
        assert_eq!(len, 0);
        assert_eq!(buf[0], 0);
    }

    #[test]
    fn failing_display_is_reported() {
        struct Broken;
        impl fmt::Display for Broken {
            fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
                Err(fmt::Error)
            }
        }
        let mut buf = [0xAAu8; 8];
        assert_eq!(
            format_bounded(&mut buf, format_args!("{}", Broken)),
            Err(SinkError::FormatFailed)
        );
        assert_eq!(buf[0], 0);
    }

    #[test]
    fn sink_overwrites_previous_contents() {
        let mut buf = [0u8; 32];
        let mut sink = BufSink::new(&mut buf);
        sink.set_message(format_args!("first message")).unwrap();
        sink.set_message(format_args!("2nd")).unwrap();
        assert_eq!(sink.message(), "2nd");
    }

    #[test]
    fn failed_write_leaves_the_sink_empty() {
        let mut buf = [0u8; 0];
        let mut sink = BufSink::new(&mut buf);
        assert!(sink.set_message(format_args!("x")).is_err());
        assert_eq!(sink.message(), "");
    }
}
