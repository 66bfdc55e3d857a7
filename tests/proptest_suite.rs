//! Property-based tests for strata_errors.
//!
//! These tests use proptest to generate random inputs and verify that the
//! namespace bijection, the classifier, and the bounded sinks hold their
//! invariants for the whole input space, not just the hand-picked cases in
//! the unit tests.

use proptest::prelude::*;
use strata_errors::{
    BufSink, ErrorCode, OS_ACCESS_DENIED, OS_ERROR_MAX, OS_FILE_NOT_FOUND, classify_read_only,
    codes, format_bounded, strerror,
};

// ============================================================================
// NAMESPACE PROPERTIES
// ============================================================================

proptest! {
    /// Encoding a native OS error and decoding it back is the identity over
    /// the whole documented native range.
    #[test]
    fn os_encoding_round_trips(os in 0..=OS_ERROR_MAX) {
        let code = ErrorCode::from_os_error(os);
        prop_assert!(code.is_os_origin());
        prop_assert_eq!(code.to_os_error(), os);
    }

    /// The read-only classifier touches exactly two codes.
    #[test]
    fn classifier_is_identity_off_the_two_cases(raw in any::<i32>()) {
        let code = ErrorCode::from_raw(raw);
        let mapped = classify_read_only(code);

        if code == ErrorCode::from_os_error(OS_FILE_NOT_FOUND) {
            prop_assert_eq!(mapped, codes::NOT_FOUND);
        } else if code == ErrorCode::from_os_error(OS_ACCESS_DENIED) {
            prop_assert_eq!(mapped, codes::PERMISSION_DENIED);
        } else {
            prop_assert_eq!(mapped, code);
        }
    }
}

// ============================================================================
// RESOLUTION PROPERTIES
// ============================================================================

proptest! {
    /// Resolution accepts any code without panicking and always produces
    /// non-empty text when the sink has reasonable room.
    #[test]
    fn resolution_never_panics(raw in any::<i32>()) {
        let code = ErrorCode::from_raw(raw);

        let mut buf = [0u8; 64];
        let mut sink = BufSink::new(&mut buf);
        let msg = strerror(code, &mut sink);
        prop_assert!(!msg.is_empty());

        // The Display mirror must hold up for the same inputs.
        let displayed = code.to_string();
        prop_assert!(!displayed.is_empty());
    }

    /// Codes with no constant description render as generic text, bounded
    /// by the sink capacity and NUL-terminated in place.
    #[test]
    fn generic_messages_are_bounded_and_terminated(
        raw in 300i32..=100_000,
        cap in 1usize..=32,
    ) {
        let expected = format!("error return: {raw}");
        let mut buf = vec![0xAAu8; cap];
        let written;
        {
            let mut sink = BufSink::new(&mut buf);
            let msg = strerror(ErrorCode::from_raw(raw), &mut sink);
            prop_assert_eq!(msg, &expected[..(cap - 1).min(expected.len())]);
            written = msg.len();
        }
        prop_assert_eq!(buf[written], 0);
    }
}

// ============================================================================
// SINK PROPERTIES
// ============================================================================

proptest! {
    /// Bounded writes never overflow, always terminate, and truncate only
    /// at character boundaries.
    #[test]
    fn bounded_writes_stay_valid_utf8(s in "\\PC{0,64}", cap in 1usize..=16) {
        let mut buf = vec![0u8; cap];
        let len = format_bounded(&mut buf, format_args!("{s}")).unwrap();

        prop_assert!(len <= cap - 1);
        prop_assert_eq!(buf[len], 0);

        let text = std::str::from_utf8(&buf[..len]);
        prop_assert!(text.is_ok());

        // Anything that fits is written verbatim.
        if s.len() < cap {
            prop_assert_eq!(text.unwrap(), s);
        }
    }
}
