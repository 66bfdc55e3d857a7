//! # Strata Errors
//!
//! Error translation for the Strata storage engine: one signed code space
//! covering the engine's named constants, the C runtime's errno domain, and
//! native operating-system errors, plus the machinery to turn any such code
//! back into text.
//!
//! ## Design Philosophy
//!
//! 1. **One namespace.** Every failure is a single `i32`-backed
//!    [`ErrorCode`]; native OS errors are folded in through a fixed,
//!    reversible offset so the original OS diagnosis is always recoverable.
//! 2. **Resolution never fails.** [`strerror`] degrades through tiers
//!    (constant catalog, OS description, generic text, static fallback) and
//!    always returns a usable string.
//! 3. **No allocation on the error path.** Messages are static strings or
//!    are written into bounded, NUL-terminated buffers that truncate rather
//!    than overflow.
//! 4. **Ambient state stays behind narrow doors.** The thread's errno and
//!    OS last-error slots are read only by the two accessors in
//!    [`last_error`], under an explicit capture-immediately contract.
//!
//! ## Quick Start
//!
//! ```rust
//! use strata_errors::{codes, strerror, BufSink, ErrorCode, Session};
//!
//! // Engine constants resolve to canonical static strings.
//! let mut session = Session::new();
//! assert_eq!(
//!     session.strerror(codes::CONFLICT),
//!     "STRATA_CONFLICT: conflict between concurrent operations",
//! );
//!
//! // Anything else is written into a bounded sink, here a caller buffer.
//! let mut buf = [0u8; 64];
//! let mut sink = BufSink::new(&mut buf);
//! assert_eq!(strerror(ErrorCode::from_raw(999), &mut sink), "error return: 999");
//! ```
//!
//! ## Capturing a failure
//!
//! ```rust,no_run
//! use std::fs::File;
//! use strata_errors::{classify_read_only, last_error};
//!
//! if File::open("data/strata.wt").is_err() {
//!     // Capture before anything else can overwrite the slot.
//!     let code = last_error::last_os_error();
//!     // Read-only deployments fold two OS failures into engine terms.
//!     let code = classify_read_only(code);
//!     eprintln!("open failed: {code}");
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod catalog;
pub mod classify;
pub mod codes;
pub mod last_error;
pub mod resolve;
pub mod session;
pub mod sink;

pub use classify::*;
pub use codes::*;
pub use last_error::*;
pub use resolve::*;
pub use session::*;
pub use sink::*;
