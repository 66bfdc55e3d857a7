//! Immutable table of well-known error descriptions.
//!
//! Two fixed lookups built at compile time: the engine's own constants with
//! their canonical `STRATA_*` strings, and the common POSIX errno values
//! with their standard descriptions. The errno arms are keyed by the `libc`
//! constants so the numeric values are correct on every platform rather
//! than hard-coded from one errno.h.
//!
//! The table is a total, side-effect-free function of the code. Nothing
//! here allocates; every hit is a `&'static str`.

use crate::codes::{self, ErrorCode};

/// Look up the constant description for `code`, if it has one.
///
/// Returns `None` for OS-origin codes and for any value outside the known
/// set; those are resolved through the OS facility or the generic fallback
/// instead (see [`crate::resolve::strerror`]).
#[inline]
#[must_use]
pub fn message(code: ErrorCode) -> Option<&'static str> {
    engine_message(code).or_else(|| posix_message(code.raw()))
}

/// Canonical strings for the engine's named constants.
const fn engine_message(code: ErrorCode) -> Option<&'static str> {
    match code {
        codes::UNKNOWN => Some("STRATA_UNKNOWN: unspecified engine failure"),
        codes::CONFLICT => Some("STRATA_CONFLICT: conflict between concurrent operations"),
        codes::DUPLICATE_KEY => Some("STRATA_DUPLICATE_KEY: attempt to insert an existing key"),
        codes::NOT_FOUND => Some("STRATA_NOT_FOUND: item not found"),
        codes::PANIC => Some("STRATA_PANIC: fatal error, the engine must restart"),
        codes::PERMISSION_DENIED => {
            Some("STRATA_PERMISSION_DENIED: access denied to a storage resource")
        }
        codes::RESTART => Some("STRATA_RESTART: restart the operation"),
        codes::CACHE_FULL => Some("STRATA_CACHE_FULL: operation would overflow the cache"),
        _ => None,
    }
}

/// Standard descriptions for the portable errno set.
const fn posix_message(raw: i32) -> Option<&'static str> {
    match raw {
        0 => Some("Success"),
        libc::EPERM => Some("Operation not permitted"),
        libc::ENOENT => Some("No such file or directory"),
        libc::ESRCH => Some("No such process"),
        libc::EINTR => Some("Interrupted system call"),
        libc::EIO => Some("Input/output error"),
        libc::ENXIO => Some("No such device or address"),
        libc::E2BIG => Some("Argument list too long"),
        libc::ENOEXEC => Some("Exec format error"),
        libc::EBADF => Some("Bad file descriptor"),
        libc::ECHILD => Some("No child processes"),
        libc::EAGAIN => Some("Resource temporarily unavailable"),
        libc::ENOMEM => Some("Cannot allocate memory"),
        libc::EACCES => Some("Permission denied"),
        libc::EFAULT => Some("Bad address"),
        libc::EBUSY => Some("Device or resource busy"),
        libc::EEXIST => Some("File exists"),
        libc::EXDEV => Some("Invalid cross-device link"),
        libc::ENODEV => Some("No such device"),
        libc::ENOTDIR => Some("Not a directory"),
        libc::EISDIR => Some("Is a directory"),
        libc::EINVAL => Some("Invalid argument"),
        libc::ENFILE => Some("Too many open files in system"),
        libc::EMFILE => Some("Too many open files"),
        libc::ENOTTY => Some("Inappropriate ioctl for device"),
        libc::EFBIG => Some("File too large"),
        libc::ENOSPC => Some("No space left on device"),
        libc::ESPIPE => Some("Illegal seek"),
        libc::EROFS => Some("Read-only file system"),
        libc::EMLINK => Some("Too many links"),
        libc::EPIPE => Some("Broken pipe"),
        libc::EDOM => Some("Numerical argument out of domain"),
        libc::ERANGE => Some("Numerical result out of range"),
        _ => None,
    }
}
