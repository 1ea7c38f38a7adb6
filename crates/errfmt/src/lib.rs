//! # errfmt - bounded error-message formatting with errno text
//!
//! Formats a message into a caller-owned fixed-size buffer and appends
//! the platform's description of an errno value after it, separated by
//! `": "`. The buffer is never overflowed and is always left
//! NUL-terminated when its capacity allows a terminator at all; when
//! there is no room for the delimiter, the formatted prefix alone is
//! kept. Nothing is ever reported outward: a routine whose job is
//! producing error messages degrades to *some* displayable text
//! instead of failing.
//!
//! ## Quick Start
//!
//! ```
//! use errfmt::{fmt_errmsg_for_errno, ERRBUF_SIZE};
//!
//! let mut errbuf = [0u8; ERRBUF_SIZE];
//! fmt_errmsg_for_errno!(&mut errbuf, 2, "cannot open {}", "foo.txt");
//!
//! let n = errbuf.iter().position(|&b| b == 0).unwrap();
//! let msg = String::from_utf8_lossy(&errbuf[..n]);
//! assert!(msg.starts_with("cannot open foo.txt: "));
//! ```
//!
//! ## Entry points
//!
//! - [`fmt_errmsg_for_errno!`] captures its arguments with
//!   `format_args!` and forwards them - the variadic entry.
//! - [`vfmt_errmsg_for_errno`] takes an already-captured
//!   `fmt::Arguments` handle - use it when forwarding arguments
//!   received from your own caller.
//!
//! ## Thread safety
//!
//! Concurrent calls with distinct buffers are safe on targets using
//! the GNU, POSIX or Windows backends (every mainstream target).
//! Targets that fall back to the global `strerror` must serialize
//! calls; see `errfmt-platform`.

use core::fmt;

pub use errfmt_core::constants::ERRBUF_SIZE;
pub use errfmt_core::{
    char_enc, set_char_enc, vfmt_errmsg_for_errno_with, CharEnc, ErrnoText, MsgWriter,
};
pub use errfmt_platform::SystemErrnoText;

/// Render `args` into `errbuf` and append `": "` plus the platform's
/// text for `errnum`, bounded by `errbuf.len()` (which includes the
/// terminator byte).
///
/// A zero-length buffer is legal and left untouched. See
/// [`vfmt_errmsg_for_errno_with`] for the full contract.
pub fn vfmt_errmsg_for_errno(errbuf: &mut [u8], errnum: i32, args: fmt::Arguments<'_>) {
    vfmt_errmsg_for_errno_with::<SystemErrnoText>(errbuf, errnum, args);
}

/// Like [`vfmt_errmsg_for_errno`], with the errno taken from the
/// calling thread's last OS error.
///
/// Convenience for the common shape: syscall fails, message gets
/// formatted immediately after.
pub fn vfmt_errmsg_for_os_error(errbuf: &mut [u8], args: fmt::Arguments<'_>) {
    let errnum = std::io::Error::last_os_error().raw_os_error().unwrap_or(0);
    vfmt_errmsg_for_errno(errbuf, errnum, args);
}

/// Format a message and append errno text - variadic entry.
///
/// Captures the arguments with `format_args!` and delegates to
/// [`vfmt_errmsg_for_errno`].
///
/// ```
/// use errfmt::fmt_errmsg_for_errno;
///
/// let mut errbuf = [0u8; 64];
/// fmt_errmsg_for_errno!(&mut errbuf, 2, "mmap of {} bytes failed", 4096);
/// ```
#[macro_export]
macro_rules! fmt_errmsg_for_errno {
    ($errbuf:expr, $errnum:expr, $($arg:tt)*) => {{
        $crate::vfmt_errmsg_for_errno($errbuf, $errnum, format_args!($($arg)*));
    }};
}

/// Format a message and append text for the last OS error.
#[macro_export]
macro_rules! fmt_errmsg_for_os_error {
    ($errbuf:expr, $($arg:tt)*) => {{
        $crate::vfmt_errmsg_for_os_error($errbuf, format_args!($($arg)*));
    }};
}
