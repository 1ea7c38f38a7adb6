//! Errno-to-text lookup, one backend per target
//!
//! The C library world offers four mutually exclusive facilities for
//! turning an errno into text, each with a different failure mode:
//!
//! - GNU `strerror_r`: returns a pointer (maybe not your buffer),
//!   never fails
//! - POSIX `strerror_r`: fills your buffer, may fail with EINVAL or
//!   ERANGE without leaving a message behind
//! - Windows `_wcserror_s`: produces UTF-16, may fail, and the result
//!   may need code-page conversion
//! - plain `strerror`: always works, but hands back shared static
//!   storage
//!
//! Exactly one backend is selected per target at compile time. The
//! GNU, POSIX and Windows backends use only stack-local scratch and
//! are safe to call concurrently with distinct buffers; the `strerror`
//! fallback is NOT thread-safe and callers on targets that land there
//! must serialize calls themselves.

use errfmt_core::ErrnoText;

/// Scratch size, in units (bytes or UTF-16 code units), for backends
/// that fill a local buffer before copying out. Deliberately
/// independent of the caller's buffer capacity: neither bounds the
/// other, and copies out of scratch are bounded by the destination.
pub(crate) const SCRATCH_SIZE: usize = 256;

cfg_if::cfg_if! {
    if #[cfg(windows)] {
        mod windows;
        use windows as imp;
    } else if #[cfg(all(target_os = "linux", target_env = "gnu"))] {
        mod gnu;
        use gnu as imp;
    } else if #[cfg(unix)] {
        mod posix;
        use posix as imp;
    } else {
        mod fallback;
        use fallback as imp;
    }
}

/// The platform's errno-to-text source, selected at compile time.
///
/// Thread-safety matches the selected backend: everywhere except the
/// `strerror` fallback, concurrent calls with distinct buffers are
/// safe.
pub struct SystemErrnoText;

impl ErrnoText for SystemErrnoText {
    fn describe(errnum: i32, dst: &mut [u8]) -> bool {
        if dst.is_empty() {
            return false;
        }
        imp::describe(errnum, dst)
    }

    fn finish(msg: &mut [u8]) {
        imp::finish(msg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use errfmt_core::ErrnoText;

    fn describe_into(errnum: i32, cap: usize) -> Vec<u8> {
        let mut buf = vec![0xffu8; cap];
        SystemErrnoText::describe(errnum, &mut buf);
        buf
    }

    fn cstr(buf: &[u8]) -> &[u8] {
        let n = buf.iter().position(|&b| b == 0).expect("unterminated");
        &buf[..n]
    }

    #[test]
    fn test_known_errno_nonempty() {
        let buf = describe_into(libc::ENOENT, 128);
        let text = cstr(&buf);
        assert!(!text.is_empty());
    }

    // Exact bytes assume the C locale; skip under a configured one
    // rather than chase LC_MESSAGES translations.
    #[cfg(all(target_os = "linux", target_env = "gnu"))]
    #[test]
    fn test_enoent_text_linux() {
        let localized = ["LC_ALL", "LC_MESSAGES", "LANG"]
            .iter()
            .filter_map(std::env::var_os)
            .any(|v| !v.is_empty() && v != "C" && v != "C.UTF-8" && v != "POSIX");
        if localized {
            return;
        }
        let buf = describe_into(libc::ENOENT, 128);
        assert_eq!(cstr(&buf), b"No such file or directory");
    }

    #[test]
    fn test_out_of_range_errno_still_terminated() {
        let buf = describe_into(1_000_000, 128);
        let text = cstr(&buf);
        assert!(!text.is_empty());
    }

    // musl reports unknown codes as success with its own text, so the
    // EINVAL fallback is only observable on the BSD-family libcs.
    #[cfg(any(target_os = "macos", target_os = "freebsd"))]
    #[test]
    fn test_invalid_errno_fallback_posix() {
        let buf = describe_into(1_000_000, 128);
        assert_eq!(cstr(&buf), b"Unknown error: 1000000");
    }

    #[test]
    fn test_tiny_destination_is_bounded() {
        for cap in 1..8 {
            let buf = describe_into(libc::ENOENT, cap);
            let text = cstr(&buf);
            assert!(text.len() < cap);
        }
    }

    #[test]
    fn test_describe_tolerates_empty_destination() {
        let mut buf: [u8; 0] = [];
        SystemErrnoText::describe(libc::ENOENT, &mut buf);
    }
}
