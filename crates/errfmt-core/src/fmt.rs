//! Format a message and append the platform's errno text
//!
//! One algorithm behind two entry shapes: the `errfmt` facade crate
//! wraps [`vfmt_errmsg_for_errno_with`] in a variadic macro that
//! captures its arguments with `format_args!` and forwards the
//! resulting `fmt::Arguments` handle here.
//!
//! The errno-to-text source is a compile-time seam: each target gets
//! exactly one [`ErrnoText`] implementation (see `errfmt-platform`),
//! never a per-call runtime choice.

use core::fmt::{self, Write};

use crate::buffer::MsgWriter;

/// A source of human-readable text for platform error codes.
///
/// Implementations absorb every failure mode of the underlying lookup
/// facility and degrade to fallback text; nothing propagates to the
/// caller.
pub trait ErrnoText {
    /// Write the platform's description of `errnum` into `dst`.
    ///
    /// Contract: never writes past `dst.len()` bytes, leaves `dst`
    /// NUL-terminated whenever it is non-empty, and produces
    /// best-effort non-empty text when there is room for any. `dst`
    /// may be as small as one byte (terminator only).
    ///
    /// Returns whether [`finish`](ErrnoText::finish) should run over
    /// the complete message. Backends that substituted fallback text
    /// return `false`: the fallback is already in its final form.
    fn describe(errnum: i32, dst: &mut [u8]) -> bool;

    /// Post-pass over the complete message once the error text is in
    /// place, run only when [`describe`](ErrnoText::describe) asked
    /// for it. The Windows backend converts the whole buffer to the
    /// local code page here when UTF-8 output is not selected; other
    /// backends keep the default no-op.
    fn finish(_msg: &mut [u8]) {}
}

/// Render `args` into `errbuf`, then append `": "` and the text for
/// `errnum` - all bounded by `errbuf.len()`, which includes the byte
/// for the terminating NUL.
///
/// Behavior, in order:
///
/// 1. `args` is rendered through a truncating writer and terminated.
///    A zero-length `errbuf` is legal: nothing is written at all.
/// 2. If the rendered message plus `": "` plus the terminator (3
///    bytes) does not fit, the buffer keeps just the rendered message.
///    Partial context beats none.
/// 3. Otherwise the delimiter is appended and the errno text is
///    written into the remaining space by the [`ErrnoText`] backend.
///
/// There is no return value: every failure mode of the platform
/// lookup ends up as text in the buffer. The routine exists to produce
/// error messages, so it cannot fail outward without infinite regress.
pub fn vfmt_errmsg_for_errno_with<L: ErrnoText>(
    errbuf: &mut [u8],
    errnum: i32,
    args: fmt::Arguments<'_>,
) {
    let mut w = MsgWriter::new(&mut errbuf[..]);
    let _ = w.write_fmt(args); // truncation is not an error
    w.terminate();

    // Enough space to append ": "? Including the terminator that's 3
    // bytes. Also covers capacity 0: nothing was written above and
    // nothing more will be.
    if w.len() + 3 > w.capacity() {
        // No - leave them what we've produced.
        return;
    }
    w.write_bytes(b": ");
    w.terminate();

    // Append the text for the error code into the remaining space,
    // starting at the terminator just written.
    if L::describe(errnum, w.rest_mut()) {
        L::finish(errbuf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Deterministic stand-in for a platform backend.
    struct StubErrno;

    impl ErrnoText for StubErrno {
        fn describe(errnum: i32, dst: &mut [u8]) -> bool {
            let mut w = MsgWriter::new(dst);
            let _ = write!(w, "stub text {}", errnum);
            w.terminate();
            true
        }
    }

    /// Backend with an observable post-pass: lookup "succeeds" for
    /// non-negative codes and the post-pass uppercases the message;
    /// negative codes take the fallback path, which must leave the
    /// message untouched by the post-pass.
    struct PostPassErrno;

    impl ErrnoText for PostPassErrno {
        fn describe(errnum: i32, dst: &mut [u8]) -> bool {
            let mut w = MsgWriter::new(dst);
            let _ = write!(w, "text {}", errnum);
            w.terminate();
            errnum >= 0
        }

        fn finish(msg: &mut [u8]) {
            for b in msg.iter_mut() {
                if *b == 0 {
                    break;
                }
                b.make_ascii_uppercase();
            }
        }
    }

    fn cstr(buf: &[u8]) -> &str {
        let n = buf.iter().position(|&b| b == 0).expect("unterminated");
        core::str::from_utf8(&buf[..n]).expect("invalid utf-8")
    }

    #[test]
    fn test_appends_delimiter_and_errno_text() {
        let mut buf = [0xffu8; 64];
        vfmt_errmsg_for_errno_with::<StubErrno>(&mut buf, 7, format_args!("op {}", "x"));
        assert_eq!(cstr(&buf), "op x: stub text 7");
    }

    #[test]
    fn test_zero_capacity_untouched() {
        let mut buf: [u8; 0] = [];
        vfmt_errmsg_for_errno_with::<StubErrno>(&mut buf, 1, format_args!("whatever"));
    }

    #[test]
    fn test_no_room_for_delimiter_keeps_prefix_only() {
        // "cannot open foo.txt" is 19 bytes; 19 + 3 > 10.
        let mut buf = [0xffu8; 10];
        vfmt_errmsg_for_errno_with::<StubErrno>(
            &mut buf,
            2,
            format_args!("cannot open {}", "foo.txt"),
        );
        assert_eq!(cstr(&buf), "cannot op");
        assert_eq!(buf[9], 0);
    }

    #[test]
    fn test_exact_fit_boundary() {
        // msglen 5, capacity 8: 5 + 3 == 8, delimiter fits but the
        // remaining region only holds the terminator.
        let mut buf = [0xffu8; 8];
        vfmt_errmsg_for_errno_with::<StubErrno>(&mut buf, 3, format_args!("abcde"));
        assert_eq!(cstr(&buf), "abcde: ");

        // One byte less and the delimiter is dropped entirely.
        let mut buf = [0xffu8; 7];
        vfmt_errmsg_for_errno_with::<StubErrno>(&mut buf, 3, format_args!("abcde"));
        assert_eq!(cstr(&buf), "abcde");
    }

    #[test]
    fn test_errno_text_is_bounded() {
        // Room for the delimiter but not all of "stub text 1234".
        let mut buf = [0xffu8; 12];
        vfmt_errmsg_for_errno_with::<StubErrno>(&mut buf, 1234, format_args!("ab"));
        assert_eq!(cstr(&buf), "ab: stub te");
    }

    #[test]
    fn test_terminated_at_every_capacity() {
        for cap in 1..48 {
            let mut buf = vec![0xffu8; cap];
            vfmt_errmsg_for_errno_with::<StubErrno>(
                &mut buf,
                42,
                format_args!("héllo wörld {}", "ñandú"),
            );
            // Terminated, and valid UTF-8 up to the terminator.
            let s = cstr(&buf);
            assert!(s.len() < cap);
        }
    }

    #[test]
    fn test_finish_runs_only_when_describe_asks() {
        let mut ok = [0u8; 32];
        vfmt_errmsg_for_errno_with::<PostPassErrno>(&mut ok, 1, format_args!("m"));
        assert_eq!(cstr(&ok), "M: TEXT 1");

        let mut fb = [0u8; 32];
        vfmt_errmsg_for_errno_with::<PostPassErrno>(&mut fb, -1, format_args!("m"));
        assert_eq!(cstr(&fb), "m: text -1");
    }

    #[test]
    fn test_idempotent_for_same_inputs() {
        let mut a = [0u8; 40];
        let mut b = [0u8; 40];
        vfmt_errmsg_for_errno_with::<StubErrno>(&mut a, 9, format_args!("m {}", 1));
        vfmt_errmsg_for_errno_with::<StubErrno>(&mut b, 9, format_args!("m {}", 1));
        assert_eq!(a, b);
    }
}
