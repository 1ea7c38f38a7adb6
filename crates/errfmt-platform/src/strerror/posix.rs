//! POSIX strerror_r backend
//!
//! The XSI variant fills the caller's buffer directly and can fail:
//! EINVAL for an unrecognized code, ERANGE when the buffer is too
//! small. Neither is guaranteed to leave a message behind, so both get
//! explicit fallback text naming the numeric code.

use core::fmt::Write;

use errfmt_core::MsgWriter;
use libc::c_char;

pub(super) fn describe(errnum: i32, dst: &mut [u8]) -> bool {
    let ret = unsafe { libc::strerror_r(errnum, dst.as_mut_ptr() as *mut c_char, dst.len()) };

    // Normalize the two error-return conventions seen in the wild:
    // the error number as the return value, or -1 with errno set.
    let err = if ret < 0 {
        std::io::Error::last_os_error().raw_os_error().unwrap_or(0)
    } else {
        ret
    };

    match err {
        0 => {}
        libc::ERANGE => {
            let mut w = MsgWriter::new(dst);
            let _ = write!(w, "Message for error {} is too long", errnum);
            w.terminate();
        }
        // EINVAL, or anything else the libc dreams up: treat it as an
        // unrecognized code so the buffer still ends up terminated
        // with usable text.
        _ => {
            let mut w = MsgWriter::new(dst);
            let _ = write!(w, "Unknown error: {}", errnum);
            w.terminate();
        }
    }
    false // no post-pass on this target
}

pub(super) fn finish(_msg: &mut [u8]) {}
