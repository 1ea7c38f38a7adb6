//! GNU strerror_r backend (glibc)
//!
//! glibc's default `strerror_r` symbol is the GNU variant: it takes a
//! scratch buffer, returns a pointer to the message - which may or may
//! not be the scratch buffer - and is guaranteed to succeed. The libc
//! crate binds the XSI variant (`__xpg_strerror_r`) instead, so the
//! GNU symbol is declared here directly.

use errfmt_core::MsgWriter;
use libc::{c_char, c_int, size_t};
use std::ffi::CStr;

use super::SCRATCH_SIZE;

extern "C" {
    #[link_name = "strerror_r"]
    fn gnu_strerror_r(errnum: c_int, buf: *mut c_char, buflen: size_t) -> *mut c_char;
}

pub(super) fn describe(errnum: i32, dst: &mut [u8]) -> bool {
    // Stack-local scratch; ownership of the returned string stays with
    // libc or with this frame, never with shared mutable state.
    let mut scratch = [0 as c_char; SCRATCH_SIZE];
    let text = unsafe {
        let p = gnu_strerror_r(errnum, scratch.as_mut_ptr(), SCRATCH_SIZE);
        CStr::from_ptr(p).to_bytes()
    };

    // Copied byte-wise: glibc messages are locale text, not guaranteed
    // UTF-8.
    let mut w = MsgWriter::new(dst);
    w.write_bytes(text);
    w.terminate();
    false // no post-pass on this target
}

pub(super) fn finish(_msg: &mut [u8]) {}
