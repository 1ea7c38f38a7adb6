//! Last-resort backend: the global strerror
//!
//! Targets with neither `strerror_r` variant nor `_wcserror_s` fall
//! back to plain `strerror`, which hands back shared static storage.
//! NOT thread-safe: concurrent callers must serialize, or accept a
//! race on the message text (never on memory safety of this copy -
//! the copy itself is bounded).

use errfmt_core::MsgWriter;
use std::ffi::CStr;

pub(super) fn describe(errnum: i32, dst: &mut [u8]) -> bool {
    let text = unsafe { CStr::from_ptr(libc::strerror(errnum)) };
    let mut w = MsgWriter::new(dst);
    w.write_bytes(text.to_bytes());
    w.terminate();
    false // no post-pass on this target
}

pub(super) fn finish(_msg: &mut [u8]) {}
