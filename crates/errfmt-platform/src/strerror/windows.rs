//! Windows backend: _wcserror_s plus UTF-16 to UTF-8 transcoding
//!
//! `_wcserror_s` produces a UTF-16 message in a caller-supplied
//! buffer. The text is transcoded to UTF-8 into the destination,
//! truncating on character boundaries; when the process-wide encoding
//! flag selects the local code page, the complete message is then
//! converted in place via `WideCharToMultiByte`. When `_wcserror_s`
//! fails, the numeric fallback text is final and the code-page
//! post-pass is skipped.

use core::fmt::Write;

use errfmt_core::{char_enc, CharEnc, MsgWriter};
use libc::{c_int, size_t};
use windows_sys::Win32::Globalization::{WideCharToMultiByte, CP_ACP};

use super::SCRATCH_SIZE;

extern "C" {
    fn _wcserror_s(buf: *mut u16, size_in_words: size_t, errnum: c_int) -> c_int;
}

pub(super) fn describe(errnum: i32, dst: &mut [u8]) -> bool {
    // Stack-local UTF-16 scratch, sized independently of `dst`.
    let mut scratch = [0u16; SCRATCH_SIZE];
    let err = unsafe { _wcserror_s(scratch.as_mut_ptr(), SCRATCH_SIZE, errnum) };
    if err != 0 {
        // The CRT doesn't document what the failure codes mean.
        let mut w = MsgWriter::new(dst);
        let _ = write!(w, "Error {}", errnum);
        w.terminate();
        return false;
    }

    let wlen = scratch.iter().position(|&u| u == 0).unwrap_or(SCRATCH_SIZE);

    // Transcode to UTF-8 one scalar at a time; the writer refuses a
    // scalar that doesn't fit whole, so truncation never splits a
    // code point.
    let mut w = MsgWriter::new(dst);
    for c in char::decode_utf16(scratch[..wlen].iter().copied()) {
        let c = c.unwrap_or(char::REPLACEMENT_CHARACTER);
        let _ = w.write_char(c);
        if w.truncated() {
            break;
        }
    }
    w.terminate();
    true
}

pub(super) fn finish(msg: &mut [u8]) {
    if char_enc() == CharEnc::Local {
        utf8_to_acp_truncated(msg);
    }
}

/// Convert a NUL-terminated UTF-8 message to the active code page in
/// place, truncating - on a full character - if the converted form is
/// longer than the buffer.
fn utf8_to_acp_truncated(buf: &mut [u8]) {
    let len = match buf.iter().position(|&b| b == 0) {
        Some(n) => n,
        None => return,
    };
    if len == 0 {
        return;
    }
    // The message came out of our own transcoder, so it is valid
    // UTF-8; bail rather than guess if it somehow isn't.
    let s = match core::str::from_utf8(&buf[..len]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let wide: Vec<u16> = s.encode_utf16().collect();

    // Re-encode one scalar at a time so a truncation cut never lands
    // inside a multi-byte code-page sequence.
    let mut out = Vec::with_capacity(len);
    let mut i = 0;
    while i < wide.len() {
        let units = if wide[i] >= 0xD800 && wide[i] < 0xDC00 && i + 1 < wide.len() {
            2
        } else {
            1
        };
        let mut acp = [0u8; 8];
        let written = unsafe {
            WideCharToMultiByte(
                CP_ACP,
                0,
                wide[i..].as_ptr(),
                units as i32,
                acp.as_mut_ptr(),
                acp.len() as i32,
                core::ptr::null(),
                core::ptr::null_mut(),
            )
        };
        if written <= 0 {
            break;
        }
        if out.len() + written as usize > buf.len() - 1 {
            break;
        }
        out.extend_from_slice(&acp[..written as usize]);
        i += units;
    }

    if out.is_empty() {
        // Nothing converted; keep the UTF-8 text rather than erase it.
        return;
    }
    buf[..out.len()].copy_from_slice(&out);
    buf[out.len()] = 0;
}
