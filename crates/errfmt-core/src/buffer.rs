//! Bounded message writer over a caller-owned byte buffer
//!
//! `MsgWriter` is the cursor that replaces hand-tracked offset/remaining
//! arithmetic when assembling a message in a fixed-capacity buffer. It
//! never writes past the buffer, always leaves room for a terminating
//! NUL on non-empty buffers, and cuts UTF-8 text at character
//! boundaries when it has to truncate.
//!
//! Truncation is not an error here: the writer reports it through
//! [`MsgWriter::truncated`] but keeps returning `Ok` from `fmt::Write`,
//! so a formatting pass always runs to completion (vsnprintf-style)
//! instead of aborting with a half-written buffer.

use core::fmt;

/// Bounded, truncating writer over a fixed-capacity byte buffer.
///
/// The capacity is the full slice length, including the byte reserved
/// for the NUL terminator. A zero-length buffer is legal: nothing is
/// ever written to it, not even the terminator.
pub struct MsgWriter<'a> {
    buf: &'a mut [u8],
    /// Bytes written so far, excluding the terminator.
    pos: usize,
    truncated: bool,
}

impl<'a> MsgWriter<'a> {
    /// Create a writer positioned at the start of `buf`.
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self {
            buf,
            pos: 0,
            truncated: false,
        }
    }

    /// Total capacity in bytes, including the terminator byte.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Bytes written so far, excluding the terminator.
    #[inline]
    pub fn len(&self) -> usize {
        self.pos
    }

    /// Whether nothing has been written yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pos == 0
    }

    /// Whether any write so far did not fit completely.
    #[inline]
    pub fn truncated(&self) -> bool {
        self.truncated
    }

    /// Bytes still available for text, not counting the byte reserved
    /// for the terminator. Zero for a zero-capacity buffer.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.len().saturating_sub(1).saturating_sub(self.pos)
    }

    /// Append raw bytes, truncating byte-wise if they don't fit.
    ///
    /// Used for platform text that is not guaranteed to be UTF-8
    /// (locale-dependent strerror output). For UTF-8 text prefer the
    /// `fmt::Write` impl, which truncates on character boundaries.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        let take = bytes.len().min(self.remaining());
        self.buf[self.pos..self.pos + take].copy_from_slice(&bytes[..take]);
        self.pos += take;
        if take < bytes.len() {
            self.truncated = true;
        }
    }

    /// Write the NUL terminator at the current position.
    ///
    /// No-op on a zero-capacity buffer. The invariant `pos < capacity`
    /// on non-empty buffers guarantees the terminator always fits.
    pub fn terminate(&mut self) {
        if !self.buf.is_empty() {
            self.buf[self.pos] = 0;
        }
    }

    /// The unwritten tail of the buffer, starting at the current
    /// position and including the byte reserved for the terminator.
    ///
    /// Handed to platform facilities that fill a byte region directly
    /// (POSIX strerror_r style).
    pub fn rest_mut(&mut self) -> &mut [u8] {
        &mut self.buf[self.pos..]
    }
}

impl fmt::Write for MsgWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let avail = self.remaining();
        let take = if s.len() <= avail {
            s.len()
        } else {
            floor_char_boundary(s, avail)
        };
        self.buf[self.pos..self.pos + take].copy_from_slice(&s.as_bytes()[..take]);
        self.pos += take;
        if take < s.len() {
            self.truncated = true;
        }
        // Truncation is a documented outcome, not a formatting error.
        Ok(())
    }
}

/// Largest byte index `<= index` that is a UTF-8 character boundary
/// of `s`. (`str::floor_char_boundary` is still unstable.)
pub fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    let mut i = index;
    while i > 0 && !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}
