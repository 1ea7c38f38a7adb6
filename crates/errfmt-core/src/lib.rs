//! # errfmt-core
//!
//! Core types for the errfmt error-message formatter.
//!
//! This crate is platform-agnostic and contains no OS-specific code.
//! The platform errno-to-text backends live in `errfmt-platform`.
//!
//! ## Modules
//!
//! - `buffer` - Bounded, truncating message writer over a caller-owned byte buffer
//! - `encoding` - Process-wide output-encoding flag
//! - `fmt` - The format-then-append-errno-text algorithm

pub mod buffer;
pub mod encoding;
pub mod fmt;

// Re-exports for convenience
pub use buffer::MsgWriter;
pub use encoding::{char_enc, set_char_enc, CharEnc};
pub use fmt::{vfmt_errmsg_for_errno_with, ErrnoText};

/// Constants for buffer sizing
pub mod constants {
    /// Suggested caller buffer size, in bytes including the terminator.
    ///
    /// Large enough to hold any message the platform lookup facilities
    /// produce. Callers may pass smaller or larger buffers; the
    /// formatter truncates rather than overflowing either way.
    pub const ERRBUF_SIZE: usize = 256;
}
