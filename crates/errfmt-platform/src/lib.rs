//! # errfmt-platform
//!
//! Platform-specific errno-to-text backends for the errfmt formatter.
//!
//! Each target compiles exactly one backend (see `strerror`); all of
//! them satisfy the same contract: bounded, NUL-terminated, best-effort
//! non-empty text, with every lookup failure absorbed into fallback
//! text.

pub mod strerror;

// Re-exports for convenience
pub use strerror::SystemErrnoText;
