//! Process-wide output-encoding flag
//!
//! Decides whether error text is left as UTF-8 or converted to the
//! legacy local code page. The flag is set once by whoever owns
//! encoding policy (an application's init path) and is read-only from
//! the formatting path; only the Windows wide-character backend ever
//! consults it.
//!
//! # Environment Variables
//!
//! - `ERRFMT_CHAR_ENC=utf8|local` - Initial encoding when no explicit
//!   call to [`set_char_enc`] happens first

use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

/// Output encoding for error-message text.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharEnc {
    /// Convert to the platform's legacy local code page (Windows ACP).
    Local = 0,
    /// Leave text as UTF-8.
    Utf8 = 1,
}

impl CharEnc {
    fn from_u8(v: u8) -> Self {
        match v {
            0 => CharEnc::Local,
            _ => CharEnc::Utf8,
        }
    }
}

// Global configuration (initialized once)
static CHAR_ENC: AtomicU8 = AtomicU8::new(CharEnc::Local as u8);
static INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Initialize the encoding flag from the environment.
///
/// Called automatically on first read, but can be called explicitly
/// for deterministic initialization. Default is `Local`, matching the
/// platform's historical behavior until a caller opts into UTF-8.
pub fn init() {
    if INITIALIZED.swap(true, Ordering::SeqCst) {
        return; // Already initialized
    }

    if let Ok(val) = std::env::var("ERRFMT_CHAR_ENC") {
        let enc = match val.to_lowercase().as_str() {
            "utf8" | "utf-8" => CharEnc::Utf8,
            _ => CharEnc::Local,
        };
        CHAR_ENC.store(enc as u8, Ordering::Relaxed);
    }
}

/// Set the output encoding programmatically.
///
/// Wins over the environment if called before the first read. Only
/// affects the Windows wide-character backend; on other targets the
/// flag is never consulted.
pub fn set_char_enc(enc: CharEnc) {
    INITIALIZED.store(true, Ordering::SeqCst);
    CHAR_ENC.store(enc as u8, Ordering::Relaxed);
}

/// Current output encoding.
#[inline]
pub fn char_enc() -> CharEnc {
    if !INITIALIZED.load(Ordering::Relaxed) {
        init();
    }
    CharEnc::from_u8(CHAR_ENC.load(Ordering::Relaxed))
}
