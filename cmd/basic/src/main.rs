//! Basic errfmt example
//!
//! Opens a file that doesn't exist and formats the resulting error
//! message at a few buffer capacities to show the truncation behavior.
//!
//! # Environment Variables
//!
//! - `ERRFMT_CHAR_ENC=utf8|local` - Output encoding (Windows only)

use errfmt::{fmt_errmsg_for_os_error, ERRBUF_SIZE};
use std::fs::File;

fn print_buf(label: &str, buf: &[u8]) {
    match buf.iter().position(|&b| b == 0) {
        Some(n) => println!("{:>12}: {}", label, String::from_utf8_lossy(&buf[..n])),
        None => println!("{:>12}: <unterminated, capacity 0>", label),
    }
}

fn main() {
    println!("=== errfmt Basic Example ===\n");

    let path = "/no/such/file.txt";
    let err = File::open(path).expect_err("the demo path should not exist");
    println!("open({}) failed: {:?}\n", path, err.kind());

    // Full-size buffer: message plus delimiter plus platform text.
    let mut errbuf = [0u8; ERRBUF_SIZE];
    let _ = File::open(path); // re-arm the thread's last OS error
    fmt_errmsg_for_os_error!(&mut errbuf, "cannot open {}", path);
    print_buf("full", &errbuf);

    // Tight buffer: delimiter still fits, platform text is truncated.
    let mut errbuf = [0u8; 28];
    let _ = File::open(path);
    fmt_errmsg_for_os_error!(&mut errbuf, "cannot open {}", path);
    print_buf("28 bytes", &errbuf);

    // Too tight for the delimiter: prefix only.
    let mut errbuf = [0u8; 10];
    let _ = File::open(path);
    fmt_errmsg_for_os_error!(&mut errbuf, "cannot open {}", path);
    print_buf("10 bytes", &errbuf);
}
