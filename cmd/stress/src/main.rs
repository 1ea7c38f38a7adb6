//! errfmt stress test
//!
//! Hammers the formatter from many threads with varying buffer
//! capacities and checks the termination invariant on every call:
//! NUL within capacity, or zero bytes written at capacity 0.
//!
//! Safe to run concurrently on targets using the GNU/POSIX/Windows
//! backends; on targets that fall back to the global `strerror`, this
//! is exactly the program that would expose the race.

use errfmt::fmt_errmsg_for_errno;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

const THREADS: usize = 8;
const ITERS: usize = 50_000;

fn main() {
    println!("=== errfmt Stress Test ===");
    println!("{} threads x {} iterations\n", THREADS, ITERS);

    let calls = Arc::new(AtomicU64::new(0));
    let start = Instant::now();

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let calls = calls.clone();
            std::thread::spawn(move || {
                for i in 0..ITERS {
                    // Sweep capacities 0..64 so every boundary case
                    // (empty, terminator-only, no-delimiter, full)
                    // gets exercised.
                    let cap = i % 64;
                    let mut errbuf = vec![0xffu8; cap];
                    let errnum = (i % 140) as i32;
                    fmt_errmsg_for_errno!(&mut errbuf, errnum, "t{} op {} failed", t, i);

                    if cap == 0 {
                        continue;
                    }
                    let nul = errbuf.iter().position(|&b| b == 0);
                    assert!(
                        nul.map(|n| n < cap).unwrap_or(false),
                        "thread {} iter {}: unterminated at capacity {}",
                        t,
                        i,
                        cap
                    );
                    calls.fetch_add(1, Ordering::Relaxed);
                }
            })
        })
        .collect();

    for h in handles {
        h.join().expect("stress thread panicked");
    }

    let elapsed = start.elapsed();
    let total = calls.load(Ordering::Relaxed);
    println!("{} checked calls in {:?}", total, elapsed);
    println!(
        "~{:.0} calls/sec",
        total as f64 / elapsed.as_secs_f64()
    );
    println!("\nAll buffers terminated within capacity.");
}
