//! Formatting throughput: full message assembly into a 256-byte buffer.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use errfmt::{fmt_errmsg_for_errno, ERRBUF_SIZE};

fn bench_fmt_errmsg(c: &mut Criterion) {
    c.bench_function("fmt_errmsg_for_errno", |b| {
        let mut errbuf = [0u8; ERRBUF_SIZE];
        b.iter(|| {
            fmt_errmsg_for_errno!(
                &mut errbuf,
                black_box(2),
                "cannot open {}",
                black_box("foo.txt")
            );
            black_box(errbuf[0]);
        })
    });

    c.bench_function("fmt_errmsg_truncating", |b| {
        // Small buffer: exercises the no-delimiter early return.
        let mut errbuf = [0u8; 10];
        b.iter(|| {
            fmt_errmsg_for_errno!(
                &mut errbuf,
                black_box(2),
                "cannot open {}",
                black_box("foo.txt")
            );
            black_box(errbuf[0]);
        })
    });
}

criterion_group!(benches, bench_fmt_errmsg);
criterion_main!(benches);
