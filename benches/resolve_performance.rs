//! Benchmarks for the message-resolution tiers.
//!
//! The resolver sits on every error path of the engine, so each tier is
//! measured separately: constant-catalog hits (no buffer at all), OS-native
//! rendering, the generic fallback, and reuse of a session's buffer.

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use strata_errors::{BufSink, ErrorCode, Session, codes, strerror};

fn bench_constant_hit(c: &mut Criterion) {
    c.bench_function("strerror/constant", |b| {
        b.iter(|| {
            let mut buf = [0u8; 512];
            let mut sink = BufSink::new(&mut buf);
            black_box(strerror(black_box(codes::CONFLICT), &mut sink).len())
        })
    });
}

fn bench_os_origin(c: &mut Criterion) {
    let code = ErrorCode::from_os_error(2);
    c.bench_function("strerror/os_origin", |b| {
        b.iter(|| {
            let mut buf = [0u8; 512];
            let mut sink = BufSink::new(&mut buf);
            black_box(strerror(black_box(code), &mut sink).len())
        })
    });
}

fn bench_generic_fallback(c: &mut Criterion) {
    let code = ErrorCode::from_raw(999);
    c.bench_function("strerror/generic", |b| {
        b.iter(|| {
            let mut buf = [0u8; 512];
            let mut sink = BufSink::new(&mut buf);
            black_box(strerror(black_box(code), &mut sink).len())
        })
    });
}

fn bench_session_reuse(c: &mut Criterion) {
    let mut session = Session::new();
    let code = ErrorCode::from_os_error(2);
    c.bench_function("strerror/session_reuse", |b| {
        b.iter(|| black_box(session.strerror(black_box(code)).len()))
    });
}

criterion_group!(
    benches,
    bench_constant_hit,
    bench_os_origin,
    bench_generic_fallback,
    bench_session_reuse
);
criterion_main!(benches);
