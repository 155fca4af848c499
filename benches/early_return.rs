//! Benchmarks for early-return performance.
//!
//! Compares handlers and terminal operations against plain `Result` and `?`.
//! Each pair does the same work: same allocations, same context formatting.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use handle_result::{handle, Error, Status, Unwind, Val};
use std::io;

// ============================================================
// Test helpers
// ============================================================

#[inline(never)]
fn io_err(msg: &str) -> io::Error {
    io::Error::new(io::ErrorKind::Other, msg)
}

#[inline(never)]
fn fallible_ok() -> Result<i32, io::Error> {
    Ok(42)
}

#[inline(never)]
fn fallible_err() -> Result<i32, io::Error> {
    Err(io_err("fail"))
}

#[inline(never)]
fn val_ok() -> Val<i32> {
    Val::from_result(fallible_ok())
}

#[inline(never)]
fn val_err() -> Val<i32> {
    Val::from_result(fallible_err())
}

// ============================================================
// 1. BASELINE: Error creation costs
// ============================================================

fn bench_baseline_io_error(c: &mut Criterion) {
    c.bench_function("baseline_io_error", |b| b.iter(|| black_box(io_err("fail"))));
}

fn bench_baseline_shared_error(c: &mut Criterion) {
    c.bench_function("baseline_shared_error", |b| {
        b.iter(|| black_box(Error::new(io_err("fail"))))
    });
}

fn bench_baseline_context(c: &mut Criterion) {
    c.bench_function("baseline_context", |b| {
        b.iter(|| black_box(Error::new(io_err("fail")).context("loading")))
    });
}

// ============================================================
// 2. SUCCESS PATH: No error raised
// ============================================================

fn bench_success_handle(c: &mut Criterion) {
    c.bench_function("success_handle", |b| {
        b.iter(|| {
            let v: Val<i32> = handle(|| {
                let n = val_ok().or_error("loading")?;
                Ok(Val::new(n + 1))
            });
            black_box(v)
        })
    });
}

fn bench_success_rust(c: &mut Criterion) {
    c.bench_function("success_rust", |b| {
        b.iter(|| {
            let r: Result<i32, Error> = (|| {
                let n = fallible_ok().map_err(|e| Error::new(e).context("loading"))?;
                Ok(n + 1)
            })();
            black_box(r)
        })
    });
}

// ============================================================
// 3. ERROR PATH: Explicit channel with `?`
// ============================================================

fn bench_error_handle(c: &mut Criterion) {
    c.bench_function("error_handle", |b| {
        b.iter(|| {
            let v: Val<i32> = handle(|| {
                let n = val_err().or_error("loading")?;
                Ok(Val::new(n + 1))
            });
            black_box(v)
        })
    });
}

fn bench_error_rust(c: &mut Criterion) {
    c.bench_function("error_rust", |b| {
        b.iter(|| {
            let r: Result<i32, Error> = (|| {
                let n = fallible_err().map_err(|e| Error::new(e).context("loading"))?;
                Ok(n + 1)
            })();
            black_box(r)
        })
    });
}

// ============================================================
// 4. NATIVE: Raised from a callback with no room for `?`
//    Pays for a real unwind
// ============================================================

fn bench_native_raise(c: &mut Criterion) {
    c.bench_function("native_raise", |b| {
        b.iter(|| {
            let v: Val<i32> = handle(|| {
                let sum: i32 = (0..4)
                    .map(|i| {
                        let v = if i == 3 { val_err() } else { val_ok() };
                        v.or_error("item").unwrap_or_else(|signal: Unwind| signal.raise())
                    })
                    .sum();
                Ok(Val::new(sum))
            });
            black_box(v)
        })
    });
}

fn bench_native_rust(c: &mut Criterion) {
    c.bench_function("native_rust", |b| {
        b.iter(|| {
            let r: Result<i32, Error> = (0..4)
                .map(|i| {
                    let r = if i == 3 { fallible_err() } else { fallible_ok() };
                    r.map_err(|e| Error::new(e).context("item"))
                })
                .sum();
            black_box(r)
        })
    });
}

// ============================================================
// 5. NESTED: Three levels, each adding context
// ============================================================

fn bench_nested_handle(c: &mut Criterion) {
    fn level3() -> Result<i32, Unwind> {
        val_err().or_error("level3")
    }
    fn level2() -> Result<i32, Unwind> {
        let n = level3()?;
        Val::new(n).or_error("level2")
    }
    fn level1() -> Status {
        handle(|| {
            level2()?;
            Ok(Status::ok())
        })
    }

    c.bench_function("nested_handle", |b| b.iter(|| black_box(level1())));
}

fn bench_nested_rust(c: &mut Criterion) {
    fn level3() -> Result<i32, Error> {
        fallible_err().map_err(|e| Error::new(e).context("level3"))
    }
    fn level2() -> Result<i32, Error> {
        let n = level3()?;
        Ok(n)
    }
    fn level1() -> Result<(), Error> {
        level2()?;
        Ok(())
    }

    c.bench_function("nested_rust", |b| b.iter(|| black_box(level1())));
}

// ============================================================
// Benchmark groups
// ============================================================

criterion_group!(
    baseline,
    bench_baseline_io_error,
    bench_baseline_shared_error,
    bench_baseline_context,
);

criterion_group!(success_path, bench_success_handle, bench_success_rust);

criterion_group!(error_path, bench_error_handle, bench_error_rust);

criterion_group!(native, bench_native_raise, bench_native_rust);

criterion_group!(nested, bench_nested_handle, bench_nested_rust);

criterion_main!(baseline, success_path, error_path, native, nested);
