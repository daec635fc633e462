use criterion::{Criterion, criterion_group, criterion_main};
use panchang_math::{find_zero_crossing, is_genuine_crossing, normalize_to_pm180};
use std::hint::black_box;

fn math_bench(c: &mut Criterion) {
    c.bench_function("normalize_to_pm180", |b| {
        b.iter(|| normalize_to_pm180(black_box(733.4)))
    });

    c.bench_function("is_genuine_crossing", |b| {
        b.iter(|| is_genuine_crossing(black_box(5.0), black_box(-3.0)))
    });

    let f = |t: f64| -> Result<f64, std::convert::Infallible> { Ok(13.0 * t - 3900.3) };
    c.bench_function("find_zero_crossing", |b| {
        b.iter(|| find_zero_crossing(&f, black_box(0.0), black_box(1.0), 400, 50, 1e-8))
    });
}

criterion_group!(benches, math_bench);
criterion_main!(benches);
