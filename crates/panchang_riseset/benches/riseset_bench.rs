use criterion::{Criterion, criterion_group, criterion_main};
use panchang_riseset::{sunrise, sunset};
use panchang_time::gregorian_to_jd;
use std::hint::black_box;

fn riseset_bench(c: &mut Criterion) {
    let jd = gregorian_to_jd(2025, 6, 21);
    let (lon, lat) = (77.2090, 28.6139);

    c.bench_function("sunrise", |b| {
        b.iter(|| sunrise(black_box(jd), black_box(lon), black_box(lat), black_box(0.0)))
    });

    c.bench_function("sunset", |b| {
        b.iter(|| sunset(black_box(jd), black_box(lon), black_box(lat), black_box(0.0)))
    });
}

criterion_group!(benches, riseset_bench);
criterion_main!(benches);
