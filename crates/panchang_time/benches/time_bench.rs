use criterion::{Criterion, criterion_group, criterion_main};
use panchang_time::{delta_t_days, gregorian_to_jd, jd_to_gregorian};
use std::hint::black_box;

fn bench_jd_roundtrip(c: &mut Criterion) {
    c.bench_function("gregorian_to_jd", |b| {
        b.iter(|| gregorian_to_jd(black_box(2025), black_box(4), black_box(14)))
    });

    let jd = gregorian_to_jd(2025, 4, 14);
    c.bench_function("jd_to_gregorian", |b| b.iter(|| jd_to_gregorian(black_box(jd))));

    c.bench_function("delta_t_days", |b| b.iter(|| delta_t_days(black_box(jd))));
}

criterion_group!(benches, bench_jd_roundtrip);
criterion_main!(benches);
