use criterion::{Criterion, criterion_group, criterion_main};
use panchang_calendar::{masa_for_date, tithi_at_sunrise};
use panchang_riseset::Location;
use std::hint::black_box;

fn calendar_bench(c: &mut Criterion) {
    let loc = Location::NEW_DELHI;

    c.bench_function("tithi_at_sunrise", |b| {
        b.iter(|| tithi_at_sunrise(black_box(2025), black_box(5), black_box(15), &loc))
    });

    c.bench_function("masa_for_date", |b| {
        b.iter(|| masa_for_date(black_box(2025), black_box(5), black_box(15), &loc))
    });
}

criterion_group!(benches, calendar_bench);
criterion_main!(benches);
