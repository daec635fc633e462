use criterion::{Criterion, criterion_group, criterion_main};
use panchang_riseset::Location;
use panchang_solar::{Region, gregorian_to_solar};
use std::hint::black_box;

fn solar_bench(c: &mut Criterion) {
    let loc = Location::NEW_DELHI;

    c.bench_function("gregorian_to_solar_tamil", |b| {
        b.iter(|| gregorian_to_solar(black_box(2025), black_box(4), black_box(14), &loc, Region::Tamil))
    });

    c.bench_function("gregorian_to_solar_bengali", |b| {
        b.iter(|| gregorian_to_solar(black_box(2025), black_box(4), black_box(15), &loc, Region::Bengali))
    });
}

criterion_group!(benches, solar_bench);
criterion_main!(benches);
