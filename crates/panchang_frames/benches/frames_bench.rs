use criterion::{Criterion, criterion_group, criterion_main};
use panchang_frames::{
    SphericalCoords, cartesian_to_spherical, ecliptic_to_icrf, fundamental_arguments,
    general_precession_longitude_deg, icrf_to_ecliptic, nutation_in_longitude_deg,
    spherical_to_cartesian,
};
use std::hint::black_box;

fn frame_rotation_bench(c: &mut Criterion) {
    let v = [1.2e8, -4.8e7, 9.3e6];

    let mut group = c.benchmark_group("frame_rotation");
    group.bench_function("icrf_to_ecliptic", |b| {
        b.iter(|| icrf_to_ecliptic(black_box(&v)))
    });
    group.bench_function("ecliptic_to_icrf", |b| {
        b.iter(|| ecliptic_to_icrf(black_box(&v)))
    });
    group.finish();
}

fn spherical_bench(c: &mut Criterion) {
    let pos = [2.4e8, 7.1e7, -1.2e7];
    let sph = SphericalCoords {
        lon_rad: 0.4,
        lat_rad: -0.06,
        distance_km: 1.5e8,
    };

    let mut group = c.benchmark_group("spherical");
    group.bench_function("cartesian_to_spherical", |b| {
        b.iter(|| cartesian_to_spherical(black_box(&pos)))
    });
    group.bench_function("spherical_to_cartesian", |b| {
        b.iter(|| spherical_to_cartesian(black_box(&sph)))
    });
    group.finish();
}

fn precession_nutation_bench(c: &mut Criterion) {
    let t = 0.24; // Julian centuries since J2000

    let mut group = c.benchmark_group("precession_nutation");
    group.bench_function("general_precession_longitude_deg", |b| {
        b.iter(|| general_precession_longitude_deg(black_box(t)))
    });
    group.bench_function("fundamental_arguments", |b| {
        b.iter(|| fundamental_arguments(black_box(t)))
    });
    group.bench_function("nutation_in_longitude_deg", |b| {
        b.iter(|| nutation_in_longitude_deg(black_box(t)))
    });
    group.finish();
}

criterion_group!(
    benches,
    frame_rotation_bench,
    spherical_bench,
    precession_nutation_bench
);
criterion_main!(benches);
