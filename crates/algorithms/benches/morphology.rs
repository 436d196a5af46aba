//! Benchmarks for morphology algorithms

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tessera_algorithms::morphology::{
    closing, dilate, erode, minimum, opening, StructuringElement,
};
use tessera_core::Bitmap;

fn create_test_bitmap(size: usize) -> Bitmap {
    let data = (0..size * size)
        .map(|i| {
            let (row, col) = (i / size, i % size);
            ((row * 7 + col * 13) % 256) as u8
        })
        .collect();
    Bitmap::from_gray_vec(data, size, size).unwrap()
}

fn bench_erode(c: &mut Criterion) {
    let mut group = c.benchmark_group("morphology/erode");
    let se = StructuringElement::ones(1);
    for size in [256, 512, 1024] {
        let bitmap = create_test_bitmap(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                let mut work = black_box(&bitmap).clone();
                erode(&mut work, &se).unwrap();
                work
            })
        });
    }
    group.finish();
}

fn bench_dilate(c: &mut Criterion) {
    let mut group = c.benchmark_group("morphology/dilate");
    let se = StructuringElement::ones(1);
    for size in [256, 512, 1024] {
        let bitmap = create_test_bitmap(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                let mut work = black_box(&bitmap).clone();
                dilate(&mut work, &se).unwrap();
                work
            })
        });
    }
    group.finish();
}

fn bench_composites(c: &mut Criterion) {
    let mut group = c.benchmark_group("morphology/composite");
    let se = StructuringElement::flat(1);
    let bitmap = create_test_bitmap(512);
    group.bench_function("opening", |b| {
        b.iter(|| {
            let mut work = black_box(&bitmap).clone();
            opening(&mut work, &se).unwrap();
            work
        })
    });
    group.bench_function("closing", |b| {
        b.iter(|| {
            let mut work = black_box(&bitmap).clone();
            closing(&mut work, &se).unwrap();
            work
        })
    });
    group.bench_function("minimum", |b| {
        b.iter(|| {
            let mut work = black_box(&bitmap).clone();
            minimum(&mut work, 1).unwrap();
            work
        })
    });
    group.finish();
}

fn bench_radius_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("morphology/erode_radius");
    let bitmap = create_test_bitmap(512);
    for radius in [1, 2, 3, 5] {
        let se = StructuringElement::ones(radius);
        group.bench_with_input(BenchmarkId::from_parameter(radius), &radius, |b, _| {
            b.iter(|| {
                let mut work = black_box(&bitmap).clone();
                erode(&mut work, &se).unwrap();
                work
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_erode,
    bench_dilate,
    bench_composites,
    bench_radius_scaling,
);
criterion_main!(benches);
