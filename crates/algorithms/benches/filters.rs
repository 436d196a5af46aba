//! Benchmarks for the mean, Gabor and texture passes

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tessera_algorithms::gabor::{gabor_filter, gabor_kernel, GaborParams};
use tessera_algorithms::smoothing::{mean_filter, MeanMode, MeanParams};
use tessera_algorithms::texture::{cooccurrence_matrix, local_binary_pattern, GlcmParams};
use tessera_core::Bitmap;

fn create_test_bitmap(size: usize) -> Bitmap {
    let data = (0..size * size)
        .map(|i| {
            let (row, col) = (i / size, i % size);
            ((row * 31 + col * 17 + (row * col) % 23) % 256) as u8
        })
        .collect();
    Bitmap::from_gray_vec(data, size, size).unwrap()
}

fn bench_mean_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("smoothing/mean");
    let bitmap = create_test_bitmap(512);
    for mode in [
        MeanMode::Arithmetic,
        MeanMode::Harmonic,
        MeanMode::ContraHarmonic,
        MeanMode::Geometric,
    ] {
        let params = MeanParams {
            mode,
            ..Default::default()
        };
        group.bench_with_input(BenchmarkId::new("mode", format!("{:?}", mode)), &mode, |b, _| {
            b.iter(|| {
                let mut work = black_box(&bitmap).clone();
                mean_filter(&mut work, &params).unwrap();
                work
            })
        });
    }
    group.finish();
}

fn bench_gabor(c: &mut Criterion) {
    let mut group = c.benchmark_group("gabor");
    let params = GaborParams::default();
    group.bench_function("kernel", |b| b.iter(|| gabor_kernel(black_box(&params)).unwrap()));
    for size in [128, 256] {
        let bitmap = create_test_bitmap(size);
        group.bench_with_input(BenchmarkId::new("filter", size), &size, |b, _| {
            b.iter(|| {
                let mut work = black_box(&bitmap).clone();
                gabor_filter(&mut work, &params).unwrap();
                work
            })
        });
    }
    group.finish();
}

fn bench_texture(c: &mut Criterion) {
    let mut group = c.benchmark_group("texture");
    let bitmap = create_test_bitmap(1024);
    group.bench_function("glcm", |b| {
        b.iter(|| cooccurrence_matrix(black_box(&bitmap), &GlcmParams::default()).unwrap())
    });
    group.bench_function("lbp", |b| {
        b.iter(|| local_binary_pattern(black_box(&bitmap)).unwrap())
    });
    group.finish();
}

criterion_group!(benches, bench_mean_modes, bench_gabor, bench_texture);
criterion_main!(benches);
