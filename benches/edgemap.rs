use criterion::{criterion_group, criterion_main, Criterion};
use edgemap::{detect_edges, EdgeDetectParams, ImageF32};
use std::hint::black_box;

fn make_channel(width: usize, height: usize, phase: usize) -> ImageF32 {
    let mut data = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let value = (((x + phase) * 13) ^ (y * 7) ^ (x * y)) & 0xFF;
            data.push(value as f32);
        }
    }
    ImageF32::from_vec(data, width, height).unwrap()
}

fn bench_pipeline(c: &mut Criterion) {
    let width = 512;
    let height = 512;
    let gray = [make_channel(width, height, 0)];
    let rgb = [
        make_channel(width, height, 0),
        make_channel(width, height, 64),
        make_channel(width, height, 128),
    ];

    let params = EdgeDetectParams::default();

    c.bench_function("detect_edges_gray", |b| {
        b.iter(|| black_box(detect_edges(&gray, params).unwrap()));
    });

    c.bench_function("detect_edges_rgb", |b| {
        b.iter(|| black_box(detect_edges(&rgb, params).unwrap()));
    });

    if cfg!(feature = "rayon") {
        let par_params = EdgeDetectParams {
            parallel: true,
            ..EdgeDetectParams::default()
        };
        c.bench_function("detect_edges_rgb_parallel", |b| {
            b.iter(|| black_box(detect_edges(&rgb, par_params).unwrap()));
        });
    }
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
