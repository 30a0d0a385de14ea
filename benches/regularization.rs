//! Benchmarks for per-step spring regularization.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use spring_softness::*;

fn bench_constants(c: &mut Criterion) {
    let springs: Vec<SpringSettings<f32>> = (0..10_000)
        .map(|i| SpringSettings::new().with_stiffness(1000.0 + i as f32))
        .collect();
    let step = TimeStep::new(1.0 / 60.0).unwrap();
    c.bench_function("regularize_10000_constant_springs", |b| {
        b.iter(|| {
            let mut sum = 0.0;
            for spring in &springs {
                let reg = compute_for_step(black_box(&step), spring).unwrap();
                sum += reg.error_reduction + reg.softness;
            }
            sum
        });
    });
}

fn bench_advanced(c: &mut Criterion) {
    let springs: Vec<SpringSettings<f32>> = (0..10_000)
        .map(|i| SpringSettings::advanced_rigid(0.1, 1e-5 * (1 + i % 7) as f32))
        .collect();
    let step = TimeStep::new(1.0 / 60.0).unwrap();
    c.bench_function("regularize_10000_advanced_springs", |b| {
        b.iter(|| {
            let mut sum = 0.0;
            for spring in &springs {
                let reg = compute_for_step(black_box(&step), spring).unwrap();
                sum += reg.error_reduction + reg.softness;
            }
            sum
        });
    });
}

criterion_group!(benches, bench_constants, bench_advanced);
criterion_main!(benches);
