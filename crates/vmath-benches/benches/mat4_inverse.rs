// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use vmath_core::math::{Mat4, Vec3};

fn sample_matrix() -> Mat4 {
    Mat4::translation(1.0, -2.0, 3.5)
        .multiply(&Mat4::rotation_euler(Vec3::new(0.3, -1.1, 0.7)))
        .multiply(&Mat4::scaling(2.0, 0.5, 1.5))
}

fn bench_inverse_pipeline(c: &mut Criterion) {
    let m = sample_matrix();
    let mut group = c.benchmark_group("mat4");
    group.bench_function("determinant", |b| b.iter(|| black_box(m).determinant()));
    group.bench_function("adjoint", |b| b.iter(|| black_box(m).adjoint()));
    group.bench_function("inverse", |b| b.iter(|| black_box(m).inverse()));
    group.bench_function("multiply", |b| {
        b.iter(|| black_box(m).multiply(&black_box(m)));
    });
    group.finish();
}

criterion_group!(benches, bench_inverse_pipeline);
criterion_main!(benches);
