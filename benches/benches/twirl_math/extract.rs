use core::f32::consts::FRAC_PI_3;
use core::hint::black_box;

use criterion::{criterion_group, Criterion};
use twirl_math::{extract_twist, Quat, Vec3};

criterion_group!(benches, pure_twist, mixed_rotation);

/// The fast path: the delta's rotation axis already matches the twist axis.
fn pure_twist(c: &mut Criterion) {
    let delta = Quat::from_rotation_y(FRAC_PI_3);
    c.bench_function("extract_twist_pure", |b| {
        b.iter(|| extract_twist(black_box(delta), black_box(Vec3::Y)));
    });
}

/// The full bracketing-vector reconstruction.
fn mixed_rotation(c: &mut Criterion) {
    let delta = Quat::from_rotation_x(0.4) * Quat::from_rotation_y(FRAC_PI_3);
    c.bench_function("extract_twist_mixed", |b| {
        b.iter(|| extract_twist(black_box(delta), black_box(Vec3::Y)));
    });
}
