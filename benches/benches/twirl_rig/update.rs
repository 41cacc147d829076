use core::hint::black_box;

use criterion::{criterion_group, Criterion};
use twirl_math::{Quat, Vec3};
use twirl_rig::armature::Armature;
use twirl_rig::{JointHierarchy, TwistBone, TwistBoneConfig, TwistTarget};

criterion_group!(benches, update_four_targets);

/// A full per-frame tick: rest-frame delta, extraction, four slerped writes.
fn update_four_targets(c: &mut Criterion) {
    let mut armature = Armature::default();
    let driver = armature.add_root(Vec3::ZERO, Quat::IDENTITY);
    let driven = armature.add_child(driver, Vec3::Y, Quat::IDENTITY);

    let mut config = TwistBoneConfig::new(driver, driven);
    for i in 0..4 {
        let height = 0.2 * (i + 1) as f32;
        let target = armature.add_child(driver, Vec3::new(0.0, height, 0.0), Quat::IDENTITY);
        config = config.with_target(TwistTarget::new(target, 0.25 * (i + 1) as f32));
    }

    let bone = TwistBone::calibrate(config, &armature).unwrap();
    armature.set_local_rotation(driven, Quat::from_rotation_x(0.3) * Quat::from_rotation_y(0.9));

    c.bench_function("twist_bone_update_4_targets", |b| {
        b.iter(|| black_box(bone.update(&mut armature)));
    });
}
