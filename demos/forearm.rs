//! Spreads elbow roll onto two forearm twist bones and logs the applied
//! angles while sweeping the elbow.
//!
//! Run with `cargo run --example forearm`.

use core::f32::consts::FRAC_PI_2;

use env_logger::Env;
use log::{error, info};
use twirl::prelude::*;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let mut armature = Armature::default();
    let shoulder = armature.add_root(Vec3::ZERO, Quat::IDENTITY);
    let elbow = armature.add_child(shoulder, Vec3::new(0.0, 0.28, 0.0), Quat::IDENTITY);
    let upper_twist = armature.add_child(shoulder, Vec3::new(0.0, 0.1, 0.0), Quat::IDENTITY);
    let lower_twist = armature.add_child(shoulder, Vec3::new(0.0, 0.2, 0.0), Quat::IDENTITY);

    let config = TwistBoneConfig::new(shoulder, elbow)
        .with_target(TwistTarget::new(upper_twist, 0.35))
        .with_target(TwistTarget::new(lower_twist, 0.75));
    let bone = match TwistBone::calibrate(config, &armature) {
        Ok(bone) => bone,
        Err(err) => {
            error!("calibration failed: {err}");
            return;
        }
    };
    info!("calibrated twist axis: {}", bone.twist_axis());

    for step in 0..=8 {
        let roll = step as f32 / 8.0 * FRAC_PI_2;
        armature.set_local_rotation(elbow, Quat::from_rotation_y(roll));
        bone.update(&mut armature);

        let (_, upper) = armature.local_rotation(upper_twist).to_axis_angle();
        let (_, lower) = armature.local_rotation(lower_twist).to_axis_angle();
        info!(
            "elbow roll {:5.1} deg -> upper twist {:5.1} deg, lower twist {:5.1} deg",
            roll.to_degrees(),
            upper.to_degrees(),
            lower.to_degrees(),
        );
    }
}
