//! Conversions between bevy's glam transforms and the nalgebra poses the core works in.

use bevy::prelude::*;
use nalgebra::{Quaternion, UnitQuaternion};

pub fn to_na_vec3(v: Vec3) -> shared::Vec3 {
    shared::Vec3::new(v.x, v.y, v.z)
}

pub fn from_na_vec3(v: shared::Vec3) -> Vec3 {
    Vec3::new(v.x, v.y, v.z)
}

pub fn to_na_quat(q: Quat) -> shared::Quat {
    UnitQuaternion::new_normalize(Quaternion::new(q.w, q.x, q.y, q.z))
}

pub fn from_na_quat(q: shared::Quat) -> Quat {
    // nalgebra stores quaternions as [i, j, k, w].
    let c = q.coords;
    Quat::from_xyzw(c.x, c.y, c.z, c.w)
}

/// Translation and rotation of `transform`. Scale does not take part in physics.
pub fn pose_from_transform(transform: &Transform) -> shared::Pose {
    shared::Pose::new(
        to_na_vec3(transform.translation),
        to_na_quat(transform.rotation),
    )
}

/// Overwrite translation and rotation, keeping scale.
pub fn apply_pose(transform: &mut Transform, pose: shared::Pose) {
    transform.translation = from_na_vec3(pose.translation);
    transform.rotation = from_na_quat(pose.rotation);
}

pub fn transform_from_pose(pose: shared::Pose) -> Transform {
    let mut transform = Transform::default();
    apply_pose(&mut transform, pose);
    transform
}
