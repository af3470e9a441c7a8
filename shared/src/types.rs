/*!
Math aliases and the pose type exchanged between the scene graph and the physics world.

Nothing in here knows about a specific renderer or physics engine. Backends convert
their own transform types to and from [`Pose`] at the boundary.
*/

use nalgebra as na;

/// Common math aliases for clarity and consistency.
pub type Vec3 = na::Vector3<f32>;
pub type Quat = na::UnitQuaternion<f32>;

/// Position and orientation of a mesh or body in world space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub translation: Vec3,
    pub rotation: Quat,
}

impl Pose {
    #[inline]
    pub fn identity() -> Self {
        Self::new(Vec3::zeros(), Quat::identity())
    }

    #[inline]
    pub fn new(translation: Vec3, rotation: Quat) -> Self {
        Self {
            translation,
            rotation,
        }
    }

    #[inline]
    pub fn from_translation(translation: Vec3) -> Self {
        Self::new(translation, Quat::identity())
    }

    /// Tolerant comparison, used where poses pass through `f32` math.
    ///
    /// Rotations are compared by quaternion dot product (`q` and `-q` are the same rotation).
    pub fn approx_eq(&self, other: &Pose, eps: f32) -> bool {
        let dot = self.rotation.coords.dot(&other.rotation.coords).abs();
        (self.translation - other.translation).norm() <= eps && 1.0 - dot <= eps
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::identity()
    }
}

/// Which side of a binding is authoritative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SyncMode {
    /// The physics engine simulates the body; its pose is copied onto the mesh.
    Dynamic,
    /// The mesh is animated; its pose is copied into the body.
    Kinematic,
}
