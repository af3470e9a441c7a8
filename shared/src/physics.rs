//! Physics world contract.
//!
//! The synchronization step and the swap controller only ever talk to a physics engine
//! through [`PhysicsWorld`]. Bodies are opaque `Copy` handles; everything the rest of the
//! crate needs from a body is its [`Pose`].

use std::fmt;

use crate::{Pose, Result, Vec3};

/// Collision shape attached to a body.
///
/// Keep this intentionally small. Extend as needed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BodyShape {
    /// Infinite plane (half-space). The normal is derived from the body pose as `rotation * +Y`.
    ///
    /// Only static bodies can carry a plane: a half-space has no finite mass or inertia.
    Plane,

    /// Oriented cuboid with given half-extents.
    Cuboid { half_extents: Vec3 },

    /// Sphere/ball.
    Sphere { radius: f32 },

    /// Y-aligned capsule.
    CapsuleY { radius: f32, half_height: f32 },
}

impl BodyShape {
    pub fn cuboid(hx: f32, hy: f32, hz: f32) -> Self {
        BodyShape::Cuboid {
            half_extents: Vec3::new(hx, hy, hz),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BodyShape::Plane => "plane",
            BodyShape::Cuboid { .. } => "cuboid",
            BodyShape::Sphere { .. } => "sphere",
            BodyShape::CapsuleY { .. } => "capsule",
        }
    }

    /// Can this shape have mass (i.e. back a dynamic or kinematic body)?
    pub fn is_finite(&self) -> bool {
        !matches!(self, BodyShape::Plane)
    }
}

/// Gravity and solver scale handed to a physics world on initialization.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldSettings {
    pub gravity: Vec3,
    /// Typical object size in world units; scales the solver's tolerances.
    pub length_unit: f32,
}

impl Default for WorldSettings {
    fn default() -> Self {
        let [x, y, z] = crate::GRAVITY;
        Self {
            gravity: Vec3::new(x, y, z),
            length_unit: crate::PHYSICS_LENGTH_UNIT,
        }
    }
}

/// A rigid-body simulation the scene can be synchronized with.
///
/// Every operation fails with [`Error::PhysicsUninitialized`](crate::Error::PhysicsUninitialized)
/// until the implementation has been initialized.
pub trait PhysicsWorld {
    /// Opaque handle to a body owned by this world.
    type Body: Copy + Eq + fmt::Debug;

    /// Advance simulated time by `actual_delta` seconds, in up to `max_substeps`
    /// increments of `fixed_delta`. Returns the number of increments that ran.
    fn step(&mut self, fixed_delta: f32, actual_delta: f32, max_substeps: u32) -> Result<u32>;

    /// Add a body with infinite mass that never moves.
    fn add_static_body(&mut self, shape: &BodyShape, pose: Pose) -> Result<Self::Body>;

    /// Add a body simulated under gravity and contacts.
    fn add_dynamic_body(&mut self, shape: &BodyShape, pose: Pose, mass: f32)
    -> Result<Self::Body>;

    /// Add a body whose pose is only ever written from outside.
    fn add_kinematic_body(&mut self, shape: &BodyShape, pose: Pose) -> Result<Self::Body>;

    /// Remove a body and everything attached to it.
    fn remove_body(&mut self, body: Self::Body) -> Result<()>;

    fn body_pose(&self, body: Self::Body) -> Result<Pose>;

    fn set_body_pose(&mut self, body: Self::Body, pose: Pose) -> Result<()>;
}

/// Fixed-timestep accumulator.
///
/// Frame time is added to the accumulator and consumed in `fixed_delta` slices.
/// At most `max_substeps` slices run per call; whatever the cap could not consume is
/// dropped (the accumulator is reduced modulo `fixed_delta`), so only the sub-step
/// remainder carries over to the next frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StepClock {
    accumulator: f32,
    alpha: f32,
}

impl StepClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed `actual_delta` seconds and return how many fixed steps to run now.
    pub fn advance(&mut self, fixed_delta: f32, actual_delta: f32, max_substeps: u32) -> u32 {
        if fixed_delta <= 0.0 {
            return 0;
        }

        self.accumulator += actual_delta.max(0.0);

        let mut substeps = 0;
        while self.accumulator >= fixed_delta && substeps < max_substeps {
            self.accumulator -= fixed_delta;
            substeps += 1;
        }

        self.accumulator %= fixed_delta;
        self.alpha = self.accumulator / fixed_delta;
        substeps
    }

    /// Fraction of a fixed step left in the accumulator, in `[0, 1)`.
    ///
    /// Renderers that interpolate between the last two physics states use this as the blend factor.
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Seconds waiting in the accumulator.
    pub fn pending(&self) -> f32 {
        self.accumulator
    }
}
