//! Rapier-backed [`PhysicsWorld`].
//!
//! The world starts out empty and uninitialized; [`RapierWorld::initialize`] installs gravity,
//! the solver scale and the static ground plane. It is meant to be created once at startup and
//! kept for the lifetime of the process.
//!
//! Conventions
//! - Every body carries exactly one collider with an identity local transform, so the body
//!   pose is the collider pose.
//! - Planes are half-spaces whose outward normal is the body's local +Y.

// Re-export Rapier so downstream crates can name handle types without depending on
// `rapier3d` directly.
pub use rapier3d;

use rapier3d::prelude::*;

use crate::{BodyShape, Error, PhysicsWorld, Pose, Result, StepClock, WorldSettings};

/// All rapier state needed to run a full dynamics step.
struct Simulation {
    gravity: Vector<Real>,
    integration_parameters: IntegrationParameters,
    pipeline: PhysicsPipeline,
    islands: IslandManager,
    broad_phase: BroadPhaseBvh,
    narrow_phase: NarrowPhase,
    bodies: RigidBodySet,
    colliders: ColliderSet,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd_solver: CCDSolver,
}

impl Simulation {
    fn new(settings: WorldSettings) -> Self {
        Self {
            gravity: settings.gravity,
            integration_parameters: IntegrationParameters {
                length_unit: settings.length_unit,
                ..IntegrationParameters::default()
            },
            pipeline: PhysicsPipeline::new(),
            islands: IslandManager::new(),
            broad_phase: BroadPhaseBvh::new(),
            narrow_phase: NarrowPhase::new(),
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
        }
    }

    fn step_once(&mut self, dt: f32) {
        self.integration_parameters.dt = dt;
        self.pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.islands,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            &(),
            &(),
        );
    }

    fn body(&self, handle: RigidBodyHandle) -> Result<&RigidBody> {
        self.bodies
            .get(handle)
            .ok_or_else(|| Error::UnknownBody(format!("{handle:?}")))
    }

    fn body_mut(&mut self, handle: RigidBodyHandle) -> Result<&mut RigidBody> {
        self.bodies
            .get_mut(handle)
            .ok_or_else(|| Error::UnknownBody(format!("{handle:?}")))
    }

    fn insert(
        &mut self,
        builder: RigidBodyBuilder,
        shape: &BodyShape,
        pose: Pose,
        mass: Option<f32>,
    ) -> RigidBodyHandle {
        let mut body = builder.translation(pose.translation).build();
        body.set_rotation(pose.rotation, false);
        let handle = self.bodies.insert(body);

        let mut collider = collider_from_shape(shape);
        if let Some(mass) = mass {
            collider = collider.mass(mass);
        }
        self.colliders
            .insert_with_parent(collider.build(), handle, &mut self.bodies);
        handle
    }
}

/// Physics world backed by a full rapier pipeline.
#[derive(Default)]
pub struct RapierWorld {
    sim: Option<Simulation>,
    clock: StepClock,
}

impl RapierWorld {
    /// An empty world. Every [`PhysicsWorld`] operation fails until [`Self::initialize`] runs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Install gravity and the static ground plane (through the origin, facing +Y).
    ///
    /// Returns the ground body. Fails if the world was already initialized.
    pub fn initialize(&mut self, settings: WorldSettings) -> Result<RigidBodyHandle> {
        if self.sim.is_some() {
            return Err(Error::AlreadyInitialized);
        }

        let mut sim = Simulation::new(settings);
        let ground = sim.insert(
            RigidBodyBuilder::fixed(),
            &BodyShape::Plane,
            Pose::identity(),
            None,
        );

        log::info!(
            "physics world initialized: gravity={:?}, length_unit={}",
            settings.gravity.as_slice(),
            settings.length_unit
        );

        self.sim = Some(sim);
        Ok(ground)
    }

    /// Number of bodies in the world, ground included.
    pub fn body_count(&self) -> usize {
        self.sim.as_ref().map_or(0, |sim| sim.bodies.len())
    }

    pub fn linear_velocity(&self, body: RigidBodyHandle) -> Result<crate::Vec3> {
        Ok(*self.sim()?.body(body)?.linvel())
    }

    fn sim(&self) -> Result<&Simulation> {
        self.sim.as_ref().ok_or(Error::PhysicsUninitialized)
    }

    fn sim_mut(&mut self) -> Result<&mut Simulation> {
        self.sim.as_mut().ok_or(Error::PhysicsUninitialized)
    }
}

impl PhysicsWorld for RapierWorld {
    type Body = RigidBodyHandle;

    fn step(&mut self, fixed_delta: f32, actual_delta: f32, max_substeps: u32) -> Result<u32> {
        let sim = self.sim.as_mut().ok_or(Error::PhysicsUninitialized)?;
        let substeps = self.clock.advance(fixed_delta, actual_delta, max_substeps);
        for _ in 0..substeps {
            sim.step_once(fixed_delta);
        }
        Ok(substeps)
    }

    fn add_static_body(&mut self, shape: &BodyShape, pose: Pose) -> Result<Self::Body> {
        let sim = self.sim_mut()?;
        Ok(sim.insert(RigidBodyBuilder::fixed(), shape, pose, None))
    }

    fn add_dynamic_body(
        &mut self,
        shape: &BodyShape,
        pose: Pose,
        mass: f32,
    ) -> Result<Self::Body> {
        let sim = self.sim_mut()?;
        if !shape.is_finite() {
            return Err(Error::UnsupportedShape {
                shape: shape.name(),
                kind: "dynamic",
            });
        }
        Ok(sim.insert(RigidBodyBuilder::dynamic(), shape, pose, Some(mass)))
    }

    fn add_kinematic_body(&mut self, shape: &BodyShape, pose: Pose) -> Result<Self::Body> {
        let sim = self.sim_mut()?;
        if !shape.is_finite() {
            return Err(Error::UnsupportedShape {
                shape: shape.name(),
                kind: "kinematic",
            });
        }
        Ok(sim.insert(
            RigidBodyBuilder::kinematic_position_based(),
            shape,
            pose,
            None,
        ))
    }

    fn remove_body(&mut self, body: Self::Body) -> Result<()> {
        let sim = self.sim_mut()?;
        sim.bodies
            .remove(
                body,
                &mut sim.islands,
                &mut sim.colliders,
                &mut sim.impulse_joints,
                &mut sim.multibody_joints,
                true,
            )
            .map(|_| ())
            .ok_or_else(|| Error::UnknownBody(format!("{body:?}")))
    }

    fn body_pose(&self, body: Self::Body) -> Result<Pose> {
        let rb = self.sim()?.body(body)?;
        Ok(Pose::new(*rb.translation(), *rb.rotation()))
    }

    fn set_body_pose(&mut self, body: Self::Body, pose: Pose) -> Result<()> {
        let rb = self.sim_mut()?.body_mut(body)?;
        // Writes both the current and the next pose, so the body is observed at `pose`
        // immediately and the next step does not pull it back.
        rb.set_translation(pose.translation, true);
        rb.set_rotation(pose.rotation, true);
        Ok(())
    }
}

/// Build a rapier collider for `shape` with an identity local transform.
///
/// The pose stored on the parent rigid-body places the collider in the world.
fn collider_from_shape(shape: &BodyShape) -> ColliderBuilder {
    match shape {
        BodyShape::Plane => ColliderBuilder::halfspace(Vector::<Real>::y_axis()),

        BodyShape::Cuboid { half_extents } => {
            ColliderBuilder::cuboid(half_extents.x, half_extents.y, half_extents.z)
        }

        BodyShape::Sphere { radius } => ColliderBuilder::ball(*radius),

        BodyShape::CapsuleY {
            radius,
            half_height,
        } => ColliderBuilder::capsule_y(*half_height, *radius),
    }
}
