//! In-memory backends for exercising the core without rapier or a renderer.

use std::collections::BTreeMap;

use crate::{
    AssetLoader, BodyShape, Error, LoadCompletion, LoadRequest, LoadedAsset, PhysicsWorld, Pose,
    RequestToken, Result, SceneGraph, StepClock, Vec3,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FakeBodyId(pub usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FakeBodyKind {
    Static,
    Dynamic,
    Kinematic,
}

#[derive(Clone, Copy, Debug)]
pub struct FakeBody {
    pub pose: Pose,
    pub velocity: Vec3,
    pub kind: FakeBodyKind,
}

/// Point-mass integrator: dynamic bodies fall under gravity, nothing collides.
#[derive(Debug)]
pub struct FakePhysics {
    initialized: bool,
    gravity: Vec3,
    bodies: Vec<Option<FakeBody>>,
    clock: StepClock,
}

impl FakePhysics {
    pub fn uninitialized() -> Self {
        Self {
            initialized: false,
            gravity: Vec3::new(0.0, -20.0, -9.0),
            bodies: Vec::new(),
            clock: StepClock::new(),
        }
    }

    pub fn initialized() -> Self {
        Self {
            initialized: true,
            ..Self::uninitialized()
        }
    }

    pub fn live_bodies(&self) -> usize {
        self.bodies.iter().flatten().count()
    }

    pub fn kind(&self, body: FakeBodyId) -> Option<FakeBodyKind> {
        self.bodies.get(body.0).copied().flatten().map(|b| b.kind)
    }

    fn check(&self) -> Result<()> {
        if self.initialized {
            Ok(())
        } else {
            Err(Error::PhysicsUninitialized)
        }
    }

    fn insert(&mut self, pose: Pose, kind: FakeBodyKind) -> Result<FakeBodyId> {
        self.check()?;
        self.bodies.push(Some(FakeBody {
            pose,
            velocity: Vec3::zeros(),
            kind,
        }));
        Ok(FakeBodyId(self.bodies.len() - 1))
    }

    fn body_mut(&mut self, body: FakeBodyId) -> Result<&mut FakeBody> {
        self.check()?;
        self.bodies
            .get_mut(body.0)
            .and_then(Option::as_mut)
            .ok_or_else(|| Error::UnknownBody(format!("{body:?}")))
    }
}

impl PhysicsWorld for FakePhysics {
    type Body = FakeBodyId;

    fn step(&mut self, fixed_delta: f32, actual_delta: f32, max_substeps: u32) -> Result<u32> {
        self.check()?;
        let substeps = self.clock.advance(fixed_delta, actual_delta, max_substeps);
        for _ in 0..substeps {
            for body in self.bodies.iter_mut().flatten() {
                if body.kind == FakeBodyKind::Dynamic {
                    body.velocity += self.gravity * fixed_delta;
                    body.pose.translation += body.velocity * fixed_delta;
                }
            }
        }
        Ok(substeps)
    }

    fn add_static_body(&mut self, _shape: &BodyShape, pose: Pose) -> Result<FakeBodyId> {
        self.insert(pose, FakeBodyKind::Static)
    }

    fn add_dynamic_body(
        &mut self,
        _shape: &BodyShape,
        pose: Pose,
        _mass: f32,
    ) -> Result<FakeBodyId> {
        self.insert(pose, FakeBodyKind::Dynamic)
    }

    fn add_kinematic_body(&mut self, _shape: &BodyShape, pose: Pose) -> Result<FakeBodyId> {
        self.insert(pose, FakeBodyKind::Kinematic)
    }

    fn remove_body(&mut self, body: FakeBodyId) -> Result<()> {
        self.check()?;
        match self.bodies.get_mut(body.0) {
            Some(slot) if slot.is_some() => {
                *slot = None;
                Ok(())
            }
            _ => Err(Error::UnknownBody(format!("{body:?}"))),
        }
    }

    fn body_pose(&self, body: FakeBodyId) -> Result<Pose> {
        self.check()?;
        self.bodies
            .get(body.0)
            .copied()
            .flatten()
            .map(|b| b.pose)
            .ok_or_else(|| Error::UnknownBody(format!("{body:?}")))
    }

    fn set_body_pose(&mut self, body: FakeBodyId, pose: Pose) -> Result<()> {
        self.body_mut(body)?.pose = pose;
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FakeAnimation {
    pub mesh: u32,
    pub clip: String,
    pub time: f32,
}

/// Scene graph holding bare poses. Hierarchies and clips are just names.
#[derive(Debug, Default)]
pub struct FakeScene {
    meshes: BTreeMap<u32, Pose>,
    names: BTreeMap<u32, String>,
    next_mesh: u32,
    pub released: Vec<u32>,
    pub frames_rendered: u32,
}

impl FakeScene {
    pub fn spawn(&mut self, pose: Pose) -> u32 {
        let mesh = self.next_mesh;
        self.next_mesh += 1;
        self.meshes.insert(mesh, pose);
        mesh
    }

    pub fn name(&self, mesh: u32) -> Option<&str> {
        self.names.get(&mesh).map(String::as_str)
    }

    pub fn mesh_count(&self) -> usize {
        self.meshes.len()
    }
}

impl SceneGraph for FakeScene {
    type Mesh = u32;
    type Hierarchy = String;
    type Clip = String;
    type Animation = FakeAnimation;

    fn mesh_pose(&self, mesh: u32) -> Option<Pose> {
        self.meshes.get(&mesh).copied()
    }

    fn set_mesh_pose(&mut self, mesh: u32, pose: Pose) {
        if let Some(slot) = self.meshes.get_mut(&mesh) {
            *slot = pose;
        }
    }

    fn attach(&mut self, hierarchy: String, pose: Pose) -> u32 {
        let mesh = self.spawn(pose);
        self.names.insert(mesh, hierarchy);
        mesh
    }

    fn release(&mut self, mesh: u32) {
        if self.meshes.remove(&mesh).is_some() {
            self.names.remove(&mesh);
            self.released.push(mesh);
        }
    }

    fn play(&mut self, mesh: u32, clip: String) -> FakeAnimation {
        FakeAnimation {
            mesh,
            clip,
            time: 0.0,
        }
    }

    fn advance(&mut self, animation: &mut FakeAnimation, delta: f32) {
        animation.time += delta;
    }

    fn render(&mut self) {
        self.frames_rendered += 1;
    }
}

/// Loader whose completions are released by the test, in any order.
#[derive(Debug, Default)]
pub struct FakeLoader {
    pub requests: Vec<LoadRequest>,
    ready: Vec<LoadCompletion<String, String>>,
}

impl FakeLoader {
    fn asset_for(&self, token: RequestToken) -> String {
        self.requests
            .iter()
            .find(|r| r.token == token)
            .map(|r| r.asset.clone())
            .unwrap_or_default()
    }

    /// Complete `token` successfully with one hierarchy named after the asset and `clips`.
    pub fn succeed(&mut self, token: RequestToken, clips: &[&str]) {
        let asset = self.asset_for(token);
        self.ready.push(LoadCompletion {
            token,
            asset: asset.clone(),
            outcome: Ok(LoadedAsset {
                hierarchy: asset,
                clips: clips.iter().map(|c| c.to_string()).collect(),
            }),
        });
    }

    pub fn fail(&mut self, token: RequestToken, reason: &str) {
        let asset = self.asset_for(token);
        self.ready.push(LoadCompletion {
            token,
            asset: asset.clone(),
            outcome: Err(Error::AssetLoadFailure {
                asset,
                reason: reason.to_owned(),
            }),
        });
    }
}

impl AssetLoader for FakeLoader {
    type Hierarchy = String;
    type Clip = String;

    fn begin(&mut self, request: LoadRequest) {
        self.requests.push(request);
    }

    fn poll(&mut self) -> Vec<LoadCompletion<String, String>> {
        std::mem::take(&mut self.ready)
    }
}
