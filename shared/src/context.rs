//! The viewer's mutable state in one place.
//!
//! [`SceneContext`] owns the physics world, the binding registry, the active character and the
//! swap state machine. The host calls [`SceneContext::step_frame`] once per frame and
//! [`SceneContext::poll_loads`] whenever it wants pending loads applied; nothing else mutates it.

use std::fmt;

use crate::{
    AssetLoader, BindingRegistry, BodyShape, CHARACTER_HALF_EXTENTS, FIXED_TIMESTEP,
    LoadCompletion, LoadedAsset, MAX_SUBSTEPS, PhysicsWorld, Pose, RequestToken, Result,
    SceneGraph, SwapController, SwapState, SyncMode, sync_bindings,
};

/// The animated model currently on screen.
#[derive(Clone, Debug, PartialEq)]
pub struct ActiveCharacter<M, B, A> {
    pub asset: String,
    pub mesh: M,
    /// Kinematic proxy following `mesh`.
    pub body: B,
    /// `None` when the model came without clips.
    pub animation: Option<A>,
}

/// What applying one load completion did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SwapOutcome {
    /// The character is now `asset`; `replaced` names the one it took over from.
    Swapped {
        asset: String,
        replaced: Option<String>,
    },
    /// A newer request was already in flight; the completion was dropped.
    Discarded { asset: String },
}

pub struct SceneContext<P: PhysicsWorld, M, A> {
    physics: P,
    bindings: BindingRegistry<M, P::Body>,
    character: Option<ActiveCharacter<M, P::Body, A>>,
    swap: SwapController,
}

impl<P, M, A> SceneContext<P, M, A>
where
    P: PhysicsWorld,
    M: Copy + Eq + fmt::Debug,
{
    pub fn new(physics: P) -> Self {
        Self {
            physics,
            bindings: BindingRegistry::new(),
            character: None,
            swap: SwapController::new(),
        }
    }

    pub fn physics(&self) -> &P {
        &self.physics
    }

    pub fn bindings(&self) -> &BindingRegistry<M, P::Body> {
        &self.bindings
    }

    pub fn character(&self) -> Option<&ActiveCharacter<M, P::Body, A>> {
        self.character.as_ref()
    }

    pub fn active_asset(&self) -> Option<&str> {
        self.character.as_ref().map(|c| c.asset.as_str())
    }

    pub fn swap_state(&self) -> &SwapState {
        self.swap.state()
    }

    /// Give `mesh` a dynamic body at `pose`. The physics world drives the mesh from now on.
    pub fn add_prop(
        &mut self,
        mesh: M,
        pose: Pose,
        shape: &BodyShape,
        mass: f32,
    ) -> Result<P::Body> {
        let body = self.physics.add_dynamic_body(shape, pose, mass)?;
        self.bind_new(mesh, body, SyncMode::Dynamic)
    }

    /// Give `mesh` a kinematic body at `pose`. The body follows the mesh from now on.
    pub fn add_kinematic_prop(
        &mut self,
        mesh: M,
        pose: Pose,
        shape: &BodyShape,
    ) -> Result<P::Body> {
        let body = self.physics.add_kinematic_body(shape, pose)?;
        self.bind_new(mesh, body, SyncMode::Kinematic)
    }

    /// Drop the binding for `mesh` and its body. Returns false if `mesh` was not bound.
    pub fn remove_prop(&mut self, mesh: M) -> Result<bool> {
        match self.bindings.unbind(mesh) {
            Some(binding) => {
                self.physics.remove_body(binding.body)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn bind_new(&mut self, mesh: M, body: P::Body, mode: SyncMode) -> Result<P::Body> {
        if let Err(err) = self.bindings.bind(mesh, body, mode) {
            self.physics.remove_body(body)?;
            return Err(err);
        }
        Ok(body)
    }

    /// One frame: animate, step physics, copy poses, render.
    ///
    /// Returns the number of fixed physics steps that ran.
    pub fn step_frame<S>(&mut self, scene: &mut S, delta: f32) -> Result<u32>
    where
        S: SceneGraph<Mesh = M, Animation = A>,
    {
        if let Some(animation) = self.character.as_mut().and_then(|c| c.animation.as_mut()) {
            scene.advance(animation, delta);
        }

        let substeps = self.physics.step(FIXED_TIMESTEP, delta, MAX_SUBSTEPS)?;
        sync_bindings(&self.bindings, &mut self.physics, scene)?;
        scene.render();

        Ok(substeps)
    }

    /// Start loading `asset`. Any load still in flight becomes stale.
    pub fn request_asset<L: AssetLoader>(&mut self, loader: &mut L, asset: &str) -> RequestToken {
        let request = self.swap.request(asset);
        let token = request.token;
        log::info!("loading `{asset}` from {} ({token:?})", request.path);
        loader.begin(request);
        token
    }

    /// Apply every completion the loader has ready, in arrival order.
    pub fn poll_loads<L, S>(&mut self, loader: &mut L, scene: &mut S) -> Vec<Result<SwapOutcome>>
    where
        S: SceneGraph<Mesh = M, Animation = A>,
        L: AssetLoader<Hierarchy = S::Hierarchy, Clip = S::Clip>,
    {
        loader
            .poll()
            .into_iter()
            .map(|completion| self.apply_completion(scene, completion))
            .collect()
    }

    /// Swap the character for a finished load, or drop the load if it is stale.
    ///
    /// A failed load leaves the current character and its binding as they were.
    pub fn apply_completion<S>(
        &mut self,
        scene: &mut S,
        completion: LoadCompletion<S::Hierarchy, S::Clip>,
    ) -> Result<SwapOutcome>
    where
        S: SceneGraph<Mesh = M, Animation = A>,
    {
        let LoadCompletion {
            token,
            asset,
            outcome,
        } = completion;

        if !self.swap.is_current(token) {
            log::debug!("discarding stale load of `{asset}` ({token:?})");
            return Ok(SwapOutcome::Discarded { asset });
        }

        let loaded = match outcome {
            Ok(loaded) => loaded,
            Err(err) => {
                self.swap.settle();
                log::warn!("{err}; keeping {:?}", self.active_asset());
                return Err(err);
            }
        };

        self.swap.begin_swap(token);
        let result = self.swap_character(scene, &asset, loaded);
        self.swap.settle();

        let replaced = result?;
        log::info!("character is now `{asset}` (was {replaced:?})");
        Ok(SwapOutcome::Swapped { asset, replaced })
    }

    fn swap_character<S>(
        &mut self,
        scene: &mut S,
        asset: &str,
        loaded: LoadedAsset<S::Hierarchy, S::Clip>,
    ) -> Result<Option<String>>
    where
        S: SceneGraph<Mesh = M, Animation = A>,
    {
        let replaced = self.release_character(scene)?;
        self.attach_character(scene, asset, loaded)?;
        Ok(replaced)
    }

    /// Phase one: the old character's binding, body and scene resources all go.
    fn release_character<S>(&mut self, scene: &mut S) -> Result<Option<String>>
    where
        S: SceneGraph<Mesh = M, Animation = A>,
    {
        let Some(old) = self.character.take() else {
            return Ok(None);
        };

        self.bindings.unbind(old.mesh);
        let removed = self.physics.remove_body(old.body);
        scene.release(old.mesh);
        removed?;

        Ok(Some(old.asset))
    }

    /// Phase two: attach, give it a kinematic proxy, start the first clip.
    fn attach_character<S>(
        &mut self,
        scene: &mut S,
        asset: &str,
        loaded: LoadedAsset<S::Hierarchy, S::Clip>,
    ) -> Result<()>
    where
        S: SceneGraph<Mesh = M, Animation = A>,
    {
        let LoadedAsset { hierarchy, clips } = loaded;
        let spawn = Pose::identity();
        let mesh = scene.attach(hierarchy, spawn);

        let [hx, hy, hz] = CHARACTER_HALF_EXTENTS;
        let body = match self
            .physics
            .add_kinematic_body(&BodyShape::cuboid(hx, hy, hz), spawn)
        {
            Ok(body) => body,
            Err(err) => {
                scene.release(mesh);
                return Err(err);
            }
        };

        if let Err(err) = self.bindings.bind(mesh, body, SyncMode::Kinematic) {
            scene.release(mesh);
            self.physics.remove_body(body)?;
            return Err(err);
        }

        let animation = clips.into_iter().next().map(|clip| scene.play(mesh, clip));
        self.character = Some(ActiveCharacter {
            asset: asset.to_owned(),
            mesh,
            body,
            animation,
        });
        Ok(())
    }
}

impl<P, M, A> fmt::Debug for SceneContext<P, M, A>
where
    P: PhysicsWorld,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SceneContext")
            .field("swap", self.swap.state())
            .finish_non_exhaustive()
    }
}

/// Fatal errors from a context operation, with the recoverable ones logged and dropped.
pub fn fatal_only<T>(result: Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(err) if err.is_fatal() => Err(err),
        Err(err) => {
            log::warn!("{err}");
            Ok(None)
        }
    }
}
