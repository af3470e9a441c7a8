//! Scene-graph contract.
//!
//! What the synchronization step and the swap controller need from a renderer: read and write
//! mesh poses, attach a loaded model, release a model's resources, drive an animation player and
//! submit a frame. Meshes are opaque `Copy` handles borrowed from the renderer's scene graph.

use std::fmt;

use crate::Pose;

pub trait SceneGraph {
    /// Handle to a transform node in the scene graph.
    type Mesh: Copy + Eq + fmt::Debug;
    /// A loaded, not yet attached, model hierarchy.
    type Hierarchy;
    /// An animation clip that came with a hierarchy.
    type Clip;
    /// A running animation player.
    type Animation;

    /// World pose of `mesh`, or `None` if the mesh is not (or no longer) in the scene.
    fn mesh_pose(&self, mesh: Self::Mesh) -> Option<Pose>;

    /// Move `mesh`. Meshes that are not in the scene are ignored.
    fn set_mesh_pose(&mut self, mesh: Self::Mesh, pose: Pose);

    /// Add `hierarchy` to the scene at `pose` and return its root.
    fn attach(&mut self, hierarchy: Self::Hierarchy, pose: Pose) -> Self::Mesh;

    /// Remove `mesh` (and its descendants) from the scene and free its geometry and materials.
    fn release(&mut self, mesh: Self::Mesh);

    /// Start looping `clip` on the hierarchy rooted at `mesh`.
    fn play(&mut self, mesh: Self::Mesh, clip: Self::Clip) -> Self::Animation;

    /// Advance a running player by `delta` seconds.
    fn advance(&mut self, animation: &mut Self::Animation, delta: f32);

    /// Submit the scene for drawing.
    fn render(&mut self);
}
