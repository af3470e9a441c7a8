use crate::{BindingRegistry, PhysicsWorld, Result, SceneGraph, SyncMode};

/// Copy poses across every binding, in registry order.
///
/// - `Dynamic`: body → mesh. The physics engine owns the pose.
/// - `Kinematic`: mesh → body. Animation owns the pose; the body follows it for collisions.
///
/// Kinematic meshes missing from the scene (e.g. spawned this frame and not yet visible to
/// queries) are skipped; their bodies keep the last pose written.
pub fn sync_bindings<P, S>(
    bindings: &BindingRegistry<S::Mesh, P::Body>,
    physics: &mut P,
    scene: &mut S,
) -> Result<()>
where
    P: PhysicsWorld,
    S: SceneGraph,
{
    for binding in bindings.iter() {
        match binding.mode {
            SyncMode::Dynamic => {
                let pose = physics.body_pose(binding.body)?;
                scene.set_mesh_pose(binding.mesh, pose);
            }
            SyncMode::Kinematic => match scene.mesh_pose(binding.mesh) {
                Some(pose) => physics.set_body_pose(binding.body, pose)?,
                None => log::debug!(
                    "kinematic mesh {:?} not in scene; body {:?} left in place",
                    binding.mesh,
                    binding.body
                ),
            },
        }
    }
    Ok(())
}
