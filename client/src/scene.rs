//! The ECS as a [`SceneGraph`]: meshes are entities, poses are their `Transform`s.

use bevy::{ecs::system::SystemParam, prelude::*};
use shared::{Pose, SceneGraph};

use crate::transform::{apply_pose, pose_from_transform, transform_from_pose};

/// Root of the spawned character hierarchy.
#[derive(Component)]
pub struct CharacterRoot;

/// Graph and node a character plays; the players inside its hierarchy pick it up once spawned.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct CharacterAnimation {
    pub graph: Handle<AnimationGraph>,
    pub node: AnimationNodeIndex,
}

#[derive(SystemParam)]
pub struct BevyScene<'w, 's> {
    commands: Commands<'w, 's>,
    transforms: Query<'w, 's, &'static mut Transform>,
    graphs: ResMut<'w, Assets<AnimationGraph>>,
}

impl SceneGraph for BevyScene<'_, '_> {
    type Mesh = Entity;
    type Hierarchy = Handle<Scene>;
    type Clip = Handle<AnimationClip>;
    type Animation = CharacterAnimation;

    fn mesh_pose(&self, mesh: Entity) -> Option<Pose> {
        self.transforms.get(mesh).ok().map(pose_from_transform)
    }

    fn set_mesh_pose(&mut self, mesh: Entity, pose: Pose) {
        if let Ok(mut transform) = self.transforms.get_mut(mesh) {
            apply_pose(&mut transform, pose);
        }
    }

    fn attach(&mut self, hierarchy: Handle<Scene>, pose: Pose) -> Entity {
        self.commands
            .spawn((
                Name::new("character"),
                CharacterRoot,
                SceneRoot(hierarchy),
                transform_from_pose(pose),
            ))
            .id()
    }

    fn release(&mut self, mesh: Entity) {
        // Despawning takes the whole hierarchy. Meshes and materials go with their last handle.
        if let Ok(mut entity) = self.commands.get_entity(mesh) {
            entity.despawn();
        }
    }

    fn play(&mut self, mesh: Entity, clip: Handle<AnimationClip>) -> CharacterAnimation {
        let (graph, node) = AnimationGraph::from_clip(clip);
        let animation = CharacterAnimation {
            graph: self.graphs.add(graph),
            node,
        };
        self.commands.entity(mesh).insert(animation.clone());
        animation
    }

    // `AnimationPlayer`s advance themselves on bevy's clock before the scene is stepped.
    fn advance(&mut self, _animation: &mut CharacterAnimation, _delta: f32) {}

    // Rendering happens after the main schedule.
    fn render(&mut self) {}
}
