use bevy::{animation::AnimationSystems, prelude::*, transform::TransformSystems};
use shared::{RapierWorld, SceneContext, WorldSettings};

use crate::scene::{BevyScene, CharacterAnimation};

/// The physics world, the body–mesh bindings and the active character.
#[derive(Resource, Deref, DerefMut)]
pub struct Viewer(pub SceneContext<RapierWorld, Entity, CharacterAnimation>);

pub(super) fn plugin(app: &mut App) {
    app.add_systems(Startup, init_physics);

    // Animation has already posed the character this frame; propagation must see the synced poses.
    app.add_systems(
        PostUpdate,
        step_scene
            .after(AnimationSystems)
            .before(TransformSystems::Propagate),
    );
}

pub(crate) fn init_physics(mut commands: Commands) -> Result {
    let mut physics = RapierWorld::new();
    let settings = WorldSettings::default();
    physics.initialize(settings)?;

    info!(
        "physics ready: gravity {:?}, length unit {}",
        settings.gravity, settings.length_unit
    );
    commands.insert_resource(Viewer(SceneContext::new(physics)));
    Ok(())
}

fn step_scene(mut viewer: ResMut<Viewer>, mut scene: BevyScene, time: Res<Time>) -> Result {
    viewer.step_frame(&mut scene, time.delta_secs())?;
    Ok(())
}
