use bevy::prelude::*;
use shared::{DEFAULT_ASSET, SwapOutcome, fatal_only};

use crate::{
    loader::{GltfLoader, PendingLoads},
    physics::{Viewer, init_physics},
    scene::{BevyScene, CharacterAnimation, CharacterRoot},
};

/// Replace the character with the named asset.
#[derive(Message, Clone, Debug, PartialEq, Eq)]
pub struct SwapRequested(pub String);

/// Marks a character whose animation players have been started.
#[derive(Component)]
struct AnimationStarted;

pub(super) fn plugin(app: &mut App) {
    app.add_message::<SwapRequested>();
    app.init_resource::<PendingLoads>();

    app.add_systems(Startup, request_default.after(init_physics));
    app.add_systems(
        Update,
        (request_swaps, apply_loads, start_animation).chain(),
    );
}

fn request_default(mut swaps: MessageWriter<SwapRequested>) {
    swaps.write(SwapRequested(DEFAULT_ASSET.to_owned()));
}

fn request_swaps(
    mut swaps: MessageReader<SwapRequested>,
    mut viewer: ResMut<Viewer>,
    mut loader: GltfLoader,
) {
    for SwapRequested(asset) in swaps.read() {
        viewer.request_asset(&mut loader, asset);
    }
}

fn apply_loads(
    mut viewer: ResMut<Viewer>,
    mut loader: GltfLoader,
    mut scene: BevyScene,
) -> Result {
    for outcome in viewer.poll_loads(&mut loader, &mut scene) {
        if let Some(SwapOutcome::Swapped { asset, replaced }) = fatal_only(outcome)? {
            info!("showing `{asset}` (replaced {replaced:?})");
        }
    }
    Ok(())
}

/// Point every `AnimationPlayer` in a freshly spawned character at its graph and loop the clip.
///
/// Players only exist once the scene has been instantiated, a frame or more after the swap.
fn start_animation(
    mut commands: Commands,
    characters: Query<
        (Entity, &CharacterAnimation),
        (With<CharacterRoot>, Without<AnimationStarted>),
    >,
    children: Query<&Children>,
    mut players: Query<&mut AnimationPlayer>,
) {
    for (root, animation) in &characters {
        let mut started = false;
        for entity in children.iter_descendants(root) {
            let Ok(mut player) = players.get_mut(entity) else {
                continue;
            };
            player.play(animation.node).repeat();
            commands
                .entity(entity)
                .insert(AnimationGraphHandle(animation.graph.clone()));
            started = true;
        }

        if started {
            commands.entity(root).insert(AnimationStarted);
        }
    }
}
