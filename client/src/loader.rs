//! Character models through bevy's asset server.
//!
//! [`GltfLoader::begin`] hands the path to the asset server and remembers the handle;
//! [`GltfLoader::poll`] checks every remembered handle once and reports the ones that finished.

use bevy::{asset::LoadState, ecs::system::SystemParam, gltf::Gltf, prelude::*};
use shared::{AssetLoader, Error, LoadCompletion, LoadRequest, LoadedAsset};

/// Loads started but not yet reported, oldest first.
#[derive(Resource, Default)]
pub struct PendingLoads(Vec<(LoadRequest, Handle<Gltf>)>);

#[derive(SystemParam)]
pub struct GltfLoader<'w> {
    asset_server: Res<'w, AssetServer>,
    gltfs: Res<'w, Assets<Gltf>>,
    pending: ResMut<'w, PendingLoads>,
}

impl GltfLoader<'_> {
    fn finish(
        &self,
        request: LoadRequest,
        handle: &Handle<Gltf>,
    ) -> LoadCompletion<Handle<Scene>, Handle<AnimationClip>> {
        let outcome = match self.gltfs.get(handle) {
            Some(gltf) => match gltf
                .default_scene
                .clone()
                .or_else(|| gltf.scenes.first().cloned())
            {
                Some(hierarchy) => Ok(LoadedAsset {
                    hierarchy,
                    clips: gltf.animations.clone(),
                }),
                None => Err(failure(&request, "file contains no scene".into())),
            },
            None => Err(failure(&request, "asset vanished after loading".into())),
        };

        LoadCompletion {
            token: request.token,
            asset: request.asset,
            outcome,
        }
    }
}

fn failure(request: &LoadRequest, reason: String) -> Error {
    Error::AssetLoadFailure {
        asset: request.asset.clone(),
        reason,
    }
}

impl AssetLoader for GltfLoader<'_> {
    type Hierarchy = Handle<Scene>;
    type Clip = Handle<AnimationClip>;

    fn begin(&mut self, request: LoadRequest) {
        let handle = self.asset_server.load::<Gltf>(request.path.clone());
        self.pending.0.push((request, handle));
    }

    fn poll(&mut self) -> Vec<LoadCompletion<Handle<Scene>, Handle<AnimationClip>>> {
        let mut finished = Vec::new();

        for (request, handle) in std::mem::take(&mut self.pending.0) {
            match self.asset_server.load_state(handle.id()) {
                LoadState::Loaded => finished.push(self.finish(request, &handle)),
                LoadState::Failed(err) => {
                    let error = failure(&request, err.to_string());
                    finished.push(LoadCompletion {
                        token: request.token,
                        asset: request.asset,
                        outcome: Err(error),
                    });
                }
                LoadState::NotLoaded | LoadState::Loading => self.pending.0.push((request, handle)),
            }
        }

        finished
    }
}
