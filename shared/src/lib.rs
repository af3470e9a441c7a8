pub mod constants;
pub mod context;
pub mod error;
pub mod layout;
pub mod loader;
pub mod orbit;
pub mod pan;
pub mod physics;
pub mod rapier_world;
pub mod registry;
pub mod scene;
pub mod swap;
pub mod sync;
pub mod types;

#[cfg(test)]
mod testing;

pub use constants::*;
pub use context::{ActiveCharacter, SceneContext, SwapOutcome, fatal_only};
pub use error::{Error, Result};
pub use layout::{
    Hsl, PropPlacement, ground_colors, ground_dimensions, jitter_vertices, scatter_cubes,
};
pub use loader::{AssetLoader, LoadCompletion, LoadRequest, LoadedAsset, RequestToken, asset_path};
pub use orbit::Orbit;
pub use pan::{PanDirection, PanTween, pan_offset};
pub use physics::{BodyShape, PhysicsWorld, StepClock, WorldSettings};
pub use rapier_world::{RapierWorld, rapier3d};
pub use registry::{BindingRegistry, BodyMeshBinding};
pub use scene::SceneGraph;
pub use swap::{SwapController, SwapState};
pub use sync::sync_bindings;
pub use types::{Pose, Quat, SyncMode, Vec3};
