//! Asset loader contract.
//!
//! Loads are asynchronous: [`AssetLoader::begin`] issues one, and its completion (success or
//! failure) shows up in a later [`AssetLoader::poll`]. Every request carries the token the swap
//! controller issued, and the completion hands it back untouched.

use crate::{ASSET_DIR, ASSET_EXTENSION, Result};

/// Identifies one asset request. Tokens increase monotonically; a larger token is a newer request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(pub u64);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadRequest {
    pub token: RequestToken,
    /// Asset identifier, e.g. `"Running"`.
    pub asset: String,
    /// Path handed to the underlying loader.
    pub path: String,
}

/// A successfully loaded model: its hierarchy plus zero or more animation clips.
#[derive(Clone, Debug, PartialEq)]
pub struct LoadedAsset<H, C> {
    pub hierarchy: H,
    pub clips: Vec<C>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LoadCompletion<H, C> {
    pub token: RequestToken,
    pub asset: String,
    pub outcome: Result<LoadedAsset<H, C>>,
}

pub trait AssetLoader {
    type Hierarchy;
    type Clip;

    /// Start loading `request.path`. Never blocks.
    fn begin(&mut self, request: LoadRequest);

    /// Completions that arrived since the last poll, in arrival order.
    fn poll(&mut self) -> Vec<LoadCompletion<Self::Hierarchy, Self::Clip>>;
}

/// Path of the model file for `asset`, relative to the asset root.
pub fn asset_path(asset: &str) -> String {
    format!("{ASSET_DIR}/{asset}.{ASSET_EXTENSION}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_path_keeps_spaces() {
        assert_eq!(
            asset_path("Breakdance Ending 1"),
            "models/Breakdance Ending 1.glb"
        );
    }

    #[test]
    fn tokens_order_by_issue() {
        assert!(RequestToken(2) > RequestToken(1));
    }
}
