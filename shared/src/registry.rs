//! Body–mesh binding registry.
//!
//! An ordered list of (mesh, body, mode) entries. Iteration follows insertion order so the
//! synchronization step visits bindings deterministically.
//!
//! # Invariants
//! - A mesh appears in at most one binding. [`BindingRegistry::bind`] rejects a second
//!   binding for the same mesh with [`Error::DuplicateBinding`] and leaves the registry as it was.
//! - Removing a mesh that is not bound is a no-op.

use std::fmt;

use crate::{Error, Result, SyncMode};

/// One visual mesh paired with the physics body that mirrors it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BodyMeshBinding<M, B> {
    pub mesh: M,
    pub body: B,
    pub mode: SyncMode,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BindingRegistry<M, B> {
    bindings: Vec<BodyMeshBinding<M, B>>,
}

impl<M, B> Default for BindingRegistry<M, B> {
    fn default() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }
}

impl<M, B> BindingRegistry<M, B>
where
    M: Copy + Eq + fmt::Debug,
    B: Copy,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a binding. Fails if `mesh` is already bound.
    pub fn bind(&mut self, mesh: M, body: B, mode: SyncMode) -> Result<()> {
        if self.contains(mesh) {
            return Err(Error::DuplicateBinding(format!("{mesh:?}")));
        }
        self.bindings.push(BodyMeshBinding { mesh, body, mode });
        Ok(())
    }

    /// Remove and return the binding for `mesh`, if there is one.
    pub fn unbind(&mut self, mesh: M) -> Option<BodyMeshBinding<M, B>> {
        let index = self.bindings.iter().position(|b| b.mesh == mesh)?;
        // `remove` (not `swap_remove`) keeps the remaining iteration order stable.
        Some(self.bindings.remove(index))
    }

    pub fn get(&self, mesh: M) -> Option<&BodyMeshBinding<M, B>> {
        self.bindings.iter().find(|b| b.mesh == mesh)
    }

    pub fn contains(&self, mesh: M) -> bool {
        self.get(mesh).is_some()
    }

    /// Bindings in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &BodyMeshBinding<M, B>> {
        self.bindings.iter()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn count_mode(&self, mode: SyncMode) -> usize {
        self.bindings.iter().filter(|b| b.mode == mode).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_appends_in_order() {
        let mut reg = BindingRegistry::new();
        reg.bind(1u32, 10u32, SyncMode::Dynamic).unwrap();
        reg.bind(2, 20, SyncMode::Kinematic).unwrap();
        reg.bind(3, 30, SyncMode::Dynamic).unwrap();

        let meshes: Vec<_> = reg.iter().map(|b| b.mesh).collect();
        assert_eq!(meshes, vec![1, 2, 3]);
        assert_eq!(reg.count_mode(SyncMode::Dynamic), 2);
        assert_eq!(reg.count_mode(SyncMode::Kinematic), 1);
    }

    #[test]
    fn duplicate_mesh_is_rejected_without_side_effects() {
        let mut reg = BindingRegistry::new();
        reg.bind(7u32, 70u32, SyncMode::Dynamic).unwrap();
        let before = reg.clone();

        assert_eq!(
            reg.bind(7, 71, SyncMode::Kinematic),
            Err(Error::DuplicateBinding("7".into()))
        );
        assert_eq!(reg, before);
        assert_eq!(reg.get(7).map(|b| b.body), Some(70));
    }

    #[test]
    fn unbind_is_idempotent() {
        let mut reg = BindingRegistry::new();
        reg.bind(1u32, 10u32, SyncMode::Dynamic).unwrap();

        let removed = reg.unbind(1);
        assert_eq!(
            removed,
            Some(BodyMeshBinding {
                mesh: 1,
                body: 10,
                mode: SyncMode::Dynamic
            })
        );
        assert_eq!(reg.unbind(1), None);
        assert_eq!(reg.unbind(99), None);
        assert!(reg.is_empty());
    }

    #[test]
    fn unbind_keeps_remaining_order() {
        let mut reg = BindingRegistry::new();
        for mesh in 0u32..5 {
            reg.bind(mesh, mesh * 10, SyncMode::Dynamic).unwrap();
        }
        reg.unbind(1);

        let meshes: Vec<_> = reg.iter().map(|b| b.mesh).collect();
        assert_eq!(meshes, vec![0, 2, 3, 4]);
    }

    #[test]
    fn a_mesh_can_be_rebound_after_unbind() {
        let mut reg = BindingRegistry::new();
        reg.bind(1u32, 10u32, SyncMode::Kinematic).unwrap();
        reg.unbind(1);
        reg.bind(1, 11, SyncMode::Kinematic).unwrap();
        assert_eq!(reg.len(), 1);
        assert_eq!(reg.get(1).map(|b| b.body), Some(11));
    }
}
