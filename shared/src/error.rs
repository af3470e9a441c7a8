use thiserror::Error;

/// Errors raised by the physics world, the binding registry and the swap controller.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The model source is missing, corrupt, or contains nothing to show.
    #[error("failed to load asset `{asset}`: {reason}")]
    AssetLoadFailure { asset: String, reason: String },

    #[error("physics world used before initialization")]
    PhysicsUninitialized,

    #[error("physics world is already initialized")]
    AlreadyInitialized,

    /// The mesh (formatted with `Debug`) already has a physics body driving it.
    #[error("mesh {0} is already bound to a physics body")]
    DuplicateBinding(String),

    #[error("body {0} does not exist in the physics world")]
    UnknownBody(String),

    #[error("a {shape} shape cannot back a {kind} body")]
    UnsupportedShape {
        shape: &'static str,
        kind: &'static str,
    },
}

impl Error {
    /// Fatal errors mean the frame (or startup) must not continue.
    ///
    /// Load failures and rejected bindings are reported and the caller carries on.
    pub fn is_fatal(&self) -> bool {
        match self {
            Error::AssetLoadFailure { .. } | Error::DuplicateBinding(_) => false,
            Error::PhysicsUninitialized
            | Error::AlreadyInitialized
            | Error::UnknownBody(_)
            | Error::UnsupportedShape { .. } => true,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_failures_are_recoverable() {
        let err = Error::AssetLoadFailure {
            asset: "Running".into(),
            reason: "file not found".into(),
        };
        assert!(!err.is_fatal());
        assert_eq!(
            err.to_string(),
            "failed to load asset `Running`: file not found"
        );
    }

    #[test]
    fn uninitialized_physics_is_fatal() {
        assert!(Error::PhysicsUninitialized.is_fatal());
        assert!(!Error::DuplicateBinding("7".into()).is_fatal());
    }
}
