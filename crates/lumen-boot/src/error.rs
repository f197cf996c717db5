//! # Design
//!
//! - One error type covers every way the bootstrap sequence can abort.
//! - Messages stay constant; identifiers and collaborator errors ride in fields.
//! - Collaborator errors are boxed so callers can downcast to the original.

use std::error::Error as StdError;

use thiserror::Error;

use crate::state::ModuleReadiness;

/// Boxed collaborator error preserved as an error source.
pub type BoxError = Box<dyn StdError + 'static>;

/// Result alias for bootstrap operations.
pub type BootResult<T> = Result<T, BootError>;

/// Failures that abort the bootstrap sequence.
#[derive(Debug, Error)]
pub enum BootError {
    /// The computation module failed to initialise.
    #[error("computation module initialization failed")]
    ModuleInit {
        /// Error reported by the module.
        source: BoxError,
    },
    /// No element carried the mount target identifier at lookup time.
    #[error("mount target not found")]
    TargetNotFound {
        /// Identifier that failed to resolve.
        target_id: String,
    },
    /// The UI framework could not construct the root.
    #[error("ui root construction failed")]
    MountConstruction {
        /// Identifier of the target the root was bound to.
        target_id: String,
        /// Error reported by the UI framework.
        source: BoxError,
    },
    /// The readiness state machine was driven out of order.
    #[error("invalid module readiness transition")]
    InvalidTransition {
        /// State before the attempted transition.
        from: ModuleReadiness,
        /// Requested state.
        to: ModuleReadiness,
    },
}

impl BootError {
    pub(crate) fn module_init<E>(source: E) -> Self
    where
        E: StdError + 'static,
    {
        Self::ModuleInit {
            source: Box::new(source),
        }
    }

    pub(crate) fn mount_construction<E>(target_id: &str, source: E) -> Self
    where
        E: StdError + 'static,
    {
        Self::MountConstruction {
            target_id: target_id.to_string(),
            source: Box::new(source),
        }
    }
}

/// Rejections raised while parsing a mount target identifier.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TargetIdError {
    /// Identifier was empty.
    #[error("mount target identifier is empty")]
    Empty,
    /// Identifier contained whitespace, which element ids may not.
    #[error("mount target identifier contains whitespace")]
    Whitespace {
        /// Rejected identifier.
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn module_init_keeps_original_error_as_source() {
        let err = BootError::module_init(io::Error::other("wasm fetch refused"));
        assert_eq!(err.to_string(), "computation module initialization failed");

        let source = err.source().map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("wasm fetch refused"));
    }

    #[test]
    fn mount_construction_records_target() {
        let err = BootError::mount_construction("app", io::Error::other("not html"));
        match err {
            BootError::MountConstruction { target_id, source } => {
                assert_eq!(target_id, "app");
                assert!(source.downcast_ref::<io::Error>().is_some());
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn messages_stay_constant() {
        let missing = BootError::TargetNotFound {
            target_id: "viewer".to_string(),
        };
        assert_eq!(missing.to_string(), "mount target not found");
        assert!(missing.source().is_none());

        let transition = BootError::InvalidTransition {
            from: ModuleReadiness::Ready,
            to: ModuleReadiness::Initializing,
        };
        assert_eq!(transition.to_string(), "invalid module readiness transition");
    }
}
