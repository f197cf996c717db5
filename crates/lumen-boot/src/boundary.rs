//! Seams to the collaborators the bootstrap sequence drives.
//!
//! # Design
//! - Each collaborator is reached through exactly one operation.
//! - Futures are `?Send`: browser handles cannot cross threads and the
//!   sequence runs on a single cooperative executor.

use std::error::Error as StdError;

use async_trait::async_trait;

use crate::target::MountTargetId;

/// The precompiled computation module, seen only through its readiness step.
#[async_trait(?Send)]
pub trait ComputeModule {
    /// Failure raised when the module cannot become ready.
    type Error: StdError + 'static;

    /// Load and initialise the module. Resolves once it is usable.
    async fn initialize(&mut self) -> Result<(), Self::Error>;
}

/// Host document lookup.
pub trait HostDocument {
    /// Reference to a resolved document location.
    type Target;

    /// Resolve the element carrying `id`, or `None` when absent.
    fn find_element(&self, id: &MountTargetId) -> Option<Self::Target>;
}

/// UI framework construction bound to a resolved target.
pub trait UiMount<T> {
    /// Live instance handle produced by a successful mount.
    type Handle;
    /// Failure raised by the framework while constructing the root.
    type Error: StdError + 'static;

    /// Construct the UI root and attach it beneath `target`.
    ///
    /// # Errors
    ///
    /// Returns the framework's error when the root cannot be constructed.
    fn mount(&self, target: T) -> Result<Self::Handle, Self::Error>;
}
