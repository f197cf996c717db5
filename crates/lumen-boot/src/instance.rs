//! Application instance handed to the host once the UI root is mounted.

use crate::target::MountTargetId;

/// Live UI root produced by a successful bootstrap.
///
/// The sequencer keeps no reference to it; the caller owns its lifetime and
/// decides when (or whether) to tear it down.
#[derive(Debug)]
pub struct AppInstance<H> {
    handle: H,
    target_id: MountTargetId,
}

impl<H> AppInstance<H> {
    pub(crate) const fn new(handle: H, target_id: MountTargetId) -> Self {
        Self { handle, target_id }
    }

    /// Framework handle for the mounted root.
    #[must_use]
    pub const fn handle(&self) -> &H {
        &self.handle
    }

    /// Identifier of the element the root is attached to.
    #[must_use]
    pub const fn target_id(&self) -> &MountTargetId {
        &self.target_id
    }

    /// Release the framework handle, e.g. to destroy the root.
    #[must_use]
    pub fn into_handle(self) -> H {
        self.handle
    }
}
