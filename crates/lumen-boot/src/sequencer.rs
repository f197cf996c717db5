//! Bootstrap sequencer.
//!
//! # Design
//! - Initialisation is the only suspension point; lookup and mount run
//!   straight through once it resolves.
//! - `run` consumes the sequencer, so a root is constructed at most once.
//! - Nothing is retried. The first failure ends the sequence and is returned.

use tracing::{Instrument, debug, error, info, info_span};

use crate::boundary::{ComputeModule, HostDocument, UiMount};
use crate::error::{BootError, BootResult};
use crate::instance::AppInstance;
use crate::state::{ModuleReadiness, ReadinessTracker};
use crate::target::MountTargetId;

/// Orders module initialisation before UI mounting.
#[derive(Debug)]
pub struct BootSequencer<M, D, U> {
    module: M,
    document: D,
    mounter: U,
    target_id: MountTargetId,
}

impl<M, D, U> BootSequencer<M, D, U>
where
    M: ComputeModule,
    D: HostDocument,
    U: UiMount<D::Target>,
{
    /// Wire the collaborators, targeting the default `app` element.
    pub fn new(module: M, document: D, mounter: U) -> Self {
        Self {
            module,
            document,
            mounter,
            target_id: MountTargetId::default(),
        }
    }

    /// Mount into the element identified by `target_id` instead.
    #[must_use]
    pub fn with_target(mut self, target_id: MountTargetId) -> Self {
        self.target_id = target_id;
        self
    }

    /// Identifier the sequence will resolve after the module is ready.
    #[must_use]
    pub const fn target_id(&self) -> &MountTargetId {
        &self.target_id
    }

    /// Initialise the module, resolve the target, and mount the UI root.
    ///
    /// # Errors
    ///
    /// - [`BootError::ModuleInit`] when the module fails; nothing is mounted.
    /// - [`BootError::TargetNotFound`] when the target element is missing.
    /// - [`BootError::MountConstruction`] when the UI framework fails.
    pub async fn run(self) -> BootResult<AppInstance<U::Handle>> {
        let span = info_span!("bootstrap", target_id = %self.target_id);
        self.sequence().instrument(span).await
    }

    async fn sequence(self) -> BootResult<AppInstance<U::Handle>> {
        let Self {
            mut module,
            document,
            mounter,
            target_id,
        } = self;
        let mut readiness = ReadinessTracker::default();

        readiness.advance(ModuleReadiness::Initializing)?;
        debug!(state = %readiness.state(), "initializing computation module");

        if let Err(err) = module.initialize().await {
            readiness.advance(ModuleReadiness::Failed)?;
            error!(state = %readiness.state(), error = %err, "computation module initialization failed");
            return Err(BootError::module_init(err));
        }
        readiness.advance(ModuleReadiness::Ready)?;
        debug!(state = %readiness.state(), "computation module ready");

        let Some(target) = document.find_element(&target_id) else {
            error!("mount target not found in document");
            return Err(BootError::TargetNotFound {
                target_id: target_id.to_string(),
            });
        };

        let handle = mounter.mount(target).map_err(|err| {
            error!(error = %err, "ui root construction failed");
            BootError::mount_construction(target_id.as_str(), err)
        })?;

        info!("application mounted");
        Ok(AppInstance::new(handle, target_id))
    }
}
