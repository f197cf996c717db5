//! Scripted computation module and recording UI mounter.

use async_trait::async_trait;
use lumen_boot::{ComputeModule, UiMount};
use thiserror::Error;

use crate::document::ElementRef;
use crate::journal::{BootEvent, Journal};

/// Outcome a [`ScriptedModule`] produces when initialised.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InitScript {
    /// Resolve successfully after yielding once.
    Succeed,
    /// Reject with the given reason after yielding once.
    Fail(String),
    /// Never resolve.
    Pending,
}

/// Initialisation failure raised by [`ScriptedModule`].
#[derive(Debug, Error, PartialEq, Eq)]
#[error("scripted module initialization failed: {reason}")]
pub struct ScriptedInitError {
    /// Reason supplied by the script.
    pub reason: String,
}

/// Computation module whose initialisation follows an [`InitScript`].
#[derive(Debug)]
pub struct ScriptedModule {
    script: InitScript,
    journal: Journal,
}

impl ScriptedModule {
    /// Module following `script`, reporting into `journal`.
    #[must_use]
    pub const fn new(script: InitScript, journal: Journal) -> Self {
        Self { script, journal }
    }
}

#[async_trait(?Send)]
impl ComputeModule for ScriptedModule {
    type Error = ScriptedInitError;

    async fn initialize(&mut self) -> Result<(), ScriptedInitError> {
        self.journal.record(BootEvent::InitStarted);
        tokio::task::yield_now().await;
        match &self.script {
            InitScript::Succeed => {
                self.journal.record(BootEvent::InitResolved);
                Ok(())
            }
            InitScript::Fail(reason) => {
                self.journal.record(BootEvent::InitRejected);
                Err(ScriptedInitError {
                    reason: reason.clone(),
                })
            }
            InitScript::Pending => std::future::pending().await,
        }
    }
}

/// Construction failure raised by a rejecting [`RecordingMount`].
#[derive(Debug, Error, PartialEq, Eq)]
#[error("mount rejected: {reason}")]
pub struct MountRejected {
    /// Reason supplied by the test.
    pub reason: String,
}

/// Handle returned by [`RecordingMount`].
#[derive(Debug, PartialEq, Eq)]
pub struct MountedRoot {
    target_id: String,
    nodes: Vec<String>,
}

impl MountedRoot {
    /// Element the root was attached to.
    #[must_use]
    pub fn target_id(&self) -> &str {
        &self.target_id
    }

    /// Node labels the root inserted.
    #[must_use]
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }
}

/// UI mounter that inserts labelled nodes and journals each construction.
#[derive(Debug)]
pub struct RecordingMount {
    journal: Journal,
    nodes: Vec<String>,
    reject: Option<String>,
}

impl RecordingMount {
    /// Mounter inserting a single `lumen-shell` node.
    #[must_use]
    pub fn new(journal: Journal) -> Self {
        Self {
            journal,
            nodes: vec!["lumen-shell".to_string()],
            reject: None,
        }
    }

    /// Mounter that fails construction with `reason` before touching the target.
    #[must_use]
    pub fn rejecting(journal: Journal, reason: &str) -> Self {
        Self {
            reject: Some(reason.to_string()),
            ..Self::new(journal)
        }
    }

    /// Replace the labels of the nodes inserted on mount.
    #[must_use]
    pub fn with_nodes(mut self, nodes: &[&str]) -> Self {
        self.nodes = nodes.iter().map(ToString::to_string).collect();
        self
    }
}

impl UiMount<ElementRef> for RecordingMount {
    type Handle = MountedRoot;
    type Error = MountRejected;

    fn mount(&self, target: ElementRef) -> Result<MountedRoot, MountRejected> {
        self.journal
            .record(BootEvent::MountStarted(target.id().to_string()));
        if let Some(reason) = &self.reject {
            return Err(MountRejected {
                reason: reason.clone(),
            });
        }
        for node in &self.nodes {
            target.append_child(node);
        }
        self.journal.record(BootEvent::Mounted(target.id().to_string()));
        Ok(MountedRoot {
            target_id: target.id().to_string(),
            nodes: self.nodes.clone(),
        })
    }
}
