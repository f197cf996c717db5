//! Readiness state machine for the computation module.

use std::fmt::{self, Display, Formatter};

use crate::error::{BootError, BootResult};

/// Lifecycle of the computation module during startup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ModuleReadiness {
    /// Sequence has not started.
    #[default]
    Uninitialized,
    /// Initialisation is in flight.
    Initializing,
    /// Module reported success.
    Ready,
    /// Module reported an error.
    Failed,
}

impl ModuleReadiness {
    /// Whether moving from `self` to `next` is a legal step.
    #[must_use]
    pub const fn can_advance_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Uninitialized, Self::Initializing)
                | (Self::Initializing, Self::Ready | Self::Failed)
        )
    }

    /// Stable lowercase label used in logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Uninitialized => "uninitialized",
            Self::Initializing => "initializing",
            Self::Ready => "ready",
            Self::Failed => "failed",
        }
    }
}

impl Display for ModuleReadiness {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Single-owner tracker enforcing the legal readiness transitions.
#[derive(Debug, Default)]
pub(crate) struct ReadinessTracker {
    state: ModuleReadiness,
}

impl ReadinessTracker {
    pub(crate) const fn state(&self) -> ModuleReadiness {
        self.state
    }

    pub(crate) fn advance(&mut self, next: ModuleReadiness) -> BootResult<()> {
        if !self.state.can_advance_to(next) {
            return Err(BootError::InvalidTransition {
                from: self.state,
                to: next,
            });
        }
        self.state = next;
        Ok(())
    }
}
