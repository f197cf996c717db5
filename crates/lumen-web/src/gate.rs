//! Once-per-page guard for the bootstrap entry point.

use std::cell::Cell;

use thiserror::Error;

/// Raised when the entry point is invoked after it already started.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("lumen bootstrap already started")]
pub struct AlreadyStarted;

/// Latch that admits exactly one bootstrap attempt.
#[derive(Debug, Default)]
pub struct StartGate {
    entered: Cell<bool>,
}

impl StartGate {
    /// Latch that has not been entered yet.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entered: Cell::new(false),
        }
    }

    /// Enter the gate. Only the first call succeeds, whatever its outcome.
    ///
    /// # Errors
    ///
    /// Returns [`AlreadyStarted`] on every later call.
    pub fn enter(&self) -> Result<(), AlreadyStarted> {
        if self.entered.replace(true) {
            return Err(AlreadyStarted);
        }
        Ok(())
    }
}
