//! Console-facing summaries of bootstrap failures.

use std::error::Error;
use std::fmt::Write as _;

use lumen_boot::BootError;

/// Render `err` and its source chain as one line for the browser console.
#[must_use]
pub fn describe(err: &BootError) -> String {
    let mut message = match err {
        BootError::ModuleInit { .. } => "computation module failed to initialize".to_string(),
        BootError::TargetNotFound { target_id } => {
            format!("no element with id `{target_id}` to mount the ui into")
        }
        BootError::MountConstruction { target_id, .. } => {
            format!("ui root could not be mounted into `{target_id}`")
        }
        BootError::InvalidTransition { from, to } => {
            format!("bootstrap state error: {from} -> {to}")
        }
    };
    let mut cause = err.source();
    while let Some(inner) = cause {
        let _ = write!(message, ": {inner}");
        cause = inner.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_boot::ModuleReadiness;
    use std::io;

    #[test]
    fn module_failures_include_cause() {
        let err = BootError::ModuleInit {
            source: Box::new(io::Error::other("404 Not Found")),
        };
        assert_eq!(
            describe(&err),
            "computation module failed to initialize: 404 Not Found"
        );
    }

    #[test]
    fn missing_target_names_the_id() {
        let err = BootError::TargetNotFound {
            target_id: "app".to_string(),
        };
        assert_eq!(describe(&err), "no element with id `app` to mount the ui into");
    }

    #[test]
    fn construction_and_state_errors_render() {
        let err = BootError::MountConstruction {
            target_id: "viewer".to_string(),
            source: Box::new(io::Error::other("not an html element")),
        };
        assert_eq!(
            describe(&err),
            "ui root could not be mounted into `viewer`: not an html element"
        );

        let err = BootError::InvalidTransition {
            from: ModuleReadiness::Failed,
            to: ModuleReadiness::Ready,
        };
        assert_eq!(describe(&err), "bootstrap state error: failed -> ready");
    }
}
