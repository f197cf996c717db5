//! Failure taxonomy for bringing the computation module to readiness.
//!
//! # Design
//! - Every variant names the location that failed; JS rejections are kept as
//!   rendered text since `JsValue` is neither `Send` nor an error type.
//! - Status classification lives here so it builds and tests natively.

use thiserror::Error;

/// Failures while bringing the computation module to readiness.
#[derive(Debug, Error)]
pub enum ModuleLoadError {
    /// The request for the module could not be sent.
    #[error("module fetch failed")]
    Fetch {
        /// Module location.
        url: String,
        /// Underlying request error.
        source: gloo_net::Error,
    },
    /// The server answered with a non-success status.
    #[error("module fetch returned an error status")]
    Status {
        /// Module location.
        url: String,
        /// HTTP status code.
        status: u16,
    },
    /// The response body could not be read as bytes.
    #[error("module body could not be read")]
    Body {
        /// Module location.
        url: String,
        /// Underlying response error.
        source: gloo_net::Error,
    },
    /// The glue script could not be imported or has no default initialiser.
    #[error("module glue could not be loaded")]
    Glue {
        /// Glue script location.
        url: String,
        /// Rendering of the rejected JS value.
        detail: String,
    },
    /// The glue initialiser rejected the module bytes.
    #[error("module instantiation failed")]
    Instantiate {
        /// Module location.
        url: String,
        /// Rendering of the rejected JS value.
        detail: String,
    },
}

/// Accept `2xx` responses for the module at `url`.
///
/// # Errors
///
/// Returns [`ModuleLoadError::Status`] for any other status code.
pub fn ensure_success(url: &str, status: u16) -> Result<(), ModuleLoadError> {
    if (200..300).contains(&status) {
        return Ok(());
    }
    Err(ModuleLoadError::Status {
        url: url.to_string(),
        status,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::describe;
    use lumen_boot::BootError;

    #[test]
    fn success_statuses_pass() {
        assert!(ensure_success("lumen_compute_bg.wasm", 200).is_ok());
        assert!(ensure_success("lumen_compute_bg.wasm", 204).is_ok());
    }

    #[test]
    fn error_statuses_keep_url_and_code() {
        for code in [199, 301, 404, 503] {
            match ensure_success("/pkg/lumen_compute_bg.wasm", code) {
                Err(ModuleLoadError::Status { url, status }) => {
                    assert_eq!(url, "/pkg/lumen_compute_bg.wasm");
                    assert_eq!(status, code);
                }
                other => panic!("expected status failure for {code}, got {other:?}"),
            }
        }
    }

    #[test]
    fn status_failure_reads_through_boot_error() {
        let err = ensure_success("lumen_compute_bg.wasm", 404)
            .map_err(|err| BootError::ModuleInit {
                source: Box::new(err),
            })
            .err();
        assert_eq!(
            err.as_ref().map(describe).as_deref(),
            Some("computation module failed to initialize: module fetch returned an error status")
        );
    }

    #[test]
    fn rejected_instantiation_is_downcastable() {
        let err = BootError::ModuleInit {
            source: Box::new(ModuleLoadError::Instantiate {
                url: "lumen_compute_bg.wasm".to_string(),
                detail: "TypeError: import module \"wbg\" is not an object".to_string(),
            }),
        };
        assert_eq!(
            describe(&err),
            "computation module failed to initialize: module instantiation failed"
        );
        let BootError::ModuleInit { source } = &err else {
            panic!("expected module init failure");
        };
        assert!(matches!(
            source.downcast_ref::<ModuleLoadError>(),
            Some(ModuleLoadError::Instantiate { detail, .. }) if detail.contains("wbg")
        ));
    }

    #[test]
    fn glue_failure_names_the_script() {
        let err = ModuleLoadError::Glue {
            url: "lumen_compute.js".to_string(),
            detail: "default export is not a function".to_string(),
        };
        assert_eq!(err.to_string(), "module glue could not be loaded");
        assert!(matches!(err, ModuleLoadError::Glue { ref url, .. } if url == "lumen_compute.js"));
    }
}
