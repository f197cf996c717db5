//! Fallback values applied when the configuration document omits a field.
//!
//! # Design
//! - Keep defaults in one place so the loader and `Default` impls agree.

/// Path of the precompiled computation module, relative to the page.
pub(crate) const MODULE_URL: &str = "lumen_compute_bg.wasm";
/// Path of the JavaScript glue generated alongside the module.
pub(crate) const GLUE_URL: &str = "lumen_compute.js";
/// Log level used when none is configured.
pub(crate) const LOG_LEVEL: &str = "info";
/// Log levels accepted by the logging layer.
pub(crate) const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
