#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Lumen browser host.
//!
//! Wires the bootstrap sequencer to the page: the computation module is
//! fetched and instantiated, then the Yew root mounts into the configured
//! element. `gate`, `loading`, `report` and `settings` build natively;
//! everything touching the DOM is wasm32-only.

pub mod gate;
pub mod loading;
pub mod report;
pub mod settings;

#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
pub mod module;
#[cfg(target_arch = "wasm32")]
pub mod mount;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod start;

#[cfg(target_arch = "wasm32")]
pub use start::{start, teardown};

/// Id of the optional `<script type="application/json">` element holding configuration.
pub const CONFIG_ELEMENT_ID: &str = "lumen-config";
