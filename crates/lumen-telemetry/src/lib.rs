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
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Logging primitives shared across the Lumen workspace.
//!
//! Installs one `tracing` subscriber per process. Native builds write to
//! stdout; wasm32 builds route each formatted event to the browser console.

#[cfg(target_arch = "wasm32")]
pub mod console;
pub mod context;
pub mod error;
pub mod init;

pub use context::bootstrap_span;
pub use error::{Result, TelemetryError};
pub use init::{LogFormat, LoggingConfig, build_sha, init_logging};
