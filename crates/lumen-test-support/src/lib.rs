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

//! Shared test helpers used across integration suites.
//! Layout: journal.rs (ordered event log), document.rs (in-memory host document),
//! mocks.rs (scripted module + recording mounter), fixtures.rs (wired harness).

pub mod document;
pub mod fixtures;
pub mod journal;
pub mod mocks;

pub use document::{ElementRef, FakeDocument};
pub use fixtures::{BootHarness, FakeSequencer};
pub use journal::{BootEvent, Journal};
pub use mocks::{
    InitScript, MountRejected, MountedRoot, RecordingMount, ScriptedInitError, ScriptedModule,
};
