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
#![allow(clippy::module_name_repetitions)]

//! Lumen bootstrap sequencing.
//!
//! Brings the precompiled computation module to readiness, then mounts the UI
//! root onto the host document. Mounting never happens before the module is
//! ready, and every failure is returned to the caller.
//!
//! Layout: `boundary.rs` (collaborator traits), `state.rs` (readiness state
//! machine), `target.rs` (mount target identifier), `instance.rs` (handle
//! returned to the host), `sequencer.rs` (`BootSequencer`).

pub mod boundary;
pub mod error;
pub mod instance;
pub mod sequencer;
pub mod state;
pub mod target;

pub use boundary::{ComputeModule, HostDocument, UiMount};
pub use error::{BootError, BootResult, BoxError, TargetIdError};
pub use instance::AppInstance;
pub use sequencer::BootSequencer;
pub use state::ModuleReadiness;
pub use target::{DEFAULT_MOUNT_TARGET, MountTargetId};
