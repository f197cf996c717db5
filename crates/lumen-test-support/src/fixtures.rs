//! Pre-wired bootstrap harness.

use lumen_boot::BootSequencer;

use crate::document::FakeDocument;
use crate::journal::Journal;
use crate::mocks::{InitScript, RecordingMount, ScriptedModule};

/// Sequencer wired to fakes, with the journal and document kept for assertions.
pub type FakeSequencer = BootSequencer<ScriptedModule, FakeDocument, RecordingMount>;

/// Journal plus document shared with every sequencer the harness builds.
#[derive(Clone, Debug)]
pub struct BootHarness {
    /// Event log shared by all fakes.
    pub journal: Journal,
    /// Document the sequencer resolves targets in.
    pub document: FakeDocument,
}

impl BootHarness {
    /// Harness whose document holds one `div` per id.
    #[must_use]
    pub fn with_elements(ids: &[&str]) -> Self {
        let journal = Journal::new();
        let document = ids.iter().fold(FakeDocument::new(journal.clone()), |doc, id| {
            doc.with_element(id, "div")
        });
        Self { journal, document }
    }

    /// Sequencer whose module follows `script`, using the default mounter.
    #[must_use]
    pub fn sequencer(&self, script: InitScript) -> FakeSequencer {
        self.sequencer_with_mount(script, RecordingMount::new(self.journal.clone()))
    }

    /// Sequencer whose module follows `script`, using `mount`.
    #[must_use]
    pub fn sequencer_with_mount(&self, script: InitScript, mount: RecordingMount) -> FakeSequencer {
        BootSequencer::new(
            ScriptedModule::new(script, self.journal.clone()),
            self.document.clone(),
            mount,
        )
    }
}
