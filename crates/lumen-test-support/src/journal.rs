//! Ordered log of collaborator activity shared by the fakes.

use std::cell::RefCell;
use std::rc::Rc;

/// Observable step taken by a fake collaborator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BootEvent {
    /// Module initialisation was invoked.
    InitStarted,
    /// Module initialisation resolved successfully.
    InitResolved,
    /// Module initialisation rejected.
    InitRejected,
    /// Document lookup for an element id.
    Lookup(String),
    /// Mount construction began for the element id.
    MountStarted(String),
    /// A UI node was inserted beneath `parent`.
    NodeInserted {
        /// Element id receiving the node.
        parent: String,
        /// Label of the inserted node.
        node: String,
    },
    /// Mount construction completed for the element id.
    Mounted(String),
}

impl BootEvent {
    /// `true` for events that change the document.
    #[must_use]
    pub const fn is_mutation(&self) -> bool {
        matches!(self, Self::NodeInserted { .. })
    }
}

/// Cloneable handle onto one shared event log.
#[derive(Clone, Debug, Default)]
pub struct Journal {
    events: Rc<RefCell<Vec<BootEvent>>>,
}

impl Journal {
    /// Fresh, empty journal.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event.
    pub fn record(&self, event: BootEvent) {
        self.events.borrow_mut().push(event);
    }

    /// Snapshot of every event recorded so far.
    #[must_use]
    pub fn events(&self) -> Vec<BootEvent> {
        self.events.borrow().clone()
    }

    /// Index of the first event matching `predicate`.
    pub fn position(&self, predicate: impl Fn(&BootEvent) -> bool) -> Option<usize> {
        self.events.borrow().iter().position(predicate)
    }

    /// Number of events matching `predicate`.
    pub fn count(&self, predicate: impl Fn(&BootEvent) -> bool) -> usize {
        self.events.borrow().iter().filter(|event| predicate(event)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_one_log() {
        let journal = Journal::new();
        let other = journal.clone();
        other.record(BootEvent::InitStarted);
        journal.record(BootEvent::Lookup("app".to_string()));

        assert_eq!(journal.events().len(), 2);
        assert_eq!(journal.position(|event| matches!(event, BootEvent::Lookup(_))), Some(1));
        assert_eq!(other.count(BootEvent::is_mutation), 0);
    }
}
