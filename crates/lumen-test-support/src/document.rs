//! In-memory host document with id lookup and child insertion.

use std::cell::RefCell;
use std::rc::Rc;

use lumen_boot::{HostDocument, MountTargetId};

use crate::journal::{BootEvent, Journal};

#[derive(Debug)]
struct ElementNode {
    id: String,
    tag: String,
    children: Vec<String>,
}

/// Flat document of identified elements. Clones share the same tree.
#[derive(Clone, Debug)]
pub struct FakeDocument {
    elements: Rc<RefCell<Vec<ElementNode>>>,
    journal: Journal,
}

impl FakeDocument {
    /// Empty document reporting into `journal`.
    #[must_use]
    pub fn new(journal: Journal) -> Self {
        Self {
            elements: Rc::default(),
            journal,
        }
    }

    /// Add an element with the given id and tag name.
    #[must_use]
    pub fn with_element(self, id: &str, tag: &str) -> Self {
        self.elements.borrow_mut().push(ElementNode {
            id: id.to_string(),
            tag: tag.to_string(),
            children: Vec::new(),
        });
        self
    }

    /// Labels of the nodes inserted beneath element `id`.
    #[must_use]
    pub fn children_of(&self, id: &str) -> Vec<String> {
        self.elements
            .borrow()
            .iter()
            .find(|element| element.id == id)
            .map(|element| element.children.clone())
            .unwrap_or_default()
    }

    /// Total nodes inserted anywhere in the document.
    #[must_use]
    pub fn inserted_nodes(&self) -> usize {
        self.elements
            .borrow()
            .iter()
            .map(|element| element.children.len())
            .sum()
    }
}

impl HostDocument for FakeDocument {
    type Target = ElementRef;

    fn find_element(&self, id: &MountTargetId) -> Option<ElementRef> {
        self.journal.record(BootEvent::Lookup(id.to_string()));
        let elements = self.elements.borrow();
        let index = elements
            .iter()
            .position(|element| element.id == id.as_str())?;
        Some(ElementRef {
            index,
            id: elements[index].id.clone(),
            tag: elements[index].tag.clone(),
            elements: Rc::clone(&self.elements),
            journal: self.journal.clone(),
        })
    }
}

/// Resolved element inside a [`FakeDocument`].
#[derive(Clone, Debug)]
pub struct ElementRef {
    index: usize,
    id: String,
    tag: String,
    elements: Rc<RefCell<Vec<ElementNode>>>,
    journal: Journal,
}

impl ElementRef {
    /// Element id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Element tag name.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Insert a node labelled `node` beneath this element.
    pub fn append_child(&self, node: &str) {
        if let Some(element) = self.elements.borrow_mut().get_mut(self.index) {
            element.children.push(node.to_string());
        }
        self.journal.record(BootEvent::NodeInserted {
            parent: self.id.clone(),
            node: node.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_records_and_resolves() -> Result<(), lumen_boot::TargetIdError> {
        let journal = Journal::new();
        let document = FakeDocument::new(journal.clone()).with_element("app", "div");

        let found = document.find_element(&MountTargetId::default());
        assert_eq!(found.as_ref().map(ElementRef::tag), Some("div"));
        assert!(document.find_element(&MountTargetId::parse("missing")?).is_none());
        assert_eq!(
            journal.events(),
            vec![
                BootEvent::Lookup("app".to_string()),
                BootEvent::Lookup("missing".to_string()),
            ]
        );
        Ok(())
    }

    #[test]
    fn append_child_lands_under_element() {
        let journal = Journal::new();
        let document = FakeDocument::new(journal)
            .with_element("app", "div")
            .with_element("footer", "footer");

        if let Some(app) = document.find_element(&MountTargetId::default()) {
            app.append_child("shell");
        }
        assert_eq!(document.children_of("app"), vec!["shell".to_string()]);
        assert!(document.children_of("footer").is_empty());
        assert_eq!(document.inserted_nodes(), 1);
    }
}
