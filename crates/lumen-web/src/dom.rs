//! Host document backed by `web_sys::Document`.

use lumen_boot::{HostDocument, MountTargetId};
use web_sys::{Document, Element};

/// The page's document, resolved once at startup.
#[derive(Clone, Debug)]
pub struct WebDocument {
    document: Document,
}

impl WebDocument {
    /// Wrap an existing document.
    #[must_use]
    pub const fn new(document: Document) -> Self {
        Self { document }
    }

    /// Document of the current browsing context, if there is one.
    #[must_use]
    pub fn current() -> Option<Self> {
        web_sys::window()
            .and_then(|window| window.document())
            .map(Self::new)
    }

    /// Text content of the element with `id`, used for embedded configuration.
    #[must_use]
    pub fn text_of(&self, id: &str) -> Option<String> {
        self.document
            .get_element_by_id(id)
            .and_then(|element| element.text_content())
    }
}

impl HostDocument for WebDocument {
    type Target = Element;

    fn find_element(&self, id: &MountTargetId) -> Option<Element> {
        self.document.get_element_by_id(id.as_str())
    }
}
