//! DOM element handles.
//!
//! Elements are identified by an [`ElementId`] assigned by the document
//! backend and borrowed from the live page: the handle does not own the node
//! and becomes stale the moment the page navigates away.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use results_navigator::dom::{Document, memory::MemoryDom};
//!
//! let dom = MemoryDom::new();
//! let id = dom.insert("anchor");
//! let document = Document::new(Arc::new(dom));
//!
//! let element = document.element(id);
//! element.add_class("highlighted-search-result");
//! element.focus();
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::identifiers::ElementId;

use super::backend::{DocumentPosition, Rect, ScrollAlignment};
use super::document::Document;

// ============================================================================
// Types
// ============================================================================

/// Internal shared state for an element.
pub(crate) struct ElementInner {
    /// This element's ID.
    pub id: ElementId,

    /// The document this element belongs to.
    pub document: Document,
}

// ============================================================================
// Element
// ============================================================================

/// A handle to a DOM element in the current page.
///
/// Operations delegate to the document backend by ID. All operations are
/// infallible; acting on an element that has left the document degrades to a
/// no-op per the backend contract.
#[derive(Clone)]
pub struct Element {
    /// Shared inner state.
    pub(crate) inner: Arc<ElementInner>,
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("id", &self.inner.id)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Element - Constructor & Accessors
// ============================================================================

impl Element {
    /// Creates a new element handle.
    pub(crate) fn new(id: ElementId, document: Document) -> Self {
        Self {
            inner: Arc::new(ElementInner { id, document }),
        }
    }

    /// Returns this element's ID.
    #[inline]
    #[must_use]
    pub fn id(&self) -> &ElementId {
        &self.inner.id
    }

    /// Returns the document this element belongs to.
    #[inline]
    #[must_use]
    pub fn document(&self) -> &Document {
        &self.inner.document
    }

    /// Returns the parent element, if any.
    #[must_use]
    pub fn parent(&self) -> Option<Element> {
        self.inner
            .document
            .backend
            .parent(&self.inner.id)
            .map(|id| self.inner.document.element(id))
    }
}

// ============================================================================
// Element - Relations
// ============================================================================

impl Element {
    /// Compares this element's document position against another.
    #[must_use]
    pub fn compare_document_position(&self, other: &Element) -> DocumentPosition {
        self.inner
            .document
            .backend
            .compare_position(&self.inner.id, &other.inner.id)
    }
}

// ============================================================================
// Element - Actions
// ============================================================================

impl Element {
    /// Adds a CSS class to the element.
    pub fn add_class(&self, class: &str) {
        self.inner.document.backend.add_class(&self.inner.id, class);
    }

    /// Removes a CSS class from the element.
    pub fn remove_class(&self, class: &str) {
        self.inner
            .document
            .backend
            .remove_class(&self.inner.id, class);
    }

    /// Moves keyboard focus to the element.
    pub fn focus(&self) {
        debug!(element_id = %self.inner.id, "Focusing element");
        self.inner.document.backend.focus(&self.inner.id);
    }

    /// Selects the element's text content (input elements).
    pub fn select(&self) {
        debug!(element_id = %self.inner.id, "Selecting element text");
        self.inner.document.backend.select_text(&self.inner.id);
    }

    /// Activates the element as if clicked.
    pub fn activate(&self) {
        debug!(element_id = %self.inner.id, "Activating element");
        self.inner.document.backend.activate(&self.inner.id);
    }

    /// Returns the element's link target, if it has one.
    #[must_use]
    pub fn href(&self) -> Option<String> {
        self.inner.document.backend.href(&self.inner.id)
    }
}

// ============================================================================
// Element - Geometry & Scroll
// ============================================================================

impl Element {
    /// Returns the element's viewport-relative bounding rectangle.
    #[must_use]
    pub fn bounding_rect(&self) -> Rect {
        self.inner.document.backend.bounding_rect(&self.inner.id)
    }

    /// Scrolls the element into view with the given alignment.
    pub fn scroll_into_view(&self, alignment: ScrollAlignment) {
        debug!(element_id = %self.inner.id, alignment = ?alignment, "Scrolling element into view");
        self.inner
            .document
            .backend
            .scroll_into_view(&self.inner.id, alignment);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use crate::dom::memory::MemoryDom;

    fn document_with(dom: MemoryDom) -> Document {
        Document::new(Arc::new(dom))
    }

    #[test]
    fn test_element_is_clone_and_debug() {
        fn assert_clone<T: Clone>() {}
        fn assert_debug<T: fmt::Debug>() {}
        assert_clone::<Element>();
        assert_debug::<Element>();
    }

    #[test]
    fn test_class_round_trip() {
        let dom = MemoryDom::new();
        let id = dom.insert("a");
        let document = document_with(dom.clone());

        let element = document.element(id.clone());
        element.add_class("highlighted-search-result");
        assert_eq!(dom.classes(&id), vec!["highlighted-search-result"]);

        element.remove_class("highlighted-search-result");
        assert!(dom.classes(&id).is_empty());
    }

    #[test]
    fn test_compare_document_position() {
        let dom = MemoryDom::new();
        let first = dom.insert("first");
        let second = dom.insert("second");
        let document = document_with(dom);

        let a = document.element(first);
        let b = document.element(second);
        assert_eq!(a.compare_document_position(&b), DocumentPosition::Preceding);
        assert_eq!(b.compare_document_position(&a), DocumentPosition::Following);
        assert_eq!(a.compare_document_position(&a), DocumentPosition::Same);
    }

    #[test]
    fn test_parent_chain() {
        let dom = MemoryDom::new();
        let outer = dom.insert("outer");
        let mid = dom.insert("mid");
        let anchor = dom.insert("anchor");
        dom.set_parent(&anchor, &mid);
        dom.set_parent(&mid, &outer);
        let document = document_with(dom);

        let element = document.element(anchor);
        let container = element.parent().and_then(|p| p.parent());
        assert_eq!(*container.unwrap().id(), outer);
    }
}
