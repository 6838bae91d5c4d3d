//! Document handle over a [`DomBackend`].

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::identifiers::ElementId;

use super::backend::DomBackend;
use super::element::Element;

// ============================================================================
// Document
// ============================================================================

/// A cloneable handle to the current page's document.
///
/// Wraps the backend supplied by the embedder and hands out [`Element`]
/// handles for selector queries. Discarded wholesale when the page navigates
/// away; nothing is torn down explicitly.
#[derive(Clone)]
pub struct Document {
    /// The embedder-supplied backend.
    pub(crate) backend: Arc<dyn DomBackend>,
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("location", &self.backend.location())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Document - Constructor
// ============================================================================

impl Document {
    /// Creates a document handle over the given backend.
    #[inline]
    pub fn new(backend: Arc<dyn DomBackend>) -> Self {
        Self { backend }
    }

    /// Creates an element handle bound to this document.
    #[inline]
    #[must_use]
    pub fn element(&self, id: ElementId) -> Element {
        Element::new(id, self.clone())
    }
}

// ============================================================================
// Document - Queries
// ============================================================================

impl Document {
    /// Returns the first element matching the selector, if any.
    #[must_use]
    pub fn query(&self, selector: &str) -> Option<Element> {
        self.backend.query(selector).map(|id| self.element(id))
    }

    /// Returns all elements matching the selector, in document order.
    #[must_use]
    pub fn query_all(&self, selector: &str) -> Vec<Element> {
        let ids = self.backend.query_all(selector);
        debug!(selector = %selector, matches = ids.len(), "Selector query");
        ids.into_iter().map(|id| self.element(id)).collect()
    }
}

// ============================================================================
// Document - Page State
// ============================================================================

impl Document {
    /// Returns the current page URL.
    #[must_use]
    pub fn location(&self) -> String {
        self.backend.location()
    }

    /// Navigates the page to the given URL.
    pub fn set_location(&self, url: &str) {
        debug!(url = %url, "Navigating page");
        self.backend.set_location(url);
    }

    /// Returns the runtime's user-agent identification string.
    #[must_use]
    pub fn user_agent(&self) -> String {
        self.backend.user_agent()
    }

    /// Returns the viewport height in CSS pixels.
    #[must_use]
    pub fn viewport_height(&self) -> f64 {
        self.backend.viewport_height()
    }

    /// Scrolls the viewport by the given amount in CSS pixels.
    pub fn scroll_by(&self, x: f64, y: f64) {
        debug!(x = x, y = y, "Scrolling by");
        self.backend.scroll_by(x, y);
    }
}

// ============================================================================
// Tests
// ============================================================================
