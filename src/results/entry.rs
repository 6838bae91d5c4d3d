//! Result entries: one navigable target each.

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::sync::Arc;

use crate::dom::Element;

// ============================================================================
// Types
// ============================================================================

/// Maps a result anchor to its enclosing visual container.
///
/// Used only for viewport calculations; scrolling the container into view
/// rather than just the link keeps the whole result visible. Returning `None`
/// falls back to the anchor itself.
pub type ContainerResolver = Arc<dyn Fn(&Element) -> Option<Element> + Send + Sync>;

// ============================================================================
// SearchResult
// ============================================================================

/// One navigable search result.
///
/// Holds a borrowed handle to the clickable anchor plus the optional
/// container resolver of the group it came from. Entries are created once
/// per page load and discarded wholesale on navigation.
#[derive(Clone)]
pub struct SearchResult {
    /// The clickable anchor element.
    anchor: Element,
    /// Container resolver; absent means the anchor is its own container.
    resolver: Option<ContainerResolver>,
}

impl fmt::Debug for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchResult")
            .field("anchor", &self.anchor)
            .field("has_resolver", &self.resolver.is_some())
            .finish()
    }
}

impl SearchResult {
    /// Creates a new result entry.
    pub(crate) fn new(anchor: Element, resolver: Option<ContainerResolver>) -> Self {
        Self { anchor, resolver }
    }

    /// Returns the clickable anchor element.
    #[inline]
    #[must_use]
    pub fn anchor(&self) -> &Element {
        &self.anchor
    }

    /// Returns the entry's visual container.
    ///
    /// Resolves via the group's container resolver, falling back to the
    /// anchor itself when the resolver is absent or finds nothing.
    #[must_use]
    pub fn container(&self) -> Element {
        self.resolver
            .as_ref()
            .and_then(|resolve| resolve(&self.anchor))
            .unwrap_or_else(|| self.anchor.clone())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use crate::dom::Document;
    use crate::dom::memory::MemoryDom;

    #[test]
    fn test_container_falls_back_to_anchor() {
        let dom = MemoryDom::new();
        let anchor_id = dom.insert("anchor");
        let document = Document::new(Arc::new(dom));
        let anchor = document.element(anchor_id.clone());

        let entry = SearchResult::new(anchor, None);
        assert_eq!(*entry.container().id(), anchor_id);
    }

    #[test]
    fn test_container_uses_resolver() {
        let dom = MemoryDom::new();
        let outer = dom.insert("outer");
        let anchor_id = dom.insert("anchor");
        dom.set_parent(&anchor_id, &outer);
        let document = Document::new(Arc::new(dom));
        let anchor = document.element(anchor_id);

        let resolver: ContainerResolver = Arc::new(|a: &Element| a.parent());
        let entry = SearchResult::new(anchor, Some(resolver));
        assert_eq!(*entry.container().id(), outer);
    }

    #[test]
    fn test_resolver_miss_falls_back_to_anchor() {
        let dom = MemoryDom::new();
        let anchor_id = dom.insert("anchor");
        let document = Document::new(Arc::new(dom));
        let anchor = document.element(anchor_id.clone());

        // anchor has no parent, so the resolver finds nothing
        let resolver: ContainerResolver = Arc::new(|a: &Element| a.parent());
        let entry = SearchResult::new(anchor, Some(resolver));
        assert_eq!(*entry.container().id(), anchor_id);
    }
}
