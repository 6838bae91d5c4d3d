//! Result collection: ordering and the focus controller.
//!
//! Raw per-group node lists from several unrelated page regions are merged
//! into one flat sequence sorted by document position, so that keyboard
//! navigation follows visual top-to-bottom reading order regardless of which
//! semantic group each result belongs to.
//!
//! The focus controller owns the current focus index. Moving it applies the
//! highlight class, transfers keyboard focus, and runs the viewport scroll
//! policy. Out-of-range requests degrade to "nothing focused" rather than
//! failing; the collection may be empty.

// ============================================================================
// Imports
// ============================================================================

use std::cmp::Ordering;

use tracing::debug;

use crate::dom::{DocumentPosition, Element};

use super::entry::{ContainerResolver, SearchResult};
use super::scroll::{self, ScrollCompensation};

// ============================================================================
// Constants
// ============================================================================

/// CSS class applied to the focused entry's anchor.
///
/// Embedders style this class to render the visual highlight.
pub const HIGHLIGHT_CLASS: &str = "highlighted-search-result";

// ============================================================================
// ResultGroup
// ============================================================================

/// One raw group of result anchors, as gathered from a page region.
///
/// Groups keep their internal order; the collection re-sorts everything by
/// document position anyway, so the group boundaries carry no meaning after
/// construction.
#[derive(Clone)]
pub struct ResultGroup {
    /// Anchor elements in this group.
    nodes: Vec<Element>,
    /// Shared container resolver for the group, if any.
    resolver: Option<ContainerResolver>,
}

impl ResultGroup {
    /// Creates a group whose anchors are their own containers.
    #[inline]
    #[must_use]
    pub fn new(nodes: Vec<Element>) -> Self {
        Self {
            nodes,
            resolver: None,
        }
    }

    /// Creates a group with a container resolver.
    #[inline]
    #[must_use]
    pub fn with_resolver(nodes: Vec<Element>, resolver: ContainerResolver) -> Self {
        Self {
            nodes,
            resolver: Some(resolver),
        }
    }
}

// ============================================================================
// SearchResults
// ============================================================================

/// The ordered, keyboard-navigable sequence of search results.
///
/// Owns the focus index exclusively; no external party mutates it directly.
/// At most one entry carries the highlight class at any time.
pub struct SearchResults {
    /// Entries sorted by document position.
    items: Vec<SearchResult>,
    /// Focused entry index; `None` means nothing is focused.
    focused: Option<usize>,
    /// Bottom-edge scroll compensation policy.
    compensation: ScrollCompensation,
}

// ============================================================================
// SearchResults - Construction
// ============================================================================

impl SearchResults {
    /// Builds the collection from raw groups.
    ///
    /// Concatenates all groups preserving group-internal order, then sorts
    /// the whole sequence by document position. Entries with no defined
    /// ordering relation compare equal; the sort is stable, so their relative
    /// order follows insertion. Nothing is focused until the first call to
    /// [`focus`](Self::focus).
    #[must_use]
    pub fn from_groups(groups: Vec<ResultGroup>, compensation: ScrollCompensation) -> Self {
        let mut items = Vec::new();
        for group in groups {
            let resolver = group.resolver;
            for node in group.nodes {
                items.push(SearchResult::new(node, resolver.clone()));
            }
        }

        items.sort_by(|a, b| match a.anchor().compare_document_position(b.anchor()) {
            DocumentPosition::Preceding => Ordering::Less,
            DocumentPosition::Following => Ordering::Greater,
            DocumentPosition::Same | DocumentPosition::Disconnected => Ordering::Equal,
        });

        debug!(count = items.len(), "Built result collection");
        Self {
            items,
            focused: None,
            compensation,
        }
    }
}

// ============================================================================
// SearchResults - Accessors
// ============================================================================

impl SearchResults {
    /// Returns the number of entries.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the collection has no entries.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the focused entry index, if any.
    #[inline]
    #[must_use]
    pub fn focused_index(&self) -> Option<usize> {
        self.focused
    }

    /// Returns the entry at the given index.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&SearchResult> {
        self.items.get(index)
    }

    /// Returns the focused entry, if any.
    #[inline]
    #[must_use]
    pub fn focused(&self) -> Option<&SearchResult> {
        self.focused.and_then(|index| self.items.get(index))
    }
}

// ============================================================================
// SearchResults - Focus Controller
// ============================================================================

impl SearchResults {
    /// Focuses the entry at `index`.
    ///
    /// Unhighlights the currently focused entry, then highlights the new
    /// entry's anchor, moves keyboard focus to it, and runs the viewport
    /// scroll policy. An out-of-range index leaves the collection unfocused
    /// with no further action.
    pub fn focus(&mut self, index: usize) {
        self.apply_focus(Some(index));
    }

    /// Moves focus to the next entry.
    ///
    /// Past the last entry the focus wraps to the first when `wrap` is set,
    /// otherwise it stays put (re-focusing the same entry). From the
    /// unfocused state the first entry is focused.
    pub fn focus_next(&mut self, wrap: bool) {
        let target = match self.focused {
            Some(index) if index + 1 < self.items.len() => index + 1,
            Some(index) if !wrap => index,
            _ => 0,
        };
        self.focus(target);
    }

    /// Moves focus to the previous entry.
    ///
    /// Before the first entry the focus wraps to the last when `wrap` is
    /// set, otherwise it stays put. From the unfocused state `wrap` lands on
    /// the last entry; without `wrap` nothing happens.
    pub fn focus_previous(&mut self, wrap: bool) {
        let target = match self.focused {
            Some(index) if index > 0 => Some(index - 1),
            Some(index) if !wrap => Some(index),
            None if !wrap => None,
            _ => self.items.len().checked_sub(1),
        };
        self.apply_focus(target);
    }

    /// Moves the focus marker, highlight, and viewport.
    fn apply_focus(&mut self, target: Option<usize>) {
        if let Some(current) = self.focused.and_then(|index| self.items.get(index)) {
            current.anchor().remove_class(HIGHLIGHT_CLASS);
        }

        let handles = target.and_then(|index| {
            self.items
                .get(index)
                .map(|item| (item.anchor().clone(), item.container()))
        });
        let Some((anchor, container)) = handles else {
            if let Some(index) = target {
                debug!(index = index, len = self.items.len(), "Focus target out of range");
            }
            self.focused = None;
            return;
        };

        debug!(index = target, element_id = %anchor.id(), "Focusing result");
        anchor.add_class(HIGHLIGHT_CLASS);
        anchor.focus();
        scroll::ensure_visible(&container, self.compensation);
        self.focused = target;
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use proptest::prelude::*;

    use crate::dom::Document;
    use crate::dom::memory::MemoryDom;
    use crate::identifiers::ElementId;

    struct Page {
        dom: MemoryDom,
        document: Document,
    }

    impl Page {
        fn new() -> Self {
            let dom = MemoryDom::new();
            let document = Document::new(Arc::new(dom.clone()));
            Self { dom, document }
        }

        fn insert(&self, id: &str) -> Element {
            self.document.element(self.dom.insert(id))
        }

        fn highlighted(&self, ids: &[ElementId]) -> Vec<ElementId> {
            ids.iter()
                .filter(|id| {
                    self.dom
                        .classes(id)
                        .iter()
                        .any(|class| class == HIGHLIGHT_CLASS)
                })
                .cloned()
                .collect()
        }
    }

    fn collection_of(page: &Page, ids: &[&str]) -> SearchResults {
        let nodes = ids.iter().map(|id| page.insert(id)).collect();
        SearchResults::from_groups(
            vec![ResultGroup::new(nodes)],
            ScrollCompensation::none(),
        )
    }

    #[test]
    fn test_groups_merge_by_document_position() {
        let page = Page::new();
        // insertion order is document order
        let a = page.insert("a");
        let b = page.insert("b");
        let prev = page.insert("pnprev");
        let next = page.insert("pnnext");

        // pagination group supplied before the organic group
        let results = SearchResults::from_groups(
            vec![
                ResultGroup::new(vec![prev, next]),
                ResultGroup::new(vec![a, b]),
            ],
            ScrollCompensation::none(),
        );

        let order: Vec<_> = (0..results.len())
            .map(|i| results.get(i).unwrap().anchor().id().clone())
            .collect();
        assert_eq!(
            order,
            vec![
                ElementId::new("a"),
                ElementId::new("b"),
                ElementId::new("pnprev"),
                ElementId::new("pnnext"),
            ]
        );
    }

    #[test]
    fn test_focus_marks_exactly_one_entry() {
        let page = Page::new();
        let results_ids = [
            ElementId::new("a"),
            ElementId::new("b"),
            ElementId::new("c"),
        ];
        let mut results = collection_of(&page, &["a", "b", "c"]);

        results.focus(1);
        assert_eq!(results.focused_index(), Some(1));
        assert_eq!(page.highlighted(&results_ids), vec![ElementId::new("b")]);
        assert_eq!(page.dom.focused(), Some(ElementId::new("b")));

        results.focus(2);
        assert_eq!(results.focused_index(), Some(2));
        assert_eq!(page.highlighted(&results_ids), vec![ElementId::new("c")]);
    }

    #[test]
    fn test_focus_out_of_range_unfocuses() {
        let page = Page::new();
        let ids = [ElementId::new("a"), ElementId::new("b")];
        let mut results = collection_of(&page, &["a", "b"]);

        results.focus(0);
        results.focus(7);
        assert_eq!(results.focused_index(), None);
        assert!(page.highlighted(&ids).is_empty());
    }

    #[test]
    fn test_first_next_lands_on_first_entry() {
        let page = Page::new();
        let mut results = collection_of(&page, &["a", "b", "c"]);

        results.focus_next(false);
        assert_eq!(results.focused_index(), Some(0));
        results.focus_next(false);
        assert_eq!(results.focused_index(), Some(1));
    }

    #[test]
    fn test_next_without_wrap_sticks_at_end() {
        let page = Page::new();
        let ids = [
            ElementId::new("a"),
            ElementId::new("b"),
            ElementId::new("c"),
        ];
        let mut results = collection_of(&page, &["a", "b", "c"]);

        for _ in 0..4 {
            results.focus_next(false);
        }
        assert_eq!(results.focused_index(), Some(2));
        // re-focused, still exactly one highlight
        assert_eq!(page.highlighted(&ids), vec![ElementId::new("c")]);
    }

    #[test]
    fn test_next_with_wrap_cycles_to_start() {
        let page = Page::new();
        let mut results = collection_of(&page, &["a", "b"]);

        results.focus(1);
        results.focus_next(true);
        assert_eq!(results.focused_index(), Some(0));
    }

    #[test]
    fn test_previous_with_wrap_cycles_to_end() {
        let page = Page::new();
        let mut results = collection_of(&page, &["a", "b", "c"]);

        results.focus(0);
        results.focus_previous(true);
        assert_eq!(results.focused_index(), Some(2));
    }

    #[test]
    fn test_previous_without_wrap_sticks_at_start() {
        let page = Page::new();
        let mut results = collection_of(&page, &["a", "b"]);

        results.focus(0);
        results.focus_previous(false);
        assert_eq!(results.focused_index(), Some(0));
    }

    #[test]
    fn test_previous_from_unfocused() {
        let page = Page::new();
        let mut results = collection_of(&page, &["a", "b", "c"]);

        results.focus_previous(false);
        assert_eq!(results.focused_index(), None);

        results.focus_previous(true);
        assert_eq!(results.focused_index(), Some(2));
    }

    #[test]
    fn test_empty_collection_is_safe() {
        let page = Page::new();
        let mut results = collection_of(&page, &[]);

        assert!(results.is_empty());
        results.focus(0);
        assert_eq!(results.focused_index(), None);
        results.focus_next(true);
        results.focus_previous(true);
        assert_eq!(results.focused_index(), None);
        assert!(results.focused().is_none());
    }

    #[test]
    fn test_disconnected_entries_keep_insertion_order() {
        let page = Page::new();
        let a = page.document.element(page.dom.insert_disconnected("x"));
        let b = page.document.element(page.dom.insert_disconnected("y"));

        let results = SearchResults::from_groups(
            vec![ResultGroup::new(vec![a, b])],
            ScrollCompensation::none(),
        );
        assert_eq!(*results.get(0).unwrap().anchor().id(), ElementId::new("x"));
        assert_eq!(*results.get(1).unwrap().anchor().id(), ElementId::new("y"));
    }

    proptest! {
        // Any partition of the page's anchors into groups, in any group
        // order, yields the same document-ordered sequence.
        #[test]
        fn prop_order_is_group_independent(
            assignment in prop::collection::vec(0usize..3, 1..12),
            rotate in 0usize..3,
        ) {
            let page = Page::new();
            let mut groups: Vec<Vec<Element>> = vec![Vec::new(), Vec::new(), Vec::new()];
            let mut expected = Vec::new();
            for (i, group_index) in assignment.iter().enumerate() {
                let name = format!("n{i}");
                let element = page.insert(&name);
                expected.push(element.id().clone());
                groups[*group_index].push(element);
            }
            groups.rotate_left(rotate);

            let results = SearchResults::from_groups(
                groups.into_iter().map(ResultGroup::new).collect(),
                ScrollCompensation::none(),
            );
            let order: Vec<_> = (0..results.len())
                .map(|i| results.get(i).unwrap().anchor().id().clone())
                .collect();
            prop_assert_eq!(order, expected);
        }
    }
}
