//! Gathering of raw result groups from the page.
//!
//! Each semantic region contributes one group; the collection merges them by
//! document position afterwards, so the order here only matters for entries
//! the document cannot relate. Regions absent from the page contribute empty
//! groups, which is fine.

// ============================================================================
// Imports
// ============================================================================

use std::sync::Arc;

use crate::dom::{Document, Element};
use crate::results::{ContainerResolver, ResultGroup};

use super::selectors;

// ============================================================================
// Group Gathering
// ============================================================================

/// Collects the page's result groups in their conventional order.
#[must_use]
pub fn search_result_groups(document: &Document) -> Vec<ResultGroup> {
    vec![
        ResultGroup::with_resolver(
            document.query_all(selectors::ORGANIC_RESULTS),
            organic_container(),
        ),
        ResultGroup::new(document.query_all(selectors::PROMOTED_BLOCKS)),
        ResultGroup::new(document.query_all(selectors::SHOPPING_RESULTS)),
        ResultGroup::new(document.query_all(selectors::PAGINATION_LINKS)),
    ]
}

/// Organic result anchors sit two levels below their visual container.
fn organic_container() -> ContainerResolver {
    Arc::new(|anchor: &Element| anchor.parent().and_then(|parent| parent.parent()))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use crate::results::{ScrollCompensation, SearchResults};

    use crate::dom::memory::MemoryDom;
    use crate::identifiers::ElementId;

    #[test]
    fn test_groups_merge_interleaved_regions() {
        let dom = MemoryDom::new();
        // document order: prev link, organic a, shopping s, organic b, next link
        let prev = dom.insert("pnprev");
        let a = dom.insert("a");
        let s = dom.insert("s");
        let b = dom.insert("b");
        let next = dom.insert("pnnext");
        dom.register_selector(selectors::ORGANIC_RESULTS, &[a, b]);
        dom.register_selector(selectors::SHOPPING_RESULTS, &[s]);
        dom.register_selector(selectors::PAGINATION_LINKS, &[prev, next]);
        let document = Document::new(Arc::new(dom));

        let results = SearchResults::from_groups(
            search_result_groups(&document),
            ScrollCompensation::none(),
        );
        let order: Vec<_> = (0..results.len())
            .map(|i| results.get(i).unwrap().anchor().id().clone())
            .collect();
        assert_eq!(
            order,
            vec![
                ElementId::new("pnprev"),
                ElementId::new("a"),
                ElementId::new("s"),
                ElementId::new("b"),
                ElementId::new("pnnext"),
            ]
        );
    }

    #[test]
    fn test_missing_regions_contribute_nothing() {
        let dom = MemoryDom::new();
        let a = dom.insert("a");
        dom.register_selector(selectors::ORGANIC_RESULTS, &[a]);
        let document = Document::new(Arc::new(dom));

        let results = SearchResults::from_groups(
            search_result_groups(&document),
            ScrollCompensation::none(),
        );
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn test_organic_container_is_grandparent() {
        let dom = MemoryDom::new();
        let container = dom.insert("container");
        let wrapper = dom.insert("wrapper");
        let a = dom.insert("a");
        dom.set_parent(&a, &wrapper);
        dom.set_parent(&wrapper, &container);
        dom.register_selector(selectors::ORGANIC_RESULTS, &[a]);
        let document = Document::new(Arc::new(dom));

        let results = SearchResults::from_groups(
            search_result_groups(&document),
            ScrollCompensation::none(),
        );
        assert_eq!(
            *results.get(0).unwrap().container().id(),
            ElementId::new("container")
        );
    }
}
