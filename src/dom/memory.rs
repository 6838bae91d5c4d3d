//! Deterministic in-memory document backend.
//!
//! [`MemoryDom`] models just enough of a page for navigation logic to run
//! without a browser: elements with a document-order rank, CSS classes, a
//! focus slot, viewport-relative rectangles, selector tables, and a log of
//! scroll/activation side effects. This crate's own tests run on it, and
//! embedders can use it the same way.
//!
//! # Example
//!
//! ```
//! use results_navigator::dom::memory::MemoryDom;
//!
//! let dom = MemoryDom::new();
//! let a = dom.insert("first");
//! let b = dom.insert("second");
//! dom.register_selector("#search a", &[a, b]);
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::sync::Arc;

use parking_lot::Mutex;
use rustc_hash::FxHashMap;

use crate::identifiers::ElementId;

use super::backend::{DocumentPosition, DomBackend, Rect, ScrollAlignment};

// ============================================================================
// Types
// ============================================================================

/// A recorded page side effect.
///
/// Scrolling, activation, and navigation have no observable result inside
/// the in-memory model, so they are captured here for assertions.
#[derive(Debug, Clone, PartialEq)]
pub enum DomAction {
    /// An element was scrolled into view.
    ScrolledIntoView {
        /// The element.
        id: ElementId,
        /// Requested alignment.
        alignment: ScrollAlignment,
    },
    /// The viewport was scrolled by an offset.
    ScrolledBy {
        /// Horizontal amount.
        x: f64,
        /// Vertical amount.
        y: f64,
    },
    /// An element was activated (clicked).
    Activated {
        /// The element.
        id: ElementId,
    },
    /// An element's text was selected.
    SelectedText {
        /// The element.
        id: ElementId,
    },
    /// The page navigated to a new URL.
    LocationChanged {
        /// The new URL.
        url: String,
    },
}

/// Per-element record.
#[derive(Debug, Clone, Default)]
struct ElementRecord {
    /// Document-order rank; `None` means disconnected.
    rank: Option<u64>,
    /// CSS classes currently on the element.
    classes: Vec<String>,
    /// Viewport-relative bounding rectangle.
    rect: Rect,
    /// Link target, if any.
    href: Option<String>,
    /// Parent element, if any.
    parent: Option<ElementId>,
}

/// Shared mutable state.
struct State {
    elements: FxHashMap<ElementId, ElementRecord>,
    selectors: FxHashMap<String, Vec<ElementId>>,
    actions: Vec<DomAction>,
    focused: Option<ElementId>,
    next_rank: u64,
    viewport_height: f64,
    user_agent: String,
    location: String,
}

impl Default for State {
    fn default() -> Self {
        Self {
            elements: FxHashMap::default(),
            selectors: FxHashMap::default(),
            actions: Vec::new(),
            focused: None,
            next_rank: 0,
            viewport_height: 800.0,
            user_agent: String::new(),
            location: "about:blank".to_string(),
        }
    }
}

// ============================================================================
// MemoryDom
// ============================================================================

/// In-memory [`DomBackend`] implementation.
///
/// Cloning yields another handle to the same document state.
#[derive(Clone, Default)]
pub struct MemoryDom {
    inner: Arc<Mutex<State>>,
}

// ============================================================================
// MemoryDom - Construction & Setup
// ============================================================================

impl MemoryDom {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a connected element; rank follows insertion order.
    pub fn insert(&self, id: &str) -> ElementId {
        let element_id = ElementId::new(id);
        let mut state = self.inner.lock();
        let rank = state.next_rank;
        state.next_rank += 1;
        state.elements.insert(
            element_id.clone(),
            ElementRecord {
                rank: Some(rank),
                ..Default::default()
            },
        );
        element_id
    }

    /// Inserts a connected element with a fixed bounding rectangle.
    pub fn insert_with_rect(&self, id: &str, rect: Rect) -> ElementId {
        let element_id = self.insert(id);
        self.set_rect(&element_id, rect);
        element_id
    }

    /// Inserts an element with no document-order rank.
    pub fn insert_disconnected(&self, id: &str) -> ElementId {
        let element_id = ElementId::new(id);
        self.inner
            .lock()
            .elements
            .insert(element_id.clone(), ElementRecord::default());
        element_id
    }

    /// Sets an element's bounding rectangle.
    pub fn set_rect(&self, id: &ElementId, rect: Rect) {
        if let Some(record) = self.inner.lock().elements.get_mut(id) {
            record.rect = rect;
        }
    }

    /// Sets an element's link target.
    pub fn set_href(&self, id: &ElementId, href: &str) {
        if let Some(record) = self.inner.lock().elements.get_mut(id) {
            record.href = Some(href.to_string());
        }
    }

    /// Sets an element's parent.
    pub fn set_parent(&self, child: &ElementId, parent: &ElementId) {
        if let Some(record) = self.inner.lock().elements.get_mut(child) {
            record.parent = Some(parent.clone());
        }
    }

    /// Registers the element list a selector resolves to.
    pub fn register_selector(&self, selector: &str, ids: &[ElementId]) {
        self.inner
            .lock()
            .selectors
            .insert(selector.to_string(), ids.to_vec());
    }

    /// Sets the viewport height.
    pub fn set_viewport_height(&self, height: f64) {
        self.inner.lock().viewport_height = height;
    }

    /// Sets the user-agent identification string.
    pub fn set_user_agent(&self, user_agent: &str) {
        self.inner.lock().user_agent = user_agent.to_string();
    }

    /// Sets the page URL without recording a navigation action.
    pub fn set_page_url(&self, url: &str) {
        self.inner.lock().location = url.to_string();
    }
}

// ============================================================================
// MemoryDom - Inspection
// ============================================================================

impl MemoryDom {
    /// Returns the CSS classes currently on an element.
    #[must_use]
    pub fn classes(&self, id: &ElementId) -> Vec<String> {
        self.inner
            .lock()
            .elements
            .get(id)
            .map(|record| record.classes.clone())
            .unwrap_or_default()
    }

    /// Returns the element holding keyboard focus, if any.
    #[must_use]
    pub fn focused(&self) -> Option<ElementId> {
        self.inner.lock().focused.clone()
    }

    /// Returns a copy of the recorded side effects.
    #[must_use]
    pub fn actions(&self) -> Vec<DomAction> {
        self.inner.lock().actions.clone()
    }

    /// Drains and returns the recorded side effects.
    pub fn take_actions(&self) -> Vec<DomAction> {
        std::mem::take(&mut self.inner.lock().actions)
    }
}

// ============================================================================
// DomBackend Implementation
// ============================================================================

impl DomBackend for MemoryDom {
    fn compare_position(&self, a: &ElementId, b: &ElementId) -> DocumentPosition {
        if a == b {
            return DocumentPosition::Same;
        }
        let state = self.inner.lock();
        let rank_a = state.elements.get(a).and_then(|record| record.rank);
        let rank_b = state.elements.get(b).and_then(|record| record.rank);
        match (rank_a, rank_b) {
            (Some(ra), Some(rb)) if ra < rb => DocumentPosition::Preceding,
            (Some(_), Some(_)) => DocumentPosition::Following,
            _ => DocumentPosition::Disconnected,
        }
    }

    fn parent(&self, id: &ElementId) -> Option<ElementId> {
        self.inner
            .lock()
            .elements
            .get(id)
            .and_then(|record| record.parent.clone())
    }

    fn add_class(&self, id: &ElementId, class: &str) {
        if let Some(record) = self.inner.lock().elements.get_mut(id)
            && !record.classes.iter().any(|c| c == class)
        {
            record.classes.push(class.to_string());
        }
    }

    fn remove_class(&self, id: &ElementId, class: &str) {
        if let Some(record) = self.inner.lock().elements.get_mut(id) {
            record.classes.retain(|c| c != class);
        }
    }

    fn focus(&self, id: &ElementId) {
        let mut state = self.inner.lock();
        if state.elements.contains_key(id) {
            state.focused = Some(id.clone());
        }
    }

    fn select_text(&self, id: &ElementId) {
        self.inner
            .lock()
            .actions
            .push(DomAction::SelectedText { id: id.clone() });
    }

    fn activate(&self, id: &ElementId) {
        self.inner
            .lock()
            .actions
            .push(DomAction::Activated { id: id.clone() });
    }

    fn href(&self, id: &ElementId) -> Option<String> {
        self.inner
            .lock()
            .elements
            .get(id)
            .and_then(|record| record.href.clone())
    }

    fn bounding_rect(&self, id: &ElementId) -> Rect {
        self.inner
            .lock()
            .elements
            .get(id)
            .map(|record| record.rect)
            .unwrap_or_default()
    }

    fn scroll_into_view(&self, id: &ElementId, alignment: ScrollAlignment) {
        self.inner.lock().actions.push(DomAction::ScrolledIntoView {
            id: id.clone(),
            alignment,
        });
    }

    fn scroll_by(&self, x: f64, y: f64) {
        self.inner.lock().actions.push(DomAction::ScrolledBy { x, y });
    }

    fn viewport_height(&self) -> f64 {
        self.inner.lock().viewport_height
    }

    fn user_agent(&self) -> String {
        self.inner.lock().user_agent.clone()
    }

    fn location(&self) -> String {
        self.inner.lock().location.clone()
    }

    fn set_location(&self, url: &str) {
        let mut state = self.inner.lock();
        state.location = url.to_string();
        state.actions.push(DomAction::LocationChanged {
            url: url.to_string(),
        });
    }

    fn query(&self, selector: &str) -> Option<ElementId> {
        self.inner
            .lock()
            .selectors
            .get(selector)
            .and_then(|ids| ids.first().cloned())
    }

    fn query_all(&self, selector: &str) -> Vec<ElementId> {
        self.inner
            .lock()
            .selectors
            .get(selector)
            .cloned()
            .unwrap_or_default()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_follows_insertion_order() {
        let dom = MemoryDom::new();
        let a = dom.insert("a");
        let b = dom.insert("b");
        assert_eq!(dom.compare_position(&a, &b), DocumentPosition::Preceding);
        assert_eq!(dom.compare_position(&b, &a), DocumentPosition::Following);
    }

    #[test]
    fn test_disconnected_has_no_relation() {
        let dom = MemoryDom::new();
        let a = dom.insert("a");
        let loose = dom.insert_disconnected("loose");
        assert_eq!(
            dom.compare_position(&a, &loose),
            DocumentPosition::Disconnected
        );
        assert_eq!(
            dom.compare_position(&loose, &a),
            DocumentPosition::Disconnected
        );
    }

    #[test]
    fn test_unknown_element_is_disconnected() {
        let dom = MemoryDom::new();
        let a = dom.insert("a");
        let ghost = ElementId::new("ghost");
        assert_eq!(
            dom.compare_position(&a, &ghost),
            DocumentPosition::Disconnected
        );
    }

    #[test]
    fn test_add_class_is_idempotent() {
        let dom = MemoryDom::new();
        let a = dom.insert("a");
        dom.add_class(&a, "highlighted-search-result");
        dom.add_class(&a, "highlighted-search-result");
        assert_eq!(dom.classes(&a).len(), 1);
    }

    #[test]
    fn test_focus_ignores_unknown_elements() {
        let dom = MemoryDom::new();
        let a = dom.insert("a");
        dom.focus(&a);
        dom.focus(&ElementId::new("ghost"));
        assert_eq!(dom.focused(), Some(a));
    }

    #[test]
    fn test_action_log_records_side_effects() {
        let dom = MemoryDom::new();
        let a = dom.insert("a");
        dom.scroll_into_view(&a, ScrollAlignment::Bottom);
        dom.scroll_by(0.0, 26.0);
        dom.activate(&a);

        let actions = dom.take_actions();
        assert_eq!(actions.len(), 3);
        assert_eq!(
            actions[0],
            DomAction::ScrolledIntoView {
                id: a.clone(),
                alignment: ScrollAlignment::Bottom,
            }
        );
        assert!(dom.actions().is_empty());
    }

    #[test]
    fn test_selector_tables() {
        let dom = MemoryDom::new();
        let a = dom.insert("a");
        dom.register_selector("#pnprev, #pnnext", &[a.clone()]);
        assert_eq!(dom.query("#pnprev, #pnnext"), Some(a));
        assert!(dom.query_all("#missing").is_empty());
    }
}
