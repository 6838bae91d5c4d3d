//! Document backend trait and geometry types.
//!
//! The backend is the boundary between this crate and the live page. The
//! embedder (a browser extension bridge, a webdriver, or the in-memory
//! implementation in [`crate::dom::memory`]) supplies selector queries,
//! document-order comparison, highlighting, keyboard focus, and scrolling.
//!
//! Every method is infallible by contract: operations on an element that no
//! longer exists are expected to degrade to a no-op or a neutral value, never
//! to raise. That mirrors the absorption policy of the navigation core, which
//! closes all edge cases internally.

// ============================================================================
// Imports
// ============================================================================

use crate::identifiers::ElementId;

// ============================================================================
// Types
// ============================================================================

/// Relative document position of one element with respect to another.
///
/// Matches visual top-to-bottom, depth-first reading order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentPosition {
    /// The first element precedes the second in document order.
    Preceding,
    /// The first element follows the second in document order.
    Following,
    /// Both IDs refer to the same element.
    Same,
    /// The elements have no defined ordering relation.
    Disconnected,
}

/// Scroll target alignment within the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollAlignment {
    /// Align the element's top edge with the viewport top.
    Top,
    /// Align the element's bottom edge with the viewport bottom.
    Bottom,
}

/// A bounding rectangle relative to the viewport, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Horizontal offset of the left edge.
    pub x: f64,
    /// Vertical offset of the top edge.
    pub y: f64,
    /// Rectangle width.
    pub width: f64,
    /// Rectangle height.
    pub height: f64,
}

impl Rect {
    /// Creates a new rectangle.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns the top edge offset.
    #[inline]
    #[must_use]
    pub const fn top(&self) -> f64 {
        self.y
    }

    /// Returns the bottom edge offset.
    #[inline]
    #[must_use]
    pub const fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

// ============================================================================
// DomBackend
// ============================================================================

/// Boundary to the live document.
///
/// Implementations must be cheap to call: every operation executes
/// synchronously on the thread handling the key event, and nothing here is
/// allowed to suspend or block.
pub trait DomBackend: Send + Sync {
    // ========================================================================
    // Element Relations
    // ========================================================================

    /// Compares two elements by document position.
    ///
    /// Returns [`DocumentPosition::Disconnected`] when either element is
    /// unknown or no longer part of the document.
    fn compare_position(&self, a: &ElementId, b: &ElementId) -> DocumentPosition;

    /// Returns the parent element, if any.
    fn parent(&self, id: &ElementId) -> Option<ElementId>;

    // ========================================================================
    // Element State
    // ========================================================================

    /// Adds a CSS class to the element. No-op for unknown elements.
    fn add_class(&self, id: &ElementId, class: &str);

    /// Removes a CSS class from the element. No-op for unknown elements.
    fn remove_class(&self, id: &ElementId, class: &str);

    /// Moves keyboard focus to the element.
    fn focus(&self, id: &ElementId);

    /// Selects the element's text content (input elements).
    fn select_text(&self, id: &ElementId);

    /// Activates the element as if clicked.
    fn activate(&self, id: &ElementId);

    /// Returns the element's link target, if it has one.
    fn href(&self, id: &ElementId) -> Option<String>;

    /// Returns the element's viewport-relative bounding rectangle.
    ///
    /// Unknown elements report an empty rectangle at the origin.
    fn bounding_rect(&self, id: &ElementId) -> Rect;

    // ========================================================================
    // Scrolling & Viewport
    // ========================================================================

    /// Scrolls the element into view with the given alignment.
    fn scroll_into_view(&self, id: &ElementId, alignment: ScrollAlignment);

    /// Scrolls the viewport by the given amount in CSS pixels.
    fn scroll_by(&self, x: f64, y: f64);

    /// Returns the viewport height in CSS pixels.
    fn viewport_height(&self) -> f64;

    // ========================================================================
    // Page State
    // ========================================================================

    /// Returns the runtime's user-agent identification string.
    fn user_agent(&self) -> String;

    /// Returns the current page URL.
    fn location(&self) -> String;

    /// Navigates the page to the given URL.
    fn set_location(&self, url: &str);

    // ========================================================================
    // Queries
    // ========================================================================

    /// Returns the first element matching the selector, if any.
    fn query(&self, selector: &str) -> Option<ElementId>;

    /// Returns all elements matching the selector, in document order.
    fn query_all(&self, selector: &str) -> Vec<ElementId>;
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let rect = Rect::new(0.0, 120.0, 600.0, 80.0);
        assert_eq!(rect.top(), 120.0);
        assert_eq!(rect.bottom(), 200.0);
    }

    #[test]
    fn test_rect_default_is_empty() {
        let rect = Rect::default();
        assert_eq!(rect.top(), 0.0);
        assert_eq!(rect.bottom(), 0.0);
    }
}
