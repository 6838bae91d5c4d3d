//! Viewport scroll policy for focused results.
//!
//! After a focus change the focused entry's visual container must be fully
//! visible. Containers above the viewport are aligned to the top; containers
//! extending below are aligned to the bottom, with an extra compensation
//! offset for engines that draw an overlay near focused links which obscures
//! the bottom edge. Fully visible containers are left alone.

// ============================================================================
// Imports
// ============================================================================

use tracing::debug;

use crate::dom::{Element, ScrollAlignment};

// ============================================================================
// Constants
// ============================================================================

/// Height of the Firefox link-target tooltip plus some margin, in CSS pixels.
const FIREFOX_BOTTOM_DELTA: f64 = 26.0;

// ============================================================================
// ScrollCompensation
// ============================================================================

/// Injected bottom-edge compensation policy.
///
/// Firefox displays a link-target tooltip at the bottom of the viewport which
/// obstructs the view; the compensation reserves extra space for it. The
/// value is derived from the user-agent string once, at session construction,
/// and degrades to zero when the engine cannot be identified.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollCompensation {
    /// Extra bottom margin in CSS pixels.
    offset: f64,
}

impl ScrollCompensation {
    /// No compensation.
    #[inline]
    #[must_use]
    pub const fn none() -> Self {
        Self { offset: 0.0 }
    }

    /// A fixed compensation offset.
    #[inline]
    #[must_use]
    pub const fn fixed(offset: f64) -> Self {
        Self { offset }
    }

    /// Derives the compensation from a user-agent string.
    ///
    /// The identification is a heuristic, not guaranteed accurate.
    #[must_use]
    pub fn from_user_agent(user_agent: &str) -> Self {
        if user_agent.to_lowercase().contains("firefox") {
            Self::fixed(FIREFOX_BOTTOM_DELTA)
        } else {
            Self::none()
        }
    }

    /// Returns the compensation offset in CSS pixels.
    #[inline]
    #[must_use]
    pub const fn offset(&self) -> f64 {
        self.offset
    }
}

// ============================================================================
// Scroll Policy
// ============================================================================

/// Ensures the container is visible in the viewport.
pub(crate) fn ensure_visible(container: &Element, compensation: ScrollCompensation) {
    let bounds = container.bounding_rect();
    let viewport_height = container.document().viewport_height();

    if bounds.top() < 0.0 {
        debug!(element_id = %container.id(), top = bounds.top(), "Scrolling container to top");
        container.scroll_into_view(ScrollAlignment::Top);
    } else if bounds.bottom() + compensation.offset() > viewport_height {
        debug!(
            element_id = %container.id(),
            bottom = bounds.bottom(),
            compensation = compensation.offset(),
            "Scrolling container to bottom"
        );
        container.scroll_into_view(ScrollAlignment::Bottom);
        if compensation.offset() > 0.0 {
            container.document().scroll_by(0.0, compensation.offset());
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use crate::dom::memory::{DomAction, MemoryDom};
    use crate::dom::{Document, Rect};
    use crate::identifiers::ElementId;

    fn element_with_rect(rect: Rect) -> (MemoryDom, Element) {
        let dom = MemoryDom::new();
        let id = dom.insert_with_rect("container", rect);
        let document = Document::new(Arc::new(dom.clone()));
        (dom, document.element(id))
    }

    fn container_id() -> ElementId {
        ElementId::new("container")
    }

    #[test]
    fn test_above_viewport_scrolls_to_top() {
        let (dom, element) = element_with_rect(Rect::new(0.0, -50.0, 600.0, 120.0));
        ensure_visible(&element, ScrollCompensation::none());
        assert_eq!(
            dom.take_actions(),
            vec![DomAction::ScrolledIntoView {
                id: container_id(),
                alignment: ScrollAlignment::Top,
            }]
        );
    }

    #[test]
    fn test_below_viewport_scrolls_to_bottom() {
        let (dom, element) = element_with_rect(Rect::new(0.0, 750.0, 600.0, 120.0));
        ensure_visible(&element, ScrollCompensation::none());
        assert_eq!(
            dom.take_actions(),
            vec![DomAction::ScrolledIntoView {
                id: container_id(),
                alignment: ScrollAlignment::Bottom,
            }]
        );
    }

    #[test]
    fn test_compensation_adds_bottom_scroll() {
        // bottom edge at 790 fits an 800px viewport, but not with 26px reserved
        let (dom, element) = element_with_rect(Rect::new(0.0, 700.0, 600.0, 90.0));
        ensure_visible(&element, ScrollCompensation::fixed(26.0));
        assert_eq!(
            dom.take_actions(),
            vec![
                DomAction::ScrolledIntoView {
                    id: container_id(),
                    alignment: ScrollAlignment::Bottom,
                },
                DomAction::ScrolledBy { x: 0.0, y: 26.0 },
            ]
        );
    }

    #[test]
    fn test_fully_visible_does_not_scroll() {
        let (dom, element) = element_with_rect(Rect::new(0.0, 100.0, 600.0, 120.0));
        ensure_visible(&element, ScrollCompensation::fixed(26.0));
        assert!(dom.take_actions().is_empty());
    }

    #[test]
    fn test_from_user_agent_detects_firefox() {
        let firefox = "Mozilla/5.0 (X11; Linux x86_64; rv:142.0) Gecko/20100101 Firefox/142.0";
        assert_eq!(
            ScrollCompensation::from_user_agent(firefox).offset(),
            FIREFOX_BOTTOM_DELTA
        );
        assert_eq!(
            ScrollCompensation::from_user_agent("FIREFOX/99.0").offset(),
            FIREFOX_BOTTOM_DELTA
        );
    }

    #[test]
    fn test_from_user_agent_defaults_to_none() {
        let chrome = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 Chrome/140.0";
        assert_eq!(ScrollCompensation::from_user_agent(chrome).offset(), 0.0);
        assert_eq!(ScrollCompensation::from_user_agent("").offset(), 0.0);
    }
}
