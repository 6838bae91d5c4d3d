//! Tab-creation collaborator.
//!
//! Opening a result in a new tab dispatches a request to an external
//! tab-creation service (in the extension, a runtime message to the
//! background page). The dispatch is fire-and-forget: no response handling,
//! no delivery guarantee.

// ============================================================================
// Imports
// ============================================================================

use serde::{Deserialize, Serialize};
use tracing::debug;

// ============================================================================
// TabMessage
// ============================================================================

/// A message to the tab-creation service.
///
/// Serializes to the `{"type": "tabsCreate", "options": {...}}` envelope the
/// background service expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "options")]
pub enum TabMessage {
    /// Create a browser tab.
    #[serde(rename = "tabsCreate")]
    Create {
        /// Target URL.
        url: String,
        /// Whether the new tab takes focus.
        active: bool,
    },
}

impl TabMessage {
    /// Creates a foreground tab request.
    #[inline]
    #[must_use]
    pub fn foreground(url: impl Into<String>) -> Self {
        Self::Create {
            url: url.into(),
            active: true,
        }
    }

    /// Creates a background tab request.
    #[inline]
    #[must_use]
    pub fn background(url: impl Into<String>) -> Self {
        Self::Create {
            url: url.into(),
            active: false,
        }
    }
}

// ============================================================================
// TabOpener
// ============================================================================

/// External tab-creation service.
pub trait TabOpener: Send + Sync {
    /// Dispatches a tab-creation message. Fire-and-forget.
    fn open(&self, message: TabMessage);
}

/// Opener that drops every message.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullOpener;

impl TabOpener for NullOpener {
    fn open(&self, message: TabMessage) {
        debug!(message = ?message, "Dropping tab message (no opener configured)");
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_envelope_shape() {
        let message = TabMessage::foreground("https://example.com/");
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "tabsCreate",
                "options": {"url": "https://example.com/", "active": true}
            })
        );
    }

    #[test]
    fn test_background_is_inactive() {
        let message = TabMessage::background("https://example.com/");
        assert_eq!(
            message,
            TabMessage::Create {
                url: "https://example.com/".to_string(),
                active: false,
            }
        );
    }
}
