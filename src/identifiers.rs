//! Type-safe identifiers for document entities.
//!
//! Newtype wrappers prevent mixing incompatible IDs at compile time.
//!
//! # Example
//!
//! ```
//! use results_navigator::ElementId;
//!
//! let id = ElementId::new("result-anchor-3");
//! assert_eq!(id.as_str(), "result-anchor-3");
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// ElementId
// ============================================================================

/// Identifier of a DOM element within the embedding document.
///
/// IDs are assigned by the document backend when it resolves selector
/// queries; this crate never generates them. An ID stays meaningful only for
/// the lifetime of one page load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    /// Creates a new element ID.
    #[inline]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the ID as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ElementId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

// ============================================================================
// Tests
// ============================================================================
