//! Error types for the results navigator.
//!
//! The navigation core itself never fails: out-of-range focus requests
//! degrade to "nothing focused", missing page elements simply contribute
//! nothing, and the scroll compensation heuristic falls back to zero. Errors
//! exist for the ambient surfaces around the core: configuration parsing,
//! key-binding parsing, state persistence, and session initialization on an
//! unsupported page.
//!
//! # Usage
//!
//! All fallible operations return [`Result<T>`] which uses [`Error`]:
//!
//! ```ignore
//! use results_navigator::{NavigatorOptions, Result};
//!
//! fn load(json: &str) -> Result<NavigatorOptions> {
//!     let options = NavigatorOptions::from_json(json)?;
//!     options.validate()?;
//!     Ok(options)
//! }
//! ```
//!
//! # Error Categories
//!
//! | Category | Variants |
//! |----------|----------|
//! | Configuration | [`Error::Config`], [`Error::Binding`] |
//! | Session | [`Error::UnsupportedPage`] |
//! | Persistence | [`Error::Storage`] |
//! | External | [`Error::Url`], [`Error::Json`], [`Error::Io`] |

// ============================================================================
// Imports
// ============================================================================

use std::io::Error as IoError;
use std::result::Result as StdResult;

use thiserror::Error;

// ============================================================================
// Result Alias
// ============================================================================

/// Result type alias using crate [`enum@Error`].
///
/// All fallible operations in this crate return this type.
pub type Result<T> = StdResult<T, Error>;

// ============================================================================
// Error Enum
// ============================================================================

/// Main error type for the crate.
///
/// Each variant includes relevant context for debugging.
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Configuration error.
    ///
    /// Returned when navigator options are invalid.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// Key binding parse error.
    ///
    /// Returned when a key combination string cannot be parsed.
    #[error("Invalid key binding '{combination}': {message}")]
    Binding {
        /// The offending combination string.
        combination: String,
        /// Description of what is wrong with it.
        message: String,
    },

    // ========================================================================
    // Session Errors
    // ========================================================================
    /// Page is not a supported search page.
    ///
    /// Returned when the session hostname gate rejects the current location.
    #[error("Unsupported page: {url}")]
    UnsupportedPage {
        /// The rejected page URL.
        url: String,
    },

    // ========================================================================
    // Persistence Errors
    // ========================================================================
    /// State store error.
    ///
    /// Returned when persisted navigation state cannot be read or written.
    #[error("Storage error: {message}")]
    Storage {
        /// Description of the storage failure.
        message: String,
    },

    // ========================================================================
    // External Errors
    // ========================================================================
    /// URL parse error.
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] IoError),
}

// ============================================================================
// Error Constructors
// ============================================================================

impl Error {
    /// Creates a configuration error.
    #[inline]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Creates a key binding error.
    #[inline]
    pub fn binding(combination: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Binding {
            combination: combination.into(),
            message: message.into(),
        }
    }

    /// Creates an unsupported page error.
    #[inline]
    pub fn unsupported_page(url: impl Into<String>) -> Self {
        Self::UnsupportedPage { url: url.into() }
    }

    /// Creates a storage error.
    #[inline]
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}

// ============================================================================
// Error Predicates
// ============================================================================

impl Error {
    /// Returns `true` if this is a configuration or binding error.
    #[inline]
    #[must_use]
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::Config { .. } | Self::Binding { .. })
    }

    /// Returns `true` if the session refused the current page.
    #[inline]
    #[must_use]
    pub fn is_unsupported_page(&self) -> bool {
        matches!(self, Self::UnsupportedPage { .. })
    }

    /// Returns `true` if this is a persistence error.
    ///
    /// Callers typically log these and continue.
    #[inline]
    #[must_use]
    pub fn is_storage_error(&self) -> bool {
        matches!(self, Self::Storage { .. } | Self::Io(_))
    }
}

// ============================================================================
// Tests
// ============================================================================
