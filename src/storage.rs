//! Persisted navigation state.
//!
//! Two scalar fields survive a page navigation: the URL of the query page
//! the user navigated away from and the index of the result they followed.
//! When a page load finds its own URL in the stored state, the session is a
//! continuation and focus resumes at the stored index.
//!
//! Writes are fire-and-forget and best-effort; concurrent tabs writing the
//! same key race, and the last writer wins.

// ============================================================================
// Imports
// ============================================================================

use std::path::PathBuf;
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;

// ============================================================================
// NavigationState
// ============================================================================

/// The persisted navigation state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NavigationState {
    /// URL of the query page the user last navigated from.
    pub last_query_url: String,
    /// Index of the result the user last followed.
    pub last_focused_index: usize,
}

impl NavigationState {
    /// Creates a state record.
    #[inline]
    #[must_use]
    pub fn new(last_query_url: impl Into<String>, last_focused_index: usize) -> Self {
        Self {
            last_query_url: last_query_url.into(),
            last_focused_index,
        }
    }

    /// Returns `true` if this state continues a session on the given URL.
    #[inline]
    #[must_use]
    pub fn continues(&self, url: &str) -> bool {
        !self.last_query_url.is_empty() && self.last_query_url == url
    }
}

// ============================================================================
// StateStore
// ============================================================================

/// Persistence collaborator.
///
/// Read once at session construction, written on the explicit navigate
/// action. No transactional guarantees.
pub trait StateStore: Send + Sync {
    /// Loads the stored state.
    fn load(&self) -> Result<NavigationState>;

    /// Stores the state, replacing whatever was there.
    fn save(&self, state: &NavigationState) -> Result<()>;
}

// ============================================================================
// MemoryStore
// ============================================================================

/// In-memory state store.
///
/// Cloning yields another handle to the same slot.
#[derive(Clone, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<NavigationState>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with a state.
    #[must_use]
    pub fn with_state(state: NavigationState) -> Self {
        Self {
            state: Arc::new(Mutex::new(state)),
        }
    }
}

impl StateStore for MemoryStore {
    fn load(&self) -> Result<NavigationState> {
        Ok(self.state.lock().clone())
    }

    fn save(&self, state: &NavigationState) -> Result<()> {
        *self.state.lock() = state.clone();
        Ok(())
    }
}

// ============================================================================
// JsonFileStore
// ============================================================================

/// State store backed by a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store at the given path.
    #[inline]
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl StateStore for JsonFileStore {
    /// Loads the stored state; a missing file yields the default state.
    fn load(&self) -> Result<NavigationState> {
        if !self.path.exists() {
            return Ok(NavigationState::default());
        }
        let json = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&json)?)
    }

    fn save(&self, state: &NavigationState) -> Result<()> {
        debug!(path = %self.path.display(), url = %state.last_query_url, "Saving navigation state");
        let json = serde_json::to_string_pretty(state)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
