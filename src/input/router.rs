//! Key-binding registry and dispatch.
//!
//! The router maps key combinations to zero-argument actions. The embedder
//! feeds each key event to [`KeyRouter::dispatch`]; a `true` return means the
//! event was handled and its default browser handling must be suppressed.
//! Each registered action runs at most once per matching press.

// ============================================================================
// Imports
// ============================================================================

use std::fmt;

use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::error::Result;

use super::keys::{KeyCombination, KeyEvent};

// ============================================================================
// Types
// ============================================================================

/// A registered zero-argument action.
pub type Action = Box<dyn FnMut() + Send>;

// ============================================================================
// KeyRouter
// ============================================================================

/// Registry mapping key combinations to actions.
///
/// Binding the same combination twice replaces the earlier action.
#[derive(Default)]
pub struct KeyRouter {
    /// Registered actions.
    actions: Vec<Action>,
    /// Combination to action-slot mapping.
    bindings: FxHashMap<KeyCombination, usize>,
}

impl fmt::Debug for KeyRouter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyRouter")
            .field("bindings", &self.bindings.len())
            .field("actions", &self.actions.len())
            .finish()
    }
}

impl KeyRouter {
    /// Creates an empty router.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of bound combinations.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns `true` if nothing is bound.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Registers an action for every given combination.
    pub fn register(
        &mut self,
        combinations: Vec<KeyCombination>,
        action: impl FnMut() + Send + 'static,
    ) {
        let slot = self.actions.len();
        self.actions.push(Box::new(action));
        for combination in combinations {
            debug!(combination = %combination, slot = slot, "Registering key binding");
            self.bindings.insert(combination, slot);
        }
    }

    /// Parses a binding spec and registers an action for it.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Binding`] when the spec does not parse.
    pub fn bind(&mut self, spec: &str, action: impl FnMut() + Send + 'static) -> Result<()> {
        let combinations = KeyCombination::parse_list(spec)?;
        self.register(combinations, action);
        Ok(())
    }

    /// Dispatches a key event.
    ///
    /// Runs the bound action and returns `true` when the event matches a
    /// binding; returns `false` otherwise. The embedder suppresses the
    /// event's default handling exactly when this returns `true`.
    pub fn dispatch(&mut self, event: &KeyEvent) -> bool {
        let combination = event.combination();
        let Some(&slot) = self.bindings.get(&combination) else {
            trace!(combination = %combination, "Unbound key event");
            return false;
        };
        debug!(combination = %combination, slot = slot, "Dispatching key event");
        (self.actions[slot])();
        true
    }
}

// ============================================================================
// Tests
// ============================================================================
