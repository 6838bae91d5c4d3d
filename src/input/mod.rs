//! Key bindings: combinations, events, and the dispatch router.

// ============================================================================
// Submodules
// ============================================================================

mod keys;
mod router;

// ============================================================================
// Re-exports
// ============================================================================

pub use keys::{KeyCombination, KeyEvent};
pub use router::{Action, KeyRouter};
