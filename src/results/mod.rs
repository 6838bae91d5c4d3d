//! The result-navigation core.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`SearchResult`] | One navigable entry: anchor + container resolver |
//! | [`ResultGroup`] | Raw per-region node list fed into construction |
//! | [`SearchResults`] | Document-ordered sequence with the focus controller |
//! | [`ScrollCompensation`] | Injected bottom-edge scroll compensation |

// ============================================================================
// Submodules
// ============================================================================

mod collection;
mod entry;
mod scroll;

// ============================================================================
// Re-exports
// ============================================================================

pub use collection::{HIGHLIGHT_CLASS, ResultGroup, SearchResults};
pub use entry::{ContainerResolver, SearchResult};
pub use scroll::ScrollCompensation;
