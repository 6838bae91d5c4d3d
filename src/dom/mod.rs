//! Document boundary: backend trait, handles, and the in-memory model.
//!
//! This crate never touches a real DOM directly. The embedder supplies a
//! [`DomBackend`]; [`Document`] and [`Element`] are thin cloneable handles
//! over it in the spirit of remote element references.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`DomBackend`] | Embedder-implemented page boundary |
//! | [`Document`] | Cloneable handle, selector queries, page state |
//! | [`Element`] | Handle to one DOM element |
//! | [`memory::MemoryDom`] | Deterministic in-memory backend for tests |

// ============================================================================
// Submodules
// ============================================================================

mod backend;
mod document;
mod element;

/// In-memory document backend.
pub mod memory;

// ============================================================================
// Re-exports
// ============================================================================

pub use backend::{DocumentPosition, DomBackend, Rect, ScrollAlignment};
pub use document::Document;
pub use element::Element;
