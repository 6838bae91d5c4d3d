//! Results Navigator - Keyboard navigation engine for search result pages.
//!
//! This library implements the core of a keyboard-driven search navigator:
//! it gathers the result links of a page, keeps them in document order, and
//! moves a single highlighted focus through them in response to key presses.
//!
//! # Architecture
//!
//! The engine is deliberately browser-agnostic:
//!
//! - The page is reached only through the [`dom::DomBackend`] trait; the
//!   embedder supplies the real bridge, tests use [`dom::memory::MemoryDom`]
//! - One [`session::NavigationSession`] lives for one page load and owns the
//!   result collection plus every key binding
//! - State that must outlive a page load (the resume position) goes through
//!   the [`storage::StateStore`] trait
//! - New-tab requests leave through the [`tabs::TabOpener`] trait
//!
//! Everything is synchronous: the embedder delivers one key event at a time
//! and suppresses its default handling when the session consumed it.
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use results_navigator::dom::{Document, memory::MemoryDom};
//! use results_navigator::input::KeyEvent;
//! use results_navigator::session::NavigationSession;
//! use results_navigator::storage::MemoryStore;
//! use results_navigator::tabs::NullOpener;
//! use results_navigator::{NavigatorOptions, Result};
//!
//! fn main() -> Result<()> {
//!     let dom = MemoryDom::new();
//!     dom.set_page_url("https://www.google.com/search?q=rust");
//!     let document = Document::new(Arc::new(dom));
//!
//!     let mut session = NavigationSession::initialize(
//!         document,
//!         NavigatorOptions::new().with_wrap_navigation(),
//!         Arc::new(MemoryStore::new()),
//!         Arc::new(NullOpener),
//!     )?;
//!
//!     let handled = session.handle_key(&KeyEvent::new("j"));
//!     assert!(handled);
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`dom`] | Page access: [`dom::Document`], [`dom::Element`], backend trait |
//! | [`error`] | Error types and [`Result`] alias |
//! | [`identifiers`] | Type-safe ID wrappers |
//! | [`input`] | Key combinations, events, and the binding router |
//! | [`options`] | User-configurable options and key bindings |
//! | [`results`] | The ordered, focusable result collection |
//! | [`session`] | Per-page-load wiring of all of the above |
//! | [`storage`] | Cross-page-load navigation state |
//! | [`tabs`] | New-tab request messages |

// ============================================================================
// Modules
// ============================================================================

/// Page access behind the [`dom::DomBackend`] trait.
///
/// [`dom::Document`] and [`dom::Element`] are cheap cloneable handles over a
/// shared backend. [`dom::memory::MemoryDom`] is an in-memory backend for
/// tests and examples.
pub mod dom;

/// Error types and result aliases.
///
/// All fallible operations return [`Result<T>`] which uses [`Error`].
pub mod error;

/// Type-safe identifiers for page entities.
pub mod identifiers;

/// Key combinations, key events, and the binding router.
pub mod input;

/// User-configurable options and key bindings.
pub mod options;

/// The ordered, focusable result collection.
pub mod results;

/// Per-page-load session wiring.
///
/// [`session::NavigationSession::initialize`] is the library entry point.
pub mod session;

/// Navigation state that survives a page load.
pub mod storage;

/// New-tab request messages.
pub mod tabs;

// ============================================================================
// Re-exports
// ============================================================================

// DOM types
pub use dom::{Document, DocumentPosition, DomBackend, Element, Rect, ScrollAlignment};

// Error types
pub use error::{Error, Result};

// Identifier types
pub use identifiers::ElementId;

// Input types
pub use input::{KeyCombination, KeyEvent, KeyRouter};

// Options
pub use options::NavigatorOptions;

// Result collection types
pub use results::{HIGHLIGHT_CLASS, ResultGroup, ScrollCompensation, SearchResult, SearchResults};

// Session types
pub use session::{NavigationSession, TimeFilter};

// Storage types
pub use storage::{JsonFileStore, MemoryStore, NavigationState, StateStore};

// Tab types
pub use tabs::{NullOpener, TabMessage, TabOpener};
