//! Navigation session: wires the core to its collaborators.
//!
//! One session lives for one page load. Construction gathers the result
//! groups, builds the collection, applies the resume/auto-select precedence,
//! and registers every key-bound action. The embedder then feeds key events
//! to [`NavigationSession::handle_key`] and suppresses default handling when
//! it returns `true`.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use results_navigator::dom::{Document, memory::MemoryDom};
//! use results_navigator::input::KeyEvent;
//! use results_navigator::session::NavigationSession;
//! use results_navigator::storage::MemoryStore;
//! use results_navigator::tabs::NullOpener;
//! use results_navigator::NavigatorOptions;
//!
//! let dom = MemoryDom::new();
//! dom.set_page_url("https://www.google.com/search?q=rust");
//! let document = Document::new(Arc::new(dom));
//!
//! let mut session = NavigationSession::initialize(
//!     document,
//!     NavigatorOptions::new(),
//!     Arc::new(MemoryStore::new()),
//!     Arc::new(NullOpener),
//! )
//! .unwrap();
//!
//! // first press lands on the first result (if any)
//! session.handle_key(&KeyEvent::new("j"));
//! ```

// ============================================================================
// Submodules
// ============================================================================

mod groups;
/// Page selectors.
pub mod selectors;
mod tools;

pub use groups::search_result_groups;
pub use tools::{TimeFilter, apply_time_filter};

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, LazyLock};

use parking_lot::Mutex;
use regex::Regex;
use tracing::{debug, warn};
use url::Url;

use crate::dom::Document;
use crate::error::{Error, Result};
use crate::input::{KeyEvent, KeyRouter};
use crate::options::NavigatorOptions;
use crate::results::{ScrollCompensation, SearchResults};
use crate::storage::{NavigationState, StateStore};
use crate::tabs::{TabMessage, TabOpener};

// ============================================================================
// Constants
// ============================================================================

/// Hosts the session supports.
static SUPPORTED_HOST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(www|encrypted)\.google\.").expect("SUPPORTED_HOST: hardcoded regex is valid")
});

/// Image-search query marker; results navigation does not work there.
static IMAGE_SEARCH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(^|&)tbm=isch(&|$)").expect("IMAGE_SEARCH: hardcoded regex is valid")
});

// ============================================================================
// NavigationSession
// ============================================================================

/// One page load's worth of keyboard navigation.
pub struct NavigationSession {
    /// Registered key bindings.
    router: KeyRouter,
    /// The result collection, shared with the registered actions.
    results: Arc<Mutex<SearchResults>>,
    /// The page document.
    document: Document,
}

impl fmt::Debug for NavigationSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationSession")
            .field("router", &self.router)
            .field("results", &self.results.lock().len())
            .field("document", &self.document)
            .finish_non_exhaustive()
    }
}

impl NavigationSession {
    /// Builds a session for the current page.
    ///
    /// Reads the persisted state, gathers the result groups, and registers
    /// all key bindings. On an image-search page only the common page
    /// navigation is registered.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedPage`] when the page host is not a
    /// supported search host, [`Error::Url`] when the location does not
    /// parse, and [`Error::Binding`] when a configured binding does not.
    pub fn initialize(
        document: Document,
        options: NavigatorOptions,
        store: Arc<dyn StateStore>,
        opener: Arc<dyn TabOpener>,
    ) -> Result<Self> {
        let location = document.location();
        let url = Url::parse(&location)?;
        let host = url.host_str().unwrap_or_default();
        if !SUPPORTED_HOST.is_match(host) {
            return Err(Error::unsupported_page(location));
        }

        let mut router = KeyRouter::new();
        let is_image_search = url.query().is_some_and(|query| IMAGE_SEARCH.is_match(query));
        let results = if is_image_search {
            debug!(url = %location, "Image search, skipping results navigation");
            Arc::new(Mutex::new(SearchResults::from_groups(
                Vec::new(),
                ScrollCompensation::none(),
            )))
        } else {
            Self::init_results_navigation(&document, &options, &store, &opener, &mut router)?
        };
        Self::init_common_navigation(&document, &options, &mut router)?;

        Ok(Self {
            router,
            results,
            document,
        })
    }

    /// Handles one key press.
    ///
    /// Returns `true` when the event matched a binding; the embedder must
    /// then suppress the event's default handling.
    pub fn handle_key(&mut self, event: &KeyEvent) -> bool {
        self.router.dispatch(event)
    }

    /// Returns the number of navigable results.
    #[must_use]
    pub fn result_count(&self) -> usize {
        self.results.lock().len()
    }

    /// Returns the focused result index, if any.
    #[must_use]
    pub fn focused_index(&self) -> Option<usize> {
        self.results.lock().focused_index()
    }

    /// Returns the page document.
    #[inline]
    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }
}

// ============================================================================
// NavigationSession - Results Navigation
// ============================================================================

impl NavigationSession {
    /// Builds the collection and registers the result-navigation bindings.
    fn init_results_navigation(
        document: &Document,
        options: &NavigatorOptions,
        store: &Arc<dyn StateStore>,
        opener: &Arc<dyn TabOpener>,
        router: &mut KeyRouter,
    ) -> Result<Arc<Mutex<SearchResults>>> {
        let state = store.load().unwrap_or_else(|err| {
            warn!(error = %err, "Failed to load navigation state");
            NavigationState::default()
        });
        let compensation = ScrollCompensation::from_user_agent(&document.user_agent());
        let mut collection =
            SearchResults::from_groups(search_result_groups(document), compensation);

        // Resume/auto-select precedence: a continuation of a prior navigation
        // wins over auto-select, and either disables the first-press special
        // case below.
        let location = document.location();
        let mut first_press = true;
        if state.continues(&location) {
            debug!(index = state.last_focused_index, "Resuming prior navigation");
            collection.focus(state.last_focused_index);
            first_press = false;
        } else if options.auto_select_first {
            collection.focus(0);
            first_press = false;
        }

        let results = Arc::new(Mutex::new(collection));
        let first_press = Arc::new(AtomicBool::new(first_press));
        let wrap = options.wrap_navigation;

        // next / previous, with the first press landing on entry 0
        {
            let results = Arc::clone(&results);
            let first_press = Arc::clone(&first_press);
            router.bind(&options.next_key, move || {
                if first_press.swap(false, Ordering::SeqCst) {
                    results.lock().focus(0);
                } else {
                    results.lock().focus_next(wrap);
                }
            })?;
        }
        {
            let results = Arc::clone(&results);
            let first_press = Arc::clone(&first_press);
            router.bind(&options.previous_key, move || {
                if first_press.swap(false, Ordering::SeqCst) {
                    results.lock().focus(0);
                } else {
                    results.lock().focus_previous(wrap);
                }
            })?;
        }

        // navigate: persist the continuation state, then follow the link.
        // Before the first next/previous press the first entry is the
        // implicit target, so these actions work without a visible focus.
        {
            let results = Arc::clone(&results);
            let store = Arc::clone(store);
            let document = document.clone();
            router.bind(&options.navigate_key, move || {
                let results = results.lock();
                let Some(entry) = results.focused().or_else(|| results.get(0)) else {
                    return;
                };
                let state = NavigationState::new(
                    document.location(),
                    results.focused_index().unwrap_or(0),
                );
                if let Err(err) = store.save(&state) {
                    // best-effort, the navigation itself still happens
                    warn!(error = %err, "Failed to persist navigation state");
                }
                entry.anchor().activate();
            })?;
        }

        // open in new tab, foreground and background
        {
            let results = Arc::clone(&results);
            let opener = Arc::clone(opener);
            router.bind(&options.navigate_new_tab_key, move || {
                let results = results.lock();
                if let Some(entry) = results.focused().or_else(|| results.get(0))
                    && let Some(href) = entry.anchor().href()
                {
                    opener.open(TabMessage::foreground(href));
                }
            })?;
        }
        {
            let results = Arc::clone(&results);
            let opener = Arc::clone(opener);
            router.bind(&options.navigate_new_tab_background_key, move || {
                let results = results.lock();
                if let Some(entry) = results.focused().or_else(|| results.get(0))
                    && let Some(href) = entry.anchor().href()
                {
                    opener.open(TabMessage::background(href));
                }
            })?;
        }

        // time filters and sort toggle
        let filters = [
            (&options.navigate_show_all, Some(TimeFilter::All)),
            (&options.navigate_show_hour, Some(TimeFilter::Hour)),
            (&options.navigate_show_day, Some(TimeFilter::Day)),
            (&options.navigate_show_week, Some(TimeFilter::Week)),
            (&options.navigate_show_month, Some(TimeFilter::Month)),
            (&options.navigate_show_year, Some(TimeFilter::Year)),
            (&options.toggle_sort, None),
        ];
        for (spec, filter) in filters {
            let document = document.clone();
            router.bind(spec, move || apply_time_filter(&document, filter))?;
        }

        Ok(results)
    }
}

// ============================================================================
// NavigationSession - Common Page Navigation
// ============================================================================

impl NavigationSession {
    /// Registers the bindings that work on every supported page.
    fn init_common_navigation(
        document: &Document,
        options: &NavigatorOptions,
        router: &mut KeyRouter,
    ) -> Result<()> {
        {
            let document = document.clone();
            router.bind(&options.focus_search_input, move || {
                if let Some(input) = document.query(selectors::SEARCH_INPUT) {
                    input.focus();
                    input.select();
                }
            })?;
        }

        let tabs = [
            (&options.navigate_search_tab, selectors::SEARCH_TAB),
            (&options.navigate_images_tab, selectors::IMAGES_TAB),
            (&options.navigate_videos_tab, selectors::VIDEOS_TAB),
            (&options.navigate_maps_tab, selectors::MAPS_TAB),
            (&options.navigate_news_tab, selectors::NEWS_TAB),
            (&options.navigate_shopping_tab, selectors::SHOPPING_TAB),
            (&options.navigate_books_tab, selectors::BOOKS_TAB),
            (&options.navigate_flights_tab, selectors::FLIGHTS_TAB),
            (&options.navigate_financial_tab, selectors::FINANCE_TAB),
            (
                &options.navigate_previous_result_page,
                selectors::PREVIOUS_PAGE,
            ),
            (&options.navigate_next_result_page, selectors::NEXT_PAGE),
        ];
        for (spec, selector) in tabs {
            let document = document.clone();
            router.bind(spec, move || {
                if let Some(link) = document.query(selector)
                    && let Some(href) = link.href()
                {
                    document.set_location(&href);
                }
            })?;
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
