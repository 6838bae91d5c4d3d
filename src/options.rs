//! Navigator configuration.
//!
//! Options are read once at session construction and never mutated by the
//! navigation core. Key bindings are configured as combination strings
//! (alternatives separated by commas, see [`crate::input::KeyCombination`]);
//! the JSON field names use camelCase so stored option objects from the
//! extension storage deserialize directly.
//!
//! # Example
//!
//! ```
//! use results_navigator::NavigatorOptions;
//!
//! let options = NavigatorOptions::new()
//!     .with_auto_select_first()
//!     .with_wrap_navigation()
//!     .with_next_key("down, j");
//!
//! options.validate().unwrap();
//! ```

// ============================================================================
// Imports
// ============================================================================

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::input::KeyCombination;

// ============================================================================
// NavigatorOptions
// ============================================================================

/// Static configuration consumed at session construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NavigatorOptions {
    /// Highlight the first result as soon as the page loads.
    pub auto_select_first: bool,

    /// Cycle to the opposite end when moving past the last or first result.
    pub wrap_navigation: bool,

    // ========================================================================
    // Result Navigation Keys
    // ========================================================================
    /// Focus the next result.
    pub next_key: String,
    /// Focus the previous result.
    pub previous_key: String,
    /// Open the focused result.
    pub navigate_key: String,
    /// Open the focused result in a new foreground tab.
    pub navigate_new_tab_key: String,
    /// Open the focused result in a new background tab.
    pub navigate_new_tab_background_key: String,

    // ========================================================================
    // Page Navigation Keys
    // ========================================================================
    /// Focus and select the search input.
    pub focus_search_input: String,
    /// Switch to the all-results tab.
    pub navigate_search_tab: String,
    /// Switch to the images tab.
    pub navigate_images_tab: String,
    /// Switch to the videos tab.
    pub navigate_videos_tab: String,
    /// Switch to the maps tab.
    pub navigate_maps_tab: String,
    /// Switch to the news tab.
    pub navigate_news_tab: String,
    /// Switch to the shopping tab.
    pub navigate_shopping_tab: String,
    /// Switch to the books tab.
    pub navigate_books_tab: String,
    /// Switch to the flights tab.
    pub navigate_flights_tab: String,
    /// Switch to the finance tab.
    pub navigate_financial_tab: String,
    /// Go to the previous result page.
    pub navigate_previous_result_page: String,
    /// Go to the next result page.
    pub navigate_next_result_page: String,

    // ========================================================================
    // Time Filter Keys
    // ========================================================================
    /// Show results from any time.
    pub navigate_show_all: String,
    /// Show results from the past hour.
    pub navigate_show_hour: String,
    /// Show results from the past day.
    pub navigate_show_day: String,
    /// Show results from the past week.
    pub navigate_show_week: String,
    /// Show results from the past month.
    pub navigate_show_month: String,
    /// Show results from the past year.
    pub navigate_show_year: String,
    /// Toggle sorting filtered results by date.
    pub toggle_sort: String,
}

impl Default for NavigatorOptions {
    fn default() -> Self {
        Self {
            auto_select_first: false,
            wrap_navigation: false,
            next_key: "down, j".to_string(),
            previous_key: "up, k".to_string(),
            navigate_key: "return".to_string(),
            navigate_new_tab_key: "ctrl+return".to_string(),
            navigate_new_tab_background_key: "ctrl+shift+return".to_string(),
            focus_search_input: "escape".to_string(),
            navigate_search_tab: "a".to_string(),
            navigate_images_tab: "i".to_string(),
            navigate_videos_tab: "v".to_string(),
            navigate_maps_tab: "m".to_string(),
            navigate_news_tab: "n".to_string(),
            navigate_shopping_tab: "alt+s".to_string(),
            navigate_books_tab: "b".to_string(),
            navigate_flights_tab: "alt+f".to_string(),
            navigate_financial_tab: "alt+c".to_string(),
            navigate_previous_result_page: "left".to_string(),
            navigate_next_result_page: "right".to_string(),
            navigate_show_all: "z".to_string(),
            navigate_show_hour: "h".to_string(),
            navigate_show_day: "d".to_string(),
            navigate_show_week: "w".to_string(),
            navigate_show_month: "alt+m".to_string(),
            navigate_show_year: "y".to_string(),
            toggle_sort: "s".to_string(),
        }
    }
}

// ============================================================================
// Constructors & Builder Methods
// ============================================================================

impl NavigatorOptions {
    /// Creates options with the stock key bindings.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables highlighting the first result on page load.
    #[inline]
    #[must_use]
    pub fn with_auto_select_first(mut self) -> Self {
        self.auto_select_first = true;
        self
    }

    /// Enables wrap-around navigation.
    #[inline]
    #[must_use]
    pub fn with_wrap_navigation(mut self) -> Self {
        self.wrap_navigation = true;
        self
    }

    /// Sets the next-result binding.
    #[inline]
    #[must_use]
    pub fn with_next_key(mut self, spec: impl Into<String>) -> Self {
        self.next_key = spec.into();
        self
    }

    /// Sets the previous-result binding.
    #[inline]
    #[must_use]
    pub fn with_previous_key(mut self, spec: impl Into<String>) -> Self {
        self.previous_key = spec.into();
        self
    }

    /// Sets the open-result binding.
    #[inline]
    #[must_use]
    pub fn with_navigate_key(mut self, spec: impl Into<String>) -> Self {
        self.navigate_key = spec.into();
        self
    }
}

// ============================================================================
// Validation & JSON
// ============================================================================

impl NavigatorOptions {
    /// All binding specs in registration order.
    pub(crate) fn binding_specs(&self) -> [&str; 24] {
        [
            &self.next_key,
            &self.previous_key,
            &self.navigate_key,
            &self.navigate_new_tab_key,
            &self.navigate_new_tab_background_key,
            &self.focus_search_input,
            &self.navigate_search_tab,
            &self.navigate_images_tab,
            &self.navigate_videos_tab,
            &self.navigate_maps_tab,
            &self.navigate_news_tab,
            &self.navigate_shopping_tab,
            &self.navigate_books_tab,
            &self.navigate_flights_tab,
            &self.navigate_financial_tab,
            &self.navigate_previous_result_page,
            &self.navigate_next_result_page,
            &self.navigate_show_all,
            &self.navigate_show_hour,
            &self.navigate_show_day,
            &self.navigate_show_week,
            &self.navigate_show_month,
            &self.navigate_show_year,
            &self.toggle_sort,
        ]
    }

    /// Validates that every binding spec parses.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Binding`] for the first spec that fails.
    pub fn validate(&self) -> Result<()> {
        for spec in self.binding_specs() {
            KeyCombination::parse_list(spec)?;
        }
        Ok(())
    }

    /// Deserializes options from a JSON object.
    ///
    /// Missing fields fall back to the stock bindings.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Json`] for malformed JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes options to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

// ============================================================================
// Tests
// ============================================================================
