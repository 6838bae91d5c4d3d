//! Time-filter and sort rewriting of the query URL.
//!
//! The search page encodes its time filter in a `tbs=qdr:X` query parameter,
//! optionally followed by `,sbd:Y` for sort-by-date. Changing the filter
//! means stripping the current pair from the URL and appending the new one;
//! toggling the sort re-appends the current period with the sort flag
//! flipped. Sorting without a period is not supported by the page, so the
//! toggle is a no-op when no filter is active.

// ============================================================================
// Imports
// ============================================================================

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::dom::Document;

// ============================================================================
// Constants
// ============================================================================

/// Matches the `&tbs=qdr:X[,sbd:Y]` pair in a query URL.
static TBS_PAIR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(tbs=qdr:.)(,sbd:.)?").expect("TBS_PAIR: hardcoded regex is valid")
});

// ============================================================================
// TimeFilter
// ============================================================================

/// Result age filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeFilter {
    /// Any time (removes the filter).
    All,
    /// Past hour.
    Hour,
    /// Past day.
    Day,
    /// Past week.
    Week,
    /// Past month.
    Month,
    /// Past year.
    Year,
}

impl TimeFilter {
    /// Returns the page's single-character period code.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::All => 'a',
            Self::Hour => 'h',
            Self::Day => 'd',
            Self::Week => 'w',
            Self::Month => 'm',
            Self::Year => 'y',
        }
    }
}

// ============================================================================
// URL Rewriting
// ============================================================================

/// Applies a time filter, or toggles sort-by-date when `filter` is `None`.
///
/// Navigates the page to the rewritten URL. Toggling without an active
/// period does nothing.
pub fn apply_time_filter(document: &Document, filter: Option<TimeFilter>) {
    let href = document.location();
    let target = rewrite(&href, filter);
    if let Some(target) = target {
        debug!(filter = ?filter, url = %target, "Changing time filter");
        document.set_location(&target);
    }
}

/// Computes the rewritten URL; `None` means no navigation.
fn rewrite(href: &str, filter: Option<TimeFilter>) -> Option<String> {
    let captures = TBS_PAIR.captures(href);
    let current_period = captures
        .as_ref()
        .and_then(|c| c.get(1))
        .map_or("", |m| m.as_str());
    let current_sort = captures
        .as_ref()
        .and_then(|c| c.get(2))
        .map_or("", |m| m.as_str());
    let stripped = TBS_PAIR.replace(href, "");

    match filter {
        Some(TimeFilter::All) => Some(stripped.into_owned()),
        Some(period) => Some(format!(
            "{stripped}&tbs=qdr:{}{current_sort}",
            period.code()
        )),
        None if !current_period.is_empty() => {
            // sort can only be applied on top of a period filter
            let sort_suffix = if current_sort.is_empty() { ",sbd:1" } else { "" };
            Some(format!("{stripped}&{current_period}{sort_suffix}"))
        }
        None => None,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://www.google.com/search?q=rust";

    #[test]
    fn test_apply_period_to_unfiltered_url() {
        let target = rewrite(BASE, Some(TimeFilter::Hour));
        assert_eq!(
            target.as_deref(),
            Some("https://www.google.com/search?q=rust&tbs=qdr:h")
        );
    }

    #[test]
    fn test_switch_period_preserves_sort() {
        let href = format!("{BASE}&tbs=qdr:d,sbd:1");
        let target = rewrite(&href, Some(TimeFilter::Week));
        assert_eq!(
            target.as_deref(),
            Some("https://www.google.com/search?q=rust&tbs=qdr:w,sbd:1")
        );
    }

    #[test]
    fn test_all_strips_filter_and_sort() {
        let href = format!("{BASE}&tbs=qdr:m,sbd:1");
        assert_eq!(rewrite(&href, Some(TimeFilter::All)).as_deref(), Some(BASE));
    }

    #[test]
    fn test_toggle_sort_on() {
        let href = format!("{BASE}&tbs=qdr:d");
        let target = rewrite(&href, None);
        assert_eq!(
            target.as_deref(),
            Some("https://www.google.com/search?q=rust&tbs=qdr:d,sbd:1")
        );
    }

    #[test]
    fn test_toggle_sort_off() {
        let href = format!("{BASE}&tbs=qdr:d,sbd:1");
        let target = rewrite(&href, None);
        assert_eq!(
            target.as_deref(),
            Some("https://www.google.com/search?q=rust&tbs=qdr:d")
        );
    }

    #[test]
    fn test_toggle_without_period_is_noop() {
        assert_eq!(rewrite(BASE, None), None);
    }

    #[test]
    fn test_apply_navigates_the_page() {
        use std::sync::Arc;

        use crate::dom::memory::{DomAction, MemoryDom};

        let dom = MemoryDom::new();
        dom.set_page_url(BASE);
        let document = Document::new(Arc::new(dom.clone()));

        apply_time_filter(&document, Some(TimeFilter::Year));
        assert_eq!(
            dom.take_actions(),
            vec![DomAction::LocationChanged {
                url: format!("{BASE}&tbs=qdr:y"),
            }]
        );

        apply_time_filter(&document, None);
        assert_eq!(
            dom.take_actions(),
            vec![DomAction::LocationChanged {
                url: format!("{BASE}&tbs=qdr:y,sbd:1"),
            }]
        );
    }
}
