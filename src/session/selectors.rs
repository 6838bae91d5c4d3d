//! Selectors for the supported search page.
//!
//! These are opaque strings to this crate; the document backend interprets
//! them. They match the page's markup at the time of writing and are the
//! part of the system most likely to rot.

// ============================================================================
// Result Groups
// ============================================================================

/// Organic result links.
pub const ORGANIC_RESULTS: &str = "#search .r > a:first-of-type";

/// Promoted-block links.
pub const PROMOTED_BLOCKS: &str = "div.zjbNbe > a";

/// Shopping result links.
pub const SHOPPING_RESULTS: &str = "div.eIuuYe a";

/// Previous/next pagination links, as one group.
pub const PAGINATION_LINKS: &str = "#pnprev, #pnnext";

// ============================================================================
// Common Navigation
// ============================================================================

/// The search input field.
pub const SEARCH_INPUT: &str = "#searchform input[name=q]";

/// All-results tab link.
pub const SEARCH_TAB: &str = r#"a.q.qs:not([href*="&tbm="]):not([href*="maps.google."])"#;

/// Images tab link.
pub const IMAGES_TAB: &str = r#"a.q.qs[href*="&tbm=isch"]"#;

/// Videos tab link.
pub const VIDEOS_TAB: &str = r#"a.q.qs[href*="&tbm=vid"]"#;

/// Maps tab link.
pub const MAPS_TAB: &str = r#"a.q.qs[href*="maps.google."]"#;

/// News tab link.
pub const NEWS_TAB: &str = r#"a.q.qs[href*="&tbm=nws"]"#;

/// Shopping tab link.
pub const SHOPPING_TAB: &str = r#"a.q.qs[href*="&tbm=shop"]"#;

/// Books tab link.
pub const BOOKS_TAB: &str = r#"a.q.qs[href*="&tbm=bks"]"#;

/// Flights tab link.
pub const FLIGHTS_TAB: &str = r#"a.q.qs[href*="&tbm=flm"]"#;

/// Finance tab link.
pub const FINANCE_TAB: &str = r#"a.q.qs[href*="&tbm=fin"]"#;

/// Previous result page link.
pub const PREVIOUS_PAGE: &str = "#pnprev";

/// Next result page link.
pub const NEXT_PAGE: &str = "#pnnext";
