//! Key combinations and key events.
//!
//! Bindings are configured as strings like `"j"`, `"ctrl+return"` or
//! `"down, j"` (alternatives separated by commas). The embedder translates
//! its native keyboard events into [`KeyEvent`] values and feeds them to the
//! router.
//!
//! # Example
//!
//! ```
//! use results_navigator::input::KeyCombination;
//!
//! let combos = KeyCombination::parse_list("down, j").unwrap();
//! assert_eq!(combos.len(), 2);
//! assert_eq!(combos[1].to_string(), "j");
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::fmt;

use crate::error::{Error, Result};

// ============================================================================
// KeyCombination
// ============================================================================

/// A single key with modifier flags.
///
/// Key names are compared case-insensitively; `"Down"` and `"down"` denote
/// the same combination.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyCombination {
    /// Ctrl modifier.
    pub ctrl: bool,
    /// Alt modifier.
    pub alt: bool,
    /// Shift modifier.
    pub shift: bool,
    /// Meta (command) modifier.
    pub meta: bool,
    /// Lowercased key name (e.g. `"j"`, `"return"`, `"down"`).
    pub key: String,
}

impl KeyCombination {
    /// Parses a combination like `"ctrl+shift+k"`.
    ///
    /// The last `+`-separated token is the key; every preceding token must be
    /// a modifier (`ctrl`/`control`, `alt`/`option`, `shift`,
    /// `meta`/`cmd`/`command`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Binding`] for an empty key or unknown modifier.
    pub fn parse(spec: &str) -> Result<Self> {
        let mut combination = Self {
            ctrl: false,
            alt: false,
            shift: false,
            meta: false,
            key: String::new(),
        };

        let tokens: Vec<&str> = spec.split('+').map(str::trim).collect();
        let (key, modifiers) = match tokens.split_last() {
            Some(split) => split,
            None => return Err(Error::binding(spec, "empty combination")),
        };

        for modifier in modifiers {
            match modifier.to_lowercase().as_str() {
                "ctrl" | "control" => combination.ctrl = true,
                "alt" | "option" => combination.alt = true,
                "shift" => combination.shift = true,
                "meta" | "cmd" | "command" => combination.meta = true,
                other => {
                    return Err(Error::binding(spec, format!("unknown modifier '{other}'")));
                }
            }
        }

        if key.is_empty() {
            return Err(Error::binding(spec, "missing key after modifier"));
        }
        combination.key = key.to_lowercase();
        Ok(combination)
    }

    /// Parses a comma-separated list of alternative combinations.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Binding`] when the list is empty or any alternative
    /// fails to parse.
    pub fn parse_list(spec: &str) -> Result<Vec<Self>> {
        let combinations = spec
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(Self::parse)
            .collect::<Result<Vec<_>>>()?;

        if combinations.is_empty() {
            return Err(Error::binding(spec, "no key combinations"));
        }
        Ok(combinations)
    }
}

impl fmt::Display for KeyCombination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ctrl {
            f.write_str("ctrl+")?;
        }
        if self.alt {
            f.write_str("alt+")?;
        }
        if self.shift {
            f.write_str("shift+")?;
        }
        if self.meta {
            f.write_str("meta+")?;
        }
        f.write_str(&self.key)
    }
}

// ============================================================================
// KeyEvent
// ============================================================================

/// One key press as reported by the embedder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    /// Key name.
    pub key: String,
    /// Ctrl modifier state.
    pub ctrl: bool,
    /// Alt modifier state.
    pub alt: bool,
    /// Shift modifier state.
    pub shift: bool,
    /// Meta modifier state.
    pub meta: bool,
}

impl KeyEvent {
    /// Creates a plain key press without modifiers.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ctrl: false,
            alt: false,
            shift: false,
            meta: false,
        }
    }

    /// Adds the Ctrl modifier.
    #[inline]
    #[must_use]
    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    /// Adds the Alt modifier.
    #[inline]
    #[must_use]
    pub fn with_alt(mut self) -> Self {
        self.alt = true;
        self
    }

    /// Adds the Shift modifier.
    #[inline]
    #[must_use]
    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    /// Adds the Meta modifier.
    #[inline]
    #[must_use]
    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    /// Returns the combination this event matches.
    #[must_use]
    pub(crate) fn combination(&self) -> KeyCombination {
        KeyCombination {
            ctrl: self.ctrl,
            alt: self.alt,
            shift: self.shift,
            meta: self.meta,
            key: self.key.to_lowercase(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
