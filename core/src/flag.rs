//! Flag declarations.
//!
//! A [`Flag`] describes one named command-line option: a long key matched
//! with two dashes, an optional one-character short alias matched with one
//! dash, an optional description for help rendering, and an optional
//! positional fallback index. The type is serde-serializable so hosts can
//! persist or embed flag sets.

use serde::{Deserialize, Serialize};

/// Declaration of a single command-line flag.
///
/// Built with [`Flag::new`] and the chained setters. Declaring a flag does
/// not validate anything; empty keys and duplicate short keys are stored
/// as-is (matching is purely textual at resolution time).
///
/// # Examples
///
/// ```
/// use dashdash::Flag;
///
/// let input = Flag::new("input")
///     .with_short("i")
///     .with_description("path to read from")
///     .at_index(0);
///
/// assert_eq!(input.key, "input");
/// assert_eq!(input.short_key.as_deref(), Some("i"));
/// assert_eq!(input.index, Some(0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flag {
    /// Long key, matched as `--key` (and `-key` when one character long).
    pub key: String,
    /// One-character alias, matched as `-k` and inside combined groups.
    pub short_key: Option<String>,
    /// Description shown in the help listing.
    pub description: Option<String>,
    /// Fallback position among unflagged arguments.
    pub index: Option<usize>,
}

impl Flag {
    /// Creates a flag with only a long key.
    ///
    /// # Examples
    ///
    /// ```
    /// use dashdash::Flag;
    ///
    /// let verbose = Flag::new("verbose");
    /// assert!(verbose.short_key.is_none());
    /// assert!(verbose.description.is_none());
    /// ```
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            short_key: None,
            description: None,
            index: None,
        }
    }

    /// Adds a short alias.
    pub fn with_short(mut self, short_key: impl Into<String>) -> Self {
        self.short_key = Some(short_key.into());
        self
    }

    /// Adds a help description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Adds a positional fallback index.
    ///
    /// When neither the long nor the short form appears in the arguments,
    /// the value is taken from the unflagged argument at this position.
    pub fn at_index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }

    /// The token that matches this flag's long form (`--key`).
    pub fn long_token(&self) -> String {
        format!("--{}", self.key)
    }

    /// The token that matches this flag's short form (`-k`), if any.
    pub fn short_token(&self) -> Option<String> {
        self.short_key.as_ref().map(|s| format!("-{s}"))
    }
}
