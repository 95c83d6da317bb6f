//! Configuration options for papr parsing.
//!
//! ## Examples
//!
//! ```rust
//! use papr::{parse_with_options, PaprOptions};
//!
//! // Lenient (default): an unclosed quote runs to the end of the input
//! let root = parse_with_options("title: \"Pilot", PaprOptions::new()).unwrap();
//! assert_eq!(root["title"].value(), Some("Pilot"));
//!
//! // Strict: an unclosed quote is an error
//! assert!(parse_with_options("title: \"Pilot", PaprOptions::strict()).is_err());
//!
//! // Nesting past the limit is an error instead of a stack overflow
//! let deep = "a: ".repeat(10);
//! assert!(parse_with_options(&deep, PaprOptions::new().with_max_depth(8)).is_err());
//! ```

/// Default for [`PaprOptions::max_depth`].
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Configuration options for papr parsing.
///
/// # Examples
///
/// ```rust
/// use papr::PaprOptions;
///
/// let options = PaprOptions::new().with_strict_quotes(true);
/// assert!(options.strict_quotes);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaprOptions {
    /// Reject quoted tokens that are still open at end of input instead of
    /// taking the rest of the input as their content.
    pub strict_quotes: bool,
    /// Deepest raw tree level a token may attach at. Each `key: ` on a line
    /// opens two levels, one for the key and one for its colon.
    pub max_depth: usize,
}

impl Default for PaprOptions {
    fn default() -> Self {
        PaprOptions {
            strict_quotes: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl PaprOptions {
    /// Creates default options (lenient quote handling, a nesting limit of
    /// [`DEFAULT_MAX_DEPTH`]).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use papr::PaprOptions;
    ///
    /// let options = PaprOptions::new();
    /// assert!(!options.strict_quotes);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options that reject every recoverable irregularity.
    #[must_use]
    pub fn strict() -> Self {
        PaprOptions {
            strict_quotes: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_strict_quotes(mut self, strict: bool) -> Self {
        self.strict_quotes = strict;
        self
    }

    /// Sets the nesting limit.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use papr::PaprOptions;
    ///
    /// let options = PaprOptions::new().with_max_depth(64);
    /// assert_eq!(options.max_depth, 64);
    /// ```
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
