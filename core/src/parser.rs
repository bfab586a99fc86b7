//! The parser facade.
//!
//! [`FlagParser`] owns a [`FlagRegistry`], the help preamble and layout
//! configuration, and an optional stored argument list. Every typed
//! accessor comes in two forms: a short one that reads the stored
//! arguments and registered declarations, and a `_with` variant taking
//! explicit overrides for the short key, positional index, and token
//! sequence.

use std::path::MAIN_SEPARATOR;

use crate::{Flag, FlagRegistry, help, resolve};

/// Declares flags, resolves typed values, and renders help.
///
/// The parser never reads the process argument list on its own; assign
/// `arguments` (e.g. from `std::env::args().collect()`) or pass a token
/// slice to the `_with` accessors. Index 0 of any token sequence is
/// treated as the program name and ignored.
///
/// # Examples
///
/// ```
/// use dashdash::{Flag, FlagParser, tokens_from};
///
/// let mut parser = FlagParser::new()
///     .with_title("greet")
///     .with_description("Prints a greeting.");
/// parser.register(Flag::new("name").with_short("n").with_description("who to greet"));
/// parser.register(Flag::new("loud").with_short("l").with_description("shout it"));
///
/// parser.arguments = tokens_from("-n Scruffy -l");
/// assert_eq!(parser.string("name"), Some("Scruffy"));
/// assert!(parser.is_present("loud"));
/// assert!(parser.help().contains("--name"));
/// ```
#[derive(Debug, Clone)]
pub struct FlagParser {
    /// Title printed above the help listing.
    pub title: Option<String>,
    /// Description printed between the title and the flag table.
    pub description: Option<String>,
    /// Indent, in columns, from the left edge for help rendering.
    pub left_indent: usize,
    /// Maximum help line length, in columns.
    pub line_length: usize,
    /// Stored token sequence used when an accessor is not given one.
    pub arguments: Vec<String>,
    registry: FlagRegistry,
}

impl Default for FlagParser {
    fn default() -> Self {
        Self::new()
    }
}

impl FlagParser {
    /// Creates a parser with the default layout (indent 2, line length 60).
    pub fn new() -> Self {
        Self {
            title: None,
            description: None,
            left_indent: 2,
            line_length: 60,
            arguments: Vec::new(),
            registry: FlagRegistry::new(),
        }
    }

    /// Sets the help title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the help description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Registers a flag declaration.
    ///
    /// Re-registering a key overwrites its declaration but keeps its
    /// position in the help listing. No help flag is registered
    /// implicitly; register your own `help` key if you want one.
    pub fn register(&mut self, flag: Flag) {
        self.registry.register(flag);
    }

    /// Unregisters a single key. No-op if absent.
    pub fn unregister(&mut self, key: &str) {
        self.registry.unregister(key);
    }

    /// Unregisters every flag.
    pub fn unregister_all(&mut self) {
        self.registry.unregister_all();
    }

    /// Read access to the registered declarations.
    pub fn registry(&self) -> &FlagRegistry {
        &self.registry
    }

    /// Resolves a string value for `key` from the stored arguments.
    ///
    /// Registered short keys and positional indices are applied
    /// automatically.
    ///
    /// # Examples
    ///
    /// ```
    /// use dashdash::{Flag, FlagParser, tokens_from};
    ///
    /// let mut parser = FlagParser::new();
    /// parser.register(Flag::new("name").with_short("n"));
    /// parser.arguments = tokens_from("-n Scruffy");
    ///
    /// assert_eq!(parser.string("name"), Some("Scruffy"));
    /// assert_eq!(parser.string("missing"), None);
    /// ```
    pub fn string(&self, key: &str) -> Option<&str> {
        self.string_with(key, None, None, None)
    }

    /// Resolves a string value with explicit overrides.
    ///
    /// `short_key` and `index` default to the registered declaration's
    /// values when `None`; `args` defaults to the stored arguments.
    pub fn string_with<'a>(
        &'a self,
        key: &str,
        short_key: Option<&str>,
        index: Option<usize>,
        args: Option<&'a [String]>,
    ) -> Option<&'a str> {
        let args = args.unwrap_or(&self.arguments);
        resolve::resolve(&self.registry, key, short_key, index, args)
    }

    /// Whether `key` is present as a boolean flag in the stored arguments.
    ///
    /// Combined short groups count: `-rf` satisfies both `r` and `f`.
    /// There is no unset state; an absent flag is simply `false`.
    pub fn is_present(&self, key: &str) -> bool {
        self.is_present_with(key, None, None)
    }

    /// Boolean presence with explicit overrides.
    pub fn is_present_with(
        &self,
        key: &str,
        short_key: Option<&str>,
        args: Option<&[String]>,
    ) -> bool {
        let args = args.unwrap_or(&self.arguments);
        resolve::is_present(&self.registry, key, short_key, args)
    }

    /// Resolves an integer value.
    ///
    /// A value that fails to parse is indistinguishable from an absent
    /// one: both yield `None`.
    pub fn int(&self, key: &str) -> Option<i64> {
        self.int_with(key, None, None, None)
    }

    /// Integer resolution with explicit overrides.
    pub fn int_with(
        &self,
        key: &str,
        short_key: Option<&str>,
        index: Option<usize>,
        args: Option<&[String]>,
    ) -> Option<i64> {
        self.string_with(key, short_key, index, args)?.parse().ok()
    }

    /// Resolves a floating-point value.
    ///
    /// As with [`int`](Self::int), a parse failure yields `None`.
    pub fn float(&self, key: &str) -> Option<f64> {
        self.float_with(key, None, None, None)
    }

    /// Float resolution with explicit overrides.
    pub fn float_with(
        &self,
        key: &str,
        short_key: Option<&str>,
        index: Option<usize>,
        args: Option<&[String]>,
    ) -> Option<f64> {
        self.string_with(key, short_key, index, args)?.parse().ok()
    }

    /// Resolves a directory path, guaranteeing a trailing separator.
    ///
    /// # Examples
    ///
    /// ```
    /// use dashdash::{FlagParser, tokens_from};
    ///
    /// let mut parser = FlagParser::new();
    /// parser.arguments = tokens_from("--out ./build");
    /// let expected = format!("./build{}", std::path::MAIN_SEPARATOR);
    /// assert_eq!(parser.dir("out"), Some(expected));
    /// ```
    pub fn dir(&self, key: &str) -> Option<String> {
        self.dir_with(key, None, None, None)
    }

    /// Directory resolution with explicit overrides.
    pub fn dir_with(
        &self,
        key: &str,
        short_key: Option<&str>,
        index: Option<usize>,
        args: Option<&[String]>,
    ) -> Option<String> {
        let path = self.string_with(key, short_key, index, args)?;
        if path.ends_with(MAIN_SEPARATOR) {
            Some(path.to_string())
        } else {
            Some(format!("{path}{MAIN_SEPARATOR}"))
        }
    }

    /// The arguments not attached to any flag, from the stored arguments.
    pub fn unflagged_arguments(&self) -> Vec<&str> {
        resolve::unflagged_arguments(&self.arguments)
    }

    /// The arguments not attached to any flag, from an explicit sequence.
    pub fn unflagged_arguments_in<'a>(&self, args: &'a [String]) -> Vec<&'a str> {
        resolve::unflagged_arguments(args)
    }

    /// Renders the help listing for the registered flags, in registration
    /// order, preceded by the title and description blocks when set.
    pub fn help(&self) -> String {
        help::render(
            &self.registry,
            self.title.as_deref(),
            self.description.as_deref(),
            self.left_indent,
            self.line_length,
        )
    }

    /// Writes [`help`](Self::help) to standard output.
    pub fn print_help(&self) {
        println!("{}", self.help());
    }
}

/// Splits a command line into a token sequence for use with the accessors.
///
/// Splits on single ASCII spaces and prepends a `"."` program-name
/// placeholder at index 0. Quoting is not honored; this is for building
/// test fixtures, not for parsing real shells.
///
/// # Examples
///
/// ```
/// use dashdash::tokens_from;
///
/// assert_eq!(tokens_from("--name Scruffy"), [".", "--name", "Scruffy"]);
/// ```
pub fn tokens_from(command_line: &str) -> Vec<String> {
    let mut tokens = vec![String::from(".")];
    tokens.extend(
        command_line
            .split(' ')
            .filter(|token| !token.is_empty())
            .map(String::from),
    );
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let parser = FlagParser::new();
        assert_eq!(parser.left_indent, 2);
        assert_eq!(parser.line_length, 60);
        assert!(parser.arguments.is_empty());
        assert!(parser.registry().is_empty());
    }

    #[test]
    fn test_supplied_args_override_stored() {
        let mut parser = FlagParser::new();
        parser.arguments = tokens_from("--name Stored");

        let supplied = tokens_from("--name Supplied");
        assert_eq!(
            parser.string_with("name", None, None, Some(&supplied)),
            Some("Supplied")
        );
        assert_eq!(parser.string("name"), Some("Stored"));
    }

    #[test]
    fn test_int_rejects_non_integer() {
        let mut parser = FlagParser::new();
        parser.arguments = tokens_from("--age 7.0");
        assert_eq!(parser.int("age"), None);
        assert_eq!(parser.float("age"), Some(7.0));
    }

    #[test]
    fn test_dir_keeps_existing_separator() {
        let mut parser = FlagParser::new();
        let with_sep = format!("./build{MAIN_SEPARATOR}");
        parser.arguments = vec![".".into(), "--out".into(), with_sep.clone()];
        assert_eq!(parser.dir("out"), Some(with_sep));
    }

    #[test]
    fn test_tokens_from_collapses_runs_of_spaces() {
        assert_eq!(tokens_from("a  b"), [".", "a", "b"]);
        assert_eq!(tokens_from(""), ["."]);
    }
}
