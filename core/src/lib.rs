//! Declare command-line flags, resolve typed values, and render help.
//!
//! This crate is a small flag library for CLI tools:
//!
//! - [`Flag`] — one declaration: long key, optional one-character short
//!   alias, optional description, optional positional fallback index.
//! - [`FlagRegistry`] — insertion-ordered collection of declarations;
//!   the order fixes the help listing.
//! - [`FlagParser`] — the facade: registration, typed accessors
//!   (`string`, `is_present`, `int`, `float`, `dir`), unflagged-argument
//!   extraction, and aligned, word-wrapped help rendering.
//! - [`resolve`] — the underlying lookup rules as free functions, for
//!   hosts that want them without a parser instance.
//! - [`help`] — layout computation and the greedy word-wrap routine.
//!
//! The library never touches the process environment: it does not read
//! `std::env::args`, and the only output it produces is the help string
//! the caller asks for (or prints via [`FlagParser::print_help`]).
//! Accessors return `Option` rather than failing: a missing flag, an
//! out-of-bounds index, and an unparseable number all resolve to `None`.
//!
//! # Example
//!
//! ```
//! use dashdash::{Flag, FlagParser, tokens_from};
//!
//! let mut parser = FlagParser::new()
//!     .with_title("shrink")
//!     .with_description("Compresses images in place.");
//!
//! parser.register(Flag::new("input").with_short("i").at_index(0)
//!     .with_description("file or directory to compress"));
//! parser.register(Flag::new("quality").with_short("q")
//!     .with_description("output quality from 0.0 to 1.0"));
//! parser.register(Flag::new("verbose").with_short("v")
//!     .with_description("log every file touched"));
//!
//! // In a real tool: parser.arguments = std::env::args().collect();
//! parser.arguments = tokens_from("./photos -q 0.8 -v");
//!
//! assert_eq!(parser.string("input"), Some("./photos"));
//! assert_eq!(parser.float("quality"), Some(0.8));
//! assert!(parser.is_present("verbose"));
//!
//! let help = parser.help();
//! assert!(help.contains("--quality"));
//! ```

mod flag;
mod registry;

pub mod help;
pub mod resolve;

mod parser;

pub use flag::Flag;
pub use parser::{FlagParser, tokens_from};
pub use registry::FlagRegistry;
