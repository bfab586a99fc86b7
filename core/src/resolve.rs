//! Value resolution over raw token sequences.
//!
//! These free functions implement the lookup rules shared by every typed
//! accessor on [`FlagParser`](crate::FlagParser). A token sequence is an
//! invocation's argument list with index 0 reserved for the program name;
//! that token is never treated as a flag or a value.
//!
//! Resolution for a key tries, in order:
//!
//! 1. the long form `--key`, taking the next token as the value;
//! 2. the single-dash form `-key`, only when the key is one character;
//! 3. the effective short key `-k` (explicitly supplied, or recorded in
//!    the registry for the key);
//! 4. the positional fallback index, applied to [`unflagged_arguments`].
//!
//! The first step that produces a value wins.
//!
//! # Examples
//!
//! ```
//! use dashdash::{resolve, tokens_from, FlagRegistry};
//!
//! let registry = FlagRegistry::new();
//! let args = tokens_from("--name Scruffy");
//! assert_eq!(resolve::resolve(&registry, "name", None, None, &args), Some("Scruffy"));
//! ```

use tracing::debug;

use crate::FlagRegistry;

/// Returns the token following the first exact occurrence of `flag_token`.
///
/// Only the first occurrence is considered. The following token must exist
/// and must not begin with a dash: a dash-initial token looks like another
/// flag, so the lookup fails rather than scanning for a later occurrence.
///
/// # Examples
///
/// ```
/// use dashdash::{resolve::value_after, tokens_from};
///
/// let args = tokens_from("--name Scruffy --age 7");
/// assert_eq!(value_after("--age", &args), Some("7"));
/// assert_eq!(value_after("--name", &args), Some("Scruffy"));
///
/// // The value after the first `--name` looks like a flag, so the lookup
/// // fails; the later occurrence is not consulted.
/// let args = tokens_from("--name -v --name Scruffy");
/// assert_eq!(value_after("--name", &args), None);
/// ```
pub fn value_after<'a>(flag_token: &str, args: &'a [String]) -> Option<&'a str> {
    let idx = args.iter().position(|arg| arg == flag_token)?;
    let value = args.get(idx + 1)?;
    if value.starts_with('-') {
        return None;
    }
    Some(value)
}

/// Resolves a string value for `key` from `args`.
///
/// `short_key` and `index` override the values recorded in `registry` for
/// `key`; when `None`, the registered declaration (if any) supplies them.
pub fn resolve<'a>(
    registry: &FlagRegistry,
    key: &str,
    short_key: Option<&str>,
    index: Option<usize>,
    args: &'a [String],
) -> Option<&'a str> {
    if let Some(value) = value_after(&format!("--{key}"), args) {
        debug!(key, value, "resolved from long flag");
        return Some(value);
    }

    // One-character keys also match with a single dash. Longer keys do
    // not: `-path` reads as the combined group 'p' 'a' 't' 'h'.
    if key.chars().count() == 1 {
        if let Some(value) = value_after(&format!("-{key}"), args) {
            debug!(key, value, "resolved from single-dash long flag");
            return Some(value);
        }
    }

    if let Some(short) = effective_short(registry, key, short_key) {
        if let Some(value) = value_after(&format!("-{short}"), args) {
            debug!(key, short, value, "resolved from short flag");
            return Some(value);
        }
    }

    if let Some(index) = effective_index(registry, key, index) {
        let positionals = unflagged_arguments(args);
        if let Some(&value) = positionals.get(index) {
            debug!(key, index, value, "resolved from positional fallback");
            return Some(value);
        }
    }

    None
}

/// Whether `key` is present as a boolean flag in `args`.
///
/// A key is present when `--key` appears as an exact token, or when a
/// one-character key appears inside any single-dash token (this is what
/// lets `-rf` satisfy both `r` and `f`), or when the effective short key
/// passes the same test.
///
/// The containment rule is gated to one-character keys. An ungated
/// substring test would let any multi-character key match inside a longer
/// combined group (`or` inside `-for`), and would make `-rf` satisfy the
/// key `rf`, which only the exact token `--rf` may do.
pub fn is_present(
    registry: &FlagRegistry,
    key: &str,
    short_key: Option<&str>,
    args: &[String],
) -> bool {
    let long = format!("--{key}");
    if args.iter().any(|arg| *arg == long) {
        return true;
    }

    if contains_single_dashed(key, args) {
        return true;
    }

    match effective_short(registry, key, short_key) {
        Some(short) => contains_single_dashed(short, args),
        None => false,
    }
}

/// Collects the arguments not attached to any flag.
///
/// Single left-to-right pass that skips index 0 (the program name). A
/// dash-initial token is a flag; the token after a flag is consumed as
/// that flag's value; everything else is positional.
///
/// The pass is arity-blind: it cannot tell a boolean flag from a
/// value-taking one, so a boolean flag immediately followed by a bare
/// positional argument swallows it.
///
/// # Examples
///
/// ```
/// use dashdash::{resolve::unflagged_arguments, tokens_from};
///
/// let args = tokens_from("--name Scruffy ./in -a 7 ./out --size 0.5");
/// assert_eq!(unflagged_arguments(&args), ["./in", "./out"]);
/// ```
pub fn unflagged_arguments(args: &[String]) -> Vec<&str> {
    let mut positionals = Vec::new();
    let mut last_was_flag = false;

    for arg in args.iter().skip(1) {
        if arg.starts_with('-') {
            last_was_flag = true;
            continue;
        }
        if last_was_flag {
            // This token is the preceding flag's value.
            last_was_flag = false;
            continue;
        }
        positionals.push(arg.as_str());
    }

    positionals
}

fn contains_single_dashed(key: &str, args: &[String]) -> bool {
    if key.chars().count() != 1 {
        return false;
    }
    args.iter()
        .any(|arg| arg.starts_with('-') && !arg.starts_with("--") && arg.contains(key))
}

fn effective_short<'r>(
    registry: &'r FlagRegistry,
    key: &str,
    short_key: Option<&'r str>,
) -> Option<&'r str> {
    short_key.or_else(|| registry.get(key).and_then(|flag| flag.short_key.as_deref()))
}

fn effective_index(registry: &FlagRegistry, key: &str, index: Option<usize>) -> Option<usize> {
    index.or_else(|| registry.get(key).and_then(|flag| flag.index))
}
