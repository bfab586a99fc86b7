//! Help-text layout and word wrapping.
//!
//! The help listing is a three-column table: long keys, short keys, and
//! word-wrapped descriptions. Column positions are computed fresh from the
//! registered flags for each render: the short-key column sits past the
//! widest `--key` and the description column past the widest short key,
//! so every entry lines up regardless of key lengths.
//!
//! Wrapping is greedy with a hanging indent: words are appended until the
//! next one would push the current line past the length limit, at which
//! point the line is closed and a new one starts at the indent column.
//! Single-character words are never moved to a new line on their own,
//! which keeps closing punctuation attached to the text it follows.

use crate::{Flag, FlagRegistry};

/// Gap, in columns, between the long-key and short-key columns and between
/// the short-key and description columns.
const COLUMN_GAP: usize = 2;

/// Column positions for one help render.
///
/// Derived from a snapshot of the registered flags by
/// [`HelpLayout::for_flags`]; not persisted. All widths are counted in
/// characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpLayout {
    /// Column where `--key` starts.
    pub left_indent: usize,
    /// Column where the short key starts.
    pub short_key_indent: usize,
    /// Column where the description starts (also the hanging indent for
    /// wrapped description lines).
    pub description_indent: usize,
    /// Maximum line length for wrapping.
    pub line_length: usize,
}

impl HelpLayout {
    /// Computes column positions from the currently registered flags.
    ///
    /// # Examples
    ///
    /// ```
    /// use dashdash::{Flag, FlagRegistry, help::HelpLayout};
    ///
    /// let mut registry = FlagRegistry::new();
    /// registry.register(Flag::new("force").with_short("f"));
    /// registry.register(Flag::new("recursive").with_short("r"));
    ///
    /// let layout = HelpLayout::for_flags(&registry, 2, 60);
    /// // 2 + len("--recursive") + 2
    /// assert_eq!(layout.short_key_indent, 15);
    /// // 15 + len("-r") + 2
    /// assert_eq!(layout.description_indent, 19);
    /// ```
    pub fn for_flags(registry: &FlagRegistry, left_indent: usize, line_length: usize) -> Self {
        let short_key_indent = registry
            .iter()
            .map(|flag| left_indent + flag.long_token().chars().count() + COLUMN_GAP)
            .max()
            .unwrap_or(left_indent);

        let description_indent = registry
            .iter()
            .map(|flag| {
                let short_width = flag
                    .short_token()
                    .map(|token| token.chars().count())
                    .unwrap_or(0);
                short_key_indent + short_width + COLUMN_GAP
            })
            .max()
            .unwrap_or(short_key_indent);

        Self {
            left_indent,
            short_key_indent,
            description_indent,
            line_length,
        }
    }
}

enum WrapToken<'a> {
    /// Maximal run of non-whitespace characters (attached punctuation
    /// included).
    Word(&'a str),
    /// A single non-newline whitespace character.
    Space(char),
    /// An embedded newline; always forces a break.
    Break,
}

fn tokenize(input: &str) -> Vec<WrapToken<'_>> {
    let mut tokens = Vec::new();
    let mut word_start = None;

    for (i, c) in input.char_indices() {
        if c.is_whitespace() {
            if let Some(start) = word_start.take() {
                tokens.push(WrapToken::Word(&input[start..i]));
            }
            if c == '\n' {
                tokens.push(WrapToken::Break);
            } else {
                tokens.push(WrapToken::Space(c));
            }
        } else if word_start.is_none() {
            word_start = Some(i);
        }
    }
    if let Some(start) = word_start {
        tokens.push(WrapToken::Word(&input[start..]));
    }

    tokens
}

/// Appends `input` to `out`, greedily wrapped to `line_length` columns
/// with a hanging indent of `indent` spaces.
///
/// Wrapping continues from the current last line of `out`: if that line is
/// empty (or `out` is empty) the indent padding is written first. A word
/// that would push the line past `line_length` starts a new indented line,
/// with one trailing space stripped from the line being closed. Words of a
/// single character never start a new line by the length rule; they
/// attach to the line being closed even when it runs long. Embedded
/// newlines in `input` always force a break.
///
/// # Examples
///
/// ```
/// use dashdash::help::append_wrapped;
///
/// let mut out = String::new();
/// append_wrapped(&mut out, "alpha beta gamma", 11, 2);
/// assert_eq!(out, "  alpha\n  beta\n  gamma");
/// ```
pub fn append_wrapped(out: &mut String, input: &str, line_length: usize, indent: usize) {
    let padding = " ".repeat(indent);
    let mut current = out
        .rsplit('\n')
        .next()
        .map_or(0, |line| line.chars().count());

    if out.is_empty() || current == 0 {
        out.push_str(&padding);
        current = indent;
    }

    for token in tokenize(input) {
        match token {
            WrapToken::Word(word) => {
                let width = word.chars().count();
                if current + width > line_length && width > 1 {
                    // Close the line at the last word boundary.
                    if out.ends_with(' ') {
                        out.pop();
                    }
                    out.push('\n');
                    out.push_str(&padding);
                    current = indent;
                }
                out.push_str(word);
                current += width;
            }
            WrapToken::Space(c) => {
                out.push(c);
                current += 1;
            }
            WrapToken::Break => {
                out.push('\n');
                out.push_str(&padding);
                current = indent;
            }
        }
    }
}

/// Renders one flag's help entry (without the trailing newline).
pub(crate) fn flag_entry(flag: &Flag, layout: &HelpLayout) -> String {
    let mut line = " ".repeat(layout.left_indent);
    line.push_str(&flag.long_token());

    if let Some(short) = flag.short_token() {
        pad_to_column(&mut line, layout.short_key_indent);
        line.push_str(&short);
    }

    if let Some(description) = &flag.description {
        pad_to_column(&mut line, layout.description_indent);
        append_wrapped(
            &mut line,
            description,
            layout.line_length,
            layout.description_indent,
        );
    }

    line
}

/// Renders the full help listing: optional title and description blocks,
/// then one aligned entry per registered flag in registration order.
pub fn render(
    registry: &FlagRegistry,
    title: Option<&str>,
    description: Option<&str>,
    left_indent: usize,
    line_length: usize,
) -> String {
    let layout = HelpLayout::for_flags(registry, left_indent, line_length);
    let mut help = String::new();

    if let Some(title) = title {
        append_wrapped(&mut help, title, line_length, left_indent);
        help.push('\n');
    }

    if let Some(description) = description {
        help.push('\n');
        append_wrapped(&mut help, description, line_length, left_indent);
        help.push_str("\n\n");
    }

    for flag in registry.iter() {
        help.push_str(&flag_entry(flag, &layout));
        help.push('\n');
    }

    help
}

fn pad_to_column(line: &mut String, column: usize) {
    let mut width = line.chars().count();
    while width < column {
        line.push(' ');
        width += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_from_widest_flags() {
        let mut registry = FlagRegistry::new();
        registry.register(Flag::new("force").with_short("f"));
        registry.register(Flag::new("recursive").with_short("r"));
        registry.register(Flag::new("o"));

        let layout = HelpLayout::for_flags(&registry, 2, 60);
        assert_eq!(layout.short_key_indent, 2 + "--recursive".len() + 2);
        assert_eq!(layout.description_indent, layout.short_key_indent + 2 + 2);
    }

    #[test]
    fn test_layout_for_empty_registry() {
        let registry = FlagRegistry::new();
        let layout = HelpLayout::for_flags(&registry, 2, 60);
        assert_eq!(layout.short_key_indent, 2);
        assert_eq!(layout.description_indent, 2);
    }

    #[test]
    fn test_wrap_exact_break_at_word_boundary() {
        let mut out = String::new();
        append_wrapped(
            &mut out,
            "whether to force all of the other issues, with a longer tail that wraps",
            60,
            19,
        );

        let lines: Vec<&str> = out.split('\n').collect();
        assert_eq!(
            lines,
            [
                "                   whether to force all of the other issues,",
                "                   with a longer tail that wraps",
            ]
        );
        // The closed line was stripped of its trailing space and sits at
        // exactly the length limit.
        assert_eq!(lines[0].len(), 60);
    }

    #[test]
    fn test_wrap_continues_current_line() {
        let mut out = String::from("  --force      -f  ");
        append_wrapped(&mut out, "whether to force the issue", 60, 19);
        assert_eq!(out, "  --force      -f  whether to force the issue");
    }

    #[test]
    fn test_wrap_pads_empty_last_line() {
        let mut out = String::from("title\n");
        append_wrapped(&mut out, "body", 60, 2);
        assert_eq!(out, "title\n  body");
    }

    #[test]
    fn test_single_character_words_never_wrap_alone() {
        let mut out = String::new();
        append_wrapped(&mut out, "ab c", 3, 0);
        assert_eq!(out, "ab c");

        let mut out = String::new();
        append_wrapped(&mut out, "ab cd", 3, 0);
        assert_eq!(out, "ab\ncd");
    }

    #[test]
    fn test_embedded_newline_forces_break() {
        let mut out = String::new();
        append_wrapped(&mut out, "one\ntwo", 60, 2);
        assert_eq!(out, "  one\n  two");
    }

    #[test]
    fn test_flag_entry_columns() {
        let mut registry = FlagRegistry::new();
        registry.register(Flag::new("force").with_short("f").with_description("whether to force the issue"));
        registry.register(
            Flag::new("recursive")
                .with_short("r")
                .with_description("whether to force all the other issues"),
        );

        let layout = HelpLayout::for_flags(&registry, 2, 60);
        let force = flag_entry(registry.get("force").unwrap(), &layout);
        let recursive = flag_entry(registry.get("recursive").unwrap(), &layout);

        assert_eq!(force, "  --force      -f  whether to force the issue");
        assert_eq!(
            recursive,
            "  --recursive  -r  whether to force all the other issues"
        );
        assert_eq!(force.rfind("-f"), recursive.rfind("-r"));
        assert_eq!(force.find("whether"), recursive.find("whether"));
    }

    #[test]
    fn test_flag_entry_without_short_or_description() {
        let mut registry = FlagRegistry::new();
        registry.register(Flag::new("force").with_short("f"));
        registry.register(Flag::new("recursive"));

        let layout = HelpLayout::for_flags(&registry, 2, 60);
        assert_eq!(
            flag_entry(registry.get("force").unwrap(), &layout),
            "  --force      -f"
        );
        assert_eq!(
            flag_entry(registry.get("recursive").unwrap(), &layout),
            "  --recursive"
        );
    }

    #[test]
    fn test_render_preamble_spacing() {
        let mut registry = FlagRegistry::new();
        registry.register(Flag::new("force").with_short("f"));

        let help = render(&registry, Some("mytool"), Some("does things"), 2, 60);
        assert_eq!(help, "  mytool\n\n  does things\n\n  --force  -f\n");
    }

    #[test]
    fn test_render_without_preamble() {
        let mut registry = FlagRegistry::new();
        registry.register(Flag::new("force"));

        let help = render(&registry, None, None, 2, 60);
        assert_eq!(help, "  --force\n");
    }
}
