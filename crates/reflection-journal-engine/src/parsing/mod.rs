//! # Text Pipeline
//!
//! Pure, line-oriented parsing of entry and comment text.
//!
//! ## Modules
//!
//! - **`stance`**: strips a leading `[Tag]` from comment text
//! - **`scripture`**: finds Bible references and builds lookup URLs
//! - **`inline`**: splits one line into text, bold and scripture-link spans
//! - **`blocks`**: classifies entry lines into headings, bullet lists, spacers
//!   and paragraphs
//!
//! ## Precedence
//!
//! Scripture references are carved out of a line before bold delimiters are
//! looked for, so `**Romans 5:12**` yields a link with the `**` left in the
//! surrounding text.

pub mod blocks;
pub mod inline;
pub mod scripture;
pub mod stance;

use std::sync::LazyLock;

use regex::Regex;

use blocks::{BlockBuilder, EntryBlock, classify_line};
use scripture::ScriptureLookup;

static LINE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r\n|\r|\n").expect("line break pattern is valid"));

/// Splits `text` on `\n`, `\r\n` or a lone `\r`.
///
/// A trailing line break yields a final empty line, which the block builder
/// turns into a spacer.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    LINE_BREAK.split(text)
}

/// Structures a full entry body into blocks, one forward pass over its lines.
pub fn parse_entry<'a>(body: &'a str, lookup: &ScriptureLookup) -> Vec<EntryBlock<'a>> {
    if body.is_empty() {
        return vec![];
    }

    let mut builder = BlockBuilder::new(lookup);
    for line in split_lines(body) {
        builder.push(classify_line(line));
    }
    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_lines_handles_every_convention() {
        let lines: Vec<_> = split_lines("a\r\nb\rc\nd").collect();
        assert_eq!(lines, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn trailing_break_yields_empty_line() {
        let lines: Vec<_> = split_lines("a\n").collect();
        assert_eq!(lines, vec!["a", ""]);
    }

    #[test]
    fn empty_body_has_no_blocks() {
        assert!(parse_entry("", &ScriptureLookup::default()).is_empty());
    }
}
