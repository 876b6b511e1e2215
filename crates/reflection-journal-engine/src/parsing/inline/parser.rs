use crate::parsing::scripture::{ScriptureLookup, find_references};

use super::{cursor::Cursor, kinds::Bold, types::InlineSpan};

/// Parses one line into [`InlineSpan`]s.
///
/// Scripture references are extracted first; each plain run between them is
/// then split on `**bold**` pairs. Concatenating the source form of every span
/// gives back `line` exactly.
pub fn parse_inline<'a>(line: &'a str, lookup: &ScriptureLookup) -> Vec<InlineSpan<'a>> {
    let mut out = vec![];
    let mut last = 0;

    for m in find_references(line) {
        split_bold(&line[last..m.start], &mut out);
        out.push(InlineSpan::ScriptureLink {
            text: m.text,
            href: m.lookup_url(lookup),
        });
        last = m.end;
    }

    split_bold(&line[last..], &mut out);
    out
}

/// Links scripture references and leaves everything else as plain text.
///
/// Comment bodies are presented this way: no bold, line breaks kept.
pub fn link_scripture<'a>(text: &'a str, lookup: &ScriptureLookup) -> Vec<InlineSpan<'a>> {
    let mut out = vec![];
    let mut last = 0;

    for m in find_references(text) {
        push_text(&mut out, &text[last..m.start]);
        out.push(InlineSpan::ScriptureLink {
            text: m.text,
            href: m.lookup_url(lookup),
        });
        last = m.end;
    }

    push_text(&mut out, &text[last..]);
    out
}

fn push_text<'a>(out: &mut Vec<InlineSpan<'a>>, text: &'a str) {
    if !text.is_empty() {
        out.push(InlineSpan::Text(text));
    }
}

/// Emits `Bold` for each non-greedy `**...**` pair in `run` and `Text` for
/// the rest.
fn split_bold<'a>(run: &'a str, out: &mut Vec<InlineSpan<'a>>) {
    let mut cur = Cursor::new(run);
    let mut text_start = cur.pos();

    while !cur.eof() {
        let start = cur.pos();
        if let Some(inner) = try_parse_bold(&mut cur) {
            push_text(out, cur.slice(text_start, start));
            out.push(InlineSpan::Bold(inner));
            text_start = cur.pos();
            continue;
        }
        cur.bump();
    }

    push_text(out, cur.slice(text_start, cur.pos()));
}

/// Attempts to parse a bold pair at the current position.
///
/// Content must be at least one character and may not cross a line break.
/// On failure the cursor is restored.
fn try_parse_bold<'a>(cur: &mut Cursor<'a>) -> Option<&'a str> {
    if !cur.starts_with(Bold::DELIM) {
        return None;
    }

    let saved = cur.clone();
    cur.bump_n(Bold::DELIM.len());
    let inner_start = cur.pos();

    if cur.peek().is_none_or(|b| b == b'\n') {
        *cur = saved;
        return None;
    }
    cur.bump();

    while !cur.eof() && !cur.starts_with(Bold::DELIM) {
        if cur.peek() == Some(b'\n') {
            break;
        }
        cur.bump();
    }

    if !cur.starts_with(Bold::DELIM) {
        // Not closed, restore cursor
        *cur = saved;
        return None;
    }
    let inner_end = cur.pos();
    cur.bump_n(Bold::DELIM.len());

    Some(cur.slice(inner_start, inner_end))
}
