use super::kinds::Bold;

/// A typed piece of one rendered line.
///
/// Spans borrow from the source line. Writing each span back with
/// [`InlineSpan::write_source`] reproduces the line exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineSpan<'a> {
    /// Plain text.
    Text(&'a str),
    /// Content between a `**` pair, delimiters excluded.
    Bold(&'a str),
    /// A recognised Bible reference and its lookup URL.
    ScriptureLink { text: &'a str, href: String },
}

impl InlineSpan<'_> {
    /// Text shown to the reader.
    pub fn text(&self) -> &str {
        match self {
            InlineSpan::Text(t) | InlineSpan::Bold(t) => t,
            InlineSpan::ScriptureLink { text, .. } => text,
        }
    }

    /// Appends the span as it appeared in the source line.
    pub fn write_source(&self, out: &mut String) {
        match self {
            InlineSpan::Bold(t) => {
                out.push_str(Bold::DELIM);
                out.push_str(t);
                out.push_str(Bold::DELIM);
            }
            other => out.push_str(other.text()),
        }
    }
}

/// Rebuilds the source line from its spans.
pub fn to_source(spans: &[InlineSpan<'_>]) -> String {
    let mut out = String::new();
    for span in spans {
        span.write_source(&mut out);
    }
    out
}
