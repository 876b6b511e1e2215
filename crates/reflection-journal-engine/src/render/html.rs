//! HTML output for structured entries and comment bodies.
//!
//! All text is escaped; the only markup emitted is the fixed set of tags below.

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::parsing::{
    blocks::EntryBlock,
    inline::{InlineSpan, link_scripture},
    scripture::ScriptureLookup,
};

pub fn inline_to_html(spans: &[InlineSpan<'_>]) -> String {
    let mut out = String::new();
    for span in spans {
        match span {
            InlineSpan::Text(text) => out.push_str(&encode_text(text)),
            InlineSpan::Bold(text) => {
                out.push_str("<strong>");
                out.push_str(&encode_text(text));
                out.push_str("</strong>");
            }
            InlineSpan::ScriptureLink { text, href } => {
                out.push_str(&format!(
                    r#"<a href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
                    encode_double_quoted_attribute(href),
                    encode_text(text)
                ));
            }
        }
    }
    out
}

/// One element per block, newline separated.
pub fn blocks_to_html(blocks: &[EntryBlock<'_>]) -> String {
    blocks
        .iter()
        .map(|block| match block {
            EntryBlock::Heading(section) => format!("<h3>{}</h3>", encode_text(section.title())),
            EntryBlock::BulletList(items) => {
                let items: String = items
                    .iter()
                    .map(|item| format!("<li>{}</li>", inline_to_html(item)))
                    .collect();
                format!("<ul>{items}</ul>")
            }
            EntryBlock::Spacer => r#"<div class="spacer"></div>"#.to_string(),
            EntryBlock::Paragraph(spans) => format!("<p>{}</p>", inline_to_html(spans)),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// A comment's display body as one paragraph: scripture linked, no bold,
/// line breaks left for `white-space: pre-wrap`.
pub fn comment_body_to_html(display_body: &str, lookup: &ScriptureLookup) -> String {
    format!(
        r#"<p class="comment-body">{}</p>"#,
        inline_to_html(&link_scripture(display_body, lookup))
    )
}
