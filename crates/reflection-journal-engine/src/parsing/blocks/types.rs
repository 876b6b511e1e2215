use crate::parsing::inline::InlineSpan;

/// The fixed section headings an entry may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    WhyIAgree,
    WhyIWrestle,
}

impl Section {
    /// Heading text, without the trailing colon written in the body.
    pub fn title(self) -> &'static str {
        match self {
            Section::WhyIAgree => "Why I agree",
            Section::WhyIWrestle => "Why I wrestle",
        }
    }
}

/// One block of a structured entry body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryBlock<'a> {
    Heading(Section),
    /// Consecutive bullet lines, one span list per item.
    BulletList(Vec<Vec<InlineSpan<'a>>>),
    /// A blank or whitespace-only line.
    Spacer,
    Paragraph(Vec<InlineSpan<'a>>),
}
