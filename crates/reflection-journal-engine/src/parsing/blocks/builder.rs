use crate::parsing::{
    inline::{InlineSpan, parse_inline},
    scripture::ScriptureLookup,
};

use super::{classify::LineClass, types::EntryBlock};

/// Builds [`EntryBlock`]s from classified lines, in order.
///
/// The only state carried between lines is an open bullet list, which is
/// flushed by the first non-bullet line or by [`BlockBuilder::finish`].
pub struct BlockBuilder<'l, 'a> {
    lookup: &'l ScriptureLookup,
    list: Option<Vec<Vec<InlineSpan<'a>>>>,
    out: Vec<EntryBlock<'a>>,
}

impl<'l, 'a> BlockBuilder<'l, 'a> {
    pub fn new(lookup: &'l ScriptureLookup) -> Self {
        Self {
            lookup,
            list: None,
            out: vec![],
        }
    }

    pub fn push(&mut self, line: LineClass<'a>) {
        match line {
            LineClass::Bullet(item) => {
                let spans = parse_inline(item, self.lookup);
                self.list.get_or_insert_with(Vec::new).push(spans);
            }
            LineClass::Heading(section) => self.emit(EntryBlock::Heading(section)),
            LineClass::Blank => self.emit(EntryBlock::Spacer),
            LineClass::Text(text) => {
                let spans = parse_inline(text, self.lookup);
                self.emit(EntryBlock::Paragraph(spans));
            }
        }
    }

    pub fn finish(mut self) -> Vec<EntryBlock<'a>> {
        // EOF flush
        self.flush_list();
        self.out
    }

    fn emit(&mut self, block: EntryBlock<'a>) {
        self.flush_list();
        self.out.push(block);
    }

    fn flush_list(&mut self) {
        if let Some(items) = self.list.take() {
            self.out.push(EntryBlock::BulletList(items));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::blocks::{Section, classify_line};
    use pretty_assertions::assert_eq;

    fn build(lines: &[&'static str]) -> Vec<EntryBlock<'static>> {
        let lookup = ScriptureLookup::default();
        let mut builder = BlockBuilder::new(&lookup);
        for &line in lines {
            builder.push(classify_line(line));
        }
        builder.finish()
    }

    #[test]
    fn consecutive_bullets_share_one_list() {
        let blocks = build(&["- one", "* two", "three"]);
        assert_eq!(
            blocks,
            vec![
                EntryBlock::BulletList(vec![
                    vec![InlineSpan::Text("one")],
                    vec![InlineSpan::Text("two")],
                ]),
                EntryBlock::Paragraph(vec![InlineSpan::Text("three")]),
            ]
        );
    }

    #[test]
    fn blank_line_splits_lists() {
        let blocks = build(&["- one", "", "- two"]);
        assert_eq!(blocks.len(), 3);
        assert!(matches!(blocks[0], EntryBlock::BulletList(ref items) if items.len() == 1));
        assert_eq!(blocks[1], EntryBlock::Spacer);
        assert!(matches!(blocks[2], EntryBlock::BulletList(ref items) if items.len() == 1));
    }

    #[test]
    fn heading_closes_open_list() {
        let blocks = build(&["- one", "Why I wrestle:"]);
        assert_eq!(blocks[1], EntryBlock::Heading(Section::WhyIWrestle));
    }

    #[test]
    fn list_at_end_is_flushed() {
        let blocks = build(&["para", "- last"]);
        assert_eq!(blocks.len(), 2);
        assert!(matches!(blocks[1], EntryBlock::BulletList(_)));
    }
}
