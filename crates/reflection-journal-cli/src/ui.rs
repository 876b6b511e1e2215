use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};
use reflection_journal_engine::{
    ClassifiedComment, CommentView, EntryBlock, Facet, InlineSpan, ScriptureLookup,
    comments::facets::EMPTY_FILTER_MESSAGE, parse_entry, parsing::inline::link_scripture,
};

use crate::app::App;

pub fn draw(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(f.area());

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(rows[0]);

    // Entry list panel
    let entry_items: Vec<ListItem> = app
        .entries
        .iter()
        .map(|entry| {
            ListItem::new(vec![
                Line::from(Span::raw(entry.title.clone())),
                Line::from(Span::styled(
                    format!("{} min read", entry.read_minutes()),
                    Style::default().fg(Color::DarkGray),
                )),
            ])
        })
        .collect();

    let entry_list = List::new(entry_items)
        .block(Block::default().borders(Borders::ALL).title("Entries"))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(entry_list, chunks[0], &mut app.entry_list_state);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    // Entry body panel
    let (title, body) = match app.selected_entry() {
        Some(entry) => (
            entry.title.clone(),
            entry_lines(&parse_entry(&entry.body, &app.lookup)),
        ),
        None => (
            "Entry".to_string(),
            vec![Line::from("No published entries in this journal")],
        ),
    };
    let body = Paragraph::new(body)
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(Wrap { trim: false });
    f.render_widget(body, right[0]);

    // Comments panel
    let view = app.comment_view();
    let comments = Paragraph::new(comment_lines(&view, &app.lookup))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Comments  {}", app.location())),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(comments, right[1]);

    let help = Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k: Previous | "),
        Span::raw("↓/j: Next | "),
        Span::raw("0-6: Filter | f: Next filter"),
    ]);
    f.render_widget(Paragraph::new(help), rows[1]);
}

/// Terminal rendition of a structured entry body.
pub fn entry_lines(blocks: &[EntryBlock<'_>]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for block in blocks {
        match block {
            EntryBlock::Heading(section) => lines.push(Line::from(Span::styled(
                section.title(),
                Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ))),
            EntryBlock::BulletList(items) => {
                for item in items {
                    let mut spans = vec![Span::raw("• ")];
                    spans.extend(inline_spans(item));
                    lines.push(Line::from(spans));
                }
            }
            EntryBlock::Spacer => lines.push(Line::default()),
            EntryBlock::Paragraph(spans) => lines.push(Line::from(inline_spans(spans))),
        }
    }
    lines
}

fn inline_spans(spans: &[InlineSpan<'_>]) -> Vec<Span<'static>> {
    spans
        .iter()
        .map(|span| match span {
            InlineSpan::Text(text) => Span::raw(text.to_string()),
            InlineSpan::Bold(text) => Span::styled(
                text.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            InlineSpan::ScriptureLink { text, .. } => Span::styled(
                text.to_string(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::UNDERLINED),
            ),
        })
        .collect()
}

/// Facet chips, the glance preview and the visible comments.
pub fn comment_lines(view: &CommentView<'_>, lookup: &ScriptureLookup) -> Vec<Line<'static>> {
    let mut lines = vec![chip_line(view), Line::default()];

    let glance = view.glance();
    if !glance.is_empty() {
        lines.push(Line::from(Span::styled(
            "At a glance",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for (label, items) in [
            ("Disagreements", &glance.disagreements),
            ("Questions", &glance.questions),
        ] {
            if items.is_empty() {
                continue;
            }
            lines.push(Line::from(format!("{label}:")));
            for item in items.iter() {
                lines.push(Line::from(format!(
                    "  {}: {}",
                    item.comment.display_name_or_anonymous(),
                    item.preview()
                )));
            }
        }
        lines.push(Line::default());
    }

    let visible = view.visible();
    if visible.is_empty() {
        lines.push(Line::from(Span::styled(
            EMPTY_FILTER_MESSAGE,
            Style::default().fg(Color::DarkGray),
        )));
        return lines;
    }

    for comment in visible {
        lines.extend(comment_block(comment, lookup));
        lines.push(Line::default());
    }
    lines
}

fn chip_line(view: &CommentView<'_>) -> Line<'static> {
    let counts = view.counts();
    let spans: Vec<Span> = Facet::choices()
        .map(|facet| {
            let chip = format!(" {} {} ", facet.label(), counts.get(facet));
            if facet == view.facet() {
                Span::styled(chip, Style::default().bg(Color::Yellow).fg(Color::Black))
            } else {
                Span::raw(chip)
            }
        })
        .collect();
    Line::from(spans)
}

fn comment_block(comment: &ClassifiedComment<'_>, lookup: &ScriptureLookup) -> Vec<Line<'static>> {
    let mut header = Vec::new();
    if let Some(stance) = comment.stance {
        header.push(Span::styled(
            format!("[{}] ", stance.label()),
            Style::default().fg(Color::Magenta),
        ));
    }
    header.push(Span::styled(
        comment.comment.display_name_or_anonymous().to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    ));
    if let Some(at) = comment.comment.created_at {
        header.push(Span::styled(
            format!("  {}", at.format("%Y-%m-%d %H:%M")),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let mut lines = vec![Line::from(header)];
    lines.extend(
        comment
            .display_body
            .lines()
            .map(|line| Line::from(inline_spans(&link_scripture(line, lookup)))),
    );
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use reflection_journal_engine::{Comment, Stance};
    use uuid::Uuid;

    fn text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn comment(body: &str, minute: u32) -> Comment {
        Comment {
            id: Uuid::new_v4(),
            entry_id: Uuid::nil(),
            body: body.to_string(),
            display_name: None,
            created_at: Some(Utc.with_ymd_and_hms(2025, 5, 1, 10, minute, 0).unwrap()),
            approved: true,
        }
    }

    #[test]
    fn entry_blocks_become_lines() {
        let lookup = ScriptureLookup::default();
        let blocks = parse_entry("Why I wrestle:\n- **hard** Job 1:21\n\nend", &lookup);
        let lines: Vec<_> = entry_lines(&blocks).iter().map(text).collect();
        assert_eq!(lines, vec!["Why I wrestle", "• hard Job 1:21", "", "end"]);
    }

    #[test]
    fn empty_facet_shows_message() {
        let comments = vec![comment("[Agree] yes indeed", 1)];
        let view = CommentView::new(&comments, Facet::Stance(Stance::Prayer));
        let lines: Vec<_> = comment_lines(&view, &ScriptureLookup::default())
            .iter()
            .map(text)
            .collect();

        assert_eq!(
            lines[0],
            " All 1  Agree 1  Disagree 0  Question 0  Insight 0  Resource 0  Prayer 0 "
        );
        assert_eq!(lines.last().map(String::as_str), Some(EMPTY_FILTER_MESSAGE));
        assert!(!lines.iter().any(|l| l == "At a glance"));
    }

    #[test]
    fn glance_lists_newest_questions() {
        let comments = vec![
            comment("[Question] first?", 1),
            comment("[Question] second?", 2),
        ];
        let view = CommentView::new(&comments, Facet::All);
        let lines: Vec<_> = comment_lines(&view, &ScriptureLookup::default())
            .iter()
            .map(text)
            .collect();

        let at = lines.iter().position(|l| l == "At a glance").unwrap();
        assert_eq!(
            lines[at + 1..at + 4],
            ["Questions:", "  Anonymous: second?", "  Anonymous: first?"]
        );
    }
}
