use crossterm::event::KeyCode;
use ratatui::widgets::ListState;
use reflection_journal_engine::{
    Comment, CommentView, Entry, Facet, Journal, ScriptureLookup, Stance,
};

/// What the main loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Continue,
    Quit,
}

pub struct App {
    pub entries: Vec<Entry>,
    pub entry_list_state: ListState,
    pub lookup: ScriptureLookup,
    journal: Journal,
    comments: Vec<Comment>,
    facet: Facet,
}

impl App {
    /// Shows what a visitor would see: published entries and approved comments.
    pub fn new(journal: &Journal, lookup: ScriptureLookup) -> Self {
        let journal = journal.public_view();
        let entries = journal
            .entries_newest_first()
            .into_iter()
            .cloned()
            .collect::<Vec<_>>();

        let mut app = Self {
            entries,
            entry_list_state: ListState::default(),
            lookup,
            journal,
            comments: Vec::new(),
            facet: Facet::All,
        };

        // Select first entry if available
        if !app.entries.is_empty() {
            app.entry_list_state.select(Some(0));
            app.load_comments();
        }

        app
    }

    pub fn handle_key(&mut self, code: KeyCode) -> Action {
        match code {
            KeyCode::Char('q') => return Action::Quit,
            KeyCode::Down | KeyCode::Char('j') => self.next_entry(),
            KeyCode::Up | KeyCode::Char('k') => self.previous_entry(),
            KeyCode::Char('f') => self.facet = self.facet.cycle(),
            KeyCode::Char('0') => self.facet = Facet::All,
            KeyCode::Char(c @ '1'..='6') => {
                let index = c as usize - '1' as usize;
                if let Some(&stance) = Stance::ALL.get(index) {
                    self.facet = Facet::Stance(stance);
                }
            }
            _ => {}
        }
        Action::Continue
    }

    pub fn selected_entry(&self) -> Option<&Entry> {
        self.entry_list_state
            .selected()
            .and_then(|i| self.entries.get(i))
    }

    pub fn facet(&self) -> Facet {
        self.facet
    }

    /// Comments on the selected entry under the active facet.
    pub fn comment_view(&self) -> CommentView<'_> {
        CommentView::new(&self.comments, self.facet)
    }

    /// Shareable location of the current view, e.g. `/entries/on-grace?stance=question`.
    pub fn location(&self) -> String {
        let Some(entry) = self.selected_entry() else {
            return String::new();
        };
        let query = self.facet.to_query("");
        if query.is_empty() {
            format!("/entries/{}", entry.slug)
        } else {
            format!("/entries/{}?{query}", entry.slug)
        }
    }

    fn next_entry(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        let i = match self.entry_list_state.selected() {
            Some(i) => (i + 1) % self.entries.len(),
            None => 0,
        };
        self.entry_list_state.select(Some(i));
        self.load_comments();
    }

    fn previous_entry(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        let i = match self.entry_list_state.selected() {
            Some(0) | None => self.entries.len() - 1,
            Some(i) => i - 1,
        };
        self.entry_list_state.select(Some(i));
        self.load_comments();
    }

    fn load_comments(&mut self) {
        self.comments = match self.selected_entry() {
            Some(entry) => self.journal.comments_for(entry.id),
            None => Vec::new(),
        };
        log::debug!("showing {} comments", self.comments.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use uuid::Uuid;

    fn journal() -> Journal {
        let mut older = Entry::new("Older Thoughts", "Why I agree:\n- yes", true);
        older.created_at = Some(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap());
        let mut newer = Entry::new("On Grace", "Eph 2:8", true);
        newer.created_at = Some(Utc.with_ymd_and_hms(2025, 2, 1, 0, 0, 0).unwrap());
        let draft = Entry::new("Draft", "hidden", false);

        let comment = |entry: &Entry, body: &str, approved| Comment {
            id: Uuid::new_v4(),
            entry_id: entry.id,
            body: body.to_string(),
            display_name: None,
            created_at: Some(Utc.with_ymd_and_hms(2025, 2, 2, 0, 0, 0).unwrap()),
            approved,
        };

        Journal {
            comments: vec![
                comment(&newer, "[Question] Saved through faith?", true),
                comment(&newer, "[Agree] Amen.", true),
                comment(&newer, "[Disagree] pending", false),
                comment(&draft, "[Agree] on a draft", true),
            ],
            entries: vec![older, newer, draft],
        }
    }

    #[test]
    fn starts_on_newest_public_entry() {
        let app = App::new(&journal(), ScriptureLookup::default());

        let titles: Vec<_> = app.entries.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["On Grace", "Older Thoughts"]);
        assert_eq!(app.comment_view().counts().all(), 2);
    }

    #[test]
    fn moving_wraps_and_reloads_comments() {
        let mut app = App::new(&journal(), ScriptureLookup::default());

        app.handle_key(KeyCode::Char('k'));
        assert_eq!(app.selected_entry().map(|e| e.slug.as_str()), Some("older-thoughts"));
        assert_eq!(app.comment_view().counts().all(), 0);

        app.handle_key(KeyCode::Char('j'));
        assert_eq!(app.selected_entry().map(|e| e.slug.as_str()), Some("on-grace"));
    }

    #[rstest]
    #[case('0', Facet::All)]
    #[case('1', Facet::Stance(Stance::Agree))]
    #[case('3', Facet::Stance(Stance::Question))]
    #[case('6', Facet::Stance(Stance::Prayer))]
    fn number_keys_pick_facets(#[case] key: char, #[case] expected: Facet) {
        let mut app = App::new(&journal(), ScriptureLookup::default());
        app.handle_key(KeyCode::Char('2'));
        app.handle_key(KeyCode::Char(key));
        assert_eq!(app.facet(), expected);
    }

    #[test]
    fn facet_shows_in_location() {
        let mut app = App::new(&journal(), ScriptureLookup::default());
        assert_eq!(app.location(), "/entries/on-grace");

        app.handle_key(KeyCode::Char('f'));
        app.handle_key(KeyCode::Char('f'));
        app.handle_key(KeyCode::Char('f'));
        assert_eq!(app.location(), "/entries/on-grace?stance=question");
        assert_eq!(app.comment_view().visible().len(), 1);
    }

    #[test]
    fn q_quits() {
        let mut app = App::new(&Journal::default(), ScriptureLookup::default());
        assert_eq!(app.handle_key(KeyCode::Char('j')), Action::Continue);
        assert_eq!(app.handle_key(KeyCode::Char('q')), Action::Quit);
        assert_eq!(app.location(), "");
    }
}
