//! Owner-side helpers for the moderation queue and the entry dashboard.
//!
//! These only shape rows that were already fetched; approving and deleting
//! happen in the backend.

use crate::models::{comment::Comment, entry::Entry, journal::Journal};

/// Counts above this show as `99+`.
const BADGE_MAX: usize = 99;

/// Which side of the moderation queue is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModerationTab {
    #[default]
    Pending,
    Approved,
}

/// A comment together with the entry it belongs to, if that still exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModerationItem<'a> {
    pub comment: &'a Comment,
    pub entry: Option<&'a Entry>,
}

impl ModerationItem<'_> {
    /// Case-insensitive substring search over body, name, entry title and slug.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }

        let fields = [
            Some(self.comment.body.as_str()),
            self.comment.display_name.as_deref(),
            self.entry.map(|e| e.title.as_str()),
            self.entry.map(|e| e.slug.as_str()),
        ];
        fields
            .into_iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(&query))
    }
}

impl Journal {
    /// Pending comments oldest first, so nothing waits forever; approved
    /// comments newest first.
    pub fn moderation_queue(&self, tab: ModerationTab) -> Vec<ModerationItem<'_>> {
        let approved = tab == ModerationTab::Approved;
        let mut items: Vec<_> = self
            .comments
            .iter()
            .filter(|c| c.approved == approved)
            .map(|comment| ModerationItem {
                comment,
                entry: self.entry_by_id(comment.entry_id),
            })
            .collect();

        items.sort_by(|a, b| {
            let order = a.comment.created_at.cmp(&b.comment.created_at);
            if approved { order.reverse() } else { order }
        });
        items
    }

    pub fn pending_count(&self) -> usize {
        self.comments.iter().filter(|c| !c.approved).count()
    }
}

/// Keeps the queue items matching `query`.
pub fn search_queue<'a>(items: &[ModerationItem<'a>], query: &str) -> Vec<ModerationItem<'a>> {
    items.iter().filter(|i| i.matches(query)).copied().collect()
}

/// Pending-count badge text.
pub fn badge(count: usize) -> String {
    if count > BADGE_MAX {
        format!("{BADGE_MAX}+")
    } else {
        count.to_string()
    }
}

/// Dashboard filter on the published flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryStatus {
    #[default]
    All,
    Published,
    Draft,
}

impl EntryStatus {
    pub fn matches(self, entry: &Entry) -> bool {
        match self {
            EntryStatus::All => true,
            EntryStatus::Published => entry.published,
            EntryStatus::Draft => !entry.published,
        }
    }
}

/// Entries with the given status whose title or slug contains `query`.
pub fn filter_entries<'a>(entries: &'a [Entry], status: EntryStatus, query: &str) -> Vec<&'a Entry> {
    let query = query.trim().to_lowercase();
    entries
        .iter()
        .filter(|e| status.matches(e))
        .filter(|e| {
            query.is_empty()
                || e.title.to_lowercase().contains(&query)
                || e.slug.to_lowercase().contains(&query)
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EntryCounts {
    pub total: usize,
    pub published: usize,
    pub drafts: usize,
}

impl EntryCounts {
    pub fn from_entries(entries: &[Entry]) -> Self {
        let total = entries.len();
        let published = entries.iter().filter(|e| e.published).count();
        Self {
            total,
            published,
            drafts: total - published,
        }
    }
}
