use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{comment::Comment, entry::Entry};

/// An in-memory copy of the `entries` and `comments` tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Journal {
    #[serde(default)]
    pub entries: Vec<Entry>,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Journal {
    /// What an unauthenticated reader may select: published entries and
    /// approved comments on them.
    pub fn public_view(&self) -> Journal {
        let entries: Vec<Entry> = self
            .entries
            .iter()
            .filter(|e| e.published)
            .cloned()
            .collect();
        let comments = self
            .comments
            .iter()
            .filter(|c| c.approved && entries.iter().any(|e| e.id == c.entry_id))
            .cloned()
            .collect();
        Journal { entries, comments }
    }

    pub fn entry_by_slug(&self, slug: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.slug == slug)
    }

    pub fn entry_by_id(&self, id: Uuid) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Comments on one entry, oldest first.
    pub fn comments_for(&self, entry_id: Uuid) -> Vec<Comment> {
        let mut comments: Vec<Comment> = self
            .comments
            .iter()
            .filter(|c| c.entry_id == entry_id)
            .cloned()
            .collect();
        comments.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        comments
    }

    /// Entries newest first, as on the owner dashboard.
    pub fn entries_newest_first(&self) -> Vec<&Entry> {
        let mut entries: Vec<&Entry> = self.entries.iter().collect();
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        entries
    }
}
