use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Character budget for entry excerpts and glance previews.
pub const EXCERPT_CHARS: usize = 160;

const WORDS_PER_MINUTE: usize = 200;

/// A journal entry authored by the owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: Uuid,
    pub title: String,
    /// Public routing key. Derived from the title once, at creation.
    pub slug: String,
    pub body: String,
    #[serde(default)]
    pub published: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Entry {
    pub fn new(title: impl Into<String>, body: impl Into<String>, published: bool) -> Self {
        let title = title.into();
        Self {
            id: Uuid::new_v4(),
            slug: slugify(&title),
            title,
            body: body.into(),
            published,
            created_at: Some(Utc::now()),
        }
    }

    /// Changes the title. The slug stays what it was so existing links keep working.
    pub fn rename(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn excerpt(&self) -> String {
        excerpt(&self.body, EXCERPT_CHARS)
    }

    pub fn read_minutes(&self) -> usize {
        read_minutes(&self.body)
    }
}

/// Lowercases, drops anything outside `[a-z0-9]`, whitespace and `-`, then
/// turns each run of whitespace and hyphens into a single `-`.
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    for c in lowered.trim().chars() {
        let c = match c {
            'a'..='z' | '0'..='9' | '-' => c,
            c if c.is_whitespace() => '-',
            _ => continue,
        };
        if c == '-' && slug.ends_with('-') {
            continue;
        }
        slug.push(c);
    }
    slug
}

/// Single-line preview: whitespace collapsed, cut to `max_chars` with an ellipsis.
pub fn excerpt(body: &str, max_chars: usize) -> String {
    let clean = body.split_whitespace().collect::<Vec<_>>().join(" ");
    truncate(&clean, max_chars)
}

/// Cuts `text` to at most `max_chars` characters, the last being `…` when cut.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    out.push('…');
    out
}

/// Estimated reading time in whole minutes, never less than one.
pub fn read_minutes(body: &str) -> usize {
    let words = body.split_whitespace().count();
    words.div_ceil(WORDS_PER_MINUTE).max(1)
}
