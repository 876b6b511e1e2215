use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::parsing::stance::{StanceClassification, parse_stance};

/// Name shown for comments posted without a display name.
pub const ANONYMOUS: &str = "Anonymous";

/// A stored comment row.
///
/// `body` is kept verbatim, stance tag included. Everything shown to readers
/// (badge, stripped body, links) is derived from it on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub entry_id: Uuid,
    pub body: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub approved: bool,
}

impl Comment {
    /// Splits the stance tag off the stored body.
    pub fn classify(&self) -> StanceClassification<'_> {
        parse_stance(&self.body)
    }

    pub fn display_name_or_anonymous(&self) -> &str {
        self.display_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(ANONYMOUS)
    }
}

/// Insert-ready payload for the `comments` table.
///
/// Approval and timestamp are assigned by the backend, so they are absent here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewComment {
    pub entry_id: Uuid,
    pub display_name: Option<String>,
    pub body: String,
}
