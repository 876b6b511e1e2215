//! Advisory checks run before a comment is sent to the backend.
//!
//! This gate is friction for honest visitors, not a security control: the
//! backend keeps every new comment unapproved regardless of what passes here.

use std::sync::LazyLock;

use chrono::{DateTime, Duration, Utc};
use regex::Regex;
use uuid::Uuid;

use crate::{models::comment::NewComment, parsing::stance::has_stance_tag};

// Every scheme counts, so URLs run together are still counted one by one.
static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i-u)https?://").expect("link pattern is valid"));

/// Why a submission was refused. The message is shown to the visitor as is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    /// The hidden field was filled in. The message gives nothing away.
    #[error("Something went wrong. Please try again.")]
    Honeypot,
    #[error(
        "Start your comment with a tag: [Agree], [Disagree], [Question], [Insight], [Resource] or [Prayer]."
    )]
    MissingStance,
    #[error("Your comment is too short. Please write at least {min} characters.")]
    TooShort { min: usize },
    #[error("Your comment is too long. Please keep it to {max} characters.")]
    TooLong { max: usize },
    #[error("Please include no more than {max} links.")]
    TooManyLinks { max: usize },
    #[error("Please wait {remaining_secs} more seconds before commenting again.")]
    RateLimited { remaining_secs: i64 },
}

/// Thresholds applied by [`SubmissionValidator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationRules {
    /// Inclusive lower bound on trimmed length, in characters.
    pub min_chars: usize,
    /// Inclusive upper bound on trimmed length, in characters.
    pub max_chars: usize,
    pub max_links: usize,
    /// Minimum gap between two successful submissions from one client.
    pub cooldown: Duration,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            min_chars: 20,
            max_chars: 800,
            max_links: 2,
            cooldown: Duration::seconds(30),
        }
    }
}

/// Where a client keeps the time of its last successful submission.
///
/// Passed in explicitly so the cooldown never depends on hidden global state.
pub trait LastSubmissionStore {
    fn last(&self) -> Option<DateTime<Utc>>;
    fn record(&mut self, at: DateTime<Utc>);
}

/// A store that lives as long as the form that owns it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoryLastSubmission(Option<DateTime<Utc>>);

impl LastSubmissionStore for MemoryLastSubmission {
    fn last(&self) -> Option<DateTime<Utc>> {
        self.0
    }

    fn record(&mut self, at: DateTime<Utc>) {
        self.0 = Some(at);
    }
}

/// What the visitor filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentDraft<'a> {
    pub entry_id: Uuid,
    pub body: &'a str,
    pub display_name: &'a str,
    /// Value of the field hidden from humans.
    pub honeypot: &'a str,
}

#[derive(Debug, Clone, Default)]
pub struct SubmissionValidator {
    rules: ValidationRules,
}

impl SubmissionValidator {
    pub fn new(rules: ValidationRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &ValidationRules {
        &self.rules
    }

    /// Runs every check in order and stops at the first failure.
    pub fn validate(
        &self,
        draft: &CommentDraft<'_>,
        last_submission: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> Result<(), Rejection> {
        let rules = &self.rules;

        if !draft.honeypot.trim().is_empty() {
            return Err(Rejection::Honeypot);
        }
        if !has_stance_tag(draft.body) {
            return Err(Rejection::MissingStance);
        }

        let length = draft.body.trim().chars().count();
        if length < rules.min_chars {
            return Err(Rejection::TooShort {
                min: rules.min_chars,
            });
        }
        if length > rules.max_chars {
            return Err(Rejection::TooLong {
                max: rules.max_chars,
            });
        }

        if LINK.find_iter(draft.body).count() > rules.max_links {
            return Err(Rejection::TooManyLinks {
                max: rules.max_links,
            });
        }

        if let Some(last) = last_submission {
            let elapsed = now.signed_duration_since(last);
            if elapsed < rules.cooldown {
                let remaining = (rules.cooldown - elapsed).min(rules.cooldown);
                let remaining_secs = (remaining.num_milliseconds() + 999) / 1000;
                return Err(Rejection::RateLimited { remaining_secs });
            }
        }

        Ok(())
    }

    /// Validates against `store` and, when the draft passes, records `now`
    /// there and returns the payload to insert.
    pub fn submit(
        &self,
        draft: &CommentDraft<'_>,
        store: &mut impl LastSubmissionStore,
        now: DateTime<Utc>,
    ) -> Result<NewComment, Rejection> {
        if let Err(rejection) = self.validate(draft, store.last(), now) {
            log::debug!("comment rejected: {rejection:?}");
            return Err(rejection);
        }

        store.record(now);
        let display_name = draft.display_name.trim();
        Ok(NewComment {
            entry_id: draft.entry_id,
            display_name: (!display_name.is_empty()).then(|| display_name.to_string()),
            body: draft.body.to_string(),
        })
    }
}
