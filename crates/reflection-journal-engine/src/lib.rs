pub mod comments;
pub mod io;
pub mod models;
pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use comments::{
    facets::{ClassifiedComment, CommentView, Facet, FacetCounts, GLANCE_SIZE, Glance},
    moderation::{EntryCounts, EntryStatus, ModerationItem, ModerationTab},
    validation::{
        CommentDraft, LastSubmissionStore, MemoryLastSubmission, Rejection, SubmissionValidator,
        ValidationRules,
    },
};
pub use io::{FileLastSubmission, IoError, load_journal};
pub use models::{
    comment::{Comment, NewComment},
    entry::{Entry, excerpt, read_minutes, slugify},
    journal::Journal,
    stance::{Stance, UnknownStance},
};
pub use parsing::{
    blocks::{EntryBlock, Section},
    inline::InlineSpan,
    parse_entry,
    scripture::{ScriptureLookup, ScriptureMatch, find_references},
    stance::{StanceClassification, parse_stance},
};
