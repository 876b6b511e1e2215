pub mod comment;
pub mod entry;
pub mod journal;
pub mod stance;
