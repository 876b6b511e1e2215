//! # Entry Body Structure
//!
//! Two-phase, single-pass structuring of an entry body.
//!
//! 1. **Line Classification** (`classify`): each physical line becomes a
//!    `LineClass` on local facts only (heading phrase, bullet marker, blank).
//! 2. **Block Construction** (`builder`): a `BlockBuilder` groups consecutive
//!    bullet lines into one list and renders inline content.
//!
//! This is not Markdown: no nesting, no multi-line paragraphs,
//! no code spans. Every non-bullet, non-heading, non-blank line is its own
//! paragraph.

pub mod builder;
pub mod classify;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, classify_line};
pub use types::{EntryBlock, Section};
