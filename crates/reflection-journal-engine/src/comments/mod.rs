//! # Comments
//!
//! - **`facets`**: stance classification, per-facet counts, filtering and the
//!   "at a glance" preview
//! - **`validation`**: the advisory submission gate and its last-submission store
//! - **`moderation`**: owner-side queue ordering, search and dashboard filters

pub mod facets;
pub mod moderation;
pub mod validation;
