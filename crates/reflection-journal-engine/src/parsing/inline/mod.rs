//! # Inline Rendering
//!
//! Splits a single line into typed spans.
//!
//! ## Modules
//!
//! - **`types`**: `InlineSpan` enum (Text, Bold, ScriptureLink)
//! - **`kinds`**: inline types that own their delimiters (Bold)
//! - **`cursor`**: byte cursor used by the bold splitter
//! - **`parser`**: `parse_inline()` and `link_scripture()` entry points
//!
//! ## Precedence
//!
//! Scripture references are matched on the raw line first. Bold splitting
//! only ever sees the plain runs between references, so a `**` pair that
//! straddles a reference is left as literal text.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::{link_scripture, parse_inline};
pub use types::{InlineSpan, to_source};
