//! # Inline Kinds
//!
//! Inline types that own their syntax delimiters. The parser reads these
//! constants and never hardcodes `**` itself.

pub mod bold;

pub use bold::Bold;
