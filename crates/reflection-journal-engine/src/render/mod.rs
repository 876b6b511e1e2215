pub mod html;

pub use html::{blocks_to_html, comment_body_to_html, inline_to_html};
