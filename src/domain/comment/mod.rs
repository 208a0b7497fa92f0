mod comment;
mod sanitize;
mod types;

pub use comment::{Comment, CommentDraft};
pub use sanitize::strip_html_tags;
pub use types::*;
