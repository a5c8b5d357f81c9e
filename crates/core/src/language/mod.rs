pub mod comment_style;

pub use comment_style::CommentStyle;
