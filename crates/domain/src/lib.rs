mod commands;
mod events;
mod models;
pub mod protocol;

pub use commands::{FeedbackAction, FIELD_ARTICLE_ID, FIELD_COMMENT_ID};
pub use events::Notice;
pub use models::FormData;
