mod payload;
mod post;
mod search;

pub use payload::{ApiErrorBody, NewPost, PostPatch};
pub use post::{Post, PostId};
pub use search::SearchField;
