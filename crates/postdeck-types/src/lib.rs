pub mod post;

pub use post::{Post, PostId, post_ids};
