use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// NOTE: Post records are owned by the upstream feed.
//
// - Decoded exactly as served; no validation, reordering or deduplication
// - `id` is the only identity key (rendering and expansion membership)
// - Everything else is display-only
// - Unknown upstream fields are ignored, missing required fields fail decoding

/// Identity key of a post within a single fetch result
pub type PostId = u64;

/// A single post as returned by the feed endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    #[serde(rename = "userId")]
    pub user_id: u64,
    pub title: String,
    pub body: String,
}

impl Post {
    pub fn new(id: PostId, user_id: u64, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id,
            user_id,
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Collect the identity keys of a post list
pub fn post_ids(posts: &[Post]) -> HashSet<PostId> {
    posts.iter().map(|p| p.id).collect()
}
