//! Fixtures for sample post data.

use postdeck_types::Post;

/// The two-post feed used throughout the expansion scenarios.
pub fn two_posts() -> Vec<Post> {
    vec![Post::new(1, 1, "A", "a"), Post::new(2, 2, "B", "b")]
}

/// `count` posts with ids `1..=count`, spread over users of ten posts each.
pub fn numbered_posts(count: u64) -> Vec<Post> {
    (1..=count)
        .map(|id| {
            Post::new(
                id,
                (id - 1) / 10 + 1,
                format!("title {}", id),
                format!("body {}", id),
            )
        })
        .collect()
}

/// Encode posts the way the upstream feed does (`userId` key).
pub fn posts_json(posts: &[Post]) -> String {
    serde_json::to_string(posts).expect("posts always serialize")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_posts_user_grouping() {
        let posts = numbered_posts(21);
        assert_eq!(posts.len(), 21);
        assert_eq!(posts[0].user_id, 1);
        assert_eq!(posts[9].user_id, 1);
        assert_eq!(posts[10].user_id, 2);
        assert_eq!(posts[20].user_id, 3);
    }

    #[test]
    fn test_posts_json_uses_upstream_keys() {
        let json = posts_json(&two_posts());
        assert!(json.contains("\"userId\":1"));
        assert!(!json.contains("user_id"));
    }
}
