use futures::future::{self, BoxFuture, FutureExt};
use postdeck_types::Post;

use crate::error::Result;
use crate::traits::PostSource;

/// Serves a fixed post list. Backs `browse --offline-sample`.
#[derive(Debug, Clone, Default)]
pub struct StaticPostSource {
    posts: Vec<Post>,
}

impl StaticPostSource {
    pub fn new(posts: Vec<Post>) -> Self {
        Self { posts }
    }

    pub fn sample() -> Self {
        Self::new(sample_posts())
    }
}

impl PostSource for StaticPostSource {
    fn describe(&self) -> String {
        "built-in sample".to_string()
    }

    fn fetch_posts(&self) -> BoxFuture<'_, Result<Vec<Post>>> {
        future::ready(Ok(self.posts.clone())).boxed()
    }
}

/// A handful of posts in the upstream feed's shape
pub fn sample_posts() -> Vec<Post> {
    vec![
        Post::new(
            1,
            1,
            "sunt aut facere repellat provident occaecati excepturi optio reprehenderit",
            "quia et suscipit\nsuscipit recusandae consequuntur expedita et cum\nreprehenderit molestiae ut ut quas totam\nnostrum rerum est autem sunt rem eveniet architecto",
        ),
        Post::new(
            2,
            1,
            "qui est esse",
            "est rerum tempore vitae\nsequi sint nihil reprehenderit dolor beatae ea dolores neque\nfugiat blanditiis voluptate porro vel nihil molestiae ut reiciendis\nqui aperiam non debitis possimus qui neque nisi nulla",
        ),
        Post::new(
            3,
            1,
            "ea molestias quasi exercitationem repellat qui ipsa sit aut",
            "et iusto sed quo iure\nvoluptatem occaecati omnis eligendi aut ad\nvoluptatem doloribus vel accusantium quis pariatur\nmolestiae porro eius odio et labore et velit aut",
        ),
        Post::new(
            11,
            2,
            "et ea vero quia laudantium autem",
            "delectus reiciendis molestiae occaecati non minima eveniet qui voluptatibus\naccusamus in eum beatae sit\nvel qui neque voluptates ut commodi qui incidunt\nut animi commodi",
        ),
        Post::new(
            21,
            3,
            "asperiores ea ipsam voluptatibus modi minima quia sint",
            "repellat aliquid praesentium dolorem quo\nsed totam minus non itaque\nnihil labore molestiae sunt dolor eveniet hic recusandae veniam\ntempora et tenetur expedita sunt",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sample_ids_are_unique() {
        let posts = sample_posts();
        let ids: HashSet<_> = posts.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), posts.len());
    }

    #[tokio::test]
    async fn test_static_source_returns_its_posts() {
        let source = StaticPostSource::new(vec![Post::new(5, 1, "t", "b")]);

        let posts = source.fetch_posts().await.unwrap();
        assert_eq!(posts, vec![Post::new(5, 1, "t", "b")]);

        // Repeated calls are safe
        let again = source.fetch_posts().await.unwrap();
        assert_eq!(again.len(), 1);
    }
}
