use futures::future::BoxFuture;
use postdeck_types::Post;

use crate::Result;

/// Post retrieval
///
/// Responsibilities:
/// - Perform exactly one read per call (no retry, no caching)
/// - Return the decoded list untouched, or a single `FetchError`
/// - Hold no state between calls, so repeated calls are safe
pub trait PostSource: Send + Sync {
    /// Short label for logs and the status bar
    fn describe(&self) -> String;

    /// Fetch the full post list
    fn fetch_posts(&self) -> BoxFuture<'_, Result<Vec<Post>>>;
}
