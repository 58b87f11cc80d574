use futures::FutureExt;
use futures::future::BoxFuture;
use postdeck_types::Post;

use crate::error::{FetchError, Result};
use crate::traits::PostSource;

/// Feed served when no endpoint is configured
pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/posts";

/// Reads the post list with a single `GET` against a fixed URL.
///
/// No query parameters, custom headers or authentication are sent, and no
/// timeout is configured on the client.
#[derive(Debug, Clone)]
pub struct HttpPostSource {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpPostSource {
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let endpoint = endpoint.into();
        let client = reqwest::Client::builder().build().map_err(|e| {
            FetchError::new(&endpoint, "failed to build HTTP client").with_source(e)
        })?;
        Ok(Self { endpoint, client })
    }

    /// Reuse an existing client (connection pool shared with the caller)
    pub fn with_client(endpoint: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            endpoint: endpoint.into(),
            client,
        }
    }

    async fn get_posts(&self) -> Result<Vec<Post>> {
        tracing::debug!(endpoint = %self.endpoint, "requesting posts");

        let resp = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| FetchError::new(&self.endpoint, "request failed").with_source(e))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::new(&self.endpoint, format!("HTTP {}", status)));
        }

        let bytes = resp
            .bytes()
            .await
            .map_err(|e| FetchError::new(&self.endpoint, "failed to read body").with_source(e))?;

        let posts: Vec<Post> = serde_json::from_slice(&bytes)
            .map_err(|e| FetchError::new(&self.endpoint, "unexpected response shape").with_source(e))?;

        tracing::debug!(endpoint = %self.endpoint, count = posts.len(), "posts decoded");
        Ok(posts)
    }
}

impl PostSource for HttpPostSource {
    fn describe(&self) -> String {
        self.endpoint.clone()
    }

    fn fetch_posts(&self) -> BoxFuture<'_, Result<Vec<Post>>> {
        self.get_posts().boxed()
    }
}
