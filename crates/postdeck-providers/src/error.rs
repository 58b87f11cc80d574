use std::fmt;

/// Result type for postdeck-providers operations
pub type Result<T> = std::result::Result<T, FetchError>;

/// The single failure kind of a post fetch.
///
/// Transport failures, non-success statuses and undecodable bodies all
/// collapse into this type. The message is kept for diagnostics only.
#[derive(Debug)]
pub struct FetchError {
    endpoint: String,
    detail: String,
    source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl FetchError {
    pub fn new(endpoint: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            detail: detail.into(),
            source: None,
        }
    }

    pub fn with_source(
        mut self,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Failed to fetch posts from {}: {}",
            self.endpoint, self.detail
        )
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|err| err.as_ref() as &(dyn std::error::Error + 'static))
    }
}
