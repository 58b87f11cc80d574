// Error types
pub mod error;

// Trait-based architecture (public API)
pub mod traits;

// Source implementations
pub mod http;
pub mod fixed;

pub use error::{FetchError, Result};
pub use fixed::{StaticPostSource, sample_posts};
pub use http::{DEFAULT_ENDPOINT, HttpPostSource};
pub use traits::PostSource;
