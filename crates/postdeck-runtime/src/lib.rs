pub mod config;
pub mod controller;
pub mod error;
pub mod session;
pub mod worker;

pub use config::{Config, DEFAULT_LOG_LEVEL, resolve_config_path, resolve_endpoint, resolve_log_path};
pub use controller::{LoadState, PostListController, RefreshApplied, RefreshTicket};
pub use error::{Error, Result};
pub use session::ListSession;
pub use worker::{RefreshOutcome, RefreshWorker};
