// NOTE: postdeck Architecture
//
// Handler -> Presenter -> ViewModel -> View/Renderer
// - Handlers own the list session and decide when to refresh
// - Presenters are pure functions from controller state to ViewModels
// - Views only map ViewModels to ratatui widgets or console text
// - Nothing below the handler touches the network or mutates list state

mod args;
mod commands;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands};
pub use commands::run;
