//! Testing infrastructure for postdeck tests.
//!
//! This crate provides utilities for writing robust tests:
//! - `TestWorld`: Fluent interface for running the CLI in isolation
//! - `fixtures`: Sample posts and their JSON encoding
//! - `server`: A local HTTP endpoint serving canned responses
//! - `sources`: Scripted and gated `PostSource` doubles

pub mod fixtures;
pub mod server;
pub mod sources;
pub mod world;

pub use server::TestServer;
pub use world::TestWorld;
