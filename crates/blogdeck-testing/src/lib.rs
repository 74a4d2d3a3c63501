//! Testing infrastructure for blogdeck integration tests.
//!
//! This crate provides utilities for writing robust integration tests:
//! - `TestWorld`: isolated config/data directories and CLI execution
//! - `StubServer`: the blog REST API served over an in-memory backend
//! - `assertions`: checks against the CLI's JSON output
//! - `fixtures`: sample posts

pub mod assertions;
pub mod fixtures;
pub mod stub;
pub mod world;

pub use stub::StubServer;
pub use world::{CliResult, TestWorld};
