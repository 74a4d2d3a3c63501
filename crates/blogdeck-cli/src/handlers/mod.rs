mod context;

pub mod analytics;
pub mod config;
pub mod create;
pub mod delete;
pub mod demo;
pub mod edit;
pub mod guidance;
pub mod list;
pub mod publish;
pub mod search;
pub mod show;
pub mod tui;

pub use context::HandlerContext;
