// NOTE: blogdeck Architecture Rationale
//
// Why a controller crate between the client and the terminal?
// - The TUI and the one-shot commands share the same transition rules
// - Screen state is a tagged enum, so each screen only carries what it needs
// - Tests drive the controller against the in-memory backend without a terminal
//
// Why fetch-on-view only?
// - GET /posts/{id}/view increments the view count on the server
// - Lists and searches show a snapshot; only opening a post counts a view
// - The viewer fetches once per target, so redraws never inflate counts
//
// Why no retries?
// - Every failure becomes a notice or an `Error:` line
// - The user decides when to try again

mod args;
mod commands;
mod handlers;
mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands, ConfigCommand};
pub use commands::run;
