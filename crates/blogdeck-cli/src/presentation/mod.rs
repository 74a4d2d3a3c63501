//! # Presentation Layer
//!
//! Everything the user sees, for both one-shot commands and the interactive
//! UI. Follows MVVM with stateful components for the TUI.
//!
//! ## Data flow
//!
//! ### One-shot commands (text / JSON):
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ ConsoleRenderer ] ==(json)==> serde_json
//!                                                                          ==(text)==> [ View ] (fmt::Display)
//! ```
//!
//! ### Interactive UI:
//!
//! ```text
//! [ ViewController ] --> [ Presenter ] --> [ ViewModel ] --> [ TuiRenderer (router) ]
//!        ^                                                          |
//!        |                                                          v
//!        +------------------ engine Action <------------ [ Component ] <-- key
//!                                                                |
//!                                                                v
//!                                                        [ View ] (Widget)
//! ```
//!
//! ## Rules
//!
//! 1. **ViewModels hold raw data.** Counts are numbers, timestamps are ISO
//!    strings, percentages are `f64`. JSON output is the full ViewModel.
//! 2. **Presenters decide, views format.** When to show a tip or which badge
//!    to use is a presenter concern; column widths, colors and truncation
//!    belong to views and `formatters`.
//! 3. **Components own UI state.** Selection, focus and scroll never enter a
//!    ViewModel. Components clamp indices against the data before drawing.
//! 4. **Domain changes go through the engine.** Components return
//!    [`blogdeck_engine::Action`]s; only the form component edits its
//!    `PostForm` directly, since keystrokes are local draft state.
//!
//! ## Where does code go?
//!
//! | If you need to... | Go to... |
//! |-------------------|----------|
//! | Add a field to JSON output | `view_models/` |
//! | Compute a total or pick a hint | `presenters/` |
//! | Change table layout or colors | `views/` |
//! | Handle a key in the TUI | `views/tui/components/` |
//! | Add a screen | component + `renderers/tui/app.rs` |

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer, TuiRenderer};
pub use view_models::{CommandResultViewModel, CreateView, OutputFormat};
