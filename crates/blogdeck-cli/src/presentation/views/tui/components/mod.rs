//! Stateful TUI components: private UI state, key handling, index safety.

mod analytics;
mod home;
mod not_found;
mod post_form;
mod post_list;
mod post_view;

pub use analytics::AnalyticsComponent;
pub use home::HomeComponent;
pub use not_found::NotFoundComponent;
pub use post_form::PostFormComponent;
pub use post_list::PostListComponent;
pub use post_view::PostViewComponent;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub(crate) fn is_back(key: &KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Esc | KeyCode::Char('b') | KeyCode::Backspace
    )
}

pub(crate) fn ctrl(key: &KeyEvent, c: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(c)
}
