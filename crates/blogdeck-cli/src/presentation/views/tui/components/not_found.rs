use blogdeck_engine::Action;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, Frame};

use super::is_back;
use crate::presentation::views::tui::NotFoundView;

/// Fallback for view/edit screens without a post
pub struct NotFoundComponent;

impl NotFoundComponent {
    pub const HINTS: &'static str = "Enter back to posts · q quit";

    pub fn new() -> Self {
        Self
    }

    pub fn handle_input(&mut self, key: KeyEvent) -> Option<Action> {
        (key.code == KeyCode::Enter || is_back(&key)).then_some(Action::Back)
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, message: &str) {
        f.render_widget(NotFoundView::new(message), area);
    }
}

impl Default for NotFoundComponent {
    fn default() -> Self {
        Self::new()
    }
}
