use blogdeck_engine::{Action, ViewMode};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, Frame};

use super::is_back;
use crate::presentation::view_models::AnalyticsScreenViewModel;
use crate::presentation::views::tui::AnalyticsScreenView;

pub struct AnalyticsComponent;

impl AnalyticsComponent {
    pub const HINTS: &'static str = "r refresh · Esc back · q quit";

    pub fn new() -> Self {
        Self
    }

    pub fn handle_input(&mut self, key: KeyEvent) -> Option<Action> {
        if key.code == KeyCode::Char('r') {
            return Some(Action::Navigate(ViewMode::Analytics));
        }
        is_back(&key).then_some(Action::Back)
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, data: &AnalyticsScreenViewModel) {
        f.render_widget(AnalyticsScreenView::new(data), area);
    }
}

impl Default for AnalyticsComponent {
    fn default() -> Self {
        Self::new()
    }
}
