use blogdeck_engine::{Action, ViewMode};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, Frame};

use crate::presentation::views::tui::home::{HomeView, MENU};

const TARGETS: [ViewMode; 3] = [ViewMode::Posts, ViewMode::Create, ViewMode::Analytics];

pub struct HomeComponent {
    selected: usize,
}

impl HomeComponent {
    pub const HINTS: &'static str = "j/k move · Enter open · p posts · n new · a analytics · q quit";

    pub fn new() -> Self {
        Self { selected: 0 }
    }

    pub fn handle_input(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.selected = (self.selected + 1).min(MENU.len() - 1);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            KeyCode::Enter => Some(Action::Navigate(TARGETS[self.selected])),
            KeyCode::Char('p') => Some(Action::Navigate(ViewMode::Posts)),
            KeyCode::Char('n') => Some(Action::Navigate(ViewMode::Create)),
            KeyCode::Char('a') => Some(Action::Navigate(ViewMode::Analytics)),
            _ => None,
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        f.render_widget(HomeView::new(self.selected), area);
    }
}

impl Default for HomeComponent {
    fn default() -> Self {
        Self::new()
    }
}
