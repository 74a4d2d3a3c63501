use blogdeck_engine::Action;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, Frame};

use super::is_back;
use crate::presentation::view_models::PostViewScreenViewModel;
use crate::presentation::views::tui::PostViewScreenView;

pub struct PostViewComponent {
    scroll: u16,
}

impl PostViewComponent {
    pub const HINTS: &'static str =
        "j/k scroll · e edit · p publish/unpublish · d delete · r reload · Esc back · q quit";
    pub const CONFIRM_HINTS: &'static str = "y confirm delete · n cancel";

    pub fn new() -> Self {
        Self { scroll: 0 }
    }

    pub fn reset(&mut self) {
        self.scroll = 0;
    }

    pub fn handle_input(&mut self, key: KeyEvent, confirming_delete: bool) -> Option<Action> {
        if confirming_delete {
            return match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => Some(Action::ConfirmDelete),
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    Some(Action::CancelDelete)
                }
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll = self.scroll.saturating_add(1);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll = self.scroll.saturating_sub(1);
                None
            }
            KeyCode::Char('e') => Some(Action::EditCurrent),
            KeyCode::Char('p') => Some(Action::TogglePublishCurrent),
            KeyCode::Char('d') => Some(Action::RequestDelete),
            KeyCode::Char('r') => Some(Action::ReloadCurrent),
            _ if is_back(&key) => Some(Action::Back),
            _ => None,
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, data: &PostViewScreenViewModel) {
        // Index safety: never scroll past the last content line
        let lines = data.post.content.lines().count() as u16;
        self.scroll = self.scroll.min(lines.saturating_sub(1));

        f.render_widget(PostViewScreenView::new(data, self.scroll), area);
    }
}

impl Default for PostViewComponent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_confirmation_captures_keys() {
        let mut view = PostViewComponent::new();
        assert_eq!(
            view.handle_input(key(KeyCode::Char('e')), true),
            None
        );
        assert_eq!(
            view.handle_input(key(KeyCode::Esc), true),
            Some(Action::CancelDelete)
        );
        assert_eq!(
            view.handle_input(key(KeyCode::Char('y')), true),
            Some(Action::ConfirmDelete)
        );
    }

    #[test]
    fn test_actions_outside_confirmation() {
        let mut view = PostViewComponent::new();
        assert_eq!(
            view.handle_input(key(KeyCode::Char('d')), false),
            Some(Action::RequestDelete)
        );
        assert_eq!(
            view.handle_input(key(KeyCode::Esc), false),
            Some(Action::Back)
        );
    }
}
