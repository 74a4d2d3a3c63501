//! Post list component
//!
//! Owns the list selection and the in-progress search input.

use blogdeck_engine::{Action, ViewMode};
use blogdeck_types::Post;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, widgets::ListState, Frame};

use super::is_back;
use crate::presentation::view_models::PostListScreenViewModel;
use crate::presentation::views::tui::PostListScreenView;

pub struct PostListComponent {
    state: ListState,
    /// `Some` while the search box has focus
    search_input: Option<String>,
}

impl PostListComponent {
    pub const HINTS: &'static str =
        "j/k move · Enter open · / search · f field · a show all · n new · Esc back · q quit";
    pub const SEARCH_HINTS: &'static str = "type to search · Enter run · Esc stop editing";

    pub fn new() -> Self {
        Self {
            state: ListState::default(),
            search_input: None,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.search_input.is_some()
    }

    pub fn hints(&self) -> &'static str {
        if self.is_editing() {
            Self::SEARCH_HINTS
        } else {
            Self::HINTS
        }
    }

    pub fn handle_input(&mut self, key: KeyEvent, posts: &[Post], term: &str) -> Option<Action> {
        if let Some(input) = self.search_input.as_mut() {
            return match key.code {
                KeyCode::Char(c) => {
                    input.push(c);
                    Some(Action::SetSearchTerm(input.clone()))
                }
                KeyCode::Backspace => {
                    input.pop();
                    Some(Action::SetSearchTerm(input.clone()))
                }
                KeyCode::Enter => {
                    self.search_input = None;
                    self.state.select(Some(0));
                    Some(Action::Search)
                }
                KeyCode::Esc => {
                    self.search_input = None;
                    None
                }
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.next(posts.len());
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.previous();
                None
            }
            KeyCode::Enter => {
                let selected = self.state.selected()?;
                posts.get(selected)?.id.map(Action::SelectPost)
            }
            KeyCode::Char('/') => {
                self.search_input = Some(term.to_string());
                None
            }
            KeyCode::Char('f') => Some(Action::CycleSearchField),
            KeyCode::Char('a') => {
                self.state.select(Some(0));
                Some(Action::ShowAll)
            }
            KeyCode::Char('n') => Some(Action::Navigate(ViewMode::Create)),
            KeyCode::Char('r') => Some(Action::Navigate(ViewMode::Posts)),
            _ if is_back(&key) => Some(Action::Back),
            _ => None,
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, data: &PostListScreenViewModel) {
        // Index safety: results change under the cursor after search/reload
        let len = data.rows.len();
        match self.state.selected() {
            _ if len == 0 => self.state.select(None),
            Some(i) if i >= len => self.state.select(Some(len - 1)),
            None => self.state.select(Some(0)),
            Some(_) => {}
        }

        f.render_stateful_widget(PostListScreenView::new(data), area, &mut self.state);
    }

    fn next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let next = match self.state.selected() {
            Some(i) => (i + 1).min(len - 1),
            None => 0,
        };
        self.state.select(Some(next));
    }

    fn previous(&mut self) {
        let prev = self.state.selected().map_or(0, |i| i.saturating_sub(1));
        self.state.select(Some(prev));
    }
}

impl Default for PostListComponent {
    fn default() -> Self {
        Self::new()
    }
}
