//! Create/edit wizard component
//!
//! Focus is per step and resets whenever the step changes.

use blogdeck_engine::{Action, Field, FormStep, PostForm};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};

use super::ctrl;
use crate::presentation::view_models::PostFormViewModel;
use crate::presentation::views::tui::PostFormView;

pub struct PostFormComponent {
    focus: usize,
    step: FormStep,
}

impl PostFormComponent {
    pub const HINTS: &'static str =
        "Tab next field · PgDn/PgUp step · Ctrl+T publish · Ctrl+S save · Esc cancel";

    pub fn new() -> Self {
        Self {
            focus: 0,
            step: FormStep::default(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Focused field index for the form's current step
    pub fn focus(&mut self, step: FormStep) -> usize {
        if step != self.step {
            self.step = step;
            self.focus = 0;
        }
        self.focus
    }

    pub fn handle_input(&mut self, key: KeyEvent, form: &mut PostForm) -> Option<Action> {
        let fields = form.step().fields();
        let focus = self.focus(form.step()).min(fields.len() - 1);
        let field = fields[focus];

        if ctrl(&key, 's') {
            return Some(Action::SubmitForm);
        }
        if ctrl(&key, 't') {
            form.toggle_published();
            return None;
        }
        if ctrl(&key, 'n') {
            form.next_step();
            return None;
        }
        if ctrl(&key, 'p') {
            form.prev_step();
            return None;
        }

        match key.code {
            KeyCode::Esc => return Some(Action::Back),
            KeyCode::PageDown => form.next_step(),
            KeyCode::PageUp => form.prev_step(),
            KeyCode::Tab | KeyCode::Down => self.focus = (focus + 1) % fields.len(),
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = (focus + fields.len() - 1) % fields.len();
            }
            KeyCode::Enter if field == Field::Content => form.push_char(field, '\n'),
            KeyCode::Enter if focus + 1 < fields.len() => self.focus = focus + 1,
            KeyCode::Enter => form.next_step(),
            KeyCode::Backspace => form.pop_char(field),
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                form.push_char(field, c);
            }
            _ => {}
        }
        None
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, data: &PostFormViewModel) {
        f.render_widget(PostFormView::new(data), area);
    }
}

impl Default for PostFormComponent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(component: &mut PostFormComponent, form: &mut PostForm, text: &str) {
        for c in text.chars() {
            component.handle_input(key(KeyCode::Char(c)), form);
        }
    }

    #[test]
    fn test_typing_fills_focused_field() {
        let mut form = PostForm::create();
        let mut component = PostFormComponent::new();

        type_text(&mut component, &mut form, "Hi");
        component.handle_input(key(KeyCode::Tab), &mut form);
        type_text(&mut component, &mut form, "Ann");

        assert_eq!(form.draft().title, "Hi");
        assert_eq!(form.draft().author, "Ann");
    }

    #[test]
    fn test_enter_walks_fields_then_steps() {
        let mut form = PostForm::create();
        let mut component = PostFormComponent::new();

        component.handle_input(key(KeyCode::Enter), &mut form);
        assert_eq!(component.focus(form.step()), 1);
        component.handle_input(key(KeyCode::Enter), &mut form);
        assert_eq!(form.step(), FormStep::Details);
        assert_eq!(component.focus(form.step()), 0);

        form.next_step();
        component.handle_input(key(KeyCode::Enter), &mut form);
        assert_eq!(form.draft().content, "\n");
    }

    #[test]
    fn test_control_keys() {
        let mut form = PostForm::create();
        let mut component = PostFormComponent::new();

        let ctrl_t = KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL);
        assert!(component.handle_input(ctrl_t, &mut form).is_none());
        assert!(form.draft().published);
        assert_eq!(form.draft().title, "");

        let ctrl_s = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert_eq!(
            component.handle_input(ctrl_s, &mut form),
            Some(Action::SubmitForm)
        );
        assert_eq!(
            component.handle_input(key(KeyCode::Esc), &mut form),
            Some(Action::Back)
        );
    }
}
