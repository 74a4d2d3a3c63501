use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::StatusBarViewModel;

use super::status_level_to_color;

pub struct StatusBarView<'a> {
    model: &'a StatusBarViewModel,
}

impl<'a> StatusBarView<'a> {
    pub fn new(model: &'a StatusBarViewModel) -> Self {
        Self { model }
    }
}

impl Widget for StatusBarView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::styled(
            format!(" {} ", self.model.mode.to_uppercase()),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )];

        if self.model.busy {
            spans.push(Span::styled(" Loading... ", Style::default().fg(Color::Yellow)));
        } else if let Some((level, message)) = &self.model.notice {
            spans.push(Span::styled(
                format!(" {} ", message),
                Style::default().fg(status_level_to_color(*level)),
            ));
        }

        let lines = vec![
            Line::from(spans),
            Line::styled(
                format!(" {}", self.model.hints),
                Style::default().fg(Color::DarkGray),
            ),
        ];

        Paragraph::new(lines)
            .block(Block::default().borders(Borders::TOP))
            .render(area, buf);
    }
}
