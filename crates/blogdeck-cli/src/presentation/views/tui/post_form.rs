use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::presentation::view_models::{FormFieldViewModel, PostFormViewModel};

pub struct PostFormView<'a> {
    model: &'a PostFormViewModel,
}

impl<'a> PostFormView<'a> {
    pub fn new(model: &'a PostFormViewModel) -> Self {
        Self { model }
    }

    fn field_height(field: &FormFieldViewModel) -> Constraint {
        if field.multiline {
            Constraint::Min(6)
        } else {
            Constraint::Length(if field.error.is_some() { 4 } else { 3 })
        }
    }

    fn render_field(field: &FormFieldViewModel, area: Rect, buf: &mut Buffer) {
        let border = match (&field.error, field.focused) {
            (Some(_), _) => Style::default().fg(Color::Red),
            (None, true) => Style::default().fg(Color::Yellow),
            (None, false) => Style::default().fg(Color::DarkGray),
        };
        let counter = match field.limit {
            Some(limit) => format!(" {}/{} ", field.length, limit),
            None => String::new(),
        };
        let block = Block::default()
            .title(format!(" {} ", field.label))
            .title_bottom(Line::from(counter).right_aligned())
            .borders(Borders::ALL)
            .border_style(border);
        let inner = block.inner(area);
        block.render(area, buf);

        let cursor = if field.focused { "_" } else { "" };
        let mut lines: Vec<Line> = format!("{}{}", field.value, cursor)
            .split('\n')
            .map(|l| Line::raw(l.to_string()))
            .collect();
        if let Some(error) = &field.error {
            lines.push(Line::styled(error.clone(), Style::default().fg(Color::Red)));
        }

        // Keep the cursor line visible for long bodies
        let overflow = (lines.len() as u16).saturating_sub(inner.height);
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((overflow, 0))
            .render(inner, buf);
    }
}

impl Widget for PostFormView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(format!(" {} ", self.model.heading))
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let mut constraints = vec![Constraint::Length(2)];
        constraints.extend(self.model.fields.iter().map(Self::field_height));
        constraints.push(Constraint::Length(2));
        let chunks = Layout::vertical(constraints).split(inner);

        Paragraph::new(Line::from(vec![
            Span::styled(
                format!("Step {} of {}: ", self.model.step, self.model.step_count),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(
                self.model.step_title,
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]))
        .render(chunks[0], buf);

        for (i, field) in self.model.fields.iter().enumerate() {
            Self::render_field(field, chunks[i + 1], buf);
        }

        let mut footer = Vec::new();
        if let Some(published) = self.model.published {
            let mark = if published { "[x]" } else { "[ ]" };
            footer.push(Span::raw(format!("{} Publish immediately   ", mark)));
        }
        for error in &self.model.other_step_errors {
            footer.push(Span::styled(
                format!("{}   ", error),
                Style::default().fg(Color::Red),
            ));
        }
        if self.model.submitting {
            footer.push(Span::styled("Saving...", Style::default().fg(Color::Yellow)));
        } else if let Some(error) = &self.model.submit_error {
            footer.push(Span::styled(error.clone(), Style::default().fg(Color::Red)));
        }
        if let Some(last) = chunks.last() {
            Paragraph::new(Line::from(footer)).render(*last, buf);
        }
    }
}
