use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::presentation::formatters::{date_part, status_label};
use crate::presentation::view_models::PostViewScreenViewModel;

pub struct PostViewScreenView<'a> {
    model: &'a PostViewScreenViewModel,
    scroll: u16,
}

impl<'a> PostViewScreenView<'a> {
    pub fn new(model: &'a PostViewScreenViewModel, scroll: u16) -> Self {
        Self { model, scroll }
    }

    fn header(&self) -> Vec<Line<'a>> {
        let post = &self.model.post;
        let dim = Style::default().fg(Color::DarkGray);
        let status_color = if post.published { Color::Green } else { Color::Yellow };

        let mut lines = vec![
            Line::styled(
                post.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Line::from(vec![
                Span::styled(
                    format!("by {} · ", post.author),
                    dim,
                ),
                Span::styled(
                    format!("{} views", post.view_count),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(
                    format!(" · {} · ", date_part(post.created_at.as_deref())),
                    dim,
                ),
                Span::styled(
                    status_label(post.published),
                    Style::default().fg(status_color),
                ),
            ]),
        ];
        if !post.tags.is_empty() {
            lines.push(Line::styled(
                post.tags
                    .iter()
                    .map(|t| format!("#{}", t))
                    .collect::<Vec<_>>()
                    .join(" "),
                Style::default().fg(Color::Magenta),
            ));
        }
        if let Some(summary) = &post.summary {
            lines.push(Line::styled(
                summary.clone(),
                Style::default().add_modifier(Modifier::ITALIC),
            ));
        }
        lines
    }

    fn render_confirm(area: Rect, buf: &mut Buffer) {
        let width = area.width.min(44);
        let popup = Rect {
            x: area.x + (area.width.saturating_sub(width)) / 2,
            y: area.y + area.height / 3,
            width,
            height: 5.min(area.height),
        };
        Clear.render(popup, buf);
        Paragraph::new(vec![
            Line::raw("Are you sure you want to delete this post?"),
            Line::raw(""),
            Line::styled("[y] delete   [n] cancel", Style::default().fg(Color::Yellow)),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Delete ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
        .render(popup, buf);
    }
}

impl Widget for PostViewScreenView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(
                self.model
                    .post
                    .id
                    .map(|id| format!(" Post #{} ", id))
                    .unwrap_or_else(|| " Post ".to_string()),
            )
            .borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let header = self.header();
        let header_height = header.len() as u16 + 1;
        let chunks =
            Layout::vertical([Constraint::Length(header_height), Constraint::Min(0)]).split(inner);

        Paragraph::new(header)
            .block(Block::default().borders(Borders::BOTTOM))
            .render(chunks[0], buf);

        Paragraph::new(self.model.post.content.as_str())
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .render(chunks[1], buf);

        if self.model.confirming_delete {
            Self::render_confirm(area, buf);
        }
    }
}
