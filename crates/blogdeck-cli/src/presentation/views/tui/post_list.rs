use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, List, ListItem, ListState, Paragraph, StatefulWidget, Widget,
    },
};

use crate::presentation::formatters::{date_part, truncate};
use crate::presentation::view_models::{PostListScreenViewModel, PostSummaryViewModel};

pub struct PostListScreenView<'a> {
    model: &'a PostListScreenViewModel,
}

impl<'a> PostListScreenView<'a> {
    pub fn new(model: &'a PostListScreenViewModel) -> Self {
        Self { model }
    }

    fn search_line(&self) -> Line<'a> {
        let label_style = if self.model.editing_search {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let cursor = if self.model.editing_search { "_" } else { "" };

        Line::from(vec![
            Span::styled(format!("Search [{}]: ", self.model.search_field), label_style),
            Span::raw(format!("{}{}", self.model.search_term, cursor)),
        ])
    }

    fn item(post: &'a PostSummaryViewModel) -> ListItem<'a> {
        let id = post.id.map(|id| format!("#{}", id)).unwrap_or_default();
        let author = &post.author;
        let created = date_part(post.created_at.as_deref());

        let header = Line::from(vec![
            Span::styled(format!("{:<5}", id), Style::default().fg(Color::DarkGray)),
            Span::styled(
                truncate(&post.title, 60),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]);
        let meta = Line::styled(
            format!(
                "      {} · {} views · {}{}",
                author,
                post.view_count,
                created,
                if post.published { "" } else { " · draft" }
            ),
            Style::default().fg(Color::DarkGray),
        );

        let mut lines = vec![header, meta];
        if let Some(summary) = &post.summary {
            lines.push(Line::raw(format!("      {}", truncate(summary, 80))));
        }
        ListItem::new(lines)
    }

    fn render_empty(&self, area: Rect, buf: &mut Buffer) {
        let hint = if self.model.search_term.trim().is_empty() {
            "Press n to create one."
        } else {
            "Try a different search term."
        };
        Paragraph::new(vec![
            Line::raw(""),
            Line::raw("No posts found"),
            Line::styled(hint, Style::default().fg(Color::DarkGray)),
        ])
        .alignment(Alignment::Center)
        .render(area, buf);
    }
}

impl StatefulWidget for PostListScreenView<'_> {
    type State = ListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut ListState) {
        let block = Block::default()
            .title(format!(" Posts ({}) ", self.model.rows.len()))
            .borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).split(inner);
        Paragraph::new(self.search_line()).render(chunks[0], buf);

        if self.model.loading && self.model.rows.is_empty() {
            Paragraph::new("Loading posts...")
                .alignment(Alignment::Center)
                .render(chunks[1], buf);
            return;
        }
        if self.model.rows.is_empty() {
            self.render_empty(chunks[1], buf);
            return;
        }

        let items: Vec<ListItem> = self.model.rows.iter().map(Self::item).collect();
        let list = List::new(items)
            .highlight_style(Style::default().bg(Color::DarkGray))
            .highlight_symbol("▶ ");
        StatefulWidget::render(list, chunks[1], buf, state);
    }
}
