use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Gauge, Paragraph, Widget},
};

use crate::presentation::view_models::{AnalyticsScreenViewModel, AnalyticsViewModel};

pub struct AnalyticsScreenView<'a> {
    model: &'a AnalyticsScreenViewModel,
}

impl<'a> AnalyticsScreenView<'a> {
    pub fn new(model: &'a AnalyticsScreenViewModel) -> Self {
        Self { model }
    }

    fn card(title: &str, value: String, percent: f64, color: Color, area: Rect, buf: &mut Buffer) {
        let ratio = (percent / 100.0).clamp(0.0, 1.0);
        Gauge::default()
            .block(Block::default().title(format!(" {} ", title)).borders(Borders::ALL))
            .gauge_style(Style::default().fg(color))
            .label(value)
            .ratio(ratio)
            .render(area, buf);
    }

    fn render_ready(data: &AnalyticsViewModel, area: Rect, buf: &mut Buffer) {
        let rows = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .split(area);

        Self::card(
            "Total posts",
            data.total_posts.to_string(),
            data.progress.total_posts,
            Color::Blue,
            rows[0],
            buf,
        );
        Self::card(
            "Published",
            data.published_posts.to_string(),
            data.progress.published_posts,
            Color::Green,
            rows[1],
            buf,
        );
        Self::card(
            "Total views",
            data.total_views.to_string(),
            data.progress.total_views,
            Color::Magenta,
            rows[2],
            buf,
        );
        Self::card(
            "Avg views per post",
            data.avg_views_display.clone(),
            data.progress.avg_views,
            Color::Yellow,
            rows[3],
            buf,
        );

        Paragraph::new(Line::styled(
            format!("Drafts: {}", data.draft_posts),
            Style::default().fg(Color::Gray),
        ))
        .render(rows[4], buf);
    }
}

impl Widget for AnalyticsScreenView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Analytics ")
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        match self.model {
            AnalyticsScreenViewModel::Unavailable => {
                Paragraph::new("No analytics data. Press r to retry.")
                    .alignment(Alignment::Center)
                    .render(inner, buf);
            }
            AnalyticsScreenViewModel::Ready(data) => Self::render_ready(data, inner, buf),
        }
    }
}
