use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub const MENU: [(&str, &str); 3] = [
    ("Browse posts", "View, search and edit published posts"),
    ("Create post", "Write a new post in three steps"),
    ("Analytics", "Post counts and view statistics"),
];

pub struct HomeView {
    selected: usize,
}

impl HomeView {
    pub fn new(selected: usize) -> Self {
        Self { selected }
    }
}

impl Widget for HomeView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Blog Manager ")
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).split(inner);

        Paragraph::new("Manage your posts from the terminal")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray))
            .render(chunks[0], buf);

        let mut lines = Vec::with_capacity(MENU.len() * 3);
        for (i, (label, detail)) in MENU.iter().enumerate() {
            let (marker, style) = if i == self.selected {
                (
                    "▶ ",
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                )
            } else {
                ("  ", Style::default())
            };
            lines.push(Line::from(vec![
                Span::raw(marker),
                Span::styled(*label, style),
            ]));
            lines.push(Line::from(Span::styled(
                format!("    {}", detail),
                Style::default().fg(Color::DarkGray),
            )));
            lines.push(Line::raw(""));
        }

        Paragraph::new(lines).render(chunks[1], buf);
    }
}
