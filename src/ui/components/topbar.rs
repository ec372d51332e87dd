use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Paragraph, Widget},
};

use crate::util::colors;

/// Shell header: clock on the left, portal title centered, status or the
/// active wallpaper name on the right.
pub struct TopBar<'a> {
    clock: &'a str,
    right: Line<'a>,
}

impl<'a> TopBar<'a> {
    pub fn new(clock: &'a str, status: Option<&'a str>, wallpaper: Option<&'a str>) -> Self {
        let right = match (status, wallpaper) {
            (Some(status), _) => Line::styled(status.to_string(), Style::default().fg(colors::ACCENT)),
            (None, Some(title)) => {
                Line::styled(title.to_string(), Style::default().fg(colors::NEUTRAL))
            }
            (None, None) => Line::default(),
        };
        Self { clock, right }
    }
}

impl<'a> Widget for TopBar<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(7),
                Constraint::Min(1),
                Constraint::Percentage(40),
            ])
            .split(area);

        Paragraph::new(Line::styled(
            format!(" {}", self.clock),
            Style::default()
                .fg(colors::PRIMARY)
                .add_modifier(Modifier::BOLD),
        ))
        .render(chunks[0], buf);

        Paragraph::new(Line::styled(
            "NEXUS",
            Style::default()
                .fg(colors::SECONDARY)
                .add_modifier(Modifier::BOLD),
        ))
        .centered()
        .render(chunks[1], buf);

        Paragraph::new(self.right)
            .right_aligned()
            .render(chunks[2], buf);
    }
}
