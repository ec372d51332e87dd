use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Widget},
};

use crate::{audio::PlaybackState, util::colors, util::fmt::track_time};

/// Transport bar pinned to the bottom of the shell: track identity, the
/// play/pause glyph, elapsed/total labels over the seek gauge, volume.
pub struct PlayerWidget<'a> {
    title: &'a str,
    artist: Option<&'a str>,
    state: PlaybackState,
    progress: (u64, u64),
    ratio: f64,
    volume: u8,
}

impl<'a> PlayerWidget<'a> {
    pub fn new(
        title: &'a str,
        artist: Option<&'a str>,
        state: PlaybackState,
        progress: (u64, u64),
        ratio: f64,
        volume: u8,
    ) -> Self {
        Self {
            title,
            artist,
            state,
            progress,
            ratio,
            volume,
        }
    }
}

impl<'a> Widget for PlayerWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::default().fg(colors::NEUTRAL));
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(3),
                Constraint::Percentage(35),
                Constraint::Min(10),
                Constraint::Length(18),
                Constraint::Length(10),
            ])
            .split(inner);

        let glyph = match self.state {
            PlaybackState::Playing => "⏸".fg(colors::PRIMARY),
            PlaybackState::Paused => "▶".fg(colors::PRIMARY),
            PlaybackState::Idle => "▶".fg(colors::NEUTRAL),
        };
        Paragraph::new(Line::from(glyph))
            .centered()
            .render(chunks[0], buf);

        let mut identity = Line::default();
        identity.push_span(Span::styled(
            self.title.to_string(),
            Style::default().fg(colors::PRIMARY),
        ));
        if let Some(artist) = self.artist {
            identity.push_span(Span::styled(
                format!("  {artist}"),
                Style::default().fg(colors::NEUTRAL),
            ));
        }
        Paragraph::new(identity).render(chunks[1], buf);

        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(colors::SECONDARY).bg(colors::NEUTRAL))
            .ratio(self.ratio.clamp(0.0, 1.0))
            .label("");
        gauge.render(chunks[2], buf);

        let (position, total) = self.progress;
        let times = format!(
            " {} / {}",
            track_time(position / 1000),
            track_time(total / 1000)
        );
        Paragraph::new(Line::styled(times, Style::default().fg(colors::NEUTRAL)))
            .render(chunks[3], buf);

        Paragraph::new(Line::styled(
            format!("♪ {:>3}%", self.volume),
            Style::default().fg(colors::NEUTRAL),
        ))
        .right_aligned()
        .render(chunks[4], buf);
    }
}
