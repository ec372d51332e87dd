use async_trait::async_trait;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::{
    ui::{
        context::AppContext,
        state::AppState,
        traits::{Action, View},
    },
    util::colors,
};

/// Playlist panel. Transport state itself lives in the player; this view
/// only selects tracks and forwards slider-style seeks.
#[derive(Default)]
pub struct Music {
    list_state: ListState,
}

#[async_trait]
impl View for Music {
    fn render(&mut self, f: &mut Frame, area: Rect, _state: &AppState, ctx: &AppContext) {
        let playlist = ctx.player.playlist();

        if playlist.is_empty() {
            f.render_widget(
                Paragraph::new(Line::styled(
                    "Aucune piste — la playlist n'est pas encore chargée.",
                    Style::default().fg(colors::NEUTRAL),
                ))
                .centered(),
                area,
            );
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(area);

        let active = ctx.player.current_index();
        let items: Vec<ListItem> = playlist
            .iter()
            .enumerate()
            .map(|(index, track)| {
                let marker = if index == active { "♫ " } else { "  " };
                let mut item =
                    ListItem::new(format!("{marker}{} — {}", track.title, track.artist));
                if index == active {
                    item = item.style(
                        Style::default()
                            .fg(colors::PRIMARY)
                            .add_modifier(Modifier::BOLD),
                    );
                }
                item
            })
            .collect();

        if self.list_state.selected().is_none() {
            self.list_state.select(Some(active));
        }

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(colors::NEUTRAL))
                    .title("Playlist"),
            )
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");

        f.render_stateful_widget(list, chunks[0], &mut self.list_state);

        f.render_widget(
            Paragraph::new(Line::styled(
                "Entrée: lire  ·  espace: pause  ·  n/p: piste  ·  0–9: position  ·  +/-: volume",
                Style::default().fg(colors::NEUTRAL),
            ))
            .centered(),
            chunks[1],
        );
    }

    async fn handle_input(
        &mut self,
        key: KeyEvent,
        _state: &AppState,
        ctx: &AppContext,
    ) -> Option<Action> {
        let len = ctx.player.playlist().len();
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                if len > 0 {
                    let i = self
                        .list_state
                        .selected()
                        .map_or(0, |i| if i >= len - 1 { i } else { i + 1 });
                    self.list_state.select(Some(i));
                }
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if len > 0 {
                    let i = self
                        .list_state
                        .selected()
                        .map_or(0, |i| i.saturating_sub(1));
                    self.list_state.select(Some(i));
                }
                None
            }
            KeyCode::Char('g') => {
                if len > 0 {
                    self.list_state.select(Some(0));
                }
                None
            }
            KeyCode::Char('G') => {
                if len > 0 {
                    self.list_state.select(Some(len - 1));
                }
                None
            }
            KeyCode::Enter => self.list_state.selected().map(Action::SelectTrack),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                let digit = c.to_digit(10).unwrap_or(0) as u8;
                Some(Action::SeekToPercent(digit * 10))
            }
            _ => None,
        }
    }
}
