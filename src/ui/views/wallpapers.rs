use async_trait::async_trait;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::{
    data::models::WallpaperKind,
    ui::{
        context::AppContext,
        state::AppState,
        traits::{Action, View},
    },
    util::colors,
};

/// Wallpaper gallery. The entry marked `Actif` is the persisted selection.
#[derive(Default)]
pub struct Wallpapers {
    list_state: ListState,
}

#[async_trait]
impl View for Wallpapers {
    fn render(&mut self, f: &mut Frame, area: Rect, _state: &AppState, ctx: &AppContext) {
        let entries = ctx.wallpapers.entries();

        if entries.is_empty() {
            f.render_widget(
                Paragraph::new(Line::styled(
                    "Aucun fond d'écran — la galerie n'est pas encore chargée.",
                    Style::default().fg(colors::NEUTRAL),
                ))
                .centered(),
                area,
            );
            return;
        }

        let active = ctx.wallpapers.active();
        let items: Vec<ListItem> = entries
            .iter()
            .enumerate()
            .map(|(index, wallpaper)| {
                let glyph = match wallpaper.kind {
                    WallpaperKind::Image => "🖼",
                    WallpaperKind::Video => "🎞",
                };
                let mut line = Line::default();
                line.push_span(Span::raw(format!("{glyph}  {}", wallpaper.title)));
                if index == active {
                    line.push_span(Span::styled(
                        "  Actif",
                        Style::default()
                            .fg(colors::ACCENT)
                            .add_modifier(Modifier::BOLD),
                    ));
                }
                ListItem::new(line)
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
                    .title("Fonds d'écran"),
            )
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");

        f.render_stateful_widget(list, area, &mut self.list_state);
    }

    async fn handle_input(
        &mut self,
        key: KeyEvent,
        _state: &AppState,
        ctx: &AppContext,
    ) -> Option<Action> {
        let len = ctx.wallpapers.entries().len();
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
            KeyCode::Enter => self.list_state.selected().map(Action::SetWallpaper),
            _ => None,
        }
    }
}
