use async_trait::async_trait;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    ui::{
        context::AppContext,
        state::AppState,
        traits::{Action, View},
    },
    util::colors,
};

const CATEGORY_ID: &str = "videos";
const COLUMNS: usize = 2;

/// Video gallery in streaming-site style: thumbnail, title, meta line.
#[derive(Default)]
pub struct Videos {
    selected: usize,
}

#[async_trait]
impl View for Videos {
    fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState, _ctx: &AppContext) {
        let Some(category) = state.data.category(CATEGORY_ID) else {
            f.render_widget(
                Paragraph::new(Line::styled(
                    "Aucune vidéo disponible.",
                    Style::default().fg(colors::NEUTRAL),
                ))
                .centered(),
                area,
            );
            return;
        };
        if category.items.is_empty() {
            return;
        }

        self.selected = self.selected.min(category.items.len() - 1);

        let row_count = category.items.len().div_ceil(COLUMNS);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Length(5); row_count])
            .split(area);

        for (row_index, row_area) in rows.iter().enumerate() {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![Constraint::Ratio(1, COLUMNS as u32); COLUMNS])
                .split(*row_area);

            for column_index in 0..COLUMNS {
                let index = row_index * COLUMNS + column_index;
                let Some(item) = category.items.get(index) else {
                    continue;
                };

                let thumbnail = item.icon.as_deref().unwrap_or("🎬");
                let views = item.views.as_deref().unwrap_or("1.2k");
                let date = item.date.as_deref().unwrap_or("Il y a 1 semaine");
                let border = if index == self.selected {
                    Style::default().fg(colors::PRIMARY)
                } else {
                    Style::default().fg(colors::NEUTRAL)
                };

                let card = Paragraph::new(vec![
                    Line::styled(
                        format!("{thumbnail} ▶  {}", item.title),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Line::styled(
                        format!("Expert Auteur · {views} vues · {date}"),
                        Style::default().fg(colors::NEUTRAL),
                    ),
                ])
                .block(Block::default().borders(Borders::ALL).border_style(border));
                f.render_widget(card, columns[column_index]);
            }
        }
    }

    async fn handle_input(
        &mut self,
        key: KeyEvent,
        state: &AppState,
        _ctx: &AppContext,
    ) -> Option<Action> {
        let len = state
            .data
            .category(CATEGORY_ID)
            .map_or(0, |c| c.items.len());
        if len == 0 {
            return None;
        }
        match key.code {
            KeyCode::Right | KeyCode::Char('l') => {
                self.selected = (self.selected + 1).min(len - 1);
                None
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected = (self.selected + COLUMNS).min(len - 1);
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(COLUMNS);
                None
            }
            _ => None,
        }
    }
}
