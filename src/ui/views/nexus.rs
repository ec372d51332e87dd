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
        state::{AppState, PanelId},
        traits::{Action, View},
    },
    util::colors,
};

const COLUMNS: usize = 3;

/// Console-style launcher: one tile per category, with its item count.
#[derive(Default)]
pub struct Nexus {
    selected: usize,
}

#[async_trait]
impl View for Nexus {
    fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState, _ctx: &AppContext) {
        let categories = &state.data.categories;
        if categories.is_empty() {
            f.render_widget(
                Paragraph::new(Line::styled(
                    "Aucune application disponible.",
                    Style::default().fg(colors::NEUTRAL),
                ))
                .centered(),
                area,
            );
            return;
        }

        self.selected = self.selected.min(categories.len() - 1);

        let row_count = categories.len().div_ceil(COLUMNS);
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
                let Some(category) = categories.get(index) else {
                    continue;
                };

                let border = if index == self.selected {
                    Style::default().fg(colors::PRIMARY)
                } else {
                    Style::default().fg(colors::NEUTRAL)
                };

                let tile = Paragraph::new(vec![
                    Line::styled(
                        format!("{}  {}", category.icon, category.name),
                        Style::default()
                            .fg(colors::PRIMARY)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Line::styled(
                        format!("{} projets", category.items.len()),
                        Style::default().fg(colors::NEUTRAL),
                    ),
                ])
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(border),
                );
                f.render_widget(tile, columns[column_index]);
            }
        }
    }

    async fn handle_input(
        &mut self,
        key: KeyEvent,
        state: &AppState,
        _ctx: &AppContext,
    ) -> Option<Action> {
        let len = state.data.categories.len();
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
            KeyCode::Enter => state
                .data
                .categories
                .get(self.selected)
                .and_then(|c| PanelId::from_category(&c.id))
                .map(Action::Open),
            _ => None,
        }
    }
}
