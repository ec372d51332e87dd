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
    ui::{
        context::AppContext,
        state::AppState,
        traits::{Action, View},
    },
    util::colors,
};

const CATEGORY_ID: &str = "chat";

/// Conversation list in messenger style.
#[derive(Default)]
pub struct Chat {
    list_state: ListState,
}

#[async_trait]
impl View for Chat {
    fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState, _ctx: &AppContext) {
        let Some(category) = state.data.category(CATEGORY_ID) else {
            f.render_widget(
                Paragraph::new(Line::styled(
                    "Aucune conversation disponible.",
                    Style::default().fg(colors::NEUTRAL),
                ))
                .centered(),
                area,
            );
            return;
        };

        let items: Vec<ListItem> = category
            .items
            .iter()
            .map(|item| {
                let avatar = item.icon.as_deref().unwrap_or("🎮");
                let time = item.date.as_deref().unwrap_or("Récent");
                let header = Line::from(vec![
                    Span::raw(format!("{avatar}  ")),
                    Span::styled(
                        item.title.clone(),
                        Style::default()
                            .fg(colors::PRIMARY)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("  {time}"),
                        Style::default().fg(colors::NEUTRAL),
                    ),
                ]);
                let message = Line::styled(
                    format!("    {}", item.description),
                    Style::default().fg(colors::NEUTRAL),
                );
                ListItem::new(vec![header, message, Line::default()])
            })
            .collect();

        if !category.items.is_empty() && self.list_state.selected().is_none() {
            self.list_state.select(Some(0));
        }

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(colors::NEUTRAL))
                    .title(category.name.clone()),
            )
            .highlight_symbol("> ");

        f.render_stateful_widget(list, area, &mut self.list_state);
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
            _ => None,
        }
    }
}
