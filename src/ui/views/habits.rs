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

const CATEGORY_ID: &str = "habits";

/// Daily-challenge list. The checkmarks are pure presentation: they live
/// in this view only and reset whenever the panel is reopened.
#[derive(Default)]
pub struct Habits {
    list_state: ListState,
    checked: Vec<bool>,
}

#[async_trait]
impl View for Habits {
    fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState, _ctx: &AppContext) {
        let Some(category) = state.data.category(CATEGORY_ID) else {
            f.render_widget(
                Paragraph::new(Line::styled(
                    "Aucun défi en cours.",
                    Style::default().fg(colors::NEUTRAL),
                ))
                .centered(),
                area,
            );
            return;
        };

        if self.checked.len() != category.items.len() {
            self.checked = vec![false; category.items.len()];
        }

        let items: Vec<ListItem> = category
            .items
            .iter()
            .zip(&self.checked)
            .map(|(item, checked)| {
                let (box_glyph, box_style) = if *checked {
                    ("[x]", Style::default().fg(colors::ACCENT))
                } else {
                    ("[ ]", Style::default().fg(colors::NEUTRAL))
                };
                let progress = item.progress.as_deref().unwrap_or("0/10");
                let header = Line::from(vec![
                    Span::styled(format!("{box_glyph} "), box_style),
                    Span::styled(
                        item.title.clone(),
                        Style::default()
                            .fg(colors::PRIMARY)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("  {progress}"),
                        Style::default().fg(colors::SECONDARY),
                    ),
                ]);
                let detail = Line::styled(
                    format!("    {}", item.description),
                    Style::default().fg(colors::NEUTRAL),
                );
                ListItem::new(vec![header, detail])
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
            KeyCode::Enter => {
                if let Some(i) = self.list_state.selected()
                    && let Some(flag) = self.checked.get_mut(i)
                {
                    *flag = !*flag;
                }
                None
            }
            _ => None,
        }
    }
}
