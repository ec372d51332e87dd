use async_trait::async_trait;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::{
    ui::{
        context::AppContext,
        state::AppState,
        traits::{Action, View},
    },
    util::colors,
};

const CATEGORY_ID: &str = "social";

/// Scrolling feed of community posts.
#[derive(Default)]
pub struct Social {
    scroll: u16,
}

#[async_trait]
impl View for Social {
    fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState, _ctx: &AppContext) {
        let Some(category) = state.data.category(CATEGORY_ID) else {
            f.render_widget(
                Paragraph::new(Line::styled(
                    "Le fil d'actualité est vide.",
                    Style::default().fg(colors::NEUTRAL),
                ))
                .centered(),
                area,
            );
            return;
        };

        let mut lines: Vec<Line> = Vec::new();
        for item in &category.items {
            let avatar = item.icon.as_deref().unwrap_or("📖");
            let date = item.date.as_deref().unwrap_or("Il y a 2 jours");
            lines.push(Line::from(vec![
                Span::raw(format!("{avatar}  ")),
                Span::styled(
                    "Expert Auteur",
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  ·  {date}"),
                    Style::default().fg(colors::NEUTRAL),
                ),
            ]));
            lines.push(Line::styled(
                item.title.clone(),
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ));
            lines.push(Line::raw(item.description.clone()));
            lines.push(Line::styled(
                "👍 J'aime    💬 Commenter    🔄 Partager",
                Style::default().fg(colors::NEUTRAL),
            ));
            lines.push(Line::default());
        }

        f.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .scroll((self.scroll, 0))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(colors::NEUTRAL))
                        .title(category.name.clone()),
                ),
            area,
        );
    }

    async fn handle_input(
        &mut self,
        key: KeyEvent,
        _state: &AppState,
        _ctx: &AppContext,
    ) -> Option<Action> {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll = self.scroll.saturating_add(1);
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll = self.scroll.saturating_sub(1);
                None
            }
            _ => None,
        }
    }
}
