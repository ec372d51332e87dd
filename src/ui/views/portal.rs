use async_trait::async_trait;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::{
    ui::{
        context::AppContext,
        state::{AppState, PanelId},
        traits::{Action, View},
    },
    util::colors,
};

/// Home panel: notification cards on the left, the launcher on the right.
/// Launcher entries mix the built-in apps with the fixture categories.
#[derive(Default)]
pub struct Portal {
    list_state: ListState,
}

struct LaunchEntry {
    label: String,
    target: Option<PanelId>,
}

fn entries(state: &AppState) -> Vec<LaunchEntry> {
    let mut entries = vec![
        LaunchEntry {
            label: "📅  Calendrier".to_string(),
            target: Some(PanelId::Calendar),
        },
        LaunchEntry {
            label: "🎵  Musique".to_string(),
            target: Some(PanelId::Music),
        },
        LaunchEntry {
            label: "🖼  Fonds d'écran".to_string(),
            target: Some(PanelId::Wallpapers),
        },
        LaunchEntry {
            label: "🕹  Nexus".to_string(),
            target: Some(PanelId::Nexus),
        },
    ];

    for category in &state.data.categories {
        entries.push(LaunchEntry {
            label: format!("{}  {}", category.icon, category.name),
            target: PanelId::from_category(&category.id),
        });
    }

    entries
}

#[async_trait]
impl View for Portal {
    fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState, _ctx: &AppContext) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(area);

        let mut lines: Vec<Line> = Vec::new();
        if state.data.notifications.is_empty() {
            lines.push(Line::styled(
                "Aucune notification.",
                Style::default().fg(colors::NEUTRAL),
            ));
        }
        for notification in &state.data.notifications {
            lines.push(Line::styled(
                notification.title.clone(),
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ));
            lines.push(Line::raw(notification.summary.clone()));
            lines.push(Line::default());
        }
        f.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(colors::NEUTRAL))
                        .title("Notifications"),
                ),
            chunks[0],
        );

        let launcher = entries(state);
        let items: Vec<ListItem> = launcher
            .iter()
            .map(|entry| ListItem::new(entry.label.clone()))
            .collect();

        if !launcher.is_empty() && self.list_state.selected().is_none() {
            self.list_state.select(Some(0));
        }

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(colors::NEUTRAL))
                    .title("Applications"),
            )
            .highlight_style(
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        f.render_stateful_widget(list, chunks[1], &mut self.list_state);
    }

    async fn handle_input(
        &mut self,
        key: KeyEvent,
        state: &AppState,
        _ctx: &AppContext,
    ) -> Option<Action> {
        let launcher = entries(state);
        let len = launcher.len();
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
            // An entry without a known panel is inert, like a card whose
            // target application does not exist.
            KeyCode::Enter => self
                .list_state
                .selected()
                .and_then(|i| launcher.get(i))
                .and_then(|entry| entry.target)
                .map(Action::Open),
            _ => None,
        }
    }
}
