use std::time::Duration;

use async_trait::async_trait;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
};
use tokio::task::JoinHandle;

use crate::{
    event::events::Event,
    ui::{
        components::spinner::Spinner,
        context::AppContext,
        state::{AppState, PanelId},
        traits::{Action, View},
    },
    util::colors,
};

const AUTO_FINISH: Duration = Duration::from_secs(5);

/// Boot screen. Advances to the portal by itself after a few seconds, or
/// immediately on Enter.
#[derive(Default)]
pub struct Loading {
    ticks: usize,
    timer: Option<JoinHandle<()>>,
}

impl Drop for Loading {
    fn drop(&mut self) {
        if let Some(handle) = self.timer.take() {
            handle.abort();
        }
    }
}

#[async_trait]
impl View for Loading {
    async fn on_mount(&mut self, ctx: &AppContext) {
        let tx = ctx.event_tx.clone();
        self.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(AUTO_FINISH).await;
            let _ = tx.send(Event::LoadingDone);
        }));
    }

    fn render(&mut self, f: &mut Frame, area: Rect, _state: &AppState, _ctx: &AppContext) {
        self.ticks = self.ticks.wrapping_add(1);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(40),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(1),
            ])
            .split(area);

        f.render_widget(
            Paragraph::new(Line::styled(
                "N E X U S",
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ))
            .centered(),
            chunks[1],
        );

        f.render_widget(
            Spinner::default()
                .with_style(Style::default().fg(colors::SECONDARY))
                .with_label("Préparation du portail...".to_string())
                .frame(self.ticks),
            chunks[2],
        );

        f.render_widget(
            Paragraph::new(Line::styled(
                "Entrée pour passer",
                Style::default().fg(colors::NEUTRAL),
            ))
            .centered(),
            chunks[3],
        );
    }

    async fn handle_input(
        &mut self,
        key: KeyEvent,
        _state: &AppState,
        _ctx: &AppContext,
    ) -> Option<Action> {
        match key.code {
            KeyCode::Enter => Some(Action::Open(PanelId::Portal)),
            _ => None,
        }
    }
}
