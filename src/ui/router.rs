use ratatui::Frame;
use ratatui::crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use tracing::debug;

use crate::event::events::Event;
use crate::ui::context::AppContext;
use crate::ui::state::{AppState, PanelId};
use crate::ui::traits::{Action, View};
use crate::ui::views;

/// One mounted view at a time. There is no navigation stack: opening a
/// panel replaces the current one, and `close` always lands on the portal.
pub struct Router {
    current: PanelId,
    view: Box<dyn View>,
}

impl Router {
    pub fn new() -> Self {
        Self {
            current: PanelId::Loading,
            view: views::make_view(PanelId::Loading),
        }
    }

    pub fn current(&self) -> PanelId {
        self.current
    }

    pub async fn open(&mut self, panel: PanelId, ctx: &AppContext) {
        debug!(?panel, "open panel");
        self.current = panel;
        self.view = views::make_view(panel);
        self.view.on_mount(ctx).await;
    }

    pub async fn close(&mut self, ctx: &AppContext) {
        self.open(PanelId::Portal, ctx).await;
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState, ctx: &AppContext) {
        self.view.render(f, area, state, ctx);
    }

    pub async fn handle_input(
        &mut self,
        key: KeyEvent,
        state: &AppState,
        ctx: &AppContext,
    ) -> Option<Action> {
        self.view.handle_input(key, state, ctx).await
    }

    pub async fn on_event(&mut self, event: &Event, ctx: &AppContext) {
        self.view.on_event(event, ctx).await;
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
