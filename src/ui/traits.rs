use async_trait::async_trait;
use ratatui::crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

use crate::event::events::Event;
use crate::ui::context::AppContext;
use crate::ui::state::{AppState, PanelId};

/// What a view asks the shell to do. Views never touch the player, the
/// wallpaper manager or the router directly.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    Open(PanelId),
    Close,
    PlayPause,
    NextTrack,
    PreviousTrack,
    SelectTrack(usize),
    SeekToPercent(u8),
    SeekForward,
    SeekBackward,
    VolumeUp,
    VolumeDown,
    SetWallpaper(usize),
}

#[async_trait]
pub trait View: Send {
    async fn on_mount(&mut self, _ctx: &AppContext) {}

    fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState, ctx: &AppContext);

    async fn handle_input(
        &mut self,
        key: KeyEvent,
        state: &AppState,
        ctx: &AppContext,
    ) -> Option<Action>;

    async fn on_event(&mut self, _event: &Event, _ctx: &AppContext) {}
}
