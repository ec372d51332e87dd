use chrono::Local;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::info;

use crate::{
    event::events::Event,
    ui::{
        app::App,
        input::InputHandler,
        message::AppMessage,
        state::PanelId,
        traits::Action,
        tui::{TerminalEvent, Tui},
    },
    util::fmt::clock_label,
};

pub struct EventHandler;

impl EventHandler {
    pub async fn handle_events(app: &mut App, tui: &mut Tui) -> color_eyre::Result<()> {
        if let Some(evt) = tui.next().await {
            Self::handle_event(app, evt, tui).await?;
        }

        while let Ok(evt) = app.event_rx.try_recv() {
            Self::handle_app_event(app, evt).await;
        }

        Ok(())
    }

    pub async fn handle_event(
        app: &mut App,
        evt: TerminalEvent,
        tui: &mut Tui,
    ) -> color_eyre::Result<()> {
        match evt {
            TerminalEvent::Init => {
                app.router.open(PanelId::Loading, &app.ctx).await;
                app.start_clock();
                let data = app.ctx.data.clone();
                data.spawn_loads(&app.ctx.event_tx, &mut app.tasks);
            }
            TerminalEvent::FocusGained => {
                app.has_focus = true;
                tui.clear()?;
            }
            TerminalEvent::FocusLost => app.has_focus = false,
            TerminalEvent::Key(key) => Self::handle_key_event(app, key).await,
            TerminalEvent::Tick | TerminalEvent::Resize(_, _) => {}
        }

        Ok(())
    }

    async fn handle_key_event(app: &mut App, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers == KeyModifiers::CONTROL {
            app.update(AppMessage::Quit).await;
            return;
        }

        let action = app.router.handle_input(key, &app.state, &app.ctx).await;
        if let Some(action) = action {
            Self::dispatch_action(app, action).await;
            return;
        }

        if let Some(msg) = InputHandler::handle_key(key) {
            app.update(msg).await;
        }
    }

    async fn dispatch_action(app: &mut App, action: Action) {
        match action {
            Action::Quit => app.should_quit = true,
            Action::Open(panel) => app.router.open(panel, &app.ctx).await,
            Action::Close => app.router.close(&app.ctx).await,
            Action::PlayPause => app.ctx.player.toggle_play(),
            Action::NextTrack => app.ctx.player.change_track(1),
            Action::PreviousTrack => app.ctx.player.change_track(-1),
            Action::SelectTrack(index) => app.ctx.player.select_track(index),
            Action::SeekToPercent(percent) => app.ctx.player.seek_to_percent(percent),
            Action::SeekForward => app.ctx.player.seek_forward(),
            Action::SeekBackward => app.ctx.player.seek_backward(),
            Action::VolumeUp => app.update(AppMessage::VolumeUp).await,
            Action::VolumeDown => app.update(AppMessage::VolumeDown).await,
            Action::SetWallpaper(index) => {
                app.ctx.wallpapers.set_wallpaper(index);
            }
        }
    }

    async fn handle_app_event(app: &mut App, event: Event) {
        app.router.on_event(&event, &app.ctx).await;

        match event {
            Event::NotificationsFetched(notifications) => {
                app.state.data.notifications = notifications;
            }
            Event::WallpapersFetched(wallpapers) => {
                app.ctx.wallpapers.set_entries(wallpapers);
                app.ctx.wallpapers.load_saved();
            }
            Event::PlaylistFetched(tracks) => {
                // Fixture URLs are host-relative; resolve them once here so
                // the player only ever sees absolute URLs.
                let tracks = tracks
                    .into_iter()
                    .map(|mut track| {
                        track.url = app.ctx.data.asset_url(&track.url);
                        track
                    })
                    .collect();
                app.ctx.player.set_playlist(tracks);
            }
            Event::ProjectsFetched(categories) => {
                app.state.data.categories = categories;
            }
            Event::FetchFailed(resource, _) => {
                app.state.ui.status =
                    Some(format!("Échec du chargement: {}", resource.label()));
            }
            Event::ClockTick => {
                app.state.ui.clock = clock_label(Local::now());
            }
            Event::LoadingDone => {
                if app.router.current() == PanelId::Loading {
                    app.router.open(PanelId::Portal, &app.ctx).await;
                }
            }
            Event::TrackStarted(index) => {
                info!(index, "track started");
            }
            Event::TrackEnded => {
                app.ctx.player.on_track_ended();
            }
            Event::PlayerError(message) => {
                app.ctx.player.on_error();
                app.state.ui.status = Some(format!("Lecture impossible: {message}"));
            }
        }
    }
}
