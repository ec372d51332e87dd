use std::sync::Arc;
use std::time::Duration;

use chrono::Local;
use flume::Receiver;
use ratatui::{Frame, layout::{Constraint, Direction, Layout}, style::Style};

use crate::{
    audio::{
        Player,
        playback::PlaybackEngine,
        player::VOLUME_STEP,
    },
    data::DataService,
    event::events::Event,
    storage::SettingsStore,
    ui::{
        components::{player::PlayerWidget, topbar::TopBar},
        context::AppContext,
        message::AppMessage,
        router::Router,
        state::AppState,
        tui::{self, TerminalEvent},
        util::handler::EventHandler,
    },
    util::{colors, fmt::clock_label, task::BackgroundTasks},
    wallpaper::WallpaperManager,
};

pub struct App {
    pub event_rx: Receiver<Event>,
    /// Keeps the audio output stream alive; the player only holds the sink.
    pub audio: PlaybackEngine,
    pub ctx: AppContext,
    pub state: AppState,
    pub router: Router,
    pub tasks: BackgroundTasks,
    pub has_focus: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new() -> color_eyre::Result<Self> {
        let (event_tx, event_rx) = flume::unbounded();
        let data = Arc::new(DataService::from_env());
        let audio = PlaybackEngine::new()?;
        let player = Player::new(audio.sink(), event_tx.clone());
        let wallpapers = WallpaperManager::new(SettingsStore::open_default()?);

        let mut state = AppState::default();
        state.ui.clock = clock_label(Local::now());

        Ok(Self {
            event_rx,
            audio,
            ctx: AppContext {
                data,
                player,
                wallpapers,
                event_tx,
            },
            state,
            router: Router::new(),
            tasks: BackgroundTasks::new(),
            has_focus: true,
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> color_eyre::Result<()> {
        let mut tui = tui::Tui::new()?;
        tui.enter()?;

        EventHandler::handle_event(self, TerminalEvent::Init, &mut tui).await?;
        while !self.should_quit {
            tui.draw(|f| {
                self.ui(f);
            })?;

            EventHandler::handle_events(self, &mut tui).await?;
        }

        self.tasks.abort_all();
        tui.exit()?;
        Ok(())
    }

    pub async fn update(&mut self, message: AppMessage) {
        match message {
            AppMessage::Quit => self.should_quit = true,
            AppMessage::GoHome => self.router.close(&self.ctx).await,
            AppMessage::TogglePlayPause => self.ctx.player.toggle_play(),
            AppMessage::NextTrack => self.ctx.player.change_track(1),
            AppMessage::PreviousTrack => self.ctx.player.change_track(-1),
            AppMessage::VolumeUp => self.ctx.player.adjust_volume(i16::from(VOLUME_STEP)),
            AppMessage::VolumeDown => self.ctx.player.adjust_volume(-i16::from(VOLUME_STEP)),
            AppMessage::SeekForward => self.ctx.player.seek_forward(),
            AppMessage::SeekBackward => self.ctx.player.seek_backward(),
        }
    }

    /// Clock updates arrive as events so the label re-renders on the same
    /// loop as everything else. The initial value is set before the first
    /// frame; the timer then fires once a minute for the process lifetime.
    pub fn start_clock(&mut self) {
        let tx = self.ctx.event_tx.clone();
        self.tasks.spawn_clock(
            tokio::spawn(async move {
                let mut timer = tokio::time::interval(Duration::from_secs(60));
                timer.tick().await;
                loop {
                    timer.tick().await;
                    let _ = tx.send(Event::ClockTick);
                }
            }),
        );
    }

    fn ui(&mut self, frame: &mut Frame) {
        if !self.has_focus {
            return;
        }

        let area = frame.area();
        frame
            .buffer_mut()
            .set_style(area, Style::default().bg(self.backdrop()));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(1),
                Constraint::Length(3),
            ])
            .split(area);

        let wallpaper = self.ctx.wallpapers.active_entry().map(|w| w.title.as_str());
        frame.render_widget(
            TopBar::new(
                &self.state.ui.clock,
                self.state.ui.status.as_deref(),
                wallpaper,
            ),
            chunks[0],
        );

        self.router.render(frame, chunks[1], &self.state, &self.ctx);

        let player = &self.ctx.player;
        let (title, artist) = match player.current_track() {
            Some(track) if player.state().has_source() => {
                (track.title.as_str(), Some(track.artist.as_str()))
            }
            _ => ("Aucune piste", None),
        };
        frame.render_widget(
            PlayerWidget::new(
                title,
                artist,
                player.state(),
                player.progress().get(),
                player.progress().ratio(),
                player.volume(),
            ),
            chunks[2],
        );
    }

    /// The active wallpaper tints the whole shell; the gallery index picks
    /// the tint so switching wallpapers is visible everywhere.
    fn backdrop(&self) -> ratatui::style::Color {
        if self.ctx.wallpapers.entries().is_empty() {
            colors::BACKGROUND
        } else {
            colors::BACKDROPS[self.ctx.wallpapers.active() % colors::BACKDROPS.len()]
        }
    }
}
