use crate::data::{
    Resource,
    models::{Category, Notification, Track, Wallpaper},
};

/// Everything that flows back into the main loop: fixture arrivals, timer
/// ticks and audio notifications. Views never mutate shared state directly;
/// they emit these (or `Action`s) and the handler applies them.
#[derive(Debug, Clone)]
pub enum Event {
    // Fixture loads
    NotificationsFetched(Vec<Notification>),
    WallpapersFetched(Vec<Wallpaper>),
    PlaylistFetched(Vec<Track>),
    ProjectsFetched(Vec<Category>),
    FetchFailed(Resource, String),

    // Timers
    ClockTick,
    LoadingDone,

    // Audio
    TrackStarted(usize),
    TrackEnded,
    PlayerError(String),
}
