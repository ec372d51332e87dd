use std::sync::Arc;

use flume::Sender;

use crate::{
    audio::Player, data::DataService, event::events::Event, wallpaper::WallpaperManager,
};

/// Shared services owned by the app. Views get it by reference; mutation
/// happens in the event handler, never inside a view.
pub struct AppContext {
    pub data: Arc<DataService>,
    pub player: Player,
    pub wallpapers: WallpaperManager,
    pub event_tx: Sender<Event>,
}
