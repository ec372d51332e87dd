pub mod arena;
pub mod calendar;
pub mod chat;
pub mod habits;
pub mod loading;
pub mod music;
pub mod nexus;
pub mod portal;
pub mod social;
pub mod videos;
pub mod wallpapers;

pub use arena::Arena;
pub use calendar::CalendarView;
pub use chat::Chat;
pub use habits::Habits;
pub use loading::Loading;
pub use music::Music;
pub use nexus::Nexus;
pub use portal::Portal;
pub use social::Social;
pub use videos::Videos;
pub use wallpapers::Wallpapers;

use crate::ui::state::PanelId;
use crate::ui::traits::View;

/// Panels are rebuilt on every navigation, so per-view presentation state
/// (selections, habit checkmarks) resets when a panel is reopened.
pub fn make_view(panel: PanelId) -> Box<dyn View> {
    match panel {
        PanelId::Loading => Box::new(Loading::default()),
        PanelId::Portal => Box::new(Portal::default()),
        PanelId::Nexus => Box::new(Nexus::default()),
        PanelId::Calendar => Box::new(CalendarView::default()),
        PanelId::Music => Box::new(Music::default()),
        PanelId::Wallpapers => Box::new(Wallpapers::default()),
        PanelId::Chat => Box::new(Chat::default()),
        PanelId::Social => Box::new(Social::default()),
        PanelId::Arena => Box::new(Arena::default()),
        PanelId::Habits => Box::new(Habits::default()),
        PanelId::Videos => Box::new(Videos::default()),
    }
}
