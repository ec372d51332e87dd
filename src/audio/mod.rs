pub mod error;
pub mod playback;
pub mod player;
pub mod progress;
pub mod state;

pub use error::AudioError;
pub use player::Player;
pub use state::PlaybackState;
