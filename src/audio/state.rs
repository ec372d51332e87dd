/// Transport state machine: no source loaded, or a loaded source that is
/// either paused or audible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Idle,
    Paused,
    Playing,
}

impl PlaybackState {
    pub fn is_playing(self) -> bool {
        matches!(self, PlaybackState::Playing)
    }

    pub fn has_source(self) -> bool {
        !matches!(self, PlaybackState::Idle)
    }
}
