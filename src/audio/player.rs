use std::io::Cursor;
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use std::time::Duration;

use flume::Sender;
use rodio::{Decoder, Sink, Source};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::{
    audio::{AudioError, PlaybackState, progress::TrackProgress},
    data::models::Track,
    event::events::Event,
};

const MONITOR_PERIOD: Duration = Duration::from_millis(200);
const SEEK_STEP: Duration = Duration::from_secs(5);
pub const DEFAULT_VOLUME: u8 = 70;
pub const VOLUME_STEP: u8 = 5;

/// Volume percent to sink gain; the slider domain is 0–100.
pub fn gain(volume: u8) -> f32 {
    volume.min(100) as f32 / 100.0
}

/// Seek-slider percent to an absolute offset in milliseconds. `None` while
/// the duration is unknown.
pub fn seek_target(percent: u8, total_millis: u64) -> Option<u64> {
    if total_millis == 0 {
        return None;
    }
    Some(total_millis * u64::from(percent.min(100)) / 100)
}

/// Position in an ordered playlist. Stepping wraps at both ends; direct
/// selection rejects out-of-range indices.
#[derive(Debug, Clone, Default)]
pub struct PlaylistCursor {
    tracks: Vec<Track>,
    index: usize,
}

impl PlaylistCursor {
    pub fn new(tracks: Vec<Track>) -> Self {
        Self { tracks, index: 0 }
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn current(&self) -> Option<&Track> {
        self.tracks.get(self.index)
    }

    pub fn set(&mut self, index: usize) -> bool {
        if index < self.tracks.len() {
            self.index = index;
            true
        } else {
            false
        }
    }

    pub fn step(&mut self, delta: i32) -> Option<&Track> {
        if self.tracks.is_empty() {
            return None;
        }
        let len = self.tracks.len() as i64;
        self.index = (self.index as i64 + i64::from(delta)).rem_euclid(len) as usize;
        self.current()
    }
}

/// Owns the transport state machine and drives the one shared sink. The
/// output stream itself stays with the app; the player only needs the
/// sink handle, which background loads can safely carry. Sources are
/// fetched and decoded off the main loop; once appended they follow the
/// playing flag as it stands at that moment, so a pause issued mid-load
/// wins over the fetch.
pub struct Player {
    sink: Arc<Sink>,
    client: reqwest::Client,
    cursor: PlaylistCursor,
    state: PlaybackState,
    volume: u8,
    progress: Arc<TrackProgress>,
    playing_flag: Arc<AtomicBool>,
    loading: Arc<AtomicBool>,
    load_task: Option<JoinHandle<()>>,
    event_tx: Sender<Event>,
}

impl Player {
    pub fn new(sink: Arc<Sink>, event_tx: Sender<Event>) -> Self {
        let player = Self {
            sink,
            client: reqwest::Client::new(),
            cursor: PlaylistCursor::default(),
            state: PlaybackState::Idle,
            volume: DEFAULT_VOLUME,
            progress: Arc::new(TrackProgress::default()),
            playing_flag: Arc::new(AtomicBool::new(false)),
            loading: Arc::new(AtomicBool::new(false)),
            load_task: None,
            event_tx,
        };
        player.sink.set_volume(gain(player.volume));
        player.start_monitor();
        player
    }

    /// Watches the sink: position updates while audible, and the natural
    /// end of a track once the sink drains. `loading` gates the drain check
    /// so the gap between stop and append is not mistaken for an ended
    /// track; the monitor re-arms it itself so a track end fires once.
    fn start_monitor(&self) {
        let sink = self.sink.clone();
        let playing = self.playing_flag.clone();
        let loading = self.loading.clone();
        let progress = self.progress.clone();
        let event_tx = self.event_tx.clone();

        tokio::spawn(async move {
            loop {
                tokio::time::sleep(MONITOR_PERIOD).await;

                if loading.load(Ordering::SeqCst) || !playing.load(Ordering::SeqCst) {
                    continue;
                }

                if sink.empty() {
                    loading.store(true, Ordering::SeqCst);
                    let _ = event_tx.send(Event::TrackEnded);
                } else {
                    progress.set_position(sink.get_pos());
                }
            }
        });
    }

    pub fn set_playlist(&mut self, tracks: Vec<Track>) {
        info!(tracks = tracks.len(), "playlist loaded");
        if let Some(handle) = self.load_task.take() {
            handle.abort();
        }
        self.sink.stop();
        self.progress.reset();
        self.cursor = PlaylistCursor::new(tracks);
        self.set_state(PlaybackState::Idle);
    }

    /// Jumps to the track at `index`. Out-of-range indices are rejected.
    /// Playback continues on the new source when already playing.
    pub fn select_track(&mut self, index: usize) {
        if !self.cursor.set(index) {
            debug!(index, len = self.cursor.len(), "track index out of range");
            return;
        }
        if !self.state.has_source() {
            self.set_state(PlaybackState::Paused);
        }
        self.start_load();
    }

    /// Loads the current track first when nothing is loaded yet, then
    /// flips between paused and playing.
    pub fn toggle_play(&mut self) {
        match self.state {
            PlaybackState::Idle => {
                if self.cursor.is_empty() {
                    debug!("toggle with empty playlist");
                    return;
                }
                self.set_state(PlaybackState::Playing);
                self.start_load();
            }
            PlaybackState::Paused => {
                self.set_state(PlaybackState::Playing);
                self.sink.play();
            }
            PlaybackState::Playing => {
                self.set_state(PlaybackState::Paused);
                self.sink.pause();
            }
        }
    }

    /// Steps through the playlist with wraparound at both ends.
    pub fn change_track(&mut self, delta: i32) {
        if self.cursor.step(delta).is_none() {
            return;
        }
        if !self.state.has_source() {
            self.set_state(PlaybackState::Paused);
        }
        self.start_load();
    }

    /// Natural end of the current track.
    pub fn on_track_ended(&mut self) {
        self.change_track(1);
    }

    /// A load failed; drop back to the unloaded state.
    pub fn on_error(&mut self) {
        self.set_state(PlaybackState::Idle);
        self.progress.reset();
    }

    pub fn set_volume(&mut self, volume: u8) {
        self.volume = volume.min(100);
        self.sink.set_volume(gain(self.volume));
    }

    pub fn adjust_volume(&mut self, delta: i16) {
        let volume = (i16::from(self.volume) + delta).clamp(0, 100) as u8;
        self.set_volume(volume);
    }

    /// Scrub to a slider position. A no-op until the duration is known.
    pub fn seek_to_percent(&mut self, percent: u8) {
        let (_, total) = self.progress.get();
        let Some(target) = seek_target(percent, total) else {
            debug!(percent, "seek ignored, duration unknown");
            return;
        };
        self.seek(Duration::from_millis(target));
    }

    pub fn seek_forward(&mut self) {
        let (position, total) = self.progress.get();
        let mut target = position.saturating_add(SEEK_STEP.as_millis() as u64);
        if total > 0 {
            target = target.min(total);
        }
        self.seek(Duration::from_millis(target));
    }

    pub fn seek_backward(&mut self) {
        let (position, _) = self.progress.get();
        let target = position.saturating_sub(SEEK_STEP.as_millis() as u64);
        self.seek(Duration::from_millis(target));
    }

    fn seek(&mut self, position: Duration) {
        match self.sink.try_seek(position) {
            Ok(()) => self.progress.set_position(position),
            Err(e) => warn!("seek failed: {e}"),
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn volume(&self) -> u8 {
        self.volume
    }

    pub fn current_index(&self) -> usize {
        self.cursor.index()
    }

    pub fn playlist(&self) -> &[Track] {
        self.cursor.tracks()
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.cursor.current()
    }

    pub fn progress(&self) -> &Arc<TrackProgress> {
        &self.progress
    }

    fn set_state(&mut self, state: PlaybackState) {
        self.state = state;
        self.playing_flag
            .store(state.is_playing(), Ordering::SeqCst);
    }

    /// Replaces whatever the sink holds with the current track.
    fn start_load(&mut self) {
        let Some(track) = self.cursor.current().cloned() else {
            return;
        };
        if let Some(handle) = self.load_task.take() {
            handle.abort();
        }

        let sink = self.sink.clone();
        sink.stop();
        self.progress.reset();
        self.loading.store(true, Ordering::SeqCst);

        let index = self.cursor.index();
        let client = self.client.clone();
        let playing = self.playing_flag.clone();
        let progress = self.progress.clone();
        let loading = self.loading.clone();
        let event_tx = self.event_tx.clone();

        self.load_task = Some(tokio::spawn(async move {
            match fetch_source(&client, &track.url).await {
                Ok(source) => {
                    if let Some(total) = source.total_duration() {
                        progress.set_total(total);
                    }
                    sink.append(source);
                    if playing.load(Ordering::SeqCst) {
                        sink.play();
                    } else {
                        sink.pause();
                    }
                    loading.store(false, Ordering::SeqCst);
                    info!(title = track.title.as_str(), "track loaded");
                    let _ = event_tx.send(Event::TrackStarted(index));
                }
                Err(e) => {
                    warn!(title = track.title.as_str(), "track load failed: {e}");
                    loading.store(false, Ordering::SeqCst);
                    let _ = event_tx.send(Event::PlayerError(e.to_string()));
                }
            }
        }));
    }
}

async fn fetch_source(
    client: &reqwest::Client,
    url: &str,
) -> Result<Decoder<Cursor<Vec<u8>>>, AudioError> {
    let bytes = client
        .get(url)
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(|e| AudioError::Network(e.to_string()))?
        .bytes()
        .await
        .map_err(|e| AudioError::Network(e.to_string()))?;

    Decoder::new(Cursor::new(bytes.to_vec())).map_err(|e| AudioError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracks(n: usize) -> Vec<Track> {
        (0..n)
            .map(|i| Track {
                title: format!("Piste {i}"),
                artist: "Testeur".to_string(),
                url: format!("http://host/assets/{i}.mp3"),
            })
            .collect()
    }

    #[test]
    fn stepping_is_total_over_the_index_space() {
        for len in 1..=6 {
            let mut cursor = PlaylistCursor::new(tracks(len));
            cursor.set(len / 2);
            let start = cursor.index();

            for _ in 0..len {
                cursor.step(1);
            }
            assert_eq!(cursor.index(), start, "forward cycle, len {len}");

            for _ in 0..len {
                cursor.step(-1);
            }
            assert_eq!(cursor.index(), start, "backward cycle, len {len}");
        }
    }

    #[test]
    fn stepping_wraps_at_both_ends() {
        let mut cursor = PlaylistCursor::new(tracks(3));

        cursor.step(-1);
        assert_eq!(cursor.index(), 2);

        cursor.step(1);
        assert_eq!(cursor.index(), 0);
        cursor.step(1);
        assert_eq!(cursor.index(), 1);
    }

    #[test]
    fn selection_rejects_out_of_range() {
        let mut cursor = PlaylistCursor::new(tracks(3));
        assert!(cursor.set(2));
        assert!(!cursor.set(3));
        assert_eq!(cursor.index(), 2);
    }

    #[test]
    fn empty_playlist_never_steps() {
        let mut cursor = PlaylistCursor::default();
        assert!(cursor.step(1).is_none());
        assert!(cursor.step(-1).is_none());
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn volume_maps_to_gain_with_clamping() {
        assert_eq!(gain(0), 0.0);
        assert_eq!(gain(70), 0.7);
        assert_eq!(gain(100), 1.0);
        assert_eq!(gain(150), 1.0);
    }

    #[test]
    fn seek_target_maps_percent_to_offset() {
        assert_eq!(seek_target(0, 200_000), Some(0));
        assert_eq!(seek_target(50, 200_000), Some(100_000));
        assert_eq!(seek_target(100, 200_000), Some(200_000));
        assert_eq!(seek_target(120, 200_000), Some(200_000));
    }

    #[test]
    fn seek_target_without_duration_is_none() {
        assert_eq!(seek_target(50, 0), None);
    }
}
