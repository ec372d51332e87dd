use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Playback position shared between the monitor task and the UI. All
/// values in milliseconds; a zero total means the duration is unknown.
#[derive(Default, Debug)]
pub struct TrackProgress {
    position_millis: AtomicU64,
    total_millis: AtomicU64,
}

impl TrackProgress {
    pub fn set_position(&self, position: Duration) {
        self.position_millis
            .store(position.as_millis() as u64, Ordering::Relaxed);
    }

    pub fn set_total(&self, total: Duration) {
        self.total_millis
            .store(total.as_millis() as u64, Ordering::Relaxed);
    }

    /// `(position_ms, total_ms)`.
    pub fn get(&self) -> (u64, u64) {
        (
            self.position_millis.load(Ordering::Relaxed),
            self.total_millis.load(Ordering::Relaxed),
        )
    }

    /// Position as a fraction of the total, 0.0 while the total is unknown.
    pub fn ratio(&self) -> f64 {
        let (position, total) = self.get();
        if total == 0 {
            0.0
        } else {
            (position as f64 / total as f64).clamp(0.0, 1.0)
        }
    }

    pub fn reset(&self) {
        self.position_millis.store(0, Ordering::Relaxed);
        self.total_millis.store(0, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_is_zero_without_a_known_total() {
        let progress = TrackProgress::default();
        progress.set_position(Duration::from_secs(30));
        assert_eq!(progress.ratio(), 0.0);
    }

    #[test]
    fn ratio_tracks_position_and_clamps() {
        let progress = TrackProgress::default();
        progress.set_total(Duration::from_secs(200));
        progress.set_position(Duration::from_secs(50));
        assert_eq!(progress.ratio(), 0.25);

        progress.set_position(Duration::from_secs(400));
        assert_eq!(progress.ratio(), 1.0);
    }
}
