//! Simulated playback clock.
//!
//! Stands in for the hosting media player: it owns the duration from the
//! manifest and advances a playback position on the UI tick while playing.
//! Seeks clamp into `[0, duration]` and resume playback, matching the
//! "set the time, then play" behavior chapter clicks trigger in real players.

use std::time::Instant;

#[derive(Debug, Clone)]
pub struct PlaybackState {
    duration: f64,
    position: f64,
    rate: f64,
    playing: bool,
    last_tick: Option<Instant>,
}

impl PlaybackState {
    pub fn new(duration: f64, rate: f64) -> Self {
        let duration = if duration.is_finite() { duration.max(0.0) } else { 0.0 };
        let rate = if rate.is_finite() && rate > 0.0 { rate } else { 1.0 };
        PlaybackState {
            duration,
            position: 0.0,
            rate,
            playing: false,
            last_tick: None,
        }
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn play(&mut self) {
        self.playing = true;
        // Drop the stale tick so paused time is not counted as progress.
        self.last_tick = None;
    }

    pub fn pause(&mut self) {
        self.playing = false;
        self.last_tick = None;
    }

    pub fn toggle(&mut self) {
        if self.playing { self.pause() } else { self.play() }
    }

    /// Jump to `position` (clamped) and resume playback.
    pub fn seek(&mut self, position: f64) {
        if position.is_finite() {
            self.position = position.clamp(0.0, self.duration);
        }
        self.play();
    }

    /// Advance the clock to `now`. Returns `true` when the position moved.
    /// Pauses automatically once the end of the media is reached.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.playing {
            return false;
        }
        let elapsed = match self.last_tick {
            Some(previous) => now.saturating_duration_since(previous).as_secs_f64(),
            None => 0.0,
        };
        self.last_tick = Some(now);
        if elapsed <= 0.0 {
            return false;
        }

        let next = (self.position + elapsed * self.rate).min(self.duration);
        let moved = next > self.position;
        self.position = next;
        if self.position >= self.duration {
            self.playing = false;
        }
        moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn starts_paused_at_zero() {
        let playback = PlaybackState::new(120.0, 1.0);
        assert_eq!(playback.position(), 0.0);
        assert!(!playback.is_playing());
    }

    #[test]
    fn ticks_advance_only_while_playing() {
        let mut playback = PlaybackState::new(120.0, 1.0);
        let start = Instant::now();
        assert!(!playback.tick(start));

        playback.play();
        playback.tick(start);
        assert!(playback.tick(start + Duration::from_millis(500)));
        assert!((playback.position() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn rate_scales_progress() {
        let mut playback = PlaybackState::new(120.0, 2.0);
        let start = Instant::now();
        playback.play();
        playback.tick(start);
        playback.tick(start + Duration::from_secs(3));
        assert!((playback.position() - 6.0).abs() < 1e-6);
    }

    #[test]
    fn clamps_and_pauses_at_the_end() {
        let mut playback = PlaybackState::new(10.0, 1.0);
        let start = Instant::now();
        playback.play();
        playback.tick(start);
        playback.tick(start + Duration::from_secs(60));
        assert_eq!(playback.position(), 10.0);
        assert!(!playback.is_playing());
    }

    #[test]
    fn seek_clamps_and_resumes() {
        let mut playback = PlaybackState::new(100.0, 1.0);
        playback.seek(250.0);
        assert_eq!(playback.position(), 100.0);
        assert!(playback.is_playing());

        playback.seek(-5.0);
        assert_eq!(playback.position(), 0.0);

        playback.seek(f64::NAN);
        assert_eq!(playback.position(), 0.0, "non-finite seeks are ignored");
    }

    #[test]
    fn paused_time_does_not_count_after_resume() {
        let mut playback = PlaybackState::new(120.0, 1.0);
        let start = Instant::now();
        playback.play();
        playback.tick(start);
        playback.pause();

        playback.play();
        // First tick after resume only re-arms the clock.
        assert!(!playback.tick(start + Duration::from_secs(30)));
        assert!(playback.position() < 1.0);
    }
}
