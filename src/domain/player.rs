//! Preview playback model.
//!
//! Models the storefront's audio player: one loaded source at a time, a
//! 30-second preview cap enforced on every position update, and circular
//! next/previous navigation over an ordered playlist. The actual audio
//! element lives client-side; this type owns the transport state.

use thiserror::Error;

use crate::domain::catalog::Track;

/// Hard cap on preview playback, in seconds.
pub const PREVIEW_CAP_SECONDS: f64 = 30.0;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlayerError {
    #[error("playlist must not be empty")]
    EmptyPlaylist,
}

/// Transport state for the preview player.
#[derive(Debug)]
pub struct PreviewPlayer {
    playlist: Vec<Track>,
    current: usize,
    position: f64,
    volume: f64,
    playing: bool,
}

impl PreviewPlayer {
    /// Creates a player over an ordered, non-empty playlist. The first track
    /// is loaded, stopped, at position 0.
    pub fn new(playlist: Vec<Track>) -> Result<Self, PlayerError> {
        if playlist.is_empty() {
            return Err(PlayerError::EmptyPlaylist);
        }
        Ok(Self {
            playlist,
            current: 0,
            position: 0.0,
            volume: 0.8,
            playing: false,
        })
    }

    pub fn current_track(&self) -> &Track {
        &self.playlist[self.current]
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn play(&mut self) {
        self.playing = true;
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    pub fn toggle(&mut self) {
        self.playing = !self.playing;
    }

    /// Seeks within the preview window. Negative values clamp to 0; values at
    /// or past the cap trigger the cap behavior immediately.
    pub fn seek(&mut self, seconds: f64) {
        let target = seconds.max(0.0);
        self.on_position_update(target);
    }

    /// Volume is clamped to `[0, 1]`.
    pub fn set_volume(&mut self, volume: f64) {
        self.volume = volume.clamp(0.0, 1.0);
    }

    /// Loads the track at `index` (modulo playlist length), replacing the
    /// current source: playback stops and the position resets.
    pub fn select(&mut self, index: usize) {
        self.current = index % self.playlist.len();
        self.position = 0.0;
        self.playing = false;
    }

    /// Advances to the next track, wrapping past the end.
    pub fn next(&mut self) {
        let was_playing = self.playing;
        self.select((self.current + 1) % self.playlist.len());
        self.playing = was_playing;
    }

    /// Steps back to the previous track, wrapping before the start.
    pub fn previous(&mut self) {
        let was_playing = self.playing;
        let len = self.playlist.len();
        self.select((self.current + len - 1) % len);
        self.playing = was_playing;
    }

    /// Feeds a playback-position report from the audio element.
    ///
    /// The preview cap is re-checked on every update, not just once: at or
    /// past 30 seconds playback pauses and the position resets to 0,
    /// regardless of the source's true duration.
    pub fn on_position_update(&mut self, seconds: f64) {
        if seconds >= PREVIEW_CAP_SECONDS {
            self.playing = false;
            self.position = 0.0;
        } else {
            self.position = seconds.max(0.0);
        }
    }

    /// Handles the source's natural end of playback.
    ///
    /// Distinct from the preview cap: reaching the real end advances to the
    /// next track and keeps playing.
    pub fn on_track_ended(&mut self) {
        self.select((self.current + 1) % self.playlist.len());
        self.playing = true;
    }
}
