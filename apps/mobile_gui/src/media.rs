//! Stand-in platform media element.
//!
//! The real video element is an opaque platform capability; this one tracks
//! the state the controllers push and logs transitions so the contract stays
//! observable. It can be told to reject `play` to exercise the autoplay-policy
//! path end to end.

use ui_core::{MediaSurface, PlaybackError};

#[derive(Debug)]
pub struct PlatformMedia {
    label: &'static str,
    autoplay_allowed: bool,
    pub playing: bool,
    pub muted: bool,
    pub volume: f32,
}

impl PlatformMedia {
    pub fn new(label: &'static str, autoplay_allowed: bool) -> Self {
        Self {
            label,
            autoplay_allowed,
            playing: false,
            muted: true,
            volume: 0.0,
        }
    }
}

impl MediaSurface for PlatformMedia {
    fn play(&mut self) -> Result<(), PlaybackError> {
        if !self.autoplay_allowed && self.muted {
            return Err(PlaybackError::AutoplayBlocked);
        }
        self.playing = true;
        tracing::debug!(surface = self.label, "playback started");
        Ok(())
    }

    fn pause(&mut self) {
        self.playing = false;
        tracing::debug!(surface = self.label, "playback paused");
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        tracing::debug!(surface = self.label, muted, "mute changed");
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
    }
}
