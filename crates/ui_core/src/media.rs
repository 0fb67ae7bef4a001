//! Background media playback: muted autoplay, a fade-in volume ramp, and the
//! sound/volume controls shared by the onboarding hero and the home hero card.

use std::time::{Duration, Instant};

use crate::error::PlaybackError;

/// Volume the fade-in ramp climbs toward unless the user picked another.
pub const DEFAULT_TARGET_VOLUME: f32 = 0.35;
/// Ramp increment applied each interval.
pub const RAMP_STEP: f32 = 0.02;
/// Ramp interval.
pub const RAMP_INTERVAL: Duration = Duration::from_millis(100);

/// The platform media element, consumed as an opaque capability. `play` may
/// fail asynchronously (autoplay policy); everything else is infallible.
pub trait MediaSurface {
    fn play(&mut self) -> Result<(), PlaybackError>;
    fn pause(&mut self);
    fn set_muted(&mut self, muted: bool);
    fn set_volume(&mut self, volume: f32);
}

/// Held playback state, mirrored into the surface on every mutation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackState {
    pub playing: bool,
    pub muted: bool,
    /// Last user-chosen (or default) target volume, 0.0..=1.0.
    pub volume: f32,
    /// Whether the volume slider is revealed next to the sound toggle.
    pub show_volume: bool,
}

#[derive(Debug, Clone, Copy)]
struct Ramp {
    level: f32,
    next_step_at: Instant,
}

#[derive(Debug)]
pub struct MediaController {
    state: PlaybackState,
    ramp: Option<Ramp>,
}

impl Default for MediaController {
    fn default() -> Self {
        Self::new()
    }
}

impl MediaController {
    pub fn new() -> Self {
        Self {
            state: PlaybackState {
                playing: false,
                muted: true,
                volume: DEFAULT_TARGET_VOLUME,
                show_volume: false,
            },
            ramp: None,
        }
    }

    /// Controller seeded with a previously chosen target volume.
    pub fn with_volume(volume: f32) -> Self {
        let mut controller = Self::new();
        controller.state.volume = volume.clamp(0.0, 1.0);
        controller
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Attempts muted autoplay. A rejection is swallowed: the surface stays
    /// paused and no error is surfaced. On success the fade-in ramp starts
    /// from zero.
    pub fn start(&mut self, now: Instant, surface: &mut dyn MediaSurface) {
        surface.set_muted(true);
        surface.set_volume(0.0);
        match surface.play() {
            Ok(()) => {
                self.state.playing = true;
                self.ramp = Some(Ramp {
                    level: 0.0,
                    next_step_at: now + RAMP_INTERVAL,
                });
            }
            Err(err) => {
                tracing::debug!(%err, "autoplay rejected; staying paused");
            }
        }
    }

    /// Advances the fade-in ramp. Once the target is reached the ramp stops
    /// for good; explicit volume changes also cancel it.
    pub fn tick(&mut self, now: Instant, surface: &mut dyn MediaSurface) {
        let Some(mut ramp) = self.ramp else {
            return;
        };
        while now >= ramp.next_step_at {
            ramp.level += RAMP_STEP;
            if ramp.level >= self.state.volume {
                surface.set_volume(self.state.volume);
                self.ramp = None;
                return;
            }
            surface.set_volume(ramp.level);
            ramp.next_step_at += RAMP_INTERVAL;
        }
        self.ramp = Some(ramp);
    }

    /// Flips muted. Unmuting reveals the volume slider and restores the last
    /// target volume; muting hides the slider.
    pub fn toggle_sound(&mut self, surface: &mut dyn MediaSurface) {
        self.state.muted = !self.state.muted;
        surface.set_muted(self.state.muted);
        if self.state.muted {
            self.state.show_volume = false;
        } else {
            self.state.show_volume = true;
            self.ramp = None;
            surface.set_volume(self.state.volume);
        }
    }

    /// Sets the target volume. Zero forces muted; anything above forces
    /// unmuted. Applied to the held state and the surface in the same call.
    pub fn set_volume(&mut self, volume: f32, surface: &mut dyn MediaSurface) {
        let volume = volume.clamp(0.0, 1.0);
        self.ramp = None;
        self.state.volume = volume;
        surface.set_volume(volume);
        self.state.muted = volume == 0.0;
        surface.set_muted(self.state.muted);
    }

    /// Play/pause toggle for the hero preview card. Playback always restarts
    /// muted; an autoplay rejection leaves the card on its poster.
    pub fn toggle_play(&mut self, surface: &mut dyn MediaSurface) {
        if self.state.playing {
            surface.pause();
            self.state.playing = false;
        } else {
            self.state.muted = true;
            surface.set_muted(true);
            match surface.play() {
                Ok(()) => self.state.playing = true,
                Err(err) => tracing::debug!(%err, "play rejected; staying on poster"),
            }
        }
    }

    /// Next ramp deadline; the frame loop uses it to schedule a repaint.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.ramp.map(|ramp| ramp.next_step_at)
    }
}
