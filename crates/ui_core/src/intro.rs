//! Cinematic intro ident: a timed black-screen sequence that hands off to
//! onboarding, skippable by tap.

use std::time::{Duration, Instant};

/// How long the ident plays before the fade begins.
pub const IDENT_HOLD: Duration = Duration::from_millis(1900);
/// Total runtime of the timed sequence (hold plus fade).
pub const IDENT_TOTAL: Duration = Duration::from_millis(2450);
/// Fade length after a user skip.
pub const SKIP_FADE: Duration = Duration::from_millis(350);
/// Hand-off delay when the platform requests reduced motion.
pub const REDUCED_MOTION_DELAY: Duration = Duration::from_millis(150);

/// Progression is one-way: `Ident` → `FadeOut` → `Done`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntroPhase {
    /// The ident is playing.
    Ident,
    /// Fading to black before hand-off.
    FadeOut,
    /// Terminal: the next screen owns the surface.
    Done,
}

#[derive(Debug)]
pub struct IntroController {
    phase: IntroPhase,
    /// Pending `Ident` → `FadeOut` deadline. `None` once superseded.
    fade_at: Option<Instant>,
    /// Pending hand-off deadline. Always meaningful until `Done`.
    done_at: Instant,
    reduce_motion: bool,
}

impl IntroController {
    pub fn new(now: Instant, reduce_motion: bool) -> Self {
        if reduce_motion {
            // Bypass the sequence entirely; hand off after a minimal delay.
            Self {
                phase: IntroPhase::Ident,
                fade_at: None,
                done_at: now + REDUCED_MOTION_DELAY,
                reduce_motion,
            }
        } else {
            Self {
                phase: IntroPhase::Ident,
                fade_at: Some(now + IDENT_HOLD),
                done_at: now + IDENT_TOTAL,
                reduce_motion,
            }
        }
    }

    pub fn phase(&self) -> IntroPhase {
        self.phase
    }

    pub fn is_done(&self) -> bool {
        self.phase == IntroPhase::Done
    }

    /// Advances past any expired deadline. Returns true if the phase changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let before = self.phase;
        match self.phase {
            IntroPhase::Ident => {
                if now >= self.done_at {
                    self.phase = IntroPhase::Done;
                } else if self.fade_at.is_some_and(|at| now >= at) {
                    self.phase = IntroPhase::FadeOut;
                }
            }
            IntroPhase::FadeOut => {
                if now >= self.done_at {
                    self.phase = IntroPhase::Done;
                }
            }
            IntroPhase::Done => {}
        }
        if self.phase != before {
            tracing::debug!(from = ?before, to = ?self.phase, "intro phase advanced");
            true
        } else {
            false
        }
    }

    /// User tap anywhere on the ident: fade out now, hand off shortly after.
    /// Supersedes the timed sequence; a tap after hand-off is a no-op.
    pub fn skip(&mut self, now: Instant) {
        if self.phase == IntroPhase::Done {
            return;
        }
        self.phase = IntroPhase::FadeOut;
        self.fade_at = None;
        // Only ever shortens: an imminent hand-off (reduced motion) stands.
        self.done_at = self.done_at.min(now + SKIP_FADE);
        tracing::debug!("intro skipped by user tap");
    }

    /// Platform reduced-motion preference changed after mount.
    pub fn set_reduce_motion(&mut self, enabled: bool, now: Instant) {
        if enabled == self.reduce_motion {
            return;
        }
        self.reduce_motion = enabled;
        if enabled && self.phase != IntroPhase::Done {
            self.fade_at = None;
            self.done_at = now + REDUCED_MOTION_DELAY;
        }
    }

    /// Next pending deadline; the frame loop uses it to schedule a repaint.
    pub fn next_deadline(&self) -> Option<Instant> {
        match self.phase {
            IntroPhase::Done => None,
            IntroPhase::FadeOut => Some(self.done_at),
            IntroPhase::Ident => Some(match self.fade_at {
                Some(fade_at) => fade_at.min(self.done_at),
                None => self.done_at,
            }),
        }
    }
}
