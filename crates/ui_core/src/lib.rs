//! Presentation state controllers for the mobile streaming front end.
//!
//! Each controller owns one piece of transient view state plus the logic that
//! transitions it: the cinematic intro ident, onboarding media playback, the
//! hero carousel, and the shorts feed overlay with its shared dock. They are
//! synchronous state machines driven by an `Instant` the frame loop passes in;
//! deadlines are plain fields rather than OS timers, so dropping a controller
//! cancels everything that was pending and nothing can fire after teardown.
//!
//! User input always supersedes an in-flight timed transition for the same
//! controller: event methods rewrite the pending deadline instead of stacking
//! a second one.

pub mod carousel;
pub mod chrome;
pub mod error;
pub mod intro;
pub mod media;
pub mod overlay;

pub use carousel::{CarouselController, HeroRotator};
pub use chrome::HeaderBlur;
pub use error::PlaybackError;
pub use intro::{IntroController, IntroPhase};
pub use media::{MediaController, MediaSurface, PlaybackState};
pub use overlay::{DockTab, OverlayController, ScrollLock};

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
