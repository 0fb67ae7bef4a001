use std::time::{Duration, Instant};

use super::*;
use crate::carousel::{AUTO_ADVANCE_EVERY, HERO_CROSSFADE, HERO_ROTATE_EVERY, RESUME_COOLDOWN};
use crate::intro::{IDENT_HOLD, IDENT_TOTAL, REDUCED_MOTION_DELAY, SKIP_FADE};
use crate::media::RAMP_INTERVAL;

const MS: Duration = Duration::from_millis(1);

/// Records every mutation the controller pushes at the platform element.
#[derive(Debug)]
struct RecordingSurface {
    reject_play: bool,
    playing: bool,
    muted: bool,
    volume: f32,
    play_calls: u32,
}

impl RecordingSurface {
    fn ok() -> Self {
        Self {
            reject_play: false,
            playing: false,
            muted: false,
            volume: 1.0,
            play_calls: 0,
        }
    }

    fn rejecting() -> Self {
        Self {
            reject_play: true,
            ..Self::ok()
        }
    }
}

impl MediaSurface for RecordingSurface {
    fn play(&mut self) -> Result<(), PlaybackError> {
        self.play_calls += 1;
        if self.reject_play {
            Err(PlaybackError::AutoplayBlocked)
        } else {
            self.playing = true;
            Ok(())
        }
    }

    fn pause(&mut self) {
        self.playing = false;
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
    }
}

// ---- intro ----

#[test]
fn timed_sequence_hits_documented_deadlines() {
    let t0 = Instant::now();
    let mut intro = IntroController::new(t0, false);

    assert!(!intro.tick(t0 + IDENT_HOLD - MS));
    assert_eq!(intro.phase(), IntroPhase::Ident);

    assert!(intro.tick(t0 + IDENT_HOLD));
    assert_eq!(intro.phase(), IntroPhase::FadeOut);

    assert!(!intro.tick(t0 + IDENT_TOTAL - MS));
    assert!(intro.tick(t0 + IDENT_TOTAL));
    assert_eq!(intro.phase(), IntroPhase::Done);

    // Terminal: further ticks and taps change nothing.
    assert!(!intro.tick(t0 + IDENT_TOTAL + Duration::from_secs(5)));
    intro.skip(t0 + IDENT_TOTAL + Duration::from_secs(5));
    assert_eq!(intro.phase(), IntroPhase::Done);
}

#[test]
fn skip_supersedes_timed_sequence() {
    for tap_after in [0u64, 500, 1200, 1899] {
        let t0 = Instant::now();
        let tap_at = t0 + Duration::from_millis(tap_after);
        let mut intro = IntroController::new(t0, false);
        intro.tick(tap_at);
        intro.skip(tap_at);
        assert_eq!(intro.phase(), IntroPhase::FadeOut, "tap at {tap_after}ms");

        assert!(!intro.tick(tap_at + SKIP_FADE - MS));
        assert!(intro.tick(tap_at + SKIP_FADE));
        assert_eq!(intro.phase(), IntroPhase::Done, "tap at {tap_after}ms");
    }
}

#[test]
fn reduced_motion_bypasses_ident() {
    let t0 = Instant::now();
    let mut intro = IntroController::new(t0, true);

    // A tap must not push the hand-off past the reduced-motion deadline.
    intro.skip(t0 + Duration::from_millis(50));

    assert!(intro.tick(t0 + REDUCED_MOTION_DELAY));
    assert_eq!(intro.phase(), IntroPhase::Done);
}

#[test]
fn reduced_motion_change_mid_sequence_short_circuits() {
    let t0 = Instant::now();
    let mut intro = IntroController::new(t0, false);
    let changed_at = t0 + Duration::from_millis(500);
    intro.set_reduce_motion(true, changed_at);

    assert!(intro.tick(changed_at + REDUCED_MOTION_DELAY));
    assert_eq!(intro.phase(), IntroPhase::Done);
}

#[test]
fn intro_reports_pending_deadlines_until_done() {
    let t0 = Instant::now();
    let mut intro = IntroController::new(t0, false);
    assert_eq!(intro.next_deadline(), Some(t0 + IDENT_HOLD));

    intro.tick(t0 + IDENT_HOLD);
    assert_eq!(intro.next_deadline(), Some(t0 + IDENT_TOTAL));

    intro.tick(t0 + IDENT_TOTAL);
    assert_eq!(intro.next_deadline(), None);
}

// ---- media ----

#[test]
fn autoplay_starts_muted_and_rejection_is_swallowed() {
    let t0 = Instant::now();

    let mut surface = RecordingSurface::ok();
    let mut media = MediaController::new();
    media.start(t0, &mut surface);
    assert!(media.state().playing);
    assert!(surface.muted);
    assert_eq!(surface.volume, 0.0);

    let mut blocked = RecordingSurface::rejecting();
    let mut media = MediaController::new();
    media.start(t0, &mut blocked);
    assert!(!media.state().playing);
    assert!(!blocked.playing);
    assert_eq!(media.next_deadline(), None, "no ramp without playback");
}

#[test]
fn volume_ramp_steps_up_then_stops_at_target() {
    let t0 = Instant::now();
    let mut surface = RecordingSurface::ok();
    let mut media = MediaController::new();
    media.start(t0, &mut surface);

    media.tick(t0 + RAMP_INTERVAL, &mut surface);
    assert!((surface.volume - 0.02).abs() < 1e-5);

    // 0.02/step toward 0.35 caps after 18 intervals.
    media.tick(t0 + RAMP_INTERVAL * 18, &mut surface);
    assert!((surface.volume - 0.35).abs() < 1e-5);
    assert_eq!(media.next_deadline(), None);

    // No further creep.
    media.tick(t0 + RAMP_INTERVAL * 40, &mut surface);
    assert!((surface.volume - 0.35).abs() < 1e-5);
}

#[test]
fn toggle_sound_reveals_slider_and_restores_volume() {
    let t0 = Instant::now();
    let mut surface = RecordingSurface::ok();
    let mut media = MediaController::new();
    media.start(t0, &mut surface);

    media.toggle_sound(&mut surface);
    let state = media.state();
    assert!(!state.muted);
    assert!(state.show_volume);
    assert!(!surface.muted);
    assert!((surface.volume - state.volume).abs() < 1e-5);

    media.toggle_sound(&mut surface);
    assert!(media.state().muted);
    assert!(!media.state().show_volume);
    assert!(surface.muted);
}

#[test]
fn zero_volume_forces_mute() {
    let mut surface = RecordingSurface::ok();
    let mut media = MediaController::new();

    media.set_volume(0.0, &mut surface);
    assert!(media.state().muted);
    assert!(surface.muted);

    media.set_volume(0.6, &mut surface);
    assert!(!media.state().muted);
    assert!(!surface.muted);
    assert!((media.state().volume - 0.6).abs() < 1e-5);
    assert!((surface.volume - 0.6).abs() < 1e-5);

    // Out-of-range input clamps rather than propagating.
    media.set_volume(4.2, &mut surface);
    assert!((media.state().volume - 1.0).abs() < 1e-5);
}

#[test]
fn seeded_target_volume_is_clamped() {
    let media = MediaController::with_volume(2.0);
    assert!((media.state().volume - 1.0).abs() < 1e-5);
    let media = MediaController::with_volume(0.5);
    assert!((media.state().volume - 0.5).abs() < 1e-5);
}

#[test]
fn hero_card_play_toggle_restarts_muted() {
    let mut surface = RecordingSurface::ok();
    let mut media = MediaController::new();

    media.toggle_play(&mut surface);
    assert!(media.state().playing);
    assert!(surface.muted);

    media.toggle_play(&mut surface);
    assert!(!media.state().playing);
    assert!(!surface.playing);
}

// ---- carousel ----

#[test]
fn navigation_wraps_modulo_len() {
    let t0 = Instant::now();
    let mut carousel = CarouselController::new(5, t0);

    carousel.previous(t0);
    assert_eq!(carousel.active_index(), 4);
    carousel.next(t0);
    assert_eq!(carousel.active_index(), 0);
    carousel.go_to(2, t0);
    assert_eq!(carousel.active_index(), 2);
}

#[test]
fn next_from_last_index_wraps_to_zero() {
    let t0 = Instant::now();
    let mut carousel = CarouselController::new(5, t0);
    carousel.go_to(3, t0);

    carousel.next(t0);
    assert_eq!(carousel.active_index(), 4);
    carousel.next(t0);
    assert_eq!(carousel.active_index(), 0);
}

#[test]
fn autoplay_advances_on_interval() {
    let t0 = Instant::now();
    let mut carousel = CarouselController::new(3, t0);

    assert!(!carousel.tick(t0 + AUTO_ADVANCE_EVERY - MS));
    assert!(carousel.tick(t0 + AUTO_ADVANCE_EVERY));
    assert_eq!(carousel.active_index(), 1);
    assert!(carousel.tick(t0 + AUTO_ADVANCE_EVERY * 2));
    assert_eq!(carousel.active_index(), 2);
}

#[test]
fn autoplay_suppressed_while_pointer_over() {
    let t0 = Instant::now();
    let mut carousel = CarouselController::new(3, t0);

    carousel.pointer_enter();
    assert!(!carousel.is_auto_advancing());
    assert!(!carousel.tick(t0 + AUTO_ADVANCE_EVERY * 10));
    assert_eq!(carousel.active_index(), 0);

    let left_at = t0 + AUTO_ADVANCE_EVERY * 10;
    carousel.pointer_leave(left_at);
    assert!(carousel.is_auto_advancing());
    assert!(!carousel.tick(left_at + AUTO_ADVANCE_EVERY - MS));
    assert!(carousel.tick(left_at + AUTO_ADVANCE_EVERY));
    assert_eq!(carousel.active_index(), 1);
}

#[test]
fn user_navigation_arms_resume_cooldown() {
    let t0 = Instant::now();
    let mut carousel = CarouselController::new(4, t0);

    carousel.next(t0);
    assert_eq!(carousel.active_index(), 1);
    assert!(!carousel.is_auto_advancing());

    // Nothing fires during the cooldown.
    assert!(!carousel.tick(t0 + RESUME_COOLDOWN - MS));
    assert_eq!(carousel.active_index(), 1);

    // Expiry re-arms the interval; the advance lands one interval later.
    assert!(!carousel.tick(t0 + RESUME_COOLDOWN));
    assert!(carousel.is_auto_advancing());
    assert!(carousel.tick(t0 + RESUME_COOLDOWN + AUTO_ADVANCE_EVERY));
    assert_eq!(carousel.active_index(), 2);
}

#[test]
fn manual_scroll_snaps_to_nearest_item() {
    let t0 = Instant::now();
    let mut carousel = CarouselController::new(5, t0);

    assert!(carousel.sync_from_scroll(760.0, 350.0, t0));
    assert_eq!(carousel.active_index(), 2);
    assert!(!carousel.is_auto_advancing());

    // Offsets past the end clamp to the last item.
    assert!(carousel.sync_from_scroll(9_999.0, 350.0, t0));
    assert_eq!(carousel.active_index(), 4);
}

#[test]
fn programmatic_changes_request_one_smooth_scroll() {
    let t0 = Instant::now();
    let mut carousel = CarouselController::new(5, t0);

    carousel.go_to(3, t0);
    assert_eq!(carousel.take_pending_scroll(), Some(3));
    assert_eq!(carousel.take_pending_scroll(), None);
    assert_eq!(carousel.target_offset(350.0), 1050.0);

    // A scroll-driven sync must not scroll back programmatically.
    carousel.sync_from_scroll(0.0, 350.0, t0);
    assert_eq!(carousel.take_pending_scroll(), None);
}

#[test]
fn hero_rotation_dips_then_advances() {
    let t0 = Instant::now();
    let mut hero = HeroRotator::new(3, t0);

    assert!(hero.tick(t0 + HERO_ROTATE_EVERY));
    assert!(!hero.is_visible());
    assert_eq!(hero.index(), 0);

    assert!(hero.tick(t0 + HERO_ROTATE_EVERY + HERO_CROSSFADE));
    assert!(hero.is_visible());
    assert_eq!(hero.index(), 1);
}

#[test]
fn pausing_hero_rotation_never_parks_mid_dip() {
    let t0 = Instant::now();
    let mut hero = HeroRotator::new(3, t0);
    hero.tick(t0 + HERO_ROTATE_EVERY);
    assert!(!hero.is_visible());

    hero.set_paused(true, t0 + HERO_ROTATE_EVERY);
    assert!(hero.is_visible());
    assert_eq!(hero.index(), 1);
    assert!(!hero.tick(t0 + HERO_ROTATE_EVERY * 10));

    hero.set_paused(false, t0 + HERO_ROTATE_EVERY * 10);
    assert!(hero.tick(t0 + HERO_ROTATE_EVERY * 11));
}

// ---- overlay + dock ----

#[test]
fn open_close_restores_home_state() {
    let mut overlay = OverlayController::new();

    overlay.open();
    assert!(overlay.is_open());
    assert_eq!(overlay.active_tab(), DockTab::Shorts);
    assert!(overlay.is_scroll_locked());

    overlay.close();
    assert!(!overlay.is_open());
    assert_eq!(overlay.active_tab(), DockTab::Home);
    assert!(!overlay.is_scroll_locked());
}

#[test]
fn double_open_is_idempotent() {
    let mut overlay = OverlayController::new();
    overlay.open();
    overlay.open();
    assert!(overlay.is_open());
    assert!(overlay.is_scroll_locked());

    overlay.close();
    overlay.close();
    assert!(!overlay.is_open());
    assert!(!overlay.is_scroll_locked());
}

#[test]
fn dock_center_action_opens_and_home_tab_closes() {
    let mut overlay = OverlayController::new();

    overlay.select_tab(DockTab::Shorts);
    assert!(overlay.is_open());
    assert_eq!(overlay.active_tab(), DockTab::Shorts);

    overlay.select_tab(DockTab::Home);
    assert!(!overlay.is_open());
    assert_eq!(overlay.active_tab(), DockTab::Home);

    // Ordinary tabs only move the highlight.
    overlay.select_tab(DockTab::Discover);
    assert!(!overlay.is_open());
    assert_eq!(overlay.active_tab(), DockTab::Discover);
}

#[test]
fn feed_indicator_rounds_by_viewport_and_clamps() {
    let mut overlay = OverlayController::new();
    overlay.open();

    overlay.sync_feed_scroll(1_800.0, 600.0);
    assert_eq!(overlay.feed_indicator(4), (4, 4));

    overlay.sync_feed_scroll(890.0, 600.0);
    assert_eq!(overlay.feed_indicator(4), (2, 4));

    // Overscroll past the last slide stays clamped to the total.
    overlay.sync_feed_scroll(10_000.0, 600.0);
    assert_eq!(overlay.feed_indicator(4), (4, 4));
}

// ---- chrome ----

#[test]
fn header_blur_flips_past_threshold() {
    let mut header = HeaderBlur::default();
    assert!(!header.on_scroll(10.0));
    assert!(!header.is_scrolled());

    assert!(header.on_scroll(10.5));
    assert!(header.is_scrolled());
    assert!(!header.on_scroll(240.0));

    assert!(header.on_scroll(0.0));
    assert!(!header.is_scrolled());
}
