//! Hero carousel state: timer-driven auto-advance, user navigation with a
//! resume cooldown, and bidirectional scroll synchronisation.

use std::time::{Duration, Instant};

/// Auto-advance interval.
pub const AUTO_ADVANCE_EVERY: Duration = Duration::from_secs(5);
/// Cooldown before autoplay resumes after explicit navigation.
pub const RESUME_COOLDOWN: Duration = Duration::from_secs(10);

/// Spotlight rotation interval on the home screen.
pub const HERO_ROTATE_EVERY: Duration = Duration::from_secs(30);
/// Crossfade dip between two spotlight entries.
pub const HERO_CROSSFADE: Duration = Duration::from_millis(700);

/// `active_index` stays in `[0, len)` and wraps modulo `len` in both
/// directions. Autoplay never fires while the pointer is over the carousel.
#[derive(Debug)]
pub struct CarouselController {
    len: usize,
    active: usize,
    pointer_over: bool,
    /// Cooldown armed by explicit navigation; autoplay is off until it expires.
    suspended_until: Option<Instant>,
    /// Next timer-driven advance. Stale while suspended or pointer-over;
    /// re-armed whenever autoplay becomes eligible again.
    next_advance_at: Instant,
    /// One-shot request for the view to scroll to `active` smoothly.
    pending_scroll: bool,
}

impl CarouselController {
    pub fn new(len: usize, now: Instant) -> Self {
        debug_assert!(len > 0, "carousel over an empty list");
        Self {
            len,
            active: 0,
            pointer_over: false,
            suspended_until: None,
            next_advance_at: now + AUTO_ADVANCE_EVERY,
            pending_scroll: false,
        }
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_auto_advancing(&self) -> bool {
        !self.pointer_over && self.suspended_until.is_none()
    }

    pub fn is_pointer_over(&self) -> bool {
        self.pointer_over
    }

    /// Expires the cooldown and fires any due auto-advance. Returns true if
    /// the active index changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if let Some(until) = self.suspended_until {
            if now < until {
                return false;
            }
            self.suspended_until = None;
            self.next_advance_at = now + AUTO_ADVANCE_EVERY;
        }
        if self.pointer_over {
            return false;
        }
        if now >= self.next_advance_at {
            self.active = (self.active + 1) % self.len;
            self.next_advance_at = now + AUTO_ADVANCE_EVERY;
            self.pending_scroll = true;
            return true;
        }
        false
    }

    pub fn next(&mut self, now: Instant) {
        self.active = (self.active + 1) % self.len;
        self.after_user_navigation(now);
    }

    pub fn previous(&mut self, now: Instant) {
        self.active = (self.active + self.len - 1) % self.len;
        self.after_user_navigation(now);
    }

    /// Jump to a dot. Callers pass an index from the rendered `0..len` row.
    pub fn go_to(&mut self, index: usize, now: Instant) {
        debug_assert!(index < self.len);
        self.active = index;
        self.after_user_navigation(now);
    }

    fn after_user_navigation(&mut self, now: Instant) {
        self.suspended_until = Some(now + RESUME_COOLDOWN);
        self.pending_scroll = true;
    }

    /// Pointer entered the carousel: autoplay stays suspended until it leaves.
    pub fn pointer_enter(&mut self) {
        self.pointer_over = true;
    }

    /// Pointer left: autoplay resumes (next advance one full interval out)
    /// unless a navigation cooldown is still running.
    pub fn pointer_leave(&mut self, now: Instant) {
        self.pointer_over = false;
        if self.suspended_until.is_none() {
            self.next_advance_at = now + AUTO_ADVANCE_EVERY;
        }
    }

    /// Manual scroll gesture: snap the index to the nearest item boundary.
    /// Returns true if the index changed, which also suspends autoplay.
    pub fn sync_from_scroll(&mut self, offset: f32, item_width: f32, now: Instant) -> bool {
        if item_width <= 0.0 {
            return false;
        }
        let nearest = (offset / item_width).round().max(0.0) as usize;
        let nearest = nearest.min(self.len - 1);
        if nearest == self.active {
            return false;
        }
        self.active = nearest;
        self.suspended_until = Some(now + RESUME_COOLDOWN);
        true
    }

    /// Scroll offset that lines the view up with the active index.
    pub fn target_offset(&self, item_width: f32) -> f32 {
        self.active as f32 * item_width
    }

    /// One-shot: index the view should smoothly scroll to after a
    /// programmatic change, if any.
    pub fn take_pending_scroll(&mut self) -> Option<usize> {
        if self.pending_scroll {
            self.pending_scroll = false;
            Some(self.active)
        } else {
            None
        }
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        if let Some(until) = self.suspended_until {
            return Some(until);
        }
        if self.pointer_over {
            return None;
        }
        Some(self.next_advance_at)
    }
}

/// Slow spotlight rotation with a crossfade dip: visibility drops, the index
/// advances, visibility returns. Suspended while the shorts overlay is open
/// so the background stays stable underneath it.
#[derive(Debug)]
pub struct HeroRotator {
    len: usize,
    index: usize,
    visible: bool,
    paused: bool,
    next_at: Instant,
}

impl HeroRotator {
    pub fn new(len: usize, now: Instant) -> Self {
        debug_assert!(len > 0, "hero rotation over an empty list");
        Self {
            len,
            index: 0,
            visible: true,
            paused: false,
            next_at: now + HERO_ROTATE_EVERY,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// False during the crossfade dip.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn tick(&mut self, now: Instant) -> bool {
        if self.paused || now < self.next_at {
            return false;
        }
        if self.visible {
            self.visible = false;
            self.next_at = now + HERO_CROSSFADE;
        } else {
            self.index = (self.index + 1) % self.len;
            self.visible = true;
            self.next_at = now + HERO_ROTATE_EVERY;
        }
        true
    }

    pub fn set_paused(&mut self, paused: bool, now: Instant) {
        if paused == self.paused {
            return;
        }
        self.paused = paused;
        if paused {
            // Never park mid-dip: the backdrop must stay visible underneath.
            if !self.visible {
                self.index = (self.index + 1) % self.len;
                self.visible = true;
            }
        } else {
            self.next_at = now + HERO_ROTATE_EVERY;
        }
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        if self.paused {
            None
        } else {
            Some(self.next_at)
        }
    }
}
