//! Shorts feed overlay, the bottom dock shared with home, and the page-level
//! scroll lock the overlay holds while it is the active input target.

/// Bottom dock destinations. Closed set; transition handling is exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DockTab {
    Home,
    Discover,
    Shorts,
    Channels,
    Actors,
}

impl DockTab {
    pub const ALL: [DockTab; 5] = [
        DockTab::Home,
        DockTab::Discover,
        DockTab::Shorts,
        DockTab::Channels,
        DockTab::Actors,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DockTab::Home => "Home",
            DockTab::Discover => "Discover",
            DockTab::Shorts => "Shorts",
            DockTab::Channels => "Channels",
            DockTab::Actors => "Actors",
        }
    }
}

/// Suppression of background scrolling while an overlay captures input.
/// A boolean resource, not a counter: there is a single overlay host, and
/// the owning controller keeps acquire/release strictly paired.
#[derive(Debug, Default)]
pub struct ScrollLock {
    held: bool,
}

impl ScrollLock {
    pub fn is_held(&self) -> bool {
        self.held
    }

    fn acquire(&mut self) {
        debug_assert!(!self.held, "scroll lock acquired twice");
        self.held = true;
    }

    fn release(&mut self) {
        debug_assert!(self.held, "scroll lock released while free");
        self.held = false;
    }
}

/// Owns overlay visibility, the active dock tab, the scroll lock, and the
/// feed position readout. Home keeps its in-memory state while hidden; only
/// the tab resets on close.
#[derive(Debug)]
pub struct OverlayController {
    shorts_open: bool,
    active_tab: DockTab,
    scroll_lock: ScrollLock,
    feed_index: usize,
}

impl Default for OverlayController {
    fn default() -> Self {
        Self::new()
    }
}

impl OverlayController {
    pub fn new() -> Self {
        Self {
            shorts_open: false,
            active_tab: DockTab::Home,
            scroll_lock: ScrollLock::default(),
            feed_index: 0,
        }
    }

    pub fn is_open(&self) -> bool {
        self.shorts_open
    }

    pub fn active_tab(&self) -> DockTab {
        self.active_tab
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_lock.is_held()
    }

    /// Opens the shorts feed over home. Idempotent: opening while already
    /// open changes nothing, so lock acquisition never nests.
    pub fn open(&mut self) {
        if self.shorts_open {
            return;
        }
        self.shorts_open = true;
        self.active_tab = DockTab::Shorts;
        self.scroll_lock.acquire();
        tracing::debug!("shorts overlay opened");
    }

    /// Closes the feed back to home and resets the tab. Idempotent.
    pub fn close(&mut self) {
        if !self.shorts_open {
            return;
        }
        self.shorts_open = false;
        self.active_tab = DockTab::Home;
        self.scroll_lock.release();
        tracing::debug!("shorts overlay closed");
    }

    /// Dock selection, shared by both surfaces: the center `Shorts` action
    /// opens the overlay, `Home` from inside the overlay closes it, and any
    /// other tab just moves the highlight.
    pub fn select_tab(&mut self, tab: DockTab) {
        match tab {
            DockTab::Shorts => self.open(),
            DockTab::Home if self.shorts_open => self.close(),
            DockTab::Home | DockTab::Discover | DockTab::Channels | DockTab::Actors => {
                self.active_tab = tab;
            }
        }
    }

    /// Tracks the snap feed's scroll position, rounding by viewport height.
    pub fn sync_feed_scroll(&mut self, offset: f32, viewport_height: f32) {
        if viewport_height <= 0.0 {
            return;
        }
        self.feed_index = (offset / viewport_height).round().max(0.0) as usize;
    }

    /// 1-based "current / total" readout for the feed indicator.
    pub fn feed_indicator(&self, total: usize) -> (usize, usize) {
        ((self.feed_index + 1).min(total), total)
    }
}
