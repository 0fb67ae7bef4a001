//! Shared screen chrome driven by scroll position.

/// Scroll offset past which the fixed header switches to its blurred style.
pub const HEADER_BLUR_THRESHOLD: f32 = 10.0;

/// Blur-on-scroll header state, rendered identically by home and the shorts
/// overlay so the transition between them feels seamless.
#[derive(Debug, Default)]
pub struct HeaderBlur {
    scrolled: bool,
}

impl HeaderBlur {
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Feeds the current vertical scroll offset. Returns true on a style flip.
    pub fn on_scroll(&mut self, offset_y: f32) -> bool {
        let scrolled = offset_y > HEADER_BLUR_THRESHOLD;
        if scrolled == self.scrolled {
            return false;
        }
        self.scrolled = scrolled;
        true
    }
}
