//! One-shot viewport latch.
//!
//! The host environment reports raw intersection changes; the latch turns
//! them into a single "has entered view" transition per element.

use serde::Deserialize;
use std::fmt;

/// Latch state for one observed element.
///
/// `has_fired` flips false -> true at most once and never reverts. Once the
/// latch has fired or been disposed, the host should stop watching the
/// element ([`ViewportLatch::wants_observation`] goes false).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ViewportLatch {
    fired: bool,
    disposed: bool,
}

impl ViewportLatch {
    /// A fresh latch that has not fired.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one intersection report. Returns `true` only for the report that
    /// trips the latch.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.fired || self.disposed || !intersecting {
            return false;
        }
        self.fired = true;
        tracing::debug!("viewport latch fired");
        true
    }

    /// Read-only "has entered view" signal.
    pub fn has_fired(&self) -> bool {
        self.fired
    }

    /// Release the watch. Later reports are ignored; a latch that already
    /// fired stays fired.
    pub fn dispose(&mut self) {
        self.disposed = true;
    }

    /// Whether the latch was disposed.
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Whether the host still needs to deliver intersection reports.
    pub fn wants_observation(&self) -> bool {
        !self.fired && !self.disposed
    }
}

/// Trigger margin around the viewport, in pixels. Negative values shrink the
/// viewport so an element must be that far inside before it counts as visible.
#[derive(Debug, Default, Clone, Copy, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct RootMargin(pub f64);

impl RootMargin {
    /// No margin: any overlap with the viewport counts.
    pub const NONE: RootMargin = RootMargin(0.0);

    /// Margin in pixels.
    pub fn px(px: f64) -> Self {
        RootMargin(px)
    }
}

/// Formats as an IntersectionObserver `rootMargin` value (`"-100px"`).
impl fmt::Display for RootMargin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_on_first_intersection() {
        let mut latch = ViewportLatch::new();
        assert!(!latch.observe(false));
        assert!(!latch.has_fired());

        assert!(latch.observe(true));
        assert!(latch.has_fired());

        // Leaving and re-entering never fires again.
        assert!(!latch.observe(false));
        assert!(!latch.observe(true));
        assert!(latch.has_fired());
    }

    #[test]
    fn already_visible_fires_on_first_report() {
        let mut latch = ViewportLatch::new();
        assert!(latch.observe(true));
    }

    #[test]
    fn disposed_latch_ignores_reports() {
        let mut latch = ViewportLatch::new();
        latch.dispose();
        assert!(!latch.observe(true));
        assert!(!latch.has_fired());
        assert!(!latch.wants_observation());
    }

    #[test]
    fn dispose_after_fire_keeps_flag() {
        let mut latch = ViewportLatch::new();
        latch.observe(true);
        latch.dispose();
        assert!(latch.has_fired());
        assert!(latch.is_disposed());
    }

    #[test]
    fn stops_wanting_reports_once_fired() {
        let mut latch = ViewportLatch::new();
        assert!(latch.wants_observation());
        latch.observe(true);
        assert!(!latch.wants_observation());
    }

    #[test]
    fn root_margin_formats_as_css_length() {
        assert_eq!(RootMargin::px(-100.0).to_string(), "-100px");
        assert_eq!(RootMargin::NONE.to_string(), "0px");
    }
}
