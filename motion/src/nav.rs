//! Navigation bar presentation state.
//!
//! Two independent flags: `scrolled` (page scrolled past the threshold) and
//! `open` (mobile menu expanded). The bar looks solid when either is set.
//! `scrolled` is a raw comparison against the threshold on every scroll
//! event, so a page resting right at the threshold can flip on every event.

/// Default scroll threshold in pixels.
pub const DEFAULT_SCROLL_THRESHOLD: f64 = 20.0;

/// Bar background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAppearance {
    /// See-through bar over the hero
    Transparent,
    /// Frosted white bar with shadow
    Solid,
}

impl NavAppearance {
    /// CSS modifier class.
    pub fn class(self) -> &'static str {
        match self {
            NavAppearance::Transparent => "nav nav--transparent",
            NavAppearance::Solid => "nav nav--solid",
        }
    }
}

/// Color of a desktop nav link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTone {
    /// Link for the current page
    Active,
    /// Over the transparent bar
    Default,
    /// Over the solid bar
    Muted,
}

impl LinkTone {
    /// CSS class for the link.
    pub fn class(self) -> &'static str {
        match self {
            LinkTone::Active => "nav-link nav-link--active",
            LinkTone::Default => "nav-link",
            LinkTone::Muted => "nav-link nav-link--muted",
        }
    }
}

/// State behind the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavState {
    threshold: f64,
    scrolled: bool,
    open: bool,
}

impl Default for NavState {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_THRESHOLD)
    }
}

impl NavState {
    /// Unscrolled, menu closed.
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            scrolled: false,
            open: false,
        }
    }

    /// Record a scroll position. Returns whether `scrolled` changed.
    pub fn on_scroll(&mut self, y: f64) -> bool {
        let scrolled = y > self.threshold;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    /// Menu button pressed.
    pub fn toggle_menu(&mut self) {
        self.open = !self.open;
    }

    /// The route changed; collapses the menu. Returns whether it was open.
    pub fn on_navigate(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    /// Page is scrolled past the threshold.
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Mobile menu is expanded.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Scroll threshold in pixels.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Solid whenever scrolled or the menu is open.
    pub fn appearance(&self) -> NavAppearance {
        if self.scrolled || self.open {
            NavAppearance::Solid
        } else {
            NavAppearance::Transparent
        }
    }

    /// Tone of a desktop link. Inactive links follow `scrolled` only.
    pub fn link_tone(&self, active: bool) -> LinkTone {
        match (active, self.scrolled) {
            (true, _) => LinkTone::Active,
            (false, true) => LinkTone::Muted,
            (false, false) => LinkTone::Default,
        }
    }
}
