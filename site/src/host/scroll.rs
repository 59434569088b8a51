//! Page scroll position, shared as a context signal.
//!
//! The app root installs the only window scroll listener and owns the
//! signal; the nav bar and parallax layers read it.

use leptos::ev;
use leptos::prelude::*;

/// Current vertical scroll offset in pixels.
#[derive(Debug, Clone, Copy)]
pub struct ScrollPosition(pub ReadSignal<f64>);

/// Install the window scroll listener for the lifetime of the calling owner
/// and provide its signal as context.
pub fn provide_scroll_position() -> ReadSignal<f64> {
    let (y, set_y) = signal(read_scroll_y());
    let handle = window_event_listener(ev::scroll, move |_| set_y.set(read_scroll_y()));
    on_cleanup(move || handle.remove());
    provide_context(ScrollPosition(y));
    y
}

/// Scroll signal from context. Without a provider the page reads as unscrolled.
pub fn use_scroll_position() -> ReadSignal<f64> {
    match use_context::<ScrollPosition>() {
        Some(ScrollPosition(y)) => y,
        None => {
            tracing::warn!("no scroll position in context; treating page as unscrolled");
            signal(0.0).0
        }
    }
}

fn read_scroll_y() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
}
