use leptos::html;
use leptos::prelude::*;
use roche_motion::{CountUp, RootMargin, Timeline};
use web_sys::Element;

use super::use_motion_config;
use crate::host::{animate_when, use_in_view};

/// Counts from `from` up to `to` the first time it becomes visible.
#[component]
pub fn Counter(
    #[prop(optional)] from: i64,
    to: i64,
    /// Seconds; the configured counter duration when omitted
    #[prop(optional)]
    duration: Option<f64>,
) -> impl IntoView {
    let count = match duration {
        Some(seconds) => CountUp::new(from, to, seconds),
        None => use_motion_config().count_up(from, to),
    };
    let node_ref = NodeRef::<html::Span>::new();

    let shown = match count {
        Ok(count) => {
            let (shown, set_shown) = signal(count.initial());
            let in_view = use_in_view(move || node_ref.get().map(Element::from), RootMargin::NONE);
            animate_when(move || in_view.get(), count, move |value| set_shown.set(value));
            shown
        }
        Err(e) => {
            tracing::warn!(to, "counter shows its target without animating: {e}");
            signal(to).0
        }
    };

    view! {
        <span node_ref=node_ref class="tabular-nums">
            {move || shown.get()}
        </span>
    }
}
