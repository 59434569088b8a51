use leptos::html;
use leptos::prelude::*;
use roche_motion::{Direction, Pose, Reveal, Timeline};
use web_sys::Element;

use super::use_motion_config;
use crate::host::{animate_when, use_in_view};

/// Fades its children in, sliding from `direction`, the first time they
/// scroll into view. Plays once and never reverses.
#[component]
pub fn FadeIn(
    /// Which way the content travels
    #[prop(optional)]
    direction: Direction,
    /// Extra seconds to wait after the content comes into view
    #[prop(optional)]
    delay: f64,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let config = use_motion_config();
    let node_ref = NodeRef::<html::Div>::new();
    let style = match config.fade(direction, delay) {
        Ok(reveal) => {
            let in_view = use_in_view(
                move || node_ref.get().map(Element::from),
                config.viewport.margin,
            );
            play(reveal, move || in_view.get())
        }
        Err(e) => {
            tracing::warn!("fade-in disabled: {e}");
            signal(Pose::REST.to_style()).0
        }
    };

    view! {
        <div node_ref=node_ref class=class style=move || style.get()>
            {children()}
        </div>
    }
}

/// Fades its children in while scaling them up, as soon as they mount.
#[component]
pub fn ScaleIn(
    /// Starting scale
    #[prop(default = 0.8)]
    scale: f64,
    /// Seconds
    #[prop(default = 1.0)]
    duration: f64,
    /// Seconds before the motion starts
    #[prop(optional)]
    delay: f64,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let reveal = Reveal::scale_from(scale)
        .with_duration(duration)
        .and_then(|reveal| reveal.with_delay(delay));
    let style = match reveal {
        Ok(reveal) => play(reveal, || true),
        Err(e) => {
            tracing::warn!("scale-in disabled: {e}");
            signal(Pose::REST.to_style()).0
        }
    };

    view! {
        <div class=class style=move || style.get()>
            {children()}
        </div>
    }
}

/// Inline style signal following `reveal` once `trigger` reads true.
fn play(reveal: Reveal, trigger: impl Fn() -> bool + 'static) -> ReadSignal<String> {
    let (style, set_style) = signal(reveal.initial().to_style());
    animate_when(trigger, reveal, move |pose: Pose| set_style.set(pose.to_style()));
    style
}
