use leptos::prelude::*;
use roche_motion::parallax::translate_y_style;

use super::use_motion_config;
use crate::host::use_scroll_position;

/// Decorative layer whose vertical offset follows the page scroll through
/// the configured `layer` mapping. Unknown layers stay put.
#[component]
pub fn ParallaxLayer(
    /// Name of a `[[parallax]]` entry in the motion config
    layer: &'static str,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let scroll_y = use_scroll_position();
    let style = match use_motion_config().parallax(layer) {
        Ok(map) => Signal::derive(move || translate_y_style(map.apply(scroll_y.get()))),
        Err(e) => {
            tracing::warn!(layer, "parallax layer is static: {e}");
            Signal::derive(|| translate_y_style(0.0))
        }
    };

    view! { <div class=class style=move || style.get() aria-hidden="true"></div> }
}
