// Motion-aware building blocks shared by the sections
// Roche Pharmaceutical web team (c)2025

mod counter;
mod fade_in;
pub mod icons;
mod parallax;

pub use counter::Counter;
pub use fade_in::{FadeIn, ScaleIn};
pub use icons::Icon;
pub use parallax::ParallaxLayer;

use leptos::prelude::*;
use roche_motion::MotionConfig;

/// Motion tunables provided by the app root, or the built-in defaults.
pub fn use_motion_config() -> MotionConfig {
    use_context::<MotionConfig>().unwrap_or_default()
}
