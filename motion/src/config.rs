//! Motion tunables.
//!
//! Loaded from a TOML document (the site embeds `motion.toml`). Every
//! section is optional and falls back to the built-in defaults.

use serde::Deserialize;

use crate::counter::{self, CountUp};
use crate::easing::Easing;
use crate::error::{MotionError, check_seconds};
use crate::nav::{self, NavState};
use crate::parallax::LinearMap;
use crate::reveal::{self, Direction, Reveal};
use crate::viewport::RootMargin;

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// `[viewport]`
    pub viewport: ViewportConfig,
    /// `[fade]`
    pub fade: FadeConfig,
    /// `[counter]`
    pub counter: CounterConfig,
    /// `[nav]`
    pub nav: NavConfig,
    /// Named scroll parallax layers
    pub parallax: Vec<ParallaxLayerConfig>,
}

/// When an element counts as "in view"
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    /// Trigger margin for fade-ins, in pixels (negative = must be further inside)
    pub margin: RootMargin,
}

/// Defaults for fade-in wrappers
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct FadeConfig {
    /// Slide distance in pixels
    pub distance: f64,
    /// Seconds
    pub duration: f64,
    /// Seconds before motion starts
    pub delay: f64,
    /// Curve applied to opacity and offset
    pub easing: Easing,
}

/// Defaults for animated counters
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    /// Seconds
    pub duration: f64,
}

/// Navigation bar tunables
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Scroll offset in pixels past which the bar turns solid
    pub scroll_threshold: f64,
}

/// One decorative layer moved by scroll position
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ParallaxLayerConfig {
    /// Looked up by the page that renders the layer
    pub name: String,
    /// Scroll positions in pixels
    pub input: Vec<f64>,
    /// Offsets in pixels
    pub output: Vec<f64>,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            margin: RootMargin::px(-100.0),
        }
    }
}

impl Default for FadeConfig {
    fn default() -> Self {
        Self {
            distance: reveal::DEFAULT_DISTANCE,
            duration: reveal::DEFAULT_DURATION,
            delay: 0.0,
            easing: Easing::EaseOut,
        }
    }
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            duration: counter::DEFAULT_DURATION,
        }
    }
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: nav::DEFAULT_SCROLL_THRESHOLD,
        }
    }
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            viewport: ViewportConfig::default(),
            fade: FadeConfig::default(),
            counter: CounterConfig::default(),
            nav: NavConfig::default(),
            parallax: vec![
                ParallaxLayerConfig {
                    name: "hero-primary".into(),
                    input: vec![0.0, 500.0],
                    output: vec![0.0, 200.0],
                },
                ParallaxLayerConfig {
                    name: "hero-secondary".into(),
                    input: vec![0.0, 500.0],
                    output: vec![0.0, -150.0],
                },
            ],
        }
    }
}

impl MotionConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, MotionError> {
        let config: MotionConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`from_toml_str`](Self::from_toml_str), but logs the problem and
    /// returns the defaults instead of failing.
    pub fn load_or_default(source: &str) -> Self {
        match Self::from_toml_str(source) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("invalid motion config, using defaults: {e}");
                Self::default()
            }
        }
    }

    /// Check every duration and parallax range.
    pub fn validate(&self) -> Result<(), MotionError> {
        check_seconds("fade.duration", self.fade.duration)?;
        check_seconds("fade.delay", self.fade.delay)?;
        check_seconds("counter.duration", self.counter.duration)?;
        for layer in &self.parallax {
            LinearMap::new(&layer.input, &layer.output)?;
        }
        Ok(())
    }

    /// Fade-in reveal in `direction` with an extra `delay` (seconds) on top
    /// of the configured one.
    pub fn fade(&self, direction: Direction, delay: f64) -> Result<Reveal, MotionError> {
        Ok(Reveal::fade(direction, self.fade.distance)
            .with_duration(self.fade.duration)?
            .with_delay(self.fade.delay + delay)?
            .with_easing(self.fade.easing))
    }

    /// Count-up using the configured duration.
    pub fn count_up(&self, from: i64, to: i64) -> Result<CountUp, MotionError> {
        CountUp::new(from, to, self.counter.duration)
    }

    /// Fresh navigation bar state.
    pub fn nav_state(&self) -> NavState {
        NavState::new(self.nav.scroll_threshold)
    }

    /// Transform for the named parallax layer.
    pub fn parallax(&self, name: &str) -> Result<LinearMap, MotionError> {
        let layer = self
            .parallax
            .iter()
            .find(|layer| layer.name == name)
            .ok_or_else(|| MotionError::UnknownLayer(name.to_string()))?;
        LinearMap::new(&layer.input, &layer.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::Timeline;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = MotionConfig::default();
        assert_eq!(config.viewport.margin, RootMargin::px(-100.0));
        assert_eq!(config.fade.distance, 40.0);
        assert_eq!(config.fade.duration, 0.8);
        assert_eq!(config.fade.delay, 0.0);
        assert_eq!(config.fade.easing, Easing::EaseOut);
        assert_eq!(config.counter.duration, 2.0);
        assert_eq!(config.nav.scroll_threshold, 20.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_document_is_default() {
        let config = MotionConfig::from_toml_str("").unwrap();
        assert_eq!(config, MotionConfig::default());
    }

    #[test]
    fn test_partial_sections_keep_other_defaults() {
        let config = MotionConfig::from_toml_str(
            r#"
[fade]
duration = 1.2

[nav]
scroll_threshold = 64
"#,
        )
        .unwrap();
        assert_eq!(config.fade.duration, 1.2);
        assert_eq!(config.fade.distance, 40.0);
        assert_eq!(config.nav.scroll_threshold, 64.0);
        assert_eq!(config.counter.duration, 2.0);
    }

    #[test]
    fn test_full_document() {
        let config = MotionConfig::from_toml_str(
            r#"
[viewport]
margin = -50

[fade]
distance = 24
easing = "ease-in-out"

[counter]
duration = 3.5

[[parallax]]
name = "orb"
input = [0, 250, 500]
output = [0, 80, 100]
"#,
        )
        .unwrap();
        assert_eq!(config.viewport.margin, RootMargin::px(-50.0));
        assert_eq!(config.fade.distance, 24.0);
        assert_eq!(config.fade.easing, Easing::EaseInOut);
        assert_eq!(config.counter.duration, 3.5);
        assert_eq!(config.parallax.len(), 1);
        assert_eq!(config.parallax("orb").unwrap().apply(250.0), 80.0);
    }

    #[test]
    fn test_invalid_parallax_is_rejected() {
        let err = MotionConfig::from_toml_str(
            r#"
[[parallax]]
name = "broken"
input = [0, 500]
output = [0]
"#,
        )
        .unwrap_err();
        assert!(matches!(err, MotionError::RangeLengthMismatch { .. }));
    }

    #[test]
    fn test_negative_duration_is_rejected() {
        let err = MotionConfig::from_toml_str("[counter]\nduration = -1").unwrap_err();
        assert!(matches!(err, MotionError::InvalidDuration { .. }));
    }

    #[test]
    fn test_load_or_default_falls_back() {
        let config = MotionConfig::load_or_default("[fade\nduration = ");
        assert_eq!(config, MotionConfig::default());
        let config = MotionConfig::load_or_default("[counter]\nduration = -3");
        assert_eq!(config, MotionConfig::default());
    }

    #[test]
    fn test_unknown_layer() {
        let config = MotionConfig::default();
        assert!(matches!(
            config.parallax("missing"),
            Err(MotionError::UnknownLayer(name)) if name == "missing"
        ));
        assert_eq!(config.parallax("hero-secondary").unwrap().apply(500.0), -150.0);
    }

    #[test]
    fn test_builders_use_config() {
        let config = MotionConfig::default();
        let fade = config.fade(Direction::Left, 0.3).unwrap();
        assert_eq!(fade.duration(), 0.8);
        assert_eq!(fade.delay(), 0.3);
        assert_eq!(fade.initial().x, 40.0);

        let count = config.count_up(0, 30).unwrap();
        assert_eq!(count.duration(), 2.0);
        assert_eq!(config.nav_state().threshold(), 20.0);
    }
}
