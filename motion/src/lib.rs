//! # roche-motion
//!
//! The interactive core of the Roche Pharmaceutical site, kept free of any
//! DOM or browser dependency so it can be stepped deterministically in tests.
//!
//! ## Architecture
//!
//! - [`viewport`] - one-shot latch behind "animate when scrolled into view"
//! - [`frame`] - [`Timeline`] step functions and the [`FrameDriver`] that feeds them frame timestamps
//! - [`reveal`] - fade/slide/scale entrance timelines producing [`Pose`]s
//! - [`counter`] - the count-up timeline behind the stats section
//! - [`parallax`] - piecewise-linear scroll transforms
//! - [`nav`] - navigation bar presentation state
//! - [`easing`] - easing curves shared by the timelines
//! - [`config`] - tunables loaded from TOML
//!
//! ## Driving a timeline
//!
//! ```rust
//! use roche_motion::{CountUp, FrameDriver};
//!
//! let mut driver = FrameDriver::new(CountUp::new(0, 5000, 2.0).unwrap());
//!
//! // Timestamps are milliseconds, as handed out by requestAnimationFrame.
//! assert_eq!(driver.on_frame(1_000.0).map(|s| s.value), Some(0));
//! assert_eq!(driver.on_frame(2_000.0).map(|s| s.value), Some(2500));
//! let last = driver.on_frame(3_000.0).unwrap();
//! assert_eq!((last.value, last.done), (5000, true));
//! assert!(driver.on_frame(3_016.0).is_none());
//! ```
//!
//! ---
//!
//! Roche Pharmaceutical web team (c)2025

#![warn(missing_docs)]

pub mod config;
pub mod counter;
pub mod easing;
pub mod error;
pub mod frame;
pub mod nav;
pub mod parallax;
pub mod reveal;
pub mod viewport;

pub use config::MotionConfig;
pub use counter::CountUp;
pub use easing::Easing;
pub use error::MotionError;
pub use frame::{FrameDriver, Sample, Timeline};
pub use nav::{LinkTone, NavAppearance, NavState};
pub use parallax::LinearMap;
pub use reveal::{Direction, Pose, Reveal};
pub use viewport::{RootMargin, ViewportLatch};
