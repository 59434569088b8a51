//! Frame-driven timelines.
//!
//! A [`Timeline`] is a pure step function from elapsed seconds to a value.
//! [`FrameDriver`] owns the clock bookkeeping: it pins the start time to the
//! first frame it sees, converts frame timestamps to elapsed seconds, and
//! stops handing out samples once the timeline reports `done` or the driver
//! is cancelled. Browsers feed it `requestAnimationFrame` timestamps; tests
//! feed it whatever fake clock they like.

/// One step of a timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample<T> {
    /// Value to render for this frame
    pub value: T,
    /// No further frames are needed after this one
    pub done: bool,
}

/// A pure function of elapsed time.
pub trait Timeline {
    /// What each frame renders.
    type Value;

    /// Value at `elapsed` seconds after the timeline started. Must be
    /// deterministic and must report `done` for every `elapsed` past the end.
    fn sample(&self, elapsed: f64) -> Sample<Self::Value>;

    /// Value shown before the first frame.
    fn initial(&self) -> Self::Value;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DriverState {
    Idle,
    Running,
    Finished,
    Cancelled,
}

/// Feeds frame timestamps (milliseconds) into a [`Timeline`].
#[derive(Debug)]
pub struct FrameDriver<T: Timeline> {
    timeline: T,
    started_at: Option<f64>,
    // Latest elapsed time handed to the timeline.
    last_elapsed: f64,
    state: DriverState,
}

impl<T: Timeline> FrameDriver<T> {
    /// Wraps a timeline; nothing runs until the first [`on_frame`](Self::on_frame).
    pub fn new(timeline: T) -> Self {
        Self {
            timeline,
            started_at: None,
            last_elapsed: 0.0,
            state: DriverState::Idle,
        }
    }

    /// The driven timeline.
    pub fn timeline(&self) -> &T {
        &self.timeline
    }

    /// Advance to the frame at `now_ms`. The first call pins the start time.
    ///
    /// Returns `None` once the timeline has finished or the driver was
    /// cancelled; callers should stop scheduling frames at that point.
    pub fn on_frame(&mut self, now_ms: f64) -> Option<Sample<T::Value>> {
        match self.state {
            DriverState::Finished | DriverState::Cancelled => return None,
            DriverState::Idle => {
                self.started_at = Some(now_ms);
                self.state = DriverState::Running;
            }
            DriverState::Running => {}
        }

        let start = self.started_at.unwrap_or(now_ms);
        // Timestamps can arrive slightly out of order; never step backwards.
        let elapsed = ((now_ms - start) / 1000.0).max(self.last_elapsed);
        self.last_elapsed = elapsed;
        let sample = self.timeline.sample(elapsed);
        if sample.done {
            self.state = DriverState::Finished;
            tracing::debug!(elapsed, "timeline finished");
        }
        Some(sample)
    }

    /// Stop for good. Pending frames become no-ops.
    pub fn cancel(&mut self) {
        if matches!(self.state, DriverState::Idle | DriverState::Running) {
            tracing::debug!("timeline cancelled");
            self.state = DriverState::Cancelled;
        }
    }

    /// Whether another frame should be requested.
    pub fn wants_frame(&self) -> bool {
        matches!(self.state, DriverState::Idle | DriverState::Running)
    }

    /// Whether the timeline ran to completion.
    pub fn is_finished(&self) -> bool {
        self.state == DriverState::Finished
    }

    /// Whether [`cancel`](Self::cancel) stopped the driver early.
    pub fn is_cancelled(&self) -> bool {
        self.state == DriverState::Cancelled
    }
}
