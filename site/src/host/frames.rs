//! requestAnimationFrame loops driving motion timelines.

use std::cell::RefCell;
use std::collections::HashMap;

use leptos::prelude::*;
use roche_motion::{FrameDriver, Timeline};

use super::Teardown;

/// Advances one frame; returns whether another frame is wanted.
type Ticker = Box<dyn FnMut(f64) -> bool>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoopId(u64);

struct Slot<H> {
    ticker: Option<Ticker>,
    pending: Option<H>,
}

/// Frame loops keyed by id. `H` is the handle of a requested frame.
pub struct Loops<H> {
    slots: HashMap<LoopId, Slot<H>>,
    next_id: u64,
}

impl<H> Default for Loops<H> {
    fn default() -> Self {
        Self {
            slots: HashMap::new(),
            next_id: 0,
        }
    }
}

impl<H: Teardown> Loops<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim an id for a loop that has not started yet.
    pub fn reserve(&mut self) -> LoopId {
        let id = LoopId(self.next_id);
        self.next_id += 1;
        self.slots.insert(
            id,
            Slot {
                ticker: None,
                pending: None,
            },
        );
        id
    }

    /// Install the ticker of a reserved loop. Returns false when the loop was
    /// already released, in which case no frame should be requested.
    pub fn start(&mut self, id: LoopId, ticker: Ticker) -> bool {
        match self.slots.get_mut(&id) {
            Some(slot) => {
                slot.ticker = Some(ticker);
                true
            }
            None => false,
        }
    }

    /// Remember the frame requested for `id`. A frame requested for a
    /// released loop is torn down at once.
    pub fn set_pending(&mut self, id: LoopId, handle: H) {
        match self.slots.get_mut(&id) {
            Some(slot) => slot.pending = Some(handle),
            None => handle.teardown(),
        }
    }

    /// Drop the loop and cancel its requested frame, if any.
    pub fn release(&mut self, id: LoopId) {
        if let Some(handle) = self.slots.remove(&id).and_then(|slot| slot.pending) {
            handle.teardown();
        }
    }

    /// Run one frame of `id`. Returns whether another frame should be
    /// requested. A released id does nothing and returns false.
    ///
    /// The ticker runs with the registry unborrowed, so a sample callback
    /// may release its own loop.
    pub fn advance(cell: &RefCell<Self>, id: LoopId, now_ms: f64) -> bool {
        let taken = cell.borrow_mut().slots.get_mut(&id).and_then(|slot| {
            slot.pending = None;
            slot.ticker.take()
        });
        let Some(mut ticker) = taken else {
            return false;
        };

        let wants_more = ticker(now_ms);

        match cell.borrow_mut().slots.get_mut(&id) {
            Some(slot) if wants_more => {
                slot.ticker = Some(ticker);
                true
            }
            _ => false,
        }
    }
}

impl Teardown for AnimationFrameRequestHandle {
    fn teardown(&self) {
        self.cancel();
    }
}

thread_local! {
    static LOOPS: RefCell<Loops<AnimationFrameRequestHandle>> = RefCell::new(Loops::new());
}

/// Run `timeline` on animation frames once `trigger` reads true, handing
/// every sample to `on_sample`. Starts at most once; stops when the timeline
/// is done or the calling owner is cleaned up, whichever comes first.
pub fn animate_when<T>(
    trigger: impl Fn() -> bool + 'static,
    timeline: T,
    on_sample: impl Fn(T::Value) + 'static,
) where
    T: Timeline + 'static,
{
    let id = LOOPS.with(|loops| loops.borrow_mut().reserve());
    let mut pending = Some(ticker(timeline, on_sample));
    Effect::new(move || {
        if trigger() {
            if let Some(ticker) = pending.take() {
                if LOOPS.with(|loops| loops.borrow_mut().start(id, ticker)) {
                    schedule(id);
                } else {
                    tracing::debug!(?id, "frame loop released before it started");
                }
            }
        }
    });
    on_cleanup(move || LOOPS.with(|loops| loops.borrow_mut().release(id)));
}

fn ticker<T>(timeline: T, on_sample: impl Fn(T::Value) + 'static) -> Ticker
where
    T: Timeline + 'static,
{
    let mut driver = FrameDriver::new(timeline);
    Box::new(move |now| match driver.on_frame(now) {
        Some(sample) => {
            on_sample(sample.value);
            !sample.done
        }
        None => false,
    })
}

fn schedule(id: LoopId) {
    match request_animation_frame_with_handle(move || tick(id)) {
        Ok(handle) => LOOPS.with(|loops| loops.borrow_mut().set_pending(id, handle)),
        Err(err) => {
            tracing::warn!(?id, ?err, "requestAnimationFrame failed; animation stopped");
        }
    }
}

fn tick(id: LoopId) {
    let now = now_ms();
    if LOOPS.with(|loops| Loops::advance(loops, id, now)) {
        schedule(id);
    }
}

fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|window| window.performance())
        .map(|performance| performance.now())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use roche_motion::CountUp;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Stands in for a requested frame; counts cancellations.
    struct FakeFrame(Rc<Cell<u32>>);

    impl Teardown for FakeFrame {
        fn teardown(&self) {
            self.0.set(self.0.get() + 1);
        }
    }

    fn counting(seen: &Rc<RefCell<Vec<i64>>>) -> Ticker {
        let seen = Rc::clone(seen);
        let count = CountUp::new(0, 5000, 2.0).unwrap();
        ticker(count, move |value| seen.borrow_mut().push(value))
    }

    #[test]
    fn release_cancels_the_requested_frame() {
        let cancelled = Rc::new(Cell::new(0));
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut loops = Loops::new();
        let id = loops.reserve();
        assert!(loops.start(id, counting(&seen)));
        loops.set_pending(id, FakeFrame(Rc::clone(&cancelled)));

        loops.release(id);
        assert_eq!(cancelled.get(), 1);
        assert!(!loops.start(id, counting(&seen)));
    }

    #[test]
    fn late_frame_for_released_loop_does_nothing() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let loops = RefCell::new(Loops::<FakeFrame>::new());
        let id = loops.borrow_mut().reserve();
        loops.borrow_mut().start(id, counting(&seen));

        assert!(Loops::advance(&loops, id, 1_000.0));
        assert!(Loops::advance(&loops, id, 1_500.0));
        assert_eq!(*seen.borrow(), vec![0, 1250]);

        loops.borrow_mut().release(id);
        assert!(!Loops::advance(&loops, id, 2_000.0));
        assert_eq!(*seen.borrow(), vec![0, 1250]);
    }

    #[test]
    fn start_after_release_is_refused() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut loops = Loops::<FakeFrame>::new();
        let id = loops.reserve();
        loops.release(id);
        assert!(!loops.start(id, counting(&seen)));

        let cancelled = Rc::new(Cell::new(0));
        loops.set_pending(id, FakeFrame(Rc::clone(&cancelled)));
        assert_eq!(cancelled.get(), 1);
    }

    #[test]
    fn finished_loop_asks_for_no_more_frames() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let loops = RefCell::new(Loops::<FakeFrame>::new());
        let id = loops.borrow_mut().reserve();
        loops.borrow_mut().start(id, counting(&seen));

        assert!(Loops::advance(&loops, id, 0.0));
        assert!(!Loops::advance(&loops, id, 2_000.0));
        assert!(!Loops::advance(&loops, id, 2_016.0));
        assert_eq!(*seen.borrow(), vec![0, 5000]);
    }

    #[test]
    fn sample_callback_may_release_its_own_loop() {
        let loops = Rc::new(RefCell::new(Loops::<FakeFrame>::new()));
        let id = loops.borrow_mut().reserve();
        let calls = Rc::new(Cell::new(0));
        let ticker: Ticker = {
            let loops = Rc::clone(&loops);
            let calls = Rc::clone(&calls);
            Box::new(move |_| {
                calls.set(calls.get() + 1);
                loops.borrow_mut().release(id);
                true
            })
        };
        loops.borrow_mut().start(id, ticker);

        assert!(!Loops::advance(&loops, id, 0.0));
        assert!(!Loops::advance(&loops, id, 16.0));
        assert_eq!(calls.get(), 1);
    }
}
