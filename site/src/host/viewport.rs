//! "Has this element been seen yet" on top of IntersectionObserver.

use std::cell::RefCell;
use std::collections::HashMap;

use leptos::prelude::*;
use roche_motion::{RootMargin, ViewportLatch};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::Teardown;

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WatchId(u64);

struct Watch<O> {
    latch: ViewportLatch,
    observer: Option<O>,
    on_enter: Option<Box<dyn FnOnce()>>,
}

/// One-shot visibility watches keyed by id. `O` is the connected observer.
pub struct Watches<O> {
    watches: HashMap<WatchId, Watch<O>>,
    next_id: u64,
}

impl<O> Default for Watches<O> {
    fn default() -> Self {
        Self {
            watches: HashMap::new(),
            next_id: 0,
        }
    }
}

impl<O: Teardown> Watches<O> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim an id; `on_enter` runs the first time the element is seen.
    pub fn reserve(&mut self, on_enter: Box<dyn FnOnce()>) -> WatchId {
        let id = WatchId(self.next_id);
        self.next_id += 1;
        let watch = Watch {
            latch: ViewportLatch::new(),
            observer: None,
            on_enter: Some(on_enter),
        };
        self.watches.insert(id, watch);
        id
    }

    /// Whether `id` is live, unfired and has no observer yet.
    pub fn wants_observer(&self, id: WatchId) -> bool {
        self.watches
            .get(&id)
            .is_some_and(|watch| watch.observer.is_none() && watch.latch.wants_observation())
    }

    /// Keep `observer` for `id`. An observer that is no longer wanted is torn
    /// down at once.
    pub fn attach(&mut self, id: WatchId, observer: O) {
        if !self.wants_observer(id) {
            observer.teardown();
            return;
        }
        if let Some(watch) = self.watches.get_mut(&id) {
            watch.observer = Some(observer);
        }
    }

    /// Feed an observer report. On the first intersecting report the
    /// observer is torn down and `on_enter` runs, with the registry
    /// unborrowed. Returns whether this report fired the watch.
    pub fn report(cell: &RefCell<Self>, id: WatchId, intersecting: bool) -> bool {
        let on_enter = {
            let mut watches = cell.borrow_mut();
            let Some(watch) = watches.watches.get_mut(&id) else {
                return false;
            };
            if !watch.latch.observe(intersecting) {
                return false;
            }
            if let Some(observer) = watch.observer.take() {
                observer.teardown();
            }
            watch.on_enter.take()
        };
        if let Some(on_enter) = on_enter {
            on_enter();
        }
        true
    }

    /// Drop the watch, fired or not, and disconnect its observer.
    pub fn release(&mut self, id: WatchId) {
        if let Some(mut watch) = self.watches.remove(&id) {
            watch.latch.dispose();
            if let Some(observer) = watch.observer.take() {
                observer.teardown();
            }
        }
    }
}

/// A connected observer plus the JS callback it calls.
struct Observer {
    observer: IntersectionObserver,
    // Kept alive for as long as the observer may call it.
    _callback: ObserverCallback,
}

impl Teardown for Observer {
    fn teardown(&self) {
        self.observer.disconnect();
    }
}

thread_local! {
    static WATCHES: RefCell<Watches<Observer>> = RefCell::new(Watches::new());
}

/// One-shot visibility signal for the element returned by `target`.
///
/// Reads false until the element first intersects the viewport (shrunk or
/// grown by `margin`), then true for good. An element already on screen
/// when it mounts flips on the observer's first report. The watch is
/// released when the calling owner is cleaned up, fired or not.
pub fn use_in_view(
    target: impl Fn() -> Option<Element> + 'static,
    margin: RootMargin,
) -> ReadSignal<bool> {
    let (in_view, set_in_view) = signal(false);
    let id = WATCHES.with(|watches| {
        watches
            .borrow_mut()
            .reserve(Box::new(move || set_in_view.set(true)))
    });
    Effect::new(move || {
        if let Some(element) = target() {
            observe(id, &element, margin);
        }
    });
    on_cleanup(move || WATCHES.with(|watches| watches.borrow_mut().release(id)));
    in_view
}

fn observe(id: WatchId, element: &Element, margin: RootMargin) {
    if !WATCHES.with(|watches| watches.borrow().wants_observer(id)) {
        return;
    }

    let callback: ObserverCallback =
        Closure::new(move |entries: js_sys::Array, _observer: IntersectionObserver| {
            let intersecting = entries.iter().any(|entry| {
                entry
                    .unchecked_into::<IntersectionObserverEntry>()
                    .is_intersecting()
            });
            WATCHES.with(|watches| Watches::report(watches, id, intersecting));
        });

    let options = IntersectionObserverInit::new();
    options.set_root_margin(&margin.to_string());
    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            observer.observe(element);
            let observer = Observer {
                observer,
                _callback: callback,
            };
            WATCHES.with(|watches| watches.borrow_mut().attach(id, observer));
        }
        Err(err) => {
            // Never leave content hidden because the browser lacks the API.
            tracing::warn!(?id, ?err, "IntersectionObserver unavailable; revealing immediately");
            WATCHES.with(|watches| Watches::report(watches, id, true));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Stands in for a connected observer; counts disconnects.
    struct FakeObserver(Rc<Cell<u32>>);

    impl Teardown for FakeObserver {
        fn teardown(&self) {
            self.0.set(self.0.get() + 1);
        }
    }

    fn counter() -> Rc<Cell<u32>> {
        Rc::new(Cell::new(0))
    }

    fn bump(count: &Rc<Cell<u32>>) -> Box<dyn FnOnce()> {
        let count = Rc::clone(count);
        Box::new(move || count.set(count.get() + 1))
    }

    #[test]
    fn first_intersection_fires_once_and_disconnects() {
        let (entered, disconnected) = (counter(), counter());
        let watches = RefCell::new(Watches::new());
        let id = watches.borrow_mut().reserve(bump(&entered));
        assert!(watches.borrow().wants_observer(id));
        watches
            .borrow_mut()
            .attach(id, FakeObserver(Rc::clone(&disconnected)));
        assert!(!watches.borrow().wants_observer(id));

        assert!(!Watches::report(&watches, id, false));
        assert_eq!((entered.get(), disconnected.get()), (0, 0));

        assert!(Watches::report(&watches, id, true));
        assert_eq!((entered.get(), disconnected.get()), (1, 1));

        // Leaving and coming back changes nothing.
        assert!(!Watches::report(&watches, id, false));
        assert!(!Watches::report(&watches, id, true));
        assert_eq!((entered.get(), disconnected.get()), (1, 1));
    }

    #[test]
    fn released_watch_ignores_late_reports() {
        let (entered, disconnected) = (counter(), counter());
        let watches = RefCell::new(Watches::new());
        let id = watches.borrow_mut().reserve(bump(&entered));
        watches
            .borrow_mut()
            .attach(id, FakeObserver(Rc::clone(&disconnected)));

        watches.borrow_mut().release(id);
        assert_eq!(disconnected.get(), 1);

        assert!(!Watches::report(&watches, id, true));
        assert_eq!(entered.get(), 0);
        assert_eq!(disconnected.get(), 1);
    }

    #[test]
    fn observer_arriving_after_release_is_disconnected() {
        let (entered, disconnected) = (counter(), counter());
        let mut watches = Watches::new();
        let id = watches.reserve(bump(&entered));
        watches.release(id);
        assert!(!watches.wants_observer(id));

        watches.attach(id, FakeObserver(Rc::clone(&disconnected)));
        assert_eq!(disconnected.get(), 1);
        assert_eq!(entered.get(), 0);
    }

    #[test]
    fn fired_without_observer_reveals_once() {
        let entered = counter();
        let watches = RefCell::new(Watches::<FakeObserver>::new());
        let id = watches.borrow_mut().reserve(bump(&entered));

        assert!(Watches::report(&watches, id, true));
        assert!(!Watches::report(&watches, id, true));
        assert_eq!(entered.get(), 1);
        assert!(!watches.borrow().wants_observer(id));
    }

    #[test]
    fn release_after_fire_is_quiet() {
        let (entered, disconnected) = (counter(), counter());
        let watches = RefCell::new(Watches::new());
        let id = watches.borrow_mut().reserve(bump(&entered));
        watches
            .borrow_mut()
            .attach(id, FakeObserver(Rc::clone(&disconnected)));
        Watches::report(&watches, id, true);

        watches.borrow_mut().release(id);
        assert_eq!((entered.get(), disconnected.get()), (1, 1));
    }
}
