// Browser bindings for the motion core
// Roche Pharmaceutical web team (c)2025
//
// Components never hold JS handles directly. Observers, closures and pending
// animation frames live in thread-local registries keyed by an id; a
// component keeps the id and releases it from `on_cleanup`. Callbacks that
// arrive for an id that is gone do nothing.

pub mod frames;
pub mod scroll;
pub mod viewport;

pub use frames::animate_when;
pub use scroll::{provide_scroll_position, use_scroll_position};
pub use viewport::use_in_view;

/// A live browser resource that can be stopped early: a pending animation
/// frame, a connected observer.
pub trait Teardown {
    fn teardown(&self);
}
