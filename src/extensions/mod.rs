//! Observer hooks for hosts that render or record widget output.

pub mod observers;

pub use observers::{ObserverRegistry, WidgetObserver};
