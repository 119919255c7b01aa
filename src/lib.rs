//! showcase-rs: headless state machines for two interactive page widgets.
//!
//! A looping image carousel and a before/after comparison slider, each
//! arbitrating pointer, touch, keyboard, hover, timer and visibility input
//! over one piece of position state. Hosts push raw events and clock values
//! in and render the frames the controllers emit.
//!
//! Everything is single-threaded and deterministic. Every entry point that
//! can start or cancel a timer takes the host time of the event; timers due
//! before that time run first, and input wins a tie with a timer due at the
//! same millisecond.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod telemetry;
pub mod timing;

pub use api::{
    CarouselConfig, CarouselController, ComparisonSliderConfig, ComparisonSliderController,
};
pub use error::{WidgetError, WidgetResult};
