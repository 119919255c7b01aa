mod behavior;
mod carousel;
mod carousel_autoplay_controller;
mod carousel_config;
mod carousel_input_controller;
mod carousel_navigation_controller;
mod comparison_config;
mod comparison_position_controller;
mod comparison_slider;
mod comparison_sweep_controller;
mod events;
mod frames;
mod snapshot;
mod sweep_animator;
mod validation;

pub use behavior::{
    AutoplayBehavior, StepBehavior, SwipeBehavior, SweepBehavior, TransitionBehavior,
};
pub use carousel::{CarouselController, CarouselState};
pub use carousel_config::CarouselConfig;
pub use comparison_config::ComparisonSliderConfig;
pub use comparison_slider::{ComparisonSliderController, ComparisonState};
pub use events::{CarouselEvent, ComparisonEvent, NavigationCause, PositionSource};
pub use frames::{CarouselFrame, ComparisonFrame, IndicatorSet};
pub use snapshot::{CarouselSnapshot, ComparisonSnapshot};
pub use sweep_animator::{SweepAnimator, SweepPhase};
