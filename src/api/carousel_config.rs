use serde::{Deserialize, Serialize};

use super::{AutoplayBehavior, SwipeBehavior, TransitionBehavior};

/// Carousel bootstrap configuration.
///
/// Serializable so hosts can ship widget setup alongside page markup.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Wrapped into range like any other navigation target.
    #[serde(default)]
    pub start_index: i64,
    #[serde(default)]
    pub autoplay: AutoplayBehavior,
    #[serde(default)]
    pub swipe: SwipeBehavior,
    #[serde(default)]
    pub transition: TransitionBehavior,
}

impl CarouselConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_start_index(mut self, start_index: i64) -> Self {
        self.start_index = start_index;
        self
    }

    #[must_use]
    pub fn with_autoplay(mut self, autoplay: AutoplayBehavior) -> Self {
        self.autoplay = autoplay;
        self
    }

    /// Sets the autoplay interval and keeps the other autoplay knobs.
    #[must_use]
    pub fn with_autoplay_interval_ms(mut self, interval_ms: u64) -> Self {
        self.autoplay.interval_ms = interval_ms;
        self
    }

    #[must_use]
    pub fn without_autoplay(mut self) -> Self {
        self.autoplay.enabled = false;
        self
    }

    #[must_use]
    pub fn with_swipe_threshold_px(mut self, threshold_px: f64) -> Self {
        self.swipe = SwipeBehavior { threshold_px };
        self
    }

    #[must_use]
    pub fn with_transition(mut self, transition: TransitionBehavior) -> Self {
        self.transition = transition;
        self
    }
}
