use serde::{Deserialize, Serialize};

use crate::core::Ease;

/// Carousel autoplay policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoplayBehavior {
    /// Master enable. Disabled carousels only move on user input.
    pub enabled: bool,
    pub interval_ms: u64,
    /// Stops autoplay while the pointer hovers the widget.
    pub pause_on_hover: bool,
}

impl Default for AutoplayBehavior {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_ms: 4_500,
            pause_on_hover: true,
        }
    }
}

/// Horizontal travel needed for a drag release to count as a swipe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwipeBehavior {
    /// Swipes navigate only when `|origin_x - x|` is strictly greater.
    pub threshold_px: f64,
}

impl Default for SwipeBehavior {
    fn default() -> Self {
        Self { threshold_px: 50.0 }
    }
}

/// Animated slide change parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionBehavior {
    pub duration_ms: u32,
    pub ease: Ease,
}

impl Default for TransitionBehavior {
    fn default() -> Self {
        Self {
            duration_ms: 600,
            ease: Ease::InOutCubic,
        }
    }
}

/// Keyboard step sizes for the comparison slider, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepBehavior {
    pub coarse_percent: f64,
    pub fine_percent: f64,
}

impl Default for StepBehavior {
    fn default() -> Self {
        Self {
            coarse_percent: 2.0,
            fine_percent: 10.0,
        }
    }
}

impl StepBehavior {
    #[must_use]
    pub(crate) fn step(self, fine: bool) -> f64 {
        if fine {
            self.fine_percent
        } else {
            self.coarse_percent
        }
    }
}

/// One-shot intro sweep hinting that the slider can be dragged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepBehavior {
    pub enabled: bool,
    /// Minimum visible ratio that arms the sweep.
    pub visibility_threshold: f64,
    /// Delay between the visibility trigger and the first sweep frame.
    pub delay_ms: u64,
    pub duration_ms: u64,
    pub from_percent: f64,
    pub to_percent: f64,
    pub ease: Ease,
}

impl Default for SweepBehavior {
    fn default() -> Self {
        Self {
            enabled: true,
            visibility_threshold: 0.5,
            delay_ms: 400,
            duration_ms: 1_200,
            from_percent: 50.0,
            to_percent: 25.0,
            ease: Ease::InOutQuad,
        }
    }
}
