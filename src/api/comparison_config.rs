use serde::{Deserialize, Serialize};

use super::{StepBehavior, SweepBehavior};

fn default_initial_percent() -> f64 {
    50.0
}

/// Comparison slider bootstrap configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonSliderConfig {
    #[serde(default = "default_initial_percent")]
    pub initial_percent: f64,
    #[serde(default)]
    pub step: StepBehavior,
    #[serde(default)]
    pub sweep: SweepBehavior,
}

impl Default for ComparisonSliderConfig {
    fn default() -> Self {
        Self {
            initial_percent: default_initial_percent(),
            step: StepBehavior::default(),
            sweep: SweepBehavior::default(),
        }
    }
}

impl ComparisonSliderConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_initial_percent(mut self, initial_percent: f64) -> Self {
        self.initial_percent = initial_percent;
        self
    }

    #[must_use]
    pub fn with_step(mut self, step: StepBehavior) -> Self {
        self.step = step;
        self
    }

    #[must_use]
    pub fn with_sweep(mut self, sweep: SweepBehavior) -> Self {
        self.sweep = sweep;
        self
    }

    /// Disables the intro sweep; the slider starts settled.
    #[must_use]
    pub fn without_sweep(mut self) -> Self {
        self.sweep.enabled = false;
        self
    }
}
