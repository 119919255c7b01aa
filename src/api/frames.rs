use serde::{Deserialize, Serialize};

use crate::core::{Ease, aria_value_now};

use super::TransitionBehavior;

/// Carousel output for one navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarouselFrame {
    pub current_index: usize,
    /// `0` means an instant jump.
    pub transition_duration_ms: u32,
    pub ease: Option<Ease>,
}

impl CarouselFrame {
    #[must_use]
    pub fn instant(current_index: usize) -> Self {
        Self {
            current_index,
            transition_duration_ms: 0,
            ease: None,
        }
    }

    #[must_use]
    pub fn animated(current_index: usize, transition: TransitionBehavior) -> Self {
        Self {
            current_index,
            transition_duration_ms: transition.duration_ms,
            ease: Some(transition.ease),
        }
    }

    #[must_use]
    pub fn is_instant(&self) -> bool {
        self.transition_duration_ms == 0
    }
}

/// Slide indicators (dots). Exactly one is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorSet {
    pub active_index: usize,
    pub total: usize,
}

impl IndicatorSet {
    #[must_use]
    pub fn is_active(&self, index: usize) -> bool {
        index == self.active_index
    }

    /// Active flag per indicator, in slide order.
    pub fn states(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.total).map(|index| self.is_active(index))
    }
}

/// Comparison slider output for one position write.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonFrame {
    pub position_percent: f64,
    /// Rounded copy for assistive presentation. Never read back.
    pub aria_value_now: u8,
}

impl ComparisonFrame {
    #[must_use]
    pub fn new(position_percent: f64) -> Self {
        Self {
            position_percent,
            aria_value_now: aria_value_now(position_percent),
        }
    }
}
