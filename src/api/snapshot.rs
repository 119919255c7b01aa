use serde::{Deserialize, Serialize};

use crate::core::{SlideId, TrackGeometry};
use crate::error::WidgetResult;
use crate::interaction::TriggerState;
use crate::timing::Scheduler;

use super::{
    CarouselConfig, CarouselController, CarouselFrame, CarouselState, ComparisonFrame,
    ComparisonSliderConfig, ComparisonSliderController, ComparisonState, IndicatorSet,
};

/// Serializable deterministic carousel snapshot for regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarouselSnapshot {
    pub now_ms: u64,
    pub slides: Vec<SlideId>,
    pub state: CarouselState,
    pub frame: CarouselFrame,
    pub indicators: IndicatorSet,
    pub config: CarouselConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonSnapshot {
    pub now_ms: u64,
    pub state: ComparisonState,
    pub frame: ComparisonFrame,
    pub track: Option<TrackGeometry>,
    pub visibility: TriggerState,
    pub config: ComparisonSliderConfig,
}

impl<S: Scheduler> CarouselController<S> {
    #[must_use]
    pub fn snapshot(&self) -> CarouselSnapshot {
        CarouselSnapshot {
            now_ms: self.scheduler.now_ms(),
            slides: self.slides.iter().cloned().collect(),
            state: self.state(),
            frame: self.last_frame,
            indicators: self.indicators(),
            config: self.config,
        }
    }

    /// Pretty JSON for fixture-based regression checks.
    pub fn snapshot_json_pretty(&self) -> WidgetResult<String> {
        Ok(serde_json::to_string_pretty(&self.snapshot())?)
    }
}

impl<S: Scheduler> ComparisonSliderController<S> {
    #[must_use]
    pub fn snapshot(&self) -> ComparisonSnapshot {
        ComparisonSnapshot {
            now_ms: self.scheduler.now_ms(),
            state: self.state(),
            frame: self.frame(),
            track: self.track,
            visibility: self.visibility.state(),
            config: self.config,
        }
    }

    pub fn snapshot_json_pretty(&self) -> WidgetResult<String> {
        Ok(serde_json::to_string_pretty(&self.snapshot())?)
    }
}
