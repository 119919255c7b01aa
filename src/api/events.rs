use serde::{Deserialize, Serialize};

use super::{CarouselFrame, ComparisonFrame, IndicatorSet, SweepPhase};

/// Why the carousel index changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationCause {
    Api,
    Indicator,
    Keyboard,
    Swipe,
    Autoplay,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CarouselEvent {
    IndexChanged {
        frame: CarouselFrame,
        cause: NavigationCause,
    },
    IndicatorsChanged(IndicatorSet),
    AutoplayStarted { interval_ms: u64 },
    AutoplayStopped,
    DragStarted { x: f64 },
    /// `navigated` is `false` for sub-threshold releases and cancellations.
    DragEnded { navigated: bool, cancelled: bool },
}

/// Origin of a comparison position write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PositionSource {
    Api,
    Drag,
    TrackClick,
    Keyboard,
    Sweep,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ComparisonEvent {
    PositionChanged {
        frame: ComparisonFrame,
        source: PositionSource,
    },
    SweepPhaseChanged(SweepPhase),
    DragStarted,
    DragEnded,
}
