use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::TrackGeometry;
use crate::error::WidgetResult;
use crate::extensions::{ObserverRegistry, WidgetObserver};
use crate::interaction::{DragPolicy, InputArbiter, VisibilityTrigger};
use crate::timing::{Scheduler, TimerQueue, TimerToken};

use super::validation::validate_comparison_config;
use super::{ComparisonEvent, ComparisonFrame, ComparisonSliderConfig, SweepAnimator, SweepPhase};

/// Public comparison slider state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonState {
    pub position_percent: f64,
    pub dragging: bool,
    pub sweep_phase: SweepPhase,
}

/// Before/after comparison slider.
///
/// Owns a `[0, 100]` position, the one-shot intro sweep and its visibility
/// trigger. Timers advance through [`ComparisonSliderController::advance_to`]
/// and sweep frames through `on_frame`; visibility and input carry their
/// own `now_ms`.
#[derive(Debug)]
pub struct ComparisonSliderController<S: Scheduler = TimerQueue> {
    pub(super) config: ComparisonSliderConfig,
    pub(super) position_percent: f64,
    pub(super) dragging: bool,
    pub(super) track: Option<TrackGeometry>,
    pub(super) arbiter: InputArbiter,
    pub(super) visibility: VisibilityTrigger,
    pub(super) sweep: SweepAnimator,
    pub(super) sweep_delay: Option<TimerToken>,
    pub(super) scheduler: S,
    pub(super) observers: ObserverRegistry<ComparisonEvent>,
}

impl ComparisonSliderController<TimerQueue> {
    /// Builds a slider on a manual clock starting at `now_ms`.
    pub fn initialize(config: ComparisonSliderConfig, now_ms: u64) -> WidgetResult<Self> {
        Self::with_scheduler(config, TimerQueue::new(now_ms))
    }
}

impl<S: Scheduler> ComparisonSliderController<S> {
    pub fn with_scheduler(config: ComparisonSliderConfig, scheduler: S) -> WidgetResult<Self> {
        let config = validate_comparison_config(config)?;
        let mut visibility = VisibilityTrigger::new(config.sweep.visibility_threshold);
        let sweep = SweepAnimator::new(config.sweep);
        if sweep.phase() == SweepPhase::Settled {
            visibility.disconnect();
        }
        debug!(
            initial_percent = config.initial_percent,
            sweep_phase = ?sweep.phase(),
            "comparison slider initialized"
        );
        Ok(Self {
            config,
            position_percent: config.initial_percent,
            dragging: false,
            track: None,
            arbiter: InputArbiter::new(DragPolicy::HandleOnly),
            visibility,
            sweep,
            sweep_delay: None,
            scheduler,
            observers: ObserverRegistry::default(),
        })
    }

    #[must_use]
    pub fn config(&self) -> ComparisonSliderConfig {
        self.config
    }

    #[must_use]
    pub fn position_percent(&self) -> f64 {
        self.position_percent
    }

    #[must_use]
    pub fn frame(&self) -> ComparisonFrame {
        ComparisonFrame::new(self.position_percent)
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    #[must_use]
    pub fn sweep_phase(&self) -> SweepPhase {
        self.sweep.phase()
    }

    #[must_use]
    pub fn visibility_trigger(&self) -> VisibilityTrigger {
        self.visibility
    }

    #[must_use]
    pub fn track_geometry(&self) -> Option<TrackGeometry> {
        self.track
    }

    #[must_use]
    pub fn state(&self) -> ComparisonState {
        ComparisonState {
            position_percent: self.position_percent,
            dragging: self.dragging,
            sweep_phase: self.sweep.phase(),
        }
    }

    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn register_observer(
        &mut self,
        observer: Box<dyn WidgetObserver<ComparisonEvent>>,
    ) -> WidgetResult<()> {
        self.observers.register(observer)
    }

    pub fn unregister_observer(&mut self, observer_id: &str) -> bool {
        self.observers.unregister(observer_id)
    }

    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub(super) fn emit(&mut self, event: ComparisonEvent) {
        self.observers.emit(&event);
    }
}
