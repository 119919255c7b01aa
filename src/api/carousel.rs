use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{SlideSet, wrap_index};
use crate::error::WidgetResult;
use crate::extensions::{ObserverRegistry, WidgetObserver};
use crate::interaction::{DragPolicy, InputArbiter, InteractionMode};
use crate::timing::{AutoplayTimer, Scheduler, TimerQueue};

use super::validation::validate_carousel_config;
use super::{CarouselConfig, CarouselEvent, CarouselFrame, IndicatorSet};

/// Public carousel state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarouselState {
    pub current_index: usize,
    pub total: usize,
    pub autoplay_active: bool,
    pub drag_active: bool,
    pub hovered: bool,
}

/// Looping image carousel.
///
/// Owns the slide index and arbitrates pointer, keyboard, hover and autoplay
/// input. Autoplay ticks fire from [`CarouselController::advance_to`]; input
/// handlers carry their own `now_ms`, so resets are anchored at the input.
#[derive(Debug)]
pub struct CarouselController<S: Scheduler = TimerQueue> {
    pub(super) slides: SlideSet,
    pub(super) config: CarouselConfig,
    pub(super) current_index: usize,
    pub(super) last_frame: CarouselFrame,
    pub(super) hovered: bool,
    pub(super) autoplay_enabled: bool,
    pub(super) arbiter: InputArbiter,
    pub(super) autoplay: AutoplayTimer,
    pub(super) scheduler: S,
    pub(super) observers: ObserverRegistry<CarouselEvent>,
}

impl CarouselController<TimerQueue> {
    /// Builds a carousel on a manual clock starting at `now_ms`.
    ///
    /// The first frame is instant and autoplay starts immediately when
    /// enabled.
    pub fn initialize(slides: SlideSet, config: CarouselConfig, now_ms: u64) -> WidgetResult<Self> {
        Self::with_scheduler(slides, config, TimerQueue::new(now_ms))
    }
}

impl<S: Scheduler> CarouselController<S> {
    pub fn with_scheduler(
        slides: SlideSet,
        config: CarouselConfig,
        scheduler: S,
    ) -> WidgetResult<Self> {
        let config = validate_carousel_config(config)?;
        let current_index = wrap_index(config.start_index, slides.len());

        let mut controller = Self {
            slides,
            config,
            current_index,
            last_frame: CarouselFrame::instant(current_index),
            hovered: false,
            autoplay_enabled: config.autoplay.enabled,
            arbiter: InputArbiter::new(DragPolicy::AnyTarget),
            autoplay: AutoplayTimer::new(config.autoplay.interval_ms),
            scheduler,
            observers: ObserverRegistry::default(),
        };
        if controller.autoplay_enabled {
            controller.autoplay.start(&mut controller.scheduler);
        }
        debug!(
            total = controller.slides.len(),
            current_index,
            autoplay = controller.autoplay.is_running(),
            "carousel initialized"
        );
        Ok(controller)
    }

    #[must_use]
    pub fn slides(&self) -> &SlideSet {
        &self.slides
    }

    #[must_use]
    pub fn config(&self) -> CarouselConfig {
        self.config
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.slides.len()
    }

    /// Frame emitted by the most recent navigation (or initialization).
    #[must_use]
    pub fn frame(&self) -> CarouselFrame {
        self.last_frame
    }

    #[must_use]
    pub fn indicators(&self) -> IndicatorSet {
        IndicatorSet {
            active_index: self.current_index,
            total: self.slides.len(),
        }
    }

    #[must_use]
    pub fn interaction_mode(&self) -> InteractionMode {
        self.arbiter.mode()
    }

    #[must_use]
    pub fn state(&self) -> CarouselState {
        CarouselState {
            current_index: self.current_index,
            total: self.slides.len(),
            autoplay_active: self.autoplay.is_running(),
            drag_active: self.arbiter.session().is_some(),
            hovered: self.hovered,
        }
    }

    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn register_observer(
        &mut self,
        observer: Box<dyn WidgetObserver<CarouselEvent>>,
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

    pub(super) fn emit(&mut self, event: CarouselEvent) {
        self.observers.emit(&event);
    }
}
