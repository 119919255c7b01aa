use tracing::trace;

use crate::core::wrap_index;
use crate::timing::Scheduler;

use super::{CarouselController, CarouselEvent, CarouselFrame, NavigationCause};

impl<S: Scheduler> CarouselController<S> {
    /// Moves to `index`, wrapped into range in both directions, at host time
    /// `now_ms`.
    ///
    /// Resets the autoplay timer so the next tick lands a full interval after
    /// `now_ms`.
    pub fn go_to(&mut self, index: i64, smooth: bool, now_ms: u64) -> CarouselFrame {
        self.sync_clock(now_ms);
        self.navigate(index, smooth, NavigationCause::Api)
    }

    pub fn next(&mut self, now_ms: u64) -> CarouselFrame {
        self.sync_clock(now_ms);
        self.step(1, NavigationCause::Api)
    }

    pub fn prev(&mut self, now_ms: u64) -> CarouselFrame {
        self.sync_clock(now_ms);
        self.step(-1, NavigationCause::Api)
    }

    /// Indicator (dot) activation.
    pub fn select_indicator(&mut self, index: usize, now_ms: u64) -> CarouselFrame {
        self.sync_clock(now_ms);
        let index = i64::try_from(index).unwrap_or(i64::MAX);
        self.navigate(index, true, NavigationCause::Indicator)
    }

    pub(super) fn step(&mut self, delta: i64, cause: NavigationCause) -> CarouselFrame {
        let target = self.current_index_i64().saturating_add(delta);
        self.navigate(target, true, cause)
    }

    pub(super) fn navigate(
        &mut self,
        index: i64,
        smooth: bool,
        cause: NavigationCause,
    ) -> CarouselFrame {
        let frame = self.apply_index(index, smooth, cause);
        self.restart_autoplay_after_navigation();
        frame
    }

    /// Writes the index and emits frame plus indicators without touching
    /// autoplay.
    pub(super) fn apply_index(
        &mut self,
        index: i64,
        smooth: bool,
        cause: NavigationCause,
    ) -> CarouselFrame {
        self.current_index = wrap_index(index, self.slides.len());
        let frame = if smooth {
            CarouselFrame::animated(self.current_index, self.config.transition)
        } else {
            CarouselFrame::instant(self.current_index)
        };
        self.last_frame = frame;
        trace!(
            requested = index,
            current_index = self.current_index,
            ?cause,
            "carousel navigate"
        );
        self.emit(CarouselEvent::IndexChanged { frame, cause });
        let indicators = self.indicators();
        self.emit(CarouselEvent::IndicatorsChanged(indicators));
        frame
    }

    pub(super) fn current_index_i64(&self) -> i64 {
        i64::try_from(self.current_index).unwrap_or(i64::MAX)
    }
}
