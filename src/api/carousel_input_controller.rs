use tracing::trace;

use crate::interaction::{InputEvent, Intent, KeyPress, PointerSample};
use crate::timing::Scheduler;

use super::{CarouselController, CarouselEvent, CarouselFrame, NavigationCause};

impl<S: Scheduler> CarouselController<S> {
    /// Routes one raw input event, observed at host time `now_ms`, through
    /// the arbiter.
    ///
    /// Returns the navigation frame when the event moved the carousel.
    pub fn handle_input(&mut self, event: InputEvent, now_ms: u64) -> Option<CarouselFrame> {
        self.sync_clock(now_ms);
        let intent = self.arbiter.handle(event)?;
        match intent {
            Intent::DragStart { x } => {
                self.stop_autoplay_timer();
                self.emit(CarouselEvent::DragStarted { x });
                None
            }
            Intent::DragMove { .. } => None,
            Intent::DragEnd {
                origin_x,
                x,
                cancelled,
            } => self.finish_drag(origin_x, x, cancelled),
            Intent::Navigate { delta, .. } => {
                Some(self.step(i64::from(delta), NavigationCause::Keyboard))
            }
            Intent::HoverEnter => {
                self.hovered = true;
                if self.config.autoplay.pause_on_hover {
                    self.stop_autoplay_timer();
                }
                None
            }
            Intent::HoverLeave => {
                self.hovered = false;
                if self.autoplay_allowed() {
                    self.start_autoplay_timer();
                }
                None
            }
            Intent::SetPosition { .. } => {
                trace!("carousel ignores absolute position intents");
                None
            }
        }
    }

    pub fn handle_pointer_down(
        &mut self,
        sample: PointerSample,
        now_ms: u64,
    ) -> Option<CarouselFrame> {
        self.handle_input(InputEvent::pointer_down(sample), now_ms)
    }

    pub fn handle_pointer_move(
        &mut self,
        sample: PointerSample,
        now_ms: u64,
    ) -> Option<CarouselFrame> {
        self.handle_input(InputEvent::pointer_move(sample), now_ms)
    }

    pub fn handle_pointer_up(
        &mut self,
        sample: PointerSample,
        now_ms: u64,
    ) -> Option<CarouselFrame> {
        self.handle_input(InputEvent::pointer_up(sample), now_ms)
    }

    /// Treated as a release with zero net movement.
    pub fn handle_pointer_cancel(
        &mut self,
        sample: PointerSample,
        now_ms: u64,
    ) -> Option<CarouselFrame> {
        self.handle_input(InputEvent::pointer_cancel(sample), now_ms)
    }

    pub fn handle_key(&mut self, press: KeyPress, now_ms: u64) -> Option<CarouselFrame> {
        self.handle_input(InputEvent::Key(press), now_ms)
    }

    pub fn pointer_enter(&mut self, now_ms: u64) {
        self.handle_input(InputEvent::HoverEnter, now_ms);
    }

    pub fn pointer_leave(&mut self, now_ms: u64) {
        self.handle_input(InputEvent::HoverLeave, now_ms);
    }

    fn finish_drag(&mut self, origin_x: f64, x: f64, cancelled: bool) -> Option<CarouselFrame> {
        let diff = origin_x - x;
        let navigated = !cancelled && diff.abs() > self.config.swipe.threshold_px;
        self.emit(CarouselEvent::DragEnded {
            navigated,
            cancelled,
        });
        if navigated {
            // Leftward swipe (origin right of release) reveals the next slide.
            let delta = if diff > 0.0 { 1 } else { -1 };
            return Some(self.step(delta, NavigationCause::Swipe));
        }
        self.restart_autoplay_after_navigation();
        None
    }
}
