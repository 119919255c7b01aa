use tracing::{trace, warn};

use crate::core::{TrackGeometry, clamp_percent, percent_from_client_x, step_percent};
use crate::error::WidgetResult;
use crate::interaction::{InputEvent, Intent, KeyPress, PointerSample};
use crate::timing::Scheduler;

use super::validation::validate_track_geometry;
use super::{ComparisonEvent, ComparisonFrame, ComparisonSliderController, PositionSource};

impl<S: Scheduler> ComparisonSliderController<S> {
    /// Layout signal from the host; required for pointer-derived positions.
    pub fn set_track_geometry(&mut self, track: TrackGeometry) -> WidgetResult<()> {
        self.track = Some(validate_track_geometry(track)?);
        Ok(())
    }

    /// `clamp((client_x - track_left) / track_width * 100, 0, 100)`.
    pub fn set_position(
        &mut self,
        client_x: f64,
        track_left: f64,
        track_width: f64,
    ) -> WidgetResult<ComparisonFrame> {
        let percent = percent_from_client_x(client_x, TrackGeometry::new(track_left, track_width))?;
        Ok(self.write_position(percent, PositionSource::Api))
    }

    /// Moves by the coarse step, or the fine step when `fine` is set, in the
    /// sign of `direction`.
    pub fn step_position(&mut self, direction: i8, fine: bool) -> ComparisonFrame {
        let percent = step_percent(
            self.position_percent,
            direction,
            self.config.step.step(fine),
        );
        self.write_position(percent, PositionSource::Keyboard)
    }

    /// Routes one raw input event, observed at host time `now_ms`, through
    /// the arbiter.
    ///
    /// Returns the position frame when the event wrote a position.
    pub fn handle_input(&mut self, event: InputEvent, now_ms: u64) -> Option<ComparisonFrame> {
        self.sync_clock(now_ms);
        let intent = self.arbiter.handle(event)?;
        match intent {
            Intent::DragStart { .. } => {
                self.drag_start(now_ms);
                None
            }
            Intent::DragMove { x } => {
                if !self.dragging {
                    return None;
                }
                self.position_from_track(x, PositionSource::Drag)
            }
            Intent::DragEnd { .. } => {
                self.drag_end(now_ms);
                None
            }
            Intent::SetPosition { x } => self.position_from_track(x, PositionSource::TrackClick),
            Intent::Navigate { delta, fine } => Some(self.step_position(delta, fine)),
            Intent::HoverEnter | Intent::HoverLeave => None,
        }
    }

    pub fn handle_pointer_down(
        &mut self,
        sample: PointerSample,
        now_ms: u64,
    ) -> Option<ComparisonFrame> {
        self.handle_input(InputEvent::pointer_down(sample), now_ms)
    }

    pub fn handle_pointer_move(
        &mut self,
        sample: PointerSample,
        now_ms: u64,
    ) -> Option<ComparisonFrame> {
        self.handle_input(InputEvent::pointer_move(sample), now_ms)
    }

    pub fn handle_pointer_up(
        &mut self,
        sample: PointerSample,
        now_ms: u64,
    ) -> Option<ComparisonFrame> {
        self.handle_input(InputEvent::pointer_up(sample), now_ms)
    }

    pub fn handle_pointer_cancel(
        &mut self,
        sample: PointerSample,
        now_ms: u64,
    ) -> Option<ComparisonFrame> {
        self.handle_input(InputEvent::pointer_cancel(sample), now_ms)
    }

    /// Click on the track surface. Handle clicks are left to the drag path.
    pub fn handle_track_click(
        &mut self,
        x: f64,
        on_handle: bool,
        now_ms: u64,
    ) -> Option<ComparisonFrame> {
        self.handle_input(InputEvent::TrackClick { x, on_handle }, now_ms)
    }

    pub fn handle_key(&mut self, press: KeyPress, now_ms: u64) -> Option<ComparisonFrame> {
        self.handle_input(InputEvent::Key(press), now_ms)
    }

    fn position_from_track(&mut self, x: f64, source: PositionSource) -> Option<ComparisonFrame> {
        let Some(track) = self.track else {
            warn!(?source, "dropping pointer position: track geometry not set");
            return None;
        };
        match percent_from_client_x(x, track) {
            Ok(percent) => Some(self.write_position(percent, source)),
            Err(err) => {
                warn!(error = %err, ?source, "dropping pointer position");
                None
            }
        }
    }

    pub(super) fn write_position(
        &mut self,
        percent: f64,
        source: PositionSource,
    ) -> ComparisonFrame {
        self.position_percent = clamp_percent(percent);
        let frame = ComparisonFrame::new(self.position_percent);
        trace!(position = self.position_percent, ?source, "comparison position");
        self.emit(ComparisonEvent::PositionChanged { frame, source });
        frame
    }
}
