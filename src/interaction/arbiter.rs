use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::core::PointerId;

use super::{HitTarget, InputEvent, InputSource, InteractionMode, PointerPhase, PointerSample};

/// Which hit targets may open a drag session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragPolicy {
    /// Any press on the widget starts a drag (carousel swipe).
    AnyTarget,
    /// Only presses on the handle start a drag (comparison slider).
    HandleOnly,
}

/// One input source's press-move-release lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragSession {
    pub pointer_id: PointerId,
    pub source: InputSource,
    pub origin_x: f64,
    pub last_x: f64,
}

impl DragSession {
    /// Signed travel since the press.
    #[must_use]
    pub fn net_dx(&self) -> f64 {
        self.last_x - self.origin_x
    }
}

/// Normalized intent stream produced from raw input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Intent {
    Navigate { delta: i8, fine: bool },
    SetPosition { x: f64 },
    DragStart { x: f64 },
    DragMove { x: f64 },
    /// `cancelled` ends report `x == origin_x`, i.e. zero net movement.
    DragEnd { origin_x: f64, x: f64, cancelled: bool },
    HoverEnter,
    HoverLeave,
}

/// Binds at most one pointer identity to a drag session and turns raw events
/// into [`Intent`]s. Stray or concurrent pointer traffic yields `None`.
#[derive(Debug, Clone)]
pub struct InputArbiter {
    policy: DragPolicy,
    session: Option<DragSession>,
}

impl InputArbiter {
    #[must_use]
    pub fn new(policy: DragPolicy) -> Self {
        Self {
            policy,
            session: None,
        }
    }

    #[must_use]
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn mode(&self) -> InteractionMode {
        if self.session.is_some() {
            InteractionMode::Dragging
        } else {
            InteractionMode::Idle
        }
    }

    pub fn handle(&mut self, event: InputEvent) -> Option<Intent> {
        match event {
            InputEvent::Pointer { phase, sample } => {
                if !sample.x.is_finite() {
                    warn!(
                        pointer = sample.id.0,
                        ?phase,
                        "dropping pointer event with non-finite x"
                    );
                    return None;
                }
                match phase {
                    PointerPhase::Down => self.on_down(sample),
                    PointerPhase::Move => self.on_move(sample),
                    PointerPhase::Up => self.on_up(sample),
                    PointerPhase::Cancel => self.on_cancel(sample.id),
                }
            }
            InputEvent::HoverEnter => Some(Intent::HoverEnter),
            InputEvent::HoverLeave => Some(Intent::HoverLeave),
            InputEvent::TrackClick { x, on_handle } => {
                if on_handle {
                    return None;
                }
                if !x.is_finite() {
                    warn!("dropping track click with non-finite x");
                    return None;
                }
                Some(Intent::SetPosition { x })
            }
            InputEvent::Key(press) => Some(Intent::Navigate {
                delta: press.key.direction(),
                fine: press.fine,
            }),
        }
    }

    /// Drops any live session without producing an intent.
    pub fn reset_session(&mut self) {
        if let Some(session) = self.session.take() {
            trace!(pointer = session.pointer_id.0, "drag session reset");
        }
    }

    fn on_down(&mut self, sample: PointerSample) -> Option<Intent> {
        if let Some(active) = &self.session {
            trace!(
                active = active.pointer_id.0,
                rejected = sample.id.0,
                "rejecting concurrent pointer down"
            );
            return None;
        }
        if self.policy == DragPolicy::HandleOnly && sample.target != HitTarget::Handle {
            return None;
        }
        self.session = Some(DragSession {
            pointer_id: sample.id,
            source: sample.source,
            origin_x: sample.x,
            last_x: sample.x,
        });
        Some(Intent::DragStart { x: sample.x })
    }

    fn on_move(&mut self, sample: PointerSample) -> Option<Intent> {
        let session = self
            .session
            .as_mut()
            .filter(|session| session.pointer_id == sample.id)?;
        session.last_x = sample.x;
        Some(Intent::DragMove { x: sample.x })
    }

    fn on_up(&mut self, sample: PointerSample) -> Option<Intent> {
        let session = self.take_session(sample.id)?;
        Some(Intent::DragEnd {
            origin_x: session.origin_x,
            x: sample.x,
            cancelled: false,
        })
    }

    fn on_cancel(&mut self, id: PointerId) -> Option<Intent> {
        let session = self.take_session(id)?;
        Some(Intent::DragEnd {
            origin_x: session.origin_x,
            x: session.origin_x,
            cancelled: true,
        })
    }

    fn take_session(&mut self, id: PointerId) -> Option<DragSession> {
        if self.session.is_some_and(|session| session.pointer_id == id) {
            self.session.take()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DragPolicy, InputArbiter, Intent};
    use crate::interaction::{InputEvent, InteractionMode, KeyPress, NamedKey, PointerSample};

    #[test]
    fn stray_move_and_up_are_ignored() {
        let mut arbiter = InputArbiter::new(DragPolicy::AnyTarget);
        assert_eq!(
            arbiter.handle(InputEvent::pointer_move(PointerSample::mouse(1, 10.0))),
            None
        );
        assert_eq!(
            arbiter.handle(InputEvent::pointer_up(PointerSample::mouse(1, 10.0))),
            None
        );
        assert_eq!(arbiter.mode(), InteractionMode::Idle);
    }

    #[test]
    fn second_pointer_is_rejected_while_session_is_live() {
        let mut arbiter = InputArbiter::new(DragPolicy::AnyTarget);
        assert_eq!(
            arbiter.handle(InputEvent::pointer_down(PointerSample::mouse(1, 100.0))),
            Some(Intent::DragStart { x: 100.0 })
        );
        assert_eq!(
            arbiter.handle(InputEvent::pointer_down(PointerSample::touch(2, 40.0))),
            None
        );
        assert_eq!(
            arbiter.handle(InputEvent::pointer_move(PointerSample::touch(2, 10.0))),
            None
        );
        assert_eq!(
            arbiter.handle(InputEvent::pointer_up(PointerSample::touch(2, 10.0))),
            None
        );

        let session = arbiter.session().expect("first session survives");
        assert_eq!(session.origin_x, 100.0);
    }

    #[test]
    fn cancel_reports_zero_net_movement() {
        let mut arbiter = InputArbiter::new(DragPolicy::AnyTarget);
        arbiter.handle(InputEvent::pointer_down(PointerSample::touch(7, 300.0)));
        arbiter.handle(InputEvent::pointer_move(PointerSample::touch(7, 120.0)));

        let end = arbiter.handle(InputEvent::pointer_cancel(PointerSample::touch(7, 120.0)));
        assert_eq!(
            end,
            Some(Intent::DragEnd {
                origin_x: 300.0,
                x: 300.0,
                cancelled: true
            })
        );
        assert!(arbiter.session().is_none());
    }

    #[test]
    fn handle_only_policy_ignores_track_presses() {
        let mut arbiter = InputArbiter::new(DragPolicy::HandleOnly);
        assert_eq!(
            arbiter.handle(InputEvent::pointer_down(PointerSample::mouse(1, 5.0))),
            None
        );
        assert_eq!(
            arbiter.handle(InputEvent::pointer_down(
                PointerSample::mouse(1, 5.0).on_handle()
            )),
            Some(Intent::DragStart { x: 5.0 })
        );
    }

    #[test]
    fn handle_clicks_never_become_set_position() {
        let mut arbiter = InputArbiter::new(DragPolicy::HandleOnly);
        assert_eq!(
            arbiter.handle(InputEvent::TrackClick {
                x: 42.0,
                on_handle: true
            }),
            None
        );
        assert_eq!(
            arbiter.handle(InputEvent::TrackClick {
                x: 42.0,
                on_handle: false
            }),
            Some(Intent::SetPosition { x: 42.0 })
        );
    }

    #[test]
    fn keys_map_to_signed_navigation() {
        let mut arbiter = InputArbiter::new(DragPolicy::AnyTarget);
        assert_eq!(
            arbiter.handle(InputEvent::Key(KeyPress::fine(NamedKey::ArrowLeft))),
            Some(Intent::Navigate {
                delta: -1,
                fine: true
            })
        );
        assert_eq!(NamedKey::from_name("Enter"), None);
    }

    #[test]
    fn non_finite_coordinates_are_dropped() {
        let mut arbiter = InputArbiter::new(DragPolicy::AnyTarget);
        assert_eq!(
            arbiter.handle(InputEvent::pointer_down(PointerSample::mouse(1, f64::NAN))),
            None
        );
        assert!(arbiter.session().is_none());
    }

    #[test]
    fn reset_session_drops_the_live_drag_silently() {
        let mut arbiter = InputArbiter::new(DragPolicy::HandleOnly);
        arbiter.handle(InputEvent::pointer_down(
            PointerSample::mouse(4, 60.0).on_handle(),
        ));
        arbiter.reset_session();

        assert_eq!(arbiter.mode(), InteractionMode::Idle);
        assert_eq!(
            arbiter.handle(InputEvent::pointer_up(PointerSample::mouse(4, 90.0))),
            None
        );
    }
}
