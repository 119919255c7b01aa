mod arbiter;
mod visibility;

pub use arbiter::{DragPolicy, DragSession, InputArbiter, Intent};
pub use visibility::{TriggerState, VisibilitySignal, VisibilityTrigger};

use serde::{Deserialize, Serialize};

use crate::core::PointerId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionMode {
    Idle,
    Dragging,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputSource {
    Mouse,
    Touch,
    Pen,
}

/// Part of the widget a pointer landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitTarget {
    Track,
    Handle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
    /// The device lost tracking mid-sequence.
    Cancel,
}

/// Pointer and touch samples share this shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerSample {
    pub id: PointerId,
    pub x: f64,
    pub source: InputSource,
    pub target: HitTarget,
}

impl PointerSample {
    #[must_use]
    pub fn mouse(id: u64, x: f64) -> Self {
        Self {
            id: PointerId(id),
            x,
            source: InputSource::Mouse,
            target: HitTarget::Track,
        }
    }

    #[must_use]
    pub fn touch(id: u64, x: f64) -> Self {
        Self {
            source: InputSource::Touch,
            ..Self::mouse(id, x)
        }
    }

    #[must_use]
    pub fn on_handle(mut self) -> Self {
        self.target = HitTarget::Handle;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NamedKey {
    ArrowLeft,
    ArrowRight,
}

impl NamedKey {
    /// Maps a host key name. Unhandled keys yield `None`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ArrowLeft" => Some(Self::ArrowLeft),
            "ArrowRight" => Some(Self::ArrowRight),
            _ => None,
        }
    }

    #[must_use]
    pub fn direction(self) -> i8 {
        match self {
            Self::ArrowLeft => -1,
            Self::ArrowRight => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyPress {
    pub key: NamedKey,
    /// Fine-step modifier (shift on desktop keyboards).
    pub fine: bool,
}

impl KeyPress {
    #[must_use]
    pub fn new(key: NamedKey) -> Self {
        Self { key, fine: false }
    }

    #[must_use]
    pub fn fine(key: NamedKey) -> Self {
        Self { key, fine: true }
    }
}

/// Raw host input accepted by [`InputArbiter`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    Pointer {
        phase: PointerPhase,
        sample: PointerSample,
    },
    HoverEnter,
    HoverLeave,
    /// Click on the widget surface; `on_handle` clicks belong to the drag path.
    TrackClick { x: f64, on_handle: bool },
    Key(KeyPress),
}

impl InputEvent {
    #[must_use]
    pub fn pointer_down(sample: PointerSample) -> Self {
        Self::Pointer {
            phase: PointerPhase::Down,
            sample,
        }
    }

    #[must_use]
    pub fn pointer_move(sample: PointerSample) -> Self {
        Self::Pointer {
            phase: PointerPhase::Move,
            sample,
        }
    }

    #[must_use]
    pub fn pointer_up(sample: PointerSample) -> Self {
        Self::Pointer {
            phase: PointerPhase::Up,
            sample,
        }
    }

    #[must_use]
    pub fn pointer_cancel(sample: PointerSample) -> Self {
        Self::Pointer {
            phase: PointerPhase::Cancel,
            sample,
        }
    }
}
