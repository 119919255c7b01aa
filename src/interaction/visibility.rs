use serde::{Deserialize, Serialize};
use tracing::debug;

/// Host viewport-intersection sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VisibilitySignal {
    pub is_visible: bool,
    pub ratio: f64,
}

impl VisibilitySignal {
    #[must_use]
    pub fn new(is_visible: bool, ratio: f64) -> Self {
        Self { is_visible, ratio }
    }

    /// Visible sample at `ratio`.
    #[must_use]
    pub fn visible(ratio: f64) -> Self {
        Self::new(true, ratio)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TriggerState {
    Connected,
    /// Fired once and disconnected itself.
    Fired,
    Disconnected,
}

/// Fire-once, single-subscriber visibility source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VisibilityTrigger {
    threshold: f64,
    state: TriggerState,
}

impl VisibilityTrigger {
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            state: TriggerState::Connected,
        }
    }

    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    #[must_use]
    pub fn state(&self) -> TriggerState {
        self.state
    }

    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.state == TriggerState::Connected
    }

    /// Returns `true` exactly once: on the first visible sample at or past the
    /// threshold while connected.
    pub fn observe(&mut self, signal: VisibilitySignal) -> bool {
        if !self.is_connected() {
            return false;
        }
        if !signal.is_visible || !signal.ratio.is_finite() || signal.ratio < self.threshold {
            return false;
        }
        self.state = TriggerState::Fired;
        debug!(ratio = signal.ratio, "visibility trigger fired");
        true
    }

    /// Returns `true` when this call closed a live connection.
    pub fn disconnect(&mut self) -> bool {
        if !self.is_connected() {
            return false;
        }
        self.state = TriggerState::Disconnected;
        debug!("visibility trigger disconnected");
        true
    }
}
