use serde::{Deserialize, Serialize};

/// Easing curves mapping normalized progress to normalized output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ease {
    Linear,
    /// `t < 0.5 ? 2t² : 1 − (−2t + 2)² / 2`
    InOutQuad,
    /// `t < 0.5 ? 4t³ : 1 − (−2t + 2)³ / 2`
    InOutCubic,
}

impl Ease {
    /// Applies the curve to progress `t`, clamped into `[0, 1]`.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}
