use crate::core::types::TrackGeometry;
use crate::error::{WidgetError, WidgetResult};

pub const PERCENT_MIN: f64 = 0.0;
pub const PERCENT_MAX: f64 = 100.0;

/// Normalizes any signed index into `0..total` with wraparound in both
/// directions.
///
/// `total` must be non-zero; slide sets guarantee that.
#[must_use]
pub fn wrap_index(index: i64, total: usize) -> usize {
    debug_assert!(total > 0, "wrap_index requires a non-empty range");
    let total = i64::try_from(total).unwrap_or(i64::MAX);
    // Same result as ((i % n) + n) % n, without the intermediate overflow.
    index.rem_euclid(total) as usize
}

#[must_use]
pub fn clamp_percent(percent: f64) -> f64 {
    percent.clamp(PERCENT_MIN, PERCENT_MAX)
}

/// Derives a clamped track percentage from a client x coordinate.
pub fn percent_from_client_x(client_x: f64, track: TrackGeometry) -> WidgetResult<f64> {
    if !track.is_valid() {
        return Err(WidgetError::InvalidTrackGeometry {
            left: track.left,
            width: track.width,
        });
    }
    if !client_x.is_finite() {
        return Err(WidgetError::InvalidInput(
            "client x must be finite".to_owned(),
        ));
    }
    Ok(clamp_percent((client_x - track.left) / track.width * 100.0))
}

/// Moves `percent` by `step` in the sign of `direction` and clamps.
#[must_use]
pub fn step_percent(percent: f64, direction: i8, step: f64) -> f64 {
    clamp_percent(percent + f64::from(direction.signum()) * step)
}

/// Rounded value exposed to assistive technology. Output only.
#[must_use]
pub fn aria_value_now(percent: f64) -> u8 {
    clamp_percent(percent).round() as u8
}
