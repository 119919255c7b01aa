pub mod ease;
pub mod position;
pub mod types;

pub use ease::Ease;
pub use position::{
    PERCENT_MAX, PERCENT_MIN, aria_value_now, clamp_percent, percent_from_client_x, step_percent,
    wrap_index,
};
pub use types::{PointerId, SlideId, SlideSet, TrackGeometry};
