use crate::core::{PERCENT_MAX, PERCENT_MIN, TrackGeometry};
use crate::error::{WidgetError, WidgetResult};

use super::{
    AutoplayBehavior, CarouselConfig, ComparisonSliderConfig, StepBehavior, SweepBehavior,
};

fn is_percent(value: f64) -> bool {
    value.is_finite() && (PERCENT_MIN..=PERCENT_MAX).contains(&value)
}

pub(super) fn validate_autoplay_behavior(
    behavior: AutoplayBehavior,
) -> WidgetResult<AutoplayBehavior> {
    if behavior.interval_ms == 0 {
        return Err(WidgetError::InvalidConfig(
            "autoplay interval_ms must be > 0".to_owned(),
        ));
    }
    Ok(behavior)
}

pub(super) fn validate_carousel_config(config: CarouselConfig) -> WidgetResult<CarouselConfig> {
    validate_autoplay_behavior(config.autoplay)?;
    if !config.swipe.threshold_px.is_finite() || config.swipe.threshold_px < 0.0 {
        return Err(WidgetError::InvalidConfig(
            "swipe threshold_px must be finite and >= 0".to_owned(),
        ));
    }
    Ok(config)
}

pub(super) fn validate_step_behavior(behavior: StepBehavior) -> WidgetResult<StepBehavior> {
    for (name, value) in [
        ("coarse_percent", behavior.coarse_percent),
        ("fine_percent", behavior.fine_percent),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(WidgetError::InvalidConfig(format!(
                "step {name} must be finite and > 0"
            )));
        }
    }
    Ok(behavior)
}

pub(super) fn validate_sweep_behavior(behavior: SweepBehavior) -> WidgetResult<SweepBehavior> {
    if !behavior.visibility_threshold.is_finite()
        || behavior.visibility_threshold <= 0.0
        || behavior.visibility_threshold > 1.0
    {
        return Err(WidgetError::InvalidConfig(
            "sweep visibility_threshold must be finite and in (0, 1]".to_owned(),
        ));
    }
    if behavior.duration_ms == 0 {
        return Err(WidgetError::InvalidConfig(
            "sweep duration_ms must be > 0".to_owned(),
        ));
    }
    if !is_percent(behavior.from_percent) || !is_percent(behavior.to_percent) {
        return Err(WidgetError::InvalidConfig(
            "sweep from/to percent must be finite and in [0, 100]".to_owned(),
        ));
    }
    Ok(behavior)
}

pub(super) fn validate_comparison_config(
    config: ComparisonSliderConfig,
) -> WidgetResult<ComparisonSliderConfig> {
    if !is_percent(config.initial_percent) {
        return Err(WidgetError::InvalidConfig(
            "initial_percent must be finite and in [0, 100]".to_owned(),
        ));
    }
    validate_step_behavior(config.step)?;
    validate_sweep_behavior(config.sweep)?;
    Ok(config)
}

pub(super) fn validate_track_geometry(track: TrackGeometry) -> WidgetResult<TrackGeometry> {
    if !track.is_valid() {
        return Err(WidgetError::InvalidTrackGeometry {
            left: track.left,
            width: track.width,
        });
    }
    Ok(track)
}

#[cfg(test)]
mod tests {
    use super::{
        validate_autoplay_behavior, validate_carousel_config, validate_comparison_config,
        validate_sweep_behavior, validate_track_geometry,
    };
    use crate::api::{
        AutoplayBehavior, CarouselConfig, ComparisonSliderConfig, StepBehavior, SweepBehavior,
    };
    use crate::core::TrackGeometry;

    #[test]
    fn default_configs_are_valid() {
        validate_carousel_config(CarouselConfig::default()).expect("carousel defaults");
        validate_comparison_config(ComparisonSliderConfig::default()).expect("slider defaults");
    }

    #[test]
    fn autoplay_validation_rejects_zero_interval() {
        let err = validate_autoplay_behavior(AutoplayBehavior {
            interval_ms: 0,
            ..AutoplayBehavior::default()
        })
        .expect_err("zero interval must fail");
        assert!(format!("{err}").contains("interval_ms"));
    }

    #[test]
    fn carousel_validation_rejects_negative_swipe_threshold() {
        let err = validate_carousel_config(CarouselConfig::new().with_swipe_threshold_px(-1.0))
            .expect_err("negative threshold must fail");
        assert!(format!("{err}").contains("swipe threshold_px"));
    }

    #[test]
    fn sweep_validation_rejects_out_of_range_threshold() {
        let err = validate_sweep_behavior(SweepBehavior {
            visibility_threshold: 1.5,
            ..SweepBehavior::default()
        })
        .expect_err("threshold above 1 must fail");
        assert!(format!("{err}").contains("visibility_threshold"));
    }

    #[test]
    fn comparison_validation_rejects_bad_steps_and_initial_percent() {
        let err = validate_comparison_config(ComparisonSliderConfig::new().with_step(
            StepBehavior {
                coarse_percent: 0.0,
                fine_percent: 10.0,
            },
        ))
        .expect_err("zero step must fail");
        assert!(format!("{err}").contains("coarse_percent"));

        let err = validate_comparison_config(
            ComparisonSliderConfig::new().with_initial_percent(f64::NAN),
        )
        .expect_err("nan initial percent must fail");
        assert!(format!("{err}").contains("initial_percent"));
    }

    #[test]
    fn track_validation_rejects_non_positive_width() {
        let err = validate_track_geometry(TrackGeometry::new(0.0, -10.0))
            .expect_err("negative width must fail");
        assert!(format!("{err}").contains("track geometry"));
    }
}
