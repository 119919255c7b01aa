use proptest::prelude::*;
use showcase_rs::api::{ComparisonSliderConfig, ComparisonSliderController, SweepPhase};
use showcase_rs::core::TrackGeometry;
use showcase_rs::interaction::{PointerSample, VisibilitySignal};
use showcase_rs::timing::FrameTick;

#[derive(Debug, Clone)]
enum SliderOp {
    SetPosition(f64),
    Step(bool, bool),
    TrackClick(f64),
    Drag(f64, f64),
    Visible(f64),
    Frame,
}

fn slider_op() -> impl Strategy<Value = SliderOp> {
    prop_oneof![
        (-2_000.0f64..2_000.0).prop_map(SliderOp::SetPosition),
        (any::<bool>(), any::<bool>()).prop_map(|(right, fine)| SliderOp::Step(right, fine)),
        (-2_000.0f64..2_000.0).prop_map(SliderOp::TrackClick),
        (-2_000.0f64..2_000.0, -2_000.0f64..2_000.0)
            .prop_map(|(from, to)| SliderOp::Drag(from, to)),
        (0.0f64..1.0).prop_map(SliderOp::Visible),
        Just(SliderOp::Frame),
    ]
}

fn build_slider() -> ComparisonSliderController {
    let mut slider =
        ComparisonSliderController::initialize(ComparisonSliderConfig::default(), 0)
            .expect("slider init");
    slider
        .set_track_geometry(TrackGeometry::new(100.0, 600.0))
        .expect("track");
    slider
}

proptest! {
    #[test]
    fn position_stays_within_bounds_under_any_input(
        ops in prop::collection::vec((slider_op(), 0u64..400), 0..64)
    ) {
        let mut slider = build_slider();
        let mut clock = 0u64;

        for (op, gap_ms) in ops {
            clock += gap_ms;
            match op {
                SliderOp::SetPosition(x) => {
                    slider.set_position(x, 100.0, 600.0).expect("finite input");
                }
                SliderOp::Step(right, fine) => {
                    slider.step_position(if right { 1 } else { -1 }, fine);
                }
                SliderOp::TrackClick(x) => {
                    slider.handle_track_click(x, false, clock);
                }
                SliderOp::Drag(from, to) => {
                    slider.handle_pointer_down(PointerSample::touch(4, from).on_handle(), clock);
                    slider.handle_pointer_move(PointerSample::touch(4, to), clock + 16);
                    clock += 32;
                    slider.handle_pointer_up(PointerSample::touch(4, to), clock);
                }
                SliderOp::Visible(ratio) => {
                    slider.on_visible(VisibilitySignal::visible(ratio), clock);
                }
                SliderOp::Frame => {
                    slider.on_frame(FrameTick::new(clock));
                }
            }

            let position = slider.position_percent();
            prop_assert!((0.0..=100.0).contains(&position));
            prop_assert_eq!(slider.frame().aria_value_now, position.round() as u8);
        }
    }

    #[test]
    fn drag_during_sweep_settles_for_good(
        drag_at in 400u64..1_600,
        frame_gaps in prop::collection::vec(1u64..100, 1..64),
        ratio in 0.0f64..1.0
    ) {
        let mut slider = build_slider();
        slider.on_visible(VisibilitySignal::visible(0.8), 0);
        slider.on_frame(FrameTick::new(400));
        slider.on_frame(FrameTick::new(drag_at));

        slider.drag_start(drag_at);
        let frozen = slider.position_percent();
        slider.drag_end(drag_at);

        let mut clock = drag_at;
        for gap in frame_gaps {
            clock += gap;
            prop_assert_eq!(slider.on_frame(FrameTick::new(clock)), None);
            prop_assert!(!slider.on_visible(VisibilitySignal::visible(ratio), clock));
        }
        prop_assert_eq!(slider.sweep_phase(), SweepPhase::Settled);
        prop_assert_eq!(slider.position_percent(), frozen);
    }
}
