use std::cell::RefCell;
use std::rc::Rc;

use showcase_rs::WidgetError;
use showcase_rs::api::{
    CarouselConfig, CarouselController, CarouselEvent, ComparisonEvent, ComparisonSliderConfig,
    ComparisonSliderController, PositionSource, SweepPhase,
};
use showcase_rs::core::{SlideSet, TrackGeometry};
use showcase_rs::extensions::WidgetObserver;
use showcase_rs::interaction::{PointerSample, VisibilitySignal};
use showcase_rs::timing::FrameTick;

struct Recorder<E> {
    id: String,
    events: Rc<RefCell<Vec<E>>>,
}

impl<E> Recorder<E> {
    fn boxed(id: &str, events: &Rc<RefCell<Vec<E>>>) -> Box<Self> {
        Box::new(Self {
            id: id.to_owned(),
            events: Rc::clone(events),
        })
    }
}

impl<E: Copy> WidgetObserver<E> for Recorder<E> {
    fn id(&self) -> &str {
        &self.id
    }

    fn on_event(&mut self, event: &E) {
        self.events.borrow_mut().push(*event);
    }
}

fn carousel_kind(event: &CarouselEvent) -> &'static str {
    match event {
        CarouselEvent::IndexChanged { .. } => "index",
        CarouselEvent::IndicatorsChanged(_) => "indicators",
        CarouselEvent::AutoplayStarted { .. } => "autoplay_started",
        CarouselEvent::AutoplayStopped => "autoplay_stopped",
        CarouselEvent::DragStarted { .. } => "drag_started",
        CarouselEvent::DragEnded { .. } => "drag_ended",
    }
}

fn comparison_kind(event: &ComparisonEvent) -> String {
    match event {
        ComparisonEvent::PositionChanged { source, .. } => format!("position:{source:?}"),
        ComparisonEvent::SweepPhaseChanged(phase) => format!("phase:{phase:?}"),
        ComparisonEvent::DragStarted => "drag_started".to_owned(),
        ComparisonEvent::DragEnded => "drag_ended".to_owned(),
    }
}

fn build_carousel() -> CarouselController {
    let slides = SlideSet::with_count(4).expect("slides");
    CarouselController::initialize(slides, CarouselConfig::default(), 0).expect("carousel init")
}

#[test]
fn carousel_swipe_emits_drag_navigation_and_autoplay_events_in_order() {
    let mut carousel = build_carousel();
    let events = Rc::new(RefCell::new(Vec::new()));
    carousel
        .register_observer(Recorder::boxed("recorder", &events))
        .expect("register");

    carousel.handle_pointer_down(PointerSample::mouse(1, 300.0), 100);
    carousel.handle_pointer_up(PointerSample::mouse(1, 100.0), 200);

    let recorded = events.borrow();
    let kinds: Vec<_> = recorded.iter().map(carousel_kind).collect();
    assert_eq!(
        kinds,
        vec![
            "autoplay_stopped",
            "drag_started",
            "drag_ended",
            "index",
            "indicators",
            "autoplay_started",
        ]
    );
    assert!(matches!(
        recorded[2],
        CarouselEvent::DragEnded {
            navigated: true,
            cancelled: false
        }
    ));
    match recorded[4] {
        CarouselEvent::IndicatorsChanged(indicators) => {
            assert_eq!(indicators.active_index, 1);
            assert_eq!(indicators.total, 4);
        }
        other => panic!("unexpected event: {other:?}"),
    }
}

#[test]
fn carousel_manual_navigation_does_not_report_autoplay_churn() {
    let mut carousel = build_carousel();
    let events = Rc::new(RefCell::new(Vec::new()));
    carousel
        .register_observer(Recorder::boxed("recorder", &events))
        .expect("register");

    carousel.next(100);
    carousel.go_to(3, false, 200);

    let kinds: Vec<_> = events.borrow().iter().map(carousel_kind).collect();
    assert_eq!(kinds, vec!["index", "indicators", "index", "indicators"]);
}

#[test]
fn carousel_hover_reports_pause_and_resume() {
    let mut carousel = build_carousel();
    let events = Rc::new(RefCell::new(Vec::new()));
    carousel
        .register_observer(Recorder::boxed("recorder", &events))
        .expect("register");

    carousel.pointer_enter(100);
    carousel.pointer_enter(200);
    carousel.pointer_leave(300);

    let recorded = events.borrow();
    let kinds: Vec<_> = recorded.iter().map(carousel_kind).collect();
    assert_eq!(kinds, vec!["autoplay_stopped", "autoplay_started"]);
    assert!(matches!(
        recorded[1],
        CarouselEvent::AutoplayStarted { interval_ms: 4_500 }
    ));
}

#[test]
fn duplicate_and_empty_observer_ids_are_rejected() {
    let mut carousel = build_carousel();
    let events = Rc::new(RefCell::new(Vec::new()));
    carousel
        .register_observer(Recorder::boxed("recorder", &events))
        .expect("register");

    let err = carousel
        .register_observer(Recorder::boxed("recorder", &events))
        .expect_err("duplicate id must fail");
    assert!(matches!(err, WidgetError::DuplicateObserver(id) if id == "recorder"));

    let err = carousel
        .register_observer(Recorder::boxed("", &events))
        .expect_err("empty id must fail");
    assert!(matches!(err, WidgetError::InvalidInput(_)));
    assert_eq!(carousel.observer_count(), 1);
}

#[test]
fn unregistered_observer_stops_receiving_events() {
    let mut carousel = build_carousel();
    let events = Rc::new(RefCell::new(Vec::new()));
    carousel
        .register_observer(Recorder::boxed("recorder", &events))
        .expect("register");

    carousel.next(100);
    assert!(carousel.unregister_observer("recorder"));
    assert!(!carousel.unregister_observer("recorder"));
    carousel.next(200);

    assert_eq!(events.borrow().len(), 2);
    assert_eq!(carousel.observer_count(), 0);
}

#[test]
fn comparison_sweep_then_drag_emits_expected_sequence() {
    let mut slider =
        ComparisonSliderController::initialize(ComparisonSliderConfig::default(), 0)
            .expect("slider init");
    slider
        .set_track_geometry(TrackGeometry::new(0.0, 200.0))
        .expect("track");
    let events = Rc::new(RefCell::new(Vec::new()));
    slider
        .register_observer(Recorder::boxed("recorder", &events))
        .expect("register");

    slider.on_visible(VisibilitySignal::visible(1.0), 100);
    slider.on_frame(FrameTick::new(500));
    slider.on_frame(FrameTick::new(1_700));
    slider.handle_pointer_down(PointerSample::mouse(1, 50.0).on_handle(), 1_800);
    slider.handle_pointer_move(PointerSample::mouse(1, 150.0), 1_816);
    slider.handle_pointer_up(PointerSample::mouse(1, 150.0), 1_832);

    let kinds: Vec<_> = events.borrow().iter().map(comparison_kind).collect();
    assert_eq!(
        kinds,
        vec![
            "phase:Scheduled",
            "phase:Sweeping",
            "position:Sweep",
            "position:Sweep",
            "phase:Settled",
            "drag_started",
            "position:Drag",
            "drag_ended",
        ]
    );
}

#[test]
fn comparison_drag_mid_sweep_reports_settle_before_drag() {
    let mut slider =
        ComparisonSliderController::initialize(ComparisonSliderConfig::default(), 0)
            .expect("slider init");
    let events = Rc::new(RefCell::new(Vec::new()));
    slider
        .register_observer(Recorder::boxed("recorder", &events))
        .expect("register");

    slider.on_visible(VisibilitySignal::visible(0.5), 100);
    slider.on_frame(FrameTick::new(500));
    slider.drag_start(600);
    slider.on_frame(FrameTick::new(800));

    let recorded = events.borrow();
    assert_eq!(recorded.len(), 5);
    assert_eq!(
        recorded[3],
        ComparisonEvent::SweepPhaseChanged(SweepPhase::Settled)
    );
    assert_eq!(recorded[4], ComparisonEvent::DragStarted);
    assert!(recorded.iter().all(|event| !matches!(
        event,
        ComparisonEvent::PositionChanged {
            source: PositionSource::Drag,
            ..
        }
    )));
}
