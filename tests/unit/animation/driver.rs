use super::*;
use crate::animation::sink::InMemorySink;
use crate::foundation::core::Resolution;
use crate::foundation::error::BezierError;

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn simple(resolution: u32) -> AnimationDriver {
    let cfg =
        DriverConfig::control_points_only().with_resolution(Resolution::new(resolution).unwrap());
    AnimationDriver::new(cfg).unwrap()
}

fn with_quadratic(resolution: u32) -> AnimationDriver {
    let mut d = simple(resolution);
    d.place_point(p(0.0, 0.0));
    d.place_point(p(10.0, 10.0));
    d.place_point(p(20.0, 0.0));
    d
}

#[test]
fn starts_in_placement_mode_per_layout() {
    assert_eq!(simple(100).mode(), Mode::PlacingControlPoints);
    let d = AnimationDriver::new(DriverConfig::path_and_control_points()).unwrap();
    assert_eq!(d.mode(), Mode::PlacingPath);
}

#[test]
fn invalid_config_is_rejected() {
    let cfg = DriverConfig {
        frame_interval_ms: 0,
        ..DriverConfig::default()
    };
    assert!(matches!(
        AnimationDriver::new(cfg),
        Err(BezierError::Config(_))
    ));
}

#[test]
fn run_guard_needs_three_points() {
    let mut d = simple(100);
    d.place_point(p(0.0, 0.0));
    d.place_point(p(10.0, 0.0));
    assert!(!d.run());
    assert_eq!(d.mode(), Mode::PlacingControlPoints);
    assert!(d.timer().is_none());
    assert!(!d.is_ticking());

    d.place_point(p(20.0, 5.0));
    assert!(d.run());
    assert_eq!(d.mode(), Mode::Running);
    assert!(d.is_ticking());
}

#[test]
fn run_completes_after_n_plus_one_ticks() {
    let mut d = with_quadratic(100);
    let mut sink = InMemorySink::new();
    assert!(d.run());

    for f in 0..100u64 {
        assert_eq!(d.tick(&mut sink).unwrap(), TickOutcome::Advanced(FrameIndex(f)));
    }
    assert_eq!(
        d.tick(&mut sink).unwrap(),
        TickOutcome::Completed(FrameIndex(100))
    );

    assert_eq!(d.mode(), Mode::PlacingControlPoints);
    assert_eq!(d.count(), 100);
    assert_eq!(d.trace().len(), 101);
    assert!(d.timer().is_none());

    // Terminal: further ticks do nothing.
    assert_eq!(d.tick(&mut sink).unwrap(), TickOutcome::Idle);
    assert_eq!(d.trace().len(), 101);

    assert_eq!(sink.frames().len(), 101);
    assert_eq!(sink.runs_begun(), 1);
    assert_eq!(sink.runs_ended(), 1);
    assert_eq!(sink.config().unwrap().point_count, 3);
}

#[test]
fn trace_follows_the_curve() {
    let mut d = with_quadratic(4);
    let mut sink = InMemorySink::new();
    d.run();
    while d.tick(&mut sink).unwrap() != TickOutcome::Idle {}

    let trace = d.trace();
    assert_eq!(trace.len(), 5);
    assert_eq!(trace.get(FrameIndex(0)), Some(p(0.0, 0.0)));
    assert_eq!(trace.get(FrameIndex(2)), Some(p(10.0, 5.0)));
    assert_eq!(trace.get(FrameIndex(4)), Some(p(20.0, 0.0)));
    assert_eq!(trace.segments().count(), 4);

    let f2 = &sink.frames()[2];
    assert_eq!(f2.t, 0.5);
    assert_eq!(f2.mode, Mode::Running);
    assert_eq!(f2.trace_len, 3);
    assert_eq!(f2.hierarchy.levels().len(), 2);
}

#[test]
fn placement_is_ignored_while_running() {
    let mut d = with_quadratic(10);
    d.run();
    assert_eq!(d.place_point(p(99.0, 99.0)), Placement::Ignored);
    assert_eq!(d.control_points().len(), 3);
    assert!(!d.set_count(5));
}

#[test]
fn reset_cancels_pending_ticks() {
    let mut d = with_quadratic(10);
    let mut sink = InMemorySink::new();
    d.run();
    let token = d.timer().unwrap().token().clone();
    d.tick(&mut sink).unwrap();
    d.tick(&mut sink).unwrap();

    d.reset();
    assert!(token.is_cancelled());
    assert_eq!(d.mode(), Mode::PlacingControlPoints);
    assert!(d.control_points().is_empty());
    assert!(d.trace().is_empty());
    assert_eq!(d.count(), 0);
    assert_eq!(d.tick(&mut sink).unwrap(), TickOutcome::Idle);
    assert_eq!(sink.frames().len(), 2);

    // Idempotent.
    d.reset();
    assert_eq!(d.mode(), Mode::PlacingControlPoints);
}

#[test]
fn reset_returns_to_path_placement() {
    let mut d = AnimationDriver::new(DriverConfig::path_and_control_points()).unwrap();
    d.place_point(p(0.0, 0.0));
    d.place_point(p(100.0, 0.0));
    d.place_point(p(50.0, 80.0));
    d.reset();
    assert_eq!(d.mode(), Mode::PlacingPath);
    assert!(d.path_points().is_empty());
    assert!(d.all_points().is_empty());
}

#[test]
fn path_layout_places_endpoints_first() {
    let mut d = AnimationDriver::new(DriverConfig::path_and_control_points()).unwrap();
    assert_eq!(d.place_point(p(0.0, 0.0)), Placement::Path);
    assert_eq!(d.mode(), Mode::PlacingPath);
    assert_eq!(d.place_point(p(100.0, 0.0)), Placement::Path);
    assert_eq!(d.mode(), Mode::PlacingControlPoints);

    // Endpoints alone are not enough to run.
    assert!(!d.run());

    assert_eq!(d.place_point(p(30.0, 60.0)), Placement::Control);
    assert_eq!(d.place_point(p(70.0, 60.0)), Placement::Control);
    assert_eq!(
        d.all_points().as_slice(),
        &[p(0.0, 0.0), p(30.0, 60.0), p(70.0, 60.0), p(100.0, 0.0)]
    );
    assert!(d.run());

    let mut sink = InMemorySink::new();
    let mut ticks = 0;
    while d.tick(&mut sink).unwrap() != TickOutcome::Idle {
        ticks += 1;
    }
    assert_eq!(ticks, 201);
    assert_eq!(d.trace().len(), 201);
    assert_eq!(d.trace().get(FrameIndex(200)), Some(p(100.0, 0.0)));
}

#[test]
fn stop_keeps_points_and_partial_trace() {
    let mut d = with_quadratic(10);
    let mut sink = InMemorySink::new();
    assert!(!d.stop(&mut sink).unwrap());

    d.run();
    for _ in 0..3 {
        d.tick(&mut sink).unwrap();
    }
    assert!(d.stop(&mut sink).unwrap());
    assert_eq!(d.mode(), Mode::PlacingControlPoints);
    assert_eq!(d.count(), 10);
    assert_eq!(d.trace().len(), 3);
    assert_eq!(d.control_points().len(), 3);
    assert_eq!(sink.runs_ended(), 1);
    assert_eq!(d.tick(&mut sink).unwrap(), TickOutcome::Idle);
}

#[test]
fn scrub_clamps_and_previews() {
    let mut d = with_quadratic(10);
    assert!(d.set_count(5));
    assert_eq!(d.current_t(), 0.5);
    assert_eq!(d.preview().point(), Some(p(10.0, 5.0)));

    assert!(d.set_count(1_000));
    assert_eq!(d.count(), 10);
    assert_eq!(d.preview().point(), Some(p(20.0, 0.0)));
}

#[test]
fn placing_a_point_clears_the_trace() {
    let mut d = with_quadratic(2);
    let mut sink = InMemorySink::new();
    d.run();
    while d.tick(&mut sink).unwrap() != TickOutcome::Idle {}
    assert_eq!(d.trace().len(), 3);

    d.place_point(p(30.0, 10.0));
    assert!(d.trace().is_empty());
}

struct FailingSink;

impl FrameSink for FailingSink {
    fn begin(&mut self, _cfg: SinkConfig) -> BezierResult<()> {
        Ok(())
    }

    fn push_frame(&mut self, _frame: &Frame<'_>) -> BezierResult<()> {
        Err(crate::foundation::error::BezierError::sink("display gone"))
    }

    fn end(&mut self) -> BezierResult<()> {
        Ok(())
    }
}

#[test]
fn sink_failure_aborts_run() {
    let mut d = with_quadratic(10);
    d.run();
    let err = d.tick(&mut FailingSink).unwrap_err();
    assert!(matches!(err, BezierError::Sink(_)));
    assert_eq!(d.mode(), Mode::PlacingControlPoints);
    assert!(!d.is_ticking());
    assert_eq!(d.tick(&mut FailingSink).unwrap(), TickOutcome::Idle);
}
