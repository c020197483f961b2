use crate::animation::config::DriverConfig;
use crate::animation::schedule::Timer;
use crate::animation::sink::{Frame, FrameSink, SinkConfig};
use crate::animation::trace::Trace;
use crate::curve::control_points::ControlPointSet;
use crate::curve::evaluator::{CurveHierarchy, evaluate};
use crate::foundation::core::{FrameIndex, Point};
use crate::foundation::error::BezierResult;

/// Points a run needs: two endpoints and at least one control point.
pub const MIN_RUN_POINTS: usize = 3;

/// What the driver does with the next placed point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Collecting the two path endpoints.
    PlacingPath,
    /// Collecting control points; runs can start from here.
    PlacingControlPoints,
    /// Animating; point placement is ignored.
    Running,
}

/// Result of [`AnimationDriver::place_point`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    /// Stored as a path endpoint.
    Path,
    /// Stored as a control point.
    Control,
    /// Dropped because a run is in progress.
    Ignored,
}

/// Result of [`AnimationDriver::tick`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// No live timer; nothing happened.
    Idle,
    /// Frame produced, more to come.
    Advanced(FrameIndex),
    /// Frame produced and the run finished.
    Completed(FrameIndex),
}

/// Owns the placed points, the mode machine and the trace of one curve.
///
/// All mutation happens through `&mut self`, so ticks and input handlers are serialized.
#[derive(Debug)]
pub struct AnimationDriver {
    config: DriverConfig,
    mode: Mode,
    path_points: Vec<Point>,
    control_points: ControlPointSet,
    trace: Trace,
    count: u64,
    timer: Option<Timer>,
    sink_open: bool,
}

impl AnimationDriver {
    /// Validate `config` and start in the initial placement mode.
    pub fn new(config: DriverConfig) -> BezierResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            mode: initial_mode(&config),
            path_points: Vec::new(),
            control_points: ControlPointSet::new(),
            trace: Trace::new(),
            count: 0,
            timer: None,
            sink_open: false,
        })
    }

    /// Configuration the driver was built with.
    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Current mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Curve traced by the current or last run.
    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    /// Path endpoints placed so far (at most two are used).
    pub fn path_points(&self) -> &[Point] {
        &self.path_points
    }

    /// Control points placed so far.
    pub fn control_points(&self) -> &ControlPointSet {
        &self.control_points
    }

    /// Current frame counter / scrub position, in `0..=N`.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// `count / N`.
    pub fn current_t(&self) -> f64 {
        self.config.resolution.t_for(FrameIndex(self.count))
    }

    /// The armed timer while a run is in progress.
    pub fn timer(&self) -> Option<&Timer> {
        self.timer.as_ref()
    }

    /// True while a run holds a live timer.
    pub fn is_ticking(&self) -> bool {
        self.timer.as_ref().is_some_and(Timer::is_live)
    }

    /// The curve's full point list.
    ///
    /// With path endpoints this is `start, controls.., end` once a control point exists,
    /// and just the endpoints before that.
    pub fn all_points(&self) -> ControlPointSet {
        if self.config.require_path_endpoints {
            ControlPointSet::with_endpoints(&self.path_points, self.control_points.as_slice())
        } else {
            self.control_points.clone()
        }
    }

    /// Handle a tap/click at `p`.
    pub fn place_point(&mut self, p: Point) -> Placement {
        let placement = match self.mode {
            Mode::Running => return Placement::Ignored,
            Mode::PlacingPath => {
                self.path_points.push(p);
                if self.path_points.len() >= 2 {
                    self.mode = Mode::PlacingControlPoints;
                }
                Placement::Path
            }
            Mode::PlacingControlPoints => {
                self.control_points.push(p);
                Placement::Control
            }
        };
        self.trace.clear();
        tracing::debug!(?placement, x = p.x, y = p.y, mode = ?self.mode, "point placed");
        placement
    }

    /// Move the scrub position; ignored while running. Returns whether it was applied.
    pub fn set_count(&mut self, value: u64) -> bool {
        if self.mode == Mode::Running {
            return false;
        }
        self.count = self.config.resolution.clamp(value).0;
        true
    }

    /// Construction at the current scrub position.
    pub fn preview(&self) -> CurveHierarchy {
        evaluate(self.all_points().as_slice(), self.current_t())
    }

    /// Start a run. No-op returning `false` unless placing control points with at least
    /// [`MIN_RUN_POINTS`] points in total.
    pub fn run(&mut self) -> bool {
        let total = self.all_points().len();
        if self.mode != Mode::PlacingControlPoints || total < MIN_RUN_POINTS {
            tracing::debug!(mode = ?self.mode, total, "run ignored");
            return false;
        }

        self.mode = Mode::Running;
        self.count = 0;
        self.trace.clear();
        self.sink_open = false;
        self.timer = Some(Timer::arm(self.config.frame_interval()));
        tracing::info!(
            points = total,
            resolution = self.config.resolution.steps(),
            "run started"
        );
        true
    }

    /// Produce the frame at the current count and advance.
    ///
    /// Does nothing without a live timer, so a cancelled or finished run never ticks
    /// again. A sink error aborts the run before being returned.
    #[tracing::instrument(level = "trace", skip(self, sink), fields(count = self.count))]
    pub fn tick(&mut self, sink: &mut impl FrameSink) -> BezierResult<TickOutcome> {
        if self.mode != Mode::Running || !self.is_ticking() {
            return Ok(TickOutcome::Idle);
        }

        let points = self.all_points();
        let index = FrameIndex(self.count);
        let t = self.config.resolution.t_for(index);
        let hierarchy = evaluate(points.as_slice(), t);
        if let Some(p) = hierarchy.point() {
            self.trace.record(index, p);
        }

        if let Err(e) = self.present(sink, &points, &hierarchy, index, t) {
            tracing::warn!(error = %e, frame = index.0, "sink failed, aborting run");
            self.halt();
            return Err(e);
        }

        self.count += 1;
        let last = self.config.resolution.last_frame();
        if self.count > last.0 {
            self.count = last.0;
            self.halt();
            sink.end()?;
            tracing::info!(frames = self.trace.len(), "run completed");
            return Ok(TickOutcome::Completed(index));
        }
        Ok(TickOutcome::Advanced(index))
    }

    fn present(
        &mut self,
        sink: &mut impl FrameSink,
        points: &ControlPointSet,
        hierarchy: &CurveHierarchy,
        index: FrameIndex,
        t: f64,
    ) -> BezierResult<()> {
        if !self.sink_open {
            sink.begin(SinkConfig {
                resolution: self.config.resolution,
                frame_interval: self.config.frame_interval(),
                point_count: points.len(),
            })?;
            self.sink_open = true;
        }
        sink.push_frame(&Frame {
            index,
            t,
            mode: self.mode,
            points: points.as_slice(),
            hierarchy,
            trace: self.trace.points(),
        })
    }

    /// Stop a run early, keeping points and the partial trace. Returns `false` when idle.
    pub fn stop(&mut self, sink: &mut impl FrameSink) -> BezierResult<bool> {
        if self.mode != Mode::Running {
            return Ok(false);
        }
        let was_open = self.sink_open;
        self.count = self.config.resolution.last_frame().0;
        self.halt();
        if was_open {
            sink.end()?;
        }
        tracing::info!(frames = self.trace.len(), "run stopped");
        Ok(true)
    }

    /// Cancel any run and drop every placed point; back to the initial mode. Idempotent.
    pub fn reset(&mut self) {
        self.halt();
        self.path_points.clear();
        self.control_points.clear();
        self.trace.clear();
        self.count = 0;
        self.mode = initial_mode(&self.config);
        tracing::debug!(mode = ?self.mode, "reset");
    }

    fn halt(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.cancel();
        }
        self.sink_open = false;
        if self.mode == Mode::Running {
            self.mode = Mode::PlacingControlPoints;
        }
    }
}

fn initial_mode(config: &DriverConfig) -> Mode {
    if config.require_path_endpoints {
        Mode::PlacingPath
    } else {
        Mode::PlacingControlPoints
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/driver.rs"]
mod tests;
