//! De Casteljau evaluation of Bézier curves, with the full construction exposed.
//!
//! [`evaluate`] turns an ordered list of control points and a parameter `t` into a
//! [`CurveHierarchy`]: every subdivision level from the control polygon down to the final
//! pair, plus the point on the curve. [`AnimationDriver`] places points, steps `t` over
//! `0..=N` one frame per tick and accumulates the traced curve, handing each frame to a
//! [`FrameSink`] for rendering.
//!
//! - **Pure evaluation**: `evaluate` has no hidden state and is bit-for-bit repeatable.
//! - **No fatal domain errors**: too few points gives an empty hierarchy, guarded
//!   transitions are no-ops, and `t` outside `[0, 1]` extrapolates.
//! - **Explicit time**: ticks are driven through [`drive`] with a [`Clock`], so runs can be
//!   simulated without real time passing.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod curve;
mod foundation;

pub use animation::config::DriverConfig;
pub use animation::driver::{AnimationDriver, MIN_RUN_POINTS, Mode, Placement, TickOutcome};
pub use animation::schedule::{CancelToken, Clock, ManualClock, SystemClock, Timer, drive};
pub use animation::sink::{
    CapturedFrame, Frame, FrameSink, InMemorySink, JsonLinesSink, NullSink, SinkConfig,
};
pub use animation::trace::Trace;
pub use curve::control_points::{ControlPointSet, parse_point};
pub use curve::evaluator::{CurveEvaluator, CurveHierarchy, SubdivisionLevel, evaluate};
pub use foundation::core::{FrameIndex, Point, Resolution};
pub use foundation::error::{BezierError, BezierResult};
pub use foundation::math::{approx_eq, interpolate, midpoint};
