use crate::curve::control_points::ControlPointSet;
use crate::foundation::core::{FrameIndex, Point, Resolution};
use crate::foundation::math::interpolate;

/// One level of the De Casteljau construction.
///
/// Level 0 is the control polygon itself; every following level has one point fewer.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct SubdivisionLevel {
    points: Vec<Point>,
}

impl SubdivisionLevel {
    /// Points of this level, in order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True for a level without points (never produced by [`evaluate`]).
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Adjacent point pairs, i.e. the polyline segments of this level.
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }

    fn step(&self, t: f64) -> SubdivisionLevel {
        SubdivisionLevel {
            points: self.segments().map(|(a, b)| interpolate(a, b, t)).collect(),
        }
    }
}

impl From<Vec<Point>> for SubdivisionLevel {
    fn from(points: Vec<Point>) -> Self {
        Self { points }
    }
}

/// Every subdivision level produced for one parameter value, plus the curve point.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CurveHierarchy {
    /// Parameter the hierarchy was evaluated at.
    pub t: f64,
    /// Levels from the control polygon down to the final pair.
    pub levels: Vec<SubdivisionLevel>,
    /// Point on the curve at `t`; `None` when fewer than two control points exist.
    pub point: Option<Point>,
}

impl CurveHierarchy {
    fn empty(t: f64) -> Self {
        Self {
            t,
            levels: Vec::new(),
            point: None,
        }
    }

    /// All levels, starting with the control polygon.
    pub fn levels(&self) -> &[SubdivisionLevel] {
        &self.levels
    }

    /// Curve point at `t`, if any.
    pub fn point(&self) -> Option<Point> {
        self.point
    }

    /// True for the "nothing to draw yet" result.
    pub fn is_empty(&self) -> bool {
        self.point.is_none()
    }

    /// Levels derived by interpolation (everything after the control polygon).
    pub fn construction_levels(&self) -> &[SubdivisionLevel] {
        self.levels.get(1..).unwrap_or(&[])
    }

    /// The last level, whose interpolation yields the curve point.
    pub fn final_segment(&self) -> Option<(Point, Point)> {
        match self.levels.last()?.points() {
            &[a, b] => Some((a, b)),
            _ => None,
        }
    }
}

/// Evaluate the curve defined by `points` at `t` with De Casteljau's algorithm.
///
/// Fewer than two points give an empty hierarchy. Otherwise the result holds `n - 1`
/// levels, level `i` having `n - i` points. `t` outside `[0, 1]` is not clamped.
#[tracing::instrument(level = "trace", skip(points), fields(n = points.len()))]
pub fn evaluate(points: &[Point], t: f64) -> CurveHierarchy {
    if points.len() < 2 {
        return CurveHierarchy::empty(t);
    }

    let mut levels = Vec::with_capacity(points.len() - 1);
    let point = subdivide(SubdivisionLevel::from(points.to_vec()), t, &mut levels);
    CurveHierarchy {
        t,
        levels,
        point: Some(point),
    }
}

// `level` always has at least two points.
fn subdivide(level: SubdivisionLevel, t: f64, out: &mut Vec<SubdivisionLevel>) -> Point {
    if let &[a, b] = level.points() {
        out.push(level);
        return interpolate(a, b, t);
    }

    let next = level.step(t);
    out.push(level);
    subdivide(next, t, out)
}

/// A curve bound to its control points and the step count used to animate it.
#[derive(Clone, Debug, PartialEq)]
pub struct CurveEvaluator {
    points: ControlPointSet,
    resolution: Resolution,
}

impl CurveEvaluator {
    /// Bind control points to a resolution.
    pub fn new(points: impl Into<ControlPointSet>, resolution: Resolution) -> Self {
        Self {
            points: points.into(),
            resolution,
        }
    }

    /// Control points.
    pub fn points(&self) -> &ControlPointSet {
        &self.points
    }

    /// Step count.
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// Evaluate at an explicit parameter.
    pub fn at(&self, t: f64) -> CurveHierarchy {
        evaluate(self.points.as_slice(), t)
    }

    /// Evaluate at `frame / N`.
    pub fn at_frame(&self, frame: FrameIndex) -> CurveHierarchy {
        self.at(self.resolution.t_for(frame))
    }

    /// Curve points for every frame `0..=N`; empty when the curve is not drawable.
    pub fn sample(&self) -> Vec<Point> {
        (0..=u64::from(self.resolution.steps()))
            .filter_map(|f| self.at_frame(FrameIndex(f)).point())
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/curve/evaluator.rs"]
mod tests;
