use std::str::FromStr;

use crate::foundation::core::Point;
use crate::foundation::error::{BezierError, BezierResult};

/// Ordered control points of a Bézier curve.
///
/// Order defines the curve: the first and last points are the endpoints, everything in
/// between pulls the curve without (in general) lying on it.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct ControlPointSet {
    points: Vec<Point>,
}

impl ControlPointSet {
    /// Empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Join two path endpoints with the control points placed between them.
    ///
    /// With no control points the result is the endpoints alone. With fewer than two
    /// endpoints the control points are kept in order after whatever endpoints exist.
    pub fn with_endpoints(path: &[Point], controls: &[Point]) -> Self {
        match (path, controls.is_empty()) {
            ([start, end], false) => {
                let mut points = Vec::with_capacity(controls.len() + 2);
                points.push(*start);
                points.extend_from_slice(controls);
                points.push(*end);
                Self { points }
            }
            _ => {
                let mut points = path.to_vec();
                points.extend_from_slice(controls);
                Self { points }
            }
        }
    }

    /// Append a point at the end.
    pub fn push(&mut self, p: Point) {
        self.points.push(p);
    }

    /// Remove every point.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when no point has been placed.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// True when at least one line segment can be drawn.
    pub fn is_drawable(&self) -> bool {
        self.points.len() >= 2
    }

    /// Borrow the points in order.
    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }

    /// Consume into the underlying vector.
    pub fn into_vec(self) -> Vec<Point> {
        self.points
    }
}

impl From<Vec<Point>> for ControlPointSet {
    fn from(points: Vec<Point>) -> Self {
        Self { points }
    }
}

impl FromIterator<Point> for ControlPointSet {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl AsRef<[Point]> for ControlPointSet {
    fn as_ref(&self) -> &[Point] {
        &self.points
    }
}

/// Parses a whitespace separated list of `x,y` pairs, e.g. `"0,0 10,10 20,0"`.
impl FromStr for ControlPointSet {
    type Err = BezierError;

    fn from_str(s: &str) -> BezierResult<Self> {
        s.split_whitespace().map(parse_point).collect()
    }
}

/// Parse a single `x,y` pair.
pub fn parse_point(s: &str) -> BezierResult<Point> {
    let Some((x, y)) = s.split_once(',') else {
        return Err(BezierError::validation(format!(
            "point '{s}' must be written as x,y"
        )));
    };
    let x = parse_coord(x, s)?;
    let y = parse_coord(y, s)?;
    Ok(Point::new(x, y))
}

fn parse_coord(raw: &str, whole: &str) -> BezierResult<f64> {
    let v: f64 = raw
        .trim()
        .parse()
        .map_err(|_| BezierError::validation(format!("bad coordinate '{raw}' in '{whole}'")))?;
    if !v.is_finite() {
        return Err(BezierError::validation(format!(
            "coordinate '{raw}' in '{whole}' must be finite"
        )));
    }
    Ok(v)
}

#[cfg(test)]
#[path = "../../tests/unit/curve/control_points.rs"]
mod tests;
