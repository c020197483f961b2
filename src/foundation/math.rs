use crate::foundation::core::Point;

/// Default tolerance used by [`approx_eq`].
pub const EPSILON: f64 = 1e-9;

/// Component-wise linear interpolation between two points.
///
/// `t = 0` yields `p0`, `t = 1` yields `p1`. Values outside `[0, 1]` extrapolate along the
/// line through both points; callers that want clamping must clamp `t` themselves.
#[inline]
pub fn interpolate(p0: Point, p1: Point, t: f64) -> Point {
    Point::new(p0.x + (p1.x - p0.x) * t, p0.y + (p1.y - p0.y) * t)
}

/// Midpoint of two points.
#[inline]
pub fn midpoint(p0: Point, p1: Point) -> Point {
    interpolate(p0, p1, 0.5)
}

/// Component-wise equality within [`EPSILON`].
pub fn approx_eq(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() <= EPSILON && (a.y - b.y).abs() <= EPSILON
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
