use crate::foundation::core::{FrameIndex, Point};

/// Curve points accumulated over an animation run; index is the frame number.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Trace {
    points: Vec<Point>,
}

impl Trace {
    /// Empty trace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the point for `frame`; frames are recorded consecutively from 0.
    pub(crate) fn record(&mut self, frame: FrameIndex, p: Point) {
        debug_assert_eq!(frame.0 as usize, self.points.len());
        self.points.push(p);
    }

    /// Drop every point.
    pub(crate) fn clear(&mut self) {
        self.points.clear();
    }

    /// Points in frame order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Point recorded for `frame`, if reached.
    pub fn get(&self, frame: FrameIndex) -> Option<Point> {
        self.points.get(frame.0 as usize).copied()
    }

    /// Number of recorded frames.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True before the first recorded frame.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Consecutive point pairs, for drawing the trace as a polyline.
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/trace.rs"]
mod tests;
