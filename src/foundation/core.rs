use crate::foundation::error::{BezierError, BezierResult};

pub use kurbo::Point;

/// Zero-based animation frame number.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Number of steps `N` an animation run is divided into.
///
/// A run covers frames `0..=N`, so frame `N` maps to `t = 1.0`.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "u32", into = "u32")]
pub struct Resolution(u32);

impl Resolution {
    /// Default step count for the control-points-only layout.
    pub const DEFAULT: Resolution = Resolution(100);

    /// Default step count for the path-endpoints layout.
    pub const PATH_DEFAULT: Resolution = Resolution(200);

    /// Build a resolution; `steps` must be > 0.
    pub fn new(steps: u32) -> BezierResult<Self> {
        if steps == 0 {
            return Err(BezierError::config("resolution must be > 0"));
        }
        Ok(Self(steps))
    }

    /// Step count `N`.
    pub fn steps(self) -> u32 {
        self.0
    }

    /// Normalized parameter for a frame: `frame / N`, unclamped.
    pub fn t_for(self, frame: FrameIndex) -> f64 {
        (frame.0 as f64) / f64::from(self.0)
    }

    /// Clamp a frame number into `0..=N`.
    pub fn clamp(self, frame: u64) -> FrameIndex {
        FrameIndex(frame.min(u64::from(self.0)))
    }

    /// Last frame of a run (`N`).
    pub fn last_frame(self) -> FrameIndex {
        FrameIndex(u64::from(self.0))
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u32> for Resolution {
    type Error = BezierError;

    fn try_from(steps: u32) -> BezierResult<Self> {
        Self::new(steps)
    }
}

impl From<Resolution> for u32 {
    fn from(r: Resolution) -> Self {
        r.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
