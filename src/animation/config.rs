use std::path::Path;
use std::time::Duration;

use anyhow::Context as _;

use crate::foundation::core::Resolution;
use crate::foundation::error::{BezierError, BezierResult};

/// Driver configuration.
///
/// The two observed layouts differ only here: whether two path endpoints are placed
/// before the control points, and how many steps a run is divided into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DriverConfig {
    /// Place the start and end points first, then the control points between them.
    pub require_path_endpoints: bool,
    /// Steps per run (`N`); a run visits frames `0..=N`.
    pub resolution: Resolution,
    /// Wall-clock delay between ticks, in milliseconds.
    pub frame_interval_ms: u64,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self::control_points_only()
    }
}

impl DriverConfig {
    /// Every placed point is a control point; 100 steps per run.
    pub fn control_points_only() -> Self {
        Self {
            require_path_endpoints: false,
            resolution: Resolution::DEFAULT,
            frame_interval_ms: 10,
        }
    }

    /// Two path endpoints first, then control points; 200 steps per run.
    pub fn path_and_control_points() -> Self {
        Self {
            require_path_endpoints: true,
            resolution: Resolution::PATH_DEFAULT,
            frame_interval_ms: 10,
        }
    }

    /// Replace the step count.
    pub fn with_resolution(mut self, resolution: Resolution) -> Self {
        self.resolution = resolution;
        self
    }

    /// Delay between ticks.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }

    /// Check invariants that serde cannot express.
    pub fn validate(&self) -> BezierResult<()> {
        if self.frame_interval_ms == 0 {
            return Err(BezierError::config("frame_interval_ms must be > 0"));
        }
        Ok(())
    }

    /// Parse and validate a JSON document.
    pub fn from_json_str(s: &str) -> BezierResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a JSON file.
    pub fn from_path(path: &Path) -> BezierResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read driver config '{}'", path.display()))?;
        Self::from_json_str(&s)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/config.rs"]
mod tests;
