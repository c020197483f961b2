use std::io::Write;
use std::time::Duration;

use crate::animation::driver::Mode;
use crate::curve::evaluator::CurveHierarchy;
use crate::foundation::core::{FrameIndex, Point, Resolution};
use crate::foundation::error::{BezierError, BezierResult};

/// Run parameters handed to a [`FrameSink`] before the first frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct SinkConfig {
    /// Steps in the run; frames `0..=N` will be pushed.
    pub resolution: Resolution,
    /// Delay between ticks.
    pub frame_interval: Duration,
    /// Number of points the curve is built from.
    pub point_count: usize,
}

/// Everything a renderer needs to draw one frame.
#[derive(Clone, Copy, Debug, serde::Serialize)]
pub struct Frame<'a> {
    /// Frame number (the driver's count when this frame was produced).
    pub index: FrameIndex,
    /// Curve parameter, `index / N`.
    pub t: f64,
    /// Driver mode when the frame was produced.
    pub mode: Mode,
    /// Points placed so far, path endpoints included.
    pub points: &'a [Point],
    /// Construction levels and curve point at `t`.
    pub hierarchy: &'a CurveHierarchy,
    /// Curve traced so far in this run.
    pub trace: &'a [Point],
}

/// Rendering collaborator fed by the driver.
///
/// Ordering contract: `begin` once per run, then `push_frame` in strictly increasing
/// frame order, then `end` when the run completes or is stopped.
pub trait FrameSink {
    /// Called before the first frame of a run.
    fn begin(&mut self, cfg: SinkConfig) -> BezierResult<()>;
    /// Present one frame.
    fn push_frame(&mut self, frame: &Frame<'_>) -> BezierResult<()>;
    /// Called after the last frame of a run.
    fn end(&mut self) -> BezierResult<()>;
}

impl<S: FrameSink + ?Sized> FrameSink for &mut S {
    fn begin(&mut self, cfg: SinkConfig) -> BezierResult<()> {
        (**self).begin(cfg)
    }

    fn push_frame(&mut self, frame: &Frame<'_>) -> BezierResult<()> {
        (**self).push_frame(frame)
    }

    fn end(&mut self) -> BezierResult<()> {
        (**self).end()
    }
}

/// Owned copy of a presented frame.
#[derive(Clone, Debug, PartialEq)]
pub struct CapturedFrame {
    /// Frame number.
    pub index: FrameIndex,
    /// Curve parameter of the frame.
    pub t: f64,
    /// Driver mode when the frame was produced.
    pub mode: Mode,
    /// Construction at `t`.
    pub hierarchy: CurveHierarchy,
    /// Trace length including this frame.
    pub trace_len: usize,
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<CapturedFrame>,
    begun: usize,
    ended: usize,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration captured by the most recent `begin`.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg
    }

    /// Frames of the most recent run, in order.
    pub fn frames(&self) -> &[CapturedFrame] {
        &self.frames
    }

    /// How many runs began.
    pub fn runs_begun(&self) -> usize {
        self.begun
    }

    /// How many runs ended.
    pub fn runs_ended(&self) -> usize {
        self.ended
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> BezierResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.begun += 1;
        Ok(())
    }

    fn push_frame(&mut self, frame: &Frame<'_>) -> BezierResult<()> {
        self.frames.push(CapturedFrame {
            index: frame.index,
            t: frame.t,
            mode: frame.mode,
            hierarchy: frame.hierarchy.clone(),
            trace_len: frame.trace.len(),
        });
        Ok(())
    }

    fn end(&mut self) -> BezierResult<()> {
        self.ended += 1;
        Ok(())
    }
}

/// Discards every frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl FrameSink for NullSink {
    fn begin(&mut self, _cfg: SinkConfig) -> BezierResult<()> {
        Ok(())
    }

    fn push_frame(&mut self, _frame: &Frame<'_>) -> BezierResult<()> {
        Ok(())
    }

    fn end(&mut self) -> BezierResult<()> {
        Ok(())
    }
}

/// Writes each frame as one JSON object per line.
#[derive(Debug)]
pub struct JsonLinesSink<W: Write> {
    out: W,
}

impl<W: Write> JsonLinesSink<W> {
    /// Wrap a writer.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Recover the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> FrameSink for JsonLinesSink<W> {
    fn begin(&mut self, _cfg: SinkConfig) -> BezierResult<()> {
        Ok(())
    }

    fn push_frame(&mut self, frame: &Frame<'_>) -> BezierResult<()> {
        serde_json::to_writer(&mut self.out, frame)
            .map_err(|e| BezierError::sink(format!("encode frame {}: {e}", frame.index.0)))?;
        self.out
            .write_all(b"\n")
            .map_err(|e| BezierError::sink(format!("write frame {}: {e}", frame.index.0)))
    }

    fn end(&mut self) -> BezierResult<()> {
        self.out
            .flush()
            .map_err(|e| BezierError::sink(format!("flush frames: {e}")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/sink.rs"]
mod tests;
