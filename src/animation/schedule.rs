use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use crate::animation::driver::{AnimationDriver, TickOutcome};
use crate::animation::sink::FrameSink;
use crate::foundation::error::BezierResult;

/// Shared cancellation flag for a repeating timer.
///
/// Clones observe the same flag. Single-threaded by construction (`!Send`).
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    /// Fresh, uncancelled token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel; idempotent.
    pub fn cancel(&self) {
        self.0.set(true);
    }

    /// True once [`cancel`](Self::cancel) was called on any clone.
    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// A repeating timer armed by a running driver.
#[derive(Clone, Debug)]
pub struct Timer {
    interval: Duration,
    token: CancelToken,
}

impl Timer {
    pub(crate) fn arm(interval: Duration) -> Self {
        Self {
            interval,
            token: CancelToken::new(),
        }
    }

    /// Delay between ticks.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Token that stops this timer.
    pub fn token(&self) -> &CancelToken {
        &self.token
    }

    /// True while ticks should still fire.
    pub fn is_live(&self) -> bool {
        !self.token.is_cancelled()
    }

    pub(crate) fn cancel(&self) {
        self.token.cancel();
    }
}

/// Source of the delay between ticks.
pub trait Clock {
    /// Block (or pretend to) for `d`.
    fn wait(&mut self, d: Duration);
}

/// Sleeps the current thread.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn wait(&mut self, d: Duration) {
        std::thread::sleep(d);
    }
}

/// Simulated clock: waits return immediately and only advance a counter.
#[derive(Clone, Copy, Debug, Default)]
pub struct ManualClock {
    elapsed: Duration,
}

impl ManualClock {
    /// Clock at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total simulated time waited so far.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

impl Clock for ManualClock {
    fn wait(&mut self, d: Duration) {
        self.elapsed = self.elapsed.saturating_add(d);
    }
}

/// Tick `driver` until its timer stops, waiting one interval between ticks.
///
/// The next wait starts only after the previous tick returned. Returns the number of
/// ticks executed; zero when the driver is not running.
pub fn drive(
    driver: &mut AnimationDriver,
    clock: &mut impl Clock,
    sink: &mut impl FrameSink,
) -> BezierResult<u64> {
    let mut ticks = 0u64;
    loop {
        let Some(interval) = driver.timer().filter(|t| t.is_live()).map(Timer::interval) else {
            break;
        };
        clock.wait(interval);
        match driver.tick(sink)? {
            TickOutcome::Idle => break,
            TickOutcome::Advanced(_) => ticks += 1,
            TickOutcome::Completed(_) => {
                ticks += 1;
                break;
            }
        }
    }
    tracing::debug!(ticks, "drive finished");
    Ok(ticks)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/schedule.rs"]
mod tests;
