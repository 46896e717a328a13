//! Simulation time model.
//!
//! Time is a monotonically increasing `Tick` counter that restarts at zero
//! with every run.  `RunClock` maps ticks to the pacing interval the engine
//! sleeps between iterations, which is what a renderer perceives as
//! wall-clock time.

use std::fmt;
use std::time::Duration;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute tick counter within one simulation run.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── RunClock ──────────────────────────────────────────────────────────────────

/// Tracks the current tick of a run and the fixed pacing interval.
#[derive(Clone, Debug)]
pub struct RunClock {
    /// Pause between consecutive ticks.  Zero disables pacing.
    pub tick_interval: Duration,
    /// Number of ticks completed so far in this run.
    pub current_tick: Tick,
}

impl RunClock {
    pub fn new(tick_interval: Duration) -> Self {
        Self {
            tick_interval,
            current_tick: Tick::ZERO,
        }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Rewind to tick zero for a fresh run.
    #[inline]
    pub fn reset(&mut self) {
        self.current_tick = Tick::ZERO;
    }

    /// Paced time elapsed since tick zero, ignoring how long ticks took to
    /// compute.
    pub fn elapsed(&self) -> Duration {
        let ticks = u32::try_from(self.current_tick.0).unwrap_or(u32::MAX);
        self.tick_interval.saturating_mul(ticks)
    }

    /// `true` if the loop should sleep between ticks.
    #[inline]
    pub fn is_paced(&self) -> bool {
        !self.tick_interval.is_zero()
    }
}

impl fmt::Display for RunClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (+{} ms)", self.current_tick, self.elapsed().as_millis())
    }
}
