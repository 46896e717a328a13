//! Process-wide world configuration.
//!
//! These values are fixed for the lifetime of an engine: the world
//! rectangle, the pacing interval, the root seed, and the heading sampler.
//! Per-run epidemiological parameters live in `ep-sim`.

use std::time::Duration;

use crate::{EpError, EpResult, Point, Rect};

/// How a motion policy picks a new compass heading.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum HeadingSampling {
    /// Draw an index in `[0, 7)` over the 8-entry heading table.  The last
    /// entry (up-right) is never chosen.
    #[default]
    Legacy,
    /// Draw uniformly from all 8 headings.
    Uniform,
}

/// World dimensions, pacing and seeding for an engine.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WorldConfig {
    /// World width in canvas units.
    pub width: f64,

    /// World height in canvas units.
    pub height: f64,

    /// Milliseconds the loop sleeps between ticks.  0 runs unpaced.
    pub tick_interval_ms: u64,

    /// Root RNG seed.  The same seed replays identical runs.
    pub seed: u64,

    /// Heading sampler used by every motion policy.
    pub heading_sampling: HeadingSampling,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width:            800.0,
            height:           600.0,
            tick_interval_ms: 100,
            seed:             42,
            heading_sampling: HeadingSampling::Legacy,
        }
    }
}

impl WorldConfig {
    /// The whole world as a rectangle anchored at the origin.
    pub fn bounds(&self) -> Rect {
        Rect::new(Point::new(0.0, 0.0), Point::new(self.width, self.height))
    }

    /// Mean of width and height; the upper clamp for `unit_box_size`.
    #[inline]
    pub fn half_perimeter(&self) -> f64 {
        (self.width + self.height) / 2.0
    }

    #[inline]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Reject worlds no grid can be laid over.
    pub fn validate(&self) -> EpResult<()> {
        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(EpError::Config(format!("world width must be positive, got {}", self.width)));
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(EpError::Config(format!("world height must be positive, got {}", self.height)));
        }
        Ok(())
    }
}
