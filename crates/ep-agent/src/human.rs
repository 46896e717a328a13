//! The per-agent record.

use ep_core::{CellId, Point};
use ep_mobility::MotionPolicy;

use crate::{Color, HealthState};

/// One member of the population.
///
/// Fields are `pub` so the tick loop can update them in place; the engine is
/// the only writer.
#[derive(Clone, Debug)]
pub struct Human {
    /// Current position, always inside `motion.bounds()`.
    pub position: Point,

    /// Quarantine cell this human is confined to.
    pub cell: CellId,

    pub state: HealthState,

    /// Ticks left until the infection resolves.  Only meaningful while
    /// `state == Infected`.
    pub countdown: u32,

    /// Random walk scoped to `cell`.
    pub motion: MotionPolicy,
}

impl Human {
    pub fn new(position: Point, cell: CellId, motion: MotionPolicy) -> Self {
        Self {
            position,
            cell,
            state: HealthState::NonInfected,
            countdown: 0,
            motion,
        }
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.state.color()
    }

    #[inline]
    pub fn is_infected(&self) -> bool {
        self.state == HealthState::Infected
    }

    #[inline]
    pub fn is_dead(&self) -> bool {
        self.state == HealthState::Dead
    }

    /// Mark as infected and start the countdown.
    pub fn infect(&mut self, sickness_interval: u32) {
        self.state = HealthState::Infected;
        self.countdown = sickness_interval;
    }

    /// Ask the motion policy where this human goes next.  The position is
    /// not committed.
    #[inline]
    pub fn propose_move(&mut self) -> Point {
        self.motion.next_position(self.position)
    }
}
