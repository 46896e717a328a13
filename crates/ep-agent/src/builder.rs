//! Fluent builder for a fresh [`Population`].
//!
//! # Usage
//!
//! ```rust
//! use ep_agent::{HealthState, PopulationBuilder};
//! use ep_core::SimRng;
//! use ep_spatial::QuarantineGrid;
//!
//! let mut grid = QuarantineGrid::new(800.0, 600.0, 25.0);
//! let mut rng = SimRng::new(42);
//!
//! let population = PopulationBuilder::new(100)
//!     .infected_at_start(10)
//!     .sickness_interval(10)
//!     .build(&mut grid, &mut rng);
//!
//! assert_eq!(population.len(), 100);
//! assert_eq!(population.count(HealthState::Infected), 10);
//! ```

use ep_core::{AgentId, AgentRng, HeadingSampling, SimRng};
use ep_mobility::MotionPolicy;
use ep_spatial::QuarantineGrid;

use crate::{Human, Population};

/// Fluent builder for [`Population`].
///
/// Each human is allocated a random cell and a random point inside it, and
/// gets a motion policy scoped to that cell.  The first `infected_at_start`
/// humans (by `AgentId`) start infected; the rest start non-infected.
pub struct PopulationBuilder {
    size:              usize,
    infected_at_start: usize,
    sickness_interval: u32,
    sampling:          HeadingSampling,
}

impl PopulationBuilder {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            infected_at_start: 0,
            sickness_interval: 0,
            sampling:          HeadingSampling::default(),
        }
    }

    /// How many humans start infected.  Capped at the population size.
    pub fn infected_at_start(mut self, n: usize) -> Self {
        self.infected_at_start = n;
        self
    }

    /// Countdown given to every initially infected human.
    pub fn sickness_interval(mut self, ticks: u32) -> Self {
        self.sickness_interval = ticks;
        self
    }

    pub fn heading_sampling(mut self, sampling: HeadingSampling) -> Self {
        self.sampling = sampling;
        self
    }

    /// Allocate every human over `grid`, drawing from `rng`.
    ///
    /// Per-agent motion RNGs are seeded from one value drawn from `rng`, so
    /// the whole population is reproducible from the engine's seed.
    pub fn build(self, grid: &mut QuarantineGrid, rng: &mut SimRng) -> Population {
        let run_seed: u64 = rng.random();

        let humans = (0..self.size)
            .map(|i| {
                let agent = AgentId(i as u32);
                let slot = grid.allocate(rng);
                let motion = MotionPolicy::new(
                    slot.bounds,
                    self.sampling,
                    AgentRng::new(run_seed, agent),
                );
                let mut human = Human::new(slot.point, slot.cell, motion);
                if i < self.infected_at_start {
                    human.infect(self.sickness_interval);
                }
                human
            })
            .collect();

        Population::from_humans(humans)
    }
}
