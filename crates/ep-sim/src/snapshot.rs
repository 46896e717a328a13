//! Values published to subscribers after every tick.
//!
//! Both types own their data.  Subscribers can keep them as long as they
//! like; nothing they hold aliases the engine's live population.

use std::fmt;

use ep_agent::{Color, HealthState, Population};
use ep_core::{AgentId, Tick};

/// One human as seen by a renderer.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AgentSnapshot {
    pub id:    AgentId,
    pub x:     f64,
    pub y:     f64,
    pub color: Color,
    pub state: HealthState,
}

/// Every human after tick `tick`, in `AgentId` order.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PopulationSnapshot {
    pub tick:   Tick,
    pub agents: Vec<AgentSnapshot>,
}

impl PopulationSnapshot {
    /// Deep-copy the population's public state.
    pub fn capture(tick: Tick, population: &Population) -> Self {
        let agents = population
            .agent_ids()
            .zip(population.iter())
            .map(|(id, h)| AgentSnapshot {
                id,
                x:     h.position.x,
                y:     h.position.y,
                color: h.color(),
                state: h.state,
            })
            .collect();
        Self { tick, agents }
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}

/// Aggregate counts for one tick (an epoch).
///
/// Humans that never caught the disease are not counted, so
/// `sick + immune + dead <= population_size`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EpochSummary {
    pub tick:   Tick,
    pub sick:   usize,
    pub immune: usize,
    pub dead:   usize,
}

impl EpochSummary {
    /// Humans the disease has reached so far.
    #[inline]
    pub fn affected(&self) -> usize {
        self.sick + self.immune + self.dead
    }
}

impl fmt::Display for EpochSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: sick={} immune={} dead={}",
            self.tick, self.sick, self.immune, self.dead
        )
    }
}
