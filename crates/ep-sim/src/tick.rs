//! One tick of the outbreak state machine.
//!
//! ```text
//! exposure ← positions of every Infected human (pre-tick)
//! for each human in AgentId order:
//!   Dead                     → dead += 1, skip
//!   next ← motion.next_position(position)
//!   Infected, countdown == 0 → draw > death_rate ? Immune : Dead
//!   still Infected           → countdown -= 1
//!   NonInfected, exposed     → draw < infection_probability ? Infected
//!   tally sick / immune / dead
//!   position ← next
//! ```
//!
//! Exposure is tested against the pre-move position, and the exposure set is
//! frozen before the loop: a human infected on this tick does not expose
//! anyone until the next one.

use ep_agent::{HealthState, Population};
use ep_core::{SimRng, Tick};
use ep_spatial::ExposureIndex;

use crate::{EpochSummary, ResolvedParams};

/// Advance `population` by one tick and return the counts for `tick`.
///
/// All epidemiological draws come from `rng`; movement draws come from each
/// human's own motion RNG.
pub fn apply_tick(
    tick:       Tick,
    population: &mut Population,
    params:     &ResolvedParams,
    rng:        &mut SimRng,
) -> EpochSummary {
    let exposure = ExposureIndex::build(population.infected_positions());
    let mut summary = EpochSummary { tick, ..EpochSummary::default() };

    for human in population.iter_mut() {
        if human.is_dead() {
            summary.dead += 1;
            continue;
        }

        let next = human.propose_move();

        if human.is_infected() && human.countdown == 0 {
            if rng.percent() > params.death_rate {
                human.state = HealthState::Immune;
            } else {
                human.state = HealthState::Dead;
                summary.dead += 1;
            }
        }
        if human.is_infected() {
            human.countdown = human.countdown.saturating_sub(1);
        }

        if human.state == HealthState::NonInfected
            && exposure.is_exposed(human.position, params.infection_radius)
            && rng.percent() < params.infection_probability
        {
            human.infect(params.sickness_interval);
        }

        match human.state {
            HealthState::Infected => summary.sick += 1,
            HealthState::Immune   => summary.immune += 1,
            _ => {}
        }

        human.position = next;
    }

    summary
}
