//! Unit tests for ep-agent.

use ep_core::{AgentId, SimRng};
use ep_spatial::QuarantineGrid;

use crate::{Color, HealthState, PopulationBuilder};

fn grid() -> QuarantineGrid {
    QuarantineGrid::new(800.0, 600.0, 25.0)
}

#[cfg(test)]
mod health {
    use super::*;

    #[test]
    fn color_is_a_function_of_state() {
        assert_eq!(HealthState::Infected.color(), Color::Red);
        assert_eq!(HealthState::NonInfected.color(), Color::Green);
        assert_eq!(HealthState::Immune.color(), Color::Yellow);
        assert_eq!(HealthState::Dead.color(), Color::Black);
    }

    #[test]
    fn hex_strings() {
        assert_eq!(Color::Red.to_string(), "#ff3300");
        assert_eq!(Color::Green.hex(), "#00ff00");
        assert_eq!(Color::Yellow.hex(), "#ffff00");
        assert_eq!(Color::Black.hex(), "#000000");
    }

    #[test]
    fn only_dead_is_terminal() {
        assert!(HealthState::Dead.is_terminal());
        assert!(!HealthState::Immune.is_terminal());
        assert_eq!(HealthState::default(), HealthState::NonInfected);
    }
}

#[cfg(test)]
mod builder {
    use super::*;

    #[test]
    fn first_agents_start_infected() {
        let mut g = grid();
        let mut rng = SimRng::new(42);
        let pop = PopulationBuilder::new(50)
            .infected_at_start(7)
            .sickness_interval(12)
            .build(&mut g, &mut rng);

        assert_eq!(pop.len(), 50);
        for (i, h) in pop.iter().enumerate() {
            if i < 7 {
                assert_eq!(h.state, HealthState::Infected);
                assert_eq!(h.countdown, 12);
                assert_eq!(h.color(), Color::Red);
            } else {
                assert_eq!(h.state, HealthState::NonInfected);
            }
        }
        assert_eq!(pop.count(HealthState::Infected), 7);
        assert_eq!(pop.infected_positions().count(), 7);
    }

    #[test]
    fn humans_start_inside_their_cell() {
        let mut g = grid();
        let mut rng = SimRng::new(1);
        let pop = PopulationBuilder::new(300).build(&mut g, &mut rng);
        for h in &pop {
            let bounds = g.get(h.cell).unwrap().bounds;
            assert_eq!(h.motion.bounds(), bounds);
            assert!(bounds.contains(h.position));
        }
        let occupied: u32 = g.boxes().iter().map(|b| b.occupancy()).sum();
        assert_eq!(occupied, 300);
    }

    #[test]
    fn infected_count_capped_by_size() {
        let mut g = grid();
        let mut rng = SimRng::new(2);
        let pop = PopulationBuilder::new(5)
            .infected_at_start(99)
            .build(&mut g, &mut rng);
        assert_eq!(pop.count(HealthState::Infected), 5);
    }

    #[test]
    fn same_seed_same_population() {
        let build = || {
            let mut g = grid();
            let mut rng = SimRng::new(123);
            PopulationBuilder::new(40).infected_at_start(4).build(&mut g, &mut rng)
        };
        let (a, b) = (build(), build());
        for id in a.agent_ids() {
            let (ha, hb) = (a.get(id).unwrap(), b.get(id).unwrap());
            assert_eq!(ha.position, hb.position);
            assert_eq!(ha.cell, hb.cell);
            assert_eq!(ha.motion.heading(), hb.motion.heading());
        }
    }
}

#[cfg(test)]
mod human {
    use super::*;

    #[test]
    fn infect_sets_countdown() {
        let mut g = grid();
        let mut rng = SimRng::new(3);
        let mut pop = PopulationBuilder::new(10).build(&mut g, &mut rng);
        let h = pop.get_mut(AgentId(4)).unwrap();
        assert!(!h.is_infected());
        h.infect(9);
        assert!(h.is_infected());
        assert_eq!(h.countdown, 9);
        assert_eq!(pop.count(HealthState::Infected), 1);
    }

    #[test]
    fn propose_move_does_not_commit() {
        let mut g = grid();
        let mut rng = SimRng::new(4);
        let mut pop = PopulationBuilder::new(1).build(&mut g, &mut rng);
        let h = pop.get_mut(AgentId(0)).unwrap();
        let before = h.position;
        let _ = h.propose_move();
        assert_eq!(h.position, before);
    }
}
