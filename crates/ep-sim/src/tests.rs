//! Integration tests for ep-sim.

use std::sync::{Arc, Mutex};

use ep_agent::HealthState;
use ep_core::{Tick, WorldConfig};

use crate::{
    Engine, EngineBuilder, EpochSummary, PopulationSnapshot, ResolvedParams, RunEnd, RunLimit,
    SimParams, StartOutcome,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Unpaced engine so tests never sleep.
fn engine(seed: u64) -> Engine {
    EngineBuilder::new().seed(seed).tick_interval_ms(0).build().unwrap()
}

fn resolved(
    population_size:       usize,
    infected_at_start:     usize,
    infection_probability: f64,
    death_rate:            f64,
    sickness_interval:     u32,
) -> ResolvedParams {
    ResolvedParams {
        population_size,
        unit_box_size: 25.0,
        infection_probability,
        infection_radius: 100.0,
        death_rate,
        sickness_interval,
        infected_at_start,
    }
}

fn states(engine: &Engine) -> Vec<HealthState> {
    engine.population().unwrap().iter().map(|h| h.state).collect()
}

// ── Parameter clamping ────────────────────────────────────────────────────────

#[cfg(test)]
mod params {
    use super::*;

    fn world() -> WorldConfig {
        WorldConfig::default()
    }

    #[test]
    fn defaults_are_already_valid() {
        let r = SimParams::default().resolve(&world());
        assert_eq!(r.population_size, 100);
        assert_eq!(r.unit_box_size, 25.0);
        assert_eq!(r.infection_probability, 90.0);
        assert_eq!(r.infection_radius, 100.0);
        assert_eq!(r.death_rate, 10.0);
        assert_eq!(r.sickness_interval, 10);
        assert_eq!(r.infected_at_start, 10);
    }

    #[test]
    fn population_clamps_to_bounds() {
        let low = SimParams { population_size: 5.0, ..SimParams::default() };
        let high = SimParams { population_size: 5000.0, ..SimParams::default() };
        assert_eq!(low.resolve(&world()).population_size, 10);
        assert_eq!(high.resolve(&world()).population_size, 1000);
    }

    #[test]
    fn death_rate_floor_and_ceiling() {
        let zero = SimParams { death_rate: 0.0, ..SimParams::default() };
        let neg = SimParams { death_rate: -3.0, ..SimParams::default() };
        let half = SimParams { death_rate: 0.5, ..SimParams::default() };
        let big = SimParams { death_rate: 250.0, ..SimParams::default() };
        assert_eq!(zero.resolve(&world()).death_rate, 1.0);
        assert_eq!(neg.resolve(&world()).death_rate, 1.0);
        assert_eq!(half.resolve(&world()).death_rate, 0.5);
        assert_eq!(big.resolve(&world()).death_rate, 100.0);
    }

    #[test]
    fn float_ranges() {
        let p = SimParams {
            unit_box_size:         1.0,
            infection_probability: 0.0,
            infection_radius:      500.0,
            ..SimParams::default()
        };
        let r = p.resolve(&world());
        assert_eq!(r.unit_box_size, 10.0);
        assert_eq!(r.infection_probability, 10.0);
        assert_eq!(r.infection_radius, 100.0);

        let p = SimParams {
            unit_box_size:         10_000.0,
            infection_probability: 140.0,
            infection_radius:      1.0,
            ..SimParams::default()
        };
        let r = p.resolve(&world());
        assert_eq!(r.unit_box_size, 700.0, "(800 + 600) / 2");
        assert_eq!(r.infection_probability, 100.0);
        assert_eq!(r.infection_radius, 5.0);
    }

    #[test]
    fn nan_falls_back_to_lower_bound() {
        let p = SimParams {
            unit_box_size:         f64::NAN,
            infection_probability: f64::NAN,
            infection_radius:      f64::NAN,
            death_rate:            f64::NAN,
            ..SimParams::default()
        };
        let r = p.resolve(&world());
        assert_eq!(r.unit_box_size, 10.0);
        assert_eq!(r.infection_probability, 10.0);
        assert_eq!(r.infection_radius, 5.0);
        assert_eq!(r.death_rate, 1.0);
    }

    #[test]
    fn sickness_interval_range() {
        let short = SimParams { sickness_interval: 1.0, ..SimParams::default() };
        let long = SimParams { sickness_interval: 365.0, ..SimParams::default() };
        assert_eq!(short.resolve(&world()).sickness_interval, 5);
        assert_eq!(long.resolve(&world()).sickness_interval, 70);
    }

    #[test]
    fn infected_at_start_uses_clamped_population() {
        let p = SimParams { population_size: 5000.0, ..SimParams::default() };
        // Raw default 5000 / 10 = 500, clamped population 1000 → cap 500.
        assert_eq!(p.resolve(&world()).infected_at_start, 500);

        let p = SimParams {
            population_size:   15.0,
            infected_at_start: Some(12.0),
            ..SimParams::default()
        };
        assert_eq!(p.resolve(&world()).infected_at_start, 7, "15 / 2 rounds down");

        let p = SimParams { infected_at_start: Some(0.0), ..SimParams::default() };
        assert_eq!(p.resolve(&world()).infected_at_start, 1);

        // Raw default 5 / 10 = 0 → 1.
        let p = SimParams { population_size: 5.0, ..SimParams::default() };
        assert_eq!(p.resolve(&world()).infected_at_start, 1);
    }

    #[test]
    fn fractional_counts_are_floored() {
        let p = SimParams {
            population_size:   100.5,
            sickness_interval: 12.9,
            infected_at_start: Some(7.99),
            ..SimParams::default()
        };
        let r = p.resolve(&world());
        assert_eq!(r.population_size, 100);
        assert_eq!(r.sickness_interval, 12);
        assert_eq!(r.infected_at_start, 7);

        // Default infected count comes from the floored raw population.
        let p = SimParams { population_size: 59.9, ..SimParams::default() };
        assert_eq!(p.resolve(&world()).infected_at_start, 5);
    }

    #[test]
    fn non_finite_counts_clamp() {
        let p = SimParams {
            population_size:   f64::NAN,
            sickness_interval: f64::INFINITY,
            infected_at_start: Some(f64::NAN),
            ..SimParams::default()
        };
        let r = p.resolve(&world());
        assert_eq!(r.population_size, 10);
        assert_eq!(r.sickness_interval, 70);
        assert_eq!(r.infected_at_start, 1);
    }
}

// ── Start / stop lifecycle ────────────────────────────────────────────────────

#[cfg(test)]
mod lifecycle {
    use super::*;

    #[test]
    fn builder_rejects_empty_world() {
        assert!(EngineBuilder::new().world_size(0.0, 600.0).build().is_err());
        assert!(EngineBuilder::new().world_size(800.0, f64::NAN).build().is_err());
        assert!(EngineBuilder::new().world_size(0.5, 0.5).build().is_err());
    }

    #[test]
    fn builder_rejects_world_too_large_for_the_grid() {
        assert!(EngineBuilder::new().world_size(700_000.0, 700_000.0).build().is_err());
        // 10 240 × 10 240 at unit 10 is exactly 1 024² cells.
        assert!(EngineBuilder::new().world_size(10_240.0, 10_240.0).build().is_ok());
    }

    #[test]
    fn unclamped_tiny_unit_still_starts() {
        let mut e = engine(30);
        let params = ResolvedParams { unit_box_size: 1e-3, ..resolved(10, 1, 50.0, 10.0, 5) };
        assert_eq!(e.start_resolved(params), StartOutcome::Started);
        let grid = e.grid().unwrap();
        assert!(grid.len() as u64 <= ep_spatial::MAX_CELLS);
        assert!(e.step().is_some());
    }

    #[test]
    fn idle_engine_has_nothing_to_observe() {
        let mut e = engine(1);
        assert!(!e.is_running());
        assert!(e.population().is_none());
        assert!(e.current_tick().is_none());
        assert_eq!(e.step(), None);
        assert_eq!(e.run(RunLimit::Ticks(3)).end, RunEnd::NotRunning);
    }

    #[test]
    fn start_builds_clamped_population() {
        let mut e = engine(2);
        let params = SimParams {
            population_size:   5.0,
            infected_at_start: Some(3.0),
            ..SimParams::default()
        };
        assert_eq!(e.start(&params), StartOutcome::Started);
        assert!(e.is_running());
        assert_eq!(e.current_tick(), Some(Tick::ZERO));

        let pop = e.population().unwrap();
        assert_eq!(pop.len(), 10);
        assert_eq!(pop.count(HealthState::Infected), 3);
        assert_eq!(pop.count(HealthState::NonInfected), 7);
        for (i, h) in pop.iter().enumerate() {
            let expected = if i < 3 { HealthState::Infected } else { HealthState::NonInfected };
            assert_eq!(h.state, expected);
        }
    }

    #[test]
    fn start_while_running_changes_nothing() {
        let mut e = engine(3);
        e.start(&SimParams::default());
        e.run(RunLimit::Ticks(4));
        let before = e.snapshot().unwrap();

        let other = SimParams { population_size: 500.0, ..SimParams::default() };
        assert_eq!(e.start(&other), StartOutcome::AlreadyRunning);
        assert_eq!(e.snapshot().unwrap(), before);
        assert_eq!(e.params().unwrap().population_size, 100);
    }

    #[test]
    fn stop_is_idempotent() {
        let mut e = engine(4);
        e.stop();
        e.start(&SimParams::default());
        e.stop();
        e.stop();
        assert!(!e.is_running());
        assert_eq!(e.step(), None);
        // The stopped population stays readable.
        assert_eq!(e.population().unwrap().len(), 100);
    }

    #[test]
    fn restart_after_stop_is_a_fresh_run() {
        let mut e = engine(5);
        e.start(&SimParams::default());
        e.run(RunLimit::Ticks(10));
        e.stop();

        let params = SimParams { population_size: 40.0, ..SimParams::default() };
        assert_eq!(e.start(&params), StartOutcome::Started);
        assert_eq!(e.current_tick(), Some(Tick::ZERO));
        assert_eq!(e.population().unwrap().len(), 40);
        assert_eq!(e.last_summary(), None);
    }

    #[test]
    fn tick_budget_leaves_run_active() {
        let mut e = engine(6);
        e.start(&SimParams::default());
        let report = e.run(RunLimit::Ticks(5));
        assert_eq!(report.end, RunEnd::LimitReached);
        assert_eq!(report.ticks_run, 5);
        assert_eq!(e.current_tick(), Some(Tick(5)));
        assert!(e.is_running());

        e.run(RunLimit::Ticks(2));
        assert_eq!(e.current_tick(), Some(Tick(7)));
        assert_eq!(e.last_summary().unwrap().tick, Tick(7));
    }

    #[test]
    fn same_seed_replays_identically() {
        let trace = |seed| {
            let mut e = engine(seed);
            e.start(&SimParams::default());
            (0..50).filter_map(|_| e.step()).collect::<Vec<_>>()
        };
        assert_eq!(trace(11), trace(11));
    }
}

// ── Tick state machine ────────────────────────────────────────────────────────

#[cfg(test)]
mod tick {
    use super::*;

    #[test]
    fn summary_matches_population() {
        let mut e = engine(7);
        e.start(&SimParams { population_size: 300.0, ..SimParams::default() });
        for _ in 0..120 {
            let s = e.step().unwrap();
            let pop = e.population().unwrap();
            assert_eq!(s.sick, pop.count(HealthState::Infected));
            assert_eq!(s.immune, pop.count(HealthState::Immune));
            assert_eq!(s.dead, pop.count(HealthState::Dead));
            assert!(s.affected() <= 300);
        }
    }

    #[test]
    fn dead_is_absorbing() {
        let mut e = engine(8);
        e.start(&SimParams { death_rate: 60.0, sickness_interval: 5.0, ..SimParams::default() });
        let mut prev = states(&e);
        for _ in 0..100 {
            e.step();
            let now = states(&e);
            for (a, b) in prev.iter().zip(&now) {
                if *a == HealthState::Dead {
                    assert_eq!(*b, HealthState::Dead);
                }
            }
            prev = now;
        }
        assert!(prev.contains(&HealthState::Dead));
    }

    #[test]
    fn dead_humans_stop_moving() {
        let mut e = engine(9);
        e.start_resolved(resolved(20, 20, 10.0, 100.0, 0));
        e.step();
        let after_death = e.snapshot().unwrap();
        assert!(after_death.agents.iter().all(|a| a.state == HealthState::Dead));
        e.step();
        let later = e.snapshot().unwrap();
        for (a, b) in after_death.agents.iter().zip(&later.agents) {
            assert_eq!((a.x, a.y), (b.x, b.y));
        }
    }

    #[test]
    fn countdown_drops_by_one_per_tick() {
        let mut e = engine(10);
        e.start_resolved(resolved(30, 3, 0.0, 100.0, 10));
        for k in 1..=10u32 {
            e.step();
            let pop = e.population().unwrap();
            for h in pop.iter().take(3) {
                assert_eq!(h.state, HealthState::Infected);
                assert_eq!(h.countdown, 10 - k);
            }
        }
        let s = e.step().unwrap();
        assert_eq!(s.dead, 3);
        assert_eq!(s.sick, 0);
    }

    #[test]
    fn new_infections_start_with_full_countdown() {
        let mut e = engine(12);
        e.start_resolved(resolved(200, 20, 100.0, 10.0, 15));
        let mut seen_new = false;
        for _ in 0..30 {
            let before = states(&e);
            e.step();
            let pop = e.population().unwrap();
            for (was, h) in before.iter().zip(pop.iter()) {
                if *was == HealthState::NonInfected && h.state == HealthState::Infected {
                    assert_eq!(h.countdown, 15);
                    seen_new = true;
                }
            }
        }
        assert!(seen_new);
    }

    #[test]
    fn zero_infection_probability_never_spreads() {
        let mut e = engine(13);
        e.start_resolved(resolved(200, 50, 0.0, 10.0, 20));
        for _ in 0..60 {
            let s = e.step().unwrap();
            assert!(s.affected() <= 50);
        }
        let pop = e.population().unwrap();
        assert!(pop.iter().skip(50).all(|h| h.state == HealthState::NonInfected));
    }

    #[test]
    fn certain_death_after_clamped_interval() {
        // sickness_interval 1 clamps to 5: countdown hits zero after tick 5,
        // the infection resolves on tick 6.
        let mut e = engine(14);
        e.start(&SimParams {
            population_size:   10.0,
            infected_at_start: Some(1.0),
            death_rate:        100.0,
            sickness_interval: 1.0,
            ..SimParams::default()
        });
        for _ in 0..5 {
            assert_eq!(e.step().unwrap().dead, 0);
        }
        let s = e.step().unwrap();
        assert_eq!(s.tick, Tick(6));
        assert_eq!(s.dead, 1);
        assert_eq!(e.population().unwrap().as_slice()[0].state, HealthState::Dead);
    }

    #[test]
    fn unclamped_zero_interval_dies_on_first_tick() {
        let mut e = engine(15);
        e.start_resolved(resolved(10, 1, 0.0, 100.0, 0));
        assert_eq!(e.step().unwrap().dead, 1);
    }

    #[test]
    fn zero_death_rate_always_recovers() {
        let mut e = engine(16);
        e.start_resolved(resolved(10, 5, 0.0, 0.0, 0));
        let s = e.step().unwrap();
        // percent() > 0.0 fails only on an exact 0.0 draw.
        assert_eq!(s.immune + s.dead, 5);
        assert!(s.immune >= 4);
    }

    #[test]
    fn humans_stay_inside_their_cell() {
        let mut e = engine(17);
        e.start(&SimParams { population_size: 400.0, unit_box_size: 40.0, ..SimParams::default() });
        for _ in 0..200 {
            e.step();
        }
        let grid = e.grid().unwrap();
        for h in e.population().unwrap() {
            let cell = grid.get(h.cell).unwrap().bounds;
            assert!(cell.contains(h.position), "{} outside {}", h.position, cell);
        }
    }
}

// ── Streams ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod streams {
    use super::*;

    #[test]
    fn subscribers_called_in_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut e = engine(20);

        let l = Arc::clone(&log);
        e.subscribe_summary(move |s: &EpochSummary| l.lock().unwrap().push(format!("a{}", s.tick.0)));
        let l = Arc::clone(&log);
        e.subscribe_population(move |p: &PopulationSnapshot| {
            l.lock().unwrap().push(format!("p{}", p.tick.0))
        });
        let l = Arc::clone(&log);
        e.subscribe_summary(move |s: &EpochSummary| l.lock().unwrap().push(format!("b{}", s.tick.0)));

        e.start(&SimParams::default());
        e.run(RunLimit::Ticks(2));

        assert_eq!(*log.lock().unwrap(), ["p1", "a1", "b1", "p2", "a2", "b2"]);
    }

    #[test]
    fn snapshot_copies_every_human() {
        let got = Arc::new(Mutex::new(None));
        let mut e = engine(21);
        let g = Arc::clone(&got);
        e.subscribe_population(move |p: &PopulationSnapshot| *g.lock().unwrap() = Some(p.clone()));
        e.start(&SimParams { population_size: 64.0, ..SimParams::default() });
        e.step();

        let snap = got.lock().unwrap().clone().unwrap();
        assert_eq!(snap.len(), 64);
        assert_eq!(snap, e.snapshot().unwrap());
        for a in &snap.agents {
            assert_eq!(a.color, a.state.color());
        }
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let count = Arc::new(Mutex::new(0u32));
        let mut e = engine(22);
        let c = Arc::clone(&count);
        let id = e.subscribe_summary(move |_: &EpochSummary| *c.lock().unwrap() += 1);

        e.start(&SimParams::default());
        e.run(RunLimit::Ticks(3));
        assert!(e.unsubscribe(id));
        assert!(!e.unsubscribe(id));
        e.run(RunLimit::Ticks(3));
        assert_eq!(*count.lock().unwrap(), 3);
    }

    #[test]
    fn subscriber_can_stop_the_loop() {
        let mut e = engine(23);
        let handle = e.stop_handle();
        e.subscribe_summary(move |s: &EpochSummary| {
            if s.tick == Tick(4) {
                handle.stop();
            }
        });
        e.start(&SimParams::default());

        let report = e.run(RunLimit::UntilStopped);
        assert_eq!(report.end, RunEnd::Stopped);
        assert_eq!(report.ticks_run, 4);
        assert_eq!(report.last_summary.unwrap().tick, Tick(4));
        assert!(!e.is_running());
    }

    #[test]
    fn stop_from_another_thread() {
        let mut e = EngineBuilder::new().tick_interval_ms(1).build().unwrap();
        let handle = e.stop_handle();
        e.start(&SimParams::default());

        let stopper = std::thread::spawn(move || {
            std::thread::sleep(std::time::Duration::from_millis(20));
            handle.stop();
        });
        let report = e.run(RunLimit::UntilStopped);
        stopper.join().unwrap();

        assert_eq!(report.end, RunEnd::Stopped);
        assert!(report.ticks_run > 0);
    }
}
