//! The `Engine` struct: run lifecycle, the paced loop, and the two streams.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use ep_agent::{Population, PopulationBuilder};
use ep_core::{RunClock, SimRng, Tick, WorldConfig};
use ep_spatial::QuarantineGrid;
use tracing::{debug, info, warn};

use crate::broadcast::{Broadcast, Listener, SubscriptionId};
use crate::{EpochSummary, PopulationSnapshot, ResolvedParams, SimParams, apply_tick};

// ── Control types ─────────────────────────────────────────────────────────────

/// What [`Engine::start`] did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StartOutcome {
    /// A fresh population was created and the run flag set.
    Started,
    /// A run was already active; nothing changed.
    AlreadyRunning,
}

/// How long [`Engine::run`] keeps ticking.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RunLimit {
    /// At most `n` ticks.  The run stays active afterwards and a later call
    /// continues it.
    Ticks(u64),
    /// Until [`Engine::stop`] or a [`StopHandle`] clears the run flag.
    UntilStopped,
}

/// Why [`Engine::run`] returned.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RunEnd {
    /// The run flag was cleared.
    Stopped,
    /// The tick budget of [`RunLimit::Ticks`] was used up.
    LimitReached,
    /// `run` was called with no active run.
    NotRunning,
}

/// Result of one [`Engine::run`] call.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RunReport {
    pub end:          RunEnd,
    /// Ticks executed by this call.
    pub ticks_run:    u64,
    pub last_summary: Option<EpochSummary>,
}

/// Clears the run flag from anywhere: another thread, a signal handler, or a
/// subscriber callback.
///
/// The loop checks the flag once per iteration, before it ticks; a tick in
/// progress always completes and publishes.
#[derive(Clone, Debug, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    /// Clear the run flag.  Idempotent.
    pub fn stop(&self) {
        self.0.store(false, Ordering::SeqCst);
    }

    pub fn is_running(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    fn set_running(&self) {
        self.0.store(true, Ordering::SeqCst);
    }
}

// ── Run state ─────────────────────────────────────────────────────────────────

/// Everything created by one `start`.  Replaced wholesale by the next one.
#[derive(Debug)]
struct Run {
    params:     ResolvedParams,
    grid:       QuarantineGrid,
    population: Population,
    rng:        SimRng,
    clock:      RunClock,
}

// ── Engine ────────────────────────────────────────────────────────────────────

/// Owns the world, the current run, and the subscriber lists.
///
/// The engine is single-writer: whichever thread calls [`Engine::run`] or
/// [`Engine::step`] mutates the population, and subscribers are called on
/// that thread.  Create via [`EngineBuilder`][crate::EngineBuilder].
#[derive(Debug)]
pub struct Engine {
    world:        WorldConfig,
    root_rng:     SimRng,
    runs_started: u64,
    run:          Option<Run>,
    running:      StopHandle,
    next_sub:     u64,
    population:   Broadcast<PopulationSnapshot>,
    summaries:    Broadcast<EpochSummary>,
    last_summary: Option<EpochSummary>,
}

impl Engine {
    pub(crate) fn from_world(world: WorldConfig) -> Self {
        Self {
            root_rng:     SimRng::new(world.seed),
            world,
            runs_started: 0,
            run:          None,
            running:      StopHandle::default(),
            next_sub:     0,
            population:   Broadcast::new(),
            summaries:    Broadcast::new(),
            last_summary: None,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// Clamp `params` and start a fresh run.
    ///
    /// A no-op returning [`StartOutcome::AlreadyRunning`] while a run is
    /// active.  Otherwise any previous (stopped) run is discarded.
    pub fn start(&mut self, params: &SimParams) -> StartOutcome {
        if self.is_running() {
            warn!("simulation already running; start ignored");
            return StartOutcome::AlreadyRunning;
        }
        let resolved = params.resolve(&self.world);
        self.start_resolved(resolved)
    }

    /// Start a fresh run with `params` exactly as given, bypassing clamping.
    pub fn start_resolved(&mut self, params: ResolvedParams) -> StartOutcome {
        if self.is_running() {
            warn!("simulation already running; start ignored");
            return StartOutcome::AlreadyRunning;
        }

        let mut grid = QuarantineGrid::new(self.world.width, self.world.height, params.unit_box_size);
        let mut rng = self.root_rng.child(self.runs_started);
        self.runs_started += 1;

        let population = PopulationBuilder::new(params.population_size)
            .infected_at_start(params.infected_at_start)
            .sickness_interval(params.sickness_interval)
            .heading_sampling(self.world.heading_sampling)
            .build(&mut grid, &mut rng);

        info!(
            run = self.runs_started,
            seed = self.world.seed,
            population = params.population_size,
            infected = params.infected_at_start,
            cells = grid.len(),
            unit_box_size = params.unit_box_size,
            infection_probability = params.infection_probability,
            infection_radius = params.infection_radius,
            death_rate = params.death_rate,
            sickness_interval = params.sickness_interval,
            "simulation started"
        );

        self.run = Some(Run {
            params,
            grid,
            population,
            rng,
            clock: RunClock::new(self.world.tick_interval()),
        });
        self.last_summary = None;
        self.running.set_running();
        StartOutcome::Started
    }

    /// Clear the run flag.  Idempotent; the population is kept for
    /// inspection until the next start.
    pub fn stop(&self) {
        if self.is_running() {
            info!(tick = ?self.current_tick(), "stop requested");
        }
        self.running.stop();
    }

    /// A cloneable handle that stops this engine.
    pub fn stop_handle(&self) -> StopHandle {
        self.running.clone()
    }

    pub fn is_running(&self) -> bool {
        self.running.is_running()
    }

    // ── Subscriptions ─────────────────────────────────────────────────────

    /// Receive a [`PopulationSnapshot`] after every tick.
    pub fn subscribe_population(
        &mut self,
        listener: impl Listener<PopulationSnapshot> + 'static,
    ) -> SubscriptionId {
        let id = self.next_subscription();
        self.population.insert(id, listener);
        id
    }

    /// Receive an [`EpochSummary`] after every tick.
    pub fn subscribe_summary(
        &mut self,
        listener: impl Listener<EpochSummary> + 'static,
    ) -> SubscriptionId {
        let id = self.next_subscription();
        self.summaries.insert(id, listener);
        id
    }

    /// Drop a subscription from whichever stream holds it.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.population.remove(id) || self.summaries.remove(id)
    }

    fn next_subscription(&mut self) -> SubscriptionId {
        let id = SubscriptionId(self.next_sub);
        self.next_sub += 1;
        id
    }

    // ── Driving the loop ──────────────────────────────────────────────────

    /// Execute one tick and publish it.  `None` when no run is active.
    ///
    /// Does not sleep; pacing belongs to [`Engine::run`].
    pub fn step(&mut self) -> Option<EpochSummary> {
        if !self.is_running() {
            return None;
        }
        let run = self.run.as_mut()?;

        run.clock.advance();
        let tick = run.clock.current_tick;
        let summary = apply_tick(tick, &mut run.population, &run.params, &mut run.rng);

        debug!(
            tick = tick.0,
            sick = summary.sick,
            immune = summary.immune,
            dead = summary.dead,
            "tick complete"
        );

        let snapshot = PopulationSnapshot::capture(tick, &run.population);
        self.population.publish(&snapshot);
        self.summaries.publish(&summary);
        self.last_summary = Some(summary);
        Some(summary)
    }

    /// Drive the paced loop on the calling thread.
    ///
    /// Each iteration checks the run flag, ticks, publishes, then sleeps
    /// `WorldConfig::tick_interval_ms` (skipped when zero, and after the last
    /// tick of a [`RunLimit::Ticks`] budget).
    pub fn run(&mut self, limit: RunLimit) -> RunReport {
        if !self.is_running() {
            return RunReport { end: RunEnd::NotRunning, ticks_run: 0, last_summary: None };
        }

        let budget = match limit {
            RunLimit::Ticks(n) => Some(n),
            RunLimit::UntilStopped => None,
        };
        let mut ticks_run = 0u64;
        let mut last = None;

        let end = loop {
            if !self.is_running() {
                break RunEnd::Stopped;
            }
            if budget.is_some_and(|n| ticks_run >= n) {
                break RunEnd::LimitReached;
            }

            let Some(summary) = self.step() else {
                break RunEnd::Stopped;
            };
            ticks_run += 1;
            last = Some(summary);

            let budget_spent = budget.is_some_and(|n| ticks_run >= n);
            if let Some(interval) = self.pacing() {
                if !budget_spent && self.is_running() {
                    std::thread::sleep(interval);
                }
            }
        };

        info!(
            ?end,
            ticks_run,
            clock = %self.run.as_ref().map(|r| r.clock.to_string()).unwrap_or_default(),
            "simulation loop exited"
        );
        RunReport { end, ticks_run, last_summary: last }
    }

    fn pacing(&self) -> Option<Duration> {
        self.run
            .as_ref()
            .filter(|r| r.clock.is_paced())
            .map(|r| r.clock.tick_interval)
    }

    // ── Read accessors ────────────────────────────────────────────────────

    pub fn world(&self) -> &WorldConfig {
        &self.world
    }

    /// The current (or last stopped) run's population.
    pub fn population(&self) -> Option<&Population> {
        self.run.as_ref().map(|r| &r.population)
    }

    pub fn params(&self) -> Option<&ResolvedParams> {
        self.run.as_ref().map(|r| &r.params)
    }

    pub fn grid(&self) -> Option<&QuarantineGrid> {
        self.run.as_ref().map(|r| &r.grid)
    }

    /// Ticks completed in the current run; `Tick::ZERO` right after start.
    pub fn current_tick(&self) -> Option<Tick> {
        self.run.as_ref().map(|r| r.clock.current_tick)
    }

    pub fn last_summary(&self) -> Option<EpochSummary> {
        self.last_summary
    }

    /// Deep copy of the current population, without ticking.
    pub fn snapshot(&self) -> Option<PopulationSnapshot> {
        self.run
            .as_ref()
            .map(|r| PopulationSnapshot::capture(r.clock.current_tick, &r.population))
    }
}
