//! Deterministic per-agent and engine-level RNG wrappers.
//!
//! # Determinism strategy
//!
//! The engine owns one root `SimRng` seeded from `WorldConfig::seed`.  Each
//! run derives a child `SimRng` from it, and every human gets an `AgentRng`
//! seeded by:
//!
//!   seed = run_seed XOR (agent_id * MIXING_CONSTANT)
//!
//! Motion draws come from the agent's own stream while infection and
//! outcome draws come from the run's `SimRng`, so the walk of one agent does
//! not shift the epidemiological draws of another.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::AgentId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── AgentRng ──────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG, owned by the agent's motion policy.
#[derive(Clone, Debug)]
pub struct AgentRng(SmallRng);

impl AgentRng {
    /// Seed deterministically from the run seed and an agent ID.
    pub fn new(run_seed: u64, agent: AgentId) -> Self {
        let seed = run_seed ^ (agent.0 as u64).wrapping_mul(MIXING_CONSTANT);
        AgentRng(SmallRng::seed_from_u64(seed))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// A whole-number percentage, uniform over `0..100`.
    ///
    /// Unlike [`SimRng::percent`], the draw is an integer.
    #[inline]
    pub fn whole_percent(&mut self) -> u32 {
        self.0.gen_range(0..100)
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Engine-level RNG for cell allocation and epidemiological draws.
///
/// Single-threaded by construction: the tick loop has exactly one writer.
#[derive(Clone, Debug)]
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng` with a different seed offset, e.g. one per
    /// simulation run.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// A continuous percentage draw in `[0, 100)`.
    ///
    /// Unlike [`AgentRng::whole_percent`], the draw is an `f64`.
    #[inline]
    pub fn percent(&mut self) -> f64 {
        self.0.gen_range(0.0..100.0)
    }
}
