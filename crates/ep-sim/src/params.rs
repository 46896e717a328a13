//! Epidemiological parameters and their clamping rules.
//!
//! [`SimParams`] is raw user input: every field is optional in serialized
//! form and may hold any value.  [`SimParams::resolve`] maps it onto the
//! valid ranges below.  Out-of-range values are clamped, never rejected.
//!
//! | Parameter               | Valid range                        | Out of range                  |
//! |-------------------------|------------------------------------|-------------------------------|
//! | `population_size`       | `[10, 1000]`                       | nearest bound                 |
//! | `unit_box_size`         | `[10, (width + height) / 2]`       | nearest bound                 |
//! | `infection_probability` | `[10, 100]`                        | nearest bound                 |
//! | `infection_radius`      | `[5, 100]`                         | nearest bound                 |
//! | `death_rate`            | `(0, 100]`                         | `<= 0` → 1, `> 100` → 100     |
//! | `sickness_interval`     | `[5, 70]`                          | nearest bound                 |
//! | `infected_at_start`     | `(0, population_size / 2]`         | `<= 0` → 1, above → bound     |
//!
//! Every field is an `f64` so any JSON number is accepted.  The three counts
//! (`population_size`, `sickness_interval`, `infected_at_start`) are floored
//! before clamping.  The `infected_at_start` bound uses the clamped
//! population size.  NaN falls back to the lower bound.

use ep_core::WorldConfig;

pub const MIN_POPULATION: f64 = 10.0;
pub const MAX_POPULATION: f64 = 1000.0;
pub const MIN_UNIT_BOX_SIZE: f64 = 10.0;
pub const MIN_INFECTION_PROBABILITY: f64 = 10.0;
pub const MIN_INFECTION_RADIUS: f64 = 5.0;
pub const MAX_INFECTION_RADIUS: f64 = 100.0;
pub const DEATH_RATE_FLOOR: f64 = 1.0;
pub const MIN_SICKNESS_INTERVAL: f64 = 5.0;
pub const MAX_SICKNESS_INTERVAL: f64 = 70.0;

const MAX_PERCENT: f64 = 100.0;

// ── SimParams ─────────────────────────────────────────────────────────────────

/// Raw, unvalidated parameters for one run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimParams {
    /// Number of humans.
    pub population_size: f64,

    /// Side of one quarantine cell, in world units.
    pub unit_box_size: f64,

    /// Percent chance that an exposed human gets infected on a tick.
    pub infection_probability: f64,

    /// Exposure distance, exclusive.
    pub infection_radius: f64,

    /// Percent chance that an expiring infection kills.
    pub death_rate: f64,

    /// Ticks an infection lasts before it resolves.
    pub sickness_interval: f64,

    /// Humans infected at tick zero.  `None` means a tenth of the raw
    /// `population_size`.
    pub infected_at_start: Option<f64>,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            population_size:       100.0,
            unit_box_size:         25.0,
            infection_probability: 90.0,
            infection_radius:      100.0,
            death_rate:            10.0,
            sickness_interval:     10.0,
            infected_at_start:     None,
        }
    }
}

impl SimParams {
    /// Clamp every field into its valid range for `world`.
    pub fn resolve(&self, world: &WorldConfig) -> ResolvedParams {
        let population_size = clamp_or_floor(
            self.population_size.floor(),
            MIN_POPULATION,
            MAX_POPULATION,
        );

        let requested = match self.infected_at_start {
            Some(n) => n.floor(),
            None => (self.population_size.floor() / 10.0).floor(),
        };
        let infected_at_start = if requested.is_nan() || requested <= 0.0 {
            1.0
        } else {
            requested.min((population_size / 2.0).floor())
        };

        let death_rate = if self.death_rate.is_nan() || self.death_rate <= 0.0 {
            DEATH_RATE_FLOOR
        } else {
            self.death_rate.min(MAX_PERCENT)
        };

        ResolvedParams {
            population_size:       population_size as usize,
            unit_box_size:         clamp_or_floor(
                self.unit_box_size,
                MIN_UNIT_BOX_SIZE,
                world.half_perimeter().max(MIN_UNIT_BOX_SIZE),
            ),
            infection_probability: clamp_or_floor(
                self.infection_probability,
                MIN_INFECTION_PROBABILITY,
                MAX_PERCENT,
            ),
            infection_radius:      clamp_or_floor(
                self.infection_radius,
                MIN_INFECTION_RADIUS,
                MAX_INFECTION_RADIUS,
            ),
            death_rate,
            sickness_interval:     clamp_or_floor(
                self.sickness_interval.floor(),
                MIN_SICKNESS_INTERVAL,
                MAX_SICKNESS_INTERVAL,
            ) as u32,
            infected_at_start:     infected_at_start as usize,
        }
    }
}

/// `value.clamp(lo, hi)`, except NaN maps to `lo`.
fn clamp_or_floor(value: f64, lo: f64, hi: f64) -> f64 {
    if value.is_nan() { lo } else { value.clamp(lo, hi) }
}

// ── ResolvedParams ────────────────────────────────────────────────────────────

/// Parameters a run actually uses.
///
/// Normally produced by [`SimParams::resolve`].  Building one by hand and
/// passing it to `Engine::start_resolved` skips clamping, which calibration
/// runs and tests use to reach values such as a zero infection probability.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolvedParams {
    pub population_size:       usize,
    pub unit_box_size:         f64,
    pub infection_probability: f64,
    pub infection_radius:      f64,
    pub death_rate:            f64,
    pub sickness_interval:     u32,
    pub infected_at_start:     usize,
}

impl Default for ResolvedParams {
    fn default() -> Self {
        SimParams::default().resolve(&WorldConfig::default())
    }
}
