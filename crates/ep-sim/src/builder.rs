//! Fluent builder for constructing an [`Engine`].

use ep_core::{HeadingSampling, WorldConfig};
use ep_spatial::{MAX_CELLS, QuarantineGrid};

use crate::params::MIN_UNIT_BOX_SIZE;
use crate::{Engine, SimError, SimResult};

/// Fluent builder for [`Engine`].
///
/// Starts from [`WorldConfig::default`] (800 × 600, 100 ms, seed 42, legacy
/// heading sampler); each method overrides one field.
///
/// # Example
///
/// ```rust
/// use ep_sim::{EngineBuilder, RunLimit, SimParams};
///
/// let mut engine = EngineBuilder::new()
///     .seed(7)
///     .tick_interval_ms(0)
///     .build()?;
/// engine.subscribe_summary(|s: &ep_sim::EpochSummary| println!("{s}"));
/// engine.start(&SimParams::default());
/// engine.run(RunLimit::Ticks(3));
/// # Ok::<(), ep_sim::SimError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct EngineBuilder {
    world: WorldConfig,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing world configuration.
    pub fn from_world(world: WorldConfig) -> Self {
        Self { world }
    }

    pub fn world_size(mut self, width: f64, height: f64) -> Self {
        self.world.width = width;
        self.world.height = height;
        self
    }

    pub fn tick_interval_ms(mut self, ms: u64) -> Self {
        self.world.tick_interval_ms = ms;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.world.seed = seed;
        self
    }

    pub fn heading_sampling(mut self, sampling: HeadingSampling) -> Self {
        self.world.heading_sampling = sampling;
        self
    }

    /// Validate the world and return an idle engine.
    ///
    /// Rejects worlds that a grid of the smallest allowed cell size could not
    /// cover within `MAX_CELLS` cells.
    pub fn build(self) -> SimResult<Engine> {
        self.world.validate()?;
        if self.world.width < 1.0 || self.world.height < 1.0 {
            return Err(SimError::Config(format!(
                "world {}×{} is too small to hold a human",
                self.world.width, self.world.height
            )));
        }
        let cells = QuarantineGrid::cell_count(self.world.width, self.world.height, MIN_UNIT_BOX_SIZE);
        if cells > MAX_CELLS {
            return Err(SimError::Config(format!(
                "world {}×{} needs {cells} cells at unit {MIN_UNIT_BOX_SIZE}, limit is {MAX_CELLS}",
                self.world.width, self.world.height
            )));
        }
        Ok(Engine::from_world(self.world))
    }
}
