//! `ep-sim` — outbreak engine for the rust_epi simulator.
//!
//! # Run lifecycle
//!
//! ```text
//! start(params)   clamp → grid → population → running = true
//! run(limit)      loop {
//!                   running?      else exit
//!                   ① exposure set from Infected positions
//!                   ② move / resolve / infect / tally each human
//!                   ③ publish PopulationSnapshot, then EpochSummary
//!                   ④ sleep tick_interval_ms
//!                 }
//! stop()          running = false (observed at the next loop header)
//! ```
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`params`]    | `SimParams` (raw) and `ResolvedParams` (clamped)          |
//! | [`tick`]      | `apply_tick` — the per-tick state machine                 |
//! | [`snapshot`]  | `PopulationSnapshot`, `AgentSnapshot`, `EpochSummary`     |
//! | [`broadcast`] | `Listener`, `Broadcast`, `SubscriptionId`                 |
//! | [`engine`]    | `Engine`, `StopHandle`, `RunLimit`, `RunReport`           |
//! | [`builder`]   | `EngineBuilder`                                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Serializes snapshots and summaries; deserializes params.     |

pub mod broadcast;
pub mod builder;
pub mod engine;
pub mod error;
pub mod params;
pub mod snapshot;
pub mod tick;

#[cfg(test)]
mod tests;

pub use broadcast::{Broadcast, Listener, SubscriptionId};
pub use builder::EngineBuilder;
pub use engine::{Engine, RunEnd, RunLimit, RunReport, StartOutcome, StopHandle};
pub use error::{SimError, SimResult};
pub use params::{ResolvedParams, SimParams};
pub use snapshot::{AgentSnapshot, EpochSummary, PopulationSnapshot};
pub use tick::apply_tick;
