//! `ep-core` — foundational types for the `rust_epi` outbreak simulator.
//!
//! Every other `ep-*` crate depends on this one.  It has no `ep-*`
//! dependencies and keeps its external ones to `rand` and `thiserror`, plus
//! optional `serde`.
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `CellId`                                   |
//! | [`geo`]         | `Point`, `Rect`, Euclidean proximity                  |
//! | [`time`]        | `Tick`, `RunClock`                                    |
//! | [`rng`]         | `AgentRng` (per-agent), `SimRng` (engine-wide)        |
//! | [`config`]      | `WorldConfig`, `HeadingSampling`                      |
//! | [`error`]       | `EpError`, `EpResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{HeadingSampling, WorldConfig};
pub use error::{EpError, EpResult};
pub use geo::{Point, Rect};
pub use ids::{AgentId, CellId};
pub use rng::{AgentRng, SimRng};
pub use time::{RunClock, Tick};
