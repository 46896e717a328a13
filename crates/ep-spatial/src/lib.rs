//! `ep-spatial` — quarantine grid and proximity indexing.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`grid`]     | `QuarantineGrid`, `QuarantineBox`, `Allocation`            |
//! | [`exposure`] | `ExposureIndex` — R-tree over infected positions           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod exposure;
pub mod grid;


pub use exposure::ExposureIndex;
pub use grid::{Allocation, MAX_CELLS, QuarantineBox, QuarantineGrid};
