//! `ep-agent` — humans and the population they live in.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`health`]  | `HealthState`, `Color` (derived from state)               |
//! | [`human`]   | `Human` — one agent's position, motion and health         |
//! | [`store`]   | `Population` — dense `Vec<Human>` indexed by `AgentId`    |
//! | [`builder`] | `PopulationBuilder` (fluent construction over a grid)     |
//!
//! Humans are never referenced by pointer: everything outside this crate
//! addresses them by [`AgentId`](ep_core::AgentId), and observers only ever
//! see copies.

pub mod builder;
pub mod health;
pub mod human;
pub mod store;

#[cfg(test)]
mod tests;

pub use builder::PopulationBuilder;
pub use health::{Color, HealthState};
pub use human::Human;
pub use store::Population;
