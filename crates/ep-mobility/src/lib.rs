//! `ep-mobility` — confined random-walk motion for humans.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`heading`] | `Heading` — the 8 compass directions and their sampling   |
//! | [`policy`]  | `MotionPolicy` — fatigue-driven walk inside one cell      |
//!
//! # Movement model
//!
//! Each human walks in a straight line along its current heading at a
//! random speed.  Every accepted step inside the confinement cell raises a
//! fatigue counter; past a grace period each further step is accepted with
//! falling probability.  A rejected step (out of the cell, or refused by the
//! fatigue draw) leaves the human in place for the tick, clears fatigue and
//! picks a new heading.  The walk therefore never leaves its cell.

pub mod heading;
pub mod policy;


pub use heading::Heading;
pub use policy::{MotionPolicy, BASE_ACCEPT_PERCENT, FATIGUE_GRACE, MAX_SPEED, MIN_SPEED};
