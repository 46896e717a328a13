//! Shared error type.
//!
//! Only process configuration can fail; running a simulation never does.

use thiserror::Error;

/// The base error type for `ep-*` crates.
#[derive(Debug, Error)]
pub enum EpError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `ep-*` crates.
pub type EpResult<T> = Result<T, EpError>;
