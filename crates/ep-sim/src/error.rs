use ep_core::EpError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("engine configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] EpError),
}

pub type SimResult<T> = Result<T, SimError>;
