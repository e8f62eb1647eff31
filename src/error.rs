//! Crate error type

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Raw kind index outside the known target kinds
    #[error("entity kind {0} is out of range")]
    InvalidKind(u8),

    /// Settings blob could not be parsed
    #[error("invalid settings: {0}")]
    Settings(#[from] serde_json::Error),
}
