use thiserror::Error;

use crate::PersistError;

#[derive(Debug, Error)]
pub enum EngineError {
    /// The simulated backend rejected the call.
    #[error("{operation} failed: simulated network error")]
    Simulated { operation: &'static str },
    #[error("session slot unavailable: {0}")]
    Persist(#[from] PersistError),
    #[error("session encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}
