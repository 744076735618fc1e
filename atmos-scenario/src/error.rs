//! Erros do armazenamento de cenários

use atmos_core::AtmosError;
use thiserror::Error;

pub type ScenarioResult<T> = Result<T, ScenarioError>;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("Scenario not found: {user}/{name}")]
    NotFound { user: String, name: String },

    #[error("Invalid {kind} name: {value:?}")]
    InvalidName { kind: &'static str, value: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Atmos(#[from] AtmosError),
}

impl ScenarioError {
    pub(crate) fn not_found(user: &str, name: &str) -> Self {
        Self::NotFound {
            user: user.to_string(),
            name: name.to_string(),
        }
    }
}
