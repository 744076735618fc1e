//! Erros do pipeline atmos

use thiserror::Error;

pub type AtmosResult<T> = Result<T, AtmosError>;

/// Erros de simulação, reconciliação, costura e análise
///
/// Todos são recuperáveis pelo chamador. Os clamps físicos (piso de O₂/CO₂,
/// piso do fator de ventilação) não são erros.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AtmosError {
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    #[error("Shape mismatch: expected {expected}, got {actual}")]
    ShapeMismatch { expected: String, actual: String },

    #[error("Length mismatch: {predictions} predictions vs {uncertainty} uncertainty values")]
    LengthMismatch { predictions: usize, uncertainty: usize },

    #[error("Insufficient data: need at least {required} samples, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    #[error("Invalid time axis: {0}")]
    InvalidTimeAxis(String),

    #[error("Forecast failed: {0}")]
    Forecast(String),
}

impl AtmosError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        AtmosError::Configuration(msg.into())
    }
}
