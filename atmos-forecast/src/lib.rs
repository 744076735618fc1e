//! # atmos-forecast
//!
//! Adaptador de previsão: aceita a saída de qualquer [`Forecaster`]
//! (previsões `(N, 2)` + incerteza de forma arbitrária), normaliza a
//! incerteza e costura os pontos previstos na série simulada.
//!
//! ## Estágios
//!
//! - [`reconcile`] - Incerteza arbitrária → vetor `(N,)`
//! - [`stitch`] - Série simulada + previsão → série combinada
//! - [`models`] - Variantes de modelo (persistência, ensemble de tendências)
//! - [`pipeline`] - Execução ponta a ponta
//!
//! ```rust
//! use atmos_core::EnvironmentConfig;
//! use atmos_forecast::{run_forecast, ForecastRequest, ModelKind};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = EnvironmentConfig { duration_min: 60.0, dt_min: 1.0, ..Default::default() };
//! let request = ForecastRequest::new(config, 20.0).with_model(ModelKind::Persistence);
//! let run = run_forecast(&request)?;
//! assert_eq!(run.combined.len(), 61 + 20);
//! # Ok(())
//! # }
//! ```
//!
//! [`Forecaster`]: atmos_core::Forecaster

pub mod models;
pub mod pipeline;
pub mod reconcile;
pub mod stitch;

pub use models::{EnsembleConfig, EnsembleTrendForecaster, ModelKind, PersistenceForecaster};
pub use pipeline::{extend_with_forecast, horizon_steps, run_forecast, ForecastRequest, ForecastRun};
pub use reconcile::{reconcile, reconcile_with_report, ReconcileAction, Reconciled};
pub use stitch::stitch;
