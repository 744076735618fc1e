//! # 🌬️ atmos-core
//!
//! Modelo de dados e contratos do pipeline atmos: simulação de O₂/CO₂
//! em ambientes internos, previsão por modelo externo, reconciliação da
//! incerteza e análise de tendência.
//!
//! ## Fluxo
//!
//! ```text
//! EnvironmentConfig ──simulate──▶ TimeSeries(simulated) ──┐
//!                                                        ├──stitch──▶ TimeSeries ──analyze──▶ TrendReport
//! Forecaster ──predict──▶ ForecastOutput ──reconcile─────┘
//! ```
//!
//! Todos os estágios são puros e síncronos: entradas imutáveis, saídas
//! recém-alocadas, nenhum estado global.
//!
//! ## Módulos
//!
//! - [`config`] - Configuração do ambiente
//! - [`series`] - Amostras, segmentos e séries temporais
//! - [`forecast`] - Fronteira com modelos de previsão
//! - [`report`] - Relatório de tendência e limiares
//! - [`stats`] - Média, desvio padrão e reta de mínimos quadrados
//! - [`traits`] - Traits plugáveis
//! - [`error`] - Tratamento de erros

pub mod config;
pub mod error;
pub mod forecast;
pub mod report;
pub mod series;
pub mod stats;
pub mod traits;
pub mod prelude;

pub use config::EnvironmentConfig;
pub use error::{AtmosError, AtmosResult};
pub use forecast::{FeatureMatrix, FeatureRow, ForecastOutput, UncertaintyArray, FEATURE_NAMES};
pub use report::{AccelerationLabel, Gas, GasTrend, TrendLabel, TrendReport, TrendThresholds};
pub use series::{Sample, Segment, SeriesColumns, TimeSeries};
pub use stats::LinearFit;
pub use traits::{AtmosComponent, Forecaster};

/// Concentração inicial de O₂ (%)
pub const BASELINE_O2_PCT: f64 = 21.0;

/// Concentração inicial de CO₂ (%)
pub const BASELINE_CO2_PCT: f64 = 0.04;

/// Piso físico de O₂ (%)
pub const O2_FLOOR_PCT: f64 = 10.0;

/// Teto físico de O₂ (%)
pub const O2_CEILING_PCT: f64 = 100.0;

/// Piso físico de CO₂ (%)
pub const CO2_FLOOR_PCT: f64 = 0.0;
