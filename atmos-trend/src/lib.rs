//! # atmos-trend
//!
//! Análise de tendência de séries O₂/CO₂: taxa de variação (primeira
//! derivada) e aceleração (segunda derivada) por diferenças centrais,
//! classificadas em rótulos qualitativos.
//!
//! ## Módulos
//!
//! - [`derivative`] - Gradiente numérico com passo uniforme
//! - [`analyze`] - Relatório de tendência por gás
//! - [`danger`] - Primeiro cruzamento dos limiares de perigo
//! - [`summary`] - Estatísticas e inclinação linear
//! - [`compare`] - Diferenças entre dois cenários
//!
//! ```rust
//! use atmos_core::prelude::*;
//! use atmos_trend::analyze;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let series = TimeSeries::new(
//!     (0..6)
//!         .map(|i| Sample::simulated(i as f64, 21.0, 0.04 + 0.001 * i as f64))
//!         .collect(),
//! )?;
//! let report = analyze(&series)?;
//! assert_eq!(report.co2.trend_label, TrendLabel::Increasing);
//! # Ok(())
//! # }
//! ```

pub mod analyze;
pub mod compare;
pub mod danger;
pub mod derivative;
pub mod summary;

pub use analyze::{analyze, analyze_with, derivatives, Derivatives, GasDerivatives};
pub use compare::{compare, compare_with, Comparison, GasDelta};
pub use danger::{danger_scan, danger_scan_with, DangerEvent, DangerScan, DangerThresholds};
pub use derivative::{gradient, mean_step};
pub use summary::{linear_slope, summarize, summarize_with, GasSummary, SeriesSummary};
