//! Prelude com os tipos usados em todo o pipeline

pub use crate::config::EnvironmentConfig;
pub use crate::error::{AtmosError, AtmosResult};
pub use crate::forecast::{FeatureMatrix, FeatureRow, ForecastOutput, UncertaintyArray};
pub use crate::report::{
    AccelerationLabel, Gas, GasTrend, TrendLabel, TrendReport, TrendThresholds,
};
pub use crate::series::{Sample, Segment, SeriesColumns, TimeSeries};
pub use crate::traits::{AtmosComponent, Forecaster};
