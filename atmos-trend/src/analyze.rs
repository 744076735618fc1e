//! Análise de tendência: taxa de variação e aceleração por gás

use serde::{Deserialize, Serialize};
use tracing::debug;

use atmos_core::prelude::*;
use atmos_core::stats;
use crate::derivative::{gradient, mean_step};

/// Séries de primeira e segunda derivada de um gás
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GasDerivatives {
    /// Taxa de variação por amostra (%/min)
    pub rate: Vec<f64>,
    /// Aceleração por amostra (%/min²)
    pub acceleration: Vec<f64>,
}

impl GasDerivatives {
    fn from_values(values: &[f64], step: f64) -> Self {
        let rate = gradient(values, step);
        let acceleration = gradient(&rate, step);
        Self { rate, acceleration }
    }

    fn summarize(&self, thresholds: &TrendThresholds) -> GasTrend {
        GasTrend::classify(
            stats::mean(&self.rate).unwrap_or(0.0),
            stats::mean(&self.acceleration).unwrap_or(0.0),
            thresholds,
        )
    }
}

/// Derivadas completas de uma série
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Derivatives {
    /// Passo uniforme usado (média dos intervalos)
    pub step_min: f64,
    pub o2: GasDerivatives,
    pub co2: GasDerivatives,
}

/// Calcula taxa e aceleração de O₂ e CO₂
///
/// Exige pelo menos 2 amostras.
pub fn derivatives(series: &TimeSeries) -> AtmosResult<Derivatives> {
    let times = series.times();
    let step_min = mean_step(&times).ok_or(AtmosError::InsufficientData {
        required: 2,
        actual: series.len(),
    })?;

    Ok(Derivatives {
        step_min,
        o2: GasDerivatives::from_values(&series.o2(), step_min),
        co2: GasDerivatives::from_values(&series.co2(), step_min),
    })
}

/// Relatório de tendência com os limiares padrão
pub fn analyze(series: &TimeSeries) -> AtmosResult<TrendReport> {
    analyze_with(series, &TrendThresholds::default())
}

/// Relatório de tendência com limiares específicos
pub fn analyze_with(series: &TimeSeries, thresholds: &TrendThresholds) -> AtmosResult<TrendReport> {
    let d = derivatives(series)?;
    let report = TrendReport {
        o2: d.o2.summarize(thresholds),
        co2: d.co2.summarize(thresholds),
    };

    debug!(
        samples = series.len(),
        step_min = d.step_min,
        o2_trend = %report.o2.trend_label,
        co2_trend = %report.co2.trend_label,
        "trend analysis complete"
    );
    Ok(report)
}
