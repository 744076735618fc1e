//! Resumo estatístico de uma série

use serde::{Deserialize, Serialize};

use atmos_core::prelude::*;
use atmos_core::stats::{self, LinearFit};
use crate::danger::DangerThresholds;

/// Inclinação de mínimos quadrados de `values` contra `times`
///
/// `None` com menos de 2 pontos, tamanhos diferentes ou tempos todos iguais.
pub fn linear_slope(times: &[f64], values: &[f64]) -> Option<f64> {
    LinearFit::fit(times, values).map(|fit| fit.slope)
}

/// Estatísticas de um gás ao longo da série
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GasSummary {
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    #[serde(rename = "final")]
    pub final_value: f64,
    /// Inclinação linear (%/min), ausente com menos de 2 amostras
    pub slope: Option<f64>,
}

impl GasSummary {
    fn from_values(times: &[f64], values: &[f64]) -> AtmosResult<Self> {
        let insufficient = || AtmosError::InsufficientData {
            required: 1,
            actual: values.len(),
        };
        Ok(Self {
            mean: stats::mean(values).ok_or_else(insufficient)?,
            min: stats::min(values).ok_or_else(insufficient)?,
            max: stats::max(values).ok_or_else(insufficient)?,
            final_value: values.last().copied().ok_or_else(insufficient)?,
            slope: linear_slope(times, values),
        })
    }
}

/// Resumo da série com indicadores de perigo no fim
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesSummary {
    pub samples: usize,
    pub duration_min: f64,
    pub o2: GasSummary,
    pub co2: GasSummary,
    /// O₂ final abaixo do limiar
    pub o2_danger_at_end: bool,
    /// CO₂ final acima do limiar
    pub co2_danger_at_end: bool,
}

impl SeriesSummary {
    pub fn gas(&self, gas: Gas) -> &GasSummary {
        match gas {
            Gas::O2 => &self.o2,
            Gas::Co2 => &self.co2,
        }
    }
}

/// Resumo com os limiares de perigo padrão
pub fn summarize(series: &TimeSeries) -> AtmosResult<SeriesSummary> {
    summarize_with(series, &DangerThresholds::default())
}

pub fn summarize_with(series: &TimeSeries, thresholds: &DangerThresholds) -> AtmosResult<SeriesSummary> {
    let times = series.times();
    let o2 = GasSummary::from_values(&times, &series.o2())?;
    let co2 = GasSummary::from_values(&times, &series.co2())?;
    let duration_min = match (series.first(), series.last()) {
        (Some(first), Some(last)) => last.time_min - first.time_min,
        _ => 0.0,
    };

    Ok(SeriesSummary {
        samples: series.len(),
        duration_min,
        o2_danger_at_end: thresholds.o2_dangerous(o2.final_value),
        co2_danger_at_end: thresholds.co2_dangerous(co2.final_value),
        o2,
        co2,
    })
}
