//! Comparação entre dois cenários

use serde::{Deserialize, Serialize};

use atmos_core::prelude::*;
use crate::analyze::analyze_with;

/// Diferença `b − a` para um gás
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GasDelta {
    pub final_delta: f64,
    pub mean_rate_delta: f64,
}

/// Relatórios dos dois cenários e as diferenças entre eles
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub a: TrendReport,
    pub b: TrendReport,
    pub o2: GasDelta,
    pub co2: GasDelta,
}

impl Comparison {
    pub fn delta(&self, gas: Gas) -> &GasDelta {
        match gas {
            Gas::O2 => &self.o2,
            Gas::Co2 => &self.co2,
        }
    }
}

/// Compara duas séries com os limiares padrão
pub fn compare(a: &TimeSeries, b: &TimeSeries) -> AtmosResult<Comparison> {
    compare_with(a, b, &TrendThresholds::default())
}

pub fn compare_with(a: &TimeSeries, b: &TimeSeries, thresholds: &TrendThresholds) -> AtmosResult<Comparison> {
    let report_a = analyze_with(a, thresholds)?;
    let report_b = analyze_with(b, thresholds)?;

    // analyze garante ao menos 2 amostras em cada série
    let (Some(last_a), Some(last_b)) = (a.last(), b.last()) else {
        return Err(AtmosError::InsufficientData { required: 2, actual: 0 });
    };

    Ok(Comparison {
        o2: GasDelta {
            final_delta: last_b.o2_pct - last_a.o2_pct,
            mean_rate_delta: report_b.o2.mean_rate - report_a.o2.mean_rate,
        },
        co2: GasDelta {
            final_delta: last_b.co2_pct - last_a.co2_pct,
            mean_rate_delta: report_b.co2.mean_rate - report_a.co2.mean_rate,
        },
        a: report_a,
        b: report_b,
    })
}
