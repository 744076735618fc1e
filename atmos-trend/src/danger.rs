//! Detecção de níveis perigosos de O₂ e CO₂

use serde::{Deserialize, Serialize};
use tracing::debug;

use atmos_core::prelude::*;

/// Limiares de perigo
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DangerThresholds {
    /// O₂ abaixo deste valor é perigoso (%)
    pub o2_min: f64,
    /// CO₂ acima deste valor é perigoso (%)
    pub co2_max: f64,
}

impl Default for DangerThresholds {
    fn default() -> Self {
        Self {
            o2_min: 19.5,
            co2_max: 0.1,
        }
    }
}

impl DangerThresholds {
    pub fn o2_dangerous(&self, o2_pct: f64) -> bool {
        o2_pct < self.o2_min
    }

    pub fn co2_dangerous(&self, co2_pct: f64) -> bool {
        co2_pct > self.co2_max
    }
}

/// Primeira amostra que cruzou um limiar
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DangerEvent {
    pub index: usize,
    pub time_min: f64,
    pub value: f64,
}

/// Resultado da varredura de perigo
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DangerScan {
    /// Primeiro O₂ abaixo do limiar, se houver
    pub o2: Option<DangerEvent>,
    /// Primeiro CO₂ acima do limiar, se houver
    pub co2: Option<DangerEvent>,
    pub min_o2: Option<f64>,
    pub max_co2: Option<f64>,
}

impl DangerScan {
    pub fn any(&self) -> bool {
        self.o2.is_some() || self.co2.is_some()
    }

    pub fn event(&self, gas: Gas) -> Option<&DangerEvent> {
        match gas {
            Gas::O2 => self.o2.as_ref(),
            Gas::Co2 => self.co2.as_ref(),
        }
    }
}

fn first_crossing(
    series: &TimeSeries,
    value_of: impl Fn(&Sample) -> f64,
    crossed: impl Fn(f64) -> bool,
) -> Option<DangerEvent> {
    series.iter().enumerate().find_map(|(index, s)| {
        let value = value_of(s);
        crossed(value).then_some(DangerEvent {
            index,
            time_min: s.time_min,
            value,
        })
    })
}

/// Varre a série com os limiares padrão
pub fn danger_scan(series: &TimeSeries) -> DangerScan {
    danger_scan_with(series, &DangerThresholds::default())
}

/// Varre a série procurando o primeiro cruzamento de cada limiar
pub fn danger_scan_with(series: &TimeSeries, thresholds: &DangerThresholds) -> DangerScan {
    let scan = DangerScan {
        o2: first_crossing(series, |s| s.o2_pct, |v| thresholds.o2_dangerous(v)),
        co2: first_crossing(series, |s| s.co2_pct, |v| thresholds.co2_dangerous(v)),
        min_o2: atmos_core::stats::min(&series.o2()),
        max_co2: atmos_core::stats::max(&series.co2()),
    };

    debug!(
        samples = series.len(),
        o2_event = ?scan.o2.map(|e| e.time_min),
        co2_event = ?scan.co2.map(|e| e.time_min),
        "danger scan complete"
    );
    scan
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(times: &[f64], o2: &[f64], co2: &[f64]) -> TimeSeries {
        TimeSeries::new(
            times
                .iter()
                .zip(o2)
                .zip(co2)
                .map(|((&t, &o), &c)| Sample::simulated(t, o, c))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_first_o2_crossing() {
        let s = series(&[0.0, 1.0, 2.0, 3.0], &[21.0, 20.0, 19.0, 18.0], &[0.04; 4]);
        let scan = danger_scan(&s);
        let event = scan.o2.unwrap();
        assert_eq!(event.index, 2);
        assert_eq!(event.time_min, 2.0);
        assert_eq!(event.value, 19.0);
        assert!(scan.co2.is_none());
        assert_eq!(scan.min_o2, Some(18.0));
        assert_eq!(scan.max_co2, Some(0.04));
    }

    #[test]
    fn test_threshold_values_are_not_dangerous() {
        let s = series(&[0.0, 1.0], &[19.5, 19.5], &[0.1, 0.1]);
        let scan = danger_scan(&s);
        assert!(!scan.any());
    }

    #[test]
    fn test_first_co2_crossing() {
        let s = series(&[0.0, 5.0, 10.0], &[21.0; 3], &[0.08, 0.11, 0.2]);
        let event = danger_scan(&s).co2.unwrap();
        assert_eq!(event.index, 1);
        assert_eq!(event.time_min, 5.0);
        assert_eq!(event.value, 0.11);
    }

    #[test]
    fn test_custom_thresholds() {
        let s = series(&[0.0, 1.0], &[21.0, 20.5], &[0.04, 0.05]);
        let th = DangerThresholds { o2_min: 20.8, co2_max: 0.045 };
        let scan = danger_scan_with(&s, &th);
        assert_eq!(scan.event(Gas::O2).map(|e| e.index), Some(1));
        assert_eq!(scan.event(Gas::Co2).map(|e| e.index), Some(1));
    }

    #[test]
    fn test_empty_series() {
        let scan = danger_scan(&TimeSeries::empty());
        assert!(!scan.any());
        assert!(scan.min_o2.is_none());
        assert!(scan.max_co2.is_none());
    }
}
