//! Relatório de tendência por gás

use std::fmt;

use serde::{Deserialize, Serialize};

/// Gases acompanhados pelo pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gas {
    O2,
    Co2,
}

impl Gas {
    pub const ALL: [Gas; 2] = [Gas::O2, Gas::Co2];

    /// Rótulo para exibição
    pub fn label(&self) -> &'static str {
        match self {
            Gas::O2 => "O₂",
            Gas::Co2 => "CO₂",
        }
    }
}

impl fmt::Display for Gas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Sentido da taxa média de variação
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendLabel {
    Increasing,
    Decreasing,
    Stable,
}

impl TrendLabel {
    /// Classifica uma taxa: `|rate| > threshold` define o sentido
    pub fn classify(rate: f64, threshold: f64) -> Self {
        if rate > threshold {
            TrendLabel::Increasing
        } else if rate < -threshold {
            TrendLabel::Decreasing
        } else {
            TrendLabel::Stable
        }
    }
}

impl fmt::Display for TrendLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrendLabel::Increasing => write!(f, "increasing"),
            TrendLabel::Decreasing => write!(f, "decreasing"),
            TrendLabel::Stable => write!(f, "stable"),
        }
    }
}

/// Sentido da aceleração média
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccelerationLabel {
    Accelerating,
    Decelerating,
    Constant,
}

impl AccelerationLabel {
    pub fn classify(acceleration: f64, threshold: f64) -> Self {
        if acceleration > threshold {
            AccelerationLabel::Accelerating
        } else if acceleration < -threshold {
            AccelerationLabel::Decelerating
        } else {
            AccelerationLabel::Constant
        }
    }
}

impl fmt::Display for AccelerationLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccelerationLabel::Accelerating => write!(f, "accelerating"),
            AccelerationLabel::Decelerating => write!(f, "decelerating"),
            AccelerationLabel::Constant => write!(f, "constant"),
        }
    }
}

/// Limiares de classificação (%/min e %/min²)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendThresholds {
    pub rate: f64,
    pub acceleration: f64,
}

impl Default for TrendThresholds {
    fn default() -> Self {
        Self {
            rate: 0.0005,
            acceleration: 0.0002,
        }
    }
}

/// Estatísticas de derivada de um gás
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GasTrend {
    /// Taxa média de variação (%/min)
    pub mean_rate: f64,
    /// Aceleração média (%/min²)
    pub mean_acceleration: f64,
    pub trend_label: TrendLabel,
    pub acceleration_label: AccelerationLabel,
}

impl GasTrend {
    pub fn classify(mean_rate: f64, mean_acceleration: f64, thresholds: &TrendThresholds) -> Self {
        Self {
            mean_rate,
            mean_acceleration,
            trend_label: TrendLabel::classify(mean_rate, thresholds.rate),
            acceleration_label: AccelerationLabel::classify(
                mean_acceleration,
                thresholds.acceleration,
            ),
        }
    }
}

/// Relatório de tendência para O₂ e CO₂
///
/// Derivado e recalculado a cada análise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendReport {
    pub o2: GasTrend,
    pub co2: GasTrend,
}

impl TrendReport {
    pub fn gas(&self, gas: Gas) -> &GasTrend {
        match gas {
            Gas::O2 => &self.o2,
            Gas::Co2 => &self.co2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_classification_boundaries() {
        let th = TrendThresholds::default();
        assert_eq!(TrendLabel::classify(0.0006, th.rate), TrendLabel::Increasing);
        assert_eq!(TrendLabel::classify(-0.0006, th.rate), TrendLabel::Decreasing);
        assert_eq!(TrendLabel::classify(0.0005, th.rate), TrendLabel::Stable);
        assert_eq!(TrendLabel::classify(-0.0005, th.rate), TrendLabel::Stable);
    }

    #[test]
    fn test_acceleration_classification_boundaries() {
        let th = TrendThresholds::default();
        assert_eq!(
            AccelerationLabel::classify(0.00021, th.acceleration),
            AccelerationLabel::Accelerating
        );
        assert_eq!(
            AccelerationLabel::classify(-0.00021, th.acceleration),
            AccelerationLabel::Decelerating
        );
        assert_eq!(
            AccelerationLabel::classify(0.0002, th.acceleration),
            AccelerationLabel::Constant
        );
    }

    #[test]
    fn test_gas_trend_classify() {
        let trend = GasTrend::classify(0.001, 0.0, &TrendThresholds::default());
        assert_eq!(trend.trend_label, TrendLabel::Increasing);
        assert_eq!(trend.acceleration_label, AccelerationLabel::Constant);
    }

    #[test]
    fn test_report_gas_accessor() {
        let th = TrendThresholds::default();
        let report = TrendReport {
            o2: GasTrend::classify(-0.01, 0.0, &th),
            co2: GasTrend::classify(0.01, 0.0, &th),
        };
        assert_eq!(report.gas(Gas::O2).trend_label, TrendLabel::Decreasing);
        assert_eq!(report.gas(Gas::Co2).trend_label, TrendLabel::Increasing);
    }

    #[test]
    fn test_labels_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&TrendLabel::Stable).unwrap(), "\"stable\"");
        assert_eq!(
            serde_json::to_string(&AccelerationLabel::Decelerating).unwrap(),
            "\"decelerating\""
        );
        assert_eq!(serde_json::to_string(&Gas::Co2).unwrap(), "\"co2\"");
    }
}
