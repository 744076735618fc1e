//! Séries temporais de O₂/CO₂

use std::fmt;

use serde::{Deserialize, Serialize};
use crate::error::{AtmosError, AtmosResult};

/// Origem de uma amostra na linha do tempo combinada
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Segment {
    /// Gerada pelo simulador determinístico
    Simulated,
    /// Prevista por um modelo externo
    Predicted,
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Simulated => write!(f, "simulated"),
            Segment::Predicted => write!(f, "predicted"),
        }
    }
}

/// Uma amostra de concentração
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub time_min: f64,
    pub o2_pct: f64,
    pub co2_pct: f64,
    /// Incerteza do ponto (`None` quando a origem não informa)
    pub uncertainty: Option<f64>,
    pub segment: Segment,
}

impl Sample {
    pub fn simulated(time_min: f64, o2_pct: f64, co2_pct: f64) -> Self {
        Self {
            time_min,
            o2_pct,
            co2_pct,
            uncertainty: Some(0.0),
            segment: Segment::Simulated,
        }
    }

    pub fn predicted(time_min: f64, o2_pct: f64, co2_pct: f64, uncertainty: f64) -> Self {
        Self {
            time_min,
            o2_pct,
            co2_pct,
            uncertainty: Some(uncertainty),
            segment: Segment::Predicted,
        }
    }
}

/// Sequência ordenada de amostras com eixo de tempo estritamente crescente
///
/// O invariante é verificado na construção; uma `TimeSeries` existente
/// sempre tem `time_min` finito e estritamente crescente.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TimeSeries {
    samples: Vec<Sample>,
}

/// Colunas paralelas para renderizadores (tabela ou gráfico)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesColumns {
    pub time_min: Vec<f64>,
    pub o2_pct: Vec<f64>,
    pub co2_pct: Vec<f64>,
    pub uncertainty: Vec<Option<f64>>,
    pub segment: Vec<Segment>,
}

impl TimeSeries {
    /// Cria uma série validando o eixo de tempo
    pub fn new(samples: Vec<Sample>) -> AtmosResult<Self> {
        if let Some(bad) = samples.iter().position(|s| !s.time_min.is_finite()) {
            return Err(AtmosError::InvalidTimeAxis(format!(
                "non-finite time at index {bad}"
            )));
        }

        if let Some(i) = samples
            .windows(2)
            .position(|w| w[1].time_min <= w[0].time_min)
        {
            return Err(AtmosError::InvalidTimeAxis(format!(
                "time_min must be strictly increasing: {} at index {} follows {}",
                samples[i + 1].time_min,
                i + 1,
                samples[i].time_min
            )));
        }

        Ok(Self { samples })
    }

    /// Série vazia
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    pub fn first(&self) -> Option<&Sample> {
        self.samples.first()
    }

    pub fn last(&self) -> Option<&Sample> {
        self.samples.last()
    }

    pub fn times(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.time_min).collect()
    }

    pub fn o2(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.o2_pct).collect()
    }

    pub fn co2(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.co2_pct).collect()
    }

    /// Amostras de um único segmento, na ordem original
    pub fn segment(&self, segment: Segment) -> Vec<Sample> {
        self.samples
            .iter()
            .filter(|s| s.segment == segment)
            .copied()
            .collect()
    }

    /// Quantidade de amostras por segmento `(simulated, predicted)`
    pub fn segment_counts(&self) -> (usize, usize) {
        self.samples.iter().fold((0, 0), |(sim, pred), s| match s.segment {
            Segment::Simulated => (sim + 1, pred),
            Segment::Predicted => (sim, pred + 1),
        })
    }

    /// Colunas paralelas indexadas pelo tempo
    pub fn columns(&self) -> SeriesColumns {
        SeriesColumns {
            time_min: self.times(),
            o2_pct: self.o2(),
            co2_pct: self.co2(),
            uncertainty: self.samples.iter().map(|s| s.uncertainty).collect(),
            segment: self.samples.iter().map(|s| s.segment).collect(),
        }
    }

    pub fn into_samples(self) -> Vec<Sample> {
        self.samples
    }
}

impl<'a> IntoIterator for &'a TimeSeries {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

impl<'de> Deserialize<'de> for TimeSeries {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            samples: Vec<Sample>,
        }

        let raw = Raw::deserialize(deserializer)?;
        TimeSeries::new(raw.samples).map_err(serde::de::Error::custom)
    }
}
