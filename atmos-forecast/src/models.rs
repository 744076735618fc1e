//! Variantes de modelo atrás do trait [`Forecaster`]
//!
//! - [`PersistenceForecaster`]: repete o último ponto observado; incerteza
//!   `(N, 1)` de zeros, a forma que modelos recorrentes sem estimativa de
//!   incerteza costumam devolver
//! - [`EnsembleTrendForecaster`]: média de retas de mínimos quadrados
//!   ajustadas sobre janelas finais do histórico; incerteza `(N, 2)` com o
//!   desvio padrão entre membros por gás
//!
//! [`ModelKind`] escolhe a variante e ajusta sobre um histórico.

use serde::{Deserialize, Serialize};
use tracing::debug;

use atmos_core::prelude::*;
use atmos_core::stats::{self, LinearFit};
use atmos_core::{CO2_FLOOR_PCT, O2_CEILING_PCT, O2_FLOOR_PCT};

// ═══════════════════════════════════════════════════════════════════════════════
// PERSISTÊNCIA
// ═══════════════════════════════════════════════════════════════════════════════

/// "O futuro é igual ao último ponto"
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PersistenceForecaster {
    last: [f64; 2],
}

impl PersistenceForecaster {
    pub fn new(o2_pct: f64, co2_pct: f64) -> Self {
        Self { last: [o2_pct, co2_pct] }
    }

    /// Usa o último ponto do histórico
    pub fn from_history(history: &TimeSeries) -> AtmosResult<Self> {
        let last = history
            .last()
            .ok_or_else(|| AtmosError::Forecast("cannot persist an empty history".into()))?;
        Ok(Self::new(last.o2_pct, last.co2_pct))
    }
}

impl AtmosComponent for PersistenceForecaster {
    fn name(&self) -> &str {
        "persistence"
    }
}

impl Forecaster for PersistenceForecaster {
    fn predict(&self, features: &FeatureMatrix) -> AtmosResult<ForecastOutput> {
        let n = features.len();
        Ok(ForecastOutput::new(
            vec![self.last; n],
            UncertaintyArray::zeros(vec![n, 1]),
        ))
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// ENSEMBLE DE TENDÊNCIAS
// ═══════════════════════════════════════════════════════════════════════════════

/// Configuração do ensemble
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnsembleConfig {
    /// Número de membros
    pub members: usize,
    /// Menor janela final (em amostras) usada por um membro
    pub min_window: usize,
}

impl Default for EnsembleConfig {
    fn default() -> Self {
        Self {
            members: 5,
            min_window: 3,
        }
    }
}

impl EnsembleConfig {
    pub fn validate(&self) -> AtmosResult<()> {
        if self.members == 0 {
            return Err(AtmosError::Configuration("ensemble needs at least one member".into()));
        }
        if self.min_window < 2 {
            return Err(AtmosError::Configuration(
                "ensemble min_window must be >= 2".into(),
            ));
        }
        Ok(())
    }

    /// Janelas dos membros, da menor até o histórico completo
    fn windows(&self, available: usize) -> Vec<usize> {
        let smallest = self.min_window.min(available);
        let span = available - smallest;
        (1..=self.members)
            .map(|k| smallest + span * k / self.members)
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct TrendMember {
    window: usize,
    o2: LinearFit,
    co2: LinearFit,
}

/// Ensemble de retas ajustadas sobre janelas finais do histórico
#[derive(Debug, Clone, PartialEq)]
pub struct EnsembleTrendForecaster {
    members: Vec<TrendMember>,
}

impl EnsembleTrendForecaster {
    /// Ajusta os membros sobre o histórico (mínimo de 2 amostras)
    pub fn fit(history: &TimeSeries, config: EnsembleConfig) -> AtmosResult<Self> {
        config.validate()?;
        if history.len() < 2 {
            return Err(AtmosError::InsufficientData {
                required: 2,
                actual: history.len(),
            });
        }

        let times = history.times();
        let o2 = history.o2();
        let co2 = history.co2();
        let n = times.len();

        let members = config
            .windows(n)
            .into_iter()
            .map(|window| {
                let start = n - window;
                let fit = |values: &[f64]| {
                    LinearFit::fit(&times[start..], &values[start..]).ok_or_else(|| {
                        AtmosError::Forecast(format!("degenerate trend over last {window} samples"))
                    })
                };
                Ok(TrendMember {
                    window,
                    o2: fit(o2.as_slice())?,
                    co2: fit(co2.as_slice())?,
                })
            })
            .collect::<AtmosResult<Vec<_>>>()?;

        debug!(
            members = members.len(),
            history = n,
            "fitted trend ensemble"
        );
        Ok(Self { members })
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Janelas usadas pelos membros
    pub fn windows(&self) -> Vec<usize> {
        self.members.iter().map(|m| m.window).collect()
    }
}

impl AtmosComponent for EnsembleTrendForecaster {
    fn name(&self) -> &str {
        "ensemble-trend"
    }
}

impl Forecaster for EnsembleTrendForecaster {
    fn predict(&self, features: &FeatureMatrix) -> AtmosResult<ForecastOutput> {
        let mut predictions = Vec::with_capacity(features.len());
        let mut spread = Vec::with_capacity(features.len() * 2);

        for row in features.rows() {
            let t = row.time_min;
            let o2: Vec<f64> = self.members.iter().map(|m| m.o2.eval(t)).collect();
            let co2: Vec<f64> = self.members.iter().map(|m| m.co2.eval(t)).collect();

            let (Some(o2_mean), Some(co2_mean)) = (stats::mean(&o2), stats::mean(&co2)) else {
                return Err(AtmosError::Forecast("ensemble has no members".into()));
            };

            predictions.push([
                o2_mean.clamp(O2_FLOOR_PCT, O2_CEILING_PCT),
                co2_mean.max(CO2_FLOOR_PCT),
            ]);
            spread.push(stats::std_population(&o2).unwrap_or(0.0));
            spread.push(stats::std_population(&co2).unwrap_or(0.0));
        }

        let uncertainty = UncertaintyArray::new(vec![features.len(), 2], spread)?;
        Ok(ForecastOutput::new(predictions, uncertainty))
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// SELEÇÃO DE MODELO
// ═══════════════════════════════════════════════════════════════════════════════

/// Variante de modelo a ajustar sobre o histórico simulado
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    Persistence,
    Ensemble(EnsembleConfig),
}

impl Default for ModelKind {
    fn default() -> Self {
        ModelKind::Ensemble(EnsembleConfig::default())
    }
}

impl ModelKind {
    /// Ajusta a variante escolhida
    pub fn fit(&self, history: &TimeSeries) -> AtmosResult<Box<dyn Forecaster>> {
        Ok(match self {
            ModelKind::Persistence => Box::new(PersistenceForecaster::from_history(history)?),
            ModelKind::Ensemble(config) => {
                Box::new(EnsembleTrendForecaster::fit(history, *config)?)
            }
        })
    }
}
