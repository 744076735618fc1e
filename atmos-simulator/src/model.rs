//! Modelo analítico de primeira ordem para O₂/CO₂

use serde::{Deserialize, Serialize};
use tracing::debug;

use atmos_core::prelude::*;
use atmos_core::{
    BASELINE_CO2_PCT, BASELINE_O2_PCT, CO2_FLOOR_PCT, O2_CEILING_PCT, O2_FLOOR_PCT,
};
use crate::grid::time_grid;

/// Coeficientes dos quatro efeitos aditivos (%, ao fim da duração)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationCoefficients {
    /// Queda de O₂ por pessoa
    pub o2_drop_per_person: f64,
    /// Aumento de CO₂ por pessoa
    pub co2_rise_per_person: f64,
    /// Ganho de O₂ por planta (fotossíntese)
    pub o2_gain_per_plant: f64,
    /// Absorção de CO₂ por planta (fotossíntese)
    pub co2_uptake_per_plant: f64,
    /// Piso do fator de diluição por ventilação
    pub min_ventilation_factor: f64,
}

impl Default for SimulationCoefficients {
    fn default() -> Self {
        Self {
            o2_drop_per_person: 0.01,
            co2_rise_per_person: 0.005,
            o2_gain_per_plant: 0.005,
            co2_uptake_per_plant: 0.003,
            min_ventilation_factor: 0.5,
        }
    }
}

impl SimulationCoefficients {
    pub fn validate(&self) -> AtmosResult<()> {
        let rates = [
            ("o2_drop_per_person", self.o2_drop_per_person),
            ("co2_rise_per_person", self.co2_rise_per_person),
            ("o2_gain_per_plant", self.o2_gain_per_plant),
            ("co2_uptake_per_plant", self.co2_uptake_per_plant),
        ];
        for (name, value) in rates {
            if !value.is_finite() || value < 0.0 {
                return Err(AtmosError::Configuration(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }

        let floor = self.min_ventilation_factor;
        if !floor.is_finite() || floor <= 0.0 || floor > 1.0 {
            return Err(AtmosError::Configuration(format!(
                "min_ventilation_factor must be in (0, 1], got {floor}"
            )));
        }

        Ok(())
    }
}

/// Fator de diluição `max(1 − ach·t/(duration·60), floor)`
///
/// Nunca passa de 1 para `ach ≥ 0` e nunca fica abaixo do piso.
pub fn ventilation_factor(ach: f64, time_min: f64, duration_min: f64, floor: f64) -> f64 {
    (1.0 - ach * time_min / (duration_min * 60.0)).max(floor)
}

/// Simulador determinístico de concentração
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    coefficients: SimulationCoefficients,
}

impl Simulator {
    /// Simulador com os coeficientes padrão
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulador com coeficientes específicos
    pub fn with_coefficients(coefficients: SimulationCoefficients) -> AtmosResult<Self> {
        coefficients.validate()?;
        Ok(Self { coefficients })
    }

    pub fn coefficients(&self) -> &SimulationCoefficients {
        &self.coefficients
    }

    /// Concentrações `(o2, co2)` no instante `time_min`, já com clamp
    ///
    /// Espera uma configuração já validada (`duration_min > 0`).
    pub(crate) fn point(&self, config: &EnvironmentConfig, time_min: f64) -> (f64, f64) {
        let c = &self.coefficients;
        let progress = time_min / config.duration_min;
        let people = config.people as f64;

        let o2_drop = people * c.o2_drop_per_person * progress;
        let co2_rise = people * c.co2_rise_per_person * progress;

        let (o2_gain, co2_uptake) = if config.plants_effective() {
            let plants = config.plants as f64;
            (
                plants * c.o2_gain_per_plant * progress,
                plants * c.co2_uptake_per_plant * progress,
            )
        } else {
            (0.0, 0.0)
        };

        let factor = ventilation_factor(
            config.air_changes_per_hour,
            time_min,
            config.duration_min,
            c.min_ventilation_factor,
        );

        let o2 = (BASELINE_O2_PCT - o2_drop + o2_gain) * factor;
        let co2 = (BASELINE_CO2_PCT + co2_rise - co2_uptake) * factor;

        (
            o2.clamp(O2_FLOOR_PCT, O2_CEILING_PCT),
            co2.max(CO2_FLOOR_PCT),
        )
    }

    /// Gera a série simulada (segmento `simulated`, incerteza 0)
    pub fn simulate(&self, config: &EnvironmentConfig) -> AtmosResult<TimeSeries> {
        config.validate()?;
        let times = time_grid(config.duration_min, config.dt_min)?;

        let samples = times
            .into_iter()
            .map(|t| {
                let (o2, co2) = self.point(config, t);
                Sample::simulated(t, o2, co2)
            })
            .collect();

        let series = TimeSeries::new(samples)?;
        debug!(
            points = series.len(),
            people = config.people,
            plants = config.plants,
            ach = config.air_changes_per_hour,
            "simulation complete"
        );
        Ok(series)
    }
}

impl AtmosComponent for Simulator {
    fn name(&self) -> &str {
        "Simulator"
    }
}

/// Atalho para [`Simulator::simulate`] com os coeficientes padrão
pub fn simulate(config: &EnvironmentConfig) -> AtmosResult<TimeSeries> {
    Simulator::new().simulate(config)
}
