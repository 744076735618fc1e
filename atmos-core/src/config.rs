//! Configuração do ambiente simulado

use serde::{Deserialize, Serialize};
use crate::error::{AtmosError, AtmosResult};

/// Parâmetros de uma sala para uma execução da simulação
///
/// Imutável depois que a simulação começa: o simulador recebe uma
/// referência e nunca altera os campos.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    /// Volume da sala em m³
    pub room_volume_m3: f64,
    /// Número de pessoas respirando na sala
    pub people: u32,
    /// Número de plantas
    pub plants: u32,
    /// Taxa de renovação de ar (ACH, trocas por hora)
    pub air_changes_per_hour: f64,
    /// Duração da simulação em minutos
    pub duration_min: f64,
    /// Passo de tempo em minutos
    pub dt_min: f64,
    /// Fotossíntese ativa (luz acesa)
    #[serde(alias = "light_on")]
    pub photosynthesis_active: bool,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            room_volume_m3: 30.0,
            people: 2,
            plants: 0,
            air_changes_per_hour: 0.5,
            duration_min: 180.0,
            dt_min: 1.0,
            photosynthesis_active: true,
        }
    }
}

impl EnvironmentConfig {
    /// Valida os invariantes da configuração
    pub fn validate(&self) -> AtmosResult<()> {
        let fields = [
            ("room_volume_m3", self.room_volume_m3),
            ("air_changes_per_hour", self.air_changes_per_hour),
            ("duration_min", self.duration_min),
            ("dt_min", self.dt_min),
        ];
        if let Some((name, value)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(AtmosError::config(format!("{name} must be finite, got {value}")));
        }

        if self.room_volume_m3 <= 0.0 {
            return Err(AtmosError::config("room_volume_m3 must be > 0"));
        }

        if self.air_changes_per_hour < 0.0 {
            return Err(AtmosError::config("air_changes_per_hour must be non-negative"));
        }

        if self.duration_min <= 0.0 {
            return Err(AtmosError::config("duration_min must be > 0"));
        }

        if self.dt_min <= 0.0 {
            return Err(AtmosError::config("dt_min must be > 0"));
        }

        if self.dt_min > self.duration_min {
            return Err(AtmosError::config(format!(
                "dt_min ({}) must not exceed duration_min ({})",
                self.dt_min, self.duration_min
            )));
        }

        Ok(())
    }

    /// Plantas contribuem apenas com fotossíntese ativa
    pub fn plants_effective(&self) -> bool {
        self.photosynthesis_active && self.plants > 0
    }

    /// Lê uma configuração de um documento TOML e valida
    pub fn from_toml_str(source: &str) -> AtmosResult<Self> {
        let config: Self = toml::from_str(source)
            .map_err(|e| AtmosError::config(format!("TOML parse error: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Serializa a configuração para TOML
    pub fn to_toml_string(&self) -> AtmosResult<String> {
        toml::to_string_pretty(self)
            .map_err(|e| AtmosError::config(format!("TOML serialize error: {e}")))
    }
}
