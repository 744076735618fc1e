//! Resolução da configuração do ambiente a partir de arquivo + flags

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, ValueHint};

use atmos_core::EnvironmentConfig;

/// Parâmetros do ambiente; cada flag sobrescreve o campo vindo de `--config`
#[derive(Args, Debug, Clone, Default)]
pub struct EnvArgs {
    /// EnvironmentConfig em TOML
    #[arg(long, env = "ATMOS_CONFIG", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Room volume (m³)
    #[arg(long, env = "ATMOS_VOLUME")]
    pub volume: Option<f64>,

    /// Number of people
    #[arg(long, env = "ATMOS_PEOPLE")]
    pub people: Option<u32>,

    /// Number of plants
    #[arg(long, env = "ATMOS_PLANTS")]
    pub plants: Option<u32>,

    /// Air changes per hour
    #[arg(long, env = "ATMOS_ACH")]
    pub ach: Option<f64>,

    /// Simulation duration (min)
    #[arg(long, env = "ATMOS_DURATION")]
    pub duration: Option<f64>,

    /// Time step (min)
    #[arg(long, env = "ATMOS_DT")]
    pub dt: Option<f64>,

    /// Photosynthesis active (true/false)
    #[arg(long, env = "ATMOS_PHOTOSYNTHESIS")]
    pub photosynthesis: Option<bool>,
}

impl EnvArgs {
    /// Configuração final já validada
    pub fn resolve(&self) -> Result<EnvironmentConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => EnvironmentConfig::default(),
        };

        if let Some(v) = self.volume {
            config.room_volume_m3 = v;
        }
        if let Some(v) = self.people {
            config.people = v;
        }
        if let Some(v) = self.plants {
            config.plants = v;
        }
        if let Some(v) = self.ach {
            config.air_changes_per_hour = v;
        }
        if let Some(v) = self.duration {
            config.duration_min = v;
        }
        if let Some(v) = self.dt {
            config.dt_min = v;
        }
        if let Some(v) = self.photosynthesis {
            config.photosynthesis_active = v;
        }

        config.validate()?;
        Ok(config)
    }
}

/// Lê uma EnvironmentConfig de um arquivo TOML
pub fn load_config(path: &Path) -> Result<EnvironmentConfig> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    EnvironmentConfig::from_toml_str(&source)
        .with_context(|| format!("invalid config in {}", path.display()))
}
