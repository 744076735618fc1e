//! Registro persistido de um cenário

use serde::{Deserialize, Serialize};

use atmos_core::EnvironmentConfig;
use crate::error::{ScenarioError, ScenarioResult};

/// Conteúdo de um cenário salvo: `{ "inputs": ..., "favorite": bool }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioRecord {
    pub inputs: EnvironmentConfig,
    #[serde(default)]
    pub favorite: bool,
}

impl ScenarioRecord {
    pub fn new(inputs: EnvironmentConfig, favorite: bool) -> Self {
        Self { inputs, favorite }
    }
}

/// Valida um identificador de usuário ou nome de cenário
///
/// Rejeita vazio, `.`, separadores de caminho e `..`.
pub fn validate_name(kind: &'static str, value: &str) -> ScenarioResult<()> {
    let invalid = value.trim().is_empty()
        || value == "."
        || value.contains('/')
        || value.contains('\\')
        || value.contains("..")
        || value.contains('\0');

    if invalid {
        return Err(ScenarioError::InvalidName {
            kind,
            value: value.to_string(),
        });
    }
    Ok(())
}
