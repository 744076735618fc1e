//! Armazenamento em diretório: `<root>/<usuário>/<nome>.json`

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use atmos_core::EnvironmentConfig;
use crate::error::{ScenarioError, ScenarioResult};
use crate::record::{validate_name, ScenarioRecord};
use crate::store::ScenarioStore;

const EXTENSION: &str = "json";

/// Um arquivo JSON identado por cenário
#[derive(Debug, Clone)]
pub struct JsonScenarioStore {
    root: PathBuf,
}

impl JsonScenarioStore {
    /// O diretório raiz é criado no primeiro `save`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn user_dir(&self, user: &str) -> ScenarioResult<PathBuf> {
        validate_name("user", user)?;
        Ok(self.root.join(user))
    }

    fn scenario_path(&self, user: &str, name: &str) -> ScenarioResult<PathBuf> {
        validate_name("scenario", name)?;
        Ok(self.user_dir(user)?.join(format!("{name}.{EXTENSION}")))
    }
}

impl ScenarioStore for JsonScenarioStore {
    fn save(
        &self,
        user: &str,
        name: &str,
        inputs: &EnvironmentConfig,
        favorite: bool,
    ) -> ScenarioResult<()> {
        inputs.validate()?;
        let path = self.scenario_path(user, name)?;
        fs::create_dir_all(self.user_dir(user)?)?;

        let json = serde_json::to_string_pretty(&ScenarioRecord::new(inputs.clone(), favorite))?;
        fs::write(&path, json)?;
        debug!(path = %path.display(), favorite, "scenario saved");
        Ok(())
    }

    fn load_record(&self, user: &str, name: &str) -> ScenarioResult<ScenarioRecord> {
        let path = self.scenario_path(user, name)?;
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(ScenarioError::not_found(user, name));
            }
            Err(e) => return Err(e.into()),
        };

        let record: ScenarioRecord = serde_json::from_str(&content)?;
        record.inputs.validate()?;
        Ok(record)
    }

    fn list(&self, user: &str) -> ScenarioResult<Vec<String>> {
        let dir = self.user_dir(user)?;
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut names = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(EXTENSION) || !path.is_file() {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    fn delete(&self, user: &str, name: &str) -> ScenarioResult<()> {
        let path = self.scenario_path(user, name)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!(path = %path.display(), "scenario deleted");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Err(ScenarioError::not_found(user, name)),
            Err(e) => Err(e.into()),
        }
    }
}
