//! Armazenamento em memória

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

use atmos_core::EnvironmentConfig;
use crate::error::{ScenarioError, ScenarioResult};
use crate::record::{validate_name, ScenarioRecord};
use crate::store::ScenarioStore;

type Key = (String, String);

#[derive(Debug, Default)]
pub struct MemoryScenarioStore {
    records: RwLock<BTreeMap<Key, ScenarioRecord>>,
}

impl MemoryScenarioStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(user: &str, name: &str) -> ScenarioResult<Key> {
        validate_name("user", user)?;
        validate_name("scenario", name)?;
        Ok((user.to_string(), name.to_string()))
    }
}

impl ScenarioStore for MemoryScenarioStore {
    fn save(
        &self,
        user: &str,
        name: &str,
        inputs: &EnvironmentConfig,
        favorite: bool,
    ) -> ScenarioResult<()> {
        inputs.validate()?;
        let key = Self::key(user, name)?;
        self.records
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, ScenarioRecord::new(inputs.clone(), favorite));
        Ok(())
    }

    fn load_record(&self, user: &str, name: &str) -> ScenarioResult<ScenarioRecord> {
        let key = Self::key(user, name)?;
        self.records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
            .cloned()
            .ok_or_else(|| ScenarioError::not_found(user, name))
    }

    fn list(&self, user: &str) -> ScenarioResult<Vec<String>> {
        validate_name("user", user)?;
        // BTreeMap já ordena por (usuário, nome)
        Ok(self
            .records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .filter(|(u, _)| u == user)
            .map(|(_, name)| name.clone())
            .collect())
    }

    fn delete(&self, user: &str, name: &str) -> ScenarioResult<()> {
        let key = Self::key(user, name)?;
        self.records
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&key)
            .map(|_| ())
            .ok_or_else(|| ScenarioError::not_found(user, name))
    }
}
