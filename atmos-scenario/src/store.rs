//! Interface de armazenamento de cenários

use atmos_core::EnvironmentConfig;
use crate::error::ScenarioResult;
use crate::record::ScenarioRecord;

/// Armazenamento de cenários por `(usuário, nome)`
///
/// Implementações validam nomes com [`crate::validate_name`] e a
/// configuração com [`EnvironmentConfig::validate`] ao salvar e carregar.
pub trait ScenarioStore: Send + Sync {
    /// Salva (ou sobrescreve) um cenário
    fn save(
        &self,
        user: &str,
        name: &str,
        inputs: &EnvironmentConfig,
        favorite: bool,
    ) -> ScenarioResult<()>;

    /// Carrega o registro completo
    fn load_record(&self, user: &str, name: &str) -> ScenarioResult<ScenarioRecord>;

    /// Nomes dos cenários do usuário, em ordem alfabética
    fn list(&self, user: &str) -> ScenarioResult<Vec<String>>;

    /// Remove um cenário
    fn delete(&self, user: &str, name: &str) -> ScenarioResult<()>;

    /// Carrega apenas a configuração
    fn load(&self, user: &str, name: &str) -> ScenarioResult<EnvironmentConfig> {
        Ok(self.load_record(user, name)?.inputs)
    }

    /// Nomes dos cenários marcados como favoritos
    fn favorites(&self, user: &str) -> ScenarioResult<Vec<String>> {
        let mut out = Vec::new();
        for name in self.list(user)? {
            if self.load_record(user, &name)?.favorite {
                out.push(name);
            }
        }
        Ok(out)
    }

    /// Marca ou desmarca um cenário existente como favorito
    fn set_favorite(&self, user: &str, name: &str, favorite: bool) -> ScenarioResult<()> {
        let record = self.load_record(user, name)?;
        self.save(user, name, &record.inputs, favorite)
    }
}
