//! # atmos-scenario
//!
//! Persistência de cenários por usuário. Cada cenário guarda a
//! [`EnvironmentConfig`] usada na simulação e um marcador de favorito.
//! Autenticação não faz parte deste crate: o identificador do usuário
//! é apenas uma chave.
//!
//! ```rust
//! use atmos_core::EnvironmentConfig;
//! use atmos_scenario::{MemoryScenarioStore, ScenarioStore};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let store = MemoryScenarioStore::new();
//! store.save("ana", "quarto", &EnvironmentConfig::default(), false)?;
//! store.set_favorite("ana", "quarto", true)?;
//! assert_eq!(store.favorites("ana")?, vec!["quarto".to_string()]);
//! # Ok(())
//! # }
//! ```
//!
//! [`EnvironmentConfig`]: atmos_core::EnvironmentConfig

pub mod error;
pub mod json;
pub mod memory;
pub mod record;
pub mod store;

pub use error::{ScenarioError, ScenarioResult};
pub use json::JsonScenarioStore;
pub use memory::MemoryScenarioStore;
pub use record::{validate_name, ScenarioRecord};
pub use store::ScenarioStore;
