//! # Traits fundamentais do atmos
//!
//! Os estágios do pipeline são funções puras; os traits abaixo existem
//! nos pontos onde o pipeline aceita implementações plugáveis.
//!
//! | Trait | Papel |
//! |:------|:------|
//! | [`AtmosComponent`] | Identidade comum (nome, versão) para logs |
//! | [`Forecaster`] | Modelo de previsão externo: `predict(X) -> (preds, uncertainty)` |

use std::fmt::Debug;

use crate::error::AtmosResult;
use crate::forecast::{FeatureMatrix, ForecastOutput};

// ═══════════════════════════════════════════════════════════════════════════════
// COMPONENTE BASE
// ═══════════════════════════════════════════════════════════════════════════════

/// Trait base para componentes plugáveis.
///
/// # Exemplo
///
/// ```
/// use atmos_core::traits::AtmosComponent;
///
/// #[derive(Debug)]
/// struct NullModel;
///
/// impl AtmosComponent for NullModel {
///     fn name(&self) -> &str { "null-model" }
/// }
///
/// assert_eq!(NullModel.name(), "null-model");
/// ```
pub trait AtmosComponent: Send + Sync + Debug {
    /// Nome único do componente (para logs e debug)
    fn name(&self) -> &str;

    /// Versão do componente
    fn version(&self) -> &str {
        env!("CARGO_PKG_VERSION")
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// PREVISÃO
// ═══════════════════════════════════════════════════════════════════════════════

/// Modelo de previsão.
///
/// A família do modelo (ensemble, rede recorrente, persistência) é uma
/// variante atrás desta interface. O pipeline só consome o par
/// `(predictions, uncertainty)` e nunca confia na forma declarada da
/// incerteza.
///
/// # Exemplo
///
/// ```
/// use atmos_core::prelude::*;
///
/// #[derive(Debug)]
/// struct Flat;
///
/// impl AtmosComponent for Flat {
///     fn name(&self) -> &str { "flat" }
/// }
///
/// impl Forecaster for Flat {
///     fn predict(&self, features: &FeatureMatrix) -> AtmosResult<ForecastOutput> {
///         let n = features.len();
///         Ok(ForecastOutput::new(
///             vec![[21.0, 0.04]; n],
///             UncertaintyArray::vector(vec![0.0; n]),
///         ))
///     }
/// }
///
/// let features = FeatureMatrix::for_horizon(&EnvironmentConfig::default(), 181.0, 1.0, 3);
/// let out = Flat.predict(&features).unwrap();
/// assert_eq!(out.len(), 3);
/// ```
pub trait Forecaster: AtmosComponent {
    /// Prevê um ponto `[o2, co2]` por linha de features
    fn predict(&self, features: &FeatureMatrix) -> AtmosResult<ForecastOutput>;
}
