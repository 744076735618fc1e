//! Reconciliação da incerteza de um modelo
//!
//! Normaliza uma incerteza de forma arbitrária para um vetor 1-d com o
//! mesmo número de pontos das previsões. A política é aplicada em ordem,
//! cada passo apenas na condição de forma indicada:
//!
//! 1. `(M, 2)` → média por linha (um valor por gás vira um valor por ponto)
//! 2. `(M, 1)` → achatada para `(M,)`
//! 3. comprimento contra `N` previsões: se maior, mantém os `N` primeiros;
//!    se menor por `k`, repete o último valor `k` vezes ("último valor vale")
//! 4. qualquer forma que ainda não seja `(N,)` é [`AtmosError::ShapeMismatch`]
//!
//! O passo 3 esconde contratos quebrados entre modelo e chamador: todo corte
//! ou preenchimento gera um `warn!` e fica registrado em
//! [`Reconciled::actions`]. Corte e preenchimento sempre acontecem no fim.
//! A reconciliação nunca olha o eixo de tempo.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use atmos_core::prelude::*;

/// Passo da política aplicado a uma incerteza
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "action")]
pub enum ReconcileAction {
    /// `(M, 2)` reduzida pela média entre gases
    CollapsedGasAxis { rows: usize },
    /// `(M, 1)` achatada
    Flattened { rows: usize },
    /// Valores excedentes descartados no fim
    Truncated { dropped: usize },
    /// Último valor repetido no fim
    Padded { added: usize },
}

/// Incerteza reconciliada + passos aplicados
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reconciled {
    pub values: Vec<f64>,
    pub actions: Vec<ReconcileAction>,
}

impl Reconciled {
    /// Houve corte ou preenchimento
    pub fn length_adjusted(&self) -> bool {
        self.actions.iter().any(|a| {
            matches!(a, ReconcileAction::Truncated { .. } | ReconcileAction::Padded { .. })
        })
    }
}

/// Reconcilia e devolve apenas os valores
pub fn reconcile(predictions: &[[f64; 2]], uncertainty: &UncertaintyArray) -> AtmosResult<Vec<f64>> {
    reconcile_with_report(predictions, uncertainty).map(|r| r.values)
}

/// Reconcilia registrando cada passo da política
pub fn reconcile_with_report(
    predictions: &[[f64; 2]],
    uncertainty: &UncertaintyArray,
) -> AtmosResult<Reconciled> {
    let n = predictions.len();
    let mut actions = Vec::new();

    let mut values = match uncertainty.shape() {
        [rows, 2] => {
            debug!(rows = *rows, "collapsing per-gas uncertainty to per-point mean");
            actions.push(ReconcileAction::CollapsedGasAxis { rows: *rows });
            uncertainty
                .data()
                .chunks_exact(2)
                .map(|pair| (pair[0] + pair[1]) / 2.0)
                .collect::<Vec<_>>()
        }
        [rows, 1] => {
            debug!(rows = *rows, "flattening column uncertainty");
            actions.push(ReconcileAction::Flattened { rows: *rows });
            uncertainty.data().to_vec()
        }
        [_] => uncertainty.data().to_vec(),
        _ => {
            return Err(AtmosError::ShapeMismatch {
                expected: format!("({n},), ({n}, 1) or ({n}, 2)"),
                actual: uncertainty.shape_string(),
            });
        }
    };

    if values.len() > n {
        let dropped = values.len() - n;
        warn!(
            predictions = n,
            uncertainty = values.len(),
            policy = "truncate_tail",
            "uncertainty longer than predictions, dropping trailing values"
        );
        values.truncate(n);
        actions.push(ReconcileAction::Truncated { dropped });
    } else if values.len() < n {
        let Some(&last) = values.last() else {
            return Err(AtmosError::ShapeMismatch {
                expected: format!("({n},)"),
                actual: "(0,) with nothing to pad from".into(),
            });
        };
        let added = n - values.len();
        warn!(
            predictions = n,
            uncertainty = values.len(),
            policy = "pad_last_value",
            "uncertainty shorter than predictions, repeating last value"
        );
        values.resize(n, last);
        actions.push(ReconcileAction::Padded { added });
    }

    if values.len() != n {
        return Err(AtmosError::ShapeMismatch {
            expected: format!("({n},)"),
            actual: format!("({},)", values.len()),
        });
    }

    debug!(predictions = n, steps = actions.len(), "uncertainty reconciled");
    Ok(Reconciled { values, actions })
}
