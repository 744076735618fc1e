//! Tipos da fronteira com modelos de previsão
//!
//! Um modelo externo recebe uma [`FeatureMatrix`] e devolve um
//! [`ForecastOutput`]: previsões `(N, 2)` e uma incerteza de forma
//! arbitrária. A forma da incerteza é declarada e pode estar errada; quem
//! normaliza é o reconciliador em `atmos-forecast`.

use std::fmt;

use serde::{Deserialize, Serialize};
use crate::config::EnvironmentConfig;
use crate::error::{AtmosError, AtmosResult};

/// Array n-dimensional de incerteza em ordem row-major
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UncertaintyArray {
    shape: Vec<usize>,
    data: Vec<f64>,
}

impl UncertaintyArray {
    /// Cria a partir de forma + dados; o produto da forma deve bater com os dados
    pub fn new(shape: Vec<usize>, data: Vec<f64>) -> AtmosResult<Self> {
        let expected: usize = shape.iter().product();
        if expected != data.len() {
            return Err(AtmosError::ShapeMismatch {
                expected: format!("{} elements for shape {}", expected, Shape(&shape)),
                actual: format!("{} elements", data.len()),
            });
        }
        Ok(Self { shape, data })
    }

    /// Array 0-d
    pub fn scalar(value: f64) -> Self {
        Self { shape: Vec::new(), data: vec![value] }
    }

    /// Array 1-d `(len,)`
    pub fn vector(values: Vec<f64>) -> Self {
        Self { shape: vec![values.len()], data: values }
    }

    /// Array 2-d a partir de linhas; linhas de tamanhos diferentes são rejeitadas
    pub fn matrix(rows: Vec<Vec<f64>>) -> AtmosResult<Self> {
        let cols = rows.first().map(Vec::len).unwrap_or(0);
        if let Some(bad) = rows.iter().position(|r| r.len() != cols) {
            return Err(AtmosError::ShapeMismatch {
                expected: format!("{cols} columns in every row"),
                actual: format!("{} columns in row {}", rows[bad].len(), bad),
            });
        }
        let shape = vec![rows.len(), cols];
        Ok(Self { shape, data: rows.into_iter().flatten().collect() })
    }

    /// Array de zeros com a forma dada
    pub fn zeros(shape: Vec<usize>) -> Self {
        let len = shape.iter().product();
        Self { shape, data: vec![0.0; len] }
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    pub fn data(&self) -> &[f64] {
        &self.data
    }

    pub fn into_data(self) -> Vec<f64> {
        self.data
    }

    /// Tamanho do primeiro eixo (`None` para 0-d)
    pub fn leading_len(&self) -> Option<usize> {
        self.shape.first().copied()
    }

    /// Forma no formato `(4, 2)`
    pub fn shape_string(&self) -> String {
        Shape(&self.shape).to_string()
    }
}

struct Shape<'a>(&'a [usize]);

impl fmt::Display for Shape<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            [] => write!(f, "()"),
            [n] => write!(f, "({n},)"),
            dims => {
                let parts: Vec<String> = dims.iter().map(|d| d.to_string()).collect();
                write!(f, "({})", parts.join(", "))
            }
        }
    }
}

/// Saída bruta de um modelo: previsões `[o2, co2]` por ponto + incerteza
///
/// Transitória: existe apenas até ser reconciliada.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastOutput {
    pub predictions: Vec<[f64; 2]>,
    pub uncertainty: UncertaintyArray,
}

impl ForecastOutput {
    pub fn new(predictions: Vec<[f64; 2]>, uncertainty: UncertaintyArray) -> Self {
        Self { predictions, uncertainty }
    }

    pub fn len(&self) -> usize {
        self.predictions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predictions.is_empty()
    }
}

/// Nomes das colunas de [`FeatureRow`], na ordem de [`FeatureRow::to_array`]
pub const FEATURE_NAMES: [&str; 5] = [
    "time_min",
    "people",
    "plants",
    "air_changes_per_hour",
    "photosynthesis",
];

/// Uma linha de features: um passo de previsão
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureRow {
    pub time_min: f64,
    pub people: f64,
    pub plants: f64,
    pub air_changes_per_hour: f64,
    /// 1.0 com fotossíntese ativa, 0.0 caso contrário
    pub photosynthesis: f64,
}

impl FeatureRow {
    pub fn to_array(&self) -> [f64; 5] {
        [
            self.time_min,
            self.people,
            self.plants,
            self.air_changes_per_hour,
            self.photosynthesis,
        ]
    }
}

/// Matriz de features, uma linha por ponto a prever
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureMatrix {
    rows: Vec<FeatureRow>,
}

impl FeatureMatrix {
    pub fn new(rows: Vec<FeatureRow>) -> Self {
        Self { rows }
    }

    /// Linhas para `steps` pontos a partir de `start_min`, espaçados por `dt_min`
    ///
    /// Os tempos são `start_min + i·dt_min`, calculados sem acumulação.
    pub fn for_horizon(
        config: &EnvironmentConfig,
        start_min: f64,
        dt_min: f64,
        steps: usize,
    ) -> Self {
        let photosynthesis = if config.photosynthesis_active { 1.0 } else { 0.0 };
        let rows = (0..steps)
            .map(|i| FeatureRow {
                time_min: start_min + i as f64 * dt_min,
                people: config.people as f64,
                plants: config.plants as f64,
                air_changes_per_hour: config.air_changes_per_hour,
                photosynthesis,
            })
            .collect();
        Self { rows }
    }

    pub fn rows(&self) -> &[FeatureRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn times(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.time_min).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_checks_element_count() {
        assert!(UncertaintyArray::new(vec![2, 2], vec![1.0, 2.0, 3.0, 4.0]).is_ok());
        let err = UncertaintyArray::new(vec![2, 2], vec![1.0]).unwrap_err();
        assert!(matches!(err, AtmosError::ShapeMismatch { .. }));
    }

    #[test]
    fn test_matrix_shape() {
        let arr = UncertaintyArray::matrix(vec![vec![1.0, 3.0], vec![2.0, 4.0]]).unwrap();
        assert_eq!(arr.shape(), &[2, 2]);
        assert_eq!(arr.data(), &[1.0, 3.0, 2.0, 4.0]);
        assert_eq!(arr.ndim(), 2);
    }

    #[test]
    fn test_matrix_rejects_ragged_rows() {
        let result = UncertaintyArray::matrix(vec![vec![1.0, 2.0], vec![3.0]]);
        assert!(result.is_err());
    }

    #[test]
    fn test_shape_string() {
        assert_eq!(UncertaintyArray::scalar(1.0).shape_string(), "()");
        assert_eq!(UncertaintyArray::vector(vec![1.0; 4]).shape_string(), "(4,)");
        assert_eq!(UncertaintyArray::zeros(vec![4, 2]).shape_string(), "(4, 2)");
    }

    #[test]
    fn test_leading_len() {
        assert_eq!(UncertaintyArray::scalar(0.5).leading_len(), None);
        assert_eq!(UncertaintyArray::zeros(vec![3, 1]).leading_len(), Some(3));
    }

    #[test]
    fn test_feature_matrix_for_horizon() {
        let config = EnvironmentConfig {
            people: 3,
            plants: 2,
            photosynthesis_active: false,
            ..Default::default()
        };
        let features = FeatureMatrix::for_horizon(&config, 61.0, 0.5, 4);
        assert_eq!(features.len(), 4);
        assert_eq!(features.times(), vec![61.0, 61.5, 62.0, 62.5]);
        let row = features.rows()[0].to_array();
        assert_eq!(row, [61.0, 3.0, 2.0, 0.5, 0.0]);
    }

    #[test]
    fn test_feature_matrix_empty_horizon() {
        let features = FeatureMatrix::for_horizon(&EnvironmentConfig::default(), 0.0, 1.0, 0);
        assert!(features.is_empty());
    }
}
