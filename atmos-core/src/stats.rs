//! # Funções estatísticas
//!
//! Operações sobre fatias de `f64` usadas pelo ensemble de previsão e pela
//! análise de tendência.

use serde::{Deserialize, Serialize};

/// Média aritmética (`None` para fatia vazia)
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Desvio padrão populacional: σ = √((1/n) Σ (xi − μ)²)
pub fn std_population(values: &[f64]) -> Option<f64> {
    let mu = mean(values)?;
    let sum_sq: f64 = values.iter().map(|v| (v - mu) * (v - mu)).sum();
    Some((sum_sq / values.len() as f64).sqrt())
}

/// Mínimo ignorando NaN
pub fn min(values: &[f64]) -> Option<f64> {
    values.iter().copied().filter(|v| !v.is_nan()).reduce(f64::min)
}

/// Máximo ignorando NaN
pub fn max(values: &[f64]) -> Option<f64> {
    values.iter().copied().filter(|v| !v.is_nan()).reduce(f64::max)
}

/// Reta de mínimos quadrados `y = slope·x + intercept`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    /// Ajusta a reta; `None` com menos de 2 pontos, tamanhos diferentes ou `x` constante
    pub fn fit(x: &[f64], y: &[f64]) -> Option<Self> {
        if x.len() != y.len() || x.len() < 2 {
            return None;
        }

        let mx = mean(x)?;
        let my = mean(y)?;
        let (sxy, sxx) = x.iter().zip(y).fold((0.0, 0.0), |(sxy, sxx), (xi, yi)| {
            let dx = xi - mx;
            (sxy + dx * (yi - my), sxx + dx * dx)
        });

        if sxx == 0.0 {
            return None;
        }

        let slope = sxy / sxx;
        Some(Self { slope, intercept: my - slope * mx })
    }

    pub fn eval(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}
