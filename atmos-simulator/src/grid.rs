//! Grade de tempo da simulação
//!
//! Regra de arredondamento: `t_i = i·dt` para `i = 0..=⌊duration/dt⌋`.
//! Com entradas inteiras isso reproduz `0, dt, 2dt, …, duration`; com passo
//! fracionário a grade continua uniforme e termina no último ponto
//! `≤ duration`. O número de pontos é sempre `⌊duration/dt⌋ + 1`.

use atmos_core::{AtmosError, AtmosResult};

/// Limite de pontos por grade
pub const MAX_GRID_POINTS: usize = 10_000_000;

/// Erro relativo aceito ao reconhecer `duration` como múltiplo exato de `dt`
/// (ex.: `0.3 / 0.1 = 2.9999999999999996`)
const GRID_ULPS: f64 = 4.0;

/// Número de intervalos completos de `dt` que cabem em `duration`
pub fn step_count(duration_min: f64, dt_min: f64) -> AtmosResult<usize> {
    if !duration_min.is_finite() || duration_min <= 0.0 {
        return Err(AtmosError::Configuration(format!(
            "duration_min must be > 0, got {duration_min}"
        )));
    }
    if !dt_min.is_finite() || dt_min <= 0.0 {
        return Err(AtmosError::Configuration(format!(
            "dt_min must be > 0, got {dt_min}"
        )));
    }

    let quotient = duration_min / dt_min;
    let nearest = quotient.round();
    let tolerance = GRID_ULPS * f64::EPSILON * duration_min;
    let steps = if (nearest * dt_min - duration_min).abs() <= tolerance {
        nearest
    } else {
        quotient.floor()
    };
    if steps >= MAX_GRID_POINTS as f64 {
        return Err(AtmosError::Configuration(format!(
            "time grid of {steps} steps exceeds {MAX_GRID_POINTS} points"
        )));
    }
    Ok(steps as usize)
}

/// Grade inclusiva `[0, dt, 2dt, …]`
///
/// O `min` só atua no múltiplo exato, onde `k·dt` pode passar de
/// `duration` por arredondamento.
pub fn time_grid(duration_min: f64, dt_min: f64) -> AtmosResult<Vec<f64>> {
    let steps = step_count(duration_min, dt_min)?;
    Ok((0..=steps)
        .map(|i| (i as f64 * dt_min).min(duration_min))
        .collect())
}
