//! Costura da série simulada com a previsão reconciliada

use tracing::debug;

use atmos_core::prelude::*;

/// Concatena a série simulada com `N` pontos previstos
///
/// A grade da previsão começa em `último tempo + dt_min` e avança `dt_min`
/// por ponto, exatamente `N` pontos: o último ponto simulado nunca é
/// duplicado. As fontes não são alteradas; a série devolvida é nova.
///
/// # Erros
///
/// - [`AtmosError::LengthMismatch`] se previsões e incerteza diferem em tamanho
/// - [`AtmosError::Configuration`] se `dt_min` não for positivo e finito
/// - [`AtmosError::InsufficientData`] se a série simulada estiver vazia
pub fn stitch(
    sim: &TimeSeries,
    predictions: &[[f64; 2]],
    uncertainty: &[f64],
    dt_min: f64,
) -> AtmosResult<TimeSeries> {
    if predictions.len() != uncertainty.len() {
        return Err(AtmosError::LengthMismatch {
            predictions: predictions.len(),
            uncertainty: uncertainty.len(),
        });
    }

    if !dt_min.is_finite() || dt_min <= 0.0 {
        return Err(AtmosError::Configuration(format!(
            "dt_min must be > 0, got {dt_min}"
        )));
    }

    let last_time = sim
        .last()
        .map(|s| s.time_min)
        .ok_or(AtmosError::InsufficientData { required: 1, actual: 0 })?;

    let mut samples = Vec::with_capacity(sim.len() + predictions.len());
    samples.extend_from_slice(sim.samples());
    samples.extend(predictions.iter().zip(uncertainty).enumerate().map(
        |(i, ([o2, co2], u))| {
            let time = last_time + (i + 1) as f64 * dt_min;
            Sample::predicted(time, *o2, *co2, *u)
        },
    ));

    let combined = TimeSeries::new(samples)?;
    debug!(
        simulated = sim.len(),
        predicted = predictions.len(),
        start = last_time + dt_min,
        "stitched forecast onto simulation"
    );
    Ok(combined)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sim(times: &[f64]) -> TimeSeries {
        TimeSeries::new(
            times
                .iter()
                .map(|&t| Sample::simulated(t, 21.0 - t * 0.01, 0.04 + t * 0.001))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_forecast_times_continue_after_last_point() {
        let base = sim(&[0.0, 1.0, 2.0]);
        let out = stitch(&base, &[[20.9, 0.05], [20.8, 0.06]], &[0.1, 0.2], 1.0).unwrap();

        let predicted = out.segment(Segment::Predicted);
        let times: Vec<f64> = predicted.iter().map(|s| s.time_min).collect();
        assert_eq!(times, vec![3.0, 4.0]);
        assert_eq!(out.len(), 5);
    }

    #[test]
    fn test_segments_and_uncertainty() {
        let base = sim(&[0.0, 10.0]);
        let out = stitch(&base, &[[20.0, 0.07]], &[0.3], 10.0).unwrap();
        let samples = out.samples();

        assert_eq!(samples[0].segment, Segment::Simulated);
        assert_eq!(samples[1].segment, Segment::Simulated);
        assert_eq!(samples[2].segment, Segment::Predicted);
        assert_eq!(samples[2].uncertainty, Some(0.3));
        assert_eq!(samples[2].o2_pct, 20.0);
        assert_eq!(samples[2].co2_pct, 0.07);
        assert_eq!(samples[2].time_min, 20.0);
    }

    #[test]
    fn test_time_strictly_increasing_across_segments() {
        let base = sim(&[0.0, 0.5, 1.0, 1.5]);
        let preds = vec![[20.0, 0.05]; 7];
        let out = stitch(&base, &preds, &[0.0; 7], 0.5).unwrap();
        assert!(out.samples().windows(2).all(|w| w[1].time_min > w[0].time_min));
    }

    #[test]
    fn test_length_mismatch() {
        let base = sim(&[0.0, 1.0]);
        let err = stitch(&base, &[[20.0, 0.05], [20.0, 0.05]], &[0.1], 1.0).unwrap_err();
        assert_eq!(err, AtmosError::LengthMismatch { predictions: 2, uncertainty: 1 });
    }

    #[test]
    fn test_empty_forecast_returns_copy() {
        let base = sim(&[0.0, 1.0]);
        let out = stitch(&base, &[], &[], 1.0).unwrap();
        assert_eq!(out, base);
    }

    #[test]
    fn test_source_not_modified() {
        let base = sim(&[0.0, 1.0]);
        let before = base.clone();
        let _ = stitch(&base, &[[1.0, 1.0]], &[1.0], 1.0).unwrap();
        assert_eq!(base, before);
    }

    #[test]
    fn test_empty_simulation_rejected() {
        let err = stitch(&TimeSeries::empty(), &[[20.0, 0.05]], &[0.0], 1.0).unwrap_err();
        assert!(matches!(err, AtmosError::InsufficientData { .. }));
    }

    #[test]
    fn test_invalid_step_rejected() {
        let base = sim(&[0.0, 1.0]);
        assert!(stitch(&base, &[[20.0, 0.05]], &[0.0], 0.0).is_err());
        assert!(stitch(&base, &[[20.0, 0.05]], &[0.0], f64::INFINITY).is_err());
    }
}
