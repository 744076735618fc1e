//! Pipeline completo: simular → prever → reconciliar → costurar

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use atmos_core::prelude::*;
use atmos_simulator::{simulate, MAX_GRID_POINTS};
use crate::models::ModelKind;
use crate::reconcile::{reconcile_with_report, ReconcileAction};
use crate::stitch::stitch;

/// Pedido de previsão sobre uma configuração
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastRequest {
    pub config: EnvironmentConfig,
    /// Horizonte da previsão em minutos após o fim da simulação
    pub horizon_min: f64,
    #[serde(default)]
    pub model: ModelKind,
}

impl ForecastRequest {
    pub fn new(config: EnvironmentConfig, horizon_min: f64) -> Self {
        Self {
            config,
            horizon_min,
            model: ModelKind::default(),
        }
    }

    pub fn with_model(mut self, model: ModelKind) -> Self {
        self.model = model;
        self
    }
}

/// Resultado de uma execução do pipeline
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastRun {
    /// Nome do modelo usado
    pub model: String,
    /// Série simulada (fonte, inalterada)
    pub simulated: TimeSeries,
    /// Incerteza reconciliada, um valor por ponto previsto
    pub uncertainty: Vec<f64>,
    /// Passos da política de reconciliação aplicados
    pub reconciliation: Vec<ReconcileAction>,
    /// Série combinada simulada + prevista
    pub combined: TimeSeries,
}

/// Número de passos de previsão: `round(horizon / dt)`, abaixo de [`MAX_GRID_POINTS`]
pub fn horizon_steps(horizon_min: f64, dt_min: f64) -> AtmosResult<usize> {
    if !horizon_min.is_finite() || horizon_min < 0.0 {
        return Err(AtmosError::Configuration(format!(
            "horizon_min must be finite and non-negative, got {horizon_min}"
        )));
    }
    if !dt_min.is_finite() || dt_min <= 0.0 {
        return Err(AtmosError::Configuration(format!("dt_min must be > 0, got {dt_min}")));
    }
    let steps = (horizon_min / dt_min).round();
    if steps >= MAX_GRID_POINTS as f64 {
        return Err(AtmosError::Configuration(format!(
            "forecast horizon of {steps} steps exceeds {MAX_GRID_POINTS} points"
        )));
    }
    Ok(steps as usize)
}

/// Estende uma série simulada existente com a previsão de `forecaster`
pub fn extend_with_forecast(
    simulated: &TimeSeries,
    config: &EnvironmentConfig,
    horizon_min: f64,
    forecaster: &dyn Forecaster,
) -> AtmosResult<ForecastRun> {
    let steps = horizon_steps(horizon_min, config.dt_min)?;
    let last_time = simulated
        .last()
        .map(|s| s.time_min)
        .ok_or(AtmosError::InsufficientData { required: 1, actual: 0 })?;

    let features = FeatureMatrix::for_horizon(config, last_time + config.dt_min, config.dt_min, steps);
    let output = forecaster.predict(&features)?;
    debug!(
        model = forecaster.name(),
        predictions = output.len(),
        uncertainty_shape = %output.uncertainty.shape_string(),
        "forecast produced"
    );

    let reconciled = reconcile_with_report(&output.predictions, &output.uncertainty)?;
    let combined = stitch(simulated, &output.predictions, &reconciled.values, config.dt_min)?;

    info!(
        model = forecaster.name(),
        simulated = simulated.len(),
        predicted = output.len(),
        "forecast timeline ready"
    );

    Ok(ForecastRun {
        model: forecaster.name().to_string(),
        simulated: simulated.clone(),
        uncertainty: reconciled.values,
        reconciliation: reconciled.actions,
        combined,
    })
}

/// Simula a configuração, ajusta o modelo pedido e estende a série
pub fn run_forecast(request: &ForecastRequest) -> AtmosResult<ForecastRun> {
    let simulated = simulate(&request.config)?;
    let forecaster = request.model.fit(&simulated)?;
    extend_with_forecast(&simulated, &request.config, request.horizon_min, forecaster.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizon_steps() {
        assert_eq!(horizon_steps(20.0, 1.0).unwrap(), 20);
        assert_eq!(horizon_steps(20.0, 10.0).unwrap(), 2);
        assert_eq!(horizon_steps(1.0, 0.3).unwrap(), 3);
        assert_eq!(horizon_steps(0.0, 1.0).unwrap(), 0);
        assert!(horizon_steps(-1.0, 1.0).is_err());
        assert!(horizon_steps(5.0, 0.0).is_err());
    }

    #[test]
    fn test_huge_horizon_rejected() {
        assert!(matches!(
            horizon_steps(1e300, 1.0),
            Err(AtmosError::Configuration(_))
        ));
        assert!(matches!(
            horizon_steps(MAX_GRID_POINTS as f64, 1.0),
            Err(AtmosError::Configuration(_))
        ));
        assert_eq!(
            horizon_steps((MAX_GRID_POINTS - 1) as f64, 1.0).unwrap(),
            MAX_GRID_POINTS - 1
        );

        let request = ForecastRequest::new(EnvironmentConfig::default(), 1e300);
        assert!(matches!(run_forecast(&request), Err(AtmosError::Configuration(_))));
    }

    #[test]
    fn test_run_forecast_default_model() {
        let request = ForecastRequest::new(
            EnvironmentConfig { duration_min: 60.0, dt_min: 1.0, ..Default::default() },
            20.0,
        );
        let run = run_forecast(&request).unwrap();

        assert_eq!(run.model, "ensemble-trend");
        assert_eq!(run.simulated.len(), 61);
        assert_eq!(run.uncertainty.len(), 20);
        assert_eq!(run.combined.len(), 81);
        assert_eq!(run.combined.segment_counts(), (61, 20));
        assert_eq!(run.reconciliation, vec![ReconcileAction::CollapsedGasAxis { rows: 20 }]);
    }

    #[test]
    fn test_run_forecast_persistence_flattens() {
        let request = ForecastRequest::new(EnvironmentConfig::default(), 5.0)
            .with_model(ModelKind::Persistence);
        let run = run_forecast(&request).unwrap();
        assert_eq!(run.reconciliation, vec![ReconcileAction::Flattened { rows: 5 }]);
        assert!(run.uncertainty.iter().all(|&u| u == 0.0));
    }

    #[test]
    fn test_zero_horizon_returns_simulation() {
        let request = ForecastRequest::new(EnvironmentConfig::default(), 0.0);
        let run = run_forecast(&request).unwrap();
        assert_eq!(run.combined, run.simulated);
    }

    #[test]
    fn test_invalid_config_propagates() {
        let request = ForecastRequest::new(
            EnvironmentConfig { duration_min: -5.0, ..Default::default() },
            10.0,
        );
        assert!(matches!(run_forecast(&request), Err(AtmosError::Configuration(_))));
    }

    #[test]
    fn test_request_deserializes_with_default_model() {
        let json = r#"{
            "config": {
                "room_volume_m3": 30.0, "people": 2, "plants": 0,
                "air_changes_per_hour": 0.5, "duration_min": 60.0, "dt_min": 1.0,
                "photosynthesis_active": true
            },
            "horizon_min": 20.0
        }"#;
        let request: ForecastRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.model, ModelKind::default());
    }
}
