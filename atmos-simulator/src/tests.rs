//! Propriedades da série simulada

use crate::*;
use atmos_core::prelude::*;

fn configs() -> Vec<EnvironmentConfig> {
    let mut out = Vec::new();
    for people in [0, 1, 5, 40] {
        for plants in [0, 3, 50] {
            for ach in [0.0, 0.5, 6.0, 200.0] {
                for (duration, dt) in [(60.0, 10.0), (180.0, 1.0), (10.0, 0.25), (7.0, 3.0)] {
                    for light in [false, true] {
                        out.push(EnvironmentConfig {
                            room_volume_m3: 30.0,
                            people,
                            plants,
                            air_changes_per_hour: ach,
                            duration_min: duration,
                            dt_min: dt,
                            photosynthesis_active: light,
                        });
                    }
                }
            }
        }
    }
    out
}

#[test]
fn test_series_invariants_hold_for_all_configs() {
    for config in configs() {
        let series = simulate(&config).unwrap();

        let expected_len = (config.duration_min / config.dt_min).floor() as usize + 1;
        assert_eq!(series.len(), expected_len, "config: {config:?}");

        for w in series.samples().windows(2) {
            assert!(w[1].time_min > w[0].time_min);
        }

        for s in &series {
            assert!(s.o2_pct >= 10.0 && s.o2_pct <= 100.0);
            assert!(s.co2_pct >= 0.0);
            assert_eq!(s.segment, Segment::Simulated);
            assert_eq!(s.uncertainty, Some(0.0));
        }
    }
}

#[test]
fn test_empty_room_only_follows_ventilation() {
    let config = EnvironmentConfig {
        people: 0,
        plants: 0,
        air_changes_per_hour: 3.0,
        duration_min: 120.0,
        dt_min: 5.0,
        ..Default::default()
    };
    let series = simulate(&config).unwrap();

    for s in &series {
        let factor = ventilation_factor(3.0, s.time_min, 120.0, 0.5);
        assert!((s.o2_pct - 21.0 * factor).abs() < 1e-12);
        assert!((s.co2_pct - 0.04 * factor).abs() < 1e-12);
        assert!(s.o2_pct <= 21.0);
        assert!(s.co2_pct <= 0.04);
    }
}

#[test]
fn test_empty_room_without_ventilation_is_flat() {
    let config = EnvironmentConfig {
        people: 0,
        plants: 0,
        air_changes_per_hour: 0.0,
        ..Default::default()
    };
    let series = simulate(&config).unwrap();
    assert!(series.iter().all(|s| s.o2_pct == 21.0 && s.co2_pct == 0.04));
}

#[test]
fn test_occupied_room_depletes_oxygen() {
    let config = EnvironmentConfig {
        people: 5,
        plants: 0,
        air_changes_per_hour: 0.0,
        duration_min: 60.0,
        dt_min: 10.0,
        photosynthesis_active: false,
        ..Default::default()
    };
    let series = simulate(&config).unwrap();
    let o2 = series.o2();
    let co2 = series.co2();

    assert!(o2.windows(2).all(|w| w[1] < w[0]));
    assert!(co2.windows(2).all(|w| w[1] > w[0]));
    assert!((o2[6] - 20.95).abs() < 1e-12);
    assert!((co2[6] - 0.065).abs() < 1e-12);
}

#[test]
fn test_simulation_is_deterministic() {
    let config = EnvironmentConfig::default();
    assert_eq!(simulate(&config).unwrap(), simulate(&config).unwrap());
}

#[test]
fn test_config_not_modified() {
    let config = EnvironmentConfig::default();
    let copy = config.clone();
    let _ = simulate(&config).unwrap();
    assert_eq!(config, copy);
}

#[test]
fn test_independent_runs_across_threads() {
    let handles: Vec<_> = (0..4u32)
        .map(|people| {
            std::thread::spawn(move || {
                let config = EnvironmentConfig { people, ..Default::default() };
                simulate(&config).unwrap()
            })
        })
        .collect();

    for (people, handle) in handles.into_iter().enumerate() {
        let series = handle.join().unwrap();
        let expected = simulate(&EnvironmentConfig {
            people: people as u32,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(series, expected);
    }
}

#[test]
fn test_simulated_series_serializes() {
    let config = EnvironmentConfig { duration_min: 3.0, dt_min: 1.0, ..Default::default() };
    let series = simulate(&config).unwrap();
    let json = serde_json::to_string(&series.columns()).unwrap();
    assert!(json.contains("\"segment\":[\"simulated\",\"simulated\",\"simulated\",\"simulated\"]"));
}
