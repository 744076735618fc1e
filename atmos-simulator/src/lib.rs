//! # atmos-simulator
//!
//! Simulador determinístico de O₂/CO₂ em ambiente interno. Aproximação
//! analítica de primeira ordem sobre uma grade de tempo uniforme, não um
//! modelo atmosférico/CFD.
//!
//! A cada passo quatro efeitos aditivos, lineares na fração `t/duration`,
//! são somados à linha de base (21 % O₂, 0.04 % CO₂):
//!
//! - pessoas consomem O₂ e produzem CO₂
//! - plantas, só com fotossíntese ativa, produzem O₂ e absorvem CO₂
//!
//! O resultado é multiplicado pelo fator de ventilação
//! `max(1 − ach·t/(duration·60), 0.5)` e limitado aos pisos físicos.
//!
//! ```rust
//! use atmos_core::EnvironmentConfig;
//! use atmos_simulator::simulate;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = EnvironmentConfig {
//!     people: 5,
//!     duration_min: 60.0,
//!     dt_min: 10.0,
//!     ..Default::default()
//! };
//! let series = simulate(&config)?;
//! assert_eq!(series.len(), 7);
//! # Ok(())
//! # }
//! ```

pub mod grid;
pub mod model;

pub use grid::{step_count, time_grid, MAX_GRID_POINTS};
pub use model::{simulate, ventilation_factor, SimulationCoefficients, Simulator};

#[cfg(test)]
mod tests;
