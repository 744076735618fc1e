//! Saída em tabela, JSON ou CSV

use std::fmt::Write as _;
use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;
use colored::*;
use serde::Serialize;

use atmos_core::prelude::*;
use atmos_scenario::ScenarioRecord;
use atmos_trend::{Comparison, DangerScan, SeriesSummary};

use crate::csv_io;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

/// Imprime `value` como JSON identado
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Série como CSV em stdout
pub fn print_csv(series: &TimeSeries) -> Result<()> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    csv_io::write_series(series, &mut handle)?;
    handle.flush()?;
    Ok(())
}

pub fn series_table(series: &TimeSeries) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>10}  {:>8}  {:>8}  {:>11}  {}",
        "time_min", "o2_pct", "co2_pct", "uncertainty", "segment"
    );
    for s in series {
        let uncertainty = s.uncertainty.map(|u| format!("{u:.4}")).unwrap_or_else(|| "-".into());
        let _ = writeln!(
            out,
            "{:>10.2}  {:>8.3}  {:>8.4}  {:>11}  {}",
            s.time_min, s.o2_pct, s.co2_pct, uncertainty, s.segment
        );
    }
    out
}

fn trend_line(gas: Gas, trend: &GasTrend) -> String {
    let label = match trend.trend_label {
        TrendLabel::Increasing => trend.trend_label.to_string().yellow(),
        TrendLabel::Decreasing => trend.trend_label.to_string().cyan(),
        TrendLabel::Stable => trend.trend_label.to_string().green(),
    };
    format!(
        "  {:<4} rate {:>+10.6} %/min   accel {:>+10.6} %/min²   {} / {}",
        gas.label(),
        trend.mean_rate,
        trend.mean_acceleration,
        label,
        trend.acceleration_label
    )
}

pub fn report_table(report: &TrendReport) -> String {
    let mut out = format!("{}\n", "Trend".bold());
    for gas in Gas::ALL {
        let _ = writeln!(out, "{}", trend_line(gas, report.gas(gas)));
    }
    out
}

pub fn danger_table(scan: &DangerScan) -> String {
    let mut out = format!("{}\n", "Danger scan".bold());
    for gas in Gas::ALL {
        let line = match scan.event(gas) {
            Some(e) => format!(
                "{} at t={:.2} min (index {}, value {:.4})",
                "crossed".red().bold(),
                e.time_min,
                e.index,
                e.value
            ),
            None => "never crossed".green().to_string(),
        };
        let _ = writeln!(out, "  {:<4} {}", gas.label(), line);
    }
    if let (Some(min_o2), Some(max_co2)) = (scan.min_o2, scan.max_co2) {
        let _ = writeln!(out, "  min O₂ {min_o2:.3} %   max CO₂ {max_co2:.4} %");
    }
    out
}

pub fn summary_table(summary: &SeriesSummary) -> String {
    let mut out = format!(
        "{} ({} samples, {:.1} min)\n",
        "Summary".bold(),
        summary.samples,
        summary.duration_min
    );
    for gas in Gas::ALL {
        let g = summary.gas(gas);
        let slope = g.slope.map(|s| format!("{s:+.6}")).unwrap_or_else(|| "-".into());
        let _ = writeln!(
            out,
            "  {:<4} mean {:.4}  min {:.4}  max {:.4}  final {:.4}  slope {}",
            gas.label(),
            g.mean,
            g.min,
            g.max,
            g.final_value,
            slope
        );
    }
    if summary.o2_danger_at_end {
        let _ = writeln!(out, "  {}", "O₂ below safe level at end of series".red().bold());
    }
    if summary.co2_danger_at_end {
        let _ = writeln!(out, "  {}", "CO₂ above safe level at end of series".red().bold());
    }
    out
}

pub fn comparison_table(c: &Comparison) -> String {
    let mut out = format!("{}\n", "Scenario A".bold());
    for gas in Gas::ALL {
        let _ = writeln!(out, "{}", trend_line(gas, c.a.gas(gas)));
    }
    let _ = writeln!(out, "{}", "Scenario B".bold());
    for gas in Gas::ALL {
        let _ = writeln!(out, "{}", trend_line(gas, c.b.gas(gas)));
    }
    let _ = writeln!(out, "{}", "B − A".bold());
    for gas in Gas::ALL {
        let d = c.delta(gas);
        let _ = writeln!(
            out,
            "  {:<4} final {:>+10.4} %   mean rate {:>+10.6} %/min",
            gas.label(),
            d.final_delta,
            d.mean_rate_delta
        );
    }
    out
}

pub fn scenario_table(user: &str, name: &str, record: &ScenarioRecord) -> String {
    let c = &record.inputs;
    let star = if record.favorite { " ★".yellow().to_string() } else { String::new() };
    let mut out = format!("{}/{}{}\n", user.cyan(), name.cyan().bold(), star);
    let _ = writeln!(out, "  room_volume_m3        {}", c.room_volume_m3);
    let _ = writeln!(out, "  people                {}", c.people);
    let _ = writeln!(out, "  plants                {}", c.plants);
    let _ = writeln!(out, "  air_changes_per_hour  {}", c.air_changes_per_hour);
    let _ = writeln!(out, "  duration_min          {}", c.duration_min);
    let _ = writeln!(out, "  dt_min                {}", c.dt_min);
    let _ = writeln!(out, "  photosynthesis_active {}", c.photosynthesis_active);
    out
}
