//! atmos - indoor O₂/CO₂ simulation, forecast and trend analysis
//! Command-line interface over the atmos pipeline crates

mod csv_io;
mod render;
mod settings;

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum, ValueHint};
use colored::*;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use atmos_core::prelude::*;
use atmos_forecast::{run_forecast, ForecastRequest, ForecastRun, ModelKind};
use atmos_scenario::{JsonScenarioStore, ScenarioStore};
use atmos_simulator::simulate;
use atmos_trend::{analyze, compare, danger_scan, summarize, DangerScan, SeriesSummary};

use render::OutputFormat;
use settings::{load_config, EnvArgs};

#[derive(Parser, Debug)]
#[command(name = "atmos")]
#[command(author = "Silvano Neto <dev@silvanoneto.com>")]
#[command(version)]
#[command(about = "Indoor O₂/CO₂ simulation, forecast and trend analysis", long_about = None)]
struct Cli {
    /// Verbose logging (debug level)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table, env = "ATMOS_FORMAT")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum ModelOpt {
    Persistence,
    Ensemble,
}

impl From<ModelOpt> for ModelKind {
    fn from(value: ModelOpt) -> Self {
        match value {
            ModelOpt::Persistence => ModelKind::Persistence,
            ModelOpt::Ensemble => ModelKind::default(),
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Simulate a room and print the series and danger scan
    Simulate {
        #[command(flatten)]
        env: EnvArgs,
    },

    /// Simulate, extend with a forecast and print the combined series
    Forecast {
        #[command(flatten)]
        env: EnvArgs,

        /// Forecast horizon after the end of the simulation (min)
        #[arg(long, default_value_t = 20.0, env = "ATMOS_HORIZON")]
        horizon: f64,

        /// Forecast model
        #[arg(long, value_enum, default_value_t = ModelOpt::Ensemble)]
        model: ModelOpt,
    },

    /// Trend report for a CSV series (time_min,o2_pct,co2_pct)
    Analyze {
        #[arg(value_name = "CSV", value_hint = ValueHint::FilePath)]
        input: PathBuf,
    },

    /// Compare two configurations
    Compare {
        /// Scenario A (TOML)
        #[arg(long, value_hint = ValueHint::FilePath)]
        a: PathBuf,

        /// Scenario B (TOML)
        #[arg(long, value_hint = ValueHint::FilePath)]
        b: PathBuf,
    },

    /// Manage saved scenarios
    Scenario {
        /// Scenario store directory
        #[arg(long, env = "ATMOS_STORE", default_value = "user_scenarios", value_hint = ValueHint::DirPath)]
        store: PathBuf,

        /// User id
        #[arg(long, env = "ATMOS_USER")]
        user: String,

        #[command(subcommand)]
        action: ScenarioAction,
    },
}

#[derive(Subcommand, Debug)]
enum ScenarioAction {
    /// Save a configuration under a name
    Save {
        name: String,

        #[command(flatten)]
        env: EnvArgs,

        /// Mark as favorite
        #[arg(long)]
        favorite: bool,
    },

    /// List scenarios (favorites marked with ★)
    List,

    /// Show a saved configuration
    Show { name: String },

    /// Mark or unmark a scenario as favorite
    Favorite {
        name: String,

        /// Remove the mark
        #[arg(long)]
        unset: bool,
    },

    /// Delete a scenario
    Delete { name: String },
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "atmos=debug" } else { "atmos=info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let format = cli.format;
    match cli.command {
        Commands::Simulate { env } => simulate_command(&env, format),
        Commands::Forecast { env, horizon, model } => {
            forecast_command(&env, horizon, model.into(), format)
        }
        Commands::Analyze { input } => analyze_command(&input, format),
        Commands::Compare { a, b } => compare_command(&a, &b, format),
        Commands::Scenario { store, user, action } => {
            scenario_command(&JsonScenarioStore::new(store), &user, action, format)
        }
    }
}

// ============================================================================
// Simulation and forecast
// ============================================================================

#[derive(Serialize)]
struct SimulationView<'a> {
    config: &'a EnvironmentConfig,
    series: SeriesColumns,
    danger: DangerScan,
    summary: SeriesSummary,
}

fn simulate_command(env: &EnvArgs, format: OutputFormat) -> Result<()> {
    let config = env.resolve()?;
    let series = simulate(&config)?;
    let danger = danger_scan(&series);
    let summary = summarize(&series)?;
    info!(samples = series.len(), "simulation finished");

    match format {
        OutputFormat::Json => render::print_json(&SimulationView {
            config: &config,
            series: series.columns(),
            danger,
            summary,
        }),
        OutputFormat::Csv => render::print_csv(&series),
        OutputFormat::Table => {
            print!("{}", render::series_table(&series));
            println!();
            print!("{}", render::summary_table(&summary));
            println!();
            print!("{}", render::danger_table(&danger));
            Ok(())
        }
    }
}

#[derive(Serialize)]
struct ForecastView<'a> {
    run: &'a ForecastRun,
    series: SeriesColumns,
    trend: TrendReport,
    danger: DangerScan,
}

fn forecast_command(env: &EnvArgs, horizon: f64, model: ModelKind, format: OutputFormat) -> Result<()> {
    let config = env.resolve()?;
    let request = ForecastRequest::new(config, horizon).with_model(model);
    let run = run_forecast(&request)?;
    let trend = analyze(&run.combined)?;
    let danger = danger_scan(&run.combined);

    match format {
        OutputFormat::Json => render::print_json(&ForecastView {
            run: &run,
            series: run.combined.columns(),
            trend,
            danger,
        }),
        OutputFormat::Csv => render::print_csv(&run.combined),
        OutputFormat::Table => {
            let (simulated, predicted) = run.combined.segment_counts();
            println!(
                "{} {} ({} simulated + {} predicted)",
                "Forecast".green().bold(),
                run.model.cyan(),
                simulated,
                predicted
            );
            print!("{}", render::series_table(&run.combined));
            println!();
            print!("{}", render::report_table(&trend));
            println!();
            print!("{}", render::danger_table(&danger));
            Ok(())
        }
    }
}

// ============================================================================
// Analysis of external series
// ============================================================================

#[derive(Serialize)]
struct AnalysisView {
    trend: TrendReport,
    danger: DangerScan,
    summary: SeriesSummary,
}

fn analyze_command(input: &Path, format: OutputFormat) -> Result<()> {
    let file = File::open(input).with_context(|| format!("failed to open {}", input.display()))?;
    let series = csv_io::read_series(file)?;
    let view = AnalysisView {
        trend: analyze(&series)?,
        danger: danger_scan(&series),
        summary: summarize(&series)?,
    };

    match format {
        OutputFormat::Json => render::print_json(&view),
        OutputFormat::Csv => bail!("csv output is not available for analyze"),
        OutputFormat::Table => {
            print!("{}", render::report_table(&view.trend));
            println!();
            print!("{}", render::summary_table(&view.summary));
            println!();
            print!("{}", render::danger_table(&view.danger));
            Ok(())
        }
    }
}

fn compare_command(a: &Path, b: &Path, format: OutputFormat) -> Result<()> {
    let series_a = simulate(&load_config(a)?)?;
    let series_b = simulate(&load_config(b)?)?;
    let comparison = compare(&series_a, &series_b)?;

    match format {
        OutputFormat::Json => render::print_json(&comparison),
        OutputFormat::Csv => bail!("csv output is not available for compare"),
        OutputFormat::Table => {
            print!("{}", render::comparison_table(&comparison));
            Ok(())
        }
    }
}

// ============================================================================
// Scenario store
// ============================================================================

#[derive(Serialize)]
struct ScenarioListing {
    name: String,
    favorite: bool,
}

fn scenario_command(
    store: &dyn ScenarioStore,
    user: &str,
    action: ScenarioAction,
    format: OutputFormat,
) -> Result<()> {
    match action {
        ScenarioAction::Save { name, env, favorite } => {
            let config = env.resolve()?;
            store.save(user, &name, &config, favorite)?;
            println!("{} {}/{}", "Saved".green().bold(), user, name.cyan());
        }

        ScenarioAction::List => {
            let favorites = store.favorites(user)?;
            let listing: Vec<ScenarioListing> = store
                .list(user)?
                .into_iter()
                .map(|name| ScenarioListing {
                    favorite: favorites.contains(&name),
                    name,
                })
                .collect();

            match format {
                OutputFormat::Json => render::print_json(&listing)?,
                OutputFormat::Csv => bail!("csv output is not available for scenario list"),
                OutputFormat::Table if listing.is_empty() => {
                    println!("No scenarios for {}", user.cyan());
                }
                OutputFormat::Table => {
                    for entry in &listing {
                        let star = if entry.favorite { "★".yellow() } else { " ".normal() };
                        println!("{} {}", star, entry.name);
                    }
                }
            }
        }

        ScenarioAction::Show { name } => {
            let record = store.load_record(user, &name)?;
            match format {
                OutputFormat::Json => render::print_json(&record)?,
                OutputFormat::Csv => bail!("csv output is not available for scenario show"),
                OutputFormat::Table => print!("{}", render::scenario_table(user, &name, &record)),
            }
        }

        ScenarioAction::Favorite { name, unset } => {
            store.set_favorite(user, &name, !unset)?;
            let verb = if unset { "Unmarked" } else { "Marked" };
            println!("{} {}/{} as favorite", verb.green().bold(), user, name.cyan());
        }

        ScenarioAction::Delete { name } => {
            store.delete(user, &name)?;
            println!("{} {}/{}", "Deleted".green().bold(), user, name.cyan());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use atmos_scenario::MemoryScenarioStore;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_forecast_args() {
        let cli = Cli::try_parse_from([
            "atmos", "forecast", "--people", "5", "--horizon", "30", "--model", "persistence",
            "-f", "json",
        ])
        .unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        match cli.command {
            Commands::Forecast { env, horizon, model } => {
                assert_eq!(env.people, Some(5));
                assert_eq!(horizon, 30.0);
                assert!(matches!(ModelKind::from(model), ModelKind::Persistence));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_scenario_save() {
        let cli = Cli::try_parse_from([
            "atmos", "scenario", "--user", "ana", "--store", "/tmp/s", "save", "quarto",
            "--plants", "3", "--favorite",
        ])
        .unwrap();
        match cli.command {
            Commands::Scenario { user, action: ScenarioAction::Save { name, env, favorite }, .. } => {
                assert_eq!(user, "ana");
                assert_eq!(name, "quarto");
                assert_eq!(env.plants, Some(3));
                assert!(favorite);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_simulate_command_all_formats() {
        let env = EnvArgs { people: Some(3), duration: Some(10.0), dt: Some(1.0), ..Default::default() };
        for format in [OutputFormat::Table, OutputFormat::Json, OutputFormat::Csv] {
            simulate_command(&env, format).unwrap();
        }

        let invalid = EnvArgs { duration: Some(0.0), ..Default::default() };
        assert!(simulate_command(&invalid, OutputFormat::Table).is_err());
    }

    #[test]
    fn test_scenario_command_round_trip() {
        let store = MemoryScenarioStore::new();
        let save = ScenarioAction::Save {
            name: "quarto".into(),
            env: EnvArgs { people: Some(4), ..Default::default() },
            favorite: false,
        };
        scenario_command(&store, "ana", save, OutputFormat::Table).unwrap();
        scenario_command(
            &store,
            "ana",
            ScenarioAction::Favorite { name: "quarto".into(), unset: false },
            OutputFormat::Table,
        )
        .unwrap();

        assert_eq!(store.load("ana", "quarto").unwrap().people, 4);
        assert_eq!(store.favorites("ana").unwrap(), vec!["quarto"]);

        scenario_command(
            &store,
            "ana",
            ScenarioAction::Delete { name: "quarto".into() },
            OutputFormat::Table,
        )
        .unwrap();
        assert!(store.list("ana").unwrap().is_empty());
    }

    #[test]
    fn test_missing_scenario_is_error() {
        let store = MemoryScenarioStore::new();
        let result = scenario_command(
            &store,
            "ana",
            ScenarioAction::Show { name: "nada".into() },
            OutputFormat::Table,
        );
        assert!(result.is_err());
    }
}
