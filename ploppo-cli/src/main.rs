mod display;
mod import;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use crate::display::{display_draws, display_import_summary, display_json, display_report};
use crate::import::load_draws;
use ploppo_core::analyze_all;
use ploppo_core::config::{AnalysisConfig, BucketBoundaries};

#[derive(Parser)]
#[command(name = "ploppo", about = "Ploppo Pattern Explorer: lottery draw statistics")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze a CSV or spreadsheet of past draws (columns Num1 to Num6)
    Analyze {
        /// Path to the .csv / .xlsx file
        #[arg(short, long)]
        file: PathBuf,

        /// JSON configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Range bucket thresholds (comma separated, e.g. 10,20,30,40)
        #[arg(short, long)]
        boundaries: Option<String>,

        /// Rows in the top numbers table
        #[arg(short, long)]
        top: Option<usize>,

        /// Print the results as JSON instead of tables
        #[arg(long)]
        json: bool,
    },

    /// List the most recent draws of a file
    List {
        /// Path to the .csv / .xlsx file
        #[arg(short, long)]
        file: PathBuf,

        /// Number of draws to display
        #[arg(short, long, default_value = "10")]
        last: usize,
    },

    /// Print the default configuration as JSON
    Config {
        /// Write it to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Analyze {
            file,
            config,
            boundaries,
            top,
            json,
        } => {
            let config = resolve_config(config.as_deref(), boundaries.as_deref(), top)?;
            cmd_analyze(&file, &config, json)
        }
        Command::List { file, last } => cmd_list(&file, last),
        Command::Config { output } => cmd_config(output.as_deref()),
    }
}

/// File values first, then command-line overrides.
fn resolve_config(
    path: Option<&Path>,
    boundaries: Option<&str>,
    top: Option<usize>,
) -> Result<AnalysisConfig> {
    let mut config = match path {
        Some(p) => AnalysisConfig::load(p)?,
        None => AnalysisConfig::default(),
    };
    if let Some(raw) = boundaries {
        config.boundaries = raw
            .parse::<BucketBoundaries>()
            .context("Invalid --boundaries")?;
    }
    if let Some(top) = top {
        config.top = top;
    }
    log::debug!("Using configuration {:?}", config);
    Ok(config)
}

fn cmd_analyze(file: &Path, config: &AnalysisConfig, json: bool) -> Result<()> {
    let imported = load_draws(file)?;
    if imported.table.is_empty() {
        if !json {
            display_import_summary(&imported);
        }
        bail!("No valid draws in {:?}", file);
    }

    let report = analyze_all(&imported.table, config);

    if json {
        display_json(&imported, &report)
    } else {
        display_import_summary(&imported);
        display_report(&report, config.top);
        Ok(())
    }
}

fn cmd_list(file: &Path, last: usize) -> Result<()> {
    let imported = load_draws(file)?;
    display_import_summary(&imported);
    println!();
    display_draws(&imported.table.latest(last));
    Ok(())
}

fn cmd_config(output: Option<&Path>) -> Result<()> {
    let config = AnalysisConfig::default();
    match output {
        Some(path) => {
            config.save(path)?;
            println!("Configuration written to {}", path.display());
        }
        None => println!("{}", config.to_json()?),
    }
    Ok(())
}
