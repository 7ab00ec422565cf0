use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use tracing::info;

use spark_tools::envfile::ConfigMap;
use spark_tools::validation::{load_sources, report, run_all};
use spark_tools::{logging, Config};

/// Validates the web and API env files plus the process environment.
#[derive(Parser, Debug)]
#[command(name = "validate-config", version)]
struct Cli {
    /// Project root containing apps/web and apps/api
    #[arg(short, long, env = "INTERVIEWSPARK_ROOT")]
    root: Option<PathBuf>,

    /// Print the report as JSON instead of the coloured summary
    #[arg(long)]
    json: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let mut config = Config::from_env();
    if let Some(root) = cli.root {
        config = config.with_root(root);
    }
    logging::init(&config);

    if !cli.json {
        println!("{}", report::banner());
    }

    let Some(combined) = load_sources(&config, ConfigMap::from_process_env()) else {
        println!(
            "\n{}",
            style("❌ No .env files found. Please copy from .env.example files.").red()
        );
        return Ok(ExitCode::from(1));
    };
    info!("Validating {} configuration keys", combined.len());

    let result = run_all(&combined);

    if cli.json {
        let json = serde_json::to_string_pretty(&result).context("Failed to encode report")?;
        println!("{json}");
    } else {
        report::print(&result);
    }

    Ok(ExitCode::from(result.exit_code() as u8))
}
