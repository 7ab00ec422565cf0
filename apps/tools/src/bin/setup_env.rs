use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use tracing::error;

use spark_tools::setup::{self, TerminalPrompter};
use spark_tools::{logging, Config};

/// Interactively writes apps/web/.env and apps/api/.env.
#[derive(Parser, Debug)]
#[command(name = "setup-env", version)]
struct Cli {
    /// Project root containing apps/web and apps/api
    #[arg(short, long, env = "INTERVIEWSPARK_ROOT")]
    root: Option<PathBuf>,
}

fn run(config: &Config) -> Result<()> {
    cliclack::intro(style("🚀 InterviewSpark Environment Setup").magenta().bold())?;
    let mut prompter = TerminalPrompter;
    let outcome = setup::run(config, &mut prompter).context("Setup failed")?;

    let written = outcome.writes.iter().filter(|w| w.succeeded()).count();
    cliclack::outro(format!(
        "{written} of {} env files written",
        outcome.writes.len()
    ))?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let mut config = Config::from_env();
    if let Some(root) = cli.root {
        config = config.with_root(root);
    }
    logging::init(&config);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:?}");
            let _ = cliclack::outro_cancel(format!("❌ {e:#}"));
            ExitCode::from(1)
        }
    }
}
