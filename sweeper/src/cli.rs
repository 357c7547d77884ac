//! Command-line surface of the `sweeper` binary.

use clap::Parser;
use seal_sweep::utils::logging;
use std::io;
use std::path::PathBuf;

use crate::config::{Config, ConfigError, SweepFile};
use crate::interface::{MenuChoice, SweeperInterface};
use crate::scenarios::run_all::run_all_sweeps;
use crate::scenarios::utils::{run_spec, RunOptions};
use crate::sweep_registry::{SweepKind, SweepRegistry};

/// Runs parameter sweeps of the seals simulator, one process at a time.
#[derive(Debug, Parser)]
#[command(name = "sweeper", version)]
pub struct Cli {
    /// Sweep to run; an interactive menu is shown when omitted
    #[arg(value_enum)]
    pub sweep: Option<SweepKind>,

    /// Run every registered sweep in order
    #[arg(long, conflicts_with_all = ["sweep", "sweep_file", "start", "count"])]
    pub all: bool,

    /// Run a seed sweep described in a TOML file
    #[arg(long, value_name = "FILE", conflicts_with = "sweep")]
    pub sweep_file: Option<PathBuf>,

    /// First index to run, e.g. to resume an interrupted sweep
    #[arg(long)]
    pub start: Option<u32>,

    /// Last index to run
    #[arg(long)]
    pub count: Option<u32>,

    /// Simulator executable [default: ./seals]
    #[arg(long, value_name = "PATH")]
    pub executable: Option<PathBuf>,

    /// Driver config file [default: sweeper.toml if present]
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print each command line instead of running it
    #[arg(long)]
    pub dry_run: bool,

    /// Draw a progress bar on stderr
    #[arg(long)]
    pub progress_bar: bool,

    /// List the registered sweeps and exit
    #[arg(long)]
    pub list: bool,
}

impl Cli {
    /// Merges the command-line flags over the config file.
    pub fn run_options(&self, config: &Config) -> RunOptions {
        let mut options = RunOptions::from_config(config);
        if let Some(executable) = &self.executable {
            options.executable = executable.clone();
        }
        options.start = self.start;
        options.count = self.count;
        options.dry_run = self.dry_run;
        options.progress_bar |= self.progress_bar;
        options
    }
}

/// Lists every registered sweep with its key and index range.
pub fn list_sweeps(options: &RunOptions) -> Result<String, ConfigError> {
    let mut text = String::new();
    for definition in SweepRegistry::global().definitions() {
        let spec = (definition.build)(&options.executable)?;
        text.push_str(&format!(
            "{:<16} {} ({} {}..={})\n",
            definition.kind.key(),
            definition.name,
            spec.running_variable(),
            spec.start_index(),
            spec.count()
        ));
    }
    Ok(text)
}

async fn run_kind(kind: SweepKind, options: &RunOptions) -> Result<(), ConfigError> {
    let spec = SweepRegistry::global()
        .build(&kind, &options.executable)
        .ok_or_else(|| ConfigError::ValidationError(format!("Sweep '{}' is not registered", kind.key())))??;
    let spec = options.apply_range(spec)?;
    run_spec(&spec, options).await?;
    Ok(())
}

/// Runs whatever the command line asks for.
pub async fn run(cli: Cli) -> Result<(), ConfigError> {
    let config = Config::load_or_default(cli.config.as_deref())?;
    let options = cli.run_options(&config);
    logging::log("SWEEPER", &format!("Options: {:?}", options));

    if cli.list {
        print!("{}", list_sweeps(&options)?);
        return Ok(());
    }
    if cli.all {
        run_all_sweeps(&options).await?;
        return Ok(());
    }
    if let Some(path) = &cli.sweep_file {
        let spec = SweepFile::load(path)?.to_spec(&options.executable)?;
        let spec = options.apply_range(spec)?;
        run_spec(&spec, &options).await?;
        return Ok(());
    }

    let choice = match cli.sweep {
        Some(kind) => MenuChoice::Sweep(kind),
        None => SweeperInterface::new()
            .prompt(&mut io::stdin().lock())
            .map_err(|e| ConfigError::ValidationError(format!("Failed to read menu choice: {}", e)))?,
    };
    match choice {
        MenuChoice::Sweep(kind) => run_kind(kind, &options).await,
        MenuChoice::RunAll => run_all_sweeps(&options).await.map(|_| ()),
        MenuChoice::Exit => {
            println!("Exiting...");
            Ok(())
        }
    }
}
