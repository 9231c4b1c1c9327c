mod cli;
mod commands;
mod render;
mod server;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use render::{RenderOptions, Renderer};
use std::{fs, process::ExitCode};
use tracing_subscriber::EnvFilter;
use wk_core::{Config, Planner, SqliteStore};

const DEFAULT_LOG_FILTER: &str = "wk=warn,wk_core=warn";

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("wk: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    init_tracing(config.log_level.as_deref());

    let renderer = Renderer::new(Some(RenderOptions {
        use_color: cli.color.use_color(),
    }));
    let mut planner = Planner::new(open_store(&config)?, &config);

    match cli.command {
        Command::Add { args, tag } => commands::add(&mut planner, &renderer, &args, tag.as_deref()),
        Command::Note { args, tag } => {
            commands::note(&mut planner, &renderer, &args, tag.as_deref())
        }
        Command::Actual {
            unplanned,
            args,
            tag,
        } => commands::actual(&mut planner, &renderer, unplanned, &args, tag.as_deref()),
        Command::Done { id } => commands::done(&mut planner, &renderer, &id),
        Command::Undone { id } => commands::undone(&mut planner, &renderer, &id),
        Command::Rm { id } => commands::rm(&mut planner, &renderer, &id),
        Command::Ls {
            day,
            last,
            next,
            week,
        } => {
            let selector = commands::week_selector(last, next, week.as_deref())?;
            commands::ls(&planner, &renderer, day.as_deref(), selector)
        }
        Command::Serve { port } => {
            let port = port.unwrap_or(config.port);
            let runtime = tokio::runtime::Runtime::new().context("starting async runtime")?;
            runtime.block_on(server::serve(planner, port, &renderer))
        }
    }
}

/// `RUST_LOG` wins over the `log_level` config key. Output goes to stderr so it never
/// mixes with the printed week.
fn init_tracing(config_level: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config_level.unwrap_or(DEFAULT_LOG_FILTER)))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn open_store(config: &Config) -> Result<SqliteStore> {
    if let Some(dir) = config.db_path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    SqliteStore::open(&config.db_path)
        .with_context(|| format!("opening database {}", config.db_path.display()))
}
