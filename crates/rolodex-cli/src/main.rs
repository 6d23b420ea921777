mod commands;
mod error;
mod history;
mod repl;

use anyhow::{Context as _, Result};
use clap::Parser;
use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Mutex;
use tracing::{debug, info};

use crate::commands::{print_json, Context, Session};
use crate::error::{exit_code_for, report_error};
use rolodex_config as config;
use rolodex_config::{AppConfig, LoggingConfig};
use rolodex_core::time::local_today;
use rolodex_core::AddressBook;
use rolodex_store::{paths, Store};

#[derive(Debug, Parser)]
#[command(name = "rolodex", version, about = "rolodex address book")]
struct Cli {
    #[arg(long)]
    db_path: Option<PathBuf>,
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    json: bool,
    #[arg(long, short)]
    verbose: bool,
    /// Run a single command (e.g. `add Ada 0501234567`) instead of the
    /// interactive session
    #[arg(value_name = "COMMAND", trailing_var_arg = true, allow_hyphen_values = true)]
    command: Vec<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        db_path,
        config: config_path,
        json,
        verbose,
        command,
    } = cli;

    let app_config = config::load(config_path.clone()).with_context(|| "load config")?;
    init_logging(verbose, &app_config.logging)?;
    match config::resolve_config_path(config_path) {
        Ok(path) => {
            if path.exists() {
                debug!(path = %path.display(), "config resolved");
            } else {
                debug!(path = %path.display(), "config missing, using defaults");
            }
        }
        Err(err) => {
            debug!(error = %err, "config unavailable");
        }
    }

    let db_path = paths::resolve_db_path(db_path.or_else(|| app_config.db_path.clone()))
        .with_context(|| "resolve database path")?;
    debug!(path = %db_path.display(), "database path resolved");

    let store =
        Store::open(&db_path).with_context(|| format!("open database {}", db_path.display()))?;
    store.migrate().with_context(|| "run migrations")?;
    let book = store
        .contacts()
        .load_book()
        .with_context(|| "load contacts")?;
    info!(contacts = book.len(), "address book loaded");

    let history_path = history_path(&app_config, &db_path);
    let ctx = Context {
        store: &store,
        json,
        config: &app_config,
        history_path,
    };

    if command.is_empty() {
        repl::run(&ctx, book)
    } else {
        run_once(&ctx, book, &command)
    }
}

fn run_once(ctx: &Context<'_>, book: AddressBook, words: &[String]) -> Result<()> {
    let mut session = Session::new(book, ctx.config.upcoming_window_days);
    let line = words.join(" ");
    let output = session.handle_line(&line, local_today())?;
    repl::save_session(ctx, &mut session)?;

    if ctx.json {
        print_json(&output.to_json())?;
    } else if let Some(text) = output.to_text() {
        println!("{text}");
    }
    Ok(())
}

fn history_path(app_config: &AppConfig, db_path: &std::path::Path) -> Option<PathBuf> {
    if !app_config.history.enabled {
        return None;
    }
    let path = app_config
        .history
        .path
        .clone()
        .unwrap_or_else(|| paths::history_path_for(db_path));
    debug!(path = %path.display(), "history path resolved");
    Some(path)
}

fn init_logging(verbose: bool, logging: &LoggingConfig) -> Result<()> {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose {
        "debug"
    } else {
        logging.level.as_deref().unwrap_or("warn")
    };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .with_context(|| format!("invalid log level {default_level}"))?;
    let builder = fmt().with_env_filter(filter).with_target(false);

    match &logging.file {
        Some(path) => {
            paths::ensure_parent_dir(path)?;
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("open log file {}", path.display()))?;
            let _ = builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init();
        }
        None => {
            let _ = builder.without_time().with_writer(io::stderr).try_init();
        }
    }
    Ok(())
}
