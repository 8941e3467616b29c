use bookfind::cli::Cli;
use bookfind::error::CliError;
use bookfind::logger::initialize as logger_initialize;
use bookfind::render::{render_json, render_outcome};

use search_core::config::{AppConfig, api_key_from_env};
use search_core::messages::Messages;
use search_core::pipeline::{SearchOutcome, SearchPipeline, SearchSession, SearchUpdate};

use common::ErrorLocation;

use std::fmt::Display;
use std::fs::create_dir_all;
use std::io::Write;
use std::panic::Location;
use std::path::PathBuf;

use clap::Parser;
use log::info;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::watch;

const APP_DIR_NAME: &str = "bookfind";

fn main() {
    let runtime = tokio::runtime::Runtime::new().expect("failed to start tokio runtime");

    if let Err(error) = runtime.block_on(run()) {
        eprintln!("{error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    let cli = Cli::parse();

    let log_dir = dirs::data_local_dir()
        .map(|dir| dir.join(APP_DIR_NAME).join("logs"))
        .ok_or_else(|| CliError::Setup {
            message: String::from("No local data directory available for logs"),
            location: ErrorLocation::from(Location::caller()),
        })?;
    create_dir_all(&log_dir).map_err(|e| CliError::Setup {
        message: format!("Failed to create log directory: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })?;
    logger_initialize(&log_dir)?;

    info!("bookfind starting");

    let config_dir = resolve_config_dir(&cli)?;
    let mut config = AppConfig::load(&config_dir).map_err(core_error)?;

    if let Some(max_results) = cli.max_results {
        config.api.max_results = max_results;
    }
    if let Some(lang) = &cli.lang {
        config.api.lang_restrict = lang.clone();
    }
    config.validate().map_err(core_error)?;

    let key = api_key_from_env().map_err(core_error)?;

    let pipeline = SearchPipeline::new(config.api.clone(), key, config.messages.clone())
        .map_err(core_error)?;
    let session = SearchSession::new(pipeline);

    match cli.joined_query() {
        Some(query) => search_once(&session, &query, cli.json).await,
        None => search_interactively(&session, cli.json).await,
    }
}

fn resolve_config_dir(cli: &Cli) -> Result<PathBuf, CliError> {
    if let Some(dir) = &cli.config_dir {
        return Ok(dir.clone());
    }

    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .ok_or_else(|| CliError::Setup {
            message: String::from("No config directory available"),
            location: ErrorLocation::from(Location::caller()),
        })
}

async fn search_once(session: &SearchSession, query: &str, json: bool) -> Result<(), CliError> {
    let messages = session.messages().clone();
    let mut updates = session.subscribe();

    let generation = session.submit(query);
    let outcome = await_finish(&mut updates, generation).await?;

    print!("{}", render(&outcome, &messages, json));

    if matches!(outcome, SearchOutcome::Failed { .. }) {
        std::process::exit(1);
    }
    Ok(())
}

async fn search_interactively(session: &SearchSession, json: bool) -> Result<(), CliError> {
    let messages = session.messages().clone();
    let mut updates = session.subscribe();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("Type a search term, or an empty line to quit.");
    loop {
        print!("search> ");
        std::io::stdout().flush().ok();

        let Some(line) = lines.next_line().await.map_err(|e| CliError::Setup {
            message: format!("Failed to read from stdin: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })?
        else {
            break;
        };

        let query = line.trim().to_string();
        if query.is_empty() {
            break;
        }

        let generation = session.submit(&query);
        let outcome = await_finish(&mut updates, generation).await?;
        print!("{}", render(&outcome, &messages, json));
    }

    info!("bookfind exiting");
    Ok(())
}

fn render(outcome: &SearchOutcome, messages: &Messages, json: bool) -> String {
    if json {
        render_json(outcome, messages)
    } else {
        render_outcome(outcome, messages)
    }
}

/// Wait until the watch channel reports the submitted generation finished.
///
/// Updates for older generations are skipped; the session guarantees they
/// can never follow a newer one.
async fn await_finish(
    updates: &mut watch::Receiver<SearchUpdate>,
    target: u64,
) -> Result<SearchOutcome, CliError> {
    loop {
        {
            let update = updates.borrow_and_update();
            if let SearchUpdate::Finished {
                generation,
                outcome,
            } = &*update
            {
                if *generation == target {
                    return Ok(outcome.clone());
                }
            }
        }
        updates.changed().await.map_err(|_| CliError::Setup {
            message: String::from("Search session closed unexpectedly"),
            location: ErrorLocation::from(Location::caller()),
        })?;
    }
}

#[track_caller]
fn core_error(error: impl Display) -> CliError {
    CliError::Core {
        message: error.to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}
