use chrono::Local;
use clap::Parser;
use std::process::ExitCode;
use tracing::warn;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod domain;
mod services;

pub use cli::*;
pub use domain::constants::*;
pub use domain::errors::*;
pub use domain::models::*;
pub use services::output::{print_one, write_json, write_result};
pub use services::preferences::{JsonFileStore, NoopStore, PreferencesStore};
pub use services::result_log::ResultLog;
pub use services::session::{about_lines, Session};
pub use services::verifier::verify;

use commands::{handle_about, handle_config_commands, handle_menu, handle_verify};

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

/// Falls back to the no-op store when the preferences file has no location.
fn open_store(kind: PrefsStoreKind) -> Box<dyn PreferencesStore> {
    match kind {
        PrefsStoreKind::File => match JsonFileStore::default_location() {
            Ok(store) => Box::new(store),
            Err(e) => {
                warn!(error = %e, "preferences file unavailable, preferences will not be saved");
                Box::new(NoopStore)
            }
        },
        PrefsStoreKind::None => Box::new(NoopStore),
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let store = open_store(cli.prefs_store);
    let mut prefs = store.load().unwrap_or_else(|e| {
        warn!(error = %e, "could not load preferences, using defaults");
        UserPreferences::default()
    });
    if let Some(format) = cli.format {
        prefs.result_format = format;
    }

    let options = VerifyOptions {
        today: cli.as_of.unwrap_or_else(|| Local::now().date_naive()),
        leap_basis: cli.leap_basis,
    };
    let log = ResultLog::new(&cli.results_file);

    match &cli.command {
        None | Some(Commands::Menu) => handle_menu(&options, prefs, &log, store.as_ref()),
        Some(Commands::Verify { id, no_log }) => {
            handle_verify(&cli, id, *no_log, &options, prefs, &log)
        }
        Some(Commands::About) => handle_about(&cli),
        Some(Commands::Config { command }) => {
            handle_config_commands(&cli, command, store.as_ref())
        }
    }
}
