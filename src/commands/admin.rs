use crate::*;
use serde::Serialize;
use std::process::ExitCode;
use tracing::warn;

#[derive(Serialize)]
struct AboutInfo {
    name: &'static str,
    version: &'static str,
    description: &'static str,
}

pub fn handle_about(cli: &Cli) -> anyhow::Result<ExitCode> {
    if cli.json {
        write_json(
            &mut std::io::stdout().lock(),
            true,
            AboutInfo {
                name: env!("CARGO_PKG_NAME"),
                version: env!("CARGO_PKG_VERSION"),
                description: APP_DESCRIPTION,
            },
        )?;
    } else {
        for line in about_lines() {
            println!("{}", line);
        }
    }
    Ok(ExitCode::SUCCESS)
}

#[derive(Serialize)]
struct ConfigReport {
    result_format: ResultFormat,
    persisted: bool,
}

pub fn handle_config_commands(
    cli: &Cli,
    command: &ConfigCommands,
    store: &dyn PreferencesStore,
) -> anyhow::Result<ExitCode> {
    match command {
        ConfigCommands::Show => {
            let prefs = store.load()?;
            let report = ConfigReport {
                result_format: prefs.result_format,
                persisted: store.persists(),
            };
            print_one(cli.json, report, |r| format!("result_format: {}", r.result_format))?;
        }
        ConfigCommands::Set { format } => {
            let mut prefs = store.load()?;
            prefs.result_format = *format;
            store.save(&prefs)?;
            if !store.persists() {
                warn!("preference store is disabled; setting not saved");
            }
            let report = ConfigReport {
                result_format: prefs.result_format,
                persisted: store.persists(),
            };
            print_one(cli.json, report, |r| {
                if r.persisted {
                    format!("result format set to {}", r.result_format)
                } else {
                    format!("result format {} not saved (--prefs-store none)", r.result_format)
                }
            })?;
        }
    }
    Ok(ExitCode::SUCCESS)
}
