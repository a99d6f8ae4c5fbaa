use crate::*;
use std::io::Write;
use std::process::ExitCode;
use tracing::{debug, info, warn};

pub fn handle_verify(
    cli: &Cli,
    id: &str,
    no_log: bool,
    options: &VerifyOptions,
    prefs: UserPreferences,
    log: &ResultLog,
) -> anyhow::Result<ExitCode> {
    let outcome = verify(id, options);
    let is_valid = outcome.is_ok();
    let format = prefs.result_format;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if let Ok(result) = &outcome {
        info!(id = %result.id_number, %format, "id number verified");
        if !cli.json {
            write_result(&mut out, result, format)?;
        }
        if !no_log {
            if let Err(e) = log.append(&result.id_number, format) {
                warn!(path = %log.path().display(), error = ?e, "result log append failed");
                if !cli.json {
                    writeln!(out, "{}", e)?;
                }
            }
        }
    }

    if cli.json {
        write_json(
            &mut out,
            is_valid,
            VerificationReport::from_outcome(id, outcome),
        )?;
    } else if let Err(e) = &outcome {
        writeln!(out, "{}", e)?;
    }

    Ok(if is_valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

pub fn handle_menu(
    options: &VerifyOptions,
    prefs: UserPreferences,
    log: &ResultLog,
    store: &dyn PreferencesStore,
) -> anyhow::Result<ExitCode> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let session = Session::new(stdin.lock(), stdout.lock(), *options, prefs, Some(log), store);
    let summary = session.run()?;
    debug!(verified = summary.verified, "session finished");
    Ok(ExitCode::SUCCESS)
}
