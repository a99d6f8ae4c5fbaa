//! Interactive menu and retry loops.
//!
//! Both loops are explicit state machines over a `BufRead`/`Write` pair so the
//! whole console flow can be driven from tests. End of input always leads to
//! a clean exit.

use crate::cli::ResultFormat;
use crate::domain::constants::{APP_DESCRIPTION, RETRY_EXIT_KEYWORD};
use crate::domain::errors::VerifyError;
use crate::domain::models::{UserPreferences, VerificationResult, VerifyOptions};
use crate::services::output::write_result;
use crate::services::preferences::PreferencesStore;
use crate::services::result_log::ResultLog;
use crate::services::verifier::verify;
use clap::ValueEnum;
use std::io::{BufRead, Write};
use tracing::{info, warn};

const RETRY_PROMPT: &str =
    "----- Press Enter to try again or type 'exit' to return to the main menu ------";

pub fn help_lines() -> Vec<String> {
    vec![
        " ".to_string(),
        "Help - South African ID Verifier".to_string(),
        "1. Enter a 13-digit South African ID number.".to_string(),
        "2. The format, checksum and date of birth are verified in that order.".to_string(),
        "3. A valid number shows the date of birth, age, gender and citizenship status."
            .to_string(),
        "4. After a failed attempt, retry or type 'exit' to return to the main menu.".to_string(),
        "5. Every successful verification is appended to the results file.".to_string(),
        " ".to_string(),
    ]
}

pub fn about_lines() -> Vec<String> {
    vec![
        " ".to_string(),
        "About - South African ID Verifier".to_string(),
        format!("Version: {}", env!("CARGO_PKG_VERSION")),
        format!("Description: {}", APP_DESCRIPTION),
        " ".to_string(),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Verify,
    Exit,
    Help,
    About,
    Configure,
    Invalid,
}

impl MenuChoice {
    fn parse(raw: &str) -> Self {
        match raw.trim() {
            "1" => Self::Verify,
            "2" => Self::Exit,
            "3" => Self::Help,
            "4" => Self::About,
            "5" => Self::Configure,
            _ => Self::Invalid,
        }
    }
}

enum MenuState {
    Prompt,
    Dispatch(MenuChoice),
}

enum AttemptState {
    AwaitingInput,
    Check(String),
    Retry(VerifyError),
    Done(VerificationResult),
    Abandoned,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptOutcome {
    Verified,
    Abandoned,
}

/// What a finished session did.
#[derive(Debug, PartialEq, Eq)]
pub struct SessionSummary {
    pub verified: usize,
    pub preferences: UserPreferences,
}

pub struct Session<'a, R, W> {
    input: R,
    out: W,
    options: VerifyOptions,
    prefs: UserPreferences,
    log: Option<&'a ResultLog>,
    store: &'a dyn PreferencesStore,
    configured: bool,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(
        input: R,
        out: W,
        options: VerifyOptions,
        prefs: UserPreferences,
        log: Option<&'a ResultLog>,
        store: &'a dyn PreferencesStore,
    ) -> Self {
        Self {
            input,
            out,
            options,
            prefs,
            log,
            store,
            configured: false,
        }
    }

    /// `None` at end of input. The line terminator is stripped, nothing else.
    fn read_line(&mut self) -> anyhow::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.strip_suffix('\n').unwrap_or(&line);
        let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
        Ok(Some(trimmed.to_string()))
    }

    fn say(&mut self, line: &str) -> anyhow::Result<()> {
        writeln!(self.out, "{}", line)?;
        Ok(())
    }

    fn say_all(&mut self, lines: &[String]) -> anyhow::Result<()> {
        for l in lines {
            self.say(l)?;
        }
        Ok(())
    }

    fn show_menu(&mut self) -> anyhow::Result<()> {
        self.say("Welcome to the South African ID Checker App")?;
        self.say("[1] Verify the authenticity of your ID number")?;
        self.say("[2] Exit the program")?;
        self.say("[3] Help")?;
        self.say("[4] About")?;
        self.say("[5] Configure result format")?;
        write!(self.out, "Make your choice: ")?;
        self.out.flush()?;
        Ok(())
    }

    /// Runs the menu until Exit or end of input.
    pub fn run(mut self) -> anyhow::Result<SessionSummary> {
        let mut verified = 0usize;
        let mut state = MenuState::Prompt;
        loop {
            state = match state {
                MenuState::Prompt => {
                    self.show_menu()?;
                    match self.read_line()? {
                        Some(choice) => MenuState::Dispatch(MenuChoice::parse(&choice)),
                        None => {
                            self.say("")?;
                            MenuState::Dispatch(MenuChoice::Exit)
                        }
                    }
                }
                MenuState::Dispatch(choice) => {
                    match choice {
                        MenuChoice::Verify => {
                            if self.verify_until_done()? == AttemptOutcome::Verified {
                                verified += 1;
                            }
                        }
                        MenuChoice::Exit => {
                            self.say("Exiting the program. Goodbye!")?;
                            self.save_preferences()?;
                            return Ok(SessionSummary {
                                verified,
                                preferences: self.prefs,
                            });
                        }
                        MenuChoice::Help => self.say_all(&help_lines())?,
                        MenuChoice::About => self.say_all(&about_lines())?,
                        MenuChoice::Configure => self.configure()?,
                        MenuChoice::Invalid => {
                            self.say("Invalid choice. Please select a valid option.")?
                        }
                    }
                    MenuState::Prompt
                }
            };
        }
    }

    /// Prompts for ID numbers until one verifies or the user types `exit`.
    pub fn verify_until_done(&mut self) -> anyhow::Result<AttemptOutcome> {
        let mut state = AttemptState::AwaitingInput;
        loop {
            state = match state {
                AttemptState::AwaitingInput => {
                    self.say("Enter your ID Number:")?;
                    match self.read_line()? {
                        Some(raw) => AttemptState::Check(raw),
                        None => AttemptState::Abandoned,
                    }
                }
                AttemptState::Check(raw) => match verify(&raw, &self.options) {
                    Ok(result) => AttemptState::Done(result),
                    Err(e) => AttemptState::Retry(e),
                },
                AttemptState::Retry(e) => {
                    self.say(&e.to_string())?;
                    self.say(RETRY_PROMPT)?;
                    match self.read_line()? {
                        Some(answer) if !answer.trim().eq_ignore_ascii_case(RETRY_EXIT_KEYWORD) => {
                            AttemptState::AwaitingInput
                        }
                        _ => AttemptState::Abandoned,
                    }
                }
                AttemptState::Done(result) => {
                    self.report(&result)?;
                    return Ok(AttemptOutcome::Verified);
                }
                AttemptState::Abandoned => return Ok(AttemptOutcome::Abandoned),
            };
        }
    }

    fn report(&mut self, result: &VerificationResult) -> anyhow::Result<()> {
        let format = self.prefs.result_format;
        write_result(&mut self.out, result, format)?;
        info!(id = %result.id_number, %format, "id number verified");
        if let Some(log) = self.log {
            if let Err(e) = log.append(&result.id_number, format) {
                warn!(path = %log.path().display(), error = ?e, "result log append failed");
                self.say(&e.to_string())?;
            }
        }
        Ok(())
    }

    fn configure(&mut self) -> anyhow::Result<()> {
        let current = self.prefs.result_format;
        write!(
            self.out,
            "Select result format (summary/detailed) [current: {}]: ",
            current
        )?;
        self.out.flush()?;
        let Some(answer) = self.read_line()? else {
            self.say("")?;
            return Ok(());
        };
        match ResultFormat::from_str(answer.trim(), true) {
            Ok(format) => {
                self.prefs.result_format = format;
                self.configured = true;
                self.say(&format!("Result format set to {}.", format))?;
            }
            Err(_) => {
                self.say(&format!("Unknown result format. Keeping {}.", current))?;
            }
        }
        Ok(())
    }

    /// Only choices made through Configure are written back, so a one-off
    /// `--format` override does not become the saved default.
    fn save_preferences(&mut self) -> anyhow::Result<()> {
        if !self.configured {
            return Ok(());
        }
        if let Err(e) = self.store.save(&self.prefs) {
            warn!(error = %e, "saving preferences failed");
            self.say("An error occurred while saving preferences.")?;
        }
        Ok(())
    }
}
