use crate::domain::constants::DEFAULT_RESULTS_FILE;
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "said",
    version,
    about = "South African ID number verifier",
    args_override_self = true
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        value_enum,
        env = "SAID_FORMAT",
        help = "Result format for this run (overrides saved preferences)"
    )]
    pub format: Option<ResultFormat>,
    #[arg(
        long,
        global = true,
        env = "SAID_RESULTS_FILE",
        default_value = DEFAULT_RESULTS_FILE,
        help = "File that successful verifications are appended to"
    )]
    pub results_file: PathBuf,
    #[arg(
        long,
        global = true,
        env = "SAID_AS_OF",
        help = "Reference date (YYYY-MM-DD) for century resolution and age; defaults to today"
    )]
    pub as_of: Option<NaiveDate>,
    #[arg(long, global = true, value_enum, default_value_t = LeapYearBasis::BirthYear)]
    pub leap_basis: LeapYearBasis,
    #[arg(long, global = true, value_enum, default_value_t = PrefsStoreKind::File)]
    pub prefs_store: PrefsStoreKind,
    #[arg(long, global = true, env = "SAID_LOG", default_value = "warn")]
    pub log_level: String,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Verify a single ID number and exit
    Verify {
        id: String,
        #[arg(long, default_value_t = false, help = "Do not append to the results file")]
        no_log: bool,
    },
    /// Interactive menu (default)
    Menu,
    /// Show version and description
    About,
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    Show,
    Set {
        #[arg(long, value_enum)]
        format: ResultFormat,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ResultFormat {
    Summary,
    #[default]
    Detailed,
}

impl fmt::Display for ResultFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Summary => "summary",
            Self::Detailed => "detailed",
        })
    }
}

/// Which year decides whether February has 29 days.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum LeapYearBasis {
    /// The resolved year of birth encoded in the ID.
    BirthYear,
    /// The year of the reference date, whatever the ID encodes.
    RunYear,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PrefsStoreKind {
    /// `$HOME/.config/said/preferences.json`
    File,
    /// Load defaults, never save.
    None,
}
