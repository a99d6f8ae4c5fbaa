use crate::cli::ResultFormat;
use crate::domain::constants::RESULT_LOG_SEPARATOR;
use crate::domain::models::IdNumber;
use chrono::{DateTime, Local};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum ResultLogError {
    #[error("An error occurred while saving the results.")]
    Write(#[from] std::io::Error),
}

/// Append-only record of successful verifications.
///
/// Each record is formatted up front and written with a single `write_all`,
/// so records from separate writers do not interleave. The file handle is
/// dropped on every path out of `append_at`.
#[derive(Debug, Clone)]
pub struct ResultLog {
    path: PathBuf,
}

impl ResultLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&self, id: &IdNumber, format: ResultFormat) -> Result<(), ResultLogError> {
        self.append_at(id, format, Local::now())
    }

    pub fn append_at(
        &self,
        id: &IdNumber,
        format: ResultFormat,
        at: DateTime<Local>,
    ) -> Result<(), ResultLogError> {
        let record = format_record(id, format, at);
        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(record.as_bytes())?;
        file.flush()?;
        Ok(())
    }
}

pub fn format_record(id: &IdNumber, format: ResultFormat, at: DateTime<Local>) -> String {
    format!(
        "ID Number: {}\nDate of Verification: {}\nResult Format: {}\n{}\n",
        id,
        at.format("%a %b %d %H:%M:%S %:z %Y"),
        format,
        RESULT_LOG_SEPARATOR
    )
}
