use serde::Serialize;

/// Why a candidate ID number was rejected.
///
/// The `Display` text is what the console shows the user.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VerifyError {
    #[error("Invalid ID format. ID must be exactly 13 digits long.")]
    InvalidLength,
    #[error("Invalid ID format. ID must only contain digits.")]
    InvalidCharacters,
    #[error("Invalid ID number. The checksum does not match.")]
    ChecksumMismatch,
    #[error("Invalid date in ID number.")]
    InvalidDate,
}
