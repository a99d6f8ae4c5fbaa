use crate::cli::{LeapYearBasis, ResultFormat};
use crate::domain::constants::{
    CITIZENSHIP_DIGIT, DOB_DIGITS, GENDER_DIGITS, ID_LENGTH, MALE_THRESHOLD,
};
use crate::domain::errors::VerifyError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// A 13-digit string that passed the format check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct IdNumber(String);

impl IdNumber {
    /// Length is checked before content, so `"12ab"` reports a length error.
    pub fn parse(raw: &str) -> Result<Self, VerifyError> {
        if raw.chars().count() != ID_LENGTH {
            return Err(VerifyError::InvalidLength);
        }
        if !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(VerifyError::InvalidCharacters);
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn dob_digits(&self) -> &str {
        &self.0[DOB_DIGITS]
    }

    pub fn gender_code(&self) -> u16 {
        self.0[GENDER_DIGITS]
            .bytes()
            .fold(0, |acc, b| acc * 10 + u16::from(b - b'0'))
    }

    pub fn citizenship_digit(&self) -> char {
        char::from(self.0.as_bytes()[CITIZENSHIP_DIGIT])
    }
}

impl fmt::Display for IdNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Date fields as encoded in the `YYMMDD` prefix plus the resolved century.
///
/// Kept as raw fields rather than a `NaiveDate`: with the run-year leap rule a
/// February 29 can be accepted for a birth year that has no such day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateOfBirth {
    pub two_digit_year: u8,
    pub month: u32,
    pub day: u32,
    pub full_year: i32,
}

impl fmt::Display for DateOfBirth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}/{}", self.day, self.month, self.full_year)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    pub fn from_code(code: u16) -> Self {
        if code >= MALE_THRESHOLD {
            Self::Male
        } else {
            Self::Female
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Female => "Female",
            Self::Male => "Male",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Citizenship {
    SaCitizen,
    PermanentResident,
    Unknown,
}

impl Citizenship {
    pub fn from_digit(digit: char) -> Self {
        match digit {
            '0' => Self::SaCitizen,
            '1' => Self::PermanentResident,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for Citizenship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::SaCitizen => "SA Citizen",
            Self::PermanentResident => "Permanent Resident",
            Self::Unknown => "Unknown",
        })
    }
}

/// Decoded fields of a verified ID number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerificationResult {
    pub id_number: IdNumber,
    pub date_of_birth: DateOfBirth,
    pub age: i32,
    pub gender: Gender,
    pub gender_code: u16,
    pub citizenship: Citizenship,
}

/// Outcome of one verification attempt, valid or not, as emitted by `--json`.
#[derive(Debug, Serialize)]
pub struct VerificationReport {
    pub id_number: String,
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<VerifyError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<VerificationResult>,
}

impl VerificationReport {
    pub fn from_outcome(input: &str, outcome: Result<VerificationResult, VerifyError>) -> Self {
        match outcome {
            Ok(result) => Self {
                id_number: input.to_string(),
                is_valid: true,
                failure_reason: None,
                message: None,
                result: Some(result),
            },
            Err(e) => Self {
                id_number: input.to_string(),
                is_valid: false,
                failure_reason: Some(e),
                message: Some(e.to_string()),
                result: None,
            },
        }
    }
}

/// Steps of the verification state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    AwaitingInput,
    FormatCheck,
    ChecksumCheck,
    DateCheck,
    Decode,
    Done,
    Retry,
}

/// Calendar context for a verification run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerifyOptions {
    /// Reference "today" for century resolution and age.
    pub today: NaiveDate,
    pub leap_basis: LeapYearBasis,
}

impl VerifyOptions {
    pub fn current_year(&self) -> i32 {
        self.today.year()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserPreferences {
    #[serde(default)]
    pub result_format: ResultFormat,
}
