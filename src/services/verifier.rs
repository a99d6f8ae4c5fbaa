//! Validation orchestrator: format → checksum → date → decode.
//!
//! Each check is a state of a small machine; the first failing check ends the
//! run, so later checks never see input an earlier one rejected.

use crate::domain::errors::VerifyError;
use crate::domain::models::{DateOfBirth, IdNumber, Stage, VerificationResult, VerifyOptions};
use crate::services::checksum::is_checksum_valid;
use crate::services::decoder::decode;
use crate::services::dob::resolve_date_of_birth;
use tracing::debug;

enum Flow<'a> {
    Format(&'a str),
    Checksum(IdNumber),
    Date(IdNumber),
    Decode(IdNumber, DateOfBirth),
    Done(VerificationResult),
    Failed(VerifyError),
}

impl Flow<'_> {
    fn stage(&self) -> Stage {
        match self {
            Flow::Format(_) => Stage::FormatCheck,
            Flow::Checksum(_) => Stage::ChecksumCheck,
            Flow::Date(_) => Stage::DateCheck,
            Flow::Decode(..) => Stage::Decode,
            Flow::Done(_) => Stage::Done,
            Flow::Failed(_) => Stage::Retry,
        }
    }
}

fn step<'a>(flow: Flow<'a>, options: &VerifyOptions) -> Flow<'a> {
    match flow {
        Flow::Format(raw) => match IdNumber::parse(raw) {
            Ok(id) => Flow::Checksum(id),
            Err(e) => Flow::Failed(e),
        },
        Flow::Checksum(id) => {
            if is_checksum_valid(id.as_str()) {
                Flow::Date(id)
            } else {
                Flow::Failed(VerifyError::ChecksumMismatch)
            }
        }
        Flow::Date(id) => match resolve_date_of_birth(id.dob_digits(), options) {
            Ok(dob) => Flow::Decode(id, dob),
            Err(e) => Flow::Failed(e),
        },
        Flow::Decode(id, dob) => Flow::Done(decode(id, dob, options)),
        terminal @ (Flow::Done(_) | Flow::Failed(_)) => terminal,
    }
}

/// Runs the checks and returns the outcome with every stage visited, starting
/// at `AwaitingInput` and ending at `Done` or `Retry`.
pub fn verify_traced(
    input: &str,
    options: &VerifyOptions,
) -> (Result<VerificationResult, VerifyError>, Vec<Stage>) {
    let mut trace = vec![Stage::AwaitingInput];
    let mut flow = Flow::Format(input);
    loop {
        let stage = flow.stage();
        debug!(?stage, "verification stage");
        trace.push(stage);
        flow = match flow {
            Flow::Done(result) => return (Ok(result), trace),
            Flow::Failed(e) => return (Err(e), trace),
            other => step(other, options),
        };
    }
}

pub fn verify(input: &str, options: &VerifyOptions) -> Result<VerificationResult, VerifyError> {
    verify_traced(input, options).0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::LeapYearBasis;
    use crate::domain::models::{Citizenship, Gender};
    use chrono::NaiveDate;

    fn opts() -> VerifyOptions {
        VerifyOptions {
            today: NaiveDate::from_ymd_opt(2026, 10, 17).unwrap(),
            leap_basis: LeapYearBasis::BirthYear,
        }
    }

    #[test]
    fn valid_id_visits_every_stage() {
        let (outcome, trace) = verify_traced("2001014800086", &opts());
        let r = outcome.unwrap();
        assert_eq!(r.gender, Gender::Female);
        assert_eq!(r.citizenship, Citizenship::SaCitizen);
        assert_eq!(
            trace,
            vec![
                Stage::AwaitingInput,
                Stage::FormatCheck,
                Stage::ChecksumCheck,
                Stage::DateCheck,
                Stage::Decode,
                Stage::Done
            ]
        );
    }

    #[test]
    fn length_failure_short_circuits_before_checksum() {
        // checksum and date would also fail here
        let (outcome, trace) = verify_traced("99139", &opts());
        assert_eq!(outcome, Err(VerifyError::InvalidLength));
        assert_eq!(trace, vec![Stage::AwaitingInput, Stage::FormatCheck, Stage::Retry]);
    }

    #[test]
    fn length_is_checked_before_characters() {
        assert_eq!(verify("12ab", &opts()), Err(VerifyError::InvalidLength));
        assert_eq!(verify("", &opts()), Err(VerifyError::InvalidLength));
        assert_eq!(verify("20010148000860", &opts()), Err(VerifyError::InvalidLength));
    }

    #[test]
    fn non_digits_are_rejected_at_format_check() {
        let (outcome, trace) = verify_traced("200101480008X", &opts());
        assert_eq!(outcome, Err(VerifyError::InvalidCharacters));
        assert_eq!(trace, vec![Stage::AwaitingInput, Stage::FormatCheck, Stage::Retry]);
        assert_eq!(verify(" 200101480008", &opts()), Err(VerifyError::InvalidCharacters));
    }

    #[test]
    fn multibyte_input_counts_characters() {
        assert_eq!(
            verify("２００１０１４８０００８６", &opts()),
            Err(VerifyError::InvalidCharacters)
        );
    }

    #[test]
    fn checksum_failure_skips_date_check() {
        // month 13 would fail the date check too
        let (outcome, trace) = verify_traced("0013014800084", &opts());
        assert_eq!(outcome, Err(VerifyError::ChecksumMismatch));
        assert_eq!(
            trace,
            vec![
                Stage::AwaitingInput,
                Stage::FormatCheck,
                Stage::ChecksumCheck,
                Stage::Retry
            ]
        );
    }

    #[test]
    fn bad_date_with_good_checksum_reports_invalid_date() {
        let (outcome, trace) = verify_traced("0013014800083", &opts());
        assert_eq!(outcome, Err(VerifyError::InvalidDate));
        assert_eq!(
            trace,
            vec![
                Stage::AwaitingInput,
                Stage::FormatCheck,
                Stage::ChecksumCheck,
                Stage::DateCheck,
                Stage::Retry
            ]
        );
    }

    #[test]
    fn leap_day_id_follows_basis() {
        assert!(verify("0002294800087", &opts()).is_ok());
        let run_year = VerifyOptions {
            leap_basis: LeapYearBasis::RunYear,
            ..opts()
        };
        assert_eq!(verify("0002294800087", &run_year), Err(VerifyError::InvalidDate));
    }
}
