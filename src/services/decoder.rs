//! Field extraction for an ID number that already passed validation.

use crate::domain::models::{
    Citizenship, DateOfBirth, Gender, IdNumber, VerificationResult, VerifyOptions,
};

/// Age is the plain year difference; month and day are ignored.
pub fn decode(
    id: IdNumber,
    date_of_birth: DateOfBirth,
    options: &VerifyOptions,
) -> VerificationResult {
    let gender_code = id.gender_code();
    let citizenship = Citizenship::from_digit(id.citizenship_digit());
    VerificationResult {
        age: options.current_year() - date_of_birth.full_year,
        gender: Gender::from_code(gender_code),
        gender_code,
        citizenship,
        date_of_birth,
        id_number: id,
    }
}
