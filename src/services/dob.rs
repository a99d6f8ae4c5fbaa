//! Date-of-birth extraction from the `YYMMDD` prefix.

use crate::cli::LeapYearBasis;
use crate::domain::errors::VerifyError;
use crate::domain::models::{DateOfBirth, VerifyOptions};
use chrono::NaiveDate;

struct RawDate {
    yy: u8,
    month: u32,
    day: u32,
}

fn split(six_digits: &str) -> Option<RawDate> {
    if six_digits.len() != 6 || !six_digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(RawDate {
        yy: six_digits[0..2].parse().ok()?,
        month: six_digits[2..4].parse().ok()?,
        day: six_digits[4..6].parse().ok()?,
    })
}

/// Two-digit years above the reference year's last two digits fall in the
/// 1900s; everything else, including equality, in the 2000s.
pub fn resolve_century(yy: u8, current_year: i32) -> i32 {
    if i32::from(yy) > current_year.rem_euclid(100) {
        1900 + i32::from(yy)
    } else {
        2000 + i32::from(yy)
    }
}

fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    u32::try_from(next.signed_duration_since(first).num_days()).ok()
}

fn validate(raw: &RawDate, options: &VerifyOptions) -> Option<i32> {
    if !(1..=12).contains(&raw.month) {
        return None;
    }
    let full_year = resolve_century(raw.yy, options.current_year());
    let leap_reference = match options.leap_basis {
        LeapYearBasis::BirthYear => full_year,
        LeapYearBasis::RunYear => options.current_year(),
    };
    let max_day = days_in_month(leap_reference, raw.month)?;
    (raw.day > 0 && raw.day <= max_day).then_some(full_year)
}

/// Boolean form of [`resolve_date_of_birth`]; the verifier resolves directly.
#[allow(dead_code)]
pub fn is_valid_date(six_digits: &str, options: &VerifyOptions) -> bool {
    resolve_date_of_birth(six_digits, options).is_ok()
}

/// Fails with `InvalidDate` exactly when `is_valid_date` is false.
pub fn resolve_date_of_birth(
    six_digits: &str,
    options: &VerifyOptions,
) -> Result<DateOfBirth, VerifyError> {
    let raw = split(six_digits).ok_or(VerifyError::InvalidDate)?;
    let full_year = validate(&raw, options).ok_or(VerifyError::InvalidDate)?;
    Ok(DateOfBirth {
        two_digit_year: raw.yy,
        month: raw.month,
        day: raw.day,
        full_year,
    })
}
