//! Luhn-style check digit validation.

/// Returns true when the Luhn-style sum over `digits` is a multiple of 10.
///
/// The rightmost digit is never doubled. Doubled values above 9 collapse to
/// `(value % 10) + 1`. Non-digit input fails rather than being skipped.
pub fn is_checksum_valid(digits: &str) -> bool {
    let mut sum: u32 = 0;
    let mut alternate = false;
    for c in digits.chars().rev() {
        let Some(mut n) = c.to_digit(10) else {
            return false;
        };
        if alternate {
            n *= 2;
            if n > 9 {
                n = (n % 10) + 1;
            }
        }
        sum += n;
        alternate = !alternate;
    }
    sum % 10 == 0
}
