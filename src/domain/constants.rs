pub const ID_LENGTH: usize = 13;

/// `YYMMDD` prefix.
pub const DOB_DIGITS: std::ops::Range<usize> = 0..6;
pub const GENDER_DIGITS: std::ops::Range<usize> = 6..10;
pub const CITIZENSHIP_DIGIT: usize = 10;

/// Gender codes at or above this value are male.
pub const MALE_THRESHOLD: u16 = 5000;

pub const DEFAULT_RESULTS_FILE: &str = "verification_results.txt";
pub const RESULT_LOG_SEPARATOR: &str = "--------------------------------------";

pub const DETAILED_BANNER: &str = "----------------- Valid ID -----------------";
pub const DETAILED_TRAILER: &str = "----------------- End of Details -----------------";

pub const RETRY_EXIT_KEYWORD: &str = "exit";

pub const APP_DESCRIPTION: &str = "Verifies South African ID numbers: format, checksum and \
    embedded date of birth, then reports age, gender and citizenship status.";
