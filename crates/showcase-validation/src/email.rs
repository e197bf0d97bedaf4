//! Email validation functions

use once_cell::sync::Lazy;
use regex::Regex;

use crate::outcome::FieldOutcome;
use crate::whitespace::{is_blank, WHITESPACE_CLASS};

pub const INVALID_EMAIL: &str = "Please enter a valid email address";

// local@domain.tld: no whitespace, a single '@', at least one '.' after it
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    let part = format!("[^@{}]+", WHITESPACE_CLASS);
    Regex::new(&format!(r"^{part}@{part}\.{part}$")).expect("email pattern is a valid regex")
});

/// Checks the `local@domain.tld` shape
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Validates the optional email field
///
/// Blank input is accepted (the field is optional). Anything else is matched
/// as typed, so surrounding whitespace makes it invalid.
pub fn validate_email(value: &str) -> FieldOutcome {
    if is_blank(value) {
        return FieldOutcome::valid();
    }

    if is_valid_email(value) {
        FieldOutcome::valid()
    } else {
        FieldOutcome::invalid(INVALID_EMAIL)
    }
}
