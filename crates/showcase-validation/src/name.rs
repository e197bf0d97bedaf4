//! Name validation

use crate::outcome::FieldOutcome;
use crate::whitespace::is_blank;

pub const NAME_REQUIRED: &str = "Name is required";

/// Validates the name field: anything but blank is accepted
pub fn validate_name(value: &str) -> FieldOutcome {
    if is_blank(value) {
        FieldOutcome::invalid(NAME_REQUIRED)
    } else {
        FieldOutcome::valid()
    }
}
