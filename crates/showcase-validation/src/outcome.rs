use serde::{Deserialize, Serialize};

/// Result of validating a single text field
///
/// `message` is the text to show under the field; `None` means the error
/// slot is cleared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOutcome {
    pub valid: bool,
    pub message: Option<String>,
}

impl FieldOutcome {
    /// A passing outcome with no message
    pub fn valid() -> Self {
        Self {
            valid: true,
            message: None,
        }
    }

    /// A failing outcome carrying the message to display
    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: Some(message.into()),
        }
    }

    /// Error text as rendered (empty string = no error)
    pub fn error_text(&self) -> &str {
        self.message.as_deref().unwrap_or("")
    }
}
