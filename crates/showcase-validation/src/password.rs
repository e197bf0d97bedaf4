//! Password strength scoring
//!
//! The strength score only drives the meter under the password field.
//! Whether the password is accepted on submit depends on its length alone,
//! so a long lowercase-only password scores low but still passes.

use serde::{Deserialize, Serialize};

/// Minimum length for a password to be accepted on submit
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Label shown by the meter before any password has been scored
pub const STRENGTH_BASELINE_LABEL: &str = "Password strength";

/// The four independent criteria contributing one point each
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StrengthCriteria {
    pub min_length: bool,
    pub uppercase: bool,
    pub digit: bool,
    pub symbol: bool,
}

impl StrengthCriteria {
    /// Evaluate every criterion against a password
    pub fn evaluate(password: &str) -> Self {
        Self {
            min_length: password_length(password) >= MIN_PASSWORD_LENGTH,
            uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
            digit: password.chars().any(|c| c.is_ascii_digit()),
            symbol: password.chars().any(|c| !c.is_ascii_alphanumeric()),
        }
    }

    /// Number of satisfied criteria (0..=4)
    pub fn count(&self) -> u8 {
        [self.min_length, self.uppercase, self.digit, self.symbol]
            .into_iter()
            .filter(|met| *met)
            .count() as u8
    }
}

/// Strength classification derived from the criteria count
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PasswordStrength {
    VeryWeak,
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl PasswordStrength {
    /// Map a score to its classification; scores above 4 saturate
    pub fn from_score(score: u8) -> Self {
        match score {
            0 => PasswordStrength::VeryWeak,
            1 => PasswordStrength::Weak,
            2 => PasswordStrength::Moderate,
            3 => PasswordStrength::Strong,
            _ => PasswordStrength::VeryStrong,
        }
    }

    pub fn score(self) -> u8 {
        match self {
            PasswordStrength::VeryWeak => 0,
            PasswordStrength::Weak => 1,
            PasswordStrength::Moderate => 2,
            PasswordStrength::Strong => 3,
            PasswordStrength::VeryStrong => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PasswordStrength::VeryWeak => "Very Weak",
            PasswordStrength::Weak => "Weak",
            PasswordStrength::Moderate => "Moderate",
            PasswordStrength::Strong => "Strong",
            PasswordStrength::VeryStrong => "Very Strong",
        }
    }

    /// Meter color as a CSS hex string
    pub fn color(self) -> &'static str {
        match self {
            PasswordStrength::VeryWeak => "#e74c3c",
            PasswordStrength::Weak => "#e67e22",
            PasswordStrength::Moderate => "#f1c40f",
            PasswordStrength::Strong => "#2ecc71",
            PasswordStrength::VeryStrong => "#27ae60",
        }
    }

    /// Meter fill, 25% per point
    pub fn percent(self) -> u8 {
        self.score() * 25
    }
}

/// Result of validating the password field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordOutcome {
    /// Whether the password passes the submit gate
    pub acceptable: bool,
    pub strength: PasswordStrength,
    pub criteria: StrengthCriteria,
}

/// Length in characters, not bytes
pub fn password_length(password: &str) -> usize {
    password.chars().count()
}

/// Scores a password from 0 (Very Weak) to 4 (Very Strong)
pub fn password_strength(password: &str) -> PasswordStrength {
    PasswordStrength::from_score(StrengthCriteria::evaluate(password).count())
}

/// Scores the password and applies the length-only submit gate
pub fn validate_password(password: &str) -> PasswordOutcome {
    let criteria = StrengthCriteria::evaluate(password);
    PasswordOutcome {
        acceptable: criteria.min_length,
        strength: PasswordStrength::from_score(criteria.count()),
        criteria,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", PasswordStrength::VeryWeak)]
    #[case("abc", PasswordStrength::VeryWeak)]
    #[case("abcdefgh", PasswordStrength::Weak)]
    #[case("Abc", PasswordStrength::Weak)]
    #[case("Abc1", PasswordStrength::Moderate)]
    #[case("Abcdef12", PasswordStrength::Strong)]
    #[case("Abc1!", PasswordStrength::Strong)]
    #[case("Abcdef1!", PasswordStrength::VeryStrong)]
    fn test_strength_levels(#[case] password: &str, #[case] expected: PasswordStrength) {
        assert_eq!(password_strength(password), expected);
    }

    #[test]
    fn test_only_ascii_uppercase_and_digits_count() {
        let criteria = StrengthCriteria::evaluate("ÉÀ٣");
        assert!(!criteria.uppercase);
        assert!(!criteria.digit);
        // non-ASCII characters fall outside [A-Za-z0-9]
        assert!(criteria.symbol);
    }

    #[test]
    fn test_space_counts_as_symbol() {
        assert!(StrengthCriteria::evaluate("a b").symbol);
    }

    #[test]
    fn test_length_counts_characters() {
        // 8 characters, 16 bytes
        let password = "éééééééé";
        assert_eq!(password_length(password), 8);
        assert!(validate_password(password).acceptable);
    }

    #[test]
    fn test_gate_is_independent_of_score() {
        let weak_but_long = validate_password("aaaaaaaa");
        assert!(weak_but_long.acceptable);
        assert_eq!(weak_but_long.strength, PasswordStrength::Weak);

        let strong_but_short = validate_password("Ab1!xyz");
        assert!(!strong_but_short.acceptable);
        assert_eq!(strong_but_short.strength, PasswordStrength::Strong);
    }

    #[rstest]
    #[case(PasswordStrength::VeryWeak, "Very Weak", 0)]
    #[case(PasswordStrength::Weak, "Weak", 25)]
    #[case(PasswordStrength::Moderate, "Moderate", 50)]
    #[case(PasswordStrength::Strong, "Strong", 75)]
    #[case(PasswordStrength::VeryStrong, "Very Strong", 100)]
    fn test_meter_presentation(
        #[case] strength: PasswordStrength,
        #[case] label: &str,
        #[case] percent: u8,
    ) {
        assert_eq!(strength.label(), label);
        assert_eq!(strength.percent(), percent);
        assert!(strength.color().starts_with('#'));
    }

    #[test]
    fn test_score_saturates() {
        assert_eq!(PasswordStrength::from_score(9), PasswordStrength::VeryStrong);
    }
}
