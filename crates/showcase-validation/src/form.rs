//! Whole-form validation and the submit gate

use serde::{Deserialize, Serialize};

use crate::email::validate_email;
use crate::field::Field;
use crate::name::validate_name;
use crate::outcome::FieldOutcome;
use crate::password::{validate_password, PasswordOutcome};

/// Current values of the three form fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl FormInput {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    /// Value of a single field
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Password => &self.password,
        }
    }

    /// Replace the value of a single field
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Password => self.password = value,
        }
    }

    /// Clear every field, as a form reset does
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Outcome of validating every field at once
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormValidation {
    pub name: FieldOutcome,
    pub email: FieldOutcome,
    pub password: PasswordOutcome,
}

impl FormValidation {
    /// Whether a field passes its part of the submit gate
    pub fn is_field_valid(&self, field: Field) -> bool {
        match field {
            Field::Name => self.name.valid,
            Field::Email => self.email.valid,
            Field::Password => self.password.acceptable,
        }
    }

    /// The submit gate: every field valid, password long enough
    pub fn is_submittable(&self) -> bool {
        Field::ORDER.into_iter().all(|field| self.is_field_valid(field))
    }

    /// First failing field in focus order (name, email, password)
    pub fn first_invalid(&self) -> Option<Field> {
        Field::ORDER
            .into_iter()
            .find(|field| !self.is_field_valid(*field))
    }

    /// All failing fields in focus order
    pub fn invalid_fields(&self) -> Vec<Field> {
        Field::ORDER
            .into_iter()
            .filter(|field| !self.is_field_valid(*field))
            .collect()
    }
}

/// Runs all three validations
pub fn validate_form(input: &FormInput) -> FormValidation {
    FormValidation {
        name: validate_name(&input.name),
        email: validate_email(&input.email),
        password: validate_password(&input.password),
    }
}
