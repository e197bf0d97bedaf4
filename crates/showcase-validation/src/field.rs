//! Form field identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three inputs on the signup form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Password,
}

impl Field {
    /// Fields in focus order: the first invalid one receives focus on a rejected submit
    pub const ORDER: [Field; 3] = [Field::Name, Field::Email, Field::Password];

    /// Stable element id of the field
    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Password => "password",
        }
    }

    /// Parse a field from its element id
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ORDER.into_iter().find(|field| field.id() == id)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
