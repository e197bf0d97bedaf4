//! Showcase Validation
//!
//! Pure validation functions for the showcase signup form.
//! Used by the headless controller, the CLI harness and the WASM bindings,
//! so every surface applies exactly the same rules.
//!
//! Nothing here touches display state: each function returns a structured
//! outcome and the caller decides how to render it.

pub mod email;
pub mod field;
pub mod form;
pub mod name;
pub mod outcome;
pub mod password;
pub mod whitespace;

// Re-export all validators
pub use email::*;
pub use field::Field;
pub use form::*;
pub use name::*;
pub use outcome::FieldOutcome;
pub use password::*;
pub use whitespace::{is_blank, is_form_whitespace};
