//! Showcase WASM
//!
//! WebAssembly bindings for the showcase page.
//! The page script forwards DOM events to [`ShowcaseApp`] and applies the
//! returned display state; the validators are also exported on their own for
//! pages that only need live form feedback.

use serde::Serialize;
use showcase::{Showcase, ShowcaseConfig, UiEvent};
use showcase_validation as validation;
use std::time::Duration;
use wasm_bindgen::prelude::*;

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Strength meter data returned to JavaScript
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct StrengthReport {
    pub score: u8,
    pub label: String,
    pub color: String,
    pub percent: u8,
    /// Whether the password passes the submit gate
    pub acceptable: bool,
}

impl From<validation::PasswordOutcome> for StrengthReport {
    fn from(outcome: validation::PasswordOutcome) -> Self {
        Self {
            score: outcome.strength.score(),
            label: outcome.strength.label().to_string(),
            color: outcome.strength.color().to_string(),
            percent: outcome.strength.percent(),
            acceptable: outcome.acceptable,
        }
    }
}

/// Whole-form verdict returned to JavaScript
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FormReport {
    pub submittable: bool,
    /// Element id of the field to focus, if the form was rejected
    pub first_invalid: Option<String>,
    pub name_error: String,
    pub email_error: String,
    pub strength: StrengthReport,
}

impl From<validation::FormValidation> for FormReport {
    fn from(result: validation::FormValidation) -> Self {
        Self {
            submittable: result.is_submittable(),
            first_invalid: result.first_invalid().map(|field| field.id().to_string()),
            name_error: result.name.error_text().to_string(),
            email_error: result.email.error_text().to_string(),
            strength: result.password.into(),
        }
    }
}

/// Validate the name field
///
/// # Returns
/// `{ valid, message }` where `message` is null when valid
#[wasm_bindgen(js_name = validateName)]
pub fn validate_name_js(value: &str) -> Result<JsValue, JsValue> {
    Ok(serde_wasm_bindgen::to_value(&validation::validate_name(value))?)
}

/// Validate the optional email field
#[wasm_bindgen(js_name = validateEmail)]
pub fn validate_email_js(value: &str) -> Result<JsValue, JsValue> {
    Ok(serde_wasm_bindgen::to_value(&validation::validate_email(value))?)
}

/// Quick email shape check
#[wasm_bindgen(js_name = isValidEmail)]
pub fn is_valid_email_js(email: &str) -> bool {
    validation::is_valid_email(email)
}

/// Score a password for the strength meter
///
/// # Example (JavaScript)
/// ```javascript
/// const { label, color, percent } = passwordStrength(input.value);
/// ```
#[wasm_bindgen(js_name = passwordStrength)]
pub fn password_strength_js(password: &str) -> Result<JsValue, JsValue> {
    let report = StrengthReport::from(validation::validate_password(password));
    Ok(serde_wasm_bindgen::to_value(&report)?)
}

/// Score a password, returning only the numeric score (0-4)
#[wasm_bindgen(js_name = passwordScore)]
pub fn password_score_js(password: &str) -> u8 {
    validation::password_strength(password).score()
}

/// Validate all three fields at once
///
/// # Example (JavaScript)
/// ```javascript
/// const report = validateForm({ name, email, password });
/// if (!report.submittable) document.getElementById(report.firstInvalid).focus();
/// ```
#[wasm_bindgen(js_name = validateForm)]
pub fn validate_form_js(input: JsValue) -> Result<JsValue, JsValue> {
    let input: validation::FormInput = serde_wasm_bindgen::from_value(input)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse form input: {}", e)))?;
    let report = FormReport::from(validation::validate_form(&input));
    Ok(serde_wasm_bindgen::to_value(&report)?)
}

/// The whole page controller, owned by the page script
#[wasm_bindgen]
pub struct ShowcaseApp {
    inner: Showcase,
}

#[wasm_bindgen]
impl ShowcaseApp {
    /// Create the controller; pass `undefined` for the default configuration
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<ShowcaseApp, JsValue> {
        let config = if config.is_undefined() || config.is_null() {
            ShowcaseConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| JsValue::from_str(&format!("Failed to parse config: {}", e)))?
        };

        let inner = Showcase::new(&config).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(ShowcaseApp { inner })
    }

    /// Handle one event, e.g. `{ type: "click", target: "color_button" }`
    pub fn dispatch(&mut self, event: JsValue) -> Result<JsValue, JsValue> {
        let event: UiEvent = serde_wasm_bindgen::from_value(event)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse event: {}", e)))?;

        if let Err(err) = self.inner.dispatch(event) {
            let message = err.to_string();
            web_sys::console::warn_1(&JsValue::from_str(&message));
            return Err(JsValue::from_str(&message));
        }
        self.display()
    }

    /// Let `elapsed_ms` milliseconds pass (call from a `requestAnimationFrame` or interval)
    pub fn advance(&mut self, elapsed_ms: f64) -> Result<JsValue, JsValue> {
        if !elapsed_ms.is_finite() || elapsed_ms < 0.0 {
            return Err(JsValue::from_str("elapsed time must be a non-negative number"));
        }
        self.inner.advance(Duration::from_millis(elapsed_ms as u64));
        self.display()
    }

    /// Current display state
    pub fn display(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.inner.display())?)
    }
}
