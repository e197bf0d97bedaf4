// File: src/widgets/form.rs
// Purpose: Signup form: runs the validators and renders their outcomes

use serde::{Deserialize, Serialize};
use std::time::Duration;

use showcase_validation::{
    validate_email, validate_form, validate_name, validate_password, Field, FieldOutcome,
    FormInput, FormValidation, PasswordOutcome,
};

use super::{TaskScheduler, TimerTask};
use crate::display::{FormView, StrengthMeter};
use crate::scheduler::TimerHandle;

pub const SUBMITTED_NOTICE: &str = "Form submitted successfully!";

/// What happened to a submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SubmitOutcome {
    Accepted,
    /// Focus moved to the first invalid field
    Rejected { focus: Field },
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted)
    }
}

#[derive(Debug, Clone)]
pub struct FormController {
    input: FormInput,
    view: FormView,
    shake_for: Duration,
    shake: Option<TimerHandle>,
}

impl FormController {
    pub fn new(shake_for: Duration) -> Self {
        Self {
            input: FormInput::default(),
            view: FormView::default(),
            shake_for,
            shake: None,
        }
    }

    pub fn view(&self) -> &FormView {
        &self.view
    }

    pub fn input(&self) -> &FormInput {
        &self.input
    }

    /// Store a new field value and re-validate that field only
    pub fn on_input(&mut self, field: Field, value: String) {
        self.view.notice = None;
        self.view.field_mut(field).value = value.clone();
        self.input.set(field, value);

        match field {
            Field::Name => {
                let outcome = validate_name(&self.input.name);
                self.render_text(field, &outcome);
            }
            Field::Email => {
                let outcome = validate_email(&self.input.email);
                self.render_text(field, &outcome);
            }
            Field::Password => {
                let outcome = validate_password(&self.input.password);
                self.render_password(&outcome);
            }
        }
    }

    /// Validate everything and either accept (and reset) or reject the form
    pub fn submit(&mut self, scheduler: &mut TaskScheduler) -> SubmitOutcome {
        let result = validate_form(&self.input);
        self.render(&result);

        match result.first_invalid() {
            None => {
                self.reset();
                self.view.notice = Some(SUBMITTED_NOTICE.to_string());
                SubmitOutcome::Accepted
            }
            Some(focus) => {
                self.view.notice = None;
                self.view.shaking = true;
                self.view.focus = Some(focus);
                scheduler.reschedule(&mut self.shake, self.shake_for, TimerTask::ShakeEnd);
                SubmitOutcome::Rejected { focus }
            }
        }
    }

    pub fn on_shake_end(&mut self) {
        self.shake = None;
        self.view.shaking = false;
    }

    /// Apply a whole-form result to the display
    pub fn render(&mut self, result: &FormValidation) {
        self.render_text(Field::Name, &result.name);
        self.render_text(Field::Email, &result.email);
        self.render_password(&result.password);
    }

    fn render_text(&mut self, field: Field, outcome: &FieldOutcome) {
        self.view.field_mut(field).render(outcome);
    }

    // The password never carries an error; only the meter reflects it
    fn render_password(&mut self, outcome: &PasswordOutcome) {
        self.view.password.render(&FieldOutcome::valid());
        self.view.strength = StrengthMeter::from_strength(outcome.strength);
    }

    fn reset(&mut self) {
        self.input.clear();
        for field in Field::ORDER {
            self.view.field_mut(field).value.clear();
        }
        self.view.strength = StrengthMeter::baseline();
        self.view.focus = None;
    }
}
