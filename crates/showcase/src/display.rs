// File: src/display.rs
// Purpose: Serializable snapshot of everything the page shows

use serde::{Deserialize, Serialize};
use showcase_validation::{Field, FieldOutcome, PasswordStrength, STRENGTH_BASELINE_LABEL};

/// Full display state, as handed to the host after every event or tick
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayState {
    /// Virtual time of the snapshot, in milliseconds
    pub now_ms: u64,
    pub click: ClickView,
    pub keypress: KeypressView,
    pub secret: SecretView,
    pub color: ColorView,
    pub gallery: GalleryView,
    pub accordion: AccordionView,
    pub form: FormView,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClickView {
    pub text: String,
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeypressView {
    pub text: String,
    pub highlighted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretView {
    pub visible: bool,
    pub message: String,
    /// CSS animation applied on reveal
    pub animation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorView {
    pub background: Option<String>,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryView {
    pub images: Vec<String>,
    pub active: usize,
}

impl GalleryView {
    /// Source of the image currently shown
    pub fn active_image(&self) -> &str {
        &self.images[self.active]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccordionView {
    pub sections: Vec<SectionView>,
}

impl AccordionView {
    /// Index of the open section, if any
    pub fn open(&self) -> Option<usize> {
        self.sections.iter().position(|section| section.open)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionView {
    pub title: String,
    pub open: bool,
    /// "-" when open, "+" when closed
    pub marker: String,
}

impl SectionView {
    pub fn closed(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            open: false,
            marker: "+".to_string(),
        }
    }

    pub fn set_open(&mut self, open: bool) {
        self.open = open;
        self.marker = if open { "-" } else { "+" }.to_string();
    }
}

/// One text input with its error slot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldView {
    pub value: String,
    /// Empty string means no error
    pub error: String,
    pub invalid: bool,
}

impl FieldView {
    /// Apply a validation outcome to the error slot and invalid marker
    pub fn render(&mut self, outcome: &FieldOutcome) {
        self.error = outcome.error_text().to_string();
        self.invalid = !outcome.valid;
    }
}

/// Password strength meter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthMeter {
    pub label: String,
    pub color: Option<String>,
    pub percent: u8,
}

impl StrengthMeter {
    /// The meter before anything is typed and after a successful submit
    pub fn baseline() -> Self {
        Self {
            label: STRENGTH_BASELINE_LABEL.to_string(),
            color: None,
            percent: 0,
        }
    }

    pub fn from_strength(strength: PasswordStrength) -> Self {
        Self {
            label: strength.label().to_string(),
            color: Some(strength.color().to_string()),
            percent: strength.percent(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormView {
    pub name: FieldView,
    pub email: FieldView,
    pub password: FieldView,
    pub strength: StrengthMeter,
    pub shaking: bool,
    /// Field that holds input focus after a rejected submit
    pub focus: Option<Field>,
    /// Confirmation shown after an accepted submit
    pub notice: Option<String>,
}

impl FormView {
    pub fn field(&self, field: Field) -> &FieldView {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Password => &self.password,
        }
    }

    pub fn field_mut(&mut self, field: Field) -> &mut FieldView {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
        }
    }
}

impl Default for FormView {
    fn default() -> Self {
        Self {
            name: FieldView::default(),
            email: FieldView::default(),
            password: FieldView::default(),
            strength: StrengthMeter::baseline(),
            shaking: false,
            focus: None,
            notice: None,
        }
    }
}
