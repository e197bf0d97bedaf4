//! Events consumed by the controller

use serde::{Deserialize, Serialize};
use showcase_validation::Field;

/// Interactive elements on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    ClickButton,
    ColorButton,
    GalleryPrev,
    GalleryNext,
    SecretTrigger,
    /// Header of the accordion section at this index
    AccordionHeader(usize),
}

/// A UI event as delivered by the host
///
/// Serialized with a `type` tag, e.g. `{"type":"click","target":"color_button"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UiEvent {
    Click { target: Target },
    DoubleClick { target: Target },
    PointerDown { target: Target },
    PointerUp { target: Target },
    PointerLeave { target: Target },
    KeyDown { key: String, code: String },
    Input { field: Field, value: String },
    /// Form submission; always intercepted, never navigates
    Submit,
}

impl UiEvent {
    pub fn click(target: Target) -> Self {
        UiEvent::Click { target }
    }

    pub fn key(key: impl Into<String>, code: impl Into<String>) -> Self {
        UiEvent::KeyDown {
            key: key.into(),
            code: code.into(),
        }
    }

    pub fn input(field: Field, value: impl Into<String>) -> Self {
        UiEvent::Input {
            field,
            value: value.into(),
        }
    }

    /// Short name used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            UiEvent::Click { .. } => "click",
            UiEvent::DoubleClick { .. } => "double_click",
            UiEvent::PointerDown { .. } => "pointer_down",
            UiEvent::PointerUp { .. } => "pointer_up",
            UiEvent::PointerLeave { .. } => "pointer_leave",
            UiEvent::KeyDown { .. } => "key_down",
            UiEvent::Input { .. } => "input",
            UiEvent::Submit => "submit",
        }
    }
}
