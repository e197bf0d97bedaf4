//! # showcase
//!
//! Headless controller for the interactive showcase page.
//!
//! Events go in, a serializable [`DisplayState`] comes out. Cosmetic timers
//! (click/keypress resets, secret hiding, gallery auto-advance, form shake)
//! run on a virtual clock that the host advances explicitly, so the whole
//! page can be driven deterministically from tests, the CLI harness or the
//! browser bindings.
//!
//! ## Quick Start
//!
//! ```rust
//! use showcase::{Showcase, ShowcaseConfig, UiEvent};
//! use showcase::validation::Field;
//! use std::time::Duration;
//!
//! let mut page = Showcase::new(&ShowcaseConfig::default()).unwrap();
//! page.dispatch(UiEvent::input(Field::Password, "Abcdef12")).unwrap();
//! assert_eq!(page.display().form.strength.label, "Strong");
//!
//! page.advance(Duration::from_secs(3));
//! assert_eq!(page.display().gallery.active, 1);
//! ```

pub mod config;
pub mod controller;
pub mod display;
pub mod error;
pub mod event;
pub mod scheduler;
pub mod widgets;

// Re-export main types
pub use config::ShowcaseConfig;
pub use controller::Showcase;
pub use display::DisplayState;
pub use error::{Result, ShowcaseError};
pub use event::{Target, UiEvent};
pub use scheduler::{Scheduler, TimerHandle};
pub use widgets::{SubmitOutcome, TimerTask};

// Validation rules are shared with every surface
pub use showcase_validation as validation;
