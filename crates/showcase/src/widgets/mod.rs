//! Page widgets
//!
//! Each widget owns its own state and any timer it has pending. Handlers take
//! the scheduler explicitly; nothing is shared between widgets.

pub mod accordion;
pub mod click;
pub mod form;
pub mod gallery;
pub mod keypress;
pub mod palette;
pub mod secret;

pub use accordion::Accordion;
pub use click::ClickFeedback;
pub use form::{FormController, SubmitOutcome};
pub use gallery::Gallery;
pub use keypress::KeypressDisplay;
pub use palette::ColorCycler;
pub use secret::SecretReveal;

use crate::scheduler::Scheduler;

/// Deferred cosmetic callbacks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerTask {
    ClickReset,
    KeypressReset,
    LongPress,
    SecretHide,
    GalleryAdvance,
    ShakeEnd,
}

pub type TaskScheduler = Scheduler<TimerTask>;
