//! Hidden message revealed by double-click or long press

use std::time::Duration;

use super::{TaskScheduler, TimerTask};
use crate::display::SecretView;
use crate::scheduler::TimerHandle;

pub const LONG_PRESS_MESSAGE: &str = "🔐 You discovered the long press secret! 🔐";
pub const FADE_IN: &str = "fadeIn 1s";

#[derive(Debug, Clone)]
pub struct SecretReveal {
    view: SecretView,
    hold_for: Duration,
    hide_after: Duration,
    press: Option<TimerHandle>,
    hide: Option<TimerHandle>,
}

impl SecretReveal {
    pub fn new(message: impl Into<String>, hold_for: Duration, hide_after: Duration) -> Self {
        Self {
            view: SecretView {
                visible: false,
                message: message.into(),
                animation: None,
            },
            hold_for,
            hide_after,
            press: None,
            hide: None,
        }
    }

    pub fn view(&self) -> &SecretView {
        &self.view
    }

    /// Whether a long press is currently being timed
    pub fn is_pressing(&self) -> bool {
        self.press.is_some()
    }

    pub fn on_double_click(&mut self, scheduler: &mut TaskScheduler) {
        self.view.animation = Some(FADE_IN.to_string());
        self.reveal(scheduler);
    }

    /// Start timing a long press
    pub fn on_pointer_down(&mut self, scheduler: &mut TaskScheduler) {
        scheduler.reschedule(&mut self.press, self.hold_for, TimerTask::LongPress);
    }

    /// Pointer released or left the trigger before the threshold
    pub fn on_pointer_release(&mut self, scheduler: &mut TaskScheduler) {
        if scheduler.clear(&mut self.press) {
            tracing::trace!("long press cancelled");
        }
    }

    /// The pointer was held long enough
    pub fn on_long_press(&mut self, scheduler: &mut TaskScheduler) {
        self.press = None;
        self.view.message = LONG_PRESS_MESSAGE.to_string();
        self.reveal(scheduler);
    }

    pub fn on_hide(&mut self) {
        self.hide = None;
        self.view.visible = false;
    }

    fn reveal(&mut self, scheduler: &mut TaskScheduler) {
        self.view.visible = true;
        scheduler.reschedule(&mut self.hide, self.hide_after, TimerTask::SecretHide);
    }
}
