use std::time::Duration;

use super::{TaskScheduler, TimerTask};
use crate::display::KeypressView;
use crate::scheduler::TimerHandle;

pub const IDLE_TEXT: &str = "Press any key...";
pub const SETTLED_TEXT: &str = "Press another key...";

/// Panel echoing the last key pressed anywhere on the page
#[derive(Debug, Clone)]
pub struct KeypressDisplay {
    view: KeypressView,
    reset_after: Duration,
    pending: Option<TimerHandle>,
}

impl KeypressDisplay {
    pub fn new(reset_after: Duration) -> Self {
        Self {
            view: KeypressView {
                text: IDLE_TEXT.to_string(),
                highlighted: false,
            },
            reset_after,
            pending: None,
        }
    }

    pub fn view(&self) -> &KeypressView {
        &self.view
    }

    pub fn on_key(&mut self, key: &str, code: &str, scheduler: &mut TaskScheduler) {
        self.view.text = format!("You pressed: {key} (Key code: {code})");
        self.view.highlighted = true;
        scheduler.reschedule(&mut self.pending, self.reset_after, TimerTask::KeypressReset);
    }

    pub fn on_reset(&mut self) {
        self.pending = None;
        self.view.text = SETTLED_TEXT.to_string();
        self.view.highlighted = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_echo_and_reset() {
        let mut scheduler = TaskScheduler::new();
        let mut panel = KeypressDisplay::new(Duration::from_secs(2));

        panel.on_key("a", "KeyA", &mut scheduler);
        assert_eq!(panel.view().text, "You pressed: a (Key code: KeyA)");
        assert!(panel.view().highlighted);

        panel.on_reset();
        assert_eq!(panel.view().text, SETTLED_TEXT);
        assert!(!panel.view().highlighted);
    }
}
