use std::time::Duration;

use super::{TaskScheduler, TimerTask};
use crate::display::ClickView;
use crate::scheduler::TimerHandle;

pub const IDLE_TEXT: &str = "Click the button to see what happens";
pub const CLICKED_TEXT: &str = "Button was clicked!";
pub const SETTLED_TEXT: &str = "Button clicked successfully!";
pub const CLICKED_COLOR: &str = "#2ecc71";

/// Output line under the click button
#[derive(Debug, Clone)]
pub struct ClickFeedback {
    view: ClickView,
    reset_after: Duration,
    pending: Option<TimerHandle>,
}

impl ClickFeedback {
    pub fn new(reset_after: Duration) -> Self {
        Self {
            view: ClickView {
                text: IDLE_TEXT.to_string(),
                color: None,
            },
            reset_after,
            pending: None,
        }
    }

    pub fn view(&self) -> &ClickView {
        &self.view
    }

    pub fn on_click(&mut self, scheduler: &mut TaskScheduler) {
        self.view.text = CLICKED_TEXT.to_string();
        self.view.color = Some(CLICKED_COLOR.to_string());
        scheduler.reschedule(&mut self.pending, self.reset_after, TimerTask::ClickReset);
    }

    /// The color stays; only the text settles
    pub fn on_reset(&mut self) {
        self.pending = None;
        self.view.text = SETTLED_TEXT.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_then_settle() {
        let mut scheduler = TaskScheduler::new();
        let mut click = ClickFeedback::new(Duration::from_millis(1500));
        assert_eq!(click.view().text, IDLE_TEXT);

        click.on_click(&mut scheduler);
        assert_eq!(click.view().text, CLICKED_TEXT);
        assert_eq!(click.view().color.as_deref(), Some(CLICKED_COLOR));

        let fired = scheduler.advance_to(Duration::from_millis(1500));
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].task, TimerTask::ClickReset);
        click.on_reset();
        assert_eq!(click.view().text, SETTLED_TEXT);
        assert_eq!(click.view().color.as_deref(), Some(CLICKED_COLOR));
    }

    #[test]
    fn test_repeat_click_keeps_single_timer() {
        let mut scheduler = TaskScheduler::new();
        let mut click = ClickFeedback::new(Duration::from_millis(1500));
        click.on_click(&mut scheduler);
        click.on_click(&mut scheduler);
        assert_eq!(scheduler.pending(), 1);
    }
}
