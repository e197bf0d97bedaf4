// File: src/controller.rs
// Purpose: Owns every widget and the scheduler; routes events and timers

use std::time::Duration;

use tracing::{debug, trace, warn};

use crate::config::{ShowcaseConfig, TimingConfig};
use crate::display::DisplayState;
use crate::error::Result;
use crate::event::{Target, UiEvent};
use crate::scheduler::Fired;
use crate::widgets::{
    Accordion, ClickFeedback, ColorCycler, FormController, Gallery, KeypressDisplay,
    SecretReveal, SubmitOutcome, TaskScheduler, TimerTask,
};

/// The whole page, driven by events and explicit time
///
/// Handlers run to completion; the host calls [`Showcase::advance`] to let
/// cosmetic timers fire.
#[derive(Debug, Clone)]
pub struct Showcase {
    scheduler: TaskScheduler,
    click: ClickFeedback,
    keypress: KeypressDisplay,
    secret: SecretReveal,
    color: ColorCycler,
    gallery: Gallery,
    accordion: Accordion,
    form: FormController,
}

impl Showcase {
    /// Build the page and start the gallery's auto-advance
    pub fn new(config: &ShowcaseConfig) -> Result<Self> {
        config.validate()?;
        let timing: &TimingConfig = &config.timing;

        let mut scheduler = TaskScheduler::new();
        let mut gallery = Gallery::new(config.gallery.images.clone())?;
        gallery.start(timing.gallery_interval(), &mut scheduler);

        Ok(Self {
            click: ClickFeedback::new(timing.click_reset()),
            keypress: KeypressDisplay::new(timing.keypress_reset()),
            secret: SecretReveal::new(
                config.text.secret_message.clone(),
                timing.long_press(),
                timing.secret_hide(),
            ),
            color: ColorCycler::new(config.palette.colors.clone())?,
            gallery,
            accordion: Accordion::new(config.accordion.sections.iter().cloned()),
            form: FormController::new(timing.shake()),
            scheduler,
        })
    }

    /// Current virtual time
    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    /// Number of cosmetic timers still pending
    pub fn pending_timers(&self) -> usize {
        self.scheduler.pending()
    }

    /// Handle one event at the current virtual time
    pub fn dispatch(&mut self, event: UiEvent) -> Result<()> {
        debug!(kind = event.kind(), now_ms = self.now_ms(), "dispatch");

        match event {
            UiEvent::Click { target } => self.on_click(target)?,
            UiEvent::DoubleClick {
                target: Target::SecretTrigger,
            } => self.secret.on_double_click(&mut self.scheduler),
            UiEvent::PointerDown {
                target: Target::SecretTrigger,
            } => self.secret.on_pointer_down(&mut self.scheduler),
            UiEvent::PointerUp {
                target: Target::SecretTrigger,
            }
            | UiEvent::PointerLeave {
                target: Target::SecretTrigger,
            } => self.secret.on_pointer_release(&mut self.scheduler),
            UiEvent::KeyDown { key, code } => {
                self.keypress.on_key(&key, &code, &mut self.scheduler)
            }
            UiEvent::Input { field, value } => self.form.on_input(field, value),
            UiEvent::Submit => {
                self.submit();
            }
            other => trace!(kind = other.kind(), "event has no handler"),
        }
        Ok(())
    }

    /// Submit the form; the result is also reflected in the display state
    pub fn submit(&mut self) -> SubmitOutcome {
        let outcome = self.form.submit(&mut self.scheduler);
        match outcome {
            SubmitOutcome::Accepted => debug!("form accepted"),
            SubmitOutcome::Rejected { focus } => debug!(%focus, "form rejected"),
        }
        outcome
    }

    /// Let `elapsed` pass, firing every timer that comes due
    pub fn advance(&mut self, elapsed: Duration) {
        let until = self.now().saturating_add(elapsed);
        self.advance_to(until);
    }

    /// Move the clock to `until`, firing timers in deadline order
    pub fn advance_to(&mut self, until: Duration) {
        while let Some(fired) = self.scheduler.pop_due(until) {
            self.on_timer(fired);
        }
        self.scheduler.settle(until);
    }

    /// Snapshot of everything on screen
    pub fn display(&self) -> DisplayState {
        DisplayState {
            now_ms: self.now_ms(),
            click: self.click.view().clone(),
            keypress: self.keypress.view().clone(),
            secret: self.secret.view().clone(),
            color: self.color.view().clone(),
            gallery: self.gallery.view().clone(),
            accordion: self.accordion.view().clone(),
            form: self.form.view().clone(),
        }
    }

    fn on_click(&mut self, target: Target) -> Result<()> {
        match target {
            Target::ClickButton => self.click.on_click(&mut self.scheduler),
            Target::ColorButton => self.color.on_click(),
            Target::GalleryNext => self.gallery.next(),
            Target::GalleryPrev => self.gallery.prev(),
            Target::AccordionHeader(index) => {
                if let Err(err) = self.accordion.toggle(index) {
                    warn!(index, "accordion toggle failed: {}", err);
                    return Err(err);
                }
            }
            Target::SecretTrigger => trace!("single click on secret trigger ignored"),
        }
        Ok(())
    }

    fn on_timer(&mut self, fired: Fired<TimerTask>) {
        trace!(
            task = ?fired.task,
            at_ms = fired.at.as_millis() as u64,
            times = fired.times as u64,
            "timer fired"
        );
        match fired.task {
            TimerTask::ClickReset => self.click.on_reset(),
            TimerTask::KeypressReset => self.keypress.on_reset(),
            TimerTask::LongPress => self.secret.on_long_press(&mut self.scheduler),
            TimerTask::SecretHide => self.secret.on_hide(),
            TimerTask::GalleryAdvance => self.gallery.advance_by(fired.times),
            TimerTask::ShakeEnd => self.form.on_shake_end(),
        }
    }

    fn now_ms(&self) -> u64 {
        self.now().as_millis() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShowcaseError;

    fn showcase() -> Showcase {
        Showcase::new(&ShowcaseConfig::default()).unwrap()
    }

    #[test]
    fn test_gallery_timer_starts_immediately() {
        let page = showcase();
        assert_eq!(page.pending_timers(), 1);
        assert_eq!(page.display().gallery.active, 0);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut config = ShowcaseConfig::default();
        config.palette.colors.clear();
        assert_eq!(Showcase::new(&config).unwrap_err(), ShowcaseError::EmptyPalette);
    }

    #[test]
    fn test_unknown_accordion_section_is_an_error() {
        let mut page = showcase();
        let result = page.dispatch(UiEvent::click(Target::AccordionHeader(42)));
        assert_eq!(result, Err(ShowcaseError::UnknownSection { index: 42, len: 3 }));
    }

    #[test]
    fn test_unhandled_events_are_ignored() {
        let mut page = showcase();
        let before = page.display();
        page.dispatch(UiEvent::DoubleClick {
            target: Target::ColorButton,
        })
        .unwrap();
        page.dispatch(UiEvent::click(Target::SecretTrigger)).unwrap();
        assert_eq!(page.display(), before);
    }

    #[test]
    fn test_advance_moves_clock() {
        let mut page = showcase();
        page.advance(Duration::from_millis(250));
        page.advance(Duration::from_millis(250));
        assert_eq!(page.display().now_ms, 500);
    }

    #[test]
    fn test_advance_by_maximum_wait() {
        let mut page = showcase();
        page.advance(Duration::from_millis(u64::MAX));

        let display = page.display();
        assert_eq!(display.now_ms, u64::MAX);
        assert_eq!(display.gallery.active, ((u64::MAX / 3000) % 3) as usize);
        assert_eq!(page.pending_timers(), 1);

        // the clock saturates instead of overflowing
        page.advance(Duration::MAX);
        assert_eq!(page.now(), Duration::MAX);
    }
}
