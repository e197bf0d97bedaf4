use std::time::Duration;

use super::{TaskScheduler, TimerTask};
use crate::display::GalleryView;
use crate::error::{Result, ShowcaseError};
use crate::scheduler::TimerHandle;

/// Image carousel with wrap-around navigation and auto-advance
#[derive(Debug, Clone)]
pub struct Gallery {
    view: GalleryView,
    auto_advance: Option<TimerHandle>,
}

impl Gallery {
    pub fn new(images: Vec<String>) -> Result<Self> {
        if images.is_empty() {
            return Err(ShowcaseError::EmptyGallery);
        }
        Ok(Self {
            view: GalleryView { images, active: 0 },
            auto_advance: None,
        })
    }

    pub fn view(&self) -> &GalleryView {
        &self.view
    }

    pub fn len(&self) -> usize {
        self.view.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.view.images.is_empty()
    }

    /// Start the repeating auto-advance timer; a running one is replaced
    pub fn start(&mut self, interval: Duration, scheduler: &mut TaskScheduler) {
        if let Some(previous) = self.auto_advance.take() {
            scheduler.cancel(previous);
        }
        self.auto_advance = Some(scheduler.schedule_repeating(interval, TimerTask::GalleryAdvance));
    }

    pub fn stop(&mut self, scheduler: &mut TaskScheduler) {
        scheduler.clear(&mut self.auto_advance);
    }

    pub fn is_running(&self) -> bool {
        self.auto_advance.is_some()
    }

    pub fn next(&mut self) {
        self.view.active = (self.view.active + 1) % self.len();
    }

    /// Step forward `steps` images at once
    pub fn advance_by(&mut self, steps: u128) {
        let len = self.len();
        let offset = (steps % len as u128) as usize;
        self.view.active = (self.view.active + offset) % len;
    }

    pub fn prev(&mut self) {
        let len = self.len();
        self.view.active = (self.view.active + len - 1) % len;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gallery(n: usize) -> Gallery {
        Gallery::new((0..n).map(|i| format!("img-{i}.jpg")).collect()).unwrap()
    }

    #[test]
    fn test_wraps_both_ways() {
        let mut g = gallery(3);
        g.prev();
        assert_eq!(g.view().active, 2);
        g.next();
        assert_eq!(g.view().active, 0);
        g.next();
        g.next();
        g.next();
        assert_eq!(g.view().active, 0);
        assert_eq!(g.view().active_image(), "img-0.jpg");
    }

    #[test]
    fn test_advance_by_wraps() {
        let mut g = gallery(3);
        g.advance_by(4);
        assert_eq!(g.view().active, 1);
        g.advance_by(u128::from(u64::MAX));
        assert_eq!(g.view().active, (1 + (u64::MAX % 3) as usize) % 3);
    }

    #[test]
    fn test_single_image_stays_put() {
        let mut g = gallery(1);
        g.next();
        g.prev();
        assert_eq!(g.view().active, 0);
    }

    #[test]
    fn test_start_replaces_running_timer() {
        let mut scheduler = TaskScheduler::new();
        let mut g = gallery(3);
        g.start(Duration::from_secs(3), &mut scheduler);
        g.start(Duration::from_secs(3), &mut scheduler);
        assert_eq!(scheduler.pending(), 1);

        g.stop(&mut scheduler);
        assert!(!g.is_running());
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_empty_gallery_rejected() {
        assert_eq!(Gallery::new(Vec::new()).unwrap_err(), ShowcaseError::EmptyGallery);
    }
}
