use crate::display::{AccordionView, SectionView};
use crate::error::{Result, ShowcaseError};

/// Collapsible sections, at most one open at a time
#[derive(Debug, Clone)]
pub struct Accordion {
    view: AccordionView,
}

impl Accordion {
    pub fn new<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            view: AccordionView {
                sections: titles.into_iter().map(SectionView::closed).collect(),
            },
        }
    }

    pub fn view(&self) -> &AccordionView {
        &self.view
    }

    /// Close every section, then open `index` unless it was the open one
    pub fn toggle(&mut self, index: usize) -> Result<()> {
        let len = self.view.sections.len();
        let was_open = self
            .view
            .sections
            .get(index)
            .ok_or(ShowcaseError::UnknownSection { index, len })?
            .open;

        for section in &mut self.view.sections {
            section.set_open(false);
        }
        if !was_open {
            self.view.sections[index].set_open(true);
        }
        Ok(())
    }
}
