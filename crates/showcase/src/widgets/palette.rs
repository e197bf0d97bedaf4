use crate::display::ColorView;
use crate::error::{Result, ShowcaseError};

pub const IDLE_LABEL: &str = "Change Color";

/// Button that steps through a fixed palette on every click
#[derive(Debug, Clone)]
pub struct ColorCycler {
    colors: Vec<String>,
    index: usize,
    view: ColorView,
}

impl ColorCycler {
    pub fn new(colors: Vec<String>) -> Result<Self> {
        if colors.is_empty() {
            return Err(ShowcaseError::EmptyPalette);
        }
        Ok(Self {
            colors,
            index: 0,
            view: ColorView {
                background: None,
                label: IDLE_LABEL.to_string(),
            },
        })
    }

    pub fn view(&self) -> &ColorView {
        &self.view
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Advance to the next color; the first click lands on the second entry
    pub fn on_click(&mut self) {
        self.index = (self.index + 1) % self.colors.len();
        self.view.background = Some(self.colors[self.index].clone());
        self.view.label = format!("Color Changed ({}/{})", self.index + 1, self.colors.len());
    }
}
