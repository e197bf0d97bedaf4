// File: src/config.rs
// Purpose: Configuration parsing from showcase.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::error::ShowcaseError;

/// Showcase configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ShowcaseConfig {
    #[serde(default)]
    pub timing: TimingConfig,

    #[serde(default)]
    pub palette: PaletteConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,

    #[serde(default)]
    pub accordion: AccordionConfig,

    #[serde(default)]
    pub text: TextConfig,
}

/// Cosmetic timer durations, in milliseconds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingConfig {
    #[serde(default = "default_click_reset_ms")]
    pub click_reset_ms: u64,

    #[serde(default = "default_keypress_reset_ms")]
    pub keypress_reset_ms: u64,

    #[serde(default = "default_secret_hide_ms")]
    pub secret_hide_ms: u64,

    /// How long the secret trigger must be held
    #[serde(default = "default_long_press_ms")]
    pub long_press_ms: u64,

    #[serde(default = "default_gallery_interval_ms")]
    pub gallery_interval_ms: u64,

    /// How long the form shakes after a rejected submit
    #[serde(default = "default_shake_ms")]
    pub shake_ms: u64,
}

/// Colors cycled by the color button
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteConfig {
    #[serde(default = "default_colors")]
    pub colors: Vec<String>,
}

/// Gallery image sources, in display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryConfig {
    #[serde(default = "default_images")]
    pub images: Vec<String>,
}

/// Accordion section titles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccordionConfig {
    #[serde(default = "default_sections")]
    pub sections: Vec<String>,
}

/// Static copy shown by the widgets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextConfig {
    /// Message revealed by double-clicking the secret trigger
    #[serde(default = "default_secret_message")]
    pub secret_message: String,
}

// Default values
fn default_click_reset_ms() -> u64 {
    1500
}

fn default_keypress_reset_ms() -> u64 {
    2000
}

fn default_secret_hide_ms() -> u64 {
    3000
}

fn default_long_press_ms() -> u64 {
    1000
}

fn default_gallery_interval_ms() -> u64 {
    3000
}

fn default_shake_ms() -> u64 {
    500
}

fn default_colors() -> Vec<String> {
    ["#e74c3c", "#3498db", "#2ecc71", "#f1c40f", "#9b59b6"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_images() -> Vec<String> {
    vec![
        "images/gallery-1.jpg".to_string(),
        "images/gallery-2.jpg".to_string(),
        "images/gallery-3.jpg".to_string(),
    ]
}

fn default_sections() -> Vec<String> {
    vec![
        "What is event handling?".to_string(),
        "How does the gallery work?".to_string(),
        "Why validate on the client?".to_string(),
    ]
}

fn default_secret_message() -> String {
    "🎉 You found the secret message! 🎉".to_string()
}

// Default implementations
impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            click_reset_ms: default_click_reset_ms(),
            keypress_reset_ms: default_keypress_reset_ms(),
            secret_hide_ms: default_secret_hide_ms(),
            long_press_ms: default_long_press_ms(),
            gallery_interval_ms: default_gallery_interval_ms(),
            shake_ms: default_shake_ms(),
        }
    }
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            colors: default_colors(),
        }
    }
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            images: default_images(),
        }
    }
}

impl Default for AccordionConfig {
    fn default() -> Self {
        Self {
            sections: default_sections(),
        }
    }
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            secret_message: default_secret_message(),
        }
    }
}

impl TimingConfig {
    pub fn click_reset(&self) -> Duration {
        Duration::from_millis(self.click_reset_ms)
    }

    pub fn keypress_reset(&self) -> Duration {
        Duration::from_millis(self.keypress_reset_ms)
    }

    pub fn secret_hide(&self) -> Duration {
        Duration::from_millis(self.secret_hide_ms)
    }

    pub fn long_press(&self) -> Duration {
        Duration::from_millis(self.long_press_ms)
    }

    pub fn gallery_interval(&self) -> Duration {
        Duration::from_millis(self.gallery_interval_ms)
    }

    pub fn shake(&self) -> Duration {
        Duration::from_millis(self.shake_ms)
    }

    fn named(&self) -> [(&'static str, u64); 6] {
        [
            ("click_reset_ms", self.click_reset_ms),
            ("keypress_reset_ms", self.keypress_reset_ms),
            ("secret_hide_ms", self.secret_hide_ms),
            ("long_press_ms", self.long_press_ms),
            ("gallery_interval_ms", self.gallery_interval_ms),
            ("shake_ms", self.shake_ms),
        ]
    }
}

impl ShowcaseConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: ShowcaseConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        config
            .validate()
            .with_context(|| format!("Invalid config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from default path (./showcase.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("showcase.toml")
    }

    /// Check the invariants the widgets rely on
    pub fn validate(&self) -> std::result::Result<(), ShowcaseError> {
        if let Some((name, _)) = self.timing.named().into_iter().find(|(_, ms)| *ms == 0) {
            return Err(ShowcaseError::ZeroInterval { name });
        }
        if self.palette.colors.is_empty() {
            return Err(ShowcaseError::EmptyPalette);
        }
        if self.gallery.images.is_empty() {
            return Err(ShowcaseError::EmptyGallery);
        }
        Ok(())
    }

    /// Render the effective configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}
