//! Layout configuration for hero image generation
//!
//! All values have defaults matching the classic 1200x600 banner, so a config
//! file only needs the keys it wants to change.

use crate::core::layout::MAX_FIT_STEPS;
use crate::error::{HeroError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Bold fonts tried in order when no explicit font is given
pub const DEFAULT_FONT_CANDIDATES: [&str; 3] = [
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/System/Library/Fonts/Monaco.ttf",
    "C:\\Windows\\Fonts\\Arial.ttf",
];

/// Canvas and text fitting parameters
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeroConfig {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Font size the fitting loop starts from
    pub initial_font_size: f32,
    /// Amount the font size shrinks per fitting step
    pub font_size_step: f32,
    /// Total horizontal space kept free around the text
    pub horizontal_margin: u32,
    /// Smallest font size the fitting loop may reach
    pub min_font_size: f32,
    /// Font files tried in order
    pub font_candidates: Vec<PathBuf>,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 600,
            initial_font_size: 60.0,
            font_size_step: 2.0,
            horizontal_margin: 140,
            min_font_size: 8.0,
            font_candidates: DEFAULT_FONT_CANDIDATES.iter().map(PathBuf::from).collect(),
        }
    }
}

impl HeroConfig {
    /// Load a configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| HeroError::from_io(path, e))?;
        Self::from_yaml_str(&content)
    }

    /// Parse a configuration from YAML text; an empty document yields the defaults
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Widest the text may be after fitting
    pub fn max_text_width(&self) -> u32 {
        self.width.saturating_sub(self.horizontal_margin)
    }

    /// Put an explicitly requested font ahead of the candidate list
    pub fn with_preferred_font(mut self, font: impl Into<PathBuf>) -> Self {
        self.font_candidates.insert(0, font.into());
        self
    }

    /// Check that the values describe a usable layout
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(HeroError::config(format!(
                "canvas must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        if self.horizontal_margin >= self.width {
            return Err(HeroError::config(format!(
                "horizontal_margin {} leaves no room on a {}px canvas",
                self.horizontal_margin, self.width
            )));
        }
        let sizes = [
            ("initial_font_size", self.initial_font_size),
            ("font_size_step", self.font_size_step),
            ("min_font_size", self.min_font_size),
        ];
        if let Some((name, value)) = sizes.iter().find(|(_, value)| !value.is_finite()) {
            return Err(HeroError::config(format!("{name} must be finite, got {value}")));
        }
        if !(self.font_size_step > 0.0) {
            return Err(HeroError::config("font_size_step must be positive"));
        }
        if !(self.min_font_size > 0.0) {
            return Err(HeroError::config("min_font_size must be positive"));
        }
        if self.initial_font_size < self.min_font_size {
            return Err(HeroError::config(format!(
                "initial_font_size {} is below min_font_size {}",
                self.initial_font_size, self.min_font_size
            )));
        }
        let steps = (self.initial_font_size - self.min_font_size) / self.font_size_step;
        if steps > MAX_FIT_STEPS as f32 {
            return Err(HeroError::config(format!(
                "shrinking from {} to {} by {} takes more than {MAX_FIT_STEPS} steps",
                self.initial_font_size, self.min_font_size, self.font_size_step
            )));
        }
        if self.font_candidates.is_empty() {
            return Err(HeroError::config("font_candidates must not be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = HeroConfig::default();
        assert_eq!(config.width, 1200);
        assert_eq!(config.height, 600);
        assert_eq!(config.max_text_width(), 1060);
        assert_eq!(config.font_candidates.len(), 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = HeroConfig::from_yaml_str("horizontal_margin: 200\nfont_size_step: 4\n").unwrap();
        assert_eq!(config.horizontal_margin, 200);
        assert_eq!(config.font_size_step, 4.0);
        assert_eq!(config.width, 1200);
        assert_eq!(config.initial_font_size, 60.0);
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(HeroConfig::from_yaml_str("  \n").unwrap(), HeroConfig::default());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result = HeroConfig::from_yaml_str("colour: red\n");
        assert!(matches!(result, Err(HeroError::Yaml(_))));
    }

    #[test]
    fn test_validation_failures() {
        let bad = [
            "width: 0",
            "horizontal_margin: 1200",
            "font_size_step: 0",
            "min_font_size: -1",
            "initial_font_size: 4",
            "font_candidates: []",
            "initial_font_size: .inf",
            "initial_font_size: .nan",
            "font_size_step: .inf",
            "min_font_size: .inf",
            "min_font_size: .nan",
            "initial_font_size: 1000000000",
        ];
        for yaml in bad {
            let result = HeroConfig::from_yaml_str(yaml);
            assert!(
                matches!(result, Err(HeroError::Config { .. })),
                "{yaml} should be rejected"
            );
        }
    }

    #[test]
    fn test_preferred_font_goes_first() {
        let config = HeroConfig::default().with_preferred_font("/fonts/Custom.ttf");
        assert_eq!(config.font_candidates[0], PathBuf::from("/fonts/Custom.ttf"));
        assert_eq!(config.font_candidates.len(), 4);
    }

    #[test]
    fn test_missing_config_file() {
        let result = HeroConfig::from_file("/definitely/not/here.yaml");
        assert!(matches!(result, Err(HeroError::FileNotFound { .. })));
    }
}
