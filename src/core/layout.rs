//! Text measurement, size fitting and centering

use crate::config::HeroConfig;
use crate::error::{HeroError, Result};
use log::debug;
use rusttype::{point, Font, Scale};

/// Pixel-aligned ink box of a laid out line of text
///
/// Coordinates are relative to the layout origin: x = 0 at the pen start,
/// y = 0 at the top of the ascender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextBounds {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl TextBounds {
    pub fn width(&self) -> u32 {
        (self.max_x - self.min_x).max(0) as u32
    }

    pub fn height(&self) -> u32 {
        (self.max_y - self.min_y).max(0) as u32
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// The same box moved by a whole number of pixels
    pub fn translate(&self, dx: i32, dy: i32) -> Self {
        Self {
            min_x: self.min_x + dx,
            min_y: self.min_y + dy,
            max_x: self.max_x + dx,
            max_y: self.max_y + dy,
        }
    }

    fn union(self, other: Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }
}

/// Measure the ink box of `text` laid out on a single line
///
/// Whitespace-only and empty text have an empty box at the origin.
pub fn measure_text(font: &Font<'_>, scale: Scale, text: &str) -> TextBounds {
    let ascent = font.v_metrics(scale).ascent;
    font.layout(text, scale, point(0.0, ascent))
        .filter_map(|glyph| glyph.pixel_bounding_box())
        .map(|bb| TextBounds {
            min_x: bb.min.x,
            min_y: bb.min.y,
            max_x: bb.max.x,
            max_y: bb.max.y,
        })
        .reduce(TextBounds::union)
        .unwrap_or_default()
}

/// Result of shrinking the font until the text fits
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FittedSize {
    pub size: f32,
    pub width: u32,
}

/// Most shrink steps a single fit may take
pub const MAX_FIT_STEPS: u32 = 1000;

/// Shrink the font size step by step until `measure(size)` fits the canvas
///
/// Fails with [`HeroError::TextTooLong`] instead of going below
/// `config.min_font_size` or taking more than [`MAX_FIT_STEPS`] steps.
pub fn fit_font_size<F>(config: &HeroConfig, mut measure: F) -> Result<FittedSize>
where
    F: FnMut(f32) -> u32,
{
    if !config.initial_font_size.is_finite()
        || !config.font_size_step.is_finite()
        || !(config.font_size_step > 0.0)
    {
        return Err(HeroError::config(format!(
            "cannot fit text starting at size {} with step {}",
            config.initial_font_size, config.font_size_step
        )));
    }

    let max_width = config.max_text_width();
    let mut size = config.initial_font_size;
    let mut width = measure(size);
    let mut steps = 0;

    while width > max_width {
        let next = size - config.font_size_step;
        steps += 1;
        if next < config.min_font_size || next >= size || steps > MAX_FIT_STEPS {
            return Err(HeroError::TextTooLong {
                text_width: width,
                min_size: config.min_font_size,
            });
        }
        size = next;
        width = measure(size);
        debug!("Font size {size}: text width {width}px (limit {max_width}px)");
    }

    Ok(FittedSize { size, width })
}

/// Integer offset that moves `bounds` to the middle of a `width` x `height` canvas
pub fn centering_offset(width: u32, height: u32, bounds: &TextBounds) -> (i32, i32) {
    let left = ((f64::from(width) - f64::from(bounds.width())) / 2.0).round() as i32;
    let top = ((f64::from(height) - f64::from(bounds.height())) / 2.0).round() as i32;
    (left - bounds.min_x, top - bounds.min_y)
}
