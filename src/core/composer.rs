//! Hero image composition
//!
//! Builds the banner canvas: a flat background fill with a single line of
//! text, shrunk to fit and centered.

use crate::config::HeroConfig;
use crate::core::font::FontHandle;
use crate::core::layout::{centering_offset, fit_font_size, measure_text, TextBounds};
use crate::core::palette::{ColorPair, Rgb};
use crate::error::Result;
use image::{Rgb as Pixel, RgbImage};
use log::debug;
use rusttype::point;

/// A rendered banner, ready to be encoded
#[derive(Debug, Clone)]
pub struct HeroImage {
    canvas: RgbImage,
    colors: ColorPair,
    font_size: f32,
    text_bounds: TextBounds,
}

impl HeroImage {
    pub fn canvas(&self) -> &RgbImage {
        &self.canvas
    }

    pub fn colors(&self) -> ColorPair {
        self.colors
    }

    /// Font size the text was drawn at after fitting
    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    /// Ink box of the drawn text in canvas coordinates
    pub fn text_bounds(&self) -> TextBounds {
        self.text_bounds
    }
}

/// Render `text` onto a fresh canvas
///
/// The font handle's size is shrunk in place while fitting; on success it
/// holds the size the text was drawn at.
pub fn compose(
    text: &str,
    colors: ColorPair,
    font: &mut FontHandle,
    config: &HeroConfig,
) -> Result<HeroImage> {
    let mut canvas = RgbImage::from_pixel(config.width, config.height, Pixel(colors.background));

    font.set_size(config.initial_font_size);
    let fitted = fit_font_size(config, |size| {
        measure_text(font.font(), rusttype::Scale::uniform(size), text).width()
    })?;
    font.set_size(fitted.size);

    let bounds = measure_text(font.font(), font.scale(), text);
    let (dx, dy) = centering_offset(config.width, config.height, &bounds);
    debug!(
        "Drawing {}x{} text at size {} offset ({dx}, {dy})",
        bounds.width(),
        bounds.height(),
        fitted.size
    );
    draw_text(&mut canvas, font, dx, dy, colors.foreground, text);

    Ok(HeroImage {
        canvas,
        colors,
        font_size: fitted.size,
        text_bounds: bounds.translate(dx, dy),
    })
}

/// Draw one line of text with its layout origin at (`x`, `y`)
fn draw_text(canvas: &mut RgbImage, font: &FontHandle, x: i32, y: i32, color: Rgb, text: &str) {
    let scale = font.scale();
    let ascent = font.font().v_metrics(scale).ascent;
    let start = point(x as f32, y as f32 + ascent);

    for glyph in font.font().layout(text, scale, start) {
        let Some(bb) = glyph.pixel_bounding_box() else {
            continue;
        };
        glyph.draw(|gx, gy, coverage| {
            let px = gx as i32 + bb.min.x;
            let py = gy as i32 + bb.min.y;
            if px < 0 || py < 0 {
                return;
            }
            let (px, py) = (px as u32, py as u32);
            if px >= canvas.width() || py >= canvas.height() {
                return;
            }
            let alpha = coverage.clamp(0.0, 1.0);
            if alpha == 0.0 {
                return;
            }
            let dst = canvas.get_pixel_mut(px, py);
            for (channel, src) in dst.0.iter_mut().zip(color) {
                let blended = f32::from(src) * alpha + f32::from(*channel) * (1.0 - alpha);
                *channel = blended.round() as u8;
            }
        });
    }
}
