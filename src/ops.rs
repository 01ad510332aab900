//! The two workflow operations: render a banner, then link it from a document

use crate::config::HeroConfig;
use crate::core::{compose, pick_colors, resolve_font, ColorPair, Document, FontHandle};
use crate::error::Result;
use crate::io::{read_to_string, save_png, write_atomic};
use log::{debug, info};
use rand::Rng;
use std::path::{Path, PathBuf};

/// What [`create_hero_image`] produced
#[derive(Debug, Clone)]
pub struct HeroImageReport {
    pub path: PathBuf,
    pub colors: ColorPair,
    pub font_path: PathBuf,
    pub font_size: f32,
    pub text_width: u32,
    pub text_height: u32,
}

/// What [`update_front_matter`] changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontMatterUpdate {
    pub path: PathBuf,
    pub image_ref: String,
    /// The document had no front matter block before
    pub created_block: bool,
}

/// Render `text` on a random palette background and write it as PNG to `output`
///
/// Nothing is written unless every step succeeds.
pub fn create_hero_image<R: Rng + ?Sized>(
    text: &str,
    output: &Path,
    config: &HeroConfig,
    rng: &mut R,
) -> Result<HeroImageReport> {
    config.validate()?;

    let colors = pick_colors(rng);
    debug!("Picked {} colors", colors.name);

    let font_path = resolve_font(&config.font_candidates)?;
    let mut font = FontHandle::load(&font_path, config.initial_font_size)?;

    let image = compose(text, colors, &mut font, config)?;
    save_png(image.canvas(), output)?;
    info!("Image saved at {}", output.display());

    let bounds = image.text_bounds();
    Ok(HeroImageReport {
        path: output.to_path_buf(),
        colors,
        font_path,
        font_size: image.font_size(),
        text_width: bounds.width(),
        text_height: bounds.height(),
    })
}

/// Set the `image` key of `doc_path`'s front matter to `images/<image file name>`
///
/// Other keys and the body are kept. The document is replaced atomically.
pub fn update_front_matter(doc_path: &Path, image_path: &Path) -> Result<FrontMatterUpdate> {
    let content = read_to_string(doc_path).map_err(|e| e.in_document(doc_path))?;
    let mut document = Document::parse(&content, doc_path)?;
    let image_ref = document.set_image(image_path)?;

    write_atomic(doc_path, &document.to_text()?).map_err(|e| e.in_document(doc_path))?;
    info!("Updated {} with image {image_ref}", doc_path.display());

    Ok(FrontMatterUpdate {
        path: doc_path.to_path_buf(),
        image_ref,
        created_block: !document.has_block(),
    })
}
