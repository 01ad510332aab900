pub mod composer;
pub mod document;
pub mod font;
pub mod layout;
pub mod palette;

pub use composer::{compose, HeroImage};
pub use document::{image_reference, Document};
pub use font::{resolve_font, FontHandle};
pub use layout::{
    centering_offset, fit_font_size, measure_text, FittedSize, TextBounds, MAX_FIT_STEPS,
};
pub use palette::{pick_colors, ColorPair, PALETTE};
