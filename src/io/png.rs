//! PNG output

use crate::error::Result;
use crate::io::fs::write_atomic_with;
use image::{ImageFormat, RgbImage};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Encode `canvas` as PNG and atomically write it to `path`
pub fn save_png(canvas: &RgbImage, path: &Path) -> Result<()> {
    write_atomic_with(path, |file| {
        let mut writer = BufWriter::new(file);
        canvas.write_to(&mut writer, ImageFormat::Png)?;
        writer.flush()?;
        Ok(())
    })
}
