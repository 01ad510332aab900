//! Font resolution and loading
//!
//! Fonts are looked up from a short, ordered list of file paths. There is no
//! system font discovery beyond that list.

use crate::error::{HeroError, Result};
use log::debug;
use rusttype::{Font, Scale};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Return the first candidate that exists as a file
pub fn resolve_font<P: AsRef<Path>>(candidates: &[P]) -> Result<PathBuf> {
    for candidate in candidates {
        let path = candidate.as_ref();
        if path.is_file() {
            debug!("Using font {}", path.display());
            return Ok(path.to_path_buf());
        }
        debug!("Font candidate missing: {}", path.display());
    }
    Err(HeroError::font_not_found(
        candidates.iter().map(|p| p.as_ref().to_path_buf()).collect(),
    ))
}

/// A loaded font together with the point size it is currently used at
#[derive(Clone)]
pub struct FontHandle {
    path: PathBuf,
    size: f32,
    font: Font<'static>,
}

impl FontHandle {
    /// Load a font file at the given size
    pub fn load<P: AsRef<Path>>(path: P, size: f32) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read(path).map_err(|e| HeroError::from_io(path, e))?;
        let font = Font::try_from_vec(data).ok_or_else(|| HeroError::invalid_font(path))?;
        Ok(Self {
            path: path.to_path_buf(),
            size,
            font,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn set_size(&mut self, size: f32) {
        self.size = size;
    }

    pub fn font(&self) -> &Font<'static> {
        &self.font
    }

    pub fn scale(&self) -> Scale {
        Scale::uniform(self.size)
    }
}

impl fmt::Debug for FontHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontHandle")
            .field("path", &self.path)
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}

/// Locate any usable TrueType font on this machine for tests
#[cfg(test)]
pub(crate) fn test_font_path() -> Option<PathBuf> {
    let mut candidates: Vec<PathBuf> = crate::config::DEFAULT_FONT_CANDIDATES
        .iter()
        .map(PathBuf::from)
        .collect();
    candidates.extend(
        [
            "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
            "/usr/share/fonts/dejavu/DejaVuSans-Bold.ttf",
            "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
            "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
            "/Library/Fonts/Arial.ttf",
        ]
        .iter()
        .map(PathBuf::from),
    );
    resolve_font(&candidates).ok()
}
