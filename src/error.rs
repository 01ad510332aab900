//! Error types for the heroimage library
//!
//! This module provides error handling for all library operations, including
//! font resolution, rendering, file I/O and front matter parsing.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for all library operations
#[derive(Error, Debug)]
pub enum HeroError {
    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing or serialization errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Image encoding errors
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// None of the candidate font files exist
    #[error("Font file not found (searched: {})", display_paths(.searched))]
    FontNotFound { searched: Vec<PathBuf> },

    /// A font file exists but could not be parsed
    #[error("Invalid font file: {path}")]
    InvalidFont { path: PathBuf },

    /// Text still too wide at the smallest allowed font size
    #[error("Text too long: {text_width}px wide at minimum font size {min_size}")]
    TextTooLong { text_width: u32, min_size: f32 },

    /// File not found or invalid path
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Permission errors
    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    /// Front matter parsing errors
    #[error("Invalid front matter in {path}: {reason}")]
    InvalidFrontMatter { path: PathBuf, reason: String },

    /// A file error hit while reading or rewriting a document's front matter
    #[error("Cannot update front matter of {path}: {source}")]
    DocumentAccess {
        path: PathBuf,
        #[source]
        source: Box<HeroError>,
    },

    /// Invalid configuration values
    #[error("Configuration error: {message}")]
    Config { message: String },
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, HeroError>;

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl HeroError {
    /// Create a new font not found error
    pub fn font_not_found(searched: Vec<PathBuf>) -> Self {
        Self::FontNotFound { searched }
    }

    /// Create a new invalid font error
    pub fn invalid_font(path: impl Into<PathBuf>) -> Self {
        Self::InvalidFont { path: path.into() }
    }

    /// Create a new file not found error
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a new permission denied error
    pub fn permission_denied(path: impl Into<PathBuf>) -> Self {
        Self::PermissionDenied { path: path.into() }
    }

    /// Create a new invalid front matter error
    pub fn invalid_front_matter(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::InvalidFrontMatter {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Map an I/O error on `path` to the closest typed variant
    pub fn from_io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::file_not_found(path),
            std::io::ErrorKind::PermissionDenied => Self::permission_denied(path),
            _ => Self::Io(err),
        }
    }

    /// Attribute a plain file error to the document at `path`
    ///
    /// Other errors already carry their own category and pass through.
    pub fn in_document(self, path: impl Into<PathBuf>) -> Self {
        match self {
            Self::Io(_) | Self::FileNotFound { .. } | Self::PermissionDenied { .. } => {
                Self::DocumentAccess {
                    path: path.into(),
                    source: Box::new(self),
                }
            }
            other => other,
        }
    }

    /// Which stage of the workflow this error belongs to
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FontNotFound { .. } => ErrorCategory::FontNotFound,
            Self::InvalidFont { .. } | Self::TextTooLong { .. } | Self::Image(_) => {
                ErrorCategory::Render
            }
            Self::InvalidFrontMatter { .. } | Self::Yaml(_) | Self::DocumentAccess { .. } => {
                ErrorCategory::FrontMatter
            }
            Self::Config { .. } => ErrorCategory::Config,
            // Unwrapped file errors come from writing the image.
            Self::Io(_) | Self::FileNotFound { .. } | Self::PermissionDenied { .. } => {
                ErrorCategory::Render
            }
        }
    }

    /// Only a missing font halts the whole run
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::FontNotFound { .. })
    }
}

/// Workflow stage an error is reported under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    FontNotFound,
    Render,
    FrontMatter,
    Config,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FontNotFound => write!(f, "FONT NOT FOUND"),
            Self::Render => write!(f, "RENDER FAILURE"),
            Self::FrontMatter => write!(f, "FRONT MATTER FAILURE"),
            Self::Config => write!(f, "CONFIGURATION"),
        }
    }
}
