//! heroimage: generate hero banner images and link them from YAML front matter
//!
//! This library renders a fixed-size banner with a single line of text centered
//! over one of a few complementary background/foreground color pairs, and can
//! point a document's front matter `image` key at the result.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use heroimage::{create_hero_image, update_front_matter, HeroConfig, Result};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use std::path::Path;
//!
//! fn main() -> Result<()> {
//!     let config = HeroConfig::default();
//!     let mut rng = StdRng::seed_from_u64(7);
//!
//!     let report = create_hero_image("Hello World", Path::new("hero_image.png"), &config, &mut rng)?;
//!     update_front_matter(Path::new("post.qmd"), &report.path)?;
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`core`]: colors, font lookup, text fitting, composition and the document model
//! - [`io`]: file reading, atomic writes and PNG encoding
//! - [`ops`]: the two end-to-end operations built on top of both
//! - [`error`]: the error type shared by everything above

pub use config::{HeroConfig, DEFAULT_FONT_CANDIDATES};
pub use error::{ErrorCategory, HeroError, Result};
pub use ops::{create_hero_image, update_front_matter, FrontMatterUpdate, HeroImageReport};

pub mod args;
pub mod config;
pub mod core;
pub mod error;
pub mod io;
pub mod ops;
