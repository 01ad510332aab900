use clap::Parser;
use std::path::PathBuf;

/// Generate a hero image with centered text over a complementary color background
#[derive(Parser, Debug)]
#[command(
    name = "heroimage",
    version,
    about = "Generate a hero image with specified text",
    long_about = "heroimage renders a 1200x600 PNG banner with the given text centered over a \
                  randomly chosen complementary color pair, and can point a document's YAML \
                  front matter at the generated image."
)]
pub struct Cli {
    /// Text to display on the hero image
    pub text: String,

    /// Output path for the hero image
    #[arg(short, long, default_value = "hero_image.png")]
    pub output: PathBuf,

    /// Document whose front matter should reference the image
    #[arg(short, long)]
    pub qmd: Option<PathBuf>,

    /// YAML file with layout settings
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Font file to try before the built-in candidates
    #[arg(long)]
    pub font: Option<PathBuf>,

    /// Seed for the color choice, for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(long, conflicts_with = "verbose")]
    pub quiet: bool,
}
