use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, LevelFilter};
use rand::rngs::StdRng;
use rand::SeedableRng;

use heroimage::{args::Cli, create_hero_image, update_front_matter, HeroConfig, HeroError};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    let mut config = match &cli.config {
        Some(path) => HeroConfig::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => HeroConfig::default(),
    };
    if let Some(font) = &cli.font {
        config = config.with_preferred_font(font);
    }

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let report = match create_hero_image(&cli.text, &cli.output, &config, &mut rng) {
        Ok(report) => report,
        Err(e) => return Err(report_failure(e)),
    };
    if !cli.quiet {
        println!("Image saved at {}", report.path.display());
    }

    if let Some(doc) = &cli.qmd {
        let update = update_front_matter(doc, &report.path).map_err(report_failure)?;
        if !cli.quiet {
            println!("Updated {} with image {}", update.path.display(), update.image_ref);
        }
    }

    Ok(())
}

fn init_logging(cli: &Cli) {
    let level = if cli.verbose {
        LevelFilter::Debug
    } else if cli.quiet {
        LevelFilter::Error
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn report_failure(err: HeroError) -> anyhow::Error {
    debug!("Failure category: {}", err.category());
    if err.is_fatal() {
        return anyhow::Error::new(err)
            .context("no usable font found; install DejaVu Sans or Arial, or pass --font");
    }
    anyhow::Error::new(err)
}
