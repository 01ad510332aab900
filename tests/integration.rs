//! Integration tests for heroimage
//!
//! These exercise the library operations and the `heroimage` binary against
//! real files in temporary directories.

use heroimage::*;
use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Any bold-ish TrueType font installed on this machine
fn system_font() -> Option<PathBuf> {
    DEFAULT_FONT_CANDIDATES
        .iter()
        .copied()
        .chain([
            "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
            "/usr/share/fonts/dejavu/DejaVuSans-Bold.ttf",
            "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
            "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
            "/Library/Fonts/Arial.ttf",
        ])
        .map(PathBuf::from)
        .find(|p| p.is_file())
}

fn run_heroimage(args: &[&str], cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_heroimage"))
        .args(args)
        .current_dir(cwd)
        .output()
        .expect("run heroimage")
}

#[test]
fn test_create_then_link_workflow() {
    let Some(font) = system_font() else {
        eprintln!("no system font available, skipping");
        return;
    };
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("build/banner.png");
    let doc = temp_dir.path().join("post.qmd");
    fs::write(&doc, "---\ntitle: \"Post\"\ndate: 2024-01-01\n---\n# Post\n\nBody.\n").unwrap();

    let config = HeroConfig::default().with_preferred_font(&font);
    let report =
        create_hero_image("Hello World", &output, &config, &mut StdRng::seed_from_u64(3)).unwrap();

    assert_eq!(report.path, output);
    assert_eq!(report.font_path, font);
    assert!(report.text_width <= 1060);
    assert!(heroimage::core::PALETTE.contains(&report.colors));

    let decoded = image::open(&output).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (1200, 600));

    let update = update_front_matter(&doc, &report.path).unwrap();
    assert_eq!(update.image_ref, "images/banner.png");

    let content = fs::read_to_string(&doc).unwrap();
    assert!(content.starts_with("---\n"));
    assert!(content.contains("title: Post\n"));
    assert!(content.contains("image: images/banner.png\n"));
    assert!(content.ends_with("---\n# Post\n\nBody.\n"));
}

#[test]
fn test_same_seed_same_colors() {
    let Some(font) = system_font() else {
        eprintln!("no system font available, skipping");
        return;
    };
    let temp_dir = TempDir::new().unwrap();
    let config = HeroConfig::default().with_preferred_font(&font);

    let a = create_hero_image(
        "Seeded",
        &temp_dir.path().join("a.png"),
        &config,
        &mut StdRng::seed_from_u64(99),
    )
    .unwrap();
    let b = create_hero_image(
        "Seeded",
        &temp_dir.path().join("b.png"),
        &config,
        &mut StdRng::seed_from_u64(99),
    )
    .unwrap();

    assert_eq!(a.colors, b.colors);
    assert_eq!(
        fs::read(temp_dir.path().join("a.png")).unwrap(),
        fs::read(temp_dir.path().join("b.png")).unwrap()
    );
}

#[test]
fn test_front_matter_added_to_plain_document() {
    let temp_dir = TempDir::new().unwrap();
    let doc = temp_dir.path().join("post.qmd");
    let original = "Just a body.\n\nWith two paragraphs.\n";
    fs::write(&doc, original).unwrap();

    let update = update_front_matter(&doc, Path::new("hero_image.png")).unwrap();
    assert!(update.created_block);

    assert_eq!(
        fs::read_to_string(&doc).unwrap(),
        format!("---\nimage: images/hero_image.png\n---\n{original}")
    );
}

#[test]
fn test_front_matter_update_is_repeatable() {
    let temp_dir = TempDir::new().unwrap();
    let doc = temp_dir.path().join("post.qmd");
    fs::write(&doc, "---\ntitle: Post\n---\nBody\n").unwrap();

    update_front_matter(&doc, Path::new("first.png")).unwrap();
    update_front_matter(&doc, Path::new("second.png")).unwrap();

    assert_eq!(
        fs::read_to_string(&doc).unwrap(),
        "---\ntitle: Post\nimage: images/second.png\n---\nBody\n"
    );
}

#[test]
fn test_cli_default_output() {
    let Some(font) = system_font() else {
        eprintln!("no system font available, skipping");
        return;
    };
    let temp_dir = TempDir::new().unwrap();
    let font_arg = font.to_string_lossy().to_string();
    let output = run_heroimage(&["Hello World", "--font", &font_arg], temp_dir.path());

    assert!(output.status.success(), "process failed: {output:?}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Image saved at hero_image.png"), "{stdout}");

    let decoded = image::open(temp_dir.path().join("hero_image.png")).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (1200, 600));
}

#[test]
fn test_cli_updates_qmd() {
    let Some(font) = system_font() else {
        eprintln!("no system font available, skipping");
        return;
    };
    let temp_dir = TempDir::new().unwrap();
    let original = "# Post\n\nNo front matter here.\n";
    fs::write(temp_dir.path().join("post.qmd"), original).unwrap();

    let font_arg = font.to_string_lossy().to_string();
    let output = run_heroimage(
        &["Hello World", "--font", &font_arg, "--qmd", "post.qmd", "--seed", "5"],
        temp_dir.path(),
    );
    assert!(output.status.success(), "process failed: {output:?}");

    let content = fs::read_to_string(temp_dir.path().join("post.qmd")).unwrap();
    assert_eq!(
        content,
        format!("---\nimage: images/hero_image.png\n---\n{original}")
    );
}

#[test]
fn test_cli_missing_font_fails_without_output() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("fonts.yaml"),
        "font_candidates:\n  - /nope/DejaVuSans-Bold.ttf\n  - /nope/Monaco.ttf\n  - /nope/Arial.ttf\n",
    )
    .unwrap();
    fs::write(temp_dir.path().join("post.qmd"), "Body\n").unwrap();

    let output = run_heroimage(
        &["Hello World", "--config", "fonts.yaml", "-q", "post.qmd"],
        temp_dir.path(),
    );

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Font file not found"), "{stderr}");
    assert!(!temp_dir.path().join("hero_image.png").exists());
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("post.qmd")).unwrap(),
        "Body\n"
    );
}

#[test]
fn test_cli_bad_front_matter_exits_non_zero() {
    let Some(font) = system_font() else {
        eprintln!("no system font available, skipping");
        return;
    };
    let temp_dir = TempDir::new().unwrap();
    let original = "---\n- not\n- a mapping\n---\nBody\n";
    fs::write(temp_dir.path().join("post.qmd"), original).unwrap();

    let font_arg = font.to_string_lossy().to_string();
    let output = run_heroimage(
        &["Hello", "--font", &font_arg, "--qmd", "post.qmd"],
        temp_dir.path(),
    );

    assert!(!output.status.success());
    assert!(temp_dir.path().join("hero_image.png").exists());
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("post.qmd")).unwrap(),
        original
    );
}
