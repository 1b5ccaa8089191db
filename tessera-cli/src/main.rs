//! Tessera CLI
//!
//! Headless frame driver: builds a scene, runs layout and paint for a
//! number of frames on a software canvas, and writes the last frame out.

mod dump;
mod scene;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use owo_colors::OwoColorize;
use tessera_common::warning::{clear_warnings, warning_count};
use tessera_layout::{ColorValue, FrameDriver, FrameStats, PercentBasis, Viewport};
use tessera_render::Canvas;

use dump::{NodeDump, print_tree};
use scene::Scene;

/// Tessera: retained-mode layout engine, headless
#[derive(Parser, Debug)]
#[command(name = "tessera")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Render the demo scene
    tessera -o demo.png

    # Render a scene file at a custom size
    tessera --scene card.json --width 1024 --height 768 -o card.png

    # Print the laid-out tree and dump geometry as JSON
    tessera --scene card.json --tree --json

    # Resolve percentages against the parent's same-axis dimension
    tessera --scene card.json --percent-basis same-axis -o card.png
"#)]
struct Cli {
    /// Scene file (JSON); the built-in demo is used when omitted
    #[arg(long, value_name = "FILE")]
    scene: Option<PathBuf>,

    /// Surface width (default: the scene's viewport)
    #[arg(long)]
    width: Option<u32>,

    /// Surface height (default: the scene's viewport)
    #[arg(long)]
    height: Option<u32>,

    /// Number of frames to run
    #[arg(long, default_value = "1")]
    frames: u32,

    /// Save the last frame to this file (PNG format)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Print the laid-out geometry as JSON
    #[arg(long)]
    json: bool,

    /// Print the laid-out tree
    #[arg(long)]
    tree: bool,

    /// Basis for percentages: cross-axis or same-axis
    #[arg(long, value_name = "BASIS")]
    percent_basis: Option<PercentBasis>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut scene = match cli.scene {
        Some(ref path) => Scene::load(path)?,
        None => Scene::demo(),
    };
    if let Some(basis) = cli.percent_basis {
        scene.config.percent_basis = basis;
    }

    let (mut tree, root) = scene.build()?;
    clear_warnings();
    let (width, height) = surface_size(&cli, scene.viewport);
    let mut canvas = Canvas::new(width, height);
    let mut driver = FrameDriver::new();

    let mut stats = FrameStats::default();
    for _ in 0..cli.frames.max(1) {
        canvas.clear(&ColorValue::WHITE);
        stats = driver.run_frame(&mut tree, root, &mut canvas);
    }

    eprintln!(
        "{} {} frame(s) at {width}x{height}: {} laid out, {} painted, {} composited",
        "✓".green(),
        driver.frame_count(),
        stats.laid_out,
        stats.painted,
        stats.composited
    );
    let warnings = warning_count();
    if warnings > 0 {
        eprintln!("{}", format!("{warnings} distinct warning(s)").yellow());
    }

    if cli.tree {
        println!("=== Layout Tree (viewport: {width}x{height}) ===\n");
        print_tree(&tree, root, 0);
    }

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&NodeDump::capture(&tree, root))?
        );
    }

    if let Some(ref output_path) = cli.output {
        canvas.save(output_path)?;
        eprintln!("Frame saved to: {}", output_path.display());
    }

    Ok(())
}

/// Surface size from the command line, falling back to the scene's.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn surface_size(cli: &Cli, viewport: Viewport) -> (u32, u32) {
    let or_scene = |value: Option<u32>, fallback: f32| {
        value.unwrap_or_else(|| fallback.max(1.0).round() as u32)
    };
    (
        or_scene(cli.width, viewport.width),
        or_scene(cli.height, viewport.height),
    )
}
