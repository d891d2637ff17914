//! Generate a skeleton and print selected segments.
//!
//! Run with:
//! `cargo run -p anatomy-skeleton --example print_skeleton -- femur_left hyoid --mass 90`

use anyhow::{Context, Result};
use clap::Parser;

use anatomy_skeleton::{GeneratorConfig, JointRegistry, SkeletonGenerator, validate};
use anatomy_types::{GeneticParameters, SegmentId};

/// Print generated skeleton segments
#[derive(Parser)]
#[command(name = "print_skeleton")]
#[command(about = "Generate a human skeleton and print segment details", long_about = None)]
struct Cli {
    /// Segment names to print (e.g., "femur_left"); all segments if empty
    #[arg(name = "SEGMENT")]
    segments: Vec<String>,

    /// Body height in meters
    #[arg(long)]
    height: Option<f64>,

    /// Body mass in kilograms
    #[arg(long)]
    mass: Option<f64>,

    /// Build multiplier (1.0 = average)
    #[arg(long)]
    build: Option<f64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut params = GeneticParameters::average_adult();
    if let Some(height) = cli.height {
        params = params.with_height(height);
    }
    if let Some(mass) = cli.mass {
        params = params.with_mass(mass);
    }
    if let Some(build) = cli.build {
        params = params.with_build(build);
    }

    let segments = if cli.segments.is_empty() {
        SegmentId::ALL.to_vec()
    } else {
        cli.segments
            .iter()
            .map(|name| name.parse::<SegmentId>())
            .collect::<Result<Vec<_>, _>>()
            .context("bad segment name")?
    };

    let registry = JointRegistry::global();
    let report = validate(registry).context("standard registry failed validation")?;
    let skeleton = SkeletonGenerator::new()
        .with_config(GeneratorConfig::strict())
        .generate(&params)?;

    println!(
        "height {:.2} m, mass {:.1} kg, build {:.2}",
        params.height, params.mass, params.build
    );
    println!(
        "{} segments, {:.2} kg total, max depth {}",
        skeleton.len(),
        skeleton.total_mass(),
        report.max_depth()
    );
    println!();

    for segment in segments {
        let def = &skeleton[segment];
        let world = skeleton
            .world_position(segment, registry)
            .unwrap_or(def.bind_position);
        let joint = registry
            .kind(segment)
            .map_or_else(|| "root".to_string(), |kind| kind.to_string());
        let shape = def.primary_shape().map_or("none", |s| s.kind_name());

        println!("{segment}");
        println!("  length   {:.4} m", def.length);
        println!("  mass     {:.4} kg", def.mass);
        println!(
            "  local    ({:.3}, {:.3}, {:.3})",
            def.bind_position.x, def.bind_position.y, def.bind_position.z
        );
        println!("  world    ({:.3}, {:.3}, {:.3})", world.x, world.y, world.z);
        println!("  shapes   {} ({shape})", def.shapes.len());
        println!("  joint    {joint} (depth {})", report.depth(segment));
    }

    Ok(())
}
