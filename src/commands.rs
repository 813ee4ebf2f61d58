//! Subcommand implementations
//!
//! Each command takes the loaded [`Settings`], runs one generation step (or
//! all of them) and prints the step summary to stdout.

use std::path::Path;

use anyhow::{bail, Context};
use faxbox_camtools::{
    generate_drawer, generate_layout, generate_lids, generate_shell, verify_dimensions,
    LayoutReport, PartReport,
};
use faxbox_settings::{ConfigFormat, Settings};
use tracing::{info, warn};

pub fn run_shell(settings: &Settings) -> anyhow::Result<PartReport> {
    let report = generate_shell(&settings.dimensions, &settings.output_dir)
        .context("failed to generate the outer shell")?;
    println!("{}", report);
    Ok(report)
}

pub fn run_drawer(settings: &Settings) -> anyhow::Result<PartReport> {
    let report = generate_drawer(&settings.dimensions, &settings.output_dir)
        .context("failed to generate the drawer")?;
    println!("{}", report);
    Ok(report)
}

pub fn run_lids(settings: &Settings) -> anyhow::Result<PartReport> {
    let report = generate_lids(&settings.dimensions, &settings.output_dir)
        .context("failed to generate the lids")?;
    println!("{}", report);
    Ok(report)
}

pub fn run_layout(settings: &Settings) -> anyhow::Result<LayoutReport> {
    let report = generate_layout(&settings.dimensions, &settings.output_dir)
        .context("failed to compose the final layout")?;
    println!("{}", report);
    Ok(report)
}

/// Shell, drawer, lids, then the layout reading them back
pub fn run_all(settings: &Settings) -> anyhow::Result<LayoutReport> {
    info!("Writing all sheets to {}", settings.output_dir.display());
    run_shell(settings)?;
    run_drawer(settings)?;
    run_lids(settings)?;
    run_layout(settings)
}

/// Report every violated dimension rule; fails if there is at least one
pub fn run_check(settings: &Settings) -> anyhow::Result<()> {
    let config = &settings.dimensions;
    let derived = config.derived();

    println!("Dimension check");
    println!(
        "  Shell internal: {:.3}mm x {:.3}mm x {:.3}mm",
        derived.shell_internal.width, derived.shell_internal.depth, derived.shell_internal.height
    );
    println!(
        "  Drawer external: {:.3}mm x {:.3}mm x {:.3}mm",
        derived.drawer_external.width,
        derived.drawer_external.depth,
        derived.drawer_external.height
    );
    println!("  Drawer bay depth: {:.3}mm", derived.drawer_bay_depth);

    let issues = verify_dimensions(config);
    if issues.is_empty() {
        println!("All dimension checks passed");
        return Ok(());
    }

    for issue in &issues {
        warn!("{}", issue);
        println!("  FAIL {}", issue);
    }
    bail!("{} dimension check(s) failed", issues.len())
}

/// Print the effective settings as TOML, or write them to `save_to`
pub fn run_config(settings: &Settings, save_to: Option<&Path>) -> anyhow::Result<()> {
    match save_to {
        Some(path) => {
            settings
                .save_to_file(path)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("Wrote configuration to {}", path.display());
        }
        None => {
            println!("# default location: {}", Settings::default_config_path().display());
            print!("{}", settings.to_string_with_format(ConfigFormat::Toml)?);
        }
    }
    Ok(())
}
