//! # faxbox
//!
//! Parametric laser-cut SVG generator for a fax machine organizer box.
//!
//! ## Architecture
//!
//! faxbox is organized as a workspace with multiple crates:
//!
//! 1. **faxbox-core** - Dimension set, derived measurements, unit helpers
//! 2. **faxbox-camtools** - Panel renderer, part generators, layout compositor, verification
//! 3. **faxbox-settings** - TOML/JSON configuration files
//! 4. **faxbox** - Command line binary tying the steps together
//!
//! ## Output
//!
//! Each step writes one sheet into the output directory: `outer_shell.svg`,
//! `drawer.svg` and `lids.svg`, which the layout step combines into
//! `final_layout.svg`. Blue strokes are cut, red strokes are engraved.

pub mod commands;

pub use faxbox_camtools::{
    generate_drawer, generate_layout, generate_lids, generate_shell, verify_dimensions,
    CamToolError, DimensionIssue, LayoutReport, PartReport,
};
pub use faxbox_core::{BoxConfig, DerivedDimensions};
pub use faxbox_settings::{Settings, SettingsError};

/// Install the tracing subscriber
///
/// Log records go to stderr so that the step summaries on stdout stay clean.
/// `RUST_LOG` overrides the default level, which is DEBUG when `verbose` is
/// set and INFO otherwise.
pub fn init_logging(verbose: bool) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .with_level(true)
        .with_line_number(verbose)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
