//! faxbox CLI
//!
//! Usage:
//!   faxbox [OPTIONS] <COMMAND>
//!
//! Commands:
//!   shell   Generate outer_shell.svg
//!   drawer  Generate drawer.svg
//!   lids    Generate lids.svg
//!   layout  Combine the three sheets into final_layout.svg
//!   all     Run every step in order
//!   check   Verify the dimension set
//!   config  Print or save the effective configuration

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use faxbox::commands;
use faxbox::{init_logging, Settings};

#[derive(Parser)]
#[command(name = "faxbox")]
#[command(about = "Laser-cut SVG generator for a fax machine organizer box")]
#[command(version, long_version = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_DATE"), ")"))]
struct Cli {
    /// Configuration file (TOML or JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory the SVG files are written to
    #[arg(short, long, global = true)]
    output_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate the outer shell sheet
    Shell,
    /// Generate the drawer sheet
    Drawer,
    /// Generate the lids sheet
    Lids,
    /// Combine the three sheets into the final layout
    Layout,
    /// Generate every sheet and the final layout
    All,
    /// Verify the dimension set
    Check,
    /// Print the effective configuration
    Config {
        /// Write it to this file instead (.toml or .json)
        #[arg(long)]
        save: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose)?;

    let mut settings = Settings::load_or_default(cli.config.as_deref())?;
    if let Some(dir) = cli.output_dir {
        settings.output_dir = dir;
    }
    settings.validate()?;

    match cli.command {
        Command::Shell => {
            commands::run_shell(&settings)?;
        }
        Command::Drawer => {
            commands::run_drawer(&settings)?;
        }
        Command::Lids => {
            commands::run_lids(&settings)?;
        }
        Command::Layout => {
            commands::run_layout(&settings)?;
        }
        Command::All => {
            commands::run_all(&settings)?;
        }
        Command::Check => commands::run_check(&settings)?,
        Command::Config { save } => commands::run_config(&settings, save.as_deref())?,
    }

    Ok(())
}
