// fluentmask/src/main.rs
//! FluentMask entry point.
//!
//! Configures logging and the process default mask character, then dispatches
//! to the requested command.

use anyhow::{Context, Result};
use clap::Parser;
use log::{LevelFilter, info};
use std::io;

use fluentmask::cli::{Cli, Commands};
use fluentmask::commands::{list::run_list, mask::run_mask};
use fluentmask::logger;
use fluentmask_core::set_default_mask_character;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Cli::parse();

    let level = if args.quiet {
        Some(LevelFilter::Off)
    } else if args.debug {
        Some(LevelFilter::Debug)
    } else {
        None
    };
    logger::init_logger(level);
    info!("fluentmask started. Version: {}", env!("CARGO_PKG_VERSION"));

    // Must happen before the first mask call reads the default.
    if let Some(c) = args.default_char {
        set_default_mask_character(c).context("Failed to set default mask character")?;
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.command {
        Commands::Mask(cmd) => run_mask(&cmd, io::stdin().lock(), &mut out),
        Commands::List(cmd) => run_list(&cmd, &mut out),
    }
}
