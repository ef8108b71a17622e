// fluentmask/src/cli.rs
//! This file defines the command-line interface (CLI) for the fluentmask application,
//! including all available commands and their arguments.
//! License: MIT OR Apache-2.0

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "fluentmask",
    version = env!("CARGO_PKG_VERSION"),
    about = "Mask and format sensitive identifiers",
    long_about = "fluentmask partially redacts identifiers such as Social Security Numbers, Employer Identification Numbers and phone numbers for display. Values that do not match a mask's expected shape are printed unchanged.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', help = "Enable debug logging.")]
    pub debug: bool,

    /// Process-wide default mask character, fixed before any masking happens.
    #[arg(
        long = "default-char",
        value_name = "CHAR",
        env = "FLUENTMASK_DEFAULT_CHAR",
        help = "Default mask character for masks without their own (defaults to '#')."
    )]
    pub default_char: Option<char>,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `fluentmask` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Masks values given as arguments, or one value per line from stdin.
    #[command(about = "Masks values given as arguments, or one value per line from stdin.")]
    Mask(MaskCommand),

    /// Lists every available mask.
    #[command(about = "Lists built-in and custom masks.")]
    List(ListCommand),
}

/// Arguments for the `mask` command.
#[derive(Parser, Debug)]
pub struct MaskCommand {
    /// Name of the mask to apply.
    #[arg(long, short = 'm', value_name = "NAME", help = "Mask to apply (see `fluentmask list`).")]
    pub mask: String,

    /// Overrides the mask character for this run.
    #[arg(long = "char", short = 'c', value_name = "CHAR", help = "Character used to hide masked positions.")]
    pub mask_character: Option<char>,

    /// Only apply formatting, keeping every character visible.
    #[arg(long = "format-only", help = "Insert separators without hiding any character.")]
    pub format_only: bool,

    /// Path to a YAML file with custom mask definitions.
    #[arg(long = "config", value_name = "FILE", help = "Path to a YAML file with custom mask definitions.")]
    pub config: Option<PathBuf>,

    /// Values to mask. Reads stdin when omitted.
    #[arg(value_name = "VALUE", help = "Values to mask (reads stdin line by line when omitted).")]
    pub values: Vec<String>,
}

/// Arguments for the `list` command.
#[derive(Parser, Debug)]
pub struct ListCommand {
    /// Path to a YAML file with custom mask definitions.
    #[arg(long = "config", value_name = "FILE", help = "Path to a YAML file with custom mask definitions.")]
    pub config: Option<PathBuf>,
}
