//! `mask` command implementation.

use anyhow::{Context, Result};
use log::{debug, info};
use std::io::{BufRead, Write};

use fluentmask_core::MaskPipeline;

use crate::cli::MaskCommand;
use crate::commands::load_registry;

/// Resolves the requested mask and applies the per-run overrides.
pub fn resolve_pipeline(cmd: &MaskCommand) -> Result<MaskPipeline> {
    let registry = load_registry(cmd.config.as_deref())?;
    let mut pipeline = registry.get(&cmd.mask)?.clone();

    if cmd.format_only {
        debug!("Clearing mask stage of '{}'.", cmd.mask);
        pipeline = pipeline.clear_mask();
    }
    if let Some(c) = cmd.mask_character {
        debug!("Using mask character '{}' for this run.", c);
        pipeline = pipeline.with_mask_character(c);
    }
    Ok(pipeline)
}

/// Masks every value from `cmd`, or every line of `input` when no values were given.
pub fn run_mask<R: BufRead, W: Write>(cmd: &MaskCommand, input: R, out: &mut W) -> Result<()> {
    let pipeline = resolve_pipeline(cmd)?;
    info!("Starting mask operation with '{}'.", pipeline.name());

    let mut count = 0usize;
    if cmd.values.is_empty() {
        debug!("Reading values from stdin...");
        for line in input.lines() {
            let line = line.context("Failed to read input line")?;
            writeln!(out, "{}", pipeline.mask(&line))?;
            count += 1;
        }
    } else {
        for value in &cmd.values {
            writeln!(out, "{}", pipeline.mask(value))?;
            count += 1;
        }
    }
    out.flush()?;

    info!("Mask operation completed. {} values processed.", count);
    Ok(())
}
