//! `list` command implementation.

use anyhow::Result;
use std::io::Write;

use crate::cli::ListCommand;
use crate::commands::load_registry;

/// Prints one `name<TAB>description` row per mask, sorted by name.
pub fn run_list<W: Write>(cmd: &ListCommand, out: &mut W) -> Result<()> {
    let registry = load_registry(cmd.config.as_deref())?;
    for entry in registry.entries() {
        writeln!(out, "{}\t{}", entry.pipeline.name(), entry.description)?;
    }
    out.flush()?;
    Ok(())
}
