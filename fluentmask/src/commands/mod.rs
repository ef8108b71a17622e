// fluentmask/src/commands/mod.rs
//! Command implementations for the fluentmask CLI.

pub mod list;
pub mod mask;

use anyhow::Result;
use fluentmask_core::{MaskConfig, MaskRegistry};
use log::debug;
use std::path::Path;

/// Builds the registry of built-in masks, extended with any definitions from `config`.
pub fn load_registry(config: Option<&Path>) -> Result<MaskRegistry> {
    let mut registry = MaskRegistry::with_builtins();

    if let Some(path) = config {
        let user_config = MaskConfig::load_from_file(path)?;
        registry.merge_config(&user_config)?;
    }

    debug!("Mask registry ready with {} masks.", registry.len());
    Ok(registry)
}
