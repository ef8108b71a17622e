// File: fluentmask-core/src/registry.rs
//! Name-based lookup of mask pipelines.
//!
//! The registry starts from the built-ins and can be extended with
//! declarative definitions. A custom mask registered under an existing name
//! replaces the earlier one.

use log::{debug, info};
use std::collections::BTreeMap;

use crate::config::MaskConfig;
use crate::errors::FluentMaskError;
use crate::masks;
use crate::pipeline::MaskPipeline;

/// A registered pipeline plus its human-readable description.
#[derive(Debug, Clone)]
pub struct MaskEntry {
    pub pipeline: MaskPipeline,
    pub description: String,
}

/// Masks addressable by name, iterated in name order.
#[derive(Debug, Clone, Default)]
pub struct MaskRegistry {
    entries: BTreeMap<String, MaskEntry>,
}

impl MaskRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding `ssn`, `ein`, `phone` and `formats.ssn`.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register((*masks::SSN).clone(), "Social Security Number");
        registry.register((*masks::EIN).clone(), "Employer Identification Number");
        registry.register((*masks::PHONE).clone(), "Phone number (formatting only)");
        registry.register(
            (*masks::formats::SSN).clone(),
            "Social Security Number with hyphens, unmasked",
        );
        registry
    }

    /// Adds `pipeline` under its own name, replacing any earlier entry.
    pub fn register(&mut self, pipeline: MaskPipeline, description: impl Into<String>) {
        let name = pipeline.name().to_string();
        let entry = MaskEntry { pipeline, description: description.into() };
        if self.entries.insert(name.clone(), entry).is_some() {
            info!("Mask '{}' overridden by a later definition.", name);
        } else {
            debug!("Registered mask '{}'.", name);
        }
    }

    /// Compiles and registers every definition in `config`.
    ///
    /// Nothing is registered if any definition fails to compile.
    pub fn merge_config(&mut self, config: &MaskConfig) -> Result<(), FluentMaskError> {
        let compiled = config
            .masks
            .iter()
            .map(|definition| {
                let description = definition.description.clone().unwrap_or_default();
                definition.compile().map(|pipeline| (pipeline, description))
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!("Merging {} custom masks.", compiled.len());
        for (pipeline, description) in compiled {
            self.register(pipeline, description);
        }
        Ok(())
    }

    /// Looks up a mask by name.
    pub fn get(&self, name: &str) -> Result<&MaskPipeline, FluentMaskError> {
        self.entries
            .get(name)
            .map(|entry| &entry.pipeline)
            .ok_or_else(|| FluentMaskError::UnknownMask(name.to_string()))
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    /// All entries, sorted by name.
    pub fn entries(&self) -> impl Iterator<Item = &MaskEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
