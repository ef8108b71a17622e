//! Declarative mask definitions for `fluentmask-core`.
//!
//! Custom masks can be described in YAML instead of code. Each definition is
//! compiled into a regular `MaskPipeline`, so it follows exactly the same
//! filter → precondition → mask → format contract as the built-ins.
//!
//! ```yaml
//! masks:
//!   - name: account
//!     description: "Bank account number"
//!     filters: [numbers]
//!     lengths: [10, 12]
//!     reveal_last: 4
//!     mask_character: "*"
//!     insert:
//!       - { index: 4, text: "-" }
//! ```
//!
//! License: MIT OR Apache-2.0

use anyhow::{anyhow, Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::characters::Characters;
use crate::errors::FluentMaskError;
use crate::pipeline::MaskPipeline;
use crate::transforms::{insert_at, keep_last, pad_left};

/// A separator inserted during the format stage.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Insertion {
    /// Character position, counted on the string produced by earlier insertions.
    pub index: usize,
    pub text: String,
}

/// A single mask described as data.
///
/// Unknown keys are rejected rather than ignored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct MaskDefinition {
    /// Registry name (e.g., "account").
    pub name: String,
    pub description: Option<String>,
    /// Character filters, applied in order.
    pub filters: Vec<Characters>,
    /// Accepted filtered lengths. Empty means any length is accepted.
    pub lengths: Vec<usize>,
    /// Trailing characters left visible. Unset makes the definition format-only.
    pub reveal_last: Option<usize>,
    /// Total width of the masked value. Defaults to the filtered length.
    pub pad_to: Option<usize>,
    /// Overrides the process default mask character.
    pub mask_character: Option<char>,
    /// Separators inserted after masking, in order.
    pub insert: Vec<Insertion>,
}

impl MaskDefinition {
    /// Checks the definition for values that could never produce a sensible mask.
    pub fn validate(&self) -> Result<(), FluentMaskError> {
        let invalid = |reason: &str| {
            FluentMaskError::InvalidDefinition(self.name.clone(), reason.to_string())
        };

        if self.name.trim().is_empty() {
            return Err(invalid("`name` cannot be empty"));
        }
        if let (Some(reveal), Some(width)) = (self.reveal_last, self.pad_to) {
            if width < reveal {
                return Err(invalid("`pad_to` cannot be smaller than `reveal_last`"));
            }
        }
        if self.pad_to.is_some() && self.reveal_last.is_none() {
            return Err(invalid("`pad_to` requires `reveal_last`"));
        }
        if self.insert.iter().any(|i| i.text.is_empty()) {
            return Err(invalid("insertion `text` cannot be empty"));
        }
        Ok(())
    }

    /// Validates the definition and builds the equivalent pipeline.
    pub fn compile(&self) -> Result<MaskPipeline, FluentMaskError> {
        self.validate()?;

        let mut builder = MaskPipeline::builder(self.name.clone());

        for characters in &self.filters {
            builder = builder.filter_characters(*characters);
        }

        if !self.lengths.is_empty() {
            let lengths = self.lengths.clone();
            builder = builder.mask_when(move |s: &str| lengths.contains(&s.chars().count()));
        }

        if let Some(reveal) = self.reveal_last {
            let pad_to = self.pad_to;
            builder = builder.mask(move |s: &str, c: char| {
                let width = pad_to.unwrap_or_else(|| s.chars().count());
                pad_left(&keep_last(s, reveal), width, c)
            });
        }

        if !self.insert.is_empty() {
            let insertions = self.insert.clone();
            builder = builder.format(move |s: &str| {
                insertions
                    .iter()
                    .fold(s.to_string(), |current, i| insert_at(&current, i.index, &i.text))
            });
        }

        if let Some(c) = self.mask_character {
            builder = builder.mask_character(c);
        }

        debug!("Compiled mask definition '{}'.", self.name);
        Ok(builder.build())
    }
}

/// A file's worth of mask definitions.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MaskConfig {
    #[serde(default)]
    pub masks: Vec<MaskDefinition>,
}

impl MaskConfig {
    /// Loads mask definitions from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading mask definitions from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .map_err(FluentMaskError::from)
            .with_context(|| format!("Failed to read mask file {}", path.display()))?;
        let config = Self::from_yaml_str(&text)
            .with_context(|| format!("Failed to load mask file {}", path.display()))?;

        info!("Loaded {} masks from file {}.", config.masks.len(), path.display());
        Ok(config)
    }

    /// Parses and validates mask definitions from YAML text.
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let config: MaskConfig = serde_yml::from_str(text)
            .map_err(FluentMaskError::from)
            .context("Failed to parse mask definitions")?;
        validate_definitions(&config.masks)?;
        Ok(config)
    }
}

/// Validates every definition, reporting all problems at once.
fn validate_definitions(definitions: &[MaskDefinition]) -> Result<()> {
    let mut names = HashSet::new();
    let mut errors = Vec::new();

    for definition in definitions {
        if let Err(e) = definition.validate() {
            errors.push(e.to_string());
        } else if !names.insert(definition.name.as_str()) {
            errors.push(format!("Duplicate mask name found: '{}'.", definition.name));
        }
    }

    if !errors.is_empty() {
        Err(anyhow!("Mask validation failed:\n{}", errors.join("\n")))
    } else {
        Ok(())
    }
}
