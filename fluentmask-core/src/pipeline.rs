// File: fluentmask-core/src/pipeline.rs
//! The mask pipeline engine.
//!
//! A `MaskPipeline` threads a value through four ordered stages:
//!
//! 1. **Filter** - every filter runs in declaration order, each seeing the
//!    output of the previous one.
//! 2. **Precondition** - every predicate must hold on the filtered string. If
//!    any fails, the *original* input is returned untouched.
//! 3. **Mask** - every conditional mask rule whose predicate matches the
//!    filtered string runs in declaration order, then the default mask
//!    function always runs last. Each receives the effective mask character.
//! 4. **Format** - same discipline as the mask stage, applied to the masked
//!    string, with format functions that take no mask character.
//!
//! Blank input short-circuits to an empty string before any stage runs.
//!
//! Pipelines are assembled with `MaskPipelineBuilder` and are read-only
//! afterwards. Stage functions are shared through `Arc`, so cloning a pipeline
//! (as `with_mask_character` and `clear_mask` do) is cheap and never affects
//! the source instance.
//!
//! License: MIT OR APACHE 2.0

use std::fmt;
use std::iter;
use std::sync::Arc;

use crate::characters::Characters;
use crate::defaults::default_mask_character;
use crate::engine::MaskEngine;
use crate::logging::{log_precondition_failed, log_stage_trace};

/// Strips disallowed characters from a value.
pub type FilterFn = Arc<dyn Fn(&str) -> String + Send + Sync>;
/// A side-effect-free check on a value.
pub type Predicate = Arc<dyn Fn(&str) -> bool + Send + Sync>;
/// Replaces characters of a value using the given mask character.
pub type MaskFn = Arc<dyn Fn(&str, char) -> String + Send + Sync>;
/// Cosmetically reformats a value.
pub type FormatFn = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// A function gated by a predicate on the stage input.
#[derive(Clone)]
struct Rule<F> {
    predicate: Predicate,
    function: F,
}

fn identity_mask() -> MaskFn {
    Arc::new(|s: &str, _: char| s.to_string())
}

fn identity_format() -> FormatFn {
    Arc::new(|s: &str| s.to_string())
}

/// A configured filter → precondition → mask → format pipeline.
#[derive(Clone)]
pub struct MaskPipeline {
    name: String,
    filters: Vec<FilterFn>,
    preconditions: Vec<Predicate>,
    default_mask: MaskFn,
    mask_rules: Vec<Rule<MaskFn>>,
    default_format: FormatFn,
    format_rules: Vec<Rule<FormatFn>>,
    mask_character: Option<char>,
}

impl MaskPipeline {
    /// Starts building a pipeline. Every stage defaults to identity.
    pub fn builder(name: impl Into<String>) -> MaskPipelineBuilder {
        MaskPipelineBuilder {
            pipeline: MaskPipeline {
                name: name.into(),
                filters: Vec::new(),
                preconditions: Vec::new(),
                default_mask: identity_mask(),
                mask_rules: Vec::new(),
                default_format: identity_format(),
                format_rules: Vec::new(),
                mask_character: None,
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The mask character this pipeline hands to its mask functions.
    ///
    /// Falls back to the process default when none was configured.
    pub fn mask_character(&self) -> char {
        self.mask_character.unwrap_or_else(default_mask_character)
    }

    /// Returns a copy of this pipeline that masks with `c`.
    pub fn with_mask_character(&self, c: char) -> MaskPipeline {
        let mut copy = self.clone();
        copy.mask_character = Some(c);
        copy
    }

    /// Returns a copy of this pipeline whose mask stage is identity.
    ///
    /// Filters, preconditions and formats are kept, which turns a masking
    /// definition into a format-only one.
    pub fn clear_mask(&self) -> MaskPipeline {
        let mut copy = self.clone();
        copy.default_mask = identity_mask();
        copy.mask_rules.clear();
        copy
    }

    /// Returns a copy of this pipeline registered under `name`.
    pub fn renamed(&self, name: impl Into<String>) -> MaskPipeline {
        let mut copy = self.clone();
        copy.name = name.into();
        copy
    }

    /// Runs `text` through every stage of the pipeline.
    ///
    /// Never fails: blank input yields `""` and input that fails a
    /// precondition is returned exactly as given.
    pub fn mask(&self, text: &str) -> String {
        if text.trim().is_empty() {
            return String::new();
        }

        let filtered = self.filter(text);
        log_stage_trace(&self.name, "filter", &filtered);

        if !self.meets_conditions(&filtered) {
            log_precondition_failed(&self.name, text, &filtered);
            return text.to_string();
        }

        let masked = self.apply_mask(&filtered);
        log_stage_trace(&self.name, "mask", &masked);

        let formatted = self.format(&masked);
        log_stage_trace(&self.name, "format", &formatted);
        formatted
    }

    fn filter(&self, s: &str) -> String {
        self.filters
            .iter()
            .fold(s.to_string(), |current, filter| filter(current.as_str()))
    }

    fn meets_conditions(&self, s: &str) -> bool {
        self.preconditions.iter().all(|condition| condition(s))
    }

    fn apply_mask(&self, s: &str) -> String {
        let c = self.mask_character();
        self.mask_rules
            .iter()
            .filter(|rule| (rule.predicate)(s))
            .map(|rule| &rule.function)
            .chain(iter::once(&self.default_mask))
            .fold(s.to_string(), |current, mask| mask(current.as_str(), c))
    }

    fn format(&self, s: &str) -> String {
        self.format_rules
            .iter()
            .filter(|rule| (rule.predicate)(s))
            .map(|rule| &rule.function)
            .chain(iter::once(&self.default_format))
            .fold(s.to_string(), |current, format| format(current.as_str()))
    }
}

impl MaskEngine for MaskPipeline {
    fn mask(&self, text: &str) -> String {
        MaskPipeline::mask(self, text)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for MaskPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MaskPipeline")
            .field("name", &self.name)
            .field("filters", &self.filters.len())
            .field("preconditions", &self.preconditions.len())
            .field("mask_rules", &self.mask_rules.len())
            .field("format_rules", &self.format_rules.len())
            .field("mask_character", &self.mask_character)
            .finish()
    }
}

/// Appends stages to a `MaskPipeline` before it is published.
#[derive(Clone, Debug)]
pub struct MaskPipelineBuilder {
    pipeline: MaskPipeline,
}

impl MaskPipelineBuilder {
    /// Adds one of the built-in character filters.
    pub fn filter_characters(mut self, characters: Characters) -> Self {
        self.pipeline
            .filters
            .push(Arc::new(move |s: &str| characters.filter(s)));
        self
    }

    /// Adds a custom filter function.
    pub fn filter<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.pipeline.filters.push(Arc::new(f));
        self
    }

    /// Adds a precondition the filtered string must satisfy for masking to apply.
    pub fn mask_when<P>(mut self, predicate: P) -> Self
    where
        P: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.pipeline.preconditions.push(Arc::new(predicate));
        self
    }

    /// Sets the default mask function, which always runs last in the mask stage.
    pub fn mask<M>(mut self, f: M) -> Self
    where
        M: Fn(&str, char) -> String + Send + Sync + 'static,
    {
        self.pipeline.default_mask = Arc::new(f);
        self
    }

    /// Adds a mask rule applied when `predicate` matches the filtered string.
    pub fn mask_if<P, M>(mut self, predicate: P, f: M) -> Self
    where
        P: Fn(&str) -> bool + Send + Sync + 'static,
        M: Fn(&str, char) -> String + Send + Sync + 'static,
    {
        self.pipeline.mask_rules.push(Rule {
            predicate: Arc::new(predicate),
            function: Arc::new(f),
        });
        self
    }

    /// Like `mask_if`, for functions that do not need the mask character.
    pub fn mask_if_plain<P, F>(self, predicate: P, f: F) -> Self
    where
        P: Fn(&str) -> bool + Send + Sync + 'static,
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.mask_if(predicate, move |s: &str, _: char| f(s))
    }

    /// Sets the default format function, which always runs last in the format stage.
    pub fn format<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.pipeline.default_format = Arc::new(f);
        self
    }

    /// Adds a format rule applied when `predicate` matches the masked string.
    pub fn format_if<P, F>(mut self, predicate: P, f: F) -> Self
    where
        P: Fn(&str) -> bool + Send + Sync + 'static,
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.pipeline.format_rules.push(Rule {
            predicate: Arc::new(predicate),
            function: Arc::new(f),
        });
        self
    }

    /// Fixes the mask character for this pipeline instead of using the process default.
    pub fn mask_character(mut self, c: char) -> Self {
        self.pipeline.mask_character = Some(c);
        self
    }

    pub fn build(self) -> MaskPipeline {
        self.pipeline
    }
}
