// fluentmask-core/src/lib.rs
//! # FluentMask Core Library
//!
//! `fluentmask-core` masks and formats sensitive identifiers for display:
//! Social Security Numbers, Employer Identification Numbers and phone numbers
//! out of the box, plus any custom mask built from the same primitives.
//!
//! Every mask is a [`MaskPipeline`]: an ordered filter → precondition →
//! mask → format sequence. Input that does not fit a mask's shape is handed
//! back unchanged, so `mask` is total and never needs an error channel.
//!
//! ## Modules
//!
//! * `characters`: Letter and digit filters.
//! * `pipeline`: The `MaskPipeline` engine and its builder.
//! * `engine`: The `MaskEngine` trait implemented by pipelines.
//! * `masks`: Built-in SSN, EIN and phone definitions, and `masks::formats`.
//! * `fluent`: The `MaskExt` extension trait for `text.mask(&mask)` calls.
//! * `transforms`: Character-indexed helpers (`keep_last`, `pad_left`, `insert_at`).
//! * `defaults`: The process default mask character.
//! * `config`: Declarative YAML mask definitions.
//! * `registry`: Name-based lookup of built-in and custom masks.
//! * `logging`: PII-aware debug log helpers.
//! * `errors`: The `FluentMaskError` type.
//!
//! ## Usage Example
//!
//! ```rust
//! use fluentmask_core::{masks, MaskExt};
//!
//! assert_eq!(masks::SSN.mask("123456789"), "###-##-6789");
//! assert_eq!(masks::SSN.with_mask_character('*').mask("123456789"), "***-**-6789");
//! assert_eq!("1234567890".mask(&*masks::PHONE), "(123) 456-7890");
//! assert_eq!(masks::formats::SSN.mask("123456789"), "123-45-6789");
//!
//! // Wrong shape: handed back as given.
//! assert_eq!(masks::SSN.mask("123-45"), "123-45");
//! ```
//!
//! ## Error Handling
//!
//! Masking never fails. Loading definitions and looking up masks by name
//! return `FluentMaskError` (or `anyhow::Error` with context for file I/O).
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod characters;
pub mod config;
pub mod defaults;
pub mod engine;
pub mod errors;
pub mod fluent;
pub mod logging;
pub mod masks;
pub mod pipeline;
pub mod registry;
pub mod transforms;

/// Re-exports the character filters.
pub use characters::{digits_only, letters_only, Characters};

/// Re-exports the declarative definition types.
pub use config::{Insertion, MaskConfig, MaskDefinition};

/// Re-exports the process default mask character controls.
pub use defaults::{default_mask_character, set_default_mask_character, DEFAULT_MASK_CHARACTER};

pub use engine::MaskEngine;
pub use errors::FluentMaskError;
pub use fluent::MaskExt;

/// Re-exports the pipeline engine and its function types.
pub use pipeline::{FilterFn, FormatFn, MaskFn, MaskPipeline, MaskPipelineBuilder, Predicate};

pub use registry::{MaskEntry, MaskRegistry};
