// fluentmask-core/src/engine.rs
//! Defines the core `MaskEngine` trait.
//!
//! `MaskPipeline` is the engine every built-in and declarative definition
//! uses, but callers (the fluent extension trait, the registry, the CLI)
//! depend only on this contract so other engines can be dropped in.
//!
//! License: MIT OR APACHE 2.0

/// A trait that defines the contract of a masking engine.
pub trait MaskEngine: Send + Sync {
    /// Masks a single value.
    ///
    /// Implementations must be total: blank input yields an empty string,
    /// input the engine cannot handle is returned unchanged, and nothing
    /// panics.
    fn mask(&self, text: &str) -> String;

    /// A stable identifier for this engine, used in logs and lookups.
    fn name(&self) -> &str;
}
