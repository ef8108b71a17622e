//! errors.rs - Custom error types for the fluentmask-core library.
//!
//! Masking itself is total and never fails. These errors only surface from the
//! ambient operations around it: compiling declarative definitions, looking up
//! masks by name, and configuring the process default mask character.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// All error types produced by the `fluentmask-core` library.
///
/// Marked `#[non_exhaustive]` so new variants can be added without breaking
/// downstream matches.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum FluentMaskError {
    #[error("Invalid mask definition '{0}': {1}")]
    InvalidDefinition(String, String),

    #[error("Unknown mask '{0}'")]
    UnknownMask(String),

    #[error("Default mask character is already fixed to '{0}'")]
    DefaultCharacterFrozen(char),

    #[error("An unexpected I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse mask definitions: {0}")]
    YamlError(#[from] serde_yml::Error),
}
