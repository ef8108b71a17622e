// File: fluentmask-core/src/defaults.rs
//! Process-wide default mask character.
//!
//! Pipelines built without an explicit mask character fall back to this value
//! at call time. It can be configured once at startup, before any masking
//! happens. The first read freezes it, so concurrent `mask` calls can never
//! observe two different defaults.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use once_cell::sync::OnceCell;

use crate::errors::FluentMaskError;

/// The mask character used when nothing else has been configured.
pub const DEFAULT_MASK_CHARACTER: char = '#';

static DEFAULT_CHARACTER: OnceCell<char> = OnceCell::new();

/// Returns the process default mask character, fixing it on first use.
pub fn default_mask_character() -> char {
    *DEFAULT_CHARACTER.get_or_init(|| DEFAULT_MASK_CHARACTER)
}

/// Sets the process default mask character.
///
/// Only succeeds before the default has been set or read. Call it during
/// startup, before the first `mask` call.
pub fn set_default_mask_character(c: char) -> Result<(), FluentMaskError> {
    DEFAULT_CHARACTER
        .set(c)
        .map_err(|_| FluentMaskError::DefaultCharacterFrozen(default_mask_character()))?;
    debug!("Process default mask character set to '{}'.", c);
    Ok(())
}
