// File: fluentmask-core/src/masks/formats.rs
//! Format-only definitions: separators are inserted, no character is replaced.
//!
//! New formatters belong here as additional statics.

use once_cell::sync::Lazy;

use crate::pipeline::MaskPipeline;

/// SSN with hyphens and every digit visible: `123-45-6789`.
pub static SSN: Lazy<MaskPipeline> = Lazy::new(ssn);

pub fn ssn() -> MaskPipeline {
    super::ssn().clear_mask().renamed("formats.ssn")
}
