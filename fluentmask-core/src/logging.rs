// File: fluentmask-core/src/logging.rs
//! PII-aware debug logging helpers.
//!
//! The values flowing through a mask pipeline are, by definition, sensitive.
//! Log lines show a length-only placeholder instead of the raw value unless
//! `FLUENTMASK_ALLOW_DEBUG_PII=true` is set in the environment.

use lazy_static::lazy_static;
use log::{debug, trace};

lazy_static! {
    /// Read once: whether raw values may appear in debug logs.
    static ref PII_DEBUG_ALLOWED: bool = {
        std::env::var("FLUENTMASK_ALLOW_DEBUG_PII")
            .map(|s| s.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    };
}

/// Placeholder describing `s` without revealing it.
pub fn redact_for_log(s: &str) -> String {
    format!("[REDACTED: {} chars]", s.chars().count())
}

fn loggable(s: &str) -> String {
    if *PII_DEBUG_ALLOWED {
        s.to_string()
    } else {
        redact_for_log(s)
    }
}

pub(crate) fn log_stage_trace(mask_name: &str, stage: &str, value: &str) {
    trace!("Mask '{}' {} stage -> '{}'", mask_name, stage, loggable(value));
}

pub(crate) fn log_precondition_failed(mask_name: &str, original: &str, filtered: &str) {
    debug!(
        "Mask '{}' precondition failed; returning input unchanged. Original='{}', Filtered='{}'",
        mask_name,
        loggable(original),
        loggable(filtered)
    );
}
