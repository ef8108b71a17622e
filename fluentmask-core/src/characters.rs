// File: fluentmask-core/src/characters.rs
//! Character filters applied at the start of every mask pipeline.
//!
//! Filters strip a value down to the characters a definition cares about
//! (digits for SSN/EIN/phone, letters for name-like values) before any shape
//! check runs. Both filters follow Unicode classification, so full-width
//! digits and accented letters are kept.
//!
//! License: MIT OR APACHE 2.0

use serde::{Deserialize, Serialize};

/// Selects one of the built-in character filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Characters {
    /// Removes every character that is not a letter.
    Letters,
    /// Removes every character that is not a number.
    Numbers,
}

impl Characters {
    /// Applies the selected filter to `s`.
    pub fn filter(&self, s: &str) -> String {
        match self {
            Characters::Letters => letters_only(s),
            Characters::Numbers => digits_only(s),
        }
    }
}

/// Returns the alphabetic characters of `s`, in their original order.
pub fn letters_only(s: &str) -> String {
    s.chars().filter(|c| c.is_alphabetic()).collect()
}

/// Returns the numeric characters of `s`, in their original order.
pub fn digits_only(s: &str) -> String {
    s.chars().filter(|c| c.is_numeric()).collect()
}
