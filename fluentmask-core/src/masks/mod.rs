// File: fluentmask-core/src/masks/mod.rs
//! Built-in mask definitions.
//!
//! Each definition is a fixed configuration of `MaskPipeline`, exposed both
//! as a constructor (`ssn()`, `ein()`, `phone()`) and as a lazily-built shared
//! static (`SSN`, `EIN`, `PHONE`). The statics are never mutated; use
//! `with_mask_character` or `clear_mask` to derive variants.
//!
//! | Mask    | Input         | Output           |
//! |---------|---------------|------------------|
//! | `SSN`   | `123456789`   | `###-##-6789`    |
//! | `EIN`   | `123456789`   | `##-###6789`     |
//! | `PHONE` | `1234567890`  | `(123) 456-7890` |
//! | `PHONE` | `4567890`     | `456-7890`       |
//!
//! Format-only variants live in [`formats`].

use once_cell::sync::Lazy;

use crate::characters::Characters;
use crate::pipeline::MaskPipeline;
use crate::transforms::{insert_at, keep_last, pad_left};

pub mod formats;

/// Digits in an SSN or EIN.
pub const TAX_ID_LENGTH: usize = 9;

/// Trailing digits left visible by the SSN and EIN masks.
pub const VISIBLE_DIGITS: usize = 4;

const LOCAL_PHONE_LENGTH: usize = 7;
const FULL_PHONE_LENGTH: usize = 10;

/// Social Security Number, shown as `###-##-6789`.
pub static SSN: Lazy<MaskPipeline> = Lazy::new(ssn);

/// Employer Identification Number, shown as `##-###6789`.
pub static EIN: Lazy<MaskPipeline> = Lazy::new(ein);

/// Phone number formatter. Never replaces characters.
pub static PHONE: Lazy<MaskPipeline> = Lazy::new(phone);

fn hide_all_but_last_digits(s: &str, c: char) -> String {
    pad_left(&keep_last(s, VISIBLE_DIGITS), TAX_ID_LENGTH, c)
}

pub fn ssn() -> MaskPipeline {
    MaskPipeline::builder("ssn")
        .filter_characters(Characters::Numbers)
        .mask_when(|s: &str| s.chars().count() == TAX_ID_LENGTH)
        .mask(hide_all_but_last_digits)
        .format(|s: &str| insert_at(&insert_at(s, 5, "-"), 3, "-"))
        .build()
}

pub fn ein() -> MaskPipeline {
    MaskPipeline::builder("ein")
        .filter_characters(Characters::Numbers)
        .mask_when(|s: &str| s.chars().count() == TAX_ID_LENGTH)
        .mask(|s: &str, c: char| insert_at(&hide_all_but_last_digits(s, c), 2, "-"))
        .build()
}

pub fn phone() -> MaskPipeline {
    MaskPipeline::builder("phone")
        .filter_characters(Characters::Numbers)
        .format_if(
            |s: &str| s.chars().count() == LOCAL_PHONE_LENGTH,
            |s: &str| insert_at(s, 3, "-"),
        )
        .format_if(
            |s: &str| s.chars().count() == FULL_PHONE_LENGTH,
            format_full_phone,
        )
        .build()
}

fn format_full_phone(phone: &str) -> String {
    let area_code: String = phone.chars().take(3).collect();
    let rest: String = phone.chars().skip(3).collect();
    format!("({}) {}", area_code, insert_at(&rest, 3, "-"))
}
