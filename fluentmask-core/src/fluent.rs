// File: fluentmask-core/src/fluent.rs
//! Call-site sugar: `"123456789".mask(&*SSN)` instead of `SSN.mask("123456789")`.
//!
//! `Option` receivers treat `None` like a blank value and yield an empty string.

use crate::engine::MaskEngine;

/// Lets a value be masked in method-call position.
pub trait MaskExt {
    /// Masks `self` with `engine`.
    fn mask<E: MaskEngine + ?Sized>(&self, engine: &E) -> String;
}

impl MaskExt for str {
    fn mask<E: MaskEngine + ?Sized>(&self, engine: &E) -> String {
        engine.mask(self)
    }
}

impl MaskExt for String {
    fn mask<E: MaskEngine + ?Sized>(&self, engine: &E) -> String {
        engine.mask(self)
    }
}

impl MaskExt for Option<&str> {
    fn mask<E: MaskEngine + ?Sized>(&self, engine: &E) -> String {
        self.map(|s| engine.mask(s)).unwrap_or_default()
    }
}

impl MaskExt for Option<String> {
    fn mask<E: MaskEngine + ?Sized>(&self, engine: &E) -> String {
        self.as_deref().mask(engine)
    }
}
