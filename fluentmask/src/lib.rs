// fluentmask/src/lib.rs
//! # FluentMask CLI
//!
//! Command-line front end for `fluentmask-core`: mask values passed as
//! arguments or piped through stdin, and list the available masks.

pub mod cli;
pub mod commands;
pub mod logger;
