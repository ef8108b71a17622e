// fluentmask/src/logger.rs
//! Logger initialization for the fluentmask CLI.
//!
//! Log lines go to stderr as `[LEVEL target] message`, keeping stdout clean for
//! masked values. `RUST_LOG` is honoured unless an explicit level is passed.

use env_logger::{Builder, Env};
use log::LevelFilter;
use std::io::Write;

/// Initializes the global logger. Safe to call more than once.
pub fn init_logger(level_override: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));

    if let Some(level) = level_override {
        builder.filter_level(level);
    }

    builder.format(|buf, record| {
        writeln!(buf, "[{} {}] {}", record.level(), record.target(), record.args())
    });

    let _ = builder.try_init();
}
