// sanitext/src/logger.rs
//! Logger bootstrap for the `sanitext` binary and its tests.
//!
//! Logs always go to stderr so that sanitized text on stdout stays clean.
//! `RUST_LOG` is honoured unless an explicit level is passed in.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Installs the global logger. Later calls are ignored, which lets every
/// test call this freely.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.format_timestamp(None).format_target(false).target(Target::Stderr);
    let _ = builder.try_init();
}

/// Chooses the level implied by the global CLI flags.
///
/// `quiet` wins over everything; `debug` forces debug output; otherwise
/// `RUST_LOG` (or the `warn` default) applies.
pub fn level_from_flags(quiet: bool, debug: bool) -> Option<LevelFilter> {
    if quiet {
        Some(LevelFilter::Off)
    } else if debug {
        Some(LevelFilter::Debug)
    } else {
        None
    }
}
