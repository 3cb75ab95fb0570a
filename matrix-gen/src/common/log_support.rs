// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Opt-in logging for the build tools.
//!
//! Library code only emits [`tracing`] events. A subscriber is installed by the binary
//! when the user passes `--enable-logging`, and it always writes to stderr so that
//! `--stdout` output stays clean.

use miette::miette;
use tracing_core::LevelFilter;

/// Install a global `fmt` subscriber that writes to stderr.
///
/// # Errors
///
/// Returns an error if a global subscriber has already been installed.
pub fn try_initialize_logging(level_filter: LevelFilter) -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(level_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| miette!("Could not initialize logging: {e}"))
}
