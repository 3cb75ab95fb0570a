// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Shared utilities across all build tools.

pub mod log_support;
pub mod output_writer;
pub mod repo_root;

pub use log_support::*;
pub use output_writer::*;
pub use repo_root::*;
