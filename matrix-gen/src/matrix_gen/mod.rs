// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Fixed-size matrix type generation.
//!
//! This module turns a `(rows, columns)` pair into the Rust source of
//! `Matrix<rows>x<columns>`. Everything up to [`OutputWriter`] is pure and
//! deterministic: the same pair always produces byte-identical text.
//!
//! [`OutputWriter`]: crate::common::OutputWriter

pub mod cli_arg;
pub mod emitter;
pub mod error;
pub mod field_sequence;
pub mod identifiers;
pub mod operator_contracts;
pub mod runner;
pub mod types;
pub mod ui_str;


// Re-export public API for flat module interface (like cmdr/).
pub use cli_arg::*;
pub use emitter::*;
pub use error::*;
pub use field_sequence::*;
pub use identifiers::*;
pub use operator_contracts::*;
pub use runner::*;
pub use types::*;
pub use ui_str::*;
