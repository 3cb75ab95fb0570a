// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

//! # R3BL Matrix Generator
//!
//! Source generation for the fixed-size matrix types of a numeric library. Given a
//! row count and a column count, `matrix-gen` deterministically produces the complete
//! definition of `Matrix<rows>x<columns>`, so that nobody has to hand author (and keep
//! in sync) one near-identical file per supported shape.
//!
//! ## matrix-gen
//!
//! ### What the generated type contains
//!
//! For `matrix-gen 2 3` the output `Matrix2x3.rs` declares:
//!
//! - A `#[repr(C)]` struct `Matrix2x3<N: Scalar>` with the scalar fields `M11, M12, M13,
//!   M21, M22, M23`, declared in strict row-major order. This order is the memory
//!   layout, and everything else in the file is derived from it.
//! - `ROWS_COUNT`, `COLUMNS_COUNT` and `ELEMENT_COUNT` constants.
//! - Row views `Row1()`, `Row2()` returning `Vector<N, 3>`, each one listing the
//!   contiguous run of fields that belong to the row.
//! - Column views `Column1()` ... `Column3()` returning `Vector<N, 2>`, each one built by
//!   explicitly listing the field at `(row, c)` for every row.
//! - A bounds-checked linear indexer (`get` / `set`) over `[0, 6)` that walks the
//!   fields in row-major order.
//! - The operator contract list: an unconditional `MatrixOperators<N>` impl. The
//!   library's `MatrixOperators<N>` trait has `+`, `-`, `*` with another matrix of the
//!   same shape and with a scalar, and `==`, as supertraits, so the impl only compiles
//!   once every operator exists. The operator bodies live in the consuming library.
//!
//! ### Usage Examples
//!
//! **Generate into the repository** (the root is found by walking up to `.git`):
//! ```bash
//! matrix-gen 2 3
//! ```
//!
//! **Generate into an explicit root and subdirectory**:
//! ```bash
//! matrix-gen 4 4 --repo-root ../numeric --output-dir src/matrices
//! ```
//!
//! **Preview without touching the filesystem**:
//! ```bash
//! matrix-gen 3 1 --stdout
//! ```
//!
//! **Log what happens** (to stderr):
//! ```bash
//! matrix-gen 2 2 --enable-logging --verbose
//! ```
//!
//! ### Architecture
//!
//! The pipeline is a pure function of `(rows, columns)` up to the final write:
//!
//! ```text
//! (rows, columns)
//!   -> Dimensions::try_new        validation, rejects 0 and negatives
//!   -> identifiers                type name, cell / row / column identifiers
//!   -> FieldSequence::enumerate   row-major cell order (the layout contract)
//!   -> emitter::generate          Rust source text
//!   -> OutputWriter::write        <repo root>/<output dir>/<TypeName>.rs
//! ```
//!
//! **Module structure:**
//! - `src/lib.rs` - Library root
//! - `src/bin/matrix-gen.rs` - Binary entry point
//! - `src/matrix_gen/` - Tool implementation
//!   - `cli_arg.rs` - CLI argument parsing
//!   - `types.rs` - Dimensions, options and report types
//!   - `error.rs` - Error taxonomy
//!   - `identifiers.rs` - Name synthesis
//!   - `field_sequence.rs` - Row-major field enumeration and row / column views
//!   - `operator_contracts.rs` - The fixed operator contract list
//!   - `emitter.rs` - Source text emission
//!   - `runner.rs` - Orchestrate one invocation
//!   - `ui_str.rs` - User-facing messages
//! - `src/common/` - Shared utilities
//!   - `repo_root.rs` - Repository root discovery
//!   - `output_writer.rs` - Persist generated files
//!   - `log_support.rs` - Opt-in tracing subscriber

// Attach all modules.
pub mod common;
pub mod matrix_gen;

// Re-export commonly used items.
pub use common::*;
