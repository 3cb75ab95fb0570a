// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::matrix_gen::{Axis, MAX_DIMENSION};
use std::path::PathBuf;

/// Everything that can stop a single `matrix-gen` invocation. All of these are
/// terminal: the run aborts and nothing is retried, since rerunning is always safe.
///
/// Usage errors (missing positional arguments, non-numeric input) never get here,
/// `clap` reports those before the generator runs.
#[derive(thiserror::Error, Debug, miette::Diagnostic)]
pub enum MatrixGenError {
    #[error("Invalid {axis} count: {value}, must be between 1 and {}", MAX_DIMENSION)]
    #[diagnostic(
        code(matrix_gen::invalid_dimension),
        help("Pass two positive integers, eg: `matrix-gen 2 3`")
    )]
    InvalidDimension { axis: Axis, value: i64 },

    #[error(
        "Could not find repository root: no '{marker}' in '{}' or any of its parents",
        .start.display()
    )]
    #[diagnostic(
        code(matrix_gen::repo_root_not_found),
        help("Run from inside the repository, or pass `--repo-root <PATH>`")
    )]
    RepoRootNotFound { start: PathBuf, marker: String },

    #[error("Could not determine the current working directory")]
    #[diagnostic(code(matrix_gen::current_dir_unavailable))]
    CurrentDirUnavailable {
        #[source]
        source: std::io::Error,
    },

    #[error("Could not write generated file: '{}'", .path.display())]
    #[diagnostic(
        code(matrix_gen::write_failed),
        help("Check that the output directory exists and is writable")
    )]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
