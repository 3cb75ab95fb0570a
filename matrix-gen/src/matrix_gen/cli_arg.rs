// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Command-line argument parsing for matrix-gen.

use crate::{common::{DEFAULT_OUTPUT_SUBDIR, DEFAULT_VCS_MARKER},
            matrix_gen::{Destination, GenerateOptions}};
use clap::Parser;
use std::path::PathBuf;

/// Generate a fixed-size matrix type for a numeric library.
#[derive(Debug, Parser)]
#[command(
    name = "matrix-gen",
    about = "Generate a fixed-size matrix type (MatrixRxC) with named fields, row/column views and a bounds-checked indexer",
    long_about = "Generate the Rust source of Matrix<ROWS>x<COLUMNS>: one scalar field per \
                  cell (M11, M12, ...) in row-major order, Row/Column vector views, a \
                  bounds-checked linear indexer and the operator contract list.\n\n\
                  By default the file is written to <repo root>/src/matrices/, where the \
                  repo root is found by walking up from the current directory to `.git`.\n\n\
                  Use --repo-root to skip the search, or --stdout to only print the text.",
    version
)]
#[command(arg_required_else_help(true))]
#[allow(clippy::struct_excessive_bools)]
pub struct CLIArg {
    /// Number of rows (positive integer)
    #[arg(value_name = "ROWS", allow_negative_numbers = true)]
    pub rows: i64,

    /// Number of columns (positive integer)
    #[arg(value_name = "COLUMNS", allow_negative_numbers = true)]
    pub columns: i64,

    /// Repository root to generate into (skips searching upward for the marker)
    #[arg(long, value_name = "PATH")]
    pub repo_root: Option<PathBuf>,

    /// Output directory, relative to the repository root
    #[arg(long, value_name = "PATH", default_value = DEFAULT_OUTPUT_SUBDIR)]
    pub output_dir: PathBuf,

    /// Version control marker that identifies the repository root
    #[arg(long, value_name = "NAME", default_value = DEFAULT_VCS_MARKER)]
    pub marker: String,

    /// Print the generated source instead of writing it
    #[arg(long)]
    pub stdout: bool,

    /// Verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Log to stderr for debugging
    #[arg(long, short = 'l')]
    pub enable_logging: bool,
}

impl CLIArg {
    /// Convert CLI arguments to `GenerateOptions`.
    #[must_use]
    pub fn to_generate_options(&self) -> GenerateOptions {
        let destination = if self.stdout {
            Destination::Stdout
        } else {
            Destination::RepoFile {
                repo_root: self.repo_root.clone(),
                output_subdir: self.output_dir.clone(),
                vcs_marker: self.marker.clone(),
            }
        };

        GenerateOptions {
            rows: self.rows,
            columns: self.columns,
            destination,
            verbose: self.verbose,
        }
    }
}
