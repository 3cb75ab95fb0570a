// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Type definitions for matrix generation.

use crate::matrix_gen::MatrixGenError;
use std::{fmt,
          num::NonZeroUsize,
          path::PathBuf};

/// Which of the two dimensions a value refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum_macros::Display)]
pub enum Axis {
    #[strum(serialize = "rows")]
    Rows,
    #[strum(serialize = "columns")]
    Columns,
}

/// Largest accepted value for either dimension. Every generated cell becomes a
/// struct field plus two indexer match arms, so this keeps the emitted file (and the
/// memory needed to build it) bounded: at most `MAX_DIMENSION * MAX_DIMENSION`
/// fields.
pub const MAX_DIMENSION: usize = 64;

/// Validated `(rows, columns)` pair. Both are guaranteed to be in
/// `1..=MAX_DIMENSION`, so every value of this type describes a real, non-empty
/// rectangle whose element count cannot overflow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Dimensions {
    rows: NonZeroUsize,
    columns: NonZeroUsize,
}

impl Dimensions {
    /// Validate raw user input.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixGenError::InvalidDimension`] for the first axis (rows are checked
    /// before columns) that is zero, negative or larger than [`MAX_DIMENSION`].
    pub fn try_new(rows: i64, columns: i64) -> Result<Self, MatrixGenError> {
        Ok(Self {
            rows: positive(Axis::Rows, rows)?,
            columns: positive(Axis::Columns, columns)?,
        })
    }

    #[must_use]
    pub fn rows(&self) -> usize { self.rows.get() }

    #[must_use]
    pub fn columns(&self) -> usize { self.columns.get() }

    /// `rows * columns`, the exclusive upper bound of the linear indexer. Both factors
    /// are at most [`MAX_DIMENSION`], so the product always fits.
    #[must_use]
    pub fn element_count(&self) -> usize { self.rows() * self.columns() }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.columns)
    }
}

fn positive(axis: Axis, value: i64) -> Result<NonZeroUsize, MatrixGenError> {
    usize::try_from(value)
        .ok()
        .filter(|it| *it <= MAX_DIMENSION)
        .and_then(NonZeroUsize::new)
        .ok_or(MatrixGenError::InvalidDimension { axis, value })
}

/// A cell position, 1-indexed on both axes (matches the generated field names).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellPosition {
    pub row: usize,
    pub column: usize,
}

impl CellPosition {
    #[must_use]
    pub fn new(row: usize, column: usize) -> Self { Self { row, column } }
}

/// Where the generated text goes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Destination {
    /// `<repo root>/<output subdir>/<TypeName>.rs`.
    RepoFile {
        /// Skip the upward search and use this root directly.
        repo_root: Option<PathBuf>,
        output_subdir: PathBuf,
        vcs_marker: String,
    },
    /// Hand the text back to the caller instead of writing it.
    Stdout,
}

/// Options for a single generation run, independent of how they were parsed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerateOptions {
    pub rows: i64,
    pub columns: i64,
    pub destination: Destination,
    pub verbose: bool,
}

/// What happened to the generated text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GenerationOutput {
    Written { repo_root: PathBuf, path: PathBuf },
    Preview { source: String },
}

/// Result of a successful run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationReport {
    pub type_name: String,
    pub dimensions: Dimensions,
    pub output: GenerationOutput,
}
