// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Persist generated source files.

use crate::matrix_gen::MatrixGenError;
use std::path::{Path, PathBuf};

/// Library source subpath (relative to the repository root) that holds the generated
/// matrix types.
pub const DEFAULT_OUTPUT_SUBDIR: &str = "src/matrices";

/// Writes generated files into a single output directory.
///
/// Every write truncates and replaces the target file, so running the generator twice
/// for the same shape leaves exactly one copy of the latest text behind. The output
/// directory itself is never created; a missing directory surfaces as
/// [`MatrixGenError::WriteFailed`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputWriter {
    output_dir: PathBuf,
}

impl OutputWriter {
    #[must_use]
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Writer for `<repo_root>/<output_subdir>`.
    #[must_use]
    pub fn under_repo_root(repo_root: &Path, output_subdir: &Path) -> Self {
        Self::new(repo_root.join(output_subdir))
    }

    #[must_use]
    pub fn output_dir(&self) -> &Path { &self.output_dir }

    #[must_use]
    pub fn path_for(&self, file_name: &str) -> PathBuf { self.output_dir.join(file_name) }

    /// Write `contents` to `file_name` inside the output directory, overwriting any
    /// previous file. Returns the full path that was written.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixGenError::WriteFailed`] if the filesystem rejects the write
    /// (missing directory, permissions, disk full, ...).
    pub fn write(&self, file_name: &str, contents: &str) -> Result<PathBuf, MatrixGenError> {
        let path = self.path_for(file_name);

        std::fs::write(&path, contents).map_err(|source| MatrixGenError::WriteFailed {
            path: path.clone(),
            source,
        })?;

        // % is Display, ? is Debug.
        tracing::debug!(
            message = "Wrote generated file",
            path = %path.display(),
            bytes = contents.len()
        );

        Ok(path)
    }
}
