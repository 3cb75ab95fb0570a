// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Repository root discovery.
//!
//! Find the directory that holds the version control marker (`.git` by default) by
//! searching upward from a starting directory.

use crate::matrix_gen::MatrixGenError;
use std::path::{Path, PathBuf};

/// Marker whose presence identifies the repository root.
pub const DEFAULT_VCS_MARKER: &str = ".git";

/// Find the repository root by searching `start` and then each of its parents for an
/// entry named `marker`.
///
/// The marker may be a directory or a file (git worktrees and submodules use a `.git`
/// file), only its existence matters.
///
/// # Errors
///
/// Returns [`MatrixGenError::RepoRootNotFound`] if the filesystem root is reached
/// without finding the marker.
pub fn find_repo_root(start: &Path, marker: &str) -> Result<PathBuf, MatrixGenError> {
    let found = start
        .ancestors()
        .find(|dir| dir.join(marker).exists())
        .map(Path::to_path_buf);

    match found {
        Some(root) => {
            tracing::debug!(message = "Found repository root", root = %root.display());
            Ok(root)
        }
        None => Err(MatrixGenError::RepoRootNotFound {
            start: start.to_path_buf(),
            marker: marker.to_string(),
        }),
    }
}

/// Same as [`find_repo_root`], starting from the process working directory.
///
/// # Errors
///
/// Returns an error if the current directory cannot be determined, or if no
/// repository root is found above it.
pub fn find_repo_root_from_current_dir(marker: &str) -> Result<PathBuf, MatrixGenError> {
    let current = std::env::current_dir()
        .map_err(|source| MatrixGenError::CurrentDirUnavailable { source })?;
    find_repo_root(&current, marker)
}
