// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! User-facing strings and messages.

use std::path::Path;

pub const GENERATED_FILE: &str = "Generated";

/// Format the "about to generate" message.
#[must_use]
pub fn format_generating(type_name: &str) -> String { format!("Generate {type_name}") }

/// Format the message naming the repository root that was used.
#[must_use]
pub fn format_repo_root(repo_root: &Path) -> String {
    format!("Repository directory: {}", repo_root.display())
}

/// Format the shape of the generated matrix.
#[must_use]
pub fn format_shape(rows: usize, columns: usize) -> String {
    format!("Rows {rows}, Columns {columns}, {} elements", rows * columns)
}

/// Format a "file generated" message.
#[must_use]
pub fn format_generated(file: &Path) -> String {
    format!("{GENERATED_FILE}: {}", file.display())
}
