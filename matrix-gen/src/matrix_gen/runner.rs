// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Orchestrate a single `matrix-gen` invocation.

use crate::{common::{OutputWriter, find_repo_root_from_current_dir},
            matrix_gen::{Destination, Dimensions, GenerateOptions, GeneratedMatrix,
                         GenerationOutput, GenerationReport, MatrixGenError,
                         format_generating, generate, type_name}};

/// Validate the raw dimensions and run the pure part of the pipeline.
///
/// # Errors
///
/// Returns [`MatrixGenError::InvalidDimension`] if either dimension is not a positive
/// integer. Nothing is enumerated in that case.
pub fn generate_matrix(rows: i64, columns: i64) -> Result<GeneratedMatrix, MatrixGenError> {
    let dims = Dimensions::try_new(rows, columns)?;
    Ok(generate(dims))
}

/// The "Generate MatrixRxC" line that `--verbose` prints before anything is
/// generated or written.
///
/// # Errors
///
/// Returns [`MatrixGenError::InvalidDimension`] if either dimension is invalid, so
/// nothing is announced for a run that cannot start.
pub fn generating_message(options: &GenerateOptions) -> Result<String, MatrixGenError> {
    let dims = Dimensions::try_new(options.rows, options.columns)?;
    Ok(format_generating(&type_name(dims)))
}

/// Run one invocation end to end.
///
/// Order matters for the "no partial output" guarantee: dimensions are validated
/// first, then the repository root is resolved, and only then is the text generated
/// and written.
///
/// # Errors
///
/// Returns an error if the dimensions are invalid, the repository root cannot be
/// found, or the file cannot be written.
pub fn run(options: &GenerateOptions) -> miette::Result<GenerationReport> {
    let dims = Dimensions::try_new(options.rows, options.columns)?;

    // % is Display, ? is Debug.
    tracing::debug!(message = "Dimensions accepted", dimensions = %dims);

    let output = match &options.destination {
        Destination::Stdout => {
            let generated = generate(dims);
            GenerationOutput::Preview {
                source: generated.source,
            }
        }
        Destination::RepoFile {
            repo_root,
            output_subdir,
            vcs_marker,
        } => {
            let repo_root = match repo_root {
                // An explicit root is trusted as is, no marker check.
                Some(root) => root.clone(),
                None => find_repo_root_from_current_dir(vcs_marker)?,
            };
            let generated = generate(dims);
            let writer = OutputWriter::under_repo_root(&repo_root, output_subdir);
            tracing::debug!(
                message = "Writing into",
                output_dir = %writer.output_dir().display()
            );
            let path = writer.write(&generated.file_name, &generated.source)?;
            GenerationOutput::Written { repo_root, path }
        }
    };

    let report = GenerationReport {
        type_name: type_name(dims),
        dimensions: dims,
        output,
    };
    tracing::debug!(message = "Generation finished", report = ?report.output);
    Ok(report)
}
