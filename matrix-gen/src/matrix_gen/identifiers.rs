// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Name synthesis for the generated type.
//!
//! Every identifier that appears in the output is derived here from the dimensions
//! alone, so the emitter never builds names on its own.

use crate::matrix_gen::{CellPosition, Dimensions};

/// Extension of generated files.
pub const GENERATED_FILE_EXTENSION: &str = "rs";

/// `Matrix<rows>x<columns>`.
#[must_use]
pub fn type_name(dims: Dimensions) -> String {
    format!("Matrix{}x{}", dims.rows(), dims.columns())
}

/// `<TypeName>.rs`, the name of the generated file.
#[must_use]
pub fn file_name(dims: Dimensions) -> String {
    format!("{}.{GENERATED_FILE_EXTENSION}", type_name(dims))
}

/// Field name of a cell, `M<row><column>`.
///
/// Plain concatenation can only collide when both a row and a column index can take
/// two digits (`M111` could be `(1, 11)` or `(11, 1)`), so only shapes with at least
/// 11 rows and at least 11 columns separate the two indices with an underscore:
/// `M1_11`. Every other shape, `10x2` included, keeps the plain form.
#[must_use]
pub fn cell_identifier(dims: Dimensions, cell: CellPosition) -> String {
    if uses_index_separator(dims) {
        format!("M{}_{}", cell.row, cell.column)
    } else {
        format!("M{}{}", cell.row, cell.column)
    }
}

/// `Row<row>`.
#[must_use]
pub fn row_accessor(row: usize) -> String { format!("Row{row}") }

/// `Column<column>`.
#[must_use]
pub fn column_accessor(column: usize) -> String { format!("Column{column}") }

fn uses_index_separator(dims: Dimensions) -> bool { dims.rows() >= 11 && dims.columns() >= 11 }
