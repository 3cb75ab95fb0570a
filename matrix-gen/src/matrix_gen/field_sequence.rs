// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Row-major field enumeration.
//!
//! The [`FieldSequence`] is the single source of truth for field declaration order,
//! and therefore for the memory layout of the generated struct. It visits every
//! column of row 1, then every column of row 2, and so on:
//!
//! ```text
//! rows = 2, columns = 3
//!
//! index:   0    1    2    3    4    5
//! field:  M11  M12  M13  M21  M22  M23
//!         └── Row1 ───┘  └── Row2 ───┘
//! ```
//!
//! A row is always a contiguous slice of the sequence. A column is not, so
//! [`FieldSequence::column_view`] collects it cell by cell.

use crate::matrix_gen::{CellPosition, Dimensions, cell_identifier};

/// One scalar field of the generated struct.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    pub position: CellPosition,
    pub ident: String,
}

/// Every field of a matrix, in row-major order. Never reordered, deduplicated or
/// sparse: it always holds exactly `rows * columns` entries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldSequence {
    dims: Dimensions,
    fields: Vec<Field>,
}

impl FieldSequence {
    #[must_use]
    pub fn enumerate(dims: Dimensions) -> Self {
        let fields = (1..=dims.rows())
            .flat_map(|row| {
                (1..=dims.columns()).map(move |column| CellPosition::new(row, column))
            })
            .map(|position| Field {
                ident: cell_identifier(dims, position),
                position,
            })
            .collect();

        Self { dims, fields }
    }

    #[must_use]
    pub fn dimensions(&self) -> Dimensions { self.dims }

    /// Always `rows * columns`, never zero.
    #[must_use]
    pub(crate) fn len(&self) -> usize { self.fields.len() }

    pub fn iter(&self) -> std::slice::Iter<'_, Field> { self.fields.iter() }

    /// Linear index of `position`, or `None` if it is outside the matrix.
    #[must_use]
    pub fn offset_of(&self, position: CellPosition) -> Option<usize> {
        let in_bounds = (1..=self.dims.rows()).contains(&position.row)
            && (1..=self.dims.columns()).contains(&position.column);
        in_bounds
            .then(|| (position.row - 1) * self.dims.columns() + (position.column - 1))
    }

    /// The contiguous run of `columns` fields that make up `row` (1-indexed), starting
    /// at offset `(row - 1) * columns`.
    #[must_use]
    pub fn row_view(&self, row: usize) -> Option<&[Field]> {
        if row == 0 || row > self.dims.rows() {
            return None;
        }
        let start = (row - 1) * self.dims.columns();
        self.fields.get(start..start + self.dims.columns())
    }

    /// The fields at `(1, column)`, `(2, column)`, ... `(rows, column)`, listed one by
    /// one in row order.
    #[must_use]
    pub fn column_view(&self, column: usize) -> Option<Vec<&Field>> {
        if column == 0 || column > self.dims.columns() {
            return None;
        }
        (1..=self.dims.rows())
            .map(|row| {
                self.offset_of(CellPosition::new(row, column))
                    .and_then(|offset| self.fields.get(offset))
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a FieldSequence {
    type Item = &'a Field;
    type IntoIter = std::slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}
