// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Emit the Rust source of a fixed-size matrix type.
//!
//! The emitted file is a module of the consuming library's `matrices` module. It
//! expects the parent module to provide `Scalar`, `Vector<N, LEN>`,
//! `MatrixIndexOutOfRange` and `MatrixOperators<N>`, and it contains no inner
//! attributes, so it can be pulled in with either `mod` or `include!`.
//!
//! Sections, in order:
//!
//! 1. Generated-file banner and imports.
//! 2. The `#[repr(C)]` struct with one field per cell, in [`FieldSequence`] order.
//! 3. Dimension constants.
//! 4. Row views: the contiguous run of fields of each row.
//! 5. Column views: one field per row, listed explicitly.
//! 6. The bounds-checked linear indexer (`get` / `set`).
//! 7. The operator contract list: an unconditional `MatrixOperators<N>` impl. The
//!    contracts themselves are supertraits of `MatrixOperators<N>`, so the impl
//!    only compiles once the consuming library provides every operator.
//!
//! Rendering is infallible: once [`Dimensions`] exist, there is nothing left to
//! validate.

use crate::matrix_gen::{Dimensions, Field, FieldSequence, OperatorContract, column_accessor,
                        file_name, row_accessor, type_name};

const INDENT: &str = "    ";

/// A rendered matrix type, ready to be written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedMatrix {
    pub dimensions: Dimensions,
    pub type_name: String,
    pub file_name: String,
    pub source: String,
}

/// Run the whole pure pipeline for `dims`: name synthesis, field enumeration and
/// emission.
#[must_use]
pub fn generate(dims: Dimensions) -> GeneratedMatrix {
    let fields = FieldSequence::enumerate(dims);
    tracing::debug!(message = "Fields enumerated", dimensions = %dims, fields = fields.len());
    GeneratedMatrix {
        dimensions: dims,
        type_name: type_name(dims),
        file_name: file_name(dims),
        source: emit(&fields),
    }
}

/// Render the complete source text for the matrix described by `fields`.
#[must_use]
pub fn emit(fields: &FieldSequence) -> String {
    let dims = fields.dimensions();
    let name = type_name(dims);

    let mut lines: Vec<String> = Vec::new();
    emit_banner(&mut lines, dims);
    emit_struct(&mut lines, &name, fields);
    lines.push(String::new());

    lines.push("#[allow(non_snake_case)]".to_string());
    lines.push(format!("impl<N: Scalar> {name}<N> {{"));
    emit_constants(&mut lines, dims);
    emit_row_views(&mut lines, fields);
    emit_column_views(&mut lines, fields);
    emit_indexer(&mut lines, fields);
    lines.push("}".to_string());
    lines.push(String::new());

    emit_operator_contracts(&mut lines, &name);

    let mut source = lines.join("\n");
    source.push('\n');
    source
}

fn emit_banner(lines: &mut Vec<String>, dims: Dimensions) {
    lines.push("// ====================".to_string());
    lines.push("// Generated by matrix-gen. Do not edit by hand.".to_string());
    lines.push(format!(
        "// Regenerate with: matrix-gen {} {}",
        dims.rows(),
        dims.columns()
    ));
    lines.push("// ====================".to_string());
    lines.push(String::new());
    lines.push(
        "use super::{MatrixIndexOutOfRange, MatrixOperators, Scalar, Vector};".to_string(),
    );
    lines.push(String::new());
}

/// The layout header and field declarations. Declaration order is the row-major
/// order of `fields`, which is what every row view below relies on.
fn emit_struct(lines: &mut Vec<String>, name: &str, fields: &FieldSequence) {
    lines.push(format!("/// Structure representing a {}.", name.to_lowercase()));
    lines.push("///".to_string());
    lines.push(
        "/// Fields are laid out sequentially in row-major order with no padding between"
            .to_string(),
    );
    lines.push("/// them (`#[repr(C)]` over the single scalar type `N`).".to_string());
    lines.push("#[repr(C)]".to_string());
    lines.push("#[derive(Clone, Copy, Debug, Default, PartialEq)]".to_string());
    lines.push("#[allow(non_snake_case)]".to_string());
    lines.push(format!("pub struct {name}<N: Scalar> {{"));
    for field in fields {
        lines.push(format!("{INDENT}pub {}: N,", field.ident));
    }
    lines.push("}".to_string());
}

fn emit_constants(lines: &mut Vec<String>, dims: Dimensions) {
    lines.push(format!("{INDENT}pub const ROWS_COUNT: usize = {};", dims.rows()));
    lines.push(format!(
        "{INDENT}pub const COLUMNS_COUNT: usize = {};",
        dims.columns()
    ));
    lines.push(format!(
        "{INDENT}pub const ELEMENT_COUNT: usize = {};",
        dims.element_count()
    ));
}

fn emit_row_views(lines: &mut Vec<String>, fields: &FieldSequence) {
    let dims = fields.dimensions();
    for row in 1..=dims.rows() {
        let Some(view) = fields.row_view(row) else {
            continue;
        };
        emit_view(
            lines,
            &format!("Row {row} as a vector of {} elements.", dims.columns()),
            &row_accessor(row),
            dims.columns(),
            view,
        );
    }
}

fn emit_column_views(lines: &mut Vec<String>, fields: &FieldSequence) {
    let dims = fields.dimensions();
    for column in 1..=dims.columns() {
        let Some(view) = fields.column_view(column) else {
            continue;
        };
        emit_view(
            lines,
            &format!("Column {column} as a vector of {} elements.", dims.rows()),
            &column_accessor(column),
            dims.rows(),
            view,
        );
    }
}

/// One accessor that copies `view` into a `Vector<N, len>`.
fn emit_view<'a>(
    lines: &mut Vec<String>,
    doc: &str,
    accessor: &str,
    len: usize,
    view: impl IntoIterator<Item = &'a Field>,
) {
    let elements = view
        .into_iter()
        .map(|field| format!("self.{}", field.ident))
        .collect::<Vec<_>>()
        .join(", ");

    lines.push(String::new());
    lines.push(format!("{INDENT}/// {doc}"));
    lines.push(format!("{INDENT}#[must_use]"));
    lines.push(format!("{INDENT}pub fn {accessor}(&self) -> Vector<N, {len}> {{"));
    lines.push(format!("{INDENT}{INDENT}Vector([{elements}])"));
    lines.push(format!("{INDENT}}}"));
}

/// `get` and `set` over `[0, ELEMENT_COUNT)`. Index `i` maps to the `i`-th entry of
/// `fields`; everything else is rejected with `MatrixIndexOutOfRange`.
fn emit_indexer(lines: &mut Vec<String>, fields: &FieldSequence) {
    let out_of_range = "MatrixIndexOutOfRange::new(index, Self::ELEMENT_COUNT)";
    let arm = format!("{INDENT}{INDENT}{INDENT}");

    lines.push(String::new());
    lines.push(format!(
        "{INDENT}/// Reads the element at `index`, counted in row-major order."
    ));
    lines.push(format!("{INDENT}///"));
    lines.push(format!("{INDENT}/// # Errors"));
    lines.push(format!("{INDENT}///"));
    lines.push(format!(
        "{INDENT}/// Returns [`MatrixIndexOutOfRange`] if `index >= Self::ELEMENT_COUNT`."
    ));
    lines.push(format!(
        "{INDENT}pub fn get(&self, index: usize) -> Result<N, MatrixIndexOutOfRange> {{"
    ));
    lines.push(format!("{INDENT}{INDENT}match index {{"));
    for (index, field) in fields.iter().enumerate() {
        lines.push(format!("{arm}{index} => Ok(self.{}),", field.ident));
    }
    lines.push(format!("{arm}_ => Err({out_of_range}),"));
    lines.push(format!("{INDENT}{INDENT}}}"));
    lines.push(format!("{INDENT}}}"));

    lines.push(String::new());
    lines.push(format!(
        "{INDENT}/// Writes `value` at `index`, counted in row-major order."
    ));
    lines.push(format!("{INDENT}///"));
    lines.push(format!("{INDENT}/// # Errors"));
    lines.push(format!("{INDENT}///"));
    lines.push(format!(
        "{INDENT}/// Returns [`MatrixIndexOutOfRange`] if `index >= Self::ELEMENT_COUNT`."
    ));
    lines.push(format!(
        "{INDENT}pub fn set(&mut self, index: usize, value: N) -> Result<(), MatrixIndexOutOfRange> {{"
    ));
    lines.push(format!("{INDENT}{INDENT}let slot = match index {{"));
    for (index, field) in fields.iter().enumerate() {
        lines.push(format!("{arm}{index} => &mut self.{},", field.ident));
    }
    lines.push(format!("{arm}_ => return Err({out_of_range}),"));
    lines.push(format!("{INDENT}{INDENT}}};"));
    lines.push(format!("{INDENT}{INDENT}*slot = value;"));
    lines.push(format!("{INDENT}{INDENT}Ok(())"));
    lines.push(format!("{INDENT}}}"));
}

/// The contract list as a doc comment, then an unconditional `MatrixOperators<N>`
/// impl. The impl must not be conditional: the bounds live on the trait, so this
/// line fails to compile until every contracted operator exists.
fn emit_operator_contracts(lines: &mut Vec<String>, name: &str) {
    lines.push(
        "/// Operator contracts, enforced by the supertraits of `MatrixOperators<N>`:"
            .to_string(),
    );
    lines.push("///".to_string());
    for contract in OperatorContract::all() {
        lines.push(format!("/// - `{}` ({contract})", contract.bound()));
    }
    lines.push(format!("impl<N: Scalar> MatrixOperators<N> for {name}<N> {{}}"));
}
