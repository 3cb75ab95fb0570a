// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The fixed list of algebraic capabilities every generated matrix declares.
//!
//! The list is binding through the consuming library's `MatrixOperators<N>` trait,
//! which carries every contract below as a supertrait:
//!
//! ```text
//! pub trait MatrixOperators<N>:
//!     Sized
//!     + Add<Self, Output = Self>
//!     + Sub<Self, Output = Self>
//!     + Mul<Self, Output = Self>
//!     + PartialEq<Self>
//!     + Add<N, Output = Self>
//!     + Sub<N, Output = Self>
//!     + Mul<N, Output = Self>
//! {
//! }
//! ```
//!
//! Each generated file implements that trait unconditionally, so a missing operator
//! is a compile error in the consuming library. The operator bodies are written
//! once, generically over the per-cell fields, in the consuming library.

use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

/// Right-hand side of a binary operator contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum Operand {
    /// Another matrix of the identical shape (`Self` in the generated code).
    #[strum(serialize = "Self")]
    Matrix,
    /// The scalar element type (`N` in the generated code).
    #[strum(serialize = "N")]
    Scalar,
}

/// One entry of the operator contract list, in declaration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, Display)]
pub enum OperatorContract {
    #[strum(serialize = "matrix + matrix")]
    AddMatrix,
    #[strum(serialize = "matrix - matrix")]
    SubMatrix,
    #[strum(serialize = "matrix * matrix")]
    MulMatrix,
    #[strum(serialize = "matrix == matrix")]
    EqMatrix,
    #[strum(serialize = "matrix + scalar")]
    AddScalar,
    #[strum(serialize = "matrix - scalar")]
    SubScalar,
    #[strum(serialize = "matrix * scalar")]
    MulScalar,
}

impl OperatorContract {
    /// All contracts, in the order they are declared in the generated file.
    pub fn all() -> impl Iterator<Item = Self> { Self::iter() }

    #[must_use]
    pub fn trait_name(self) -> &'static str {
        match self {
            Self::AddMatrix | Self::AddScalar => "Add",
            Self::SubMatrix | Self::SubScalar => "Sub",
            Self::MulMatrix | Self::MulScalar => "Mul",
            Self::EqMatrix => "PartialEq",
        }
    }

    #[must_use]
    pub fn operand(self) -> Operand {
        match self {
            Self::AddMatrix | Self::SubMatrix | Self::MulMatrix | Self::EqMatrix => {
                Operand::Matrix
            }
            Self::AddScalar | Self::SubScalar | Self::MulScalar => Operand::Scalar,
        }
    }

    /// The trait bound as it appears on `MatrixOperators<N>`, eg:
    /// `Add<N, Output = Self>` or `PartialEq<Self>`.
    #[must_use]
    pub fn bound(self) -> String {
        let trait_name = self.trait_name();
        let rhs = self.operand();
        match self {
            Self::EqMatrix => format!("{trait_name}<{rhs}>"),
            _ => format!("{trait_name}<{rhs}, Output = Self>"),
        }
    }
}
