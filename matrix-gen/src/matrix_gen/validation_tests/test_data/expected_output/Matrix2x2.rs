// ====================
// Generated by matrix-gen. Do not edit by hand.
// Regenerate with: matrix-gen 2 2
// ====================

use super::{MatrixIndexOutOfRange, MatrixOperators, Scalar, Vector};

/// Structure representing a matrix2x2.
///
/// Fields are laid out sequentially in row-major order with no padding between
/// them (`#[repr(C)]` over the single scalar type `N`).
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[allow(non_snake_case)]
pub struct Matrix2x2<N: Scalar> {
    pub M11: N,
    pub M12: N,
    pub M21: N,
    pub M22: N,
}

#[allow(non_snake_case)]
impl<N: Scalar> Matrix2x2<N> {
    pub const ROWS_COUNT: usize = 2;
    pub const COLUMNS_COUNT: usize = 2;
    pub const ELEMENT_COUNT: usize = 4;

    /// Row 1 as a vector of 2 elements.
    #[must_use]
    pub fn Row1(&self) -> Vector<N, 2> {
        Vector([self.M11, self.M12])
    }

    /// Row 2 as a vector of 2 elements.
    #[must_use]
    pub fn Row2(&self) -> Vector<N, 2> {
        Vector([self.M21, self.M22])
    }

    /// Column 1 as a vector of 2 elements.
    #[must_use]
    pub fn Column1(&self) -> Vector<N, 2> {
        Vector([self.M11, self.M21])
    }

    /// Column 2 as a vector of 2 elements.
    #[must_use]
    pub fn Column2(&self) -> Vector<N, 2> {
        Vector([self.M12, self.M22])
    }

    /// Reads the element at `index`, counted in row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixIndexOutOfRange`] if `index >= Self::ELEMENT_COUNT`.
    pub fn get(&self, index: usize) -> Result<N, MatrixIndexOutOfRange> {
        match index {
            0 => Ok(self.M11),
            1 => Ok(self.M12),
            2 => Ok(self.M21),
            3 => Ok(self.M22),
            _ => Err(MatrixIndexOutOfRange::new(index, Self::ELEMENT_COUNT)),
        }
    }

    /// Writes `value` at `index`, counted in row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixIndexOutOfRange`] if `index >= Self::ELEMENT_COUNT`.
    pub fn set(&mut self, index: usize, value: N) -> Result<(), MatrixIndexOutOfRange> {
        let slot = match index {
            0 => &mut self.M11,
            1 => &mut self.M12,
            2 => &mut self.M21,
            3 => &mut self.M22,
            _ => return Err(MatrixIndexOutOfRange::new(index, Self::ELEMENT_COUNT)),
        };
        *slot = value;
        Ok(())
    }
}

/// Operator contracts, enforced by the supertraits of `MatrixOperators<N>`:
///
/// - `Add<Self, Output = Self>` (matrix + matrix)
/// - `Sub<Self, Output = Self>` (matrix - matrix)
/// - `Mul<Self, Output = Self>` (matrix * matrix)
/// - `PartialEq<Self>` (matrix == matrix)
/// - `Add<N, Output = Self>` (matrix + scalar)
/// - `Sub<N, Output = Self>` (matrix - scalar)
/// - `Mul<N, Output = Self>` (matrix * scalar)
impl<N: Scalar> MatrixOperators<N> for Matrix2x2<N> {}
