mod ops;
mod visit;

pub use visit::Cells;

use core::fmt;
use core::ops::{Index, IndexMut};

use crate::traits::Scalar;

/// Number of rows (and columns) of a [`Matrix4x4`].
pub const DIM: usize = 4;

/// Fixed-size 4×4 matrix.
///
/// Storage is row-major: `data[row][col]`. Stack-allocated, no-std compatible.
///
/// # Examples
///
/// ```
/// use vecmath::Matrix4x4;
///
/// let z: Matrix4x4<f32> = Matrix4x4::default();
/// assert_eq!(z[(2, 3)], 0.0);
///
/// let mut id = Matrix4x4::from_diagonal(1.0_f32);
/// assert_eq!(id[(1, 1)], 1.0);
/// assert_eq!(id[(1, 0)], 0.0);
///
/// *id.entry_mut(0, 3).unwrap() = 5.0;
/// assert_eq!(id.entry(0, 3), Ok(5.0));
/// assert!(id.entry(4, 0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix4x4<T> {
    pub(crate) data: [[T; DIM]; DIM],
}

/// Errors from checked cell access.
///
/// ```
/// use vecmath::{Matrix4x4, MatrixError};
///
/// let m = Matrix4x4::<f32>::zeros();
/// assert_eq!(m.entry(0, 4), Err(MatrixError::IndexOutOfBounds { row: 0, col: 4 }));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// Row or column is outside `0..4`.
    IndexOutOfBounds { row: usize, col: usize },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::IndexOutOfBounds { row, col } => {
                write!(f, "index ({row}, {col}) out of bounds for 4x4 matrix")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MatrixError {}

impl<T> Matrix4x4<T> {
    /// Create a matrix from a row-major 2D array.
    ///
    /// The input is `[[row0], [row1], [row2], [row3]]`.
    #[inline]
    pub const fn new(rows: [[T; DIM]; DIM]) -> Self {
        Self { data: rows }
    }

    /// The rows as a row-major 2D array.
    #[inline]
    pub fn into_rows(self) -> [[T; DIM]; DIM] {
        self.data
    }

    /// Checked mutable access to cell `(row, col)`.
    #[inline]
    pub fn entry_mut(&mut self, row: usize, col: usize) -> Result<&mut T, MatrixError> {
        self.data
            .get_mut(row)
            .and_then(|r| r.get_mut(col))
            .ok_or(MatrixError::IndexOutOfBounds { row, col })
    }

    /// Overwrite cell `(row, col)`.
    #[inline]
    pub fn set_entry(&mut self, row: usize, col: usize, value: T) -> Result<(), MatrixError> {
        *self.entry_mut(row, col)? = value;
        Ok(())
    }
}

impl<T: Copy> Matrix4x4<T> {
    /// Checked read of cell `(row, col)`.
    #[inline]
    pub fn entry(&self, row: usize, col: usize) -> Result<T, MatrixError> {
        self.data
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .ok_or(MatrixError::IndexOutOfBounds { row, col })
    }
}

impl<T: Scalar> Matrix4x4<T> {
    /// Create a matrix filled with zeros.
    #[inline]
    pub fn zeros() -> Self {
        Self {
            data: [[T::zero(); DIM]; DIM],
        }
    }

    /// Create a diagonal matrix with `value` on the diagonal and zero elsewhere.
    pub fn from_diagonal(value: T) -> Self {
        let mut m = Self::zeros();
        for i in 0..DIM {
            m.data[i][i] = value;
        }
        m
    }

    /// The identity matrix, `from_diagonal(1)`.
    #[inline]
    pub fn identity() -> Self {
        Self::from_diagonal(T::one())
    }
}

/// The zero matrix.
impl<T: Scalar> Default for Matrix4x4<T> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T> From<[[T; DIM]; DIM]> for Matrix4x4<T> {
    fn from(rows: [[T; DIM]; DIM]) -> Self {
        Self::new(rows)
    }
}

// Index by (row, col) tuple; panics when out of range
impl<T> Index<(usize, usize)> for Matrix4x4<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[row][col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix4x4<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.data[row][col]
    }
}

/// Single-precision [`Matrix4x4`].
pub type Matrix4x4f = Matrix4x4<f32>;
/// Double-precision [`Matrix4x4`].
pub type Matrix4x4d = Matrix4x4<f64>;
