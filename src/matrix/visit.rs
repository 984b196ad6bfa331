use core::iter::FusedIterator;

use super::{Matrix4x4, DIM};

// ── Cell visitor ────────────────────────────────────────────────────
//
// Every element-wise operation is written against these, so the
// visitation order is fixed in one place: row-major, (0,0), (0,1), ...,
// (0,3), (1,0), ..., (3,3).

impl<T: Copy> Matrix4x4<T> {
    /// Call `f(row, col, value)` for every cell, in row-major order.
    ///
    /// ```
    /// use vecmath::Matrix4x4;
    ///
    /// let m = Matrix4x4::from_diagonal(2.0_f32);
    /// let mut trace = 0.0;
    /// m.for_each_cell(|i, j, v| {
    ///     if i == j {
    ///         trace += v;
    ///     }
    /// });
    /// assert_eq!(trace, 8.0);
    /// ```
    #[inline]
    pub fn for_each_cell(&self, mut f: impl FnMut(usize, usize, T)) {
        for i in 0..DIM {
            for j in 0..DIM {
                f(i, j, self.data[i][j]);
            }
        }
    }

    /// Iterator over `(row, col, value)` in row-major order.
    ///
    /// ```
    /// use vecmath::Matrix4x4;
    ///
    /// let m = Matrix4x4::<f32>::identity();
    /// let ones: Vec<_> = m.cells().filter(|&(_, _, v)| v == 1.0).collect();
    /// assert_eq!(ones, [(0, 0, 1.0), (1, 1, 1.0), (2, 2, 1.0), (3, 3, 1.0)]);
    /// ```
    #[inline]
    pub fn cells(&self) -> Cells<'_, T> {
        Cells {
            matrix: self,
            next: 0,
        }
    }

    /// Create a matrix by calling `f(row, col)` for each cell.
    ///
    /// ```
    /// use vecmath::Matrix4x4;
    /// let m: Matrix4x4<f32> = Matrix4x4::from_fn(|i, j| if i == j { 1.0 } else { 0.0 });
    /// assert_eq!(m, Matrix4x4::identity());
    /// ```
    pub fn from_fn(f: impl Fn(usize, usize) -> T) -> Self {
        Self {
            data: core::array::from_fn(|i| core::array::from_fn(|j| f(i, j))),
        }
    }

    /// Apply a function to every cell, producing a new matrix.
    pub fn map<U>(&self, f: impl Fn(T) -> U) -> Matrix4x4<U> {
        Matrix4x4 {
            data: self.data.map(|row| row.map(&f)),
        }
    }
}

impl<T> Matrix4x4<T> {
    /// Call `f(row, col, &mut value)` for every cell, in row-major order.
    #[inline]
    pub fn for_each_cell_mut(&mut self, mut f: impl FnMut(usize, usize, &mut T)) {
        for (i, row) in self.data.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                f(i, j, cell);
            }
        }
    }
}

/// Row-major iterator over the cells of a [`Matrix4x4`].
///
/// Created by [`Matrix4x4::cells`]. Yields `(row, col, value)`.
#[derive(Debug, Clone)]
pub struct Cells<'a, T> {
    matrix: &'a Matrix4x4<T>,
    next: usize,
}

impl<T: Copy> Iterator for Cells<'_, T> {
    type Item = (usize, usize, T);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= DIM * DIM {
            return None;
        }
        let (i, j) = (self.next / DIM, self.next % DIM);
        self.next += 1;
        Some((i, j, self.matrix.data[i][j]))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = DIM * DIM - self.next;
        (remaining, Some(remaining))
    }
}

impl<T: Copy> ExactSizeIterator for Cells<'_, T> {}

impl<T: Copy> FusedIterator for Cells<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn counting() -> Matrix4x4<f32> {
        Matrix4x4::from_fn(|i, j| (i * 4 + j) as f32)
    }

    #[test]
    fn for_each_cell_is_row_major() {
        let m = counting();
        let mut expected = 0.0;
        let mut visits = 0;
        m.for_each_cell(|i, j, v| {
            assert_eq!(v, expected);
            assert_eq!((i, j), (visits / 4, visits % 4));
            expected += 1.0;
            visits += 1;
        });
        assert_eq!(visits, 16);
    }

    #[test]
    fn cells_matches_for_each_cell() {
        let m = counting();
        let mut it = m.cells();
        assert_eq!(it.len(), 16);
        m.for_each_cell(|i, j, v| {
            assert_eq!(it.next(), Some((i, j, v)));
        });
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
        assert_eq!(it.len(), 0);
    }

    #[test]
    fn cells_sum() {
        let total: f32 = counting().cells().map(|(_, _, v)| v).sum();
        assert_eq!(total, 120.0); // 0 + 1 + ... + 15
    }

    #[test]
    fn for_each_cell_mut_writes() {
        let mut m = Matrix4x4::<f32>::zeros();
        m.for_each_cell_mut(|i, j, v| *v = (i * 4 + j) as f32);
        assert_eq!(m, counting());
    }

    #[test]
    fn from_fn_and_map() {
        let m = counting();
        assert_eq!(m[(2, 1)], 9.0);
        let doubled = m.map(|x| x * 2.0);
        assert_eq!(doubled[(2, 1)], 18.0);
        let rounded = m.map(|x| x as i32);
        assert_eq!(rounded[(3, 3)], 15);
    }
}
