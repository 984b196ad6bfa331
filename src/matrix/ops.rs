use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use super::{Matrix4x4, DIM};
use crate::traits::Scalar;
use crate::vector::Vector4;

// ── Cell-wise addition / subtraction ────────────────────────────────

impl<T: Scalar> Add for Matrix4x4<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let mut out = Self::zeros();
        self.for_each_cell(|i, j, v| out.data[i][j] = v + rhs.data[i][j]);
        out
    }
}

impl<T: Scalar> Sub for Matrix4x4<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        let mut out = Self::zeros();
        self.for_each_cell(|i, j, v| out.data[i][j] = v - rhs.data[i][j]);
        out
    }
}

impl<T: Scalar> AddAssign for Matrix4x4<T> {
    fn add_assign(&mut self, rhs: Self) {
        self.for_each_cell_mut(|i, j, v| *v = *v + rhs.data[i][j]);
    }
}

impl<T: Scalar> SubAssign for Matrix4x4<T> {
    fn sub_assign(&mut self, rhs: Self) {
        self.for_each_cell_mut(|i, j, v| *v = *v - rhs.data[i][j]);
    }
}

impl<T: Scalar> AddAssign<&Matrix4x4<T>> for Matrix4x4<T> {
    fn add_assign(&mut self, rhs: &Matrix4x4<T>) {
        self.add_assign(*rhs);
    }
}

impl<T: Scalar> SubAssign<&Matrix4x4<T>> for Matrix4x4<T> {
    fn sub_assign(&mut self, rhs: &Matrix4x4<T>) {
        self.sub_assign(*rhs);
    }
}

// ── Negation ────────────────────────────────────────────────────────

impl<T: Scalar> Neg for Matrix4x4<T> {
    type Output = Self;

    fn neg(self) -> Self {
        self.map(|v| T::zero() - v)
    }
}

impl<T: Scalar> Neg for &Matrix4x4<T> {
    type Output = Matrix4x4<T>;

    fn neg(self) -> Matrix4x4<T> {
        (*self).neg()
    }
}

// ── Scalar multiplication: matrix * scalar ──────────────────────────

impl<T: Scalar> Mul<T> for Matrix4x4<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        let mut out = Self::zeros();
        self.for_each_cell(|i, j, v| out.data[i][j] = v * rhs);
        out
    }
}

impl<T: Scalar> MulAssign<T> for Matrix4x4<T> {
    fn mul_assign(&mut self, rhs: T) {
        self.for_each_cell_mut(|_, _, v| *v = *v * rhs);
    }
}

impl<T: Scalar> Mul<T> for &Matrix4x4<T> {
    type Output = Matrix4x4<T>;
    fn mul(self, rhs: T) -> Matrix4x4<T> {
        (*self).mul(rhs)
    }
}

// ── Matrix multiplication ───────────────────────────────────────────

impl<T: Scalar> Mul for Matrix4x4<T> {
    type Output = Self;

    /// `out(i, j) = Σ_k self(i, k) · rhs(k, j)`.
    fn mul(self, rhs: Self) -> Self {
        let mut out = Self::zeros();
        out.for_each_cell_mut(|i, j, cell| {
            // Fresh accumulator per output cell
            let mut sum = T::zero();
            for k in 0..DIM {
                sum = sum + self.data[i][k] * rhs.data[k][j];
            }
            *cell = sum;
        });
        out
    }
}

impl<T: Scalar> MulAssign for Matrix4x4<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

// ── Matrix-vector product ───────────────────────────────────────────

impl<T: Scalar> Matrix4x4<T> {
    /// Matrix-vector product with transposed indexing:
    /// `out[i] = Σ_j self(j, i) · v[j]`.
    ///
    /// Equivalent to multiplying the column vector `v` by the transpose of
    /// `self`. The identity is symmetric, so it cannot tell the conventions
    /// apart; a non-symmetric matrix can:
    ///
    /// ```
    /// use vecmath::{Matrix4x4, Vector4};
    ///
    /// let mut m = Matrix4x4::<f32>::identity();
    /// m[(0, 1)] = 2.0;
    /// let v = Vector4::new(1.0, 0.0, 0.0, 0.0);
    /// // out.y = m(0, 1) * v.x
    /// assert_eq!(m.vecmul(&v), Vector4::new(1.0, 2.0, 0.0, 0.0));
    /// assert_eq!(m * v, m.vecmul(&v));
    /// ```
    pub fn vecmul(&self, v: &Vector4<T>) -> Vector4<T> {
        let mut out = Vector4::zeros();
        self.for_each_cell(|j, i, m_ji| out[i] = out[i] + m_ji * v[j]);
        out
    }

    /// Transpose.
    pub fn transpose(&self) -> Self {
        let mut out = Self::zeros();
        self.for_each_cell(|i, j, v| out.data[j][i] = v);
        out
    }

    /// Row `i` as a vector.
    ///
    /// Panics if `i >= 4`.
    pub fn row(&self, i: usize) -> Vector4<T> {
        Vector4::from_array(self.data[i])
    }

    /// Column `j` as a vector.
    ///
    /// Panics if `j >= 4`.
    pub fn col(&self, j: usize) -> Vector4<T> {
        Vector4::new(
            self.data[0][j],
            self.data[1][j],
            self.data[2][j],
            self.data[3][j],
        )
    }
}

impl<T: Scalar> Mul<Vector4<T>> for Matrix4x4<T> {
    type Output = Vector4<T>;

    fn mul(self, rhs: Vector4<T>) -> Vector4<T> {
        self.vecmul(&rhs)
    }
}

impl<T: Scalar> Mul<&Vector4<T>> for &Matrix4x4<T> {
    type Output = Vector4<T>;

    fn mul(self, rhs: &Vector4<T>) -> Vector4<T> {
        self.vecmul(rhs)
    }
}

// ── Reference variants for same-shape binary ops ────────────────────
// Matrix is Copy, so &Matrix ops just deref and delegate.

macro_rules! forward_ref_binop {
    ($Op:ident, $method:ident) => {
        impl<T: Scalar> $Op<Matrix4x4<T>> for &Matrix4x4<T> {
            type Output = Matrix4x4<T>;
            fn $method(self, rhs: Matrix4x4<T>) -> Matrix4x4<T> {
                (*self).$method(rhs)
            }
        }

        impl<T: Scalar> $Op<&Matrix4x4<T>> for Matrix4x4<T> {
            type Output = Matrix4x4<T>;
            fn $method(self, rhs: &Matrix4x4<T>) -> Matrix4x4<T> {
                self.$method(*rhs)
            }
        }

        impl<T: Scalar> $Op<&Matrix4x4<T>> for &Matrix4x4<T> {
            type Output = Matrix4x4<T>;
            fn $method(self, rhs: &Matrix4x4<T>) -> Matrix4x4<T> {
                (*self).$method(*rhs)
            }
        }
    };
}

forward_ref_binop!(Add, add);
forward_ref_binop!(Sub, sub);
forward_ref_binop!(Mul, mul);

// ── scalar * matrix (concrete impls to avoid orphan rules) ──────────

macro_rules! impl_scalar_mul {
    ($($t:ty),*) => {
        $(
            impl Mul<Matrix4x4<$t>> for $t {
                type Output = Matrix4x4<$t>;

                fn mul(self, rhs: Matrix4x4<$t>) -> Matrix4x4<$t> {
                    rhs * self
                }
            }

            impl Mul<&Matrix4x4<$t>> for $t {
                type Output = Matrix4x4<$t>;

                fn mul(self, rhs: &Matrix4x4<$t>) -> Matrix4x4<$t> {
                    *rhs * self
                }
            }
        )*
    };
}

impl_scalar_mul!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    fn counting() -> Matrix4x4<f32> {
        Matrix4x4::new([
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [9.0, 10.0, 11.0, 12.0],
            [13.0, 14.0, 15.0, 16.0],
        ])
    }

    #[test]
    fn add_sub() {
        let a = counting();
        let b = Matrix4x4::from_diagonal(1.0_f32);

        let c = a + b;
        assert_eq!(c[(0, 0)], 2.0);
        assert_eq!(c[(0, 1)], 2.0);
        assert_eq!(c[(3, 3)], 17.0);

        let d = a - b;
        assert_eq!(d[(1, 1)], 5.0);
        assert_eq!(d[(1, 2)], 7.0);
        assert_eq!(d + b, a);
    }

    #[test]
    fn add_assign_sub_assign() {
        let mut a = counting();
        let b = Matrix4x4::from_diagonal(3.0_f32);

        a += b;
        assert_eq!(a[(0, 0)], 4.0);
        assert_eq!(a[(0, 1)], 2.0);

        a -= &b;
        assert_eq!(a, counting());
    }

    #[test]
    fn negation() {
        let a = counting();
        let n = -a;
        assert_eq!(n[(0, 0)], -1.0);
        assert_eq!(n[(3, 2)], -15.0);
        assert_eq!(-&a, n);
    }

    #[test]
    fn scalar_multiply() {
        let a = counting();

        let b = a * 3.0;
        assert_eq!(b[(0, 0)], 3.0);
        assert_eq!(b[(3, 3)], 48.0);

        assert_eq!(3.0 * a, b);
        assert_eq!(&a * 3.0, b);
        assert_eq!(3.0 * &a, b);

        let mut c = a;
        c *= 3.0;
        assert_eq!(c, b);
    }

    #[test]
    fn matrix_multiply() {
        let a = counting();
        let c = a * a;
        assert_eq!(c[(0, 0)], 90.0); // 1*1 + 2*5 + 3*9 + 4*13
        assert_eq!(c[(0, 1)], 100.0);
        assert_eq!(c[(0, 3)], 120.0);
        assert_eq!(c[(3, 0)], 426.0); // 13*1 + 14*5 + 15*9 + 16*13
        assert_eq!(c[(3, 3)], 600.0); // 13*4 + 14*8 + 15*12 + 16*16
    }

    #[test]
    fn matrix_multiply_does_not_accumulate_across_calls() {
        let a = counting();
        let b = a.transpose();
        let first = a * b;
        let second = a * b;
        assert_eq!(first, second);

        let mut c = a;
        c *= b;
        assert_eq!(c, first);
    }

    #[test]
    fn identity_multiply() {
        let a = counting();
        let id = Matrix4x4::identity();
        assert_eq!(a * id, a);
        assert_eq!(id * a, a);
    }

    #[test]
    fn zero_multiply() {
        let a = counting();
        assert_eq!(a * Matrix4x4::zeros(), Matrix4x4::zeros());
    }

    #[test]
    fn ref_ops() {
        let a = counting();
        let b = a.transpose();

        assert_eq!(&a + b, a + b);
        assert_eq!(a + &b, a + b);
        assert_eq!(&a + &b, a + b);

        assert_eq!(&b - a, b - a);
        assert_eq!(b - &a, b - a);
        assert_eq!(&b - &a, b - a);

        let expected = a * b;
        assert_eq!(&a * b, expected);
        assert_eq!(a * &b, expected);
        assert_eq!(&a * &b, expected);
    }

    #[test]
    fn vecmul_uses_transposed_indexing() {
        let m = counting();

        // e_x picks out row 0, not column 0
        let ex = Vector4::new(1.0_f32, 0.0, 0.0, 0.0);
        assert_eq!(m.vecmul(&ex), Vector4::new(1.0, 2.0, 3.0, 4.0));

        let v = Vector4::new(1.0_f32, 2.0, 3.0, 4.0);
        let r = m * v;
        assert_eq!(r.x, 90.0); // 1*1 + 5*2 + 9*3 + 13*4
        assert_eq!(r.y, 100.0);
        assert_eq!(r.z, 110.0);
        assert_eq!(r.w, 120.0);
        assert_eq!(&m * &v, r);
    }

    #[test]
    fn vecmul_equals_textbook_product_with_transpose() {
        let m = counting();
        let v = Vector4::new(0.5_f32, -1.0, 2.0, 1.0);
        let t = m.transpose();
        let textbook = Vector4::new(
            t.row(0).dot(&v),
            t.row(1).dot(&v),
            t.row(2).dot(&v),
            t.row(3).dot(&v),
        );
        assert_eq!(m.vecmul(&v), textbook);
    }

    #[test]
    fn vecmul_identity() {
        let id = Matrix4x4::<f32>::identity();
        let v = Vector4::new(1.0, 2.0, 3.0, 1.0);
        assert_eq!(id * v, v);
    }

    #[test]
    fn transpose_row_col() {
        let m = counting();
        let t = m.transpose();
        assert_eq!(t[(0, 1)], 5.0);
        assert_eq!(t[(1, 0)], 2.0);
        assert_eq!(t.transpose(), m);
        assert_eq!(m.row(1), Vector4::new(5.0, 6.0, 7.0, 8.0));
        assert_eq!(m.col(1), Vector4::new(2.0, 6.0, 10.0, 14.0));
        assert_eq!(t.row(2), m.col(2));
    }

    #[test]
    fn nan_propagates_through_multiply() {
        let mut a = counting();
        a[(0, 0)] = f32::NAN;
        let c = a * Matrix4x4::identity();
        assert!(c[(0, 0)].is_nan());
        assert_eq!(c[(1, 1)], 6.0);
    }
}
