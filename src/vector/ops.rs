use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use super::{Vector3, Vector4};
use crate::traits::Scalar;

// Component-wise ops for both vector types. `$($c:ident),+` lists the
// component fields in order.
macro_rules! impl_componentwise {
    ($V:ident, $($c:ident),+) => {
        impl<T: Scalar> Add for $V<T> {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self {
                $V { $($c: self.$c + rhs.$c),+ }
            }
        }

        impl<T: Scalar> Sub for $V<T> {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self {
                $V { $($c: self.$c - rhs.$c),+ }
            }
        }

        impl<T: Scalar> AddAssign for $V<T> {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                $(self.$c = self.$c + rhs.$c;)+
            }
        }

        impl<T: Scalar> SubAssign for $V<T> {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                $(self.$c = self.$c - rhs.$c;)+
            }
        }

        impl<T: Scalar> Neg for $V<T> {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                $V { $($c: T::zero() - self.$c),+ }
            }
        }

        // ── Scaling ─────────────────────────────────────────────────

        impl<T: Scalar> Mul<T> for $V<T> {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: T) -> Self {
                $V { $($c: self.$c * rhs),+ }
            }
        }

        impl<T: Scalar> MulAssign<T> for $V<T> {
            #[inline]
            fn mul_assign(&mut self, rhs: T) {
                $(self.$c = self.$c * rhs;)+
            }
        }

        // ── `a * b` is the dot product ──────────────────────────────

        impl<T: Scalar> Mul for $V<T> {
            type Output = T;

            #[inline]
            fn mul(self, rhs: Self) -> T {
                self.dot(&rhs)
            }
        }

        // ── Reference variants ──────────────────────────────────────
        // Vectors are Copy, so &V ops just deref and delegate.

        forward_ref_binop!($V, Add, add, $V<T>);
        forward_ref_binop!($V, Sub, sub, $V<T>);
        forward_ref_binop!($V, Mul, mul, T);

        impl<T: Scalar> AddAssign<&$V<T>> for $V<T> {
            #[inline]
            fn add_assign(&mut self, rhs: &$V<T>) {
                self.add_assign(*rhs);
            }
        }

        impl<T: Scalar> SubAssign<&$V<T>> for $V<T> {
            #[inline]
            fn sub_assign(&mut self, rhs: &$V<T>) {
                self.sub_assign(*rhs);
            }
        }

        impl<T: Scalar> Neg for &$V<T> {
            type Output = $V<T>;

            #[inline]
            fn neg(self) -> $V<T> {
                (*self).neg()
            }
        }

        impl<T: Scalar> Mul<T> for &$V<T> {
            type Output = $V<T>;

            #[inline]
            fn mul(self, rhs: T) -> $V<T> {
                (*self).mul(rhs)
            }
        }
    };
}

macro_rules! forward_ref_binop {
    ($V:ident, $Op:ident, $method:ident, $Out:ty) => {
        impl<T: Scalar> $Op<$V<T>> for &$V<T> {
            type Output = $Out;
            #[inline]
            fn $method(self, rhs: $V<T>) -> $Out {
                (*self).$method(rhs)
            }
        }

        impl<T: Scalar> $Op<&$V<T>> for $V<T> {
            type Output = $Out;
            #[inline]
            fn $method(self, rhs: &$V<T>) -> $Out {
                self.$method(*rhs)
            }
        }

        impl<T: Scalar> $Op<&$V<T>> for &$V<T> {
            type Output = $Out;
            #[inline]
            fn $method(self, rhs: &$V<T>) -> $Out {
                (*self).$method(*rhs)
            }
        }
    };
}

impl_componentwise!(Vector3, x, y, z);
impl_componentwise!(Vector4, x, y, z, w);

// ── scalar * vector (concrete impls to avoid orphan rules) ──────────

macro_rules! impl_scalar_mul {
    ($($t:ty),*) => {
        $(
            impl Mul<Vector3<$t>> for $t {
                type Output = Vector3<$t>;

                #[inline]
                fn mul(self, rhs: Vector3<$t>) -> Vector3<$t> {
                    rhs * self
                }
            }

            impl Mul<Vector4<$t>> for $t {
                type Output = Vector4<$t>;

                #[inline]
                fn mul(self, rhs: Vector4<$t>) -> Vector4<$t> {
                    rhs * self
                }
            }
        )*
    };
}

impl_scalar_mul!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_sub() {
        let a = Vector3::new(1.0_f32, 2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vector3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vector3::new(3.0, 3.0, 3.0));

        let c = Vector4::new(1.0_f32, 2.0, 3.0, 1.0);
        let d = Vector4::new(0.5, 0.5, 0.5, 0.0);
        assert_eq!(c + d, Vector4::new(1.5, 2.5, 3.5, 1.0));
        assert_eq!(c - d, Vector4::new(0.5, 1.5, 2.5, 1.0));
    }

    #[test]
    fn add_then_sub_recovers() {
        let a = Vector4::new(0.25_f32, -8.0, 3.0, 1.0);
        let b = Vector4::new(16.0, 0.5, -2.0, 2.0);
        assert_eq!((a + b) - b, a);
    }

    #[test]
    fn assign_ops() {
        let mut a = Vector3::new(1.0_f32, 2.0, 3.0);
        let b = Vector3::new(1.0, 1.0, 1.0);
        a += b;
        assert_eq!(a, Vector3::new(2.0, 3.0, 4.0));
        a -= &b;
        assert_eq!(a, Vector3::new(1.0, 2.0, 3.0));
        a *= 2.0;
        assert_eq!(a, Vector3::new(2.0, 4.0, 6.0));
    }

    #[test]
    fn star_is_dot() {
        let a = Vector3::new(1.0_f32, 2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, 6.0);
        assert_eq!(a * b, 32.0);
        assert_eq!(&a * &b, a.dot(&b));

        let c = Vector4::new(1.0_f32, 2.0, 3.0, 4.0);
        assert_eq!(c * c, 30.0);
    }

    #[test]
    fn scaling() {
        let a = Vector3::new(1.0_f64, -2.0, 3.0);
        assert_eq!(a * 2.0, Vector3::new(2.0, -4.0, 6.0));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(&a * 2.0, a * 2.0);

        let p = Vector4::new(1.0_f32, 1.0, 1.0, 1.0);
        assert_eq!(0.5 * p, Vector4::splat(0.5));
    }

    #[test]
    fn negation() {
        let a = Vector3::new(1.0_f32, -2.0, 0.0);
        let n = -a;
        assert_eq!(n.x, -1.0);
        assert_eq!(n.y, 2.0);
        assert_eq!(-&a, n);
    }

    #[test]
    fn ref_add_sub() {
        let a = Vector4::new(1.0_f32, 2.0, 3.0, 4.0);
        let b = Vector4::new(5.0, 6.0, 7.0, 8.0);

        assert_eq!(&a + b, a + b);
        assert_eq!(a + &b, a + b);
        assert_eq!(&a + &b, a + b);

        assert_eq!(&b - a, b - a);
        assert_eq!(b - &a, b - a);
        assert_eq!(&b - &a, b - a);
    }

    #[test]
    fn nan_propagates() {
        let a = Vector3::new(f32::NAN, 1.0, 1.0);
        let b = Vector3::new(1.0, 1.0, 1.0);
        assert!((a + b).x.is_nan());
        assert!((a * b).is_nan());
    }
}
