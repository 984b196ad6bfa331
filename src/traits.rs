use core::fmt::Debug;
use num_traits::{Float, Num, One, Zero};

/// Trait for types that can be used as vector and matrix elements.
///
/// Blanket-implemented for all types satisfying the bounds.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Trait for floating-point elements.
///
/// Required by everything that needs `sqrt`, `acos`, `atan2`, or the angle
/// conversions. Implemented for `f32` and `f64`.
pub trait FloatScalar: Scalar + Float {
    /// The π approximation used by the degree/radian conversions.
    ///
    /// This is the single-precision literal `3.1415926`, promoted to `Self`,
    /// not the full-precision constant.
    fn reduced_pi() -> Self;

    /// Degrees in half a turn (`180`).
    fn half_turn_degrees() -> Self;
}

/// Concrete impls for real floats.
macro_rules! impl_float_scalar {
    ($($t:ty),*) => {
        $(
            impl FloatScalar for $t {
                #[inline]
                #[allow(clippy::approx_constant, clippy::excessive_precision, clippy::unnecessary_cast)]
                fn reduced_pi() -> $t { 3.1415926_f32 as $t }
                #[inline] fn half_turn_degrees() -> $t { 180.0 }
            }
        )*
    };
}

impl_float_scalar!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduced_pi_is_single_precision_literal() {
        assert_eq!(f32::reduced_pi(), 3.1415926_f32);
        assert_eq!(f64::reduced_pi(), 3.1415926_f32 as f64);
        // Promoting the f32 literal does not recover the f64 constant
        assert_ne!(f64::reduced_pi(), core::f64::consts::PI);
    }

    #[test]
    fn half_turn() {
        assert_eq!(f32::half_turn_degrees(), 180.0);
        assert_eq!(f64::half_turn_degrees(), 180.0);
    }
}
