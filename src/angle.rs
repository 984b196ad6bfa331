//! Degree/radian conversion.
//!
//! All conversions use [`FloatScalar::reduced_pi`] (`3.1415926`), so results
//! match single-precision code that hard-codes that literal.
//!
//! ```
//! use vecmath::angle::{to_degrees, to_radians};
//!
//! let mut a = 90.0_f32;
//! to_radians(&mut a);
//! assert!((a - core::f32::consts::FRAC_PI_2).abs() < 1e-6);
//! to_degrees(&mut a);
//! assert!((a - 90.0).abs() < 1e-4);
//! ```

use crate::traits::FloatScalar;

/// Convert `angle` from radians to degrees, in place.
#[inline]
pub fn to_degrees<T: FloatScalar>(angle: &mut T) {
    *angle = degrees(*angle);
}

/// Convert `angle` from degrees to radians, in place.
#[inline]
pub fn to_radians<T: FloatScalar>(angle: &mut T) {
    *angle = radians(*angle);
}

/// Radians to degrees, by value.
#[inline]
pub fn degrees<T: FloatScalar>(radians: T) -> T {
    radians * (T::half_turn_degrees() / T::reduced_pi())
}

/// Degrees to radians, by value.
#[inline]
pub fn radians<T: FloatScalar>(degrees: T) -> T {
    degrees * (T::reduced_pi() / T::half_turn_degrees())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq_f32(a: f32, b: f32, tol: f32) {
        assert!(
            (a - b).abs() < tol,
            "approx_eq_f32 failed: {a} vs {b}, diff = {}, tol = {tol}",
            (a - b).abs()
        );
    }

    #[test]
    fn right_angle_round_trip() {
        let mut a = 90.0_f32;
        to_radians(&mut a);
        approx_eq_f32(a, 1.5707963, 1e-6);
        to_degrees(&mut a);
        approx_eq_f32(a, 90.0, 1e-4);
    }

    #[test]
    fn by_value_matches_in_place() {
        let mut a = 37.5_f32;
        let r = radians(a);
        to_radians(&mut a);
        assert_eq!(a, r);

        let mut b = 2.0_f64;
        let d = degrees(b);
        to_degrees(&mut b);
        assert_eq!(b, d);
    }

    #[test]
    fn known_values() {
        approx_eq_f32(degrees(3.1415926_f32), 180.0, 1e-4);
        approx_eq_f32(radians(180.0_f32), 3.1415926, 1e-6);
        assert_eq!(degrees(0.0_f32), 0.0);
        approx_eq_f32(radians(-45.0_f32), -0.7853982, 1e-6);
    }

    #[test]
    fn f64_uses_reduced_pi() {
        // 180 degrees lands on the promoted f32 literal, not on f64 π
        let r = radians(180.0_f64);
        assert!((r - core::f64::consts::PI).abs() > 1e-9);
        assert!((r - 3.1415926_f32 as f64).abs() < 1e-12);
    }

    #[test]
    fn non_finite_propagates() {
        assert!(degrees(f32::NAN).is_nan());
        assert!(radians(f32::INFINITY).is_infinite());
    }
}
