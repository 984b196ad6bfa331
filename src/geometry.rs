//! Free functions for 3D geometry: cross product, length, normalization,
//! spherical coordinates, and affine translation.
//!
//! # Example
//!
//! ```
//! use vecmath::geometry::{cross, length, normalize};
//! use vecmath::Vector3;
//!
//! let x = Vector3::new(1.0_f32, 0.0, 0.0);
//! let y = Vector3::new(0.0, 1.0, 0.0);
//! assert_eq!(cross(&x, &y), Vector3::new(0.0, 0.0, 1.0));
//!
//! let mut v = Vector3::new(3.0_f32, 4.0, 0.0);
//! assert_eq!(length(&v), 5.0);
//! normalize(&mut v);
//! assert!((length(&v) - 1.0).abs() < 1e-6);
//! ```

use crate::matrix::Matrix4x4;
use crate::traits::{FloatScalar, Scalar};
use crate::vector::{Vector3, Vector4};

/// Spherical coordinates of a point, all angles in radians.
///
/// `radial_distance >= 0`, `polar_angle` in `[0, π]` measured from `+z`,
/// `azimuthal_angle` in `(-π, π]` measured from `+x` towards `+y`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SphericalCoordinate<T> {
    pub radial_distance: T,
    pub polar_angle: T,
    pub azimuthal_angle: T,
}

/// Right-handed cross product `b × c`.
#[inline]
pub fn cross<T: Scalar>(b: &Vector3<T>, c: &Vector3<T>) -> Vector3<T> {
    Vector3::new(
        b.y * c.z - b.z * c.y,
        b.z * c.x - b.x * c.z,
        b.x * c.y - b.y * c.x,
    )
}

/// Euclidean length `sqrt(x² + y² + z²)`.
#[inline]
pub fn length<T: FloatScalar>(v: &Vector3<T>) -> T {
    v.dot(v).sqrt()
}

/// Scale `v` to unit length, in place.
///
/// No guard against the zero vector: dividing by a zero length leaves NaN
/// in every component.
#[inline]
pub fn normalize<T: FloatScalar>(v: &mut Vector3<T>) {
    let l = length(v);
    v.x = v.x / l;
    v.y = v.y / l;
    v.z = v.z / l;
}

/// Spherical coordinates of `v`.
///
/// The polar angle is NaN for the zero vector (`acos(0 / 0)`).
pub fn spherical_coordinates<T: FloatScalar>(v: &Vector3<T>) -> SphericalCoordinate<T> {
    let radial_distance = length(v);
    SphericalCoordinate {
        radial_distance,
        polar_angle: (v.z / radial_distance).acos(),
        azimuthal_angle: v.y.atan2(v.x),
    }
}

/// Compose a translation by `offset` into `m`.
///
/// The offset is first carried through `m` with [`Matrix4x4::vecmul`], and
/// the `x`, `y`, `z` of the result are added to rows 0..3 of column 3. The
/// rest of `m` is copied unchanged.
///
/// ```
/// use vecmath::geometry::translate;
/// use vecmath::{Matrix4x4, Vector4};
///
/// let m = translate(&Matrix4x4::<f32>::identity(), &Vector4::point(1.0, 2.0, 3.0));
/// assert_eq!(m.col(3), Vector4::new(1.0, 2.0, 3.0, 1.0));
/// ```
pub fn translate<T: Scalar>(m: &Matrix4x4<T>, offset: &Vector4<T>) -> Matrix4x4<T> {
    let mut n = *m;
    let buf = m.vecmul(offset);
    n[(0, 3)] = n[(0, 3)] + buf.x;
    n[(1, 3)] = n[(1, 3)] + buf.y;
    n[(2, 3)] = n[(2, 3)] + buf.z;
    n
}

// ── Method forms ────────────────────────────────────────────────────

impl<T: Scalar> Vector3<T> {
    /// Cross product, see [`cross`].
    #[inline]
    pub fn cross(&self, rhs: &Self) -> Self {
        cross(self, rhs)
    }
}

impl<T: FloatScalar> Vector3<T> {
    /// Euclidean length, see [`length`].
    #[inline]
    pub fn length(&self) -> T {
        length(self)
    }

    /// Normalize in place, see [`normalize`].
    #[inline]
    pub fn normalize(&mut self) {
        normalize(self);
    }

    /// Unit-length copy of `self`.
    #[inline]
    pub fn normalized(mut self) -> Self {
        normalize(&mut self);
        self
    }

    /// Spherical coordinates, see [`spherical_coordinates`].
    #[inline]
    pub fn spherical(&self) -> SphericalCoordinate<T> {
        spherical_coordinates(self)
    }
}

impl<T: Scalar> Matrix4x4<T> {
    /// Compose a translation, see [`translate`].
    #[inline]
    pub fn translated(&self, offset: &Vector4<T>) -> Self {
        translate(self, offset)
    }
}
