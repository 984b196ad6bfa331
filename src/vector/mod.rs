mod ops;

use core::ops::{Index, IndexMut};

use crate::traits::Scalar;

/// A 3-component vector `(x, y, z)`.
///
/// Components are public fields, so they can be reassigned in place without
/// reconstructing the value. The `x_mut`/`y_mut`/`z_mut` accessors and
/// `v[i]` indexing hand out the same mutable access.
///
/// # Examples
///
/// ```
/// use vecmath::Vector3;
///
/// let mut v = Vector3::new(1.0_f32, 2.0, 3.0);
/// v.y = 5.0;
/// *v.z_mut() += 1.0;
/// assert_eq!(v, Vector3::new(1.0, 5.0, 4.0));
/// assert_eq!(v[2], 4.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

/// A 4-component vector `(x, y, z, w)`.
///
/// `w` is the homogeneous coordinate: `1` marks a point, `0` a direction.
/// Converting from a [`Vector3`] appends `w = 1`.
///
/// ```
/// use vecmath::{Vector3, Vector4};
///
/// let p: Vector4<f32> = Vector3::new(1.0, 2.0, 3.0).into();
/// assert_eq!(p, Vector4::new(1.0, 2.0, 3.0, 1.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector4<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

// ── Vector3 ─────────────────────────────────────────────────────────

impl<T> Vector3<T> {
    /// Create a vector from its components.
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// Number of components.
    #[inline]
    pub const fn len(&self) -> usize {
        3
    }

    /// Mutable access to `x`.
    #[inline]
    pub fn x_mut(&mut self) -> &mut T {
        &mut self.x
    }

    /// Mutable access to `y`.
    #[inline]
    pub fn y_mut(&mut self) -> &mut T {
        &mut self.y
    }

    /// Mutable access to `z`.
    #[inline]
    pub fn z_mut(&mut self) -> &mut T {
        &mut self.z
    }
}

impl<T: Scalar> Vector3<T> {
    /// The zero vector.
    #[inline]
    pub fn zeros() -> Self {
        Self::splat(T::zero())
    }

    /// Create a vector with every component set to `value`.
    ///
    /// ```
    /// use vecmath::Vector3;
    /// assert_eq!(Vector3::splat(2.0_f32), Vector3::new(2.0, 2.0, 2.0));
    /// ```
    #[inline]
    pub fn splat(value: T) -> Self {
        Self::new(value, value, value)
    }

    /// Create a vector from `[x, y, z]`.
    #[inline]
    pub fn from_array([x, y, z]: [T; 3]) -> Self {
        Self::new(x, y, z)
    }

    /// Components as `[x, y, z]`.
    #[inline]
    pub fn to_array(&self) -> [T; 3] {
        [self.x, self.y, self.z]
    }

    /// Dot product: `x·x' + y·y' + z·z'`.
    ///
    /// ```
    /// use vecmath::Vector3;
    /// let a = Vector3::new(1.0_f32, 2.0, 3.0);
    /// let b = Vector3::new(4.0, 5.0, 6.0);
    /// assert_eq!(a.dot(&b), 32.0);
    /// ```
    #[inline]
    pub fn dot(&self, rhs: &Self) -> T {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }
}

impl<T> Index<usize> for Vector3<T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("index {i} out of bounds for Vector3"),
        }
    }
}

impl<T> IndexMut<usize> for Vector3<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("index {i} out of bounds for Vector3"),
        }
    }
}

impl<T> From<[T; 3]> for Vector3<T> {
    fn from([x, y, z]: [T; 3]) -> Self {
        Self { x, y, z }
    }
}

// ── Vector4 ─────────────────────────────────────────────────────────

impl<T> Vector4<T> {
    /// Create a vector from its components.
    #[inline]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }

    /// Widen a [`Vector3`] with an explicit homogeneous coordinate.
    ///
    /// ```
    /// use vecmath::{Vector3, Vector4};
    /// let dir = Vector4::from_vector3(Vector3::new(0.0_f32, 1.0, 0.0), 0.0);
    /// assert_eq!(dir.w, 0.0);
    /// ```
    #[inline]
    pub fn from_vector3(v: Vector3<T>, w: T) -> Self {
        Self::new(v.x, v.y, v.z, w)
    }

    /// Number of components.
    #[inline]
    pub const fn len(&self) -> usize {
        4
    }

    /// Mutable access to `x`.
    #[inline]
    pub fn x_mut(&mut self) -> &mut T {
        &mut self.x
    }

    /// Mutable access to `y`.
    #[inline]
    pub fn y_mut(&mut self) -> &mut T {
        &mut self.y
    }

    /// Mutable access to `z`.
    #[inline]
    pub fn z_mut(&mut self) -> &mut T {
        &mut self.z
    }

    /// Mutable access to `w`.
    #[inline]
    pub fn w_mut(&mut self) -> &mut T {
        &mut self.w
    }
}

impl<T: Scalar> Vector4<T> {
    /// The zero vector (including `w`).
    #[inline]
    pub fn zeros() -> Self {
        Self::splat(T::zero())
    }

    /// Create a vector with every component, `w` included, set to `value`.
    #[inline]
    pub fn splat(value: T) -> Self {
        Self::new(value, value, value, value)
    }

    /// Create a point: `(x, y, z, 1)`.
    #[inline]
    pub fn point(x: T, y: T, z: T) -> Self {
        Self::new(x, y, z, T::one())
    }

    /// Create a vector from `[x, y, z, w]`.
    #[inline]
    pub fn from_array([x, y, z, w]: [T; 4]) -> Self {
        Self::new(x, y, z, w)
    }

    /// Components as `[x, y, z, w]`.
    #[inline]
    pub fn to_array(&self) -> [T; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// The `(x, y, z)` part, dropping `w`.
    ///
    /// Narrowing is always explicit; there is no `From<Vector4>` for
    /// [`Vector3`].
    #[inline]
    pub fn xyz(&self) -> Vector3<T> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Dot product over all four components.
    ///
    /// ```
    /// use vecmath::Vector4;
    /// let a = Vector4::new(1.0_f32, 2.0, 3.0, 4.0);
    /// let b = Vector4::new(5.0, 6.0, 7.0, 8.0);
    /// assert_eq!(a.dot(&b), 70.0);
    /// ```
    #[inline]
    pub fn dot(&self, rhs: &Self) -> T {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z + self.w * rhs.w
    }
}

/// Widening conversion with point semantics (`w = 1`).
impl<T: Scalar> From<Vector3<T>> for Vector4<T> {
    #[inline]
    fn from(v: Vector3<T>) -> Self {
        Self::from_vector3(v, T::one())
    }
}

impl<T> From<[T; 4]> for Vector4<T> {
    fn from([x, y, z, w]: [T; 4]) -> Self {
        Self { x, y, z, w }
    }
}

impl<T> Index<usize> for Vector4<T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("index {i} out of bounds for Vector4"),
        }
    }
}

impl<T> IndexMut<usize> for Vector4<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => &mut self.w,
            _ => panic!("index {i} out of bounds for Vector4"),
        }
    }
}

// ── Aliases ─────────────────────────────────────────────────────────

/// Single-precision [`Vector3`].
pub type Vector3f = Vector3<f32>;
/// Double-precision [`Vector3`].
pub type Vector3d = Vector3<f64>;
/// Single-precision [`Vector4`].
pub type Vector4f = Vector4<f32>;
/// Double-precision [`Vector4`].
pub type Vector4d = Vector4<f64>;
