//! # vecmath
//!
//! Small fixed-size linear algebra for 3D graphics and geometry, no-std
//! compatible. No heap allocation; every type is a plain `Copy` value.
//!
//! ## Quick start
//!
//! ```
//! use vecmath::geometry::{cross, translate};
//! use vecmath::{Matrix4x4, Vector3, Vector4};
//!
//! let x = Vector3::new(1.0_f32, 0.0, 0.0);
//! let y = Vector3::new(0.0, 1.0, 0.0);
//! assert_eq!(cross(&x, &y), Vector3::new(0.0, 0.0, 1.0));
//!
//! // Widening a Vector3 appends the homogeneous coordinate w = 1
//! let p: Vector4<f32> = Vector3::new(1.0, 2.0, 3.0).into();
//! assert_eq!(Matrix4x4::identity() * p, p);
//!
//! let m = translate(&Matrix4x4::identity(), &Vector4::new(1.0, 0.0, 0.0, 1.0));
//! assert_eq!(m[(0, 3)], 1.0);
//! ```
//!
//! ## Modules
//!
//! - [`vector`] — [`Vector3`] and [`Vector4`] with public `x`/`y`/`z`/`w`
//!   fields, component-wise `+`/`-`, scaling, and dot product (`dot` or `*`).
//!   `Vector3 → Vector4` widening sets `w = 1`; narrowing is explicit via
//!   [`Vector4::xyz`].
//!
//! - [`matrix`] — [`Matrix4x4`] with row-major `[[T; 4]; 4]` storage. Zero by
//!   default, [`Matrix4x4::from_diagonal`] for scaled identities. All
//!   element-wise operations go through the row-major cell visitor
//!   ([`Matrix4x4::for_each_cell`], [`Matrix4x4::cells`]). Checked access via
//!   [`Matrix4x4::entry`] returns [`MatrixError`] instead of panicking.
//!   `matrix * vector` uses transposed indexing, see [`Matrix4x4::vecmul`].
//!
//! - [`geometry`] — cross product, length, normalization, spherical
//!   coordinates, and [`translate`](geometry::translate).
//!
//! - [`angle`] — in-place and by-value degree/radian conversion using the
//!   single-precision π literal `3.1415926`.
//!
//! - [`print`] — `Display` impls plus `write_*` (any `fmt::Write` sink) and
//!   `print_*` (standard output) helpers.
//!
//! - [`traits`] — [`Scalar`] and [`FloatScalar`] element traits (`f32`, `f64`).
//!
//! ## Floating-point behaviour
//!
//! Nothing is checked beyond cell indices. Division by zero and
//! out-of-domain `acos` produce IEEE-754 infinities and NaNs that propagate
//! silently; normalizing the zero vector yields NaN components.
//!
//! ## Cargo features
//!
//! | Feature | Default  | Description |
//! |---------|----------|-------------|
//! | `std`   | yes      | Hardware FPU via system libm; `print_*` helpers; `std::error::Error` for [`MatrixError`] |
//! | `libm`  | baseline | Pure-Rust software float fallback |

#![cfg_attr(not(feature = "std"), no_std)]

pub mod angle;
pub mod geometry;
pub mod matrix;
pub mod print;
pub mod traits;
pub mod vector;

pub use geometry::SphericalCoordinate;
pub use matrix::{Matrix4x4, Matrix4x4d, Matrix4x4f, MatrixError};
pub use traits::{FloatScalar, Scalar};
pub use vector::{Vector3, Vector3d, Vector3f, Vector4, Vector4d, Vector4f};
