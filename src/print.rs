//! Text output for vectors and matrices.
//!
//! Every type implements [`Display`](fmt::Display):
//!
//! - `Vector3`: `(x, y, z)`
//! - `Vector4`: `(x, y, z, w)`
//! - `Matrix4x4`: one bracketed row-major grid, a row per line, the last
//!   row closing the bracket:
//!
//! ```text
//! [ 1, 0, 0, 0,
//!   0, 1, 0, 0,
//!   0, 0, 1, 0,
//!   0, 0, 0, 1 ]
//! ```
//!
//! Formatter flags (precision, width) apply to each component. The
//! `write_*` helpers emit the same text followed by a newline into any
//! [`fmt::Write`] sink; the `print_*` helpers (`std` only) send it to
//! standard output.
//!
//! ```
//! use vecmath::print::write_vector3;
//! use vecmath::Vector3;
//!
//! let mut out = String::new();
//! write_vector3(&Vector3::new(1.0_f32, 2.5, -3.0), &mut out).unwrap();
//! assert_eq!(out, "(1, 2.5, -3)\n");
//! ```

use core::fmt;

use crate::matrix::{Matrix4x4, DIM};
use crate::vector::{Vector3, Vector4};

impl<T: fmt::Display> fmt::Display for Vector3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        self.x.fmt(f)?;
        f.write_str(", ")?;
        self.y.fmt(f)?;
        f.write_str(", ")?;
        self.z.fmt(f)?;
        f.write_str(")")
    }
}

impl<T: fmt::Display> fmt::Display for Vector4<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        self.x.fmt(f)?;
        f.write_str(", ")?;
        self.y.fmt(f)?;
        f.write_str(", ")?;
        self.z.fmt(f)?;
        f.write_str(", ")?;
        self.w.fmt(f)?;
        f.write_str(")")
    }
}

impl<T: fmt::Display + Copy> fmt::Display for Matrix4x4<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut result = Ok(());
        self.for_each_cell(|i, j, v| {
            if result.is_ok() {
                result = write_cell(f, i, j, v);
            }
        });
        result
    }
}

fn write_cell<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    i: usize,
    j: usize,
    v: T,
) -> fmt::Result {
    let last = DIM - 1;
    if i == 0 && j == 0 {
        f.write_str("[")?;
    }
    f.write_str(" ")?;
    v.fmt(f)?;
    if i == last && j == last {
        f.write_str(" ]")
    } else if j == last {
        f.write_str(",\n ")
    } else {
        f.write_str(",")
    }
}

/// Write `v` and a newline to `out`.
pub fn write_vector3<T: fmt::Display, W: fmt::Write>(v: &Vector3<T>, out: &mut W) -> fmt::Result {
    writeln!(out, "{v}")
}

/// Write `v` and a newline to `out`.
pub fn write_vector4<T: fmt::Display, W: fmt::Write>(v: &Vector4<T>, out: &mut W) -> fmt::Result {
    writeln!(out, "{v}")
}

/// Write `m` and a newline to `out`.
pub fn write_matrix4x4<T: fmt::Display + Copy, W: fmt::Write>(
    m: &Matrix4x4<T>,
    out: &mut W,
) -> fmt::Result {
    writeln!(out, "{m}")
}

/// Print `v` and a newline to standard output.
#[cfg(feature = "std")]
pub fn print_vector3<T: fmt::Display>(v: &Vector3<T>) -> std::io::Result<()> {
    print_line(v)
}

/// Print `v` and a newline to standard output.
#[cfg(feature = "std")]
pub fn print_vector4<T: fmt::Display>(v: &Vector4<T>) -> std::io::Result<()> {
    print_line(v)
}

/// Print `m` and a newline to standard output.
#[cfg(feature = "std")]
pub fn print_matrix4x4<T: fmt::Display + Copy>(m: &Matrix4x4<T>) -> std::io::Result<()> {
    print_line(m)
}

#[cfg(feature = "std")]
fn print_line(value: &dyn fmt::Display) -> std::io::Result<()> {
    use std::io::Write as _;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{value}")
}
