// Builds a few vectors and matrices and prints them with the stdout helpers.
//
//   cargo run --example print_demo

use vecmath::angle::degrees;
use vecmath::geometry::{cross, spherical_coordinates, translate};
use vecmath::print::{print_matrix4x4, print_vector3, print_vector4};
use vecmath::{Matrix4x4, Vector3, Vector4};

fn main() -> std::io::Result<()> {
    let x = Vector3::new(1.0_f32, 0.0, 0.0);
    let y = Vector3::new(0.0_f32, 1.0, 0.0);
    let z = cross(&x, &y);
    print_vector3(&z)?;

    let p: Vector4<f32> = Vector3::new(1.0, 2.0, 3.0).into();
    print_vector4(&p)?;

    let m = translate(&Matrix4x4::identity(), &Vector4::new(1.0, 0.0, 0.0, 1.0));
    let m = translate(&m, &Vector4::new(0.0, 1.0, 0.0, 1.0));
    print_matrix4x4(&m)?;
    print_vector4(&(m * p))?;

    let s = spherical_coordinates(&Vector3::new(1.0_f32, 1.0, 1.0));
    println!(
        "r = {:.4}, polar = {:.2} deg, azimuth = {:.2} deg",
        s.radial_distance,
        degrees(s.polar_angle),
        degrees(s.azimuthal_angle)
    );
    Ok(())
}
