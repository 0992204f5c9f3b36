#![allow(missing_docs)]
//! Integration tests for the affine transform constructors: applying the
//! matrices to homogeneous points and checking structural properties.

use std::f64::consts::{FRAC_PI_2, PI};

use lattice_core::affine::{
    look_at, ortho, perspective, rotation, rotation_2d, scaling, scaling_2d, translation,
    translation_2d,
};
use lattice_core::algebra::{determinant, inverse, transpose};
use lattice_core::{Mat4, Matrix, Vec3, Vec4, Vector};

fn approx<const M: usize, const N: usize>(a: &Matrix<f64, M, N>, b: &Matrix<f64, M, N>, eps: f64) {
    for (x, y) in a.iter().zip(b.iter()) {
        assert!((x - y).abs() <= eps, "{a} !~ {b}");
    }
}

fn point3(x: f64, y: f64, z: f64) -> Vec4<f64> {
    Vector::from_array([x, y, z, 1.0])
}

#[test]
fn translation_moves_points() {
    let t = translation(3.0, 2.0, 7.0);
    let p = t * point3(1.0, 1.0, 1.0);
    assert_eq!(p.to_array(), [4.0, 3.0, 8.0, 1.0]);
    // Directions (w = 0) are unaffected.
    let d = t * Vector::from_array([1.0, 1.0, 1.0, 0.0]);
    assert_eq!(d.to_array(), [1.0, 1.0, 1.0, 0.0]);
}

#[test]
fn translation_2d_moves_points() {
    let t = translation_2d(5.0, -2.0);
    let p = t * Vector::from_array([1.0, 1.0, 1.0]);
    assert_eq!(p.to_array(), [6.0, -1.0, 1.0]);
}

#[test]
fn rotation_quarter_turn_about_z() {
    let r = rotation(FRAC_PI_2, 0.0, 0.0, 1.0);
    let p = r * point3(1.0, 0.0, 0.0);
    approx(&p, &point3(0.0, 1.0, 0.0), 1e-12);
}

#[test]
fn rotation_normalizes_its_axis() {
    let a = rotation(1.0, 0.0, 0.0, 1.0);
    let b = rotation(1.0, 0.0, 0.0, 10.0);
    approx(&a, &b, 1e-12);
}

#[test]
fn rotation_zero_axis_is_identity() {
    assert_eq!(rotation(1.0, 0.0, 0.0, 0.0), Mat4::identity());
}

#[test]
fn rotation_is_orthonormal() {
    let r = rotation(0.7, 1.0, 2.0, 3.0);
    approx(&(r * transpose(&r)), &Mat4::identity(), 1e-12);
    assert!((determinant(&r) - 1.0).abs() < 1e-12);
}

#[test]
fn rotation_2d_quarter_turn() {
    let r = rotation_2d(FRAC_PI_2);
    let p = r * Vector::from_array([1.0, 0.0, 1.0]);
    approx(&p, &Vector::from_array([0.0, 1.0, 1.0]), 1e-12);
}

#[test]
fn scaling_stretches_each_axis() {
    let s = scaling(2.0, 3.0, 4.0);
    let p = s * point3(1.0, 1.0, 1.0);
    assert_eq!(p.to_array(), [2.0, 3.0, 4.0, 1.0]);
    let s2 = scaling_2d(2.0, 5.0);
    let q = s2 * Vector::from_array([1.0, 1.0, 1.0]);
    assert_eq!(q.to_array(), [2.0, 5.0, 1.0]);
}

#[test]
fn composed_transform_inverts_cleanly() {
    let m = translation(1.0, 2.0, 3.0) * rotation(0.4, 0.0, 1.0, 0.0) * scaling(2.0, 2.0, 2.0);
    approx(&(m * inverse(&m)), &Mat4::identity(), 1e-9);
}

#[test]
fn ortho_maps_the_volume_to_the_unit_cube() {
    let m = ortho(-2.0, 2.0, -1.0, 1.0, 0.1, 10.0);
    // Corners of the view volume land on clip-space corners.
    let near_corner = m * point3(-2.0, -1.0, -0.1);
    approx(&near_corner, &point3(-1.0, -1.0, -1.0), 1e-12);
    let far_corner = m * point3(2.0, 1.0, -10.0);
    approx(&far_corner, &point3(1.0, 1.0, 1.0), 1e-12);
    // Affine: w stays 1.
    assert_eq!(m[(3, 3)], 1.0);
}

#[test]
fn perspective_keeps_depth_order() {
    let m = perspective(FRAC_PI_2, 1.0, 1.0, 100.0);
    // On-axis points stay on axis; w carries the depth.
    let p = m * point3(0.0, 0.0, -1.0);
    assert!((p[3] - 1.0).abs() < 1e-12);
    // Near plane maps to -w, far plane to +w.
    assert!((p[2] / p[3] + 1.0).abs() < 1e-12);
    let q = m * point3(0.0, 0.0, -100.0);
    assert!((q[2] / q[3] - 1.0).abs() < 1e-9);
    // fovy of 90 degrees puts the g term at 1.
    assert!((m[(1, 1)] - 1.0).abs() < 1e-12);
}

#[test]
fn look_at_maps_eye_to_origin_and_center_down_negative_z() {
    let eye = Vec3::from_array([1.0, 2.0, 3.0]);
    let center = Vec3::from_array([1.0, 2.0, 0.0]);
    let up = Vec3::from_array([0.0, 1.0, 0.0]);
    let v = look_at(&eye, &center, &up);

    let at_eye = v * point3(1.0, 2.0, 3.0);
    approx(&at_eye, &point3(0.0, 0.0, 0.0), 1e-12);
    let at_center = v * point3(1.0, 2.0, 0.0);
    approx(&at_center, &point3(0.0, 0.0, -3.0), 1e-12);
    // Bottom row is the homogeneous {0,0,0,1}.
    assert_eq!(v[(3, 0)], 0.0);
    assert_eq!(v[(3, 3)], 1.0);
}

#[test]
fn rotation_full_turn_is_identity() {
    let r = rotation(2.0 * PI, 0.0, 1.0, 0.0);
    approx(&r, &Mat4::identity(), 1e-12);
}
