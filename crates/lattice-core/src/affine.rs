// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Constructors for ready-to-use affine transform matrices.
//!
//! Every function is a one-shot pure calculation in homogeneous coordinates
//! with the translation in the last column: 3D transforms are `Mat4`, 2D
//! transforms are `Mat3`. The only degenerate input anywhere is a
//! zero-length rotation axis, which falls back to the identity rather than
//! raising an error.

use crate::algebra::{cross, dot, normalize, weld, weldv};
use crate::matrix::Matrix;
use crate::scalar::{Real, Scalar};
use crate::types::{Mat3, Mat4, RowVector, Vec3, Vector};

/// Affine 3D translation.
///
/// # Examples
/// ```
/// use lattice_core::affine::translation;
/// let t = translation(3.0, 2.0, 7.0);
/// assert_eq!(t[(0, 3)], 3.0);
/// assert_eq!(t[(3, 3)], 1.0);
/// ```
pub fn translation<T: Scalar>(x: T, y: T, z: T) -> Mat4<T> {
    let mut r = Mat4::identity();
    r[(0, 3)] = x;
    r[(1, 3)] = y;
    r[(2, 3)] = z;
    r
}

/// Affine 2D translation.
pub fn translation_2d<T: Scalar>(x: T, y: T) -> Mat3<T> {
    let mut r = Mat3::identity();
    r[(0, 2)] = x;
    r[(1, 2)] = y;
    r
}

/// Affine 3D rotation of `rad` radians around the axis `(x, y, z)`.
///
/// Rodrigues' formula: the axis is normalized internally, then the 3×3
/// block is assembled from `cos`, `sin`, and the one-minus-cos term. A
/// zero-length axis yields the identity.
pub fn rotation<T: Real>(rad: T, x: T, y: T, z: T) -> Mat4<T> {
    let mag = (x * x + y * y + z * z).sqrt();
    if mag == T::zero() {
        return Mat4::identity();
    }
    let (x, y, z) = (x / mag, y / mag, z / mag);

    let s = rad.sin();
    let c = rad.cos();
    let omc = T::one() - c;

    let o = T::zero();
    let l = T::one();
    Matrix::from_rows([
        [omc * x * x + c, omc * x * y - z * s, omc * x * z + y * s, o],
        [omc * y * x + z * s, omc * y * y + c, omc * y * z - x * s, o],
        [omc * z * x - y * s, omc * z * y + x * s, omc * z * z + c, o],
        [o, o, o, l],
    ])
}

/// Affine 2D rotation of `rad` radians.
pub fn rotation_2d<T: Real>(rad: T) -> Mat3<T> {
    let mut r = Mat3::identity();
    let (s, c) = (rad.sin(), rad.cos());
    r[(0, 0)] = c;
    r[(1, 0)] = s;
    r[(0, 1)] = -s;
    r[(1, 1)] = c;
    r
}

/// Affine 3D scale with per-axis factors on the diagonal.
pub fn scaling<T: Scalar>(x: T, y: T, z: T) -> Mat4<T> {
    let mut r = Mat4::identity();
    r[(0, 0)] = x;
    r[(1, 1)] = y;
    r[(2, 2)] = z;
    r
}

/// Affine 2D scale.
pub fn scaling_2d<T: Scalar>(x: T, y: T) -> Mat3<T> {
    let mut r = Mat3::identity();
    r[(0, 0)] = x;
    r[(1, 1)] = y;
    r
}

/// Orthographic projection for the view volume
/// `[left, right]×[bottom, top]×[near, far]` (OpenGL clip conventions).
pub fn ortho<T: Real>(left: T, right: T, bottom: T, top: T, near: T, far: T) -> Mat4<T> {
    let two = T::one() + T::one();
    let o = T::zero();
    let sx = two / (right - left);
    let sy = two / (top - bottom);
    let sz = -two / (far - near);
    let tx = -(right + left) / (right - left);
    let ty = -(top + bottom) / (top - bottom);
    let tz = -(far + near) / (far - near);
    Matrix::from_rows([
        [sx, o, o, tx],
        [o, sy, o, ty],
        [o, o, sz, tz],
        [o, o, o, T::one()],
    ])
}

/// Perspective projection from a vertical field of view in radians, an
/// aspect ratio, and near/far clip distances (OpenGL frustum conventions).
pub fn perspective<T: Real>(fovy: T, aspect: T, near: T, far: T) -> Mat4<T> {
    let two = T::one() + T::one();
    let o = T::zero();
    let g = (fovy / two).tan().recip();
    Matrix::from_rows([
        [g / aspect, o, o, o],
        [o, g, o, o],
        [
            o,
            o,
            (far + near) / (near - far),
            two * far * near / (near - far),
        ],
        [o, o, -T::one(), o],
    ])
}

/// View matrix looking from `eye` toward `center` with the given up hint.
///
/// Builds an orthonormal basis from two cross products, welds the eye
/// translation onto the 3×3 block, and appends the homogeneous bottom row
/// `{0,0,0,1}`.
pub fn look_at<T: Real>(eye: &Vec3<T>, center: &Vec3<T>, up: &Vec3<T>) -> Mat4<T> {
    let f = normalize(&(*center - *eye));
    let s = normalize(&cross(&f, up));
    let u = cross(&s, &f);

    let basis: Matrix<T, 3, 3> = Matrix::from_fn(|i, j| match i {
        0 => s[j],
        1 => u[j],
        _ => -f[j],
    });
    let trans = Vector::from_array([-dot(&s, eye), -dot(&u, eye), dot(&f, eye)]);
    let upper: Matrix<T, 3, 4> = weld(&basis, &trans);
    let bottom = RowVector::from_rows([[T::zero(), T::zero(), T::zero(), T::one()]]);
    weldv(&upper, &bottom)
}
