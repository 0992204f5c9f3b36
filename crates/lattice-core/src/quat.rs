// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Quaternions stored as 4-vectors in `{x, y, z, w}` order.
//!
//! `w` is the scalar part, `x,y,z` the axis part. Nothing here enforces
//! unit length; orientation math assumes it by convention, so callers
//! compounding rotations renormalize with [`qnormalize`] when drift
//! matters.

use crate::algebra::normalize;
use crate::matrix::Matrix;
use crate::scalar::Real;
use crate::types::{Mat4, Vec3, Vec4, Vector};

/// Quaternion as a 4-component column vector `{x, y, z, w}`.
pub type Quaternion<T> = Vec4<T>;

/// `f32` quaternion.
pub type FQuaternion = Quaternion<f32>;
/// `f64` quaternion.
pub type DQuaternion = Quaternion<f64>;

/// Component index of `x`.
pub const X: usize = 0;
/// Component index of `y`.
pub const Y: usize = 1;
/// Component index of `z`.
pub const Z: usize = 2;
/// Component index of `w` (the scalar part).
pub const W: usize = 3;

/// Identity rotation.
pub fn qidentity<T: Real>() -> Quaternion<T> {
    Vector::from_array([T::zero(), T::zero(), T::zero(), T::one()])
}

/// Hamilton product `a * b`.
///
/// Non-commutative; the result composes the rotation of `a` followed by the
/// rotation of `b`. The product of two unit quaternions is a unit
/// quaternion up to rounding.
pub fn qmul<T: Real>(a: &Quaternion<T>, b: &Quaternion<T>) -> Quaternion<T> {
    Vector::from_array([
        a[W] * b[X] + a[X] * b[W] + a[Y] * b[Z] - a[Z] * b[Y],
        a[W] * b[Y] - a[X] * b[Z] + a[Y] * b[W] + a[Z] * b[X],
        a[W] * b[Z] + a[X] * b[Y] - a[Y] * b[X] + a[Z] * b[W],
        a[W] * b[W] - a[X] * b[X] - a[Y] * b[Y] - a[Z] * b[Z],
    ])
}

/// Unit quaternion for a rotation of `rad` radians around `axis`.
///
/// The axis is normalized internally; a zero-length axis yields the
/// identity, matching the affine rotation constructor's fallback.
pub fn qaxis_angle<T: Real>(axis: &Vec3<T>, rad: T) -> Quaternion<T> {
    let len_sq = crate::algebra::length_sq(axis);
    if len_sq == T::zero() {
        return qidentity();
    }
    let two = T::one() + T::one();
    let half = rad / two;
    let s = half.sin() / len_sq.sqrt();
    Vector::from_array([axis[0] * s, axis[1] * s, axis[2] * s, half.cos()])
}

/// Renormalizes a quaternion that has drifted off unit length.
pub fn qnormalize<T: Real>(q: &Quaternion<T>) -> Quaternion<T> {
    normalize(q)
}

/// Rotation matrix for an arbitrary (not necessarily unit) quaternion.
pub fn qmat<T: Real>(q: &Quaternion<T>) -> Mat4<T> {
    let (x, y, z, w) = (q[X], q[Y], q[Z], q[W]);
    let (x2, y2, z2, w2) = (x * x, y * y, z * z, w * w);
    let two = T::one() + T::one();
    let o = T::zero();
    Matrix::from_rows([
        [
            w2 + x2 - y2 - z2,
            two * (x * y - w * z),
            two * (x * z + w * y),
            o,
        ],
        [
            two * (x * y + w * z),
            w2 - x2 + y2 - z2,
            two * (y * z - w * x),
            o,
        ],
        [
            two * (x * z - w * y),
            two * (y * z + w * x),
            w2 - x2 - y2 + z2,
            o,
        ],
        [o, o, o, T::one()],
    ])
}

/// Rotation matrix for a unit quaternion; cheaper than [`qmat`] because the
/// squared-norm terms collapse to 1.
pub fn qmatu<T: Real>(q: &Quaternion<T>) -> Mat4<T> {
    let (x, y, z, w) = (q[X], q[Y], q[Z], q[W]);
    let (x2, y2, z2) = (x * x, y * y, z * z);
    let two = T::one() + T::one();
    let o = T::zero();
    let l = T::one();
    Matrix::from_rows([
        [
            l - two * (y2 + z2),
            two * (x * y - w * z),
            two * (x * z + w * y),
            o,
        ],
        [
            two * (x * y + w * z),
            l - two * (x2 + z2),
            two * (y * z - w * x),
            o,
        ],
        [
            two * (x * z - w * y),
            two * (y * z + w * x),
            l - two * (x2 + y2),
            o,
        ],
        [o, o, o, l],
    ])
}
