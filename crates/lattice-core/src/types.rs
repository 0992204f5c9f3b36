// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shorthand aliases for the common matrix shapes.
//!
//! Vectors are column matrices (`D×1`); a row vector is its transpose. The
//! concrete `F*`/`D*`/`I*` names cover the float, double, and integer
//! instantiations user code reaches for in practice.

use crate::matrix::Matrix;

/// Column vector: a `D×1` matrix.
pub type Vector<T, const D: usize> = Matrix<T, D, 1>;
/// Row vector: a `1×D` matrix.
pub type RowVector<T, const D: usize> = Matrix<T, 1, D>;
/// `1×1` matrix wrapping a single scalar.
pub type ScalarMat<T> = Matrix<T, 1, 1>;

/// 2-component column vector.
pub type Vec2<T> = Vector<T, 2>;
/// 3-component column vector.
pub type Vec3<T> = Vector<T, 3>;
/// 4-component column vector.
pub type Vec4<T> = Vector<T, 4>;

/// 2×2 matrix.
pub type Mat2<T> = Matrix<T, 2, 2>;
/// 3×3 matrix (2D affine transforms).
pub type Mat3<T> = Matrix<T, 3, 3>;
/// 4×4 matrix (3D affine transforms).
pub type Mat4<T> = Matrix<T, 4, 4>;

/// `f32` 2-vector.
pub type FVec2 = Vec2<f32>;
/// `f32` 3-vector.
pub type FVec3 = Vec3<f32>;
/// `f32` 4-vector.
pub type FVec4 = Vec4<f32>;
/// `f32` 2×2 matrix.
pub type FMat2 = Mat2<f32>;
/// `f32` 3×3 matrix.
pub type FMat3 = Mat3<f32>;
/// `f32` 4×4 matrix.
pub type FMat4 = Mat4<f32>;

/// `f64` 2-vector.
pub type DVec2 = Vec2<f64>;
/// `f64` 3-vector.
pub type DVec3 = Vec3<f64>;
/// `f64` 4-vector.
pub type DVec4 = Vec4<f64>;
/// `f64` 2×2 matrix.
pub type DMat2 = Mat2<f64>;
/// `f64` 3×3 matrix.
pub type DMat3 = Mat3<f64>;
/// `f64` 4×4 matrix.
pub type DMat4 = Mat4<f64>;

/// `i32` 2-vector.
pub type IVec2 = Vec2<i32>;
/// `i32` 3-vector.
pub type IVec3 = Vec3<i32>;
/// `i32` 4-vector.
pub type IVec4 = Vec4<i32>;
/// `i32` 2×2 matrix.
pub type IMat2 = Mat2<i32>;
/// `i32` 3×3 matrix.
pub type IMat3 = Mat3<i32>;
/// `i32` 4×4 matrix.
pub type IMat4 = Mat4<i32>;
