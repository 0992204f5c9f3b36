// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Lattice core: fixed-size linear algebra for graphics and geometry code.
//!
//! This crate provides:
//! - A generically-sized row-major matrix value type ([`Matrix`]) with
//!   vector, quaternion, and AABB shapes layered on top as aliases.
//! - A free-function algebra ([`algebra`]): transpose, multiply,
//!   determinant/inverse via cofactor expansion, dot/cross/length,
//!   submatrix extraction and weld composition.
//! - Affine transform constructors ([`affine`]): translation, rotation,
//!   scaling, orthographic/perspective projection, look-at.
//! - Axis-aligned bounding-box set operations ([`aabb`]).
//! - Compile-time-counted swizzle views ([`swizzle`]).
//!
//! Design notes:
//! - Everything is a stack-resident value; the core types never allocate
//!   and nothing is shared, so the whole crate is trivially `Send`/`Sync`.
//! - Dimensions live in the type system (const generics); shape mismatches
//!   are compile errors wherever stable Rust can express them, and checked
//!   preconditions everywhere else (see [`checks`]).
//! - Numerical degeneracies are silent by design: a singular [`inverse`]
//!   returns infinities/NaNs and a zero-length rotation axis produces the
//!   identity. Callers pre-check [`is_singular`] or the axis length when
//!   they need a defined failure path.
//!
//! [`inverse`]: algebra::inverse
//! [`is_singular`]: algebra::is_singular

/// Axis-aligned bounding boxes built on two-column matrices.
pub mod aabb;
/// Free-function algebra and operator impls over [`Matrix`].
pub mod algebra;
/// Affine transform matrix constructors.
pub mod affine;
/// Precondition enforcement (typed panic payloads, build-time toggled).
pub mod checks;
/// The matrix container.
pub mod matrix;
/// Quaternion helpers over 4-vectors.
pub mod quat;
/// Scalar trait bounds.
pub mod scalar;
/// Swizzle views.
pub mod swizzle;
/// Shape aliases.
pub mod types;

pub use aabb::Aabb;
pub use checks::PreconditionViolation;
pub use matrix::Matrix;
pub use quat::Quaternion;
pub use scalar::{Real, Scalar};
pub use swizzle::{swiz, swiz_mut, Sel};
pub use types::{Mat2, Mat3, Mat4, RowVector, Vec2, Vec3, Vec4, Vector};
