// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Scalar bounds for matrix elements.
//!
//! The matrix core is generic over its element type so the same algebra
//! serves `i32` index math and `f32`/`f64` transform math. Rather than
//! commit to a concrete representation, [`Scalar`] gathers the ring
//! operations every matrix needs and [`Real`] adds the floating-point
//! surface (square roots, trig) that lengths, normalization, and the affine
//! constructors require.
//!
//! Both traits are blanket-implemented; user code never implements them by
//! hand.

use core::fmt;
use core::ops::Neg;

use num_traits::{Float, Num, NumAssignOps};

/// Element type usable in a [`Matrix`](crate::Matrix).
///
/// Covers the signed primitives the type aliases expose (`i32`, `f32`,
/// `f64`) and anything else satisfying the same ring-with-negation surface.
pub trait Scalar:
    Num + NumAssignOps + Neg<Output = Self> + Copy + PartialOrd + fmt::Debug + fmt::Display + 'static
{
}

impl<T> Scalar for T where
    T: Num
        + NumAssignOps
        + Neg<Output = T>
        + Copy
        + PartialOrd
        + fmt::Debug
        + fmt::Display
        + 'static
{
}

/// Scalar with floating-point operations.
///
/// Required by `length`/`normalize`, `inverse`, and every affine
/// constructor that evaluates trig.
pub trait Real: Scalar + Float {}

impl<T> Real for T where T: Scalar + Float {}
