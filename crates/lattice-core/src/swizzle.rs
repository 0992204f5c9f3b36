// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Swizzle views: component reordering with constant fill-ins.
//!
//! A swizzle is a flat ordered list of selectors, each naming either a
//! component of the underlying vector or a constant value (for fill-ins
//! like the trailing `1.0` that turns a 2D point into a homogeneous one).
//! Reads evaluate the selectors left to right into a fresh vector;
//! assignment writes through the component selectors of a [`SwizzleMut`].
//!
//! Selector count is part of the type (`K`), so assigning between
//! differently-sized selections does not compile. Constant selectors are
//! read-only: using one as an assignment destination is a precondition
//! violation.
//!
//! # Examples
//! ```
//! use lattice_core::swizzle::{swiz, swiz_mut, Sel, X, Y, Z};
//! use lattice_core::Vector;
//!
//! let src = Vector::from_array([4.0, 5.0]);
//! let mut dst = Vector::from_array([0.0, 0.0, 0.0]);
//! let picked = swiz(&src, [Y.into(), X.into(), Sel::lit(1.0)]);
//! swiz_mut(&mut dst, [X.into(), Y.into(), Z.into()]).assign(&picked);
//! assert_eq!(dst.to_array(), [5.0, 4.0, 1.0]);
//! ```

use crate::matrix::Matrix;
use crate::require;
use crate::scalar::Scalar;
use crate::types::Vector;

/// Named component position, convertible into a [`Sel`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Comp(pub usize);

/// First component.
pub const X: Comp = Comp(0);
/// Second component.
pub const Y: Comp = Comp(1);
/// Third component.
pub const Z: Comp = Comp(2);
/// Fourth component.
pub const W: Comp = Comp(3);

/// One element of a swizzle: a component of the source vector, or a
/// constant fill value.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Sel<T> {
    /// References component `i` of the underlying vector.
    Comp(usize),
    /// A materialized constant; readable, never writable.
    Lit(T),
}

impl<T> Sel<T> {
    /// Constant-fill selector.
    pub const fn lit(value: T) -> Self {
        Self::Lit(value)
    }
}

impl<T> From<Comp> for Sel<T> {
    fn from(c: Comp) -> Self {
        Self::Comp(c.0)
    }
}

/// Reads a selection out of `v` into a fresh `K`-vector.
///
/// Component selectors beyond the vector's dimension are precondition
/// violations.
pub fn swiz<T: Scalar, const D: usize, const K: usize>(
    v: &Vector<T, D>,
    sels: [Sel<T>; K],
) -> Vector<T, K> {
    Matrix::from_fn(|i, _| match sels[i] {
        Sel::Comp(c) => {
            require!(
                c < D,
                "swizzle component in range",
                "component {c} of a {D}-vector"
            );
            v[c]
        }
        Sel::Lit(l) => l,
    })
}

/// Assignment target over a vector: write through [`SwizzleMut::assign`]
/// or [`SwizzleMut::assign_array`].
#[derive(Debug)]
pub struct SwizzleMut<'a, T, const D: usize, const K: usize> {
    vec: &'a mut Vector<T, D>,
    sels: [Sel<T>; K],
}

/// Builds an assignment target from `v` and a selector list.
pub fn swiz_mut<T: Scalar, const D: usize, const K: usize>(
    v: &mut Vector<T, D>,
    sels: [Sel<T>; K],
) -> SwizzleMut<'_, T, D, K> {
    SwizzleMut { vec: v, sels }
}

impl<T: Scalar, const D: usize, const K: usize> SwizzleMut<'_, T, D, K> {
    /// Reads the current selection, like [`swiz`].
    pub fn to_vector(&self) -> Vector<T, K> {
        swiz(self.vec, self.sels)
    }

    /// Writes `values` through the selectors, element by element.
    ///
    /// Every destination selector must be a component; writing through a
    /// constant is a precondition violation, as is a component index
    /// beyond the vector's dimension.
    pub fn assign_array(&mut self, values: [T; K]) {
        for (sel, value) in self.sels.iter().zip(values) {
            match *sel {
                Sel::Comp(c) => {
                    require!(
                        c < D,
                        "swizzle component in range",
                        "component {c} of a {D}-vector"
                    );
                    self.vec[c] = value;
                }
                Sel::Lit(_) => {
                    require!(
                        false,
                        "swizzle destination is writable",
                        "cannot assign through a constant selector"
                    );
                }
            }
        }
    }

    /// Writes a `K`-vector (typically another swizzle's read) through the
    /// selectors. The matching `K` makes length mismatches a compile-time
    /// error.
    pub fn assign(&mut self, source: &Vector<T, K>) {
        self.assign_array(source.to_array());
    }
}
