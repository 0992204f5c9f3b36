// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Axis-aligned bounding boxes as two-column matrices.
//!
//! An [`Aabb`] is a `D×2` matrix: column 0 holds the low corner, column 1
//! the high corner. A box is *normalized* when `low[d] <= high[d]` in every
//! dimension; [`make_aabb`] guarantees that, the raw matrix constructors do
//! not, and the set operations here assume it.
//!
//! Interval conventions, applied uniformly:
//! - point containment is half-open: `low <= p < high`;
//! - box-in-box containment is closed on both bounds;
//! - box/box overlap is strict, so boxes that merely touch do not overlap.

use crate::algebra::column;
use crate::matrix::Matrix;
use crate::scalar::Scalar;
use crate::types::Vector;

/// Axis-aligned bounding box: low corner in column 0, high in column 1.
pub type Aabb<T, const D: usize> = Matrix<T, D, 2>;

/// `f32` 2D box.
pub type FAabb2 = Aabb<f32, 2>;
/// `f32` 3D box.
pub type FAabb3 = Aabb<f32, 3>;
/// `f64` 2D box.
pub type DAabb2 = Aabb<f64, 2>;
/// `f64` 3D box.
pub type DAabb3 = Aabb<f64, 3>;
/// `i32` 2D box.
pub type IAabb2 = Aabb<i32, 2>;
/// `i32` 3D box.
pub type IAabb3 = Aabb<i32, 3>;

fn min_s<T: Scalar>(a: T, b: T) -> T {
    if b < a {
        b
    } else {
        a
    }
}

fn max_s<T: Scalar>(a: T, b: T) -> T {
    if b > a {
        b
    } else {
        a
    }
}

/// Builds a normalized box from two opposite corner points.
///
/// The corners are min/max-ed per dimension, so argument order does not
/// matter.
///
/// # Examples
/// ```
/// use lattice_core::{aabb::make_aabb, Vector};
/// let b = make_aabb(&Vector::from_array([2.0, 0.0]), &Vector::from_array([0.0, 1.0]));
/// assert_eq!(b.to_rows(), [[0.0, 2.0], [0.0, 1.0]]);
/// ```
pub fn make_aabb<T: Scalar, const D: usize>(p0: &Vector<T, D>, p1: &Vector<T, D>) -> Aabb<T, D> {
    Matrix::from_fn(|d, j| {
        if j == 0 {
            min_s(p0[d], p1[d])
        } else {
            max_s(p0[d], p1[d])
        }
    })
}

/// Low corner (column 0).
pub fn low<T: Scalar, const D: usize>(a: &Aabb<T, D>) -> Vector<T, D> {
    column(a, 0)
}

/// High corner (column 1).
pub fn high<T: Scalar, const D: usize>(a: &Aabb<T, D>) -> Vector<T, D> {
    column(a, 1)
}

/// Returns `true` when `low[d] <= high[d]` in every dimension.
pub fn is_normalized<T: Scalar, const D: usize>(a: &Aabb<T, D>) -> bool {
    (0..D).all(|d| a[(d, 0)] <= a[(d, 1)])
}

/// Point containment: half-open, `low <= p < high` per dimension.
pub fn contains_point<T: Scalar, const D: usize>(a: &Aabb<T, D>, p: &Vector<T, D>) -> bool {
    (0..D).all(|d| a[(d, 0)] <= p[d] && p[d] < a[(d, 1)])
}

/// Box containment: `b` lies within `a`, closed on both bounds.
pub fn contains<T: Scalar, const D: usize>(a: &Aabb<T, D>, b: &Aabb<T, D>) -> bool {
    (0..D).all(|d| a[(d, 0)] <= b[(d, 0)] && b[(d, 1)] <= a[(d, 1)])
}

/// Box overlap: strict comparison, so touching boxes do not overlap.
pub fn overlaps<T: Scalar, const D: usize>(a: &Aabb<T, D>, b: &Aabb<T, D>) -> bool {
    (0..D).all(|d| a[(d, 0)] < b[(d, 1)] && b[(d, 0)] < a[(d, 1)])
}

/// Extent of the box in each dimension.
pub fn dimensions<T: Scalar, const D: usize>(a: &Aabb<T, D>) -> Vector<T, D> {
    high(a) - low(a)
}

/// Center point of the box.
pub fn center<T: Scalar, const D: usize>(a: &Aabb<T, D>) -> Vector<T, D> {
    let two = T::one() + T::one();
    low(a) + dimensions(a) / two
}

/// Extent of the box along dimension `d`.
pub fn width<T: Scalar, const D: usize>(a: &Aabb<T, D>, d: usize) -> T {
    a[(d, 1)] - a[(d, 0)]
}

/// Product of the extents: area in 2D, volume in 3D.
pub fn volume<T: Scalar, const D: usize>(a: &Aabb<T, D>) -> T {
    let size = dimensions(a);
    let mut vol = T::one();
    for d in 0..D {
        vol *= size[d];
    }
    vol
}

/// Moves the box by `delta`.
pub fn translate<T: Scalar, const D: usize>(a: &Aabb<T, D>, delta: &Vector<T, D>) -> Aabb<T, D> {
    Matrix::from_fn(|d, j| a[(d, j)] + delta[d])
}

/// Moves the box so its center lands on `p`.
pub fn place<T: Scalar, const D: usize>(a: &Aabb<T, D>, p: &Vector<T, D>) -> Aabb<T, D> {
    translate(a, &(*p - center(a)))
}

/// Enumerates the 2^D corner points.
///
/// Corner `i` takes the high bound in dimension `d` exactly when bit `d` of
/// `i` is set, so index 0 is the low corner and index `2^D - 1` the high
/// corner.
pub fn corners<T: Scalar, const D: usize>(a: &Aabb<T, D>) -> Vec<Vector<T, D>> {
    (0..1_usize << D)
        .map(|i| Matrix::from_fn(|d, _| if i & (1 << d) == 0 { a[(d, 0)] } else { a[(d, 1)] }))
        .collect()
}

/// Smallest box containing both inputs: per-dimension min of lows, max of
/// highs. Always normalized when the inputs are.
pub fn combine<T: Scalar, const D: usize>(a: &Aabb<T, D>, b: &Aabb<T, D>) -> Aabb<T, D> {
    Matrix::from_fn(|d, j| {
        if j == 0 {
            min_s(a[(d, 0)], b[(d, 0)])
        } else {
            max_s(a[(d, 1)], b[(d, 1)])
        }
    })
}

/// Intersection: per-dimension max of lows, min of highs.
///
/// Disjoint inputs produce the degenerate all-zero box rather than an
/// error; callers that need a meaningful empty signal check [`overlaps`]
/// first.
pub fn intersect<T: Scalar, const D: usize>(a: &Aabb<T, D>, b: &Aabb<T, D>) -> Aabb<T, D> {
    if !overlaps(a, b) {
        return Aabb::uniform(T::zero());
    }
    Matrix::from_fn(|d, j| {
        if j == 0 {
            max_s(a[(d, 0)], b[(d, 0)])
        } else {
            min_s(a[(d, 1)], b[(d, 1)])
        }
    })
}

/// Axis-aligned bound of the box's 2^D corners under a homogeneous affine
/// transform.
///
/// `H` must equal `D + 1`; the corner points are lifted to homogeneous
/// coordinates (`w = 1`), transformed, and re-bounded. Correct for any
/// rotation/scale/translation, at the cost of visiting every corner.
///
/// # Examples
/// ```
/// use lattice_core::{aabb::{make_aabb, transform_aabb}, Matrix, Vector};
/// let b = make_aabb(&Vector::from_array([0.0, 0.0]), &Vector::from_array([1.0, 2.0]));
/// let same = transform_aabb(&b, &Matrix::<f64, 3, 3>::identity());
/// assert_eq!(same, b);
/// ```
pub fn transform_aabb<T: Scalar, const D: usize, const H: usize>(
    a: &Aabb<T, D>,
    m: &Matrix<T, H, H>,
) -> Aabb<T, D> {
    crate::require!(
        H == D + 1,
        "transform matrix is homogeneous for the box dimension",
        "{H}x{H} matrix cannot transform a {D}-dimensional box"
    );
    let mut out: Option<Aabb<T, D>> = None;
    for corner in corners(a) {
        let hom: Vector<T, H> =
            Matrix::from_fn(|i, _| if i < D { corner[i] } else { T::one() });
        let t = *m * hom;
        let p: Vector<T, D> = Matrix::from_fn(|i, _| t[i]);
        let point_box = make_aabb(&p, &p);
        out = Some(match out {
            Some(acc) => combine(&acc, &point_box),
            None => point_box,
        });
    }
    out.unwrap_or_else(|| Aabb::uniform(T::zero()))
}

/// Splits the box into 2^D sub-boxes spanned by `p` and each corner.
///
/// Returns an empty list when `p` lies outside the box.
pub fn split<T: Scalar, const D: usize>(a: &Aabb<T, D>, p: &Vector<T, D>) -> Vec<Aabb<T, D>> {
    if !contains_point(a, p) {
        return Vec::new();
    }
    corners(a).iter().map(|c| make_aabb(c, p)).collect()
}

/// Covers `a \ b` with up to `2·D` disjoint boxes.
///
/// Sweeps one axis at a time: everything below and above `b`'s clipped
/// extent becomes a slab, and the remaining region shrinks toward the
/// intersection, which is discarded. Disjoint inputs return `a` unchanged;
/// `b` covering `a` returns the empty list.
pub fn difference<T: Scalar, const D: usize>(a: &Aabb<T, D>, b: &Aabb<T, D>) -> Vec<Aabb<T, D>> {
    if contains(b, a) {
        return Vec::new();
    }
    if !overlaps(a, b) {
        return vec![*a];
    }
    let clip = intersect(a, b);
    let mut rest = *a;
    let mut out = Vec::new();
    for d in 0..D {
        if rest[(d, 0)] < clip[(d, 0)] {
            let mut slab = rest;
            slab[(d, 1)] = clip[(d, 0)];
            out.push(slab);
            rest[(d, 0)] = clip[(d, 0)];
        }
        if clip[(d, 1)] < rest[(d, 1)] {
            let mut slab = rest;
            slab[(d, 0)] = clip[(d, 1)];
            out.push(slab);
            rest[(d, 1)] = clip[(d, 1)];
        }
    }
    out
}

/// Greedily merges pairwise-overlapping boxes in place until none overlap.
///
/// The merge order is the scan order, so the result depends on input order
/// and is only guaranteed to be overlap-free, not a minimal covering set.
pub fn combine_overlapping<T: Scalar, const D: usize>(boxes: &mut Vec<Aabb<T, D>>) {
    let mut merged = true;
    while merged {
        merged = false;
        'scan: for i in 0..boxes.len() {
            for j in (i + 1)..boxes.len() {
                if overlaps(&boxes[i], &boxes[j]) {
                    let unioned = combine(&boxes[i], &boxes[j]);
                    boxes[i] = unioned;
                    boxes.swap_remove(j);
                    merged = true;
                    break 'scan;
                }
            }
        }
    }
}
