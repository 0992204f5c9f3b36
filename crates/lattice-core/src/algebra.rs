// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Free-function algebra over [`Matrix`].
//!
//! Everything here takes its inputs by reference and returns a fresh value;
//! the only intentional in-place mutators are [`assign_row`] and
//! [`assign_column`]. Operators (`+`, `-`, `*`, `/`) live here too so the
//! container module stays a plain data definition.
//!
//! The determinant family uses Laplace cofactor expansion with closed forms
//! for the 1×1 and 2×2 bases. That is exponential in the dimension and meant
//! for the ≤4×4 matrices graphics code actually uses; large-N inversion is a
//! non-goal. [`inverse`] reports singularity silently (a matrix of
//! infinities/NaNs); callers that need a defined failure signal check
//! [`is_singular`] first.

use core::ops::{Add, Div, Mul, Neg, Sub};

use crate::matrix::Matrix;
use crate::require;
use crate::scalar::{Real, Scalar};
use crate::types::Vector;

// ── element-wise operators ──────────────────────────────────────────

impl<T: Scalar, const M: usize, const N: usize> Add for Matrix<T, M, N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_fn(|i, j| self[(i, j)] + rhs[(i, j)])
    }
}

impl<T: Scalar, const M: usize, const N: usize> Sub for Matrix<T, M, N> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_fn(|i, j| self[(i, j)] - rhs[(i, j)])
    }
}

impl<T: Scalar, const M: usize, const N: usize> Neg for Matrix<T, M, N> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_fn(|i, j| -self[(i, j)])
    }
}

/// Scales every element (`A * s`).
impl<T: Scalar, const M: usize, const N: usize> Mul<T> for Matrix<T, M, N> {
    type Output = Self;

    fn mul(self, s: T) -> Self {
        Self::from_fn(|i, j| self[(i, j)] * s)
    }
}

/// Divides every element (`A / s`).
impl<T: Scalar, const M: usize, const N: usize> Div<T> for Matrix<T, M, N> {
    type Output = Self;

    fn div(self, s: T) -> Self {
        Self::from_fn(|i, j| self[(i, j)] / s)
    }
}

/// Matrix product: `(M×N)·(N×P) = (M×P)`.
///
/// Each result element is the dot product of a row of the left operand and
/// a column of the right one; plain O(M·N·P) triple loop, no fast-multiply
/// variants.
///
/// # Examples
/// ```
/// use lattice_core::Matrix;
/// let a = Matrix::from_rows([[0, 1], [2, 3]]);
/// assert_eq!((a * a).to_rows(), [[2, 3], [6, 11]]);
/// ```
impl<T: Scalar, const M: usize, const N: usize, const P: usize> Mul<Matrix<T, N, P>>
    for Matrix<T, M, N>
{
    type Output = Matrix<T, M, P>;

    fn mul(self, rhs: Matrix<T, N, P>) -> Matrix<T, M, P> {
        Matrix::from_fn(|i, j| {
            let mut sum = T::zero();
            for k in 0..N {
                sum += self[(i, k)] * rhs[(k, j)];
            }
            sum
        })
    }
}

// ── shape operations ────────────────────────────────────────────────

/// Returns the transpose of `a`.
pub fn transpose<T: Scalar, const M: usize, const N: usize>(a: &Matrix<T, M, N>) -> Matrix<T, N, M> {
    Matrix::from_fn(|i, j| a[(j, i)])
}

/// Extracts row `i` as a `1×N` matrix.
pub fn row<T: Scalar, const M: usize, const N: usize>(a: &Matrix<T, M, N>, i: usize) -> Matrix<T, 1, N> {
    require!(i < M, "row index in range", "row {i} of a {M}x{N} matrix");
    Matrix::from_fn(|_, j| a[(i, j)])
}

/// Extracts column `j` as an `M×1` vector.
pub fn column<T: Scalar, const M: usize, const N: usize>(
    a: &Matrix<T, M, N>,
    j: usize,
) -> Matrix<T, M, 1> {
    require!(j < N, "column index in range", "column {j} of a {M}x{N} matrix");
    Matrix::from_fn(|i, _| a[(i, j)])
}

/// Overwrites row `i` with elements from `values`.
///
/// Writes the first `min(N, provided)` elements and leaves the remainder of
/// the row untouched. Returns the matrix for chaining; this and
/// [`assign_column`] are the only in-place mutators in the algebra.
pub fn assign_row<T: Scalar, const M: usize, const N: usize>(
    a: &mut Matrix<T, M, N>,
    i: usize,
    values: impl IntoIterator<Item = T>,
) -> &mut Matrix<T, M, N> {
    require!(i < M, "row index in range", "row {i} of a {M}x{N} matrix");
    for (j, v) in values.into_iter().take(N).enumerate() {
        a[(i, j)] = v;
    }
    a
}

/// Overwrites column `j` with elements from `values`.
///
/// Writes the first `min(M, provided)` elements and leaves the remainder of
/// the column untouched.
pub fn assign_column<T: Scalar, const M: usize, const N: usize>(
    a: &mut Matrix<T, M, N>,
    j: usize,
    values: impl IntoIterator<Item = T>,
) -> &mut Matrix<T, M, N> {
    require!(j < N, "column index in range", "column {j} of a {M}x{N} matrix");
    for (i, v) in values.into_iter().take(M).enumerate() {
        a[(i, j)] = v;
    }
    a
}

/// Extracts the `RM×RN` block starting at `(oi, oj)`.
///
/// The caller names the output shape and guarantees the block lies within
/// bounds; an overhanging block is a precondition violation.
///
/// # Examples
/// ```
/// use lattice_core::{algebra::submatrix, Matrix};
/// let a = Matrix::from_rows([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
/// let block = submatrix::<2, 2, _, 3, 3>(&a, 1, 1);
/// assert_eq!(block.to_rows(), [[5, 6], [8, 9]]);
/// ```
pub fn submatrix<const RM: usize, const RN: usize, T: Scalar, const M: usize, const N: usize>(
    a: &Matrix<T, M, N>,
    oi: usize,
    oj: usize,
) -> Matrix<T, RM, RN> {
    require!(
        oi + RM <= M && oj + RN <= N,
        "submatrix block in bounds",
        "{RM}x{RN} block at ({oi},{oj}) overhangs a {M}x{N} matrix"
    );
    Matrix::from_fn(|i, j| a[(i + oi, j + oj)])
}

/// Concatenates two equal-height matrices horizontally.
///
/// The output width `W` must equal `N + P`; it is usually inferred from the
/// destination type. Welding is how larger affine matrices are built up
/// (rotation block, then translation column, then homogeneous row).
///
/// # Examples
/// ```
/// use lattice_core::{algebra::weld, Matrix};
/// let a = Matrix::from_rows([[1, 2], [3, 4]]);
/// let b = Matrix::from_rows([[5], [6]]);
/// let w: Matrix<i32, 2, 3> = weld(&a, &b);
/// assert_eq!(w.to_rows(), [[1, 2, 5], [3, 4, 6]]);
/// ```
pub fn weld<const W: usize, T: Scalar, const M: usize, const N: usize, const P: usize>(
    a: &Matrix<T, M, N>,
    b: &Matrix<T, M, P>,
) -> Matrix<T, M, W> {
    require!(
        W == N + P,
        "weld output width matches input widths",
        "cannot weld {M}x{N} and {M}x{P} into a {M}x{W} matrix"
    );
    Matrix::from_fn(|i, j| if j < N { a[(i, j)] } else { b[(i, j - N)] })
}

/// Concatenates two equal-width matrices vertically.
///
/// The output height `H` must equal `M + P`.
pub fn weldv<const H: usize, T: Scalar, const M: usize, const N: usize, const P: usize>(
    a: &Matrix<T, M, N>,
    b: &Matrix<T, P, N>,
) -> Matrix<T, H, N> {
    require!(
        H == M + P,
        "weldv output height matches input heights",
        "cannot weld {M}x{N} and {P}x{N} into a {H}x{N} matrix"
    );
    Matrix::from_fn(|i, j| if i < M { a[(i, j)] } else { b[(i - M, j)] })
}

/// Returns `a` with row `r` and column `c` deleted.
///
/// The caller names the output shape; `RM` must equal `M - 1` and `RN`
/// must equal `N - 1`.
pub fn cross_out<const RM: usize, const RN: usize, T: Scalar, const M: usize, const N: usize>(
    a: &Matrix<T, M, N>,
    r: usize,
    c: usize,
) -> Matrix<T, RM, RN> {
    require!(
        RM + 1 == M && RN + 1 == N && r < M && c < N,
        "cross_out shape and indices consistent",
        "deleting ({r},{c}) from a {M}x{N} matrix into a {RM}x{RN} one"
    );
    Matrix::from_fn(|i, j| {
        let si = if i < r { i } else { i + 1 };
        let sj = if j < c { j } else { j + 1 };
        a[(si, sj)]
    })
}

// ── determinant family ──────────────────────────────────────────────

/// Determinant of a flat row-major `n×n` slice.
///
/// Peels one dimension per recursion level and stops at the 1×1/2×2 closed
/// forms, so the recursion is bounded by the runtime dimension rather than
/// by the type system.
fn det_flat<T: Scalar>(m: &[T], n: usize) -> T {
    match n {
        0 => T::one(),
        1 => m[0],
        2 => m[0] * m[3] - m[1] * m[2],
        _ => {
            let mut sum = T::zero();
            for j in 0..n {
                let term = m[j] * minor_flat(m, n, 0, j);
                // Cofactor signs alternate along the expansion row.
                if j % 2 == 1 {
                    sum -= term;
                } else {
                    sum += term;
                }
            }
            sum
        }
    }
}

/// Determinant of the minor of a flat `n×n` slice with row `r` and column
/// `c` crossed out.
fn minor_flat<T: Scalar>(m: &[T], n: usize, r: usize, c: usize) -> T {
    let k = n - 1;
    let mut sub = vec![T::zero(); k * k];
    let mut w = 0;
    for i in (0..n).filter(|&i| i != r) {
        for j in (0..n).filter(|&j| j != c) {
            sub[w] = m[i * n + j];
            w += 1;
        }
    }
    det_flat(&sub, k)
}

fn flatten<T: Scalar, const N: usize>(a: &Matrix<T, N, N>) -> Vec<T> {
    a.iter().copied().collect()
}

/// Determinant via cofactor (Laplace) expansion along row 0.
///
/// Exponential in `N`; intended for the small matrices used in graphics.
///
/// # Examples
/// ```
/// use lattice_core::{algebra::determinant, Matrix};
/// let a = Matrix::from_rows([[1, 2], [3, 4]]);
/// assert_eq!(determinant(&a), -2);
/// ```
pub fn determinant<T: Scalar, const N: usize>(a: &Matrix<T, N, N>) -> T {
    match N {
        0 => T::one(),
        1 => a[(0, 0)],
        2 => a[(0, 0)] * a[(1, 1)] - a[(0, 1)] * a[(1, 0)],
        _ => det_flat(&flatten(a), N),
    }
}

/// Matrix of minors: each element is the determinant of `a` with that
/// element's row and column crossed out.
pub fn minor<T: Scalar, const N: usize>(a: &Matrix<T, N, N>) -> Matrix<T, N, N> {
    let flat = flatten(a);
    Matrix::from_fn(|i, j| minor_flat(&flat, N, i, j))
}

/// Cofactor matrix: the minors with signs flipped on every other element.
pub fn cofactor<T: Scalar, const N: usize>(a: &Matrix<T, N, N>) -> Matrix<T, N, N> {
    let m = minor(a);
    Matrix::from_fn(|i, j| if (i + j) % 2 == 1 { -m[(i, j)] } else { m[(i, j)] })
}

/// Adjugate: the transposed cofactor matrix, with a closed-form 2×2 fast
/// path.
pub fn adjugate<T: Scalar, const N: usize>(a: &Matrix<T, N, N>) -> Matrix<T, N, N> {
    if N == 2 {
        return Matrix::from_fn(|i, j| match (i, j) {
            (0, 0) => a[(1, 1)],
            (0, 1) => -a[(0, 1)],
            (1, 0) => -a[(1, 0)],
            _ => a[(0, 0)],
        });
    }
    transpose(&cofactor(a))
}

/// Inverse via `adjugate(A) / determinant(A)`.
///
/// A singular input is not an error: the division by a zero determinant
/// produces a matrix of infinities/NaNs. Callers that need a defined
/// failure signal check [`is_singular`] first; that trade keeps the hot
/// path branch-free.
///
/// # Examples
/// ```
/// use lattice_core::{algebra::inverse, Matrix};
/// let a = Matrix::from_rows([[2.0, 0.0], [0.0, 4.0]]);
/// assert_eq!(inverse(&a).to_rows(), [[0.5, 0.0], [0.0, 0.25]]);
/// ```
pub fn inverse<T: Real, const N: usize>(a: &Matrix<T, N, N>) -> Matrix<T, N, N> {
    adjugate(a) / determinant(a)
}

/// Returns `true` when the determinant is exactly zero.
pub fn is_singular<T: Scalar, const N: usize>(a: &Matrix<T, N, N>) -> bool {
    determinant(a) == T::zero()
}

// ── vector operations ───────────────────────────────────────────────

/// Dot product of two equal-length column vectors.
///
/// Shape is enforced by the types: both operands are `Vector<T, D>` for the
/// same `D`, so a mismatch does not compile. Row vectors go through
/// [`transpose`] first.
pub fn dot<T: Scalar, const D: usize>(a: &Vector<T, D>, b: &Vector<T, D>) -> T {
    a.iter()
        .zip(b.iter())
        .fold(T::zero(), |sum, (&x, &y)| sum + x * y)
}

/// Squared vector length; avoids the square root of [`length`].
pub fn length_sq<T: Scalar, const D: usize>(a: &Vector<T, D>) -> T {
    dot(a, a)
}

/// Vector length: `sqrt(dot(A, A))`.
pub fn length<T: Real, const D: usize>(a: &Vector<T, D>) -> T {
    length_sq(a).sqrt()
}

/// Normalizes `a` to unit length.
///
/// A zero-length input divides by zero and yields NaNs; pre-check
/// [`length_sq`] when that matters.
pub fn normalize<T: Real, const D: usize>(a: &Vector<T, D>) -> Vector<T, D> {
    *a / length(a)
}

/// Normalizes `a`, also returning the computed length so callers that need
/// both avoid a second pass.
pub fn normalize_with_len<T: Real, const D: usize>(a: &Vector<T, D>) -> (Vector<T, D>, T) {
    let len = length(a);
    (*a / len, len)
}

/// 2D cross product; a scalar, the signed area of the parallelogram.
pub fn cross2<T: Scalar>(a: &Vector<T, 2>, b: &Vector<T, 2>) -> T {
    a[0] * b[1] - a[1] * b[0]
}

/// Cyclic generalized cross product.
///
/// For `D == 3` this is the usual geometric cross product; other dimensions
/// apply the same cyclic index formula and are rarely meaningful.
///
/// # Examples
/// ```
/// use lattice_core::{algebra::cross, Vector};
/// let x = Vector::from_array([1.0, 0.0, 0.0]);
/// let y = Vector::from_array([0.0, 1.0, 0.0]);
/// assert_eq!(cross(&x, &y).to_array(), [0.0, 0.0, 1.0]);
/// ```
pub fn cross<T: Scalar, const D: usize>(a: &Vector<T, D>, b: &Vector<T, D>) -> Vector<T, D> {
    Matrix::from_fn(|i, _| {
        let p = (i + 1) % D;
        let q = (i + 2) % D;
        a[p] * b[q] - a[q] * b[p]
    })
}

/// Maps `f` over every element, returning the resulting matrix.
pub fn mapf<T: Scalar, const M: usize, const N: usize>(
    a: &Matrix<T, M, N>,
    mut f: impl FnMut(T) -> T,
) -> Matrix<T, M, N> {
    Matrix::from_fn(|i, j| f(a[(i, j)]))
}
