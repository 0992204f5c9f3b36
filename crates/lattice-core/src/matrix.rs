// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::ops::{Index, IndexMut};

use num_traits::AsPrimitive;

use crate::require;
use crate::scalar::Scalar;

/// Row-major fixed-size matrix with value semantics.
///
/// - Dimensions are type-level: `M` rows by `N` columns, never resized.
/// - Storage is a stack-resident `[[T; N]; M]`; copies are deep and
///   independent, no allocation anywhere.
/// - Element access is by `(row, col)` pair or by flat row-major linear
///   index (`i * N + j`).
///
/// # Examples
/// ```
/// use lattice_core::Matrix;
/// let a = Matrix::from_rows([[0, 1], [2, 3]]);
/// assert_eq!(a[(1, 0)], 2);
/// assert_eq!(a[2], 2);
/// assert_eq!(a.to_string(), "[0,1][2,3]");
/// ```
///
/// # Precision
/// Arithmetic inherits the element type's semantics; no rounding policy is
/// layered on top.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Matrix<T, const M: usize, const N: usize> {
    data: [[T; N]; M],
}

impl<T: Scalar, const M: usize, const N: usize> Matrix<T, M, N> {
    /// Number of rows.
    pub const ROWS: usize = M;
    /// Number of columns.
    pub const COLS: usize = N;
    /// Total element count.
    pub const SIZE: usize = M * N;

    /// Creates a matrix from row arrays.
    pub const fn from_rows(data: [[T; N]; M]) -> Self {
        Self { data }
    }

    /// Creates a matrix by evaluating `f(row, col)` for every element.
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = [[T::zero(); N]; M];
        for (i, row) in data.iter_mut().enumerate() {
            for (j, e) in row.iter_mut().enumerate() {
                *e = f(i, j);
            }
        }
        Self { data }
    }

    /// Creates a matrix from a row-major element sequence.
    ///
    /// The sequence must yield exactly `M * N` elements; any other count is
    /// a precondition violation.
    ///
    /// # Examples
    /// ```
    /// use lattice_core::Matrix;
    /// let a: Matrix<i32, 2, 2> = Matrix::from_elements([0, 1, 2, 3]);
    /// assert_eq!(a[(0, 1)], 1);
    /// ```
    pub fn from_elements(elements: impl IntoIterator<Item = T>) -> Self {
        let mut out = Self::uniform(T::zero());
        let mut count = 0;
        for e in elements {
            if count < Self::SIZE {
                out[count] = e;
            }
            count += 1;
        }
        require!(
            count == Self::SIZE,
            "element count matches matrix size",
            "got {count} elements for a {M}x{N} matrix ({} expected)",
            Self::SIZE
        );
        out
    }

    /// Creates a matrix with every element set to `s`.
    pub fn uniform(s: T) -> Self {
        Self { data: [[s; N]; M] }
    }

    /// The zero matrix.
    pub fn zero() -> Self {
        Self::uniform(T::zero())
    }

    /// Number of rows.
    #[must_use]
    pub const fn height(&self) -> usize {
        M
    }

    /// Number of columns.
    #[must_use]
    pub const fn width(&self) -> usize {
        N
    }

    /// Total element count.
    #[must_use]
    pub const fn size(&self) -> usize {
        M * N
    }

    /// Returns `true` when the matrix is a row or column vector.
    #[must_use]
    pub const fn is_vector(&self) -> bool {
        M == 1 || N == 1
    }

    /// Returns the rows as arrays.
    pub fn to_rows(self) -> [[T; N]; M] {
        self.data
    }

    /// Iterates the elements in row-major order.
    pub fn iter(&self) -> core::iter::Flatten<core::slice::Iter<'_, [T; N]>> {
        self.data.iter().flatten()
    }

    /// Element-wise cast to another scalar type.
    ///
    /// Conversion follows `as`-cast semantics of the target type; no
    /// rounding policy beyond that.
    ///
    /// # Examples
    /// ```
    /// use lattice_core::Matrix;
    /// let a = Matrix::from_rows([[1.9_f32, -0.5]]);
    /// assert_eq!(a.cast::<i32>().to_rows(), [[1, 0]]);
    /// ```
    pub fn cast<U: Copy + 'static>(&self) -> Matrix<U, M, N>
    where
        T: AsPrimitive<U>,
    {
        Matrix {
            data: self.data.map(|row| row.map(|e| e.as_())),
        }
    }
}

impl<T: Scalar, const N: usize> Matrix<T, N, N> {
    /// The identity matrix: ones on the main diagonal, zeros elsewhere.
    ///
    /// Only square matrix types have this constructor; asking a non-square
    /// type for it does not compile.
    ///
    /// # Examples
    /// ```
    /// use lattice_core::Matrix;
    /// let i = Matrix::<i32, 3, 3>::identity();
    /// assert_eq!(i.to_rows(), [[1, 0, 0], [0, 1, 0], [0, 0, 1]]);
    /// ```
    pub fn identity() -> Self {
        Self::from_fn(|i, j| if i == j { T::one() } else { T::zero() })
    }
}

impl<T: Scalar, const D: usize> Matrix<T, D, 1> {
    /// Creates a column vector from its components.
    ///
    /// # Examples
    /// ```
    /// use lattice_core::Vector;
    /// let v = Vector::from_array([4.0, 5.0]);
    /// assert_eq!(v[1], 5.0);
    /// ```
    pub fn from_array(components: [T; D]) -> Self {
        Self {
            data: components.map(|c| [c]),
        }
    }

    /// Returns the vector's components as an array.
    pub fn to_array(self) -> [T; D] {
        self.data.map(|row| row[0])
    }
}

impl<T: Scalar, const M: usize, const N: usize> Index<(usize, usize)> for Matrix<T, M, N> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &T {
        require!(
            i < M && j < N,
            "matrix index in range",
            "({i},{j}) out of range for a {M}x{N} matrix"
        );
        &self.data[i][j]
    }
}

impl<T: Scalar, const M: usize, const N: usize> IndexMut<(usize, usize)> for Matrix<T, M, N> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        require!(
            i < M && j < N,
            "matrix index in range",
            "({i},{j}) out of range for a {M}x{N} matrix"
        );
        &mut self.data[i][j]
    }
}

impl<T: Scalar, const M: usize, const N: usize> Index<usize> for Matrix<T, M, N> {
    type Output = T;

    fn index(&self, i: usize) -> &T {
        require!(
            i < M * N,
            "matrix linear index in range",
            "{i} out of range for a {M}x{N} matrix"
        );
        &self.data[i / N][i % N]
    }
}

impl<T: Scalar, const M: usize, const N: usize> IndexMut<usize> for Matrix<T, M, N> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        require!(
            i < M * N,
            "matrix linear index in range",
            "{i} out of range for a {M}x{N} matrix"
        );
        &mut self.data[i / N][i % N]
    }
}

impl<'a, T: Scalar, const M: usize, const N: usize> IntoIterator for &'a Matrix<T, M, N> {
    type Item = &'a T;
    type IntoIter = core::iter::Flatten<core::slice::Iter<'a, [T; N]>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Scalar, const M: usize, const N: usize> Default for Matrix<T, M, N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Scalar, const M: usize, const N: usize> From<[[T; N]; M]> for Matrix<T, M, N> {
    fn from(data: [[T; N]; M]) -> Self {
        Self { data }
    }
}

/// Prints one bracketed, comma-separated group per row, no trailing
/// delimiter: `[e0,e1,...][e0,e1,...]`.
///
/// This exact shape is the matrix's only external textual representation;
/// embedding hosts echo it verbatim.
impl<T: Scalar, const M: usize, const N: usize> fmt::Display for Matrix<T, M, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.data {
            f.write_str("[")?;
            let mut first = true;
            for e in row {
                if !first {
                    f.write_str(",")?;
                }
                write!(f, "{e}")?;
                first = false;
            }
            f.write_str("]")?;
        }
        Ok(())
    }
}
