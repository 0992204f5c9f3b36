// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;

use lattice_core::types::{DMat3, DMat4, DVec2, DVec3, DVec4};
use thiserror::Error;

/// Error surface for host-facing operations.
///
/// These map onto an interpreter's own error-raising mechanism; none of
/// them panic.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HostError {
    /// A constructor received an argument count it has no dispatch for.
    #[error("{op}: no {op} takes {got} arguments (expected {expected})")]
    ArityMismatch {
        /// The constructor that was invoked.
        op: &'static str,
        /// Human-readable list of accepted argument counts.
        expected: &'static str,
        /// The count actually supplied.
        got: usize,
    },
    /// Element access outside the value's bounds.
    #[error("index {index} out of range for a value of {len} elements")]
    IndexOutOfRange {
        /// The offending linear index.
        index: usize,
        /// The value's element count.
        len: usize,
    },
    /// A type name not present in the registry.
    #[error("unknown registered type `{0}`")]
    UnknownType(String),
    /// A type name registered twice.
    #[error("type `{0}` is already registered")]
    DuplicateType(String),
}

/// Shape-erased `f64` matrix value.
///
/// The shapes the host seam actually traffics in: the 2D/3D affine
/// matrices the constructors produce plus the vector sizes scripts pass
/// around. Element access is range-checked and `Result`-based; the text
/// form is the core's row-major bracketed format, reproduced verbatim.
#[derive(Debug, Clone, PartialEq)]
pub enum HostMatrix {
    /// 2-component vector.
    Vec2(DVec2),
    /// 3-component vector.
    Vec3(DVec3),
    /// 4-component vector.
    Vec4(DVec4),
    /// 3×3 matrix (2D affine transform).
    Mat3(DMat3),
    /// 4×4 matrix (3D affine transform).
    Mat4(DMat4),
}

impl HostMatrix {
    /// Number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        match self {
            Self::Vec2(v) => v.height(),
            Self::Vec3(v) => v.height(),
            Self::Vec4(v) => v.height(),
            Self::Mat3(m) => m.height(),
            Self::Mat4(m) => m.height(),
        }
    }

    /// Number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        match self {
            Self::Vec2(v) => v.width(),
            Self::Vec3(v) => v.width(),
            Self::Vec4(v) => v.width(),
            Self::Mat3(m) => m.width(),
            Self::Mat4(m) => m.width(),
        }
    }

    /// Total element count; hosts validate marshalled argument counts
    /// against this.
    #[must_use]
    pub fn size(&self) -> usize {
        self.height() * self.width()
    }

    /// Reads the element at flat row-major index `i`.
    pub fn get(&self, i: usize) -> Result<f64, HostError> {
        self.check(i)?;
        Ok(match self {
            Self::Vec2(v) => v[i],
            Self::Vec3(v) => v[i],
            Self::Vec4(v) => v[i],
            Self::Mat3(m) => m[i],
            Self::Mat4(m) => m[i],
        })
    }

    /// Writes the element at flat row-major index `i`.
    pub fn set(&mut self, i: usize, value: f64) -> Result<(), HostError> {
        self.check(i)?;
        match self {
            Self::Vec2(v) => v[i] = value,
            Self::Vec3(v) => v[i] = value,
            Self::Vec4(v) => v[i] = value,
            Self::Mat3(m) => m[i] = value,
            Self::Mat4(m) => m[i] = value,
        }
        Ok(())
    }

    /// Reads the element at `(row, col)`.
    pub fn get_rc(&self, row: usize, col: usize) -> Result<f64, HostError> {
        if row >= self.height() || col >= self.width() {
            return Err(HostError::IndexOutOfRange {
                index: row * self.width() + col,
                len: self.size(),
            });
        }
        self.get(row * self.width() + col)
    }

    /// Writes the element at `(row, col)`.
    pub fn set_rc(&mut self, row: usize, col: usize, value: f64) -> Result<(), HostError> {
        if row >= self.height() || col >= self.width() {
            return Err(HostError::IndexOutOfRange {
                index: row * self.width() + col,
                len: self.size(),
            });
        }
        self.set(row * self.width() + col, value)
    }

    fn check(&self, i: usize) -> Result<(), HostError> {
        if i < self.size() {
            Ok(())
        } else {
            Err(HostError::IndexOutOfRange {
                index: i,
                len: self.size(),
            })
        }
    }
}

impl fmt::Display for HostMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vec2(v) => v.fmt(f),
            Self::Vec3(v) => v.fmt(f),
            Self::Vec4(v) => v.fmt(f),
            Self::Mat3(m) => m.fmt(f),
            Self::Mat4(m) => m.fmt(f),
        }
    }
}

impl From<DVec2> for HostMatrix {
    fn from(v: DVec2) -> Self {
        Self::Vec2(v)
    }
}

impl From<DVec3> for HostMatrix {
    fn from(v: DVec3) -> Self {
        Self::Vec3(v)
    }
}

impl From<DVec4> for HostMatrix {
    fn from(v: DVec4) -> Self {
        Self::Vec4(v)
    }
}

impl From<DMat3> for HostMatrix {
    fn from(m: DMat3) -> Self {
        Self::Mat3(m)
    }
}

impl From<DMat4> for HostMatrix {
    fn from(m: DMat4) -> Self {
        Self::Mat4(m)
    }
}
