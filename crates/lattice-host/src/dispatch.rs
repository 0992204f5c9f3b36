// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use lattice_core::affine;

use crate::value::{HostError, HostMatrix};

/// Named affine-constructor entry points exposed to embedding hosts.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TransformKind {
    /// Translation: 2 arguments for 2D, 3 for 3D.
    Translation,
    /// Rotation: 1 argument (radians) for 2D, 4 (radians + axis) for 3D.
    Rotation,
    /// Scale: 2 arguments for 2D, 3 for 3D.
    Scaling,
    /// Orthographic projection: 6 arguments (left, right, bottom, top,
    /// near, far).
    Ortho,
}

impl TransformKind {
    const fn name(self) -> &'static str {
        match self {
            Self::Translation => "translation",
            Self::Rotation => "rotation",
            Self::Scaling => "scaling",
            Self::Ortho => "ortho",
        }
    }

    const fn arities(self) -> &'static str {
        match self {
            Self::Translation | Self::Scaling => "2 or 3",
            Self::Rotation => "1 or 4",
            Self::Ortho => "6",
        }
    }
}

/// Builds an affine transform from a bare numeric argument list.
///
/// The argument count selects the dimensionality: 2 numbers build a 2D
/// translation, 3 a 3D one; 1 number builds a 2D rotation, 4 a 3D
/// axis-angle rotation; and so on per [`TransformKind`]. A count with no
/// dispatch is reported as [`HostError::ArityMismatch`] — never silently
/// defaulted — so the interpreter can raise it as a script error.
///
/// # Examples
/// ```
/// use lattice_host::{build_transform, HostError, TransformKind};
/// let t = build_transform(TransformKind::Translation, &[3.0, 2.0, 7.0])?;
/// assert_eq!(t.size(), 16);
/// assert_eq!(t.get_rc(0, 3)?, 3.0);
///
/// let err = build_transform(TransformKind::Rotation, &[1.0, 2.0]).unwrap_err();
/// assert!(matches!(err, HostError::ArityMismatch { got: 2, .. }));
/// # Ok::<(), HostError>(())
/// ```
pub fn build_transform(kind: TransformKind, args: &[f64]) -> Result<HostMatrix, HostError> {
    match (kind, args) {
        (TransformKind::Translation, &[x, y]) => Ok(affine::translation_2d(x, y).into()),
        (TransformKind::Translation, &[x, y, z]) => Ok(affine::translation(x, y, z).into()),
        (TransformKind::Rotation, &[rad]) => Ok(affine::rotation_2d(rad).into()),
        (TransformKind::Rotation, &[rad, x, y, z]) => Ok(affine::rotation(rad, x, y, z).into()),
        (TransformKind::Scaling, &[x, y]) => Ok(affine::scaling_2d(x, y).into()),
        (TransformKind::Scaling, &[x, y, z]) => Ok(affine::scaling(x, y, z).into()),
        (TransformKind::Ortho, &[l, r, b, t, n, f]) => Ok(affine::ortho(l, r, b, t, n, f).into()),
        _ => Err(HostError::ArityMismatch {
            op: kind.name(),
            expected: kind.arities(),
            got: args.len(),
        }),
    }
}
