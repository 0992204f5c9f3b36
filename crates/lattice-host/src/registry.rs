// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use rustc_hash::FxHashMap;

use crate::value::HostError;

/// Shape metadata a host records when it registers a matrix type under a
/// script-visible name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeInfo {
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub cols: usize,
}

impl ShapeInfo {
    /// Total element count, used to validate marshalled argument lists.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.rows * self.cols
    }
}

/// Name table of registered matrix shapes.
///
/// The registry is an explicitly-owned value with a plain lifecycle:
/// [`TypeRegistry::new`] at host startup, [`TypeRegistry::register`] per
/// exposed type, [`TypeRegistry::clear`] (or drop) at teardown. It is
/// deliberately not process-global — an embedding host owns exactly one
/// and threads it through its binding glue, which keeps two interpreters
/// in one process from seeing each other's names.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    entries: FxHashMap<String, ShapeInfo>,
}

impl TypeRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `name` with the given shape.
    ///
    /// Registering a name twice is an error; a host that wants to rebind a
    /// name removes it first via [`TypeRegistry::clear`] or sets up a fresh
    /// registry.
    pub fn register(&mut self, name: &str, shape: ShapeInfo) -> Result<(), HostError> {
        if self.entries.contains_key(name) {
            return Err(HostError::DuplicateType(name.to_owned()));
        }
        self.entries.insert(name.to_owned(), shape);
        Ok(())
    }

    /// Looks a name up, `None` when unregistered.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&ShapeInfo> {
        self.entries.get(name)
    }

    /// Looks a name up, reporting an unregistered name as
    /// [`HostError::UnknownType`].
    pub fn expect_shape(&self, name: &str) -> Result<&ShapeInfo, HostError> {
        self.lookup(name)
            .ok_or_else(|| HostError::UnknownType(name.to_owned()))
    }

    /// Number of registered names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Teardown: removes every registration.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
