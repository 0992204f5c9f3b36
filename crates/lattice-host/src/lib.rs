// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Host seam for embedding lattice matrices in a scripting runtime.
//!
//! An embedded interpreter marshals matrices as flat numeric argument
//! lists. This crate provides the three things that glue needs without
//! committing to any particular interpreter:
//!
//! - [`HostMatrix`]: a shape-erased `f64` matrix value with size queries,
//!   range-checked element get/set by linear index or `(row, col)` pair,
//!   and the core's exact text form via `Display`.
//! - [`build_transform`]: the named affine-constructor entry points, where
//!   the argument count picks 2D vs 3D dispatch and a wrong count is a
//!   distinguishable [`HostError`], never a silent default.
//! - [`TypeRegistry`]: an explicitly-owned name table of registered matrix
//!   shapes with a clear init/teardown lifecycle — no ambient global state.
//!
//! Unlike the core, where contract violations are typed panics, everything
//! here returns `Result`: host-facing argument errors come from script
//! code and must be reportable through the interpreter's own error
//! mechanism.

mod dispatch;
mod registry;
mod value;

pub use dispatch::{build_transform, TransformKind};
pub use registry::{ShapeInfo, TypeRegistry};
pub use value::{HostError, HostMatrix};
