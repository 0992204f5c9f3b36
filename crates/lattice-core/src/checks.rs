// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Precondition enforcement for the matrix core.
//!
//! Violations are reported via [`std::panic::panic_any`] with a typed
//! [`PreconditionViolation`] payload, matchable via `downcast_ref` in tests.
//!
//! # Scope
//!
//! This covers **contract violations only**: bad indices, wrong element
//! counts, mismatched concatenation shapes. Numerical degeneracies (singular
//! inverse, zero-length rotation axis) never come through here — those return
//! well-defined garbage (infinities/NaNs) or an identity fallback so hot
//! paths stay branch-light; see the crate docs.
//!
//! # Cfg Gating
//!
//! Checks are active when `debug_assertions` is set (debug builds) or when
//! the `precondition_enforce_release` feature is enabled. The
//! `unchecked_math` feature disables all enforcement regardless; Rust's own
//! slice bounds panics remain as a safety backstop for indexing.
//!
//! # Panic Semantics
//!
//! Precondition violations panic rather than return `Err` because:
//!
//! - They are **programmer errors** (indices and shapes are known statically
//!   at every call site), not recoverable runtime conditions.
//! - The hot paths must not pay for `Result` plumbing in release builds.
//!
//! Callers that need to observe a violation (tests, embedding hosts) catch it
//! with `catch_unwind` and downcast the payload.

/// Violation payload for [`std::panic::panic_any`].
///
/// Matchable via `downcast_ref::<PreconditionViolation>()` in tests and
/// embedding hosts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreconditionViolation {
    /// Name of the violated contract, e.g. `"matrix index in range"`.
    pub what: &'static str,
    /// Human-readable description of the concrete violation.
    pub detail: String,
}

impl std::fmt::Display for PreconditionViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "precondition violated ({}): {}", self.what, self.detail)
    }
}

#[cfg(all(feature = "precondition_enforce_release", feature = "unchecked_math"))]
compile_error!(
    "`precondition_enforce_release` and `unchecked_math` are mutually exclusive"
);

/// Returns `true` when precondition checks are compiled in.
#[must_use]
pub const fn checks_enabled() -> bool {
    if cfg!(feature = "unchecked_math") {
        false
    } else {
        cfg!(any(debug_assertions, feature = "precondition_enforce_release"))
    }
}

#[doc(hidden)]
#[cold]
pub fn violation(what: &'static str, detail: String) -> ! {
    std::panic::panic_any(PreconditionViolation { what, detail });
}

/// Checks a precondition, panicking with a typed [`PreconditionViolation`]
/// payload when it fails.
///
/// Compiled out entirely when [`checks_enabled`] is `false`; the format
/// arguments are only evaluated on failure.
#[macro_export]
macro_rules! require {
    ($cond:expr, $what:expr, $($detail:tt)+) => {
        if $crate::checks::checks_enabled() && !$cond {
            $crate::checks::violation($what, format!($($detail)+));
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn violation_payload_is_downcastable() {
        let caught = std::panic::catch_unwind(|| {
            require!(1 > 2, "ordering", "1 is not greater than {}", 2);
        });
        if checks_enabled() {
            let payload = match caught {
                Err(p) => p,
                Ok(()) => panic!("expected a violation"),
            };
            let v = payload
                .downcast_ref::<PreconditionViolation>()
                .unwrap_or_else(|| panic!("wrong payload type"));
            assert_eq!(v.what, "ordering");
            assert!(v.detail.contains("not greater"));
        } else {
            assert!(caught.is_ok());
        }
    }
}
