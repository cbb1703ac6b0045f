//! Error types for the sorting baselines.

use thiserror::Error;

/// Errors raised on contract violations at an algorithm boundary.
///
/// Sorting itself is a pure, total function of its input; the only failure
/// mode is a malformed call. Non-comparable element types are rejected at
/// compile time by the `Ord` bound and never reach a runtime check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    /// A sub-range sort was asked to operate outside the slice, or with
    /// inverted bounds beyond the single empty-range case
    /// (`left == right + 1`).
    #[error("invalid range: left {left}, right {right} on slice of length {len}")]
    InvalidRange {
        left: usize,
        right: usize,
        len: usize,
    },
}
