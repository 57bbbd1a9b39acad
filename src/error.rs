//! Error type for the fallible sorting entry points.

use std::{error::Error, fmt};

/// Errors raised while sorting.
///
/// The infallible entry points ([`sort_by_value`](crate::sort_by_value),
/// [`sort_by_property`](crate::sort_by_property)) require a total order and never
/// produce this. The `try_*` variants only require a partial order and fail on the
/// first pair of sort keys that cannot be compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortError {
    /// Two sort keys had no defined ordering (`partial_cmp` returned `None`).
    TypeMismatch,
}

impl Error for SortError {}

impl fmt::Display for SortError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::TypeMismatch => write!(f, "sort keys cannot be compared with each other"),
        }
    }
}

pub type Result<T> = std::result::Result<T, SortError>;
