// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for power set enumeration.

use thiserror::Error;

/// Errors that can occur when enumerating a power set.
///
/// Enumeration itself never fails: every variant here is raised before any
/// subset is produced, so a caller never sees a truncated result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PowerSetError {
    /// 2^len subsets do not fit the addressable result size.
    #[error("cannot enumerate the power set of {len} elements (at most {max} are addressable)")]
    TooManyElements { len: usize, max: usize },

    /// The result buffer could not be reserved.
    #[error("could not reserve space for {subsets} subsets")]
    Allocation { subsets: usize },

    /// A strategy name that is not in the catalogue.
    #[error("unknown strategy `{0}`")]
    UnknownStrategy(String),

    /// A benchmark run produced the wrong number of subsets.
    #[error("{strategy} produced {actual} subsets for {len} elements, expected {expected}")]
    CountMismatch {
        strategy: String,
        len: usize,
        expected: usize,
        actual: usize,
    },
}

pub type Result<T> = std::result::Result<T, PowerSetError>;
