//! Error types for the ACO solver.

use thiserror::Error;

/// Result type alias for solver operations
pub type AcoResult<T> = std::result::Result<T, AcoError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AcoError {
    /// Distance matrix has no rows
    #[error("Distance matrix is empty")]
    EmptyMatrix,

    /// A closed tour needs at least two cities
    #[error("Need at least 2 cities, got {0}")]
    TooFewCities(usize),

    /// A row length differs from the number of rows
    #[error("Distance matrix is not square: row {row} has {len} entries, expected {expected}")]
    NonSquareMatrix {
        row: usize,
        len: usize,
        expected: usize,
    },

    /// Negative, NaN or infinite distance
    #[error("Invalid distance {value} from city {from} to city {to}")]
    InvalidDistance { from: usize, to: usize, value: f64 },

    /// Configuration value out of range
    #[error("Invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// A tour of total length zero cannot deposit `1 / length`
    #[error("Tour {tour:?} has zero total distance")]
    ZeroCostTour { tour: Vec<usize> },
}
