use tracing::{debug, info};

use crate::domain::types::ProblemInstance;
use crate::error::{AcoError, AcoResult};

impl ProblemInstance {
    /// Validate a distance matrix and wrap it as a problem instance.
    ///
    /// The matrix must be square with at least two cities, and every entry must
    /// be finite and non-negative. Symmetry is expected but not checked.
    pub fn new(distance_matrix: Vec<Vec<f64>>) -> AcoResult<Self> {
        let n = distance_matrix.len();
        if n == 0 {
            return Err(AcoError::EmptyMatrix);
        }

        for (row, entries) in distance_matrix.iter().enumerate() {
            if entries.len() != n {
                return Err(AcoError::NonSquareMatrix {
                    row,
                    len: entries.len(),
                    expected: n,
                });
            }
            for (col, &value) in entries.iter().enumerate() {
                if !value.is_finite() || value < 0.0 {
                    return Err(AcoError::InvalidDistance {
                        from: row,
                        to: col,
                        value,
                    });
                }
            }
        }

        if n < 2 {
            return Err(AcoError::TooFewCities(n));
        }

        info!("Loaded problem instance with {} cities", n);
        print_dist_matrix(&distance_matrix);

        Ok(Self { distance_matrix })
    }
}

// Print distance matrix for debugging
pub fn print_dist_matrix(dist_m: &[Vec<f64>]) {
    debug!("Distance matrix:");
    for row in dist_m {
        debug!("{:?}", row);
    }
}
