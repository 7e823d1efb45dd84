use serde::Serialize;

/// A validated TSP instance. Build it with [`ProblemInstance::new`].
#[derive(Debug, Clone)]
pub struct ProblemInstance {
    pub(crate) distance_matrix: Vec<Vec<f64>>,
}

impl ProblemInstance {
    pub fn distance_matrix(&self) -> &[Vec<f64>] {
        &self.distance_matrix
    }

    pub fn n_cities(&self) -> usize {
        self.distance_matrix.len()
    }
}

/// An evaluated closed tour. The last city connects back to the first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tour {
    pub cities: Vec<usize>,
    pub length: f64,
}

impl Tour {
    pub fn is_better_than(&self, other: &Self) -> bool {
        self.length < other.length
    }
}

/// Result of a full optimization run.
#[derive(Debug, Clone, Serialize)]
pub struct AcoSolution {
    /// Best tour found, as city indices
    pub tour: Vec<usize>,
    /// Total length of `tour` including the closing edge
    pub length: f64,
    /// Number of tours constructed and evaluated
    pub evaluations: usize,
    /// Iteration (1-based) in which `tour` was first found
    pub best_iteration: usize,
    /// Best-so-far length after each iteration
    pub history: Vec<f64>,
}
