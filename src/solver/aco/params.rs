use serde::{Deserialize, Serialize};

use crate::config::constant::{ALPHA, BETA, DECAY, N_ANTS, N_BEST, N_ITERATIONS};
use crate::error::{AcoError, AcoResult};

/// Colony configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcoParams {
    /// Tours constructed per iteration
    pub n_ants: usize,
    /// Number of best ants. Accepted and validated, but every ant deposits
    /// pheromone regardless of this value.
    pub n_best: usize,
    /// Fixed number of iterations; there is no early stop
    pub n_iterations: usize,
    /// Evaporation rate in [0, 1]
    pub decay: f64,
    /// Pheromone influence exponent
    pub alpha: f64,
    /// Heuristic influence exponent
    pub beta: f64,
    /// Seed for the colony's random generator, `None` seeds from the OS
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for AcoParams {
    fn default() -> Self {
        Self {
            n_ants: N_ANTS,
            n_best: N_BEST,
            n_iterations: N_ITERATIONS,
            decay: DECAY,
            alpha: ALPHA,
            beta: BETA,
            seed: None,
        }
    }
}

impl AcoParams {
    /// Parameters with `alpha = beta = 1`.
    pub fn new(n_ants: usize, n_best: usize, n_iterations: usize, decay: f64) -> Self {
        Self {
            n_ants,
            n_best,
            n_iterations,
            decay,
            alpha: 1.0,
            beta: 1.0,
            seed: None,
        }
    }

    #[must_use]
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    #[must_use]
    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Reject configurations that would make the run meaningless or push
    /// NaN/infinite values into the probabilities.
    pub fn validate(&self) -> AcoResult<()> {
        if self.n_ants == 0 {
            return Err(invalid("n_ants", "must be positive"));
        }
        if self.n_best == 0 {
            return Err(invalid("n_best", "must be positive"));
        }
        if self.n_iterations == 0 {
            return Err(invalid("n_iterations", "must be positive"));
        }
        if !(0.0..=1.0).contains(&self.decay) {
            return Err(invalid("decay", format!("{} is outside [0, 1]", self.decay)));
        }
        if !self.alpha.is_finite() {
            return Err(invalid("alpha", "must be finite"));
        }
        if !self.beta.is_finite() {
            return Err(invalid("beta", "must be finite"));
        }
        Ok(())
    }
}

fn invalid(name: &'static str, reason: impl Into<String>) -> AcoError {
    AcoError::InvalidParameter {
        name,
        reason: reason.into(),
    }
}
