use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, span, trace, Level};

use crate::domain::solution::keep_better;
use crate::domain::types::{AcoSolution, ProblemInstance, Tour};
use crate::error::AcoResult;
use crate::evaluation::fitness::find_distance;
use crate::solver::aco::construct::construct_tour;
use crate::solver::aco::params::AcoParams;
use crate::solver::aco::trail::TrailState;

/// Ant colony over one problem instance.
///
/// Each iteration builds `n_ants` tours against the current trails, tracks
/// the global best, then updates the trails once from all of the tours.
pub struct AntColony<'a> {
    params: AcoParams,
    trail: TrailState<'a>,
    rng: ChaCha8Rng,
    best: Option<Tour>,
    best_iteration: usize,
    iteration: usize,
    evaluations: usize,
    history: Vec<f64>,
}

impl<'a> AntColony<'a> {
    pub fn new(instance: &'a ProblemInstance, params: AcoParams) -> AcoResult<Self> {
        params.validate()?;

        let rng = match params.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        if params.n_best > params.n_ants {
            debug!(
                "n_best ({}) exceeds n_ants ({}); every ant deposits pheromone either way",
                params.n_best, params.n_ants
            );
        }

        Ok(Self {
            trail: TrailState::from_instance(instance),
            history: Vec::with_capacity(params.n_iterations),
            params,
            rng,
            best: None,
            best_iteration: 0,
            iteration: 0,
            evaluations: 0,
        })
    }

    pub fn params(&self) -> &AcoParams {
        &self.params
    }

    pub fn trail(&self) -> &TrailState<'a> {
        &self.trail
    }

    pub fn best(&self) -> Option<&Tour> {
        self.best.as_ref()
    }

    /// Best-so-far length after each completed iteration.
    pub fn history(&self) -> &[f64] {
        &self.history
    }

    fn build_tour(&mut self, ant: usize) -> Tour {
        let cities = construct_tour(
            &self.trail,
            self.params.alpha,
            self.params.beta,
            &mut self.rng,
        );
        let length = find_distance(&cities, self.trail.distances());
        self.evaluations += 1;
        trace!("Ant {} tour {:?} length {:.2}", ant, cities, length);
        Tour { cities, length }
    }

    /// Run one iteration. Returns the best tour so far and whether this
    /// iteration improved on it.
    pub fn iterate(&mut self) -> AcoResult<(&Tour, bool)> {
        self.iteration += 1;
        let iteration = self.iteration;
        let iter_span = span!(Level::DEBUG, "iteration", iter = iteration);
        let _iter_guard = iter_span.enter();

        // n_ants >= 1 after validation, so the first ant always exists.
        let mut iteration_best = self.build_tour(0);
        let mut tours: Vec<Vec<usize>> = Vec::with_capacity(self.params.n_ants);
        tours.push(iteration_best.cities.clone());

        for ant in 1..self.params.n_ants {
            let tour = self.build_tour(ant);
            if tour.is_better_than(&iteration_best) {
                iteration_best = tour.clone();
            }
            tours.push(tour.cities);
        }

        let (best, improved) = keep_better(self.best.take(), &iteration_best);
        if improved {
            self.best_iteration = iteration;
            info!(
                "New best at iteration {}: distance = {:.2}",
                iteration, best.length
            );
        }
        let best = self.best.insert(best);

        // All ants are done reading the trails before they change.
        self.trail.update(&tours, self.params.decay)?;
        self.history.push(best.length);

        Ok((&*best, improved))
    }

    /// Run the configured number of iterations and return the best tour.
    ///
    /// Calling it again continues from the current trails and best tour.
    pub fn run(&mut self) -> AcoResult<AcoSolution> {
        let loop_span = span!(
            Level::INFO,
            "aco_loop",
            total_iterations = self.params.n_iterations
        );
        let _loop_guard = loop_span.enter();

        for _ in 1..self.params.n_iterations {
            self.iterate()?;
        }
        let best = self.iterate()?.0.clone();

        debug!(
            "Finished {} iterations, {} evaluations",
            self.iteration, self.evaluations
        );

        Ok(AcoSolution {
            length: best.length,
            tour: best.cities,
            evaluations: self.evaluations,
            best_iteration: self.best_iteration,
            history: self.history.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::solution::is_permutation;
    use crate::error::AcoError;
    use crate::fixtures::{demo_matrix, random_symmetric_matrix};

    fn demo_instance() -> ProblemInstance {
        ProblemInstance::new(demo_matrix()).expect("valid matrix")
    }

    #[test]
    fn test_new_rejects_invalid_params() {
        let pi = demo_instance();
        let params = AcoParams::new(0, 1, 10, 0.5);
        assert!(matches!(
            AntColony::new(&pi, params),
            Err(AcoError::InvalidParameter { name: "n_ants", .. })
        ));
    }

    #[test]
    fn test_run_returns_valid_tour() {
        let pi = demo_instance();
        let params = AcoParams::default().with_seed(42);
        let solution = AntColony::new(&pi, params)
            .expect("valid params")
            .run()
            .expect("should solve");

        assert!(is_permutation(&solution.tour, 5));
        let recomputed = find_distance(&solution.tour, pi.distance_matrix());
        assert!((solution.length - recomputed).abs() < 1e-10);
    }

    #[test]
    fn test_counts_evaluations_and_history() {
        let pi = demo_instance();
        let params = AcoParams::new(4, 2, 7, 0.5).with_seed(1);
        let solution = AntColony::new(&pi, params)
            .expect("valid params")
            .run()
            .expect("should solve");

        assert_eq!(solution.evaluations, 28);
        assert_eq!(solution.history.len(), 7);
        assert!((solution.history[6] - solution.length).abs() < 1e-10);
        assert!(solution.best_iteration >= 1 && solution.best_iteration <= 7);
    }

    #[test]
    fn test_history_is_non_increasing() {
        let dm = random_symmetric_matrix(10, 5);
        let pi = ProblemInstance::new(dm).expect("valid matrix");
        let params = AcoParams::new(6, 2, 40, 0.3).with_beta(2.0).with_seed(17);
        let solution = AntColony::new(&pi, params)
            .expect("valid params")
            .run()
            .expect("should solve");

        for window in solution.history.windows(2) {
            assert!(window[1] <= window[0]);
        }
    }

    #[test]
    fn test_deterministic_with_seed() {
        let dm = random_symmetric_matrix(8, 2);
        let pi = ProblemInstance::new(dm).expect("valid matrix");
        let params = AcoParams::new(5, 2, 20, 0.5).with_seed(123);

        let a = AntColony::new(&pi, params.clone()).unwrap().run().unwrap();
        let b = AntColony::new(&pi, params).unwrap().run().unwrap();

        assert_eq!(a.tour, b.tour);
        assert_eq!(a.history, b.history);
    }

    #[test]
    fn test_iterate_reports_first_tour_as_improvement() {
        let pi = demo_instance();
        let mut colony = AntColony::new(&pi, AcoParams::default().with_seed(4)).unwrap();
        assert!(colony.best().is_none());

        let (first, improved) = colony.iterate().expect("should iterate");
        assert!(improved);
        assert!(is_permutation(&first.cities, 5));
        assert_eq!(colony.history().len(), 1);
        assert!(colony
            .trail()
            .pheromone()
            .iter()
            .flatten()
            .all(|&p| p >= 0.0));
    }

    #[test]
    fn test_single_iteration_run_reports_its_best() {
        let pi = demo_instance();
        let params = AcoParams::new(3, 1, 1, 0.5).with_seed(6);
        let solution = AntColony::new(&pi, params).unwrap().run().unwrap();

        assert_eq!(solution.best_iteration, 1);
        assert_eq!(solution.history, vec![solution.length]);
        assert_eq!(solution.evaluations, 3);
    }

    #[test]
    fn test_zero_cost_tour_is_reported() {
        let pi = ProblemInstance::new(vec![vec![0.0; 3]; 3]).expect("valid matrix");
        let mut colony = AntColony::new(&pi, AcoParams::new(1, 1, 1, 0.5).with_seed(0)).unwrap();
        assert!(matches!(colony.run(), Err(AcoError::ZeroCostTour { .. })));
    }
}
