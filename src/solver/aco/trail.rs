use tracing::{debug, trace};

use crate::domain::solution::tour_edges;
use crate::domain::types::ProblemInstance;
use crate::error::{AcoError, AcoResult};
use crate::evaluation::fitness::find_distance;

/// Pheromone and heuristic matrices shared by all ants of a colony.
///
/// Ants only read from it while building tours. `evaporate` and `deposit` are
/// the only mutators, and [`TrailState::update`] applies both once per
/// iteration after every ant has finished.
#[derive(Debug, Clone)]
pub struct TrailState<'a> {
    distances: &'a [Vec<f64>],
    pheromone: Vec<Vec<f64>>,
    heuristic: Vec<Vec<f64>>,
}

impl<'a> TrailState<'a> {
    /// Trails over a validated instance.
    pub fn from_instance(instance: &'a ProblemInstance) -> Self {
        Self::new(instance.distance_matrix())
    }

    /// All pheromone levels start at 1. The heuristic is `1 / d(i, j)` with 1
    /// added on the diagonal so the self-edge never divides by zero.
    ///
    /// `distances` must be square.
    pub(crate) fn new(distances: &'a [Vec<f64>]) -> Self {
        let n = distances.len();
        let heuristic = distances
            .iter()
            .enumerate()
            .map(|(i, row)| {
                row.iter()
                    .enumerate()
                    .map(|(j, &d)| 1.0 / (d + if i == j { 1.0 } else { 0.0 }))
                    .collect()
            })
            .collect();

        Self {
            distances,
            pheromone: vec![vec![1.0; n]; n],
            heuristic,
        }
    }

    pub fn n_cities(&self) -> usize {
        self.pheromone.len()
    }

    pub fn distances(&self) -> &'a [Vec<f64>] {
        self.distances
    }

    pub fn pheromone(&self) -> &[Vec<f64>] {
        &self.pheromone
    }

    pub fn heuristic(&self) -> &[Vec<f64>] {
        &self.heuristic
    }

    pub fn pheromone_row(&self, city: usize) -> &[f64] {
        &self.pheromone[city]
    }

    pub fn heuristic_row(&self, city: usize) -> &[f64] {
        &self.heuristic[city]
    }

    /// Scale every pheromone entry by `1 - decay_rate`. The rate is not
    /// checked here; values outside [0, 1] grow or flip the trails.
    pub fn evaporate(&mut self, decay_rate: f64) {
        let keep = 1.0 - decay_rate;
        for row in &mut self.pheromone {
            for level in row.iter_mut() {
                *level *= keep;
            }
        }
    }

    /// Reinforce the directed edge `from -> to` only.
    pub fn deposit(&mut self, (from, to): (usize, usize), amount: f64) {
        self.pheromone[from][to] += amount;
    }

    /// Evaporate, then let every tour deposit `1 / length` on each of its
    /// directed edges, closing edge included.
    ///
    /// Lengths are recomputed from the distance matrix. A zero-length tour is
    /// rejected before anything is modified.
    pub fn update(&mut self, tours: &[Vec<usize>], decay_rate: f64) -> AcoResult<()> {
        let lengths: Vec<f64> = tours
            .iter()
            .map(|tour| find_distance(tour, self.distances))
            .collect();

        if let Some(pos) = lengths.iter().position(|&length| length <= 0.0) {
            return Err(AcoError::ZeroCostTour {
                tour: tours[pos].clone(),
            });
        }

        self.evaporate(decay_rate);

        for (tour, length) in tours.iter().zip(&lengths) {
            let amount = 1.0 / length;
            trace!("Depositing {:.4} along {:?}", amount, tour);
            for edge in tour_edges(tour) {
                self.deposit(edge, amount);
            }
        }

        debug!(
            "Pheromone updated from {} tours, decay {}",
            tours.len(),
            decay_rate
        );
        Ok(())
    }
}
