use rand::Rng;
use tracing::trace;

use crate::solver::aco::trail::TrailState;

/// Build one ant's closed tour, starting from a uniformly random city.
///
/// Always returns a permutation of `0..n` where `n` is the number of cities
/// in `trail`.
pub fn construct_tour<R: Rng + ?Sized>(
    trail: &TrailState<'_>,
    alpha: f64,
    beta: f64,
    rng: &mut R,
) -> Vec<usize> {
    let n = trail.n_cities();
    if n == 0 {
        return vec![];
    }

    let start = rng.gen_range(0..n);
    let mut visited = vec![false; n];
    visited[start] = true;

    let mut tour = Vec::with_capacity(n);
    tour.push(start);

    let mut current = start;
    for _ in 1..n {
        current = select_next_city(trail, current, &visited, alpha, beta, rng);
        visited[current] = true;
        tour.push(current);
    }

    tour
}

/// Choose the next city from `current` with probability proportional to
/// `pheromone^alpha * heuristic^beta` over unvisited cities.
///
/// Visited cities score zero. When every candidate scores zero (e.g. after
/// underflow) the choice is uniform among the unvisited cities. A sum that
/// overflows is rescaled by the largest score, so sampling stays weighted.
/// Candidates with an infinite score, which a zero-length edge produces, win
/// over all finite ones.
///
/// # Panics
///
/// Panics if every city is already visited.
pub fn select_next_city<R: Rng + ?Sized>(
    trail: &TrailState<'_>,
    current: usize,
    visited: &[bool],
    alpha: f64,
    beta: f64,
    rng: &mut R,
) -> usize {
    let pheromone = trail.pheromone_row(current);
    let heuristic = trail.heuristic_row(current);

    // max(0.0) also maps NaN (0 * inf) to zero.
    let mut scores: Vec<f64> = visited
        .iter()
        .enumerate()
        .map(|(j, &seen)| {
            if seen {
                0.0
            } else {
                (pheromone[j].powf(alpha) * heuristic[j].powf(beta)).max(0.0)
            }
        })
        .collect();

    let infinite: Vec<usize> = scores
        .iter()
        .enumerate()
        .filter(|(_, &s)| s == f64::INFINITY)
        .map(|(j, _)| j)
        .collect();
    if !infinite.is_empty() {
        return infinite[rng.gen_range(0..infinite.len())];
    }

    let mut total: f64 = scores.iter().sum();
    if total.is_infinite() {
        // Finite scores overflowed when summed; dividing by the largest keeps
        // the ratios and brings the total back to at most n.
        let max = scores.iter().copied().fold(0.0, f64::max);
        for score in &mut scores {
            *score /= max;
        }
        total = scores.iter().sum();
    }

    if total > 0.0 {
        if let Some(next) = sample_categorical(&scores, total, rng) {
            return next;
        }
    }

    trace!(
        "Degenerate selection from city {} (all scores zero), picking uniformly",
        current
    );
    uniform_unvisited(visited, rng)
}

/// Inverse-CDF sampling: one uniform draw scaled by `total`, then walk the
/// cumulative sum. Zero-score entries are never returned.
///
/// Returns `None` if no entry has a positive score.
pub fn sample_categorical<R: Rng + ?Sized>(
    scores: &[f64],
    total: f64,
    rng: &mut R,
) -> Option<usize> {
    let target = rng.gen::<f64>() * total;
    let mut cumulative = 0.0;
    let mut last_positive = None;

    for (j, &score) in scores.iter().enumerate() {
        if score <= 0.0 {
            continue;
        }
        cumulative += score;
        last_positive = Some(j);
        if target < cumulative {
            return Some(j);
        }
    }

    // Rounding can leave `target` just past the final cumulative value.
    last_positive
}

fn uniform_unvisited<R: Rng + ?Sized>(visited: &[bool], rng: &mut R) -> usize {
    let candidates: Vec<usize> = visited
        .iter()
        .enumerate()
        .filter(|(_, &seen)| !seen)
        .map(|(j, _)| j)
        .collect();
    candidates[rng.gen_range(0..candidates.len())]
}
