use crate::domain::types::Tour;

/// Check that `cities` visits every city in `0..n_cities` exactly once.
pub fn is_permutation(cities: &[usize], n_cities: usize) -> bool {
    if cities.len() != n_cities {
        return false;
    }

    let mut seen = vec![false; n_cities];
    for &city in cities {
        if city >= n_cities || seen[city] {
            return false;
        }
        seen[city] = true;
    }
    true
}

/// Directed edges of a closed tour, including the edge back to the start.
pub fn tour_edges(cities: &[usize]) -> impl Iterator<Item = (usize, usize)> + '_ {
    let closing = match (cities.last(), cities.first()) {
        (Some(&last), Some(&first)) => Some((last, first)),
        _ => None,
    };
    cities
        .windows(2)
        .map(|pair| (pair[0], pair[1]))
        .chain(closing)
}

/// Pick the better of the current best and a candidate, keeping the current
/// best on ties.
pub fn keep_better(best: Option<Tour>, candidate: &Tour) -> (Tour, bool) {
    match best {
        Some(best) if !candidate.is_better_than(&best) => (best, false),
        _ => (candidate.clone(), true),
    }
}
