use crate::domain::solution::tour_edges;

/// Total length of a closed tour: every consecutive pair plus the edge from
/// the last city back to the first.
pub fn find_distance(cities: &[usize], dm: &[Vec<f64>]) -> f64 {
    tour_edges(cities)
        .map(|(from, to)| dist_between(from, to, dm))
        .sum()
}

pub fn dist_between(from_loc: usize, to_loc: usize, dm: &[Vec<f64>]) -> f64 {
    dm[from_loc][to_loc]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn four_cities() -> Vec<Vec<f64>> {
        vec![
            vec![0.0, 1.0, 2.0, 2.0],
            vec![1.0, 0.0, 2.0, 2.0],
            vec![2.0, 2.0, 0.0, 1.0],
            vec![2.0, 2.0, 1.0, 0.0],
        ]
    }

    #[test]
    fn test_find_distance_includes_closing_edge() {
        let dm = four_cities();
        // 0->1 (1) + 1->2 (2) + 2->3 (1) + 3->0 (2)
        assert!((find_distance(&[0, 1, 2, 3], &dm) - 6.0).abs() < 1e-10);
        // 0->2 (2) + 2->1 (2) + 1->3 (2) + 3->0 (2)
        assert!((find_distance(&[0, 2, 1, 3], &dm) - 8.0).abs() < 1e-10);
    }

    #[test]
    fn test_find_distance_reverse_is_equal() {
        let dm = four_cities();
        let tour = vec![3, 0, 2, 1];
        let reversed: Vec<usize> = tour.iter().rev().copied().collect();
        assert!((find_distance(&tour, &dm) - find_distance(&reversed, &dm)).abs() < 1e-10);
    }

    #[test]
    fn test_find_distance_is_rotation_invariant() {
        let dm = four_cities();
        assert!((find_distance(&[0, 1, 2, 3], &dm) - find_distance(&[2, 3, 0, 1], &dm)).abs() < 1e-10);
    }

    #[test]
    fn test_find_distance_empty_tour() {
        assert_eq!(find_distance(&[], &four_cities()), 0.0);
    }
}
