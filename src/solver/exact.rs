use itertools::Itertools;
use tracing::debug;

use crate::config::constant::EXACT_MAX_CITIES;
use crate::domain::types::{ProblemInstance, Tour};
use crate::error::{AcoError, AcoResult};
use crate::evaluation::fitness::find_distance;

/// Brute-force optimum over all `(n-1)!` tours that start at city 0.
///
/// Only meant as a reference for small instances.
pub fn optimal_tour(instance: &ProblemInstance) -> AcoResult<Tour> {
    let n = instance.n_cities();
    if n > EXACT_MAX_CITIES {
        return Err(AcoError::InvalidParameter {
            name: "n_cities",
            reason: format!(
                "brute force supports at most {} cities, got {}",
                EXACT_MAX_CITIES, n
            ),
        });
    }

    let dm = instance.distance_matrix();
    let identity: Vec<usize> = (0..n).collect();
    let mut best = Tour {
        length: find_distance(&identity, dm),
        cities: identity,
    };

    for perm in (1..n).permutations(n - 1) {
        let cities: Vec<usize> = std::iter::once(0).chain(perm).collect();
        let length = find_distance(&cities, dm);
        if length < best.length {
            best = Tour { cities, length };
        }
    }

    debug!("Exact optimum {:?} with length {:.2}", best.cities, best.length);
    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::demo_matrix;

    #[test]
    fn test_demo_optimum() {
        let pi = ProblemInstance::new(demo_matrix()).unwrap();
        let best = optimal_tour(&pi).expect("small instance");

        assert!((best.length - 13.0).abs() < 1e-10);
        assert_eq!(best.cities[0], 0);
        // Permutations come in lexicographic order and ties keep the first.
        assert_eq!(best.cities, vec![0, 1, 4, 2, 3]);
    }

    #[test]
    fn test_two_cities() {
        let pi = ProblemInstance::new(vec![vec![0.0, 4.0], vec![4.0, 0.0]]).unwrap();
        let best = optimal_tour(&pi).unwrap();
        assert_eq!(best.cities, vec![0, 1]);
        assert!((best.length - 8.0).abs() < 1e-10);
    }

    #[test]
    fn test_refuses_large_instance() {
        let pi = ProblemInstance::new(vec![vec![1.0; 11]; 11]).unwrap();
        assert!(matches!(
            optimal_tour(&pi),
            Err(AcoError::InvalidParameter { name: "n_cities", .. })
        ));
    }
}
