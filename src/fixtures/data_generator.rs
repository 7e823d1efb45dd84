use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Fixed 5-city matrix used by the command-line demonstration.
///
/// The optimal closed tour length is 13, reached by `0 -> 1 -> 4 -> 2 -> 3`
/// and `0 -> 1 -> 4 -> 3 -> 2` (and their reversals).
pub fn demo_matrix() -> Vec<Vec<f64>> {
    vec![
        vec![0.0, 2.0, 2.0, 5.0, 7.0],
        vec![2.0, 0.0, 4.0, 8.0, 2.0],
        vec![2.0, 4.0, 0.0, 1.0, 3.0],
        vec![5.0, 8.0, 1.0, 0.0, 6.0],
        vec![7.0, 2.0, 3.0, 6.0, 0.0],
    ]
}

/// Generates a seeded symmetric matrix with a zero diagonal and off-diagonal
/// distances in [1, 100).
pub fn random_symmetric_matrix(n: usize, seed: u64) -> Vec<Vec<f64>> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut dm = vec![vec![0.0; n]; n];

    for i in 0..n {
        for j in (i + 1)..n {
            let d = rng.gen_range(1.0..100.0);
            dm[i][j] = d;
            dm[j][i] = d;
        }
    }

    dm
}
