/// Percentage by which `solution_length` exceeds `optimal_length`.
pub fn optimality_gap(solution_length: f64, optimal_length: f64) -> f64 {
    if optimal_length == 0.0 {
        return 0.0;
    }
    ((solution_length - optimal_length) / optimal_length) * 100.0
}
