use std::error::Error;

use colored::*;
use tracing::{debug, info, span, warn, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::constant::{ALPHA, BETA, DECAY, N_ANTS, N_BEST, N_ITERATIONS, SEED};
use crate::domain::types::{AcoSolution, ProblemInstance};
use crate::fixtures::demo_matrix;
use crate::solver::aco::colony::AntColony;
use crate::solver::aco::params::AcoParams;
use crate::solver::exact::optimal_tour;
use crate::utils::optimality_gap;

/// Initialize tracing. Diagnostics go to stderr, filtered by `RUST_LOG`.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_span_events(fmt::format::FmtSpan::NEW | fmt::format::FmtSpan::CLOSE),
        )
        .init();
}

fn demo_params() -> AcoParams {
    AcoParams::new(N_ANTS, N_BEST, N_ITERATIONS, DECAY)
        .with_alpha(ALPHA)
        .with_beta(BETA)
        .with_seed(SEED)
}

/// Log how far the result is from the brute-force optimum
fn report_final_stats(solution: &AcoSolution, problem_instance: &ProblemInstance) {
    info!(
        "Optimization complete. Best tour found at iteration {} after {} evaluations",
        solution.best_iteration, solution.evaluations
    );

    match optimal_tour(problem_instance) {
        Ok(optimal) => {
            let gap = optimality_gap(solution.length, optimal.length);
            if gap > 0.0 {
                warn!(
                    "Distance {:.2} is {:.2}% above the optimum {:.2}",
                    solution.length, gap, optimal.length
                );
            } else {
                info!("Reached the optimum {:.2}", optimal.length);
            }
        }
        Err(e) => warn!("Skipping optimality check: {}", e),
    }
}

/// Solve the fixed 5-city demonstration instance and print the best tour.
pub fn run() -> Result<(), Box<dyn Error>> {
    init_tracing();

    let params = demo_params();
    info!("Starting ACO with parameters {}", serde_json::to_string(&params)?);

    let problem_instance = {
        let span = span!(Level::INFO, "setup");
        let _guard = span.enter();
        ProblemInstance::new(demo_matrix())?
    };

    let solution = AntColony::new(&problem_instance, params)?.run()?;

    println!("{} {:?}", "Best tour:".green().bold(), solution.tour);
    println!("{} {}", "Total distance:".green().bold(), solution.length);
    debug!("Solution: {}", serde_json::to_string(&solution)?);

    report_final_stats(&solution, &problem_instance);

    Ok(())
}
