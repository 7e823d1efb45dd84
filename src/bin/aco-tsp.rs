use aco_tsp::solver::aco::search;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    search::run()
}
