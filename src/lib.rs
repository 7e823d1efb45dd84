//! Ant Colony Optimization for the symmetric Traveling Salesman Problem.
//!
//! Ants build closed tours city by city, guided by pheromone trails and an
//! inverse-distance heuristic. After every iteration the trails evaporate and
//! each ant deposits pheromone proportional to the quality of its tour.

pub mod config;
pub mod domain;
pub mod error;
pub mod evaluation;
pub mod fixtures;
pub mod setup;
pub mod solver;
pub mod utils;

pub use domain::types::{AcoSolution, ProblemInstance, Tour};
pub use error::{AcoError, AcoResult};
pub use solver::aco::{AcoParams, AntColony, TrailState};
