pub mod data_generator;

pub use data_generator::{demo_matrix, random_symmetric_matrix};
