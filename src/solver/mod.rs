pub mod aco;
pub mod exact;
