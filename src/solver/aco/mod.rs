pub mod colony;
pub mod construct;
pub mod params;
pub mod search;
pub mod trail;

pub use colony::AntColony;
pub use construct::{construct_tour, select_next_city};
pub use params::AcoParams;
pub use trail::TrailState;
