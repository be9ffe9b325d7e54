pub mod traits;
pub mod path;
pub mod dijkstra;
pub mod bellman_ford;

pub use traits::{ShortestPathAlgorithm, ShortestPathResult};
pub use path::{path_weight, reconstruct_path};
