pub mod traits;
pub mod directed;
pub mod builder;
pub mod interner;
pub mod generators;

pub use traits::{Edge, Graph, Weight};
pub use directed::DirectedGraph;
pub use builder::GraphBuilder;
pub use interner::VertexInterner;
