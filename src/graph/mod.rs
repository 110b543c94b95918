pub mod traits;
pub mod directed;
pub mod generators;

pub use traits::{validate_non_negative, Graph, Vertex};
pub use directed::{DirectedGraph, JsonAdjacency};
