pub mod traits;
pub mod distances;
pub mod observer;
pub mod dijkstra;
pub mod reference;
pub mod batch;

pub use distances::DistanceTable;
pub use observer::{SearchObserver, SearchStats};
pub use traits::{SearchOptions, ShortestPathAlgorithm};
