//! Lazy SSSP - single-source shortest path distances
//!
//! This library computes shortest-path distances from one start vertex over a
//! weighted directed graph with non-negative edge weights. The engine is a
//! Dijkstra whose priority queue compares vertex ids by reading the live
//! distance table; an improved vertex has its existing heap slot moved
//! towards the root rather than being queued twice.
//!
//! ```
//! use std::collections::HashMap;
//! use lazy_sssp::compute_distances;
//!
//! let mut graph: HashMap<&str, HashMap<&str, u32>> = HashMap::new();
//! graph.insert("A", HashMap::from([("B", 4), ("C", 2)]));
//! graph.insert("C", HashMap::from([("B", 1)]));
//!
//! let distances = compute_distances(&graph, &"A");
//! assert_eq!(distances.get(&"B"), Some(3));
//! ```

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod web;
pub mod weight;

/// Re-export main types for convenient use
pub use algorithm::{
    batch::compute_many, dijkstra::compute_distances, dijkstra::Dijkstra,
    reference::BinaryHeapDijkstra, DistanceTable, SearchObserver, SearchStats,
    ShortestPathAlgorithm,
};
pub use data_structures::{Comparator, IndexedPriorityQueue, NaturalOrder, PriorityQueue};
pub use graph::{DirectedGraph, Graph, Vertex};
pub use weight::Weight;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Cannot dequeue from an empty priority queue")]
    EmptyQueue,

    #[error("Start vertex not found in graph: {0}")]
    UnknownStartVertex(String),

    #[error("Negative edge weight on {from} -> {to}: {weight}")]
    NegativeWeight {
        from: String,
        to: String,
        weight: String,
    },

    #[error("Invalid graph JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
