use rayon::prelude::*;

use crate::algorithm::{DistanceTable, ShortestPathAlgorithm};
use crate::graph::{Graph, Vertex};
use crate::weight::Weight;
use crate::Result;

/// Runs one independent search per start vertex in parallel
///
/// Each search owns its own queue and distance table, so the only shared
/// state is the read-only graph. Results are returned in the order of
/// `starts`; the first failing search aborts the batch.
pub fn compute_many<V, W, G, A>(algorithm: &A, graph: &G, starts: &[V]) -> Result<Vec<DistanceTable<V, W>>>
where
    V: Vertex + Send + Sync,
    W: Weight + Send,
    G: Graph<V, W> + Sync,
    A: ShortestPathAlgorithm<V, W, G> + Sync,
{
    starts
        .par_iter()
        .map(|start| algorithm.compute_distances(graph, start))
        .collect()
}
