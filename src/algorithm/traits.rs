use crate::algorithm::{DistanceTable, SearchObserver};
use crate::graph::{validate_non_negative, Graph, Vertex};
use crate::weight::Weight;
use crate::{Error, Result};

/// Input checks an algorithm runs before searching
///
/// Both are off by default: the search itself accepts any start vertex and
/// never inspects weights.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Fail with [`Error::UnknownStartVertex`] if the start is not a declared vertex
    pub require_start_vertex: bool,
    /// Fail with [`Error::NegativeWeight`] if any edge weight is negative
    pub reject_negative_weights: bool,
}

impl SearchOptions {
    /// Runs the enabled checks against a graph and start vertex
    pub fn validate<V, W, G>(&self, graph: &G, start: &V) -> Result<()>
    where
        V: Vertex,
        W: Weight,
        G: Graph<V, W>,
    {
        if self.require_start_vertex && !graph.contains_vertex(start) {
            return Err(Error::UnknownStartVertex(format!("{:?}", start)));
        }
        if self.reject_negative_weights {
            validate_non_negative::<V, W, G>(graph)?;
        }
        Ok(())
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<V, W, G>
where
    V: Vertex,
    W: Weight,
    G: Graph<V, W>,
{
    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Compute distances from `start`, reporting progress to `observer`
    fn compute_observed<O>(&self, graph: &G, start: &V, observer: &mut O) -> Result<DistanceTable<V, W>>
    where
        O: SearchObserver<V, W>;

    /// Compute shortest distances from a start vertex to all other vertices
    fn compute_distances(&self, graph: &G, start: &V) -> Result<DistanceTable<V, W>> {
        self.compute_observed(graph, start, &mut ())
    }
}
