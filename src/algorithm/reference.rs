use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};

use crate::algorithm::dijkstra::initial_table;
use crate::algorithm::traits::SearchOptions;
use crate::algorithm::{DistanceTable, SearchObserver, ShortestPathAlgorithm};
use crate::graph::{Graph, Vertex};
use crate::weight::Weight;
use crate::Result;

/// Lazy-deletion Dijkstra over `std::collections::BinaryHeap` with snapshotted priorities
///
/// Each queue entry carries the distance it was pushed with, so an entry is
/// stale when its snapshot no longer matches the table. Produces the same
/// distances as [`crate::Dijkstra`] and serves as its cross-check and
/// benchmark baseline. Vertices must be `Ord` to break ties inside the heap.
#[derive(Debug, Default, Clone, Copy)]
pub struct BinaryHeapDijkstra {
    options: SearchOptions,
}

impl BinaryHeapDijkstra {
    /// Creates a new instance with no input checks
    pub fn new() -> Self {
        BinaryHeapDijkstra::default()
    }

    /// Fail with `UnknownStartVertex` when the start is not a declared vertex
    pub fn with_start_check(mut self, enabled: bool) -> Self {
        self.options.require_start_vertex = enabled;
        self
    }

    /// Fail with `NegativeWeight` when the graph has a negative edge
    pub fn with_weight_check(mut self, enabled: bool) -> Self {
        self.options.reject_negative_weights = enabled;
        self
    }
}

impl<V, W, G> ShortestPathAlgorithm<V, W, G> for BinaryHeapDijkstra
where
    V: Vertex + Ord,
    W: Weight,
    G: Graph<V, W>,
{
    fn name(&self) -> &'static str {
        "BinaryHeapDijkstra"
    }

    fn compute_observed<O>(&self, graph: &G, start: &V, observer: &mut O) -> Result<DistanceTable<V, W>>
    where
        O: SearchObserver<V, W>,
    {
        self.options.validate::<V, W, G>(graph, start)?;

        let mut distances = initial_table(graph, start);
        let mut finalized: HashSet<V> = HashSet::new();
        let mut heap = BinaryHeap::new();
        heap.push(Reverse((W::zero(), start.clone())));
        observer.on_enqueue(start);

        while let Some(Reverse((dist_u, u))) = heap.pop() {
            if finalized.contains(&u) || dist_u > distances.distance(&u) {
                observer.on_stale(&u);
                continue;
            }

            finalized.insert(u.clone());
            observer.on_finalize(&u, dist_u);

            for (v, weight) in graph.neighbors(&u) {
                observer.on_edge_scanned(&u, v);
                if finalized.contains(v) {
                    continue;
                }

                let new_dist = dist_u.relax(weight);
                let current_dist = distances.distance(v);
                if new_dist < current_dist {
                    distances.set(v.clone(), new_dist);
                    observer.on_improve(v, current_dist, new_dist);
                    heap.push(Reverse((new_dist, v.clone())));
                    observer.on_enqueue(v);
                }
            }
        }

        Ok(distances)
    }
}
