use std::cell::RefCell;
use std::collections::HashSet;

use log::{debug, trace};

use crate::algorithm::traits::SearchOptions;
use crate::algorithm::{DistanceTable, SearchObserver, ShortestPathAlgorithm};
use crate::data_structures::IndexedPriorityQueue;
use crate::graph::{Graph, Vertex};
use crate::weight::Weight;
use crate::Result;

/// Dijkstra over a live-distance indexed priority queue
///
/// The queue stores vertex ids and compares them by reading the distance
/// table at comparison time. Each vertex is queued at most once; when its
/// distance drops, the queue moves its existing slot instead of taking a
/// second copy.
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra {
    options: SearchOptions,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance with no input checks
    pub fn new() -> Self {
        Dijkstra::default()
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

impl<V, W, G> ShortestPathAlgorithm<V, W, G> for Dijkstra
where
    V: Vertex,
    W: Weight,
    G: Graph<V, W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_observed<O>(&self, graph: &G, start: &V, observer: &mut O) -> Result<DistanceTable<V, W>>
    where
        O: SearchObserver<V, W>,
    {
        self.options.validate::<V, W, G>(graph, start)?;
        Ok(search(graph, start, observer))
    }
}

/// Computes shortest distances from `start` to every vertex of `graph`
///
/// Every declared vertex and every edge target appears in the result;
/// unreachable ones keep [`Weight::infinity`]. A start vertex that is not
/// declared in the graph is not an error: it gets distance zero, has no
/// outgoing edges, and everything else stays unreachable. Callers that want
/// to reject it should use [`Dijkstra::with_start_check`].
pub fn compute_distances<V, W, G>(graph: &G, start: &V) -> DistanceTable<V, W>
where
    V: Vertex,
    W: Weight,
    G: Graph<V, W> + ?Sized,
{
    search(graph, start, &mut ())
}

pub(crate) fn search<V, W, G, O>(graph: &G, start: &V, observer: &mut O) -> DistanceTable<V, W>
where
    V: Vertex,
    W: Weight,
    G: Graph<V, W> + ?Sized,
    O: SearchObserver<V, W>,
{
    let table = RefCell::new(initial_table(graph, start));
    let mut processed: HashSet<V> = HashSet::new();

    let mut queue = IndexedPriorityQueue::with_comparator(|a: &V, b: &V| {
        let distances = table.borrow();
        distances.distance(a).cmp(&distances.distance(b))
    });
    queue.enqueue(start.clone());
    observer.on_enqueue(start);

    debug!("Starting search from {:?} over {} vertices", start, table.borrow().len());

    while let Some(current) = queue.pop() {
        // Processed vertices are never queued again, so each pop finalizes
        processed.insert(current.clone());

        let base = table.borrow().distance(&current);
        trace!("Finalized {:?} at {:?}", current, base);
        observer.on_finalize(&current, base);

        for (neighbor, weight) in graph.neighbors(&current) {
            observer.on_edge_scanned(&current, neighbor);
            if processed.contains(neighbor) {
                continue;
            }

            let candidate = base.relax(weight);
            let previous = table.borrow().distance(neighbor);
            if candidate < previous {
                table.borrow_mut().set(neighbor.clone(), candidate);
                observer.on_improve(neighbor, previous, candidate);
                // The lowered key can only violate order towards the root
                if !queue.update(neighbor) {
                    queue.enqueue(neighbor.clone());
                    observer.on_enqueue(neighbor);
                }
            }
        }
    }

    drop(queue);
    let table = table.into_inner();
    debug!(
        "Search from {:?} finalized {} of {} vertices",
        start,
        processed.len(),
        table.len()
    );
    table
}

/// Every declared vertex and edge target at infinity, then the start at zero
pub(crate) fn initial_table<V, W, G>(graph: &G, start: &V) -> DistanceTable<V, W>
where
    V: Vertex,
    W: Weight,
    G: Graph<V, W> + ?Sized,
{
    let mut table = DistanceTable::unreachable(graph.vertices().cloned());
    for vertex in graph.vertices() {
        for (target, _) in graph.neighbors(vertex) {
            table.insert_unreachable(target);
        }
    }
    table.set(start.clone(), W::zero());
    table
}
