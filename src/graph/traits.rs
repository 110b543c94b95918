use std::collections::{BTreeMap, HashMap};
use std::fmt::Debug;
use std::hash::Hash;

use crate::weight::Weight;

/// Vertex identifier: any hashable, cloneable token (strings, integers, ...)
pub trait Vertex: Clone + Eq + Hash + Debug {}

impl<T> Vertex for T where T: Clone + Eq + Hash + Debug {}

/// Trait representing a weighted directed graph as seen by the search
///
/// The search only reads the graph. Vertices returned by [`Graph::vertices`]
/// are the graph's key set; vertices that only ever appear as a neighbour are
/// still valid targets of [`Graph::neighbors`].
pub trait Graph<V, W>: Debug
where
    V: Vertex,
    W: Weight,
{
    /// Returns an iterator over the declared vertices
    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_>;

    /// Returns an iterator over the outgoing edges of a vertex
    ///
    /// Unknown vertices have no outgoing edges.
    fn neighbors<'a>(&'a self, vertex: &V) -> Box<dyn Iterator<Item = (&'a V, W)> + 'a>;

    /// Returns true if the vertex is part of the declared key set
    fn contains_vertex(&self, vertex: &V) -> bool;

    /// Returns the number of declared vertices
    fn vertex_count(&self) -> usize {
        self.vertices().count()
    }

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize {
        self.vertices().map(|v| self.neighbors(v).count()).sum()
    }
}

impl<V, W> Graph<V, W> for HashMap<V, HashMap<V, W>>
where
    V: Vertex,
    W: Weight,
{
    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_> {
        Box::new(self.keys())
    }

    fn neighbors<'a>(&'a self, vertex: &V) -> Box<dyn Iterator<Item = (&'a V, W)> + 'a> {
        match self.get(vertex) {
            Some(edges) => Box::new(edges.iter().map(|(target, weight)| (target, *weight))),
            None => Box::new(std::iter::empty()),
        }
    }

    fn contains_vertex(&self, vertex: &V) -> bool {
        self.contains_key(vertex)
    }

    fn vertex_count(&self) -> usize {
        self.len()
    }
}

impl<V, W> Graph<V, W> for BTreeMap<V, BTreeMap<V, W>>
where
    V: Vertex + Ord,
    W: Weight,
{
    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_> {
        Box::new(self.keys())
    }

    fn neighbors<'a>(&'a self, vertex: &V) -> Box<dyn Iterator<Item = (&'a V, W)> + 'a> {
        match self.get(vertex) {
            Some(edges) => Box::new(edges.iter().map(|(target, weight)| (target, *weight))),
            None => Box::new(std::iter::empty()),
        }
    }

    fn contains_vertex(&self, vertex: &V) -> bool {
        self.contains_key(vertex)
    }

    fn vertex_count(&self) -> usize {
        self.len()
    }
}

/// Checks every edge for a negative weight
pub fn validate_non_negative<V, W, G>(graph: &G) -> crate::Result<()>
where
    V: Vertex,
    W: Weight,
    G: Graph<V, W> + ?Sized,
{
    for from in graph.vertices() {
        for (to, weight) in graph.neighbors(from) {
            if weight.is_negative() {
                return Err(crate::Error::NegativeWeight {
                    from: format!("{:?}", from),
                    to: format!("{:?}", to),
                    weight: format!("{:?}", weight),
                });
            }
        }
    }
    Ok(())
}
