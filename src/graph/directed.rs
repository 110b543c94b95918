use std::collections::{BTreeMap, HashMap};
use std::io::Read;

use ordered_float::OrderedFloat;

use crate::graph::traits::{self, Graph, Vertex};
use crate::weight::Weight;
use crate::{Error, Result};

/// A directed graph implementation using adjacency lists
///
/// Mirrors the mapping-of-mappings shape the search consumes: a vertex is
/// declared once it owns an adjacency list, while an edge target may stay
/// undeclared (it is then a sink known only through that edge).
#[derive(Debug, Clone)]
pub struct DirectedGraph<V, W>
where
    V: Vertex,
    W: Weight,
{
    /// Outgoing edges for each declared vertex: vertex -> [(target, weight)]
    outgoing_edges: HashMap<V, Vec<(V, W)>>,
}

impl<V, W> DirectedGraph<V, W>
where
    V: Vertex,
    W: Weight,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            outgoing_edges: HashMap::new(),
        }
    }

    /// Creates a new empty graph with room for `vertices` declared vertices
    pub fn with_capacity(vertices: usize) -> Self {
        DirectedGraph {
            outgoing_edges: HashMap::with_capacity(vertices),
        }
    }

    /// Declares a vertex with no outgoing edges; returns false if it already existed
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.outgoing_edges.contains_key(&vertex) {
            return false;
        }
        self.outgoing_edges.insert(vertex, Vec::new());
        true
    }

    /// Adds a directed edge, declaring `from` if needed
    ///
    /// An existing edge between the same endpoints gets its weight replaced.
    pub fn add_edge(&mut self, from: V, to: V, weight: W) -> Result<()> {
        if weight.is_negative() {
            return Err(Error::NegativeWeight {
                from: format!("{:?}", from),
                to: format!("{:?}", to),
                weight: format!("{:?}", weight),
            });
        }

        self.insert_edge(from, to, weight);
        Ok(())
    }

    /// Adds or replaces an edge without the weight check
    ///
    /// Only for callers whose weights are non-negative by construction.
    pub(crate) fn insert_edge(&mut self, from: V, to: V, weight: W) {
        let outgoing = self.outgoing_edges.entry(from).or_default();
        match outgoing.iter_mut().find(|(target, _)| *target == to) {
            Some(edge) => edge.1 = weight,
            None => outgoing.push((to, weight)),
        }
    }

    /// Adds an edge in both directions, declaring both endpoints
    pub fn add_undirected_edge(&mut self, a: V, b: V, weight: W) -> Result<()> {
        self.add_edge(a.clone(), b.clone(), weight)?;
        self.add_edge(b, a, weight)
    }

    /// Removes an edge from the graph; returns false if there was none
    pub fn remove_edge(&mut self, from: &V, to: &V) -> bool {
        match self.outgoing_edges.get_mut(from) {
            Some(outgoing) => {
                let len_before = outgoing.len();
                outgoing.retain(|(target, _)| target != to);
                len_before > outgoing.len()
            }
            None => false,
        }
    }

    /// Returns true if there's an edge between the two vertices
    pub fn has_edge(&self, from: &V, to: &V) -> bool {
        self.edge_weight(from, to).is_some()
    }

    /// Gets the weight of an edge if it exists
    pub fn edge_weight(&self, from: &V, to: &V) -> Option<W> {
        self.outgoing_edges
            .get(from)?
            .iter()
            .find(|(target, _)| target == to)
            .map(|(_, weight)| *weight)
    }

    /// Validate that the graph doesn't have negative weights
    pub fn validate_non_negative(&self) -> Result<()> {
        traits::validate_non_negative::<V, W, Self>(self)
    }
}

impl<V, W> Default for DirectedGraph<V, W>
where
    V: Vertex,
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, W> Graph<V, W> for DirectedGraph<V, W>
where
    V: Vertex,
    W: Weight,
{
    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_> {
        Box::new(self.outgoing_edges.keys())
    }

    fn neighbors<'a>(&'a self, vertex: &V) -> Box<dyn Iterator<Item = (&'a V, W)> + 'a> {
        if let Some(edges) = self.outgoing_edges.get(vertex) {
            Box::new(edges.iter().map(|(target, weight)| (target, *weight)))
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn contains_vertex(&self, vertex: &V) -> bool {
        self.outgoing_edges.contains_key(vertex)
    }

    fn vertex_count(&self) -> usize {
        self.outgoing_edges.len()
    }

    fn edge_count(&self) -> usize {
        self.outgoing_edges.values().map(|edges| edges.len()).sum()
    }
}

/// Adjacency object as read from JSON: `{"A": {"B": 4.0}}`
pub type JsonAdjacency = BTreeMap<String, BTreeMap<String, f64>>;

impl DirectedGraph<String, OrderedFloat<f64>> {
    /// Builds a graph from an adjacency object, rejecting negative weights
    pub fn from_adjacency(adjacency: JsonAdjacency) -> Result<Self> {
        let mut graph = DirectedGraph::with_capacity(adjacency.len());
        for (from, edges) in adjacency {
            graph.add_vertex(from.clone());
            for (to, weight) in edges {
                graph.add_edge(from.clone(), to, OrderedFloat(weight))?;
            }
        }
        Ok(graph)
    }

    /// Parses a graph from a JSON adjacency object
    pub fn from_json_str(json: &str) -> Result<Self> {
        let adjacency: JsonAdjacency = serde_json::from_str(json)?;
        Self::from_adjacency(adjacency)
    }

    /// Reads a graph from a JSON adjacency object
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let adjacency: JsonAdjacency = serde_json::from_reader(reader)?;
        Self::from_adjacency(adjacency)
    }
}
