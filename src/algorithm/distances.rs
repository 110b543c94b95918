use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::graph::Vertex;
use crate::weight::Weight;

/// Shortest known distance from the start vertex to every known vertex
///
/// Vertices absent from the table are treated as unreachable. Once returned by
/// a search the table is final; only the search itself writes to it.
///
/// Serialized as a map sorted by vertex, with unreachable vertices encoded as
/// `null`. Deserializing maps `null` back to [`Weight::infinity`].
#[derive(Debug, Clone)]
pub struct DistanceTable<V, W> {
    distances: HashMap<V, W>,
}

impl<V, W> DistanceTable<V, W>
where
    V: Vertex,
    W: Weight,
{
    /// Creates a table where every given vertex is unreachable
    pub fn unreachable<I>(vertices: I) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        DistanceTable {
            distances: vertices.into_iter().map(|v| (v, W::infinity())).collect(),
        }
    }

    /// Returns the stored distance, or `None` if the vertex is unknown
    pub fn get(&self, vertex: &V) -> Option<W> {
        self.distances.get(vertex).copied()
    }

    /// Returns the distance, treating unknown vertices as unreachable
    pub fn distance(&self, vertex: &V) -> W {
        self.get(vertex).unwrap_or_else(W::infinity)
    }

    /// Returns true if the vertex has a finite distance
    pub fn is_reachable(&self, vertex: &V) -> bool {
        !self.distance(vertex).is_infinite()
    }

    /// Returns true if the vertex has an entry, reachable or not
    pub fn contains(&self, vertex: &V) -> bool {
        self.distances.contains_key(vertex)
    }

    /// Returns the number of vertices in the table
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// Returns true if the table has no entries
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Iterates over all entries in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&V, W)> + '_ {
        self.distances.iter().map(|(v, d)| (v, *d))
    }

    /// Iterates over the reachable entries in arbitrary order
    pub fn reachable(&self) -> impl Iterator<Item = (&V, W)> + '_ {
        self.iter().filter(|(_, d)| !d.is_infinite())
    }

    /// Consumes the table and returns the raw mapping
    pub fn into_inner(self) -> HashMap<V, W> {
        self.distances
    }

    pub(crate) fn insert_unreachable(&mut self, vertex: &V) {
        if !self.distances.contains_key(vertex) {
            self.distances.insert(vertex.clone(), W::infinity());
        }
    }

    pub(crate) fn set(&mut self, vertex: V, distance: W) {
        self.distances.insert(vertex, distance);
    }
}

impl<V, W> PartialEq for DistanceTable<V, W>
where
    V: Vertex,
    W: Weight,
{
    fn eq(&self, other: &Self) -> bool {
        self.distances == other.distances
    }
}

impl<V, W> Eq for DistanceTable<V, W>
where
    V: Vertex,
    W: Weight,
{
}

impl<V, W> Serialize for DistanceTable<V, W>
where
    V: Vertex + Ord + Serialize,
    W: Weight + Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let sorted: BTreeMap<&V, Option<W>> = self
            .distances
            .iter()
            .map(|(v, d)| (v, if d.is_infinite() { None } else { Some(*d) }))
            .collect();
        sorted.serialize(serializer)
    }
}

impl<'de, V, W> Deserialize<'de> for DistanceTable<V, W>
where
    V: Vertex + Deserialize<'de>,
    W: Weight + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = HashMap::<V, Option<W>>::deserialize(deserializer)?;
        Ok(DistanceTable {
            distances: raw
                .into_iter()
                .map(|(v, d)| (v, d.unwrap_or_else(W::infinity)))
                .collect(),
        })
    }
}
