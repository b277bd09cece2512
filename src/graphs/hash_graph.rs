use std::hash::Hash;

use ahash::{HashMap, HashMapExt};

use super::{edge::WeightedEdge, Graph, Weight};

/// Adjacency map `tail -> {head -> weight}`.
///
/// Every head is also a key of the outer map, so a vertex that only has
/// incoming edges is still a vertex of the graph. Each ordered pair holds at
/// most one weight; setting an edge again overwrites the old weight.
#[derive(Clone, Debug)]
pub struct HashGraph<V, W> {
    out_edges: HashMap<V, HashMap<V, W>>,
}

impl<V, W> Default for HashGraph<V, W>
where
    V: Hash + Eq + Clone,
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, W> Graph for HashGraph<V, W>
where
    V: Hash + Eq + Clone,
    W: Weight,
{
    type Vertex = V;
    type Weight = W;

    fn number_of_vertices(&self) -> usize {
        self.out_edges.len()
    }

    fn number_of_edges(&self) -> usize {
        self.out_edges.values().map(HashMap::len).sum::<usize>()
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_> {
        Box::new(self.out_edges.keys())
    }

    fn out_edges(&self, tail: &V) -> Box<dyn ExactSizeIterator<Item = (&V, W)> + '_> {
        match self.out_edges.get(tail) {
            Some(heads) => Box::new(heads.iter().map(|(head, &weight)| (head, weight))),
            None => Box::new(std::iter::empty()),
        }
    }
}

impl<V, W> HashGraph<V, W>
where
    V: Hash + Eq + Clone,
    W: Weight,
{
    pub fn new() -> Self {
        HashGraph {
            out_edges: HashMap::new(),
        }
    }

    pub fn from_edges(edges: &[WeightedEdge<V, W>]) -> Self {
        let mut graph = HashGraph::new();
        edges.iter().for_each(|edge| graph.set_edge(edge));
        graph
    }

    /// Adds `vertex` without any edges. Does nothing if it is already known.
    pub fn add_vertex(&mut self, vertex: V) {
        self.out_edges.entry(vertex).or_default();
    }

    pub fn set_edge(&mut self, edge: &WeightedEdge<V, W>) {
        self.add_vertex(edge.head().clone());
        self.out_edges
            .entry(edge.tail().clone())
            .or_default()
            .insert(edge.head().clone(), *edge.weight());
    }

    pub fn set_edge_bidirectional(&mut self, edge: &WeightedEdge<V, W>) {
        self.set_edge(edge);
        self.set_edge(&edge.reversed());
    }

    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.out_edges.contains_key(vertex)
    }

    pub fn get_edge_weight(&self, tail: &V, head: &V) -> Option<W> {
        Some(*self.out_edges.get(tail)?.get(head)?)
    }
}

impl<V, W> FromIterator<WeightedEdge<V, W>> for HashGraph<V, W>
where
    V: Hash + Eq + Clone,
    W: Weight,
{
    fn from_iter<T: IntoIterator<Item = WeightedEdge<V, W>>>(iter: T) -> Self {
        let mut graph = HashGraph::new();
        graph.extend(iter);
        graph
    }
}

impl<V, W> Extend<WeightedEdge<V, W>> for HashGraph<V, W>
where
    V: Hash + Eq + Clone,
    W: Weight,
{
    fn extend<T: IntoIterator<Item = WeightedEdge<V, W>>>(&mut self, iter: T) {
        iter.into_iter().for_each(|edge| self.set_edge(&edge));
    }
}
