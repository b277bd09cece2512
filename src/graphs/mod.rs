use std::{
    fmt::{Debug, Display},
    hash::Hash,
    str::FromStr,
};

pub mod adjacency_file;
pub mod edge;
pub mod hash_graph;

/// Numeric edge weight. Shortest path distances are only meaningful for
/// non-negative weights; negative ones are accepted but give wrong distances.
///
/// Distances are only ever added with `checked_add`, so a sum that leaves the
/// range of the type is reported instead of wrapping.
pub trait Weight: Copy + Ord + Debug + Display + FromStr + Send + Sync {
    const ZERO: Self;

    fn checked_add(self, other: Self) -> Option<Self>;
}

macro_rules! impl_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                const ZERO: Self = 0;

                fn checked_add(self, other: Self) -> Option<Self> {
                    <$t>::checked_add(self, other)
                }
            }
        )*
    };
}

impl_weight!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

/// Read access to a directed weighted graph.
pub trait Graph {
    type Vertex: Hash + Eq + Clone;
    type Weight: Weight;

    fn number_of_vertices(&self) -> usize;

    fn number_of_edges(&self) -> usize {
        self.vertices()
            .map(|vertex| self.out_edges(vertex).len())
            .sum::<usize>()
    }

    /// Every vertex of the graph, including those that only appear as the
    /// head of an edge.
    fn vertices(&self) -> Box<dyn Iterator<Item = &Self::Vertex> + '_>;

    /// `(head, weight)` pairs of the edges leaving `tail`. Empty if `tail` is
    /// not part of the graph.
    fn out_edges(
        &self,
        tail: &Self::Vertex,
    ) -> Box<dyn ExactSizeIterator<Item = (&Self::Vertex, Self::Weight)> + '_>;
}
