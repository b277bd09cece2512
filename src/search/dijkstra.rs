use std::path::Path;

use ahash::{HashMap, HashMapExt, HashSet, HashSetExt};
use log::{debug, info};

use super::{distance::Distance, DistanceError, SearchError};
use crate::{
    graphs::{adjacency_file::read_graph_from_adjacency_file, Graph, Weight},
    queue::IndexedPriorityQueue,
};

/// Shortest known distance of every vertex reached from the source.
pub type DistanceMap<V, W> = HashMap<V, W>;

/// Single source Dijkstra over `graph`.
///
/// Every vertex of the graph, plus `source` if the graph does not know it, is
/// queued up front: the source with distance zero, all others with
/// [`Distance::Infinite`]. The returned map only holds vertices whose distance
/// was lowered to a finite value by some edge, so unreachable vertices are
/// absent and so is the source itself.
///
/// Edge weights must be non-negative. Negative weights are not detected and
/// lead to wrong distances.
///
/// A relaxation whose sum does not fit into the weight type is skipped. If a
/// vertex could only have been reached through such a relaxation the search
/// fails with [`DistanceError::Overflow`] instead of reporting it unreachable.
pub fn compute_distances<G>(
    graph: &G,
    source: &G::Vertex,
) -> Result<DistanceMap<G::Vertex, G::Weight>, DistanceError>
where
    G: Graph + ?Sized,
{
    let zero = Distance::Finite(<G::Weight as Weight>::ZERO);

    let mut queue = IndexedPriorityQueue::with_capacity(graph.number_of_vertices() + 1);
    for vertex in graph.vertices() {
        let distance = if vertex == source {
            zero
        } else {
            Distance::Infinite
        };
        queue.insert(vertex.clone(), distance)?;
    }
    if !queue.contains(source) {
        queue.insert(source.clone(), zero)?;
    }

    let mut finalized = HashSet::with_capacity(queue.len());
    let mut out_of_range = HashSet::new();
    let mut distances = DistanceMap::new();

    while let Some((tail, distance_tail)) = queue.pop() {
        if distance_tail == Distance::Infinite && out_of_range.contains(&tail) {
            return Err(DistanceError::Overflow);
        }
        finalized.insert(tail.clone());

        for (head, weight) in graph.out_edges(&tail) {
            if finalized.contains(head) {
                continue;
            }

            let Some(alternative_distance_head) = distance_tail.checked_add(weight) else {
                out_of_range.insert(head.clone());
                continue;
            };
            if alternative_distance_head < *queue.get_priority(head)? {
                queue.set_priority(head, alternative_distance_head)?;
                if let Some(distance) = alternative_distance_head.finite() {
                    distances.insert(head.clone(), distance);
                }
            }
        }
    }

    debug!(
        "settled {} vertices, {} reachable from source",
        finalized.len(),
        distances.len()
    );

    Ok(distances)
}

/// Sum of all distances [`compute_distances`] reports for `source`.
pub fn sum_of_distances<G>(graph: &G, source: &G::Vertex) -> Result<G::Weight, DistanceError>
where
    G: Graph + ?Sized,
{
    total_distance(&compute_distances(graph, source)?)
}

/// Sum of all distances in `distances`, [`DistanceError::Overflow`] if it does
/// not fit into `W`.
pub fn total_distance<V, W: Weight>(distances: &DistanceMap<V, W>) -> Result<W, DistanceError> {
    distances
        .values()
        .try_fold(W::ZERO, |sum, &distance| sum.checked_add(distance))
        .ok_or(DistanceError::Overflow)
}

/// Reads the adjacency file at `path` and sums the distances from `source`.
///
/// With `symmetric` every edge line also adds the reversed edge.
pub fn sum_of_distances_from_file<W: Weight>(
    path: &Path,
    source: &str,
    symmetric: bool,
) -> Result<W, SearchError> {
    let graph = read_graph_from_adjacency_file::<W>(path, symmetric)?;
    info!(
        "read {} vertices and {} edges from {}",
        graph.number_of_vertices(),
        graph.number_of_edges(),
        path.display()
    );

    let sum = sum_of_distances(&graph, &source.to_string())?;
    Ok(sum)
}
