use thiserror::Error;

use crate::{graphs::adjacency_file::AdjacencyFileError, queue::QueueError};

pub mod dijkstra;
pub mod distance;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DistanceError {
    #[error(transparent)]
    Queue(#[from] QueueError),
    /// A distance, or the sum of all distances, does not fit into the weight
    /// type.
    #[error("distance exceeds the range of the weight type")]
    Overflow,
}

#[derive(Debug, Error)]
pub enum SearchError {
    #[error(transparent)]
    Distance(#[from] DistanceError),
    #[error(transparent)]
    AdjacencyFile(#[from] AdjacencyFileError),
}
