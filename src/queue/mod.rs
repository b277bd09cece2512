use thiserror::Error;

pub mod indexed_queue;

pub use indexed_queue::IndexedPriorityQueue;

/// Contract violations reported by [`IndexedPriorityQueue`].
///
/// None of these are transient. They indicate that the caller asked the queue
/// for something its current contents cannot provide.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// The item is not (or no longer) a member of the queue.
    #[error("item is not in the queue")]
    NotFound,
    /// `extract_min` or `peek_min` was called on an empty queue.
    #[error("queue is empty")]
    Underflow,
    /// The item is already a member of the queue.
    #[error("item is already in the queue")]
    DuplicateInsert,
}
