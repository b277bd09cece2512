use std::{cmp::Ordering, hash::Hash};

use ahash::{HashMap, HashMapExt};

use super::QueueError;

/// A binary min-heap over `(item, priority)` pairs that knows where every item
/// lives.
///
/// Besides the heap array itself two maps are kept, one from item to priority
/// and one from item to its current index in the array. Every swap updates the
/// index map for both swapped items, which makes `contains` and `get_priority`
/// O(1) and `set_priority` O(log n).
///
/// Items with equal priority come out in no particular order.
#[derive(Clone, Debug)]
pub struct IndexedPriorityQueue<I, P> {
    heap: Vec<I>,
    priorities: HashMap<I, P>,
    positions: HashMap<I, usize>,
}

impl<I, P> Default for IndexedPriorityQueue<I, P>
where
    I: Hash + Eq + Clone,
    P: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<I, P> IndexedPriorityQueue<I, P>
where
    I: Hash + Eq + Clone,
    P: Ord,
{
    pub fn new() -> Self {
        IndexedPriorityQueue {
            heap: Vec::new(),
            priorities: HashMap::new(),
            positions: HashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        IndexedPriorityQueue {
            heap: Vec::with_capacity(capacity),
            priorities: HashMap::with_capacity(capacity),
            positions: HashMap::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn contains(&self, item: &I) -> bool {
        self.positions.contains_key(item)
    }

    /// Adds `item` with `priority`. Fails with [`QueueError::DuplicateInsert`]
    /// if the item is already queued, leaving the queue untouched.
    pub fn insert(&mut self, item: I, priority: P) -> Result<(), QueueError> {
        if self.contains(&item) {
            return Err(QueueError::DuplicateInsert);
        }

        let index = self.heap.len();
        self.priorities.insert(item.clone(), priority);
        self.positions.insert(item.clone(), index);
        self.heap.push(item);
        self.sift_up(index);

        Ok(())
    }

    pub fn peek_min(&self) -> Result<&I, QueueError> {
        self.heap.first().ok_or(QueueError::Underflow)
    }

    /// Removes and returns the item with the smallest priority.
    pub fn extract_min(&mut self) -> Result<I, QueueError> {
        self.pop().map(|(item, _)| item).ok_or(QueueError::Underflow)
    }

    /// Removes the item with the smallest priority and hands it back together
    /// with that priority, or `None` if the queue is empty.
    pub fn pop(&mut self) -> Option<(I, P)> {
        let last = self.heap.len().checked_sub(1)?;
        self.swap(0, last);

        let item = self.heap.pop()?;
        self.positions.remove(&item);
        let priority = self.priorities.remove(&item)?;

        if !self.heap.is_empty() {
            self.sift_down(0);
        }

        Some((item, priority))
    }

    pub fn get_priority(&self, item: &I) -> Result<&P, QueueError> {
        self.priorities.get(item).ok_or(QueueError::NotFound)
    }

    /// Changes the priority of a queued item and moves it to its new place.
    ///
    /// A lower priority sifts the item up, a higher one sifts it down, an
    /// equal one leaves the heap as it is.
    pub fn set_priority(&mut self, item: &I, priority: P) -> Result<(), QueueError> {
        let index = *self.positions.get(item).ok_or(QueueError::NotFound)?;
        let current = self.priorities.get_mut(item).ok_or(QueueError::NotFound)?;

        let ordering = priority.cmp(current);
        *current = priority;

        match ordering {
            Ordering::Less => self.sift_up(index),
            Ordering::Greater => self.sift_down(index),
            Ordering::Equal => (),
        }

        Ok(())
    }

    /// Items in heap-array order, root first.
    pub fn iter(&self) -> impl Iterator<Item = (&I, &P)> + '_ {
        self.heap
            .iter()
            .map(move |item| (item, &self.priorities[item]))
    }

    fn priority_at(&self, index: usize) -> &P {
        &self.priorities[&self.heap[index]]
    }

    fn sift_up(&mut self, mut index: usize) {
        let mut parent = parent_index(index);
        while self.priority_at(index) < self.priority_at(parent) {
            self.swap(parent, index);
            index = parent;
            parent = parent_index(index);
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        while let Some(child) = self.min_child(index) {
            if self.priority_at(child) >= self.priority_at(index) {
                break;
            }
            self.swap(index, child);
            index = child;
        }
    }

    /// Index of the child with the smaller priority, `None` for a leaf.
    fn min_child(&self, index: usize) -> Option<usize> {
        let (left, right) = child_indices(index);
        let size = self.heap.len();

        if right < size {
            if self.priority_at(left) < self.priority_at(right) {
                Some(left)
            } else {
                Some(right)
            }
        } else if left < size {
            Some(left)
        } else {
            None
        }
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.heap.swap(i, j);
        if let Some(position) = self.positions.get_mut(&self.heap[i]) {
            *position = i;
        }
        if let Some(position) = self.positions.get_mut(&self.heap[j]) {
            *position = j;
        }
    }
}

/// Parent of `index`, clamped so that the root is its own parent.
fn parent_index(index: usize) -> usize {
    ((index + 1) / 2).saturating_sub(1)
}

fn child_indices(index: usize) -> (usize, usize) {
    (2 * index + 1, 2 * index + 2)
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

    use super::{child_indices, parent_index, IndexedPriorityQueue};

    fn assert_consistent(queue: &IndexedPriorityQueue<u32, u32>) {
        assert_eq!(queue.heap.len(), queue.priorities.len());
        assert_eq!(queue.heap.len(), queue.positions.len());

        for (index, item) in queue.heap.iter().enumerate() {
            assert_eq!(queue.positions[item], index, "stale position of {}", item);
            if index > 0 {
                let parent = &queue.heap[parent_index(index)];
                assert!(
                    queue.priorities[parent] <= queue.priorities[item],
                    "heap order broken at index {}",
                    index
                );
            }
        }
    }

    #[test]
    fn clamped_parent_matches_textbook_parent() {
        assert_eq!(parent_index(0), 0);
        for index in 1..(1 << 20) {
            assert_eq!(parent_index(index), (index - 1) / 2, "index {}", index);
        }
    }

    #[test]
    fn parent_inverts_children() {
        for index in 0..(1 << 16) {
            let (left, right) = child_indices(index);
            assert_eq!(parent_index(left), index);
            assert_eq!(parent_index(right), index);
        }
    }

    #[test]
    fn invariants_hold_under_random_operations() {
        let mut rng = StdRng::seed_from_u64(0x5EED);

        for round in 0..50 {
            let mut queue = IndexedPriorityQueue::new();
            let mut items: Vec<u32> = (0..rng.gen_range(1..200)).collect();
            items.shuffle(&mut rng);

            for &item in items.iter() {
                queue.insert(item, rng.gen_range(0..100)).unwrap();
                assert_consistent(&queue);
            }

            for _ in 0..items.len() {
                let item = items[rng.gen_range(0..items.len())];
                if queue.contains(&item) {
                    queue.set_priority(&item, rng.gen_range(0..100)).unwrap();
                    assert_consistent(&queue);
                }

                if rng.gen_bool(0.3) {
                    let minimum = *queue.get_priority(queue.peek_min().unwrap()).unwrap();
                    let (_, priority) = queue.pop().unwrap();
                    assert_eq!(priority, minimum, "round {}", round);
                    assert!(queue.iter().all(|(_, &other)| priority <= other));
                    assert_consistent(&queue);
                }
            }

            let mut last = 0;
            while let Some((_, priority)) = queue.pop() {
                assert!(last <= priority);
                last = priority;
                assert_consistent(&queue);
            }
        }
    }
}
