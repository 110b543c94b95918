use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt::{self, Debug};
use std::hash::Hash;

use crate::data_structures::priority_queue::{Comparator, NaturalOrder};
use crate::{Error, Result};

/// Binary min-heap that tracks the slot of every element
///
/// Each element is held at most once. When the priority of a queued element
/// changes (because the comparator reads state the caller mutates), calling
/// [`IndexedPriorityQueue::update`] moves that single slot back into heap
/// order. This is the decrease-key operation the plain [`PriorityQueue`]
/// cannot offer.
///
/// [`PriorityQueue`]: crate::data_structures::PriorityQueue
pub struct IndexedPriorityQueue<T, C = NaturalOrder> {
    heap: Vec<T>,
    positions: HashMap<T, usize>,
    comparator: C,
}

impl<T> IndexedPriorityQueue<T>
where
    T: Ord + Clone + Eq + Hash,
{
    /// Creates a new empty queue ordered by `T`'s natural order
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<T> Default for IndexedPriorityQueue<T>
where
    T: Ord + Clone + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> IndexedPriorityQueue<T, C>
where
    T: Clone + Eq + Hash,
    C: Comparator<T>,
{
    /// Creates a new empty queue ordered by `comparator`
    pub fn with_comparator(comparator: C) -> Self {
        IndexedPriorityQueue {
            heap: Vec::new(),
            positions: HashMap::new(),
            comparator,
        }
    }

    /// Returns true if the queue holds no elements
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of distinct queued elements
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if `item` is currently queued
    pub fn contains(&self, item: &T) -> bool {
        self.positions.contains_key(item)
    }

    /// Inserts an element, or repositions it if it is already queued
    ///
    /// Returns true if the element was not queued before.
    pub fn enqueue(&mut self, item: T) -> bool {
        if let Some(&index) = self.positions.get(&item) {
            self.restore(index);
            return false;
        }

        let index = self.heap.len();
        self.positions.insert(item.clone(), index);
        self.heap.push(item);
        self.sift_up(index);
        true
    }

    /// Restores heap order around `item` after its priority changed
    ///
    /// Returns false, and does nothing, if `item` is not queued.
    pub fn update(&mut self, item: &T) -> bool {
        match self.positions.get(item) {
            Some(&index) => {
                self.restore(index);
                true
            }
            None => false,
        }
    }

    /// Removes and returns the minimum element
    pub fn dequeue(&mut self) -> Result<T> {
        self.pop().ok_or(Error::EmptyQueue)
    }

    /// Removes and returns the minimum element, or `None` when empty
    pub fn pop(&mut self) -> Option<T> {
        if self.heap.is_empty() {
            return None;
        }

        let last = self.heap.len() - 1;
        self.swap(0, last);
        let item = self.heap.pop()?;
        self.positions.remove(&item);
        self.sift_down(0);
        Some(item)
    }

    /// Returns the minimum element without removing it
    pub fn peek(&self) -> Option<&T> {
        self.heap.first()
    }

    /// Removes every element
    pub fn clear(&mut self) {
        self.heap.clear();
        self.positions.clear();
    }

    fn greater(&self, a: usize, b: usize) -> bool {
        self.comparator.compare(&self.heap[a], &self.heap[b]) == Ordering::Greater
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        if let Some(slot) = self.positions.get_mut(&self.heap[a]) {
            *slot = a;
        }
        if let Some(slot) = self.positions.get_mut(&self.heap[b]) {
            *slot = b;
        }
    }

    fn restore(&mut self, index: usize) {
        if self.sift_up(index) == index {
            self.sift_down(index);
        }
    }

    fn sift_up(&mut self, mut index: usize) -> usize {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !self.greater(parent, index) {
                break;
            }
            self.swap(parent, index);
            index = parent;
        }
        index
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut smallest = index;

            if left < len && self.greater(smallest, left) {
                smallest = left;
            }
            if right < len && self.greater(smallest, right) {
                smallest = right;
            }
            if smallest == index {
                break;
            }

            self.swap(smallest, index);
            index = smallest;
        }
    }
}

impl<T: Debug, C> Debug for IndexedPriorityQueue<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexedPriorityQueue")
            .field("heap", &self.heap)
            .finish_non_exhaustive()
    }
}
