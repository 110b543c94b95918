use std::cmp::Ordering;
use std::fmt::{self, Debug};

use crate::{Error, Result};

/// Total order over queue elements
///
/// Implementations are asked again on every comparison, so a comparator may
/// read state shared with the caller (for example a distance table).
pub trait Comparator<T> {
    /// Returns `Less` if `a` should leave the queue before `b`
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Orders elements by their own `Ord` implementation
#[derive(Debug, Default, Clone, Copy)]
pub struct NaturalOrder;

impl<T: Ord> Comparator<T> for NaturalOrder {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Array-backed binary min-heap ordered by a comparator
///
/// The queue stores elements only; priorities come from the comparator. It
/// never deduplicates, so the same element may be enqueued several times.
///
/// The priority of an element must not change while it is queued: heap order
/// is only restored along the path of an inserted or removed slot. Use
/// [`IndexedPriorityQueue`] when queued priorities change.
///
/// [`IndexedPriorityQueue`]: crate::data_structures::IndexedPriorityQueue
pub struct PriorityQueue<T, C = NaturalOrder> {
    heap: Vec<T>,
    comparator: C,
}

impl<T: Ord> PriorityQueue<T> {
    /// Creates a new empty queue ordered by `T`'s natural order
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<T: Ord> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> PriorityQueue<T, C>
where
    C: Comparator<T>,
{
    /// Creates a new empty queue ordered by `comparator`
    pub fn with_comparator(comparator: C) -> Self {
        PriorityQueue {
            heap: Vec::new(),
            comparator,
        }
    }

    /// Returns true if the queue holds no elements
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of elements, duplicates included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Inserts an element and restores heap order from the new leaf upwards
    pub fn enqueue(&mut self, item: T) {
        self.heap.push(item);
        self.sift_up(self.heap.len() - 1);
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

        // Promote the last leaf into the root slot instead of shifting the array
        let last = self.heap.len() - 1;
        self.heap.swap(0, last);
        let item = self.heap.pop();
        self.sift_down(0);
        item
    }

    /// Returns the minimum element without removing it
    pub fn peek(&self) -> Option<&T> {
        self.heap.first()
    }

    /// Removes every element
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    fn greater(&self, a: usize, b: usize) -> bool {
        self.comparator.compare(&self.heap[a], &self.heap[b]) == Ordering::Greater
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !self.greater(parent, index) {
                break;
            }
            self.heap.swap(parent, index);
            index = parent;
        }
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

            self.heap.swap(smallest, index);
            index = smallest;
        }
    }
}

impl<T: Debug, C> Debug for PriorityQueue<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("heap", &self.heap)
            .finish_non_exhaustive()
    }
}
