pub mod indexed_queue;
pub mod priority_queue;

pub use indexed_queue::IndexedPriorityQueue;
pub use priority_queue::{Comparator, NaturalOrder, PriorityQueue};
