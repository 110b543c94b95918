use lazy_sssp::data_structures::{IndexedPriorityQueue, PriorityQueue};
use lazy_sssp::Error;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cell::RefCell;
use std::cmp::{Ordering, Reverse};
use std::collections::HashMap;

#[test]
fn test_natural_order_yields_ascending() {
    let mut queue = PriorityQueue::new();
    for value in [5, 3, 8, 1, 9, 2] {
        queue.enqueue(value);
    }

    assert_eq!(queue.len(), 6);
    assert_eq!(queue.peek(), Some(&1));

    let mut drained = Vec::new();
    while !queue.is_empty() {
        drained.push(queue.dequeue().unwrap());
    }
    assert_eq!(drained, vec![1, 2, 3, 5, 8, 9]);
}

#[test]
fn test_dequeue_on_empty_queue_fails() {
    let mut queue: PriorityQueue<u32> = PriorityQueue::default();
    assert!(queue.is_empty());
    assert!(matches!(queue.dequeue(), Err(Error::EmptyQueue)));
    assert_eq!(queue.pop(), None);

    queue.enqueue(4);
    assert_eq!(queue.dequeue().unwrap(), 4);
    assert!(matches!(queue.dequeue(), Err(Error::EmptyQueue)));
}

#[test]
fn test_duplicates_are_kept() {
    let mut queue = PriorityQueue::new();
    queue.enqueue("b");
    queue.enqueue("a");
    queue.enqueue("b");
    queue.enqueue("a");

    assert_eq!(queue.len(), 4);
    let drained: Vec<_> = std::iter::from_fn(|| queue.pop()).collect();
    assert_eq!(drained, vec!["a", "a", "b", "b"]);
}

#[test]
fn test_custom_comparator_builds_max_heap() {
    let mut queue = PriorityQueue::with_comparator(|a: &i32, b: &i32| b.cmp(a));
    for value in [4, -2, 11, 7, 0] {
        queue.enqueue(value);
    }

    let drained: Vec<_> = std::iter::from_fn(|| queue.pop()).collect();
    assert_eq!(drained, vec![11, 7, 4, 0, -2]);
}

#[test]
fn test_clear_empties_queue() {
    let mut queue = PriorityQueue::new();
    queue.enqueue(Reverse(3));
    queue.enqueue(Reverse(9));
    assert_eq!(queue.peek(), Some(&Reverse(9)));

    queue.clear();
    assert!(queue.is_empty());
    assert_eq!(queue.len(), 0);
}

#[test]
fn test_comparator_reads_live_priorities() {
    let priorities = RefCell::new(HashMap::from([("x", 10), ("y", 20), ("z", 30)]));
    let mut queue = PriorityQueue::with_comparator(|a: &&str, b: &&str| {
        let p = priorities.borrow();
        p[a].cmp(&p[b])
    });

    queue.enqueue("x");
    queue.enqueue("y");

    // Lower z before it is enqueued; the comparison must see the new value
    priorities.borrow_mut().insert("z", 5);
    queue.enqueue("z");

    assert_eq!(queue.pop(), Some("z"));
    assert_eq!(queue.pop(), Some("x"));
    assert_eq!(queue.pop(), Some("y"));
}

#[test]
fn test_indexed_queue_holds_each_element_once() {
    let mut queue = IndexedPriorityQueue::new();
    assert!(queue.enqueue("b"));
    assert!(queue.enqueue("a"));
    assert!(!queue.enqueue("b"));

    assert_eq!(queue.len(), 2);
    assert!(queue.contains(&"a"));
    assert_eq!(queue.dequeue().unwrap(), "a");
    assert!(!queue.contains(&"a"));
    assert_eq!(queue.dequeue().unwrap(), "b");
    assert!(matches!(queue.dequeue(), Err(Error::EmptyQueue)));
}

#[test]
fn test_indexed_update_moves_lowered_element_to_front() {
    let priorities = RefCell::new(vec![50, 40, 30, 20, 10, 60, 70]);
    let mut queue = IndexedPriorityQueue::with_comparator(|a: &usize, b: &usize| {
        let p = priorities.borrow();
        p[*a].cmp(&p[*b])
    });
    for vertex in 0..7 {
        queue.enqueue(vertex);
    }
    assert_eq!(queue.peek(), Some(&4));

    // Element 6 sits in a leaf; lowering it must bring it to the root
    priorities.borrow_mut()[6] = 1;
    assert!(queue.update(&6));
    assert_eq!(queue.len(), 7);

    // Raising an element pushes it back down
    priorities.borrow_mut()[4] = 100;
    assert!(queue.update(&4));

    let drained: Vec<_> = std::iter::from_fn(|| queue.pop()).collect();
    assert_eq!(drained, vec![6, 3, 2, 1, 0, 5, 4]);
    assert!(!queue.update(&6));
}

#[test]
fn test_indexed_queue_clear() {
    let mut queue = IndexedPriorityQueue::new();
    queue.enqueue(3);
    queue.enqueue(1);
    queue.clear();

    assert!(queue.is_empty());
    assert!(!queue.contains(&1));
    assert!(queue.enqueue(1));
}

#[test]
fn test_indexed_queue_dequeues_live_minimum_after_lowering() {
    let mut rng = StdRng::seed_from_u64(0xdec);
    const ITEMS: usize = 32;

    for _ in 0..50 {
        let priorities = RefCell::new(vec![0u32; ITEMS]);
        let mut queue = IndexedPriorityQueue::with_comparator(|a: &usize, b: &usize| {
            let p = priorities.borrow();
            p[*a].cmp(&p[*b])
        });
        let mut queued: Vec<usize> = Vec::new();

        for _ in 0..400 {
            let action = rng.gen_range(0..3);
            if action == 0 || queued.is_empty() {
                let item = rng.gen_range(0..ITEMS);
                if !queued.contains(&item) {
                    priorities.borrow_mut()[item] = rng.gen_range(0..100);
                    assert!(queue.enqueue(item));
                    queued.push(item);
                }
            } else if action == 1 {
                // Lower the priority of an element already in the heap
                let item = queued[rng.gen_range(0..queued.len())];
                let current = priorities.borrow()[item];
                priorities.borrow_mut()[item] = rng.gen_range(0..=current);
                assert!(queue.update(&item));
            } else {
                let popped = queue.dequeue().unwrap();
                let p = priorities.borrow();
                let live_min = queued.iter().map(|item| p[*item]).min().unwrap();
                assert_eq!(p[popped], live_min, "dequeued {} is not the live minimum", popped);

                let position = queued.iter().position(|item| *item == popped).unwrap();
                queued.swap_remove(position);
            }
            assert_eq!(queue.len(), queued.len());
        }
    }
}

#[test]
fn test_random_operations_match_sorted_reference() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..20 {
        let mut queue = PriorityQueue::with_comparator(|a: &(u32, u32), b: &(u32, u32)| -> Ordering {
            a.0.cmp(&b.0)
        });
        let mut reference: Vec<(u32, u32)> = Vec::new();

        for step in 0..500u32 {
            if rng.gen_bool(0.6) || reference.is_empty() {
                let item = (rng.gen_range(0..50), step);
                queue.enqueue(item);
                reference.push(item);
            } else {
                let popped = queue.dequeue().unwrap();
                reference.sort_by_key(|item| item.0);
                let min_priority = reference[0].0;

                // Ties may come out in any order, so match by priority and remove that exact item
                assert_eq!(popped.0, min_priority);
                let position = reference.iter().position(|item| *item == popped).unwrap();
                reference.remove(position);
            }
            assert_eq!(queue.len(), reference.len());
        }
    }
}
