use lazy_sssp::algorithm::{DistanceTable, SearchObserver, SearchStats, ShortestPathAlgorithm};
use lazy_sssp::graph::generators::generate_random_graph;
use lazy_sssp::graph::Graph;
use lazy_sssp::{compute_distances, compute_many, BinaryHeapDijkstra, DirectedGraph, Dijkstra};
use ordered_float::OrderedFloat;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::{BTreeMap, HashMap, HashSet};

type TestGraph = DirectedGraph<usize, OrderedFloat<f64>>;

fn random_graphs(count: usize) -> Vec<TestGraph> {
    let mut rng = StdRng::seed_from_u64(2024);
    (0..count)
        .map(|_| {
            let n = rng.gen_range(1..60);
            let edges = rng.gen_range(0..5);
            generate_random_graph(n, edges, 20.0, &mut rng)
        })
        .collect()
}

/// Tiny graphs with integer weights in `0..6`, so ties and zero-weight edges are common
fn small_integer_graph(rng: &mut StdRng) -> BTreeMap<u32, BTreeMap<u32, u64>> {
    let n = rng.gen_range(2..=8u32);
    let mut graph = BTreeMap::new();
    for u in 0..n {
        let mut targets = BTreeMap::new();
        for v in 0..n {
            if rng.gen_bool(0.4) {
                targets.insert(v, rng.gen_range(0..6u64));
            }
        }
        graph.insert(u, targets);
    }
    graph
}

/// Records every update so tests can inspect the search as it runs
#[derive(Default)]
struct Recorder {
    finalized: Vec<(usize, f64)>,
    finalized_set: HashSet<usize>,
    updates: Vec<(usize, f64, f64)>,
    updates_after_finalize: usize,
    enqueued: Vec<usize>,
}

impl SearchObserver<usize, OrderedFloat<f64>> for Recorder {
    fn on_finalize(&mut self, vertex: &usize, distance: OrderedFloat<f64>) {
        self.finalized.push((*vertex, distance.into_inner()));
        self.finalized_set.insert(*vertex);
    }

    fn on_improve(&mut self, vertex: &usize, previous: OrderedFloat<f64>, current: OrderedFloat<f64>) {
        if self.finalized_set.contains(vertex) {
            self.updates_after_finalize += 1;
        }
        self.updates.push((*vertex, previous.into_inner(), current.into_inner()));
    }

    fn on_enqueue(&mut self, vertex: &usize) {
        self.enqueued.push(*vertex);
    }
}

#[test]
fn test_distances_are_non_negative_with_zero_start() {
    for graph in random_graphs(30) {
        let distances = compute_distances(&graph, &0);
        assert_eq!(distances.get(&0), Some(OrderedFloat(0.0)));
        for (_, d) in distances.iter() {
            assert!(d >= OrderedFloat(0.0));
        }
    }
}

#[test]
fn test_relaxation_fixpoint_holds() {
    for graph in random_graphs(30) {
        let distances = compute_distances(&graph, &0);
        for u in graph.vertices() {
            if !distances.is_reachable(u) {
                continue;
            }
            for (v, w) in graph.neighbors(u) {
                let bound = distances.distance(u).into_inner() + w.into_inner();
                assert!(
                    distances.distance(v).into_inner() <= bound + 1e-9,
                    "edge {} -> {} still relaxes",
                    u,
                    v
                );
            }
        }
    }
}

#[test]
fn test_matches_binary_heap_reference() {
    let reference = BinaryHeapDijkstra::new();
    for graph in random_graphs(40) {
        for start in [0usize, graph.vertex_count() / 2] {
            let actual = compute_distances(&graph, &start);
            let expected = reference.compute_distances(&graph, &start).unwrap();
            assert_eq!(actual, expected, "mismatch from start {}", start);
        }
    }
}

#[test]
fn test_updates_only_decrease_and_finalization_is_final() {
    for graph in random_graphs(30) {
        let mut recorder = Recorder::default();
        let distances = Dijkstra::new()
            .compute_observed(&graph, &0, &mut recorder)
            .unwrap();

        for (vertex, previous, current) in &recorder.updates {
            assert!(current < previous, "vertex {} went from {} to {}", vertex, previous, current);
        }
        assert_eq!(recorder.updates_after_finalize, 0);

        // Each vertex is finalized once, in non-decreasing distance order, at its reported distance
        let unique: HashSet<usize> = recorder.finalized.iter().map(|(v, _)| *v).collect();
        assert_eq!(unique.len(), recorder.finalized.len());
        for pair in recorder.finalized.windows(2) {
            assert!(pair[0].1 <= pair[1].1);
        }
        for (vertex, distance) in &recorder.finalized {
            assert_eq!(distances.distance(vertex).into_inner(), *distance);
        }
        assert_eq!(unique.len(), distances.reachable().count());

        // A vertex is queued at most once, and only before it is finalized
        let queued: HashSet<usize> = recorder.enqueued.iter().copied().collect();
        assert_eq!(queued.len(), recorder.enqueued.len());
        assert_eq!(queued, unique);
    }
}

#[test]
fn test_matches_reference_on_small_integer_graphs() {
    let mut rng = StdRng::seed_from_u64(0xbad5eed);
    let reference = BinaryHeapDijkstra::new();

    for _ in 0..50_000 {
        let graph = small_integer_graph(&mut rng);
        let start = rng.gen_range(0..graph.len() as u32);

        let expected: DistanceTable<u32, u64> = reference.compute_distances(&graph, &start).unwrap();
        let actual = compute_distances(&graph, &start);
        assert_eq!(actual, expected, "graph {:?} from {}", graph, start);
    }
}

#[test]
fn test_vertices_without_incoming_edges_stay_unreachable() {
    let mut graph: TestGraph = DirectedGraph::new();
    graph.add_edge(0, 1, OrderedFloat(2.0)).unwrap();
    graph.add_edge(1, 2, OrderedFloat(2.0)).unwrap();
    graph.add_edge(3, 2, OrderedFloat(0.5)).unwrap();
    graph.add_edge(4, 3, OrderedFloat(0.5)).unwrap();

    let distances = compute_distances(&graph, &0);
    assert_eq!(distances.get(&2), Some(OrderedFloat(4.0)));
    assert!(!distances.is_reachable(&3));
    assert!(!distances.is_reachable(&4));
}

#[test]
fn test_stats_account_for_every_queue_entry() {
    for graph in random_graphs(20) {
        let mut stats = SearchStats::default();
        let distances = Dijkstra::new().compute_observed(&graph, &0, &mut stats).unwrap();

        assert_eq!(stats.vertices_finalized, distances.reachable().count());
        assert_eq!(stats.stale_entries, 0);
        assert_eq!(stats.queue_entries, stats.vertices_finalized);
        assert!(stats.distance_updates + 1 >= stats.queue_entries);
        assert!(stats.edges_scanned <= graph.edge_count());

        // The snapshot-priority reference pushes on every update and pops stale copies
        let mut reference_stats = SearchStats::default();
        BinaryHeapDijkstra::new()
            .compute_observed(&graph, &0, &mut reference_stats)
            .unwrap();
        assert_eq!(reference_stats.queue_entries, reference_stats.distance_updates + 1);
        assert_eq!(
            reference_stats.queue_entries,
            reference_stats.vertices_finalized + reference_stats.stale_entries
        );
    }
}

#[test]
fn test_compute_many_matches_sequential_runs() {
    let graph = random_graphs(1).pop().unwrap();
    let starts: Vec<usize> = (0..graph.vertex_count()).collect();

    let batch = compute_many(&Dijkstra::new(), &graph, &starts).unwrap();
    assert_eq!(batch.len(), starts.len());
    for (start, distances) in starts.iter().zip(&batch) {
        assert_eq!(distances, &compute_distances(&graph, start));
    }
}

#[test]
fn test_hashmap_and_directed_graph_agree() {
    for graph in random_graphs(10) {
        let adjacency: HashMap<usize, HashMap<usize, OrderedFloat<f64>>> = graph
            .vertices()
            .map(|u| (*u, graph.neighbors(u).map(|(v, w)| (*v, w)).collect()))
            .collect();

        assert_eq!(compute_distances(&adjacency, &0), compute_distances(&graph, &0));
    }
}
