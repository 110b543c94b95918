use std::time::{Duration, Instant};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ordered_float::OrderedFloat;
use lazy_sssp::algorithm::ShortestPathAlgorithm;
use lazy_sssp::graph::generators::generate_random_graph;
use lazy_sssp::graph::Graph;
use lazy_sssp::{BinaryHeapDijkstra, DirectedGraph, Dijkstra};

type BenchGraph = DirectedGraph<usize, OrderedFloat<f64>>;

// Function to benchmark an algorithm on a graph
fn benchmark_algorithm<A>(name: &str, algorithm: &A, graph: &BenchGraph, source: usize) -> Result<Duration, lazy_sssp::Error>
where
    A: ShortestPathAlgorithm<usize, OrderedFloat<f64>, BenchGraph>
{
    println!("Running {} on graph with {} vertices...", name, graph.vertex_count());

    let start = Instant::now();
    let result = algorithm.compute_distances(graph, &source)?;
    let duration = start.elapsed();

    let reachable = result.reachable().count();
    println!("  - Found {} reachable vertices in {:?}", reachable, duration);

    Ok(duration)
}

fn main() -> Result<(), lazy_sssp::Error> {
    env_logger::init();

    let graph_sizes = [1_000, 10_000, 50_000, 100_000, 200_000];

    // Average number of edges per vertex
    let edges_per_vertex = 2;

    println!("=====================================================");
    println!("Benchmark: Dijkstra (live comparator) vs BinaryHeapDijkstra");
    println!("Edges per vertex: {}", edges_per_vertex);
    println!("=====================================================");

    let dijkstra = Dijkstra::new();
    let reference = BinaryHeapDijkstra::new();
    let mut rng = StdRng::seed_from_u64(42);

    let mut results = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating random graph with {} vertices...", size);
        let graph = generate_random_graph(size, edges_per_vertex, 100.0, &mut rng);
        println!("Graph has {} vertices and {} edges", graph.vertex_count(), graph.edge_count());

        let dijkstra_time = benchmark_algorithm("Dijkstra", &dijkstra, &graph, 0)?;
        let reference_time = benchmark_algorithm("BinaryHeapDijkstra", &reference, &graph, 0)?;

        let ratio = dijkstra_time.as_secs_f64() / reference_time.as_secs_f64();
        println!("Time ratio Dijkstra / BinaryHeapDijkstra: {:.2}x", ratio);

        results.push((size, dijkstra_time, reference_time));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<15} | {:<15} | {:<10}", "Vertices", "Dijkstra (ms)", "Reference (ms)", "Ratio");
    println!("-----------------------------------------------------");

    for (size, dijkstra_time, reference_time) in &results {
        println!(
            "{:<10} | {:<15} | {:<15} | {:<10.2}",
            size,
            dijkstra_time.as_millis(),
            reference_time.as_millis(),
            dijkstra_time.as_secs_f64() / reference_time.as_secs_f64()
        );
    }

    Ok(())
}
