use crate::graph::DirectedGraph;
use ordered_float::OrderedFloat;
use rand::Rng;

/// Generates a random directed graph on vertices `0..n`
///
/// Every vertex is declared and gets `edges_per_vertex` outgoing edges to
/// random targets (self-loops skipped, repeated targets merged), with weights
/// drawn from `0.0..max_weight`.
pub fn generate_random_graph<R: Rng>(
    n: usize,
    edges_per_vertex: usize,
    max_weight: f64,
    rng: &mut R,
) -> DirectedGraph<usize, OrderedFloat<f64>> {
    assert!(max_weight > 0.0, "max_weight must be positive");

    let mut graph = DirectedGraph::with_capacity(n);
    for u in 0..n {
        graph.add_vertex(u);
    }

    if n < 2 {
        return graph;
    }

    for u in 0..n {
        for _ in 0..edges_per_vertex {
            let v = rng.gen_range(0..n);
            if u == v {
                continue;
            }
            // Drawn from a non-negative range
            let weight = OrderedFloat(rng.gen_range(0.0..max_weight));
            graph.insert_edge(u, v, weight);
        }
    }

    graph
}

/// Generates a `width` x `height` grid where each cell links to its 8 neighbours
///
/// Cell `(x, y)` is vertex `y * width + x`. Straight moves cost 1.0, diagonal
/// moves cost 1.4.
pub fn generate_grid(width: usize, height: usize) -> DirectedGraph<usize, OrderedFloat<f64>> {
    let mut graph = DirectedGraph::with_capacity(width * height);

    let directions = [
        // Cardinal directions (N, E, S, W)
        (0, -1, 1.0), (1, 0, 1.0), (0, 1, 1.0), (-1, 0, 1.0),
        // Diagonal directions (NE, SE, SW, NW)
        (1, -1, 1.4), (1, 1, 1.4), (-1, 1, 1.4), (-1, -1, 1.4),
    ];

    for y in 0..height {
        for x in 0..width {
            let vertex = y * width + x;
            graph.add_vertex(vertex);

            for (dx, dy, cost) in directions {
                let nx = x as i64 + dx;
                let ny = y as i64 + dy;

                if nx >= 0 && ny >= 0 && nx < width as i64 && ny < height as i64 {
                    let neighbor = ny as usize * width + nx as usize;
                    graph.insert_edge(vertex, neighbor, OrderedFloat(cost));
                }
            }
        }
    }

    graph
}
