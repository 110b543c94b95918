use lazy_sssp::algorithm::{SearchStats, ShortestPathAlgorithm};
use lazy_sssp::web::models::WebGraph;
use lazy_sssp::{Dijkstra, Graph};
use log::{info, warn};
use std::env;
use std::fs::File;
use std::io::BufReader;
use std::process::ExitCode;

fn usage() -> ExitCode {
    eprintln!("Usage: distances <graph.json> <start> [--strict]");
    ExitCode::from(2)
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let strict = args.iter().any(|arg| arg == "--strict");
    let positional: Vec<&String> = args.iter().filter(|arg| !arg.starts_with("--")).collect();
    let (path, start) = match positional.as_slice() {
        [path, start] => (path.as_str(), start.to_string()),
        _ => return usage(),
    };

    match run(path, start, strict) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            warn!("{}", err);
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(path: &str, start: String, strict: bool) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::open(path)?;
    let graph = WebGraph::from_reader(BufReader::new(file))?;
    info!(
        "Loaded {} vertices and {} edges from {}",
        graph.vertex_count(),
        graph.edge_count(),
        path
    );

    let mut stats = SearchStats::default();
    let distances = Dijkstra::new()
        .with_start_check(strict)
        .compute_observed(&graph, &start, &mut stats)?;
    info!("Search stats: {:?}", stats);

    println!("{}", serde_json::to_string_pretty(&distances)?);
    Ok(())
}
