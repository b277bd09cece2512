use std::{fs::File, io::BufWriter, path::PathBuf, process::ExitCode, time::Instant};

use clap::Parser;
use faster_sssp::{
    graphs::{adjacency_file::read_graph_from_adjacency_file, hash_graph::HashGraph, Graph},
    search::dijkstra::{compute_distances, total_distance},
};
use itertools::Itertools;
use log::{error, info, warn};
use serde::Serialize;

/// Prints the sum of all single source shortest path distances of an
/// adjacency file.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Graph in adjacency format
    #[arg(short, long)]
    graph: PathBuf,
    /// Source vertex
    #[arg(short = 'v', long, default_value = "0")]
    source: String,
    /// Read edges as directed. By default edge (u, v) implies edge (v, u)
    #[arg(short, long)]
    directed: bool,
    /// Path where the distances will be saved as json
    #[arg(long)]
    distances: Option<PathBuf>,
    /// Include the source with distance 0 in the saved distances
    #[arg(long, requires = "distances")]
    include_source: bool,
}

#[derive(Serialize)]
struct DistanceReport<'a> {
    source: &'a str,
    sum: u64,
    distances: Vec<(&'a str, u64)>,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(sum) => {
            println!("{}", sum);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<u64, Box<dyn std::error::Error>> {
    let start = Instant::now();
    let graph: HashGraph<String, u64> = read_graph_from_adjacency_file(&args.graph, !args.directed)?;
    info!(
        "Reading {} vertices and {} edges took {:?}",
        graph.number_of_vertices(),
        graph.number_of_edges(),
        start.elapsed()
    );

    if !graph.contains_vertex(&args.source) {
        warn!("source {} is not a vertex of the graph", args.source);
    }

    let start = Instant::now();
    let mut distances = compute_distances(&graph, &args.source)?;
    info!(
        "Computing distances took {:?}, {} vertices reached",
        start.elapsed(),
        distances.len()
    );

    let sum = total_distance(&distances)?;

    if let Some(path) = &args.distances {
        if args.include_source {
            distances.insert(args.source.clone(), 0);
        }

        let report = DistanceReport {
            source: &args.source,
            sum,
            distances: distances
                .iter()
                .map(|(vertex, &distance)| (vertex.as_str(), distance))
                .sorted()
                .collect(),
        };

        let writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer(writer, &report)?;
        info!("Distances written to {}", path.display());
    }

    Ok(sum)
}
