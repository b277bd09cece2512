use std::{fs::File, io::BufWriter, path::PathBuf, time::Instant};

use ahash::{HashSet, HashSetExt};
use clap::Parser;
use faster_sssp::{
    graphs::{adjacency_file::write_adjacency, edge::WeightedEdge},
    utility::get_progressbar,
};
use indicatif::ProgressIterator;
use log::info;
use rand::prelude::*;

/// Generates a random connected graph and saves it in adjacency format. Every
/// edge is written once, read it back as symmetric to get an undirected graph.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path where the graph will be saved
    #[arg(short, long)]
    out: PathBuf,
    /// Number of vertices
    #[arg(short, long, default_value = "1000")]
    vertices: u32,
    /// Number of edges, at least `vertices - 1`
    #[arg(short, long, default_value = "5000")]
    edges: u32,
    /// Largest edge weight
    #[arg(short, long, default_value = "1000")]
    max_weight: u64,
    /// Seed of the random number generator
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> std::io::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let start = Instant::now();
    let edges = random_connected_edges(&mut rng, args.vertices, args.edges, args.max_weight);
    info!("Generating {} edges took {:?}", edges.len(), start.elapsed());

    let writer = BufWriter::new(File::create(&args.out)?);
    write_adjacency(writer, &edges)?;
    info!("Graph written to {}", args.out.display());

    Ok(())
}

/// A random spanning tree over all vertices plus random extra edges, without
/// self loops or parallel edges.
fn random_connected_edges<R: Rng>(
    rng: &mut R,
    number_of_vertices: u32,
    number_of_edges: u32,
    max_weight: u64,
) -> Vec<WeightedEdge<u32, u64>> {
    let max_edges = number_of_vertices as u64 * number_of_vertices.saturating_sub(1) as u64 / 2;
    let number_of_edges = (number_of_edges as u64)
        .max(number_of_vertices.saturating_sub(1) as u64)
        .min(max_edges);

    let mut vertices = (0..number_of_vertices).collect::<Vec<_>>();
    vertices.shuffle(rng);

    let mut used = HashSet::with_capacity(number_of_edges as usize);
    let mut edges = Vec::with_capacity(number_of_edges as usize);
    let pb = get_progressbar("Generating edges", number_of_edges);

    for index in (1..vertices.len()).progress_with(pb.clone()) {
        let tail = vertices[rng.gen_range(0..index)];
        let head = vertices[index];
        used.insert((tail.min(head), tail.max(head)));
        edges.push(WeightedEdge::new(tail, head, rng.gen_range(1..=max_weight.max(1))));
    }

    while (edges.len() as u64) < number_of_edges {
        let tail = rng.gen_range(0..number_of_vertices);
        let head = rng.gen_range(0..number_of_vertices);
        if tail == head || !used.insert((tail.min(head), tail.max(head))) {
            continue;
        }
        edges.push(WeightedEdge::new(tail, head, rng.gen_range(1..=max_weight.max(1))));
        pb.inc(1);
    }
    pb.finish_and_clear();

    edges
}
