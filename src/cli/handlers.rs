// src/cli/handlers.rs
//! Command orchestration: ingest the graph once, run the requested passes
//! over it sequentially, print the results.

use anyhow::Result;
use colored::Colorize;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use crate::cli::args::Cli;
use crate::graph::parser::parse_dot_file;
use crate::graph::stats::GraphStats;
use crate::rank::{markov, surfer, RankEntry};

#[derive(Serialize)]
struct Report<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    stats: Option<&'a GraphStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    random_surfer: Option<&'a [RankEntry]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    markov_chain: Option<&'a [RankEntry]>,
}

/// Runs the full pipeline for one invocation.
///
/// # Errors
/// Returns any ingestion error; simulation passes cannot fail.
pub fn run(cli: &Cli) -> Result<()> {
    let graph = parse_dot_file(&cli.file, cli.max_nodes)?;
    let teleport_prob = f64::from(cli.teleport) / 100.0;

    if !cli.stats && cli.surfer.is_none() && cli.markov.is_none() {
        println!("Nothing to do: pass -s, -r N, or -m N. See --help.");
        return Ok(());
    }

    let stats = cli.stats.then(|| GraphStats::collect(&graph));
    let surfer_run = cli.surfer.map(|steps| {
        let mut rng = match cli.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_os_rng(),
        };
        let ranks = surfer::simulate_random_surfer(&graph, steps, teleport_prob, &mut rng);
        (steps, ranks)
    });
    let markov_run = cli
        .markov
        .map(|steps| (steps, markov::simulate_markov_chain(&graph, steps, teleport_prob)));

    if cli.json {
        let report = Report {
            stats: stats.as_ref(),
            random_surfer: surfer_run.as_ref().map(|(_, ranks)| ranks.as_slice()),
            markov_chain: markov_run.as_ref().map(|(_, ranks)| ranks.as_slice()),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if let Some(stats) = &stats {
        print_stats(stats);
    }
    if let Some((steps, ranks)) = &surfer_run {
        print_ranks("Random Surfer Results", *steps, teleport_prob, ranks);
    }
    if let Some((steps, ranks)) = &markov_run {
        print_ranks("Markov Chain Results", *steps, teleport_prob, ranks);
    }
    Ok(())
}

fn print_stats(stats: &GraphStats) {
    println!("{}", "Graph Statistics:".bold());
    println!("- Number of nodes: {}", stats.nodes);
    println!("- Number of edges: {}", stats.edges);
    match &stats.degrees {
        Some(d) => {
            println!("- In-degree range: {}-{}", d.min_in, d.max_in);
            println!("- Out-degree range: {}-{}", d.min_out, d.max_out);
        }
        None => {
            println!("- In-degree range: N/A");
            println!("- Out-degree range: N/A");
        }
    }
}

fn print_ranks(label: &str, steps: u64, teleport_prob: f64, ranks: &[RankEntry]) {
    println!();
    println!(
        "{}",
        format!("{label} (N={steps}, p={teleport_prob:.2}):").bold()
    );
    if ranks.is_empty() {
        println!("(no nodes or no steps)");
        return;
    }
    for entry in ranks {
        println!("- {}: {:.6}", entry.id, entry.score);
    }
}
