// src/cli/args.rs
use std::path::PathBuf;

use clap::Parser;

use crate::graph::DEFAULT_MAX_NODES;

#[derive(Debug, Parser)]
#[command(
    name = "dotrank",
    version,
    about = "Rank the nodes of a DOT-subset digraph by random surfer or Markov chain"
)]
pub struct Cli {
    /// Compute and print the statistics of the graph
    #[arg(short = 's', long = "stats")]
    pub stats: bool,

    /// Simulate N steps of the random surfer and output the result
    #[arg(short = 'r', long = "surfer", value_name = "N")]
    pub surfer: Option<u64>,

    /// Simulate N steps of the Markov chain and output the result
    #[arg(short = 'm', long = "markov", value_name = "N")]
    pub markov: Option<u64>,

    /// Teleportation parameter p, as a whole percentage
    #[arg(
        short = 'p',
        long = "teleport",
        value_name = "P",
        default_value_t = 10,
        value_parser = clap::value_parser!(u8).range(0..=100)
    )]
    pub teleport: u8,

    /// Fix the RNG seed for reproducible random-surfer runs
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Maximum number of distinct nodes accepted during ingestion
    #[arg(long, value_name = "MAX", default_value_t = DEFAULT_MAX_NODES)]
    pub max_nodes: usize,

    /// Emit results as a single JSON document instead of text
    #[arg(long)]
    pub json: bool,

    /// Input file in the DOT subset: digraph ID { A -> B ; ... }
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}
