//! Graphway CLI - run graph algorithms over a textual graph description
//!
//! Usage:
//!   graphway <file>                   # Load and print the graph
//!   graphway <file> --topo            # Topological sort
//!   graphway <file> --paths <SOURCE>  # Shortest paths from SOURCE
//!   graphway <file> --mst             # Minimum spanning tree
//!
//! Flags combine; each selected report is printed in turn.

use clap::Parser;
use graphway::{load_graph, minimum_spanning_tree, report, shortest_paths, topo_sort};
use std::process;

#[derive(Parser)]
#[command(name = "graphway")]
#[command(version)]
#[command(about = "Graphway - weighted directed graph algorithms CLI")]
#[command(
    long_about = "Load a weighted directed graph from a textual description and run \
topological ordering, single-source shortest paths, or minimum spanning tree construction"
)]
struct Cli {
    /// Input graph description file
    #[arg(value_name = "FILE")]
    file: String,

    /// Print the loaded graph in the description format
    #[arg(short = 'g', long)]
    print: bool,

    /// Compute a topological sort
    #[arg(short, long)]
    topo: bool,

    /// Compute shortest paths from the given source vertex
    #[arg(short, long, value_name = "SOURCE")]
    paths: Option<String>,

    /// Compute a minimum spanning tree
    #[arg(short, long)]
    mst: bool,
}

fn main() {
    let cli = Cli::parse();

    let source = match std::fs::read_to_string(&cli.file) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error reading file '{}': {}", cli.file, e);
            process::exit(1);
        }
    };

    let graph = match load_graph(&source) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Error loading graph from '{}': {}", cli.file, e);
            process::exit(1);
        }
    };

    let no_algorithm = !cli.topo && cli.paths.is_none() && !cli.mst;
    if cli.print || no_algorithm {
        print!("{}", report::render_graph(&graph));
    }

    if cli.topo {
        print!("{}", report::render_topo_sort(&topo_sort(&graph)));
    }

    if let Some(source_vertex) = &cli.paths {
        match shortest_paths(&graph, source_vertex) {
            Ok(paths) => print!("{}", report::render_shortest_paths(&paths)),
            Err(e) => {
                eprintln!("Error computing shortest paths: {}", e);
                process::exit(1);
            }
        }
    }

    if cli.mst {
        print!("{}", report::render_mst(&minimum_spanning_tree(&graph)));
    }
}
