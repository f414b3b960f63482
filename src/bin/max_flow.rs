//! Computes a maximum flow and a minimum cut of a flow network.
//!
//! The network is read from the given file (or stdin) in the format described in [`uflow::io`].
//! The flow value and the cut edges are written to stdout, logs go to stderr.
//!
//! ```bash
//! cargo run --release --bin max-flow -- network.txt --source 0 --sink 5
//! RUST_LOG=trace cargo run --bin max-flow -- --max-augmentations 1000 < network.txt
//! ```

use std::{
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::PathBuf,
};

use anyhow::{Context, Result, ensure};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};
use uflow::{algo::*, io::*, prelude::*};

/// CLI arguments of the solver.
#[derive(Parser, Debug)]
#[command(name = "max-flow")]
#[command(about = "Ford-Fulkerson maximum flow and minimum cut of a capacitated directed graph")]
struct Args {
    /// Flow network to read. Reads from stdin if omitted.
    input: Option<PathBuf>,

    /// Node the flow leaves from.
    #[arg(short, long, default_value_t = 0)]
    source: Node,

    /// Node the flow enters. Defaults to the last node.
    #[arg(short = 't', long)]
    sink: Option<Node>,

    /// Give up after this many augmenting paths.
    #[arg(long)]
    max_augmentations: Option<usize>,
}

impl Args {
    /// Human readable name of the input for error messages
    fn input_name(&self) -> String {
        match &self.input {
            Some(path) => path.display().to_string(),
            None => "stdin".to_string(),
        }
    }
}

/// Reads the network from `reader`, solves it as configured by `args` and writes the result
fn run<R: BufRead, W: Write>(args: &Args, reader: R, writer: W) -> Result<()> {
    let mut graph = ResidualGraph::try_read_flow_network(reader)
        .with_context(|| format!("cannot read flow network from {}", args.input_name()))?;

    let n = graph.number_of_nodes();
    ensure!(n > 0, "flow network has no nodes");

    let source = args.source;
    let sink = args.sink.unwrap_or(n - 1);
    ensure!(source < n, "source {source} is not a node of the network (n = {n})");
    ensure!(sink < n, "sink {sink} is not a node of the network (n = {n})");

    info!(
        nodes = n,
        edges = graph.number_of_original_edges(),
        source,
        sink,
        "read flow network"
    );

    let flow = graph.try_max_flow(source, sink, args.max_augmentations)?;
    let cut = graph.min_cut(source);

    write_flow_result(writer, flow, &cut).context("cannot write flow result")
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let reader: Box<dyn BufRead> = match &args.input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("cannot open {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };

    run(&args, reader, BufWriter::new(io::stdout().lock()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const DIAMOND: &str = "4 4\n0 1 10\n0 2 10\n1 3 10\n2 3 10\n";

    fn solve(cli: &[&str], input: &str) -> Result<String> {
        let args = Args::try_parse_from(std::iter::once("max-flow").chain(cli.iter().copied()))?;
        let mut output = Vec::new();
        run(&args, Cursor::new(input), &mut output)?;
        Ok(String::from_utf8(output)?)
    }

    #[test]
    fn sink_defaults_to_last_node() {
        assert_eq!(solve(&[], DIAMOND).unwrap(), "20\n0 1\n0 2\n");
        assert_eq!(solve(&["--sink", "3"], DIAMOND).unwrap(), "20\n0 1\n0 2\n");
        assert_eq!(solve(&["-s", "1", "-t", "3"], DIAMOND).unwrap(), "10\n1 3\n");
        assert_eq!(solve(&["--sink", "0"], DIAMOND).unwrap(), "0\n");
    }

    #[test]
    fn malformed_input_is_an_error() {
        let err = solve(&[], "4 2\n0 1 10\n0 1 3\n").unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("cannot read flow network from stdin"));
        assert!(message.contains("occurs more than once"));

        assert!(solve(&[], "4 2\n0 1 10\n").is_err());
        assert!(solve(&[], "0 0\n").is_err());
    }

    #[test]
    fn terminals_out_of_range() {
        let err = solve(&["--sink", "4"], DIAMOND).unwrap_err();
        assert!(err.to_string().contains("sink 4"));

        let err = solve(&["--source", "9"], DIAMOND).unwrap_err();
        assert!(err.to_string().contains("source 9"));
    }

    #[test]
    fn augmentation_budget() {
        let err = solve(&["--max-augmentations", "1"], DIAMOND).unwrap_err();
        assert!(err.downcast_ref::<FlowError>().is_some());
        assert_eq!(
            solve(&["--max-augmentations", "2"], DIAMOND).unwrap(),
            "20\n0 1\n0 2\n"
        );
    }
}
