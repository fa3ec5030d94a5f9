//! Sketchmap concept-graph CLI.
//!
//! Provides the `sketchmap` binary with subcommands for working with
//! concept sets offline. `layout` runs the full-batch tree layout over a
//! JSON concept file; `stream` replays a concept file through the
//! incremental builder in batches, the same path the HTTP server drives
//! during a live recording.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use sketchmap_builder::GraphBuilder;
use sketchmap_core::{ConceptRecord, DEFAULT_THRESHOLD};

/// Sketchmap concept graph tools.
#[derive(Parser)]
#[command(name = "sketchmap", about = "Concept graph layout and replay tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Lay out a complete concept set and print positioned nodes/edges.
    Layout {
        /// Path to a JSON file containing an array of concept records.
        #[arg(short, long)]
        input: PathBuf,

        /// Pretty-print the JSON output.
        #[arg(long)]
        pretty: bool,
    },
    /// Replay a concept file through the incremental builder in batches.
    Stream {
        /// Path to a JSON file containing an array of concept records.
        #[arg(short, long)]
        input: PathBuf,

        /// Records per batch.
        #[arg(short, long, default_value_t = 5)]
        batch_size: usize,

        /// Merge threshold in [0, 1].
        #[arg(short, long, default_value_t = DEFAULT_THRESHOLD)]
        threshold: f64,

        /// Pretty-print the JSON output.
        #[arg(long)]
        pretty: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Layout { input, pretty } => run_layout(&input, pretty),
        Commands::Stream {
            input,
            batch_size,
            threshold,
            pretty,
        } => run_stream(&input, batch_size, threshold, pretty),
    };
    process::exit(exit_code);
}

/// Reads and parses a concept file.
///
/// Returns exit code on failure: 1 = invalid input, 3 = I/O error.
fn read_concepts(path: &PathBuf) -> Result<Vec<ConceptRecord>, i32> {
    let text = match std::fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error: failed to read '{}': {}", path.display(), e);
            return Err(3);
        }
    };
    match serde_json::from_str(&text) {
        Ok(records) => Ok(records),
        Err(e) => {
            eprintln!("Error: invalid concept file '{}': {}", path.display(), e);
            Err(1)
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T, pretty: bool) -> i32 {
    let result = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    match result {
        Ok(json) => {
            println!("{}", json);
            0
        }
        Err(e) => {
            eprintln!("Error: failed to serialize result: {}", e);
            1
        }
    }
}

/// Execute the layout subcommand.
fn run_layout(input: &PathBuf, pretty: bool) -> i32 {
    let records = match read_concepts(input) {
        Ok(r) => r,
        Err(code) => return code,
    };

    let result = sketchmap_layout::layout(&records);
    print_json(&result, pretty)
}

/// Execute the stream subcommand.
///
/// Feeds the file's records through the builder `batch_size` at a time,
/// reports per-batch outcomes on stderr, and prints the final snapshot on
/// stdout.
fn run_stream(input: &PathBuf, batch_size: usize, threshold: f64, pretty: bool) -> i32 {
    if !(0.0..=1.0).contains(&threshold) {
        eprintln!("Error: threshold must be in [0, 1], got {}", threshold);
        return 1;
    }
    let batch_size = batch_size.max(1);

    let records = match read_concepts(input) {
        Ok(r) => r,
        Err(code) => return code,
    };

    let mut builder = GraphBuilder::with_threshold(threshold);
    for (index, batch) in records.chunks(batch_size).enumerate() {
        let result = builder.process_batch(batch);
        eprintln!(
            "batch {}: {} created, {} merged, {} skipped",
            index, result.report.created, result.report.merged, result.report.skipped
        );
    }

    print_json(&builder.snapshot(), pretty)
}
