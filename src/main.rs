// Benchmark runner for k-means fraud detection. One invocation is one trial:
// load and clean the transaction CSV, cluster with k=2, map clusters to fraud
// labels by majority vote, and append timing and accuracy to a result CSV.
use std::env;
use std::error::Error;
use std::path::PathBuf;

use env_logger::Env;
use log::info;

use csv_reader::{drop_incomplete, read_transactions, sample_fraction};
use error::BenchError;
use evaluate::{accuracy, majority_vote_labels};
use kmeans::{assemble_features, run_kmeans};
use results::{append_record, TrialRecord};

mod csv_reader;
mod error;
mod evaluate;
mod kmeans;
mod results;

const N_CLUSTERS: usize = 2;
const KMEANS_SEED: u64 = 42;
const SAMPLE_SEED: u64 = 42;
const DEFAULT_OUTPUT_STEM: &str = "fraud_kmeans_results";
const DEFAULT_DATA_PATH: &str = "PS_20174392719_1491204439457_log.csv";

// Trial parameters taken from the command line.
struct Config {
    cores: usize,
    pct: u32,
    output_stem: String,
    input: PathBuf,
}

impl Config {
    fn output_path(&self) -> PathBuf {
        PathBuf::from(format!("{}.csv", self.output_stem))
    }
}

// Positional arguments with defaults: cores, sample percentage, output file
// stem, input CSV path. Unparseable numbers become typed errors.
fn parse_args(args: &[String]) -> Result<Config, BenchError> {
    let cores = match args.get(1) {
        Some(raw) => raw
            .parse::<usize>()
            .ok()
            .filter(|&n| n >= 1)
            .ok_or_else(|| BenchError::InvalidArgument {
                name: "cores",
                value: raw.clone(),
            })?,
        None => 1,
    };

    let pct = match args.get(2) {
        Some(raw) => raw
            .parse::<u32>()
            .map_err(|_| BenchError::InvalidArgument {
                name: "pct",
                value: raw.clone(),
            })?,
        None => 100,
    };

    let output_stem = args
        .get(3)
        .cloned()
        .unwrap_or_else(|| DEFAULT_OUTPUT_STEM.to_string());
    let input = args
        .get(4)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));

    Ok(Config {
        cores,
        pct,
        output_stem,
        input,
    })
}

// Main entry point for a single benchmark trial
// Key steps:
// 1. Parse arguments and size the worker pool
// 2. Load, clean, and sample the transaction data
// 3. Fit and apply k-means, timing both phases
// 4. Score via majority-vote label mapping
// 5. Append the result row to the output CSV
fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init_from_env(Env::default().filter_or("RUST_LOG", "info"));

    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args)?;

    // Worker-thread count is the knob the parameter sweep varies.
    rayon::ThreadPoolBuilder::new()
        .num_threads(config.cores)
        .build_global()?;

    let transactions = read_transactions(&config.input)?;
    info!("loaded {} rows from {}", transactions.len(), config.input.display());

    let transactions = drop_incomplete(transactions);
    let transactions = sample_fraction(transactions, config.pct, SAMPLE_SEED);
    info!(
        "{} rows after null-dropping and {}% sampling",
        transactions.len(),
        config.pct
    );
    if transactions.is_empty() {
        return Err(BenchError::EmptyDataset.into());
    }

    let features = assemble_features(&transactions);
    info!("K-Means clustering (k={})", N_CLUSTERS);
    let outcome = run_kmeans(features, N_CLUSTERS, KMEANS_SEED)?;

    let truth: Vec<i32> = transactions
        .iter()
        .map(|tx| tx.is_fraud.unwrap_or(0))
        .collect();
    let mapped = majority_vote_labels(&outcome.clusters, &truth);
    let acc = accuracy(&mapped, &truth);

    let record = TrialRecord::new(
        config.cores,
        config.pct,
        acc,
        outcome.fit_predict_seconds,
        outcome.predict_seconds,
    );

    let output_path = config.output_path();
    append_record(&output_path, &record)?;

    println!("Accuracy (majority-vote mapping): {:.4}", record.accuracy);
    println!("Runtime (fit + predict): {:.3}s", record.runtime);
    println!("Runtime (predict only): {:.3}s", record.runtime_no_overhead);
    println!("Results written to {}", output_path.display());

    Ok(())
}
