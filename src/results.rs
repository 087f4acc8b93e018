use std::error::Error;
use std::fs::OpenOptions;
use std::path::Path;

use serde::Serialize;

// One result row per trial invocation. Field order is the CSV column order.
#[derive(Debug, Serialize)]
pub struct TrialRecord {
    pub cores: usize,
    pub pct: u32,
    pub accuracy: f64,
    pub runtime: f64,
    pub runtime_no_overhead: f64,
}

impl TrialRecord {
    pub fn new(
        cores: usize,
        pct: u32,
        accuracy: f64,
        runtime: f64,
        runtime_no_overhead: f64,
    ) -> Self {
        TrialRecord {
            cores,
            pct,
            accuracy: round_to(accuracy, 4),
            runtime: round_to(runtime, 3),
            runtime_no_overhead: round_to(runtime_no_overhead, 3),
        }
    }
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

// Append the row to the result CSV, writing the header only when the file has
// no rows yet so repeated trials accumulate under a single header. Emptiness
// is read off the opened handle rather than a separate existence check.
pub fn append_record(path: &Path, record: &TrialRecord) -> Result<(), Box<dyn Error>> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let is_new = file.metadata()?.len() == 0;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(is_new)
        .from_writer(file);
    writer.serialize(record)?;
    writer.flush()?;

    Ok(())
}
