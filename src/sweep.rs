//! Batch mode: sweeping infection probabilities and seeds.
//!
//! A sweep runs one independent engine run per (probability, seed) pair,
//! each on a freshly constructed population with its own seeded generator,
//! and summarizes the outcomes per probability. This is the data behind
//! epidemic-threshold analysis; the plotting itself lives outside this
//! crate.

use std::fs::File;
use std::path::Path;

use serde::Serialize;

use crate::error::EpigridError;
use crate::log::{error, info};
use crate::params::Params;
use crate::report::write_run_report;
use crate::sim::Simulation;
use crate::tabulator::RunSeries;

/// The outcome of one engine run within a sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct RunRecord {
    pub probability: f64,
    pub seed: u64,
    pub series: RunSeries,
}

/// Runs every (probability, seed) pair and collects the results. When
/// `output_dir` is set each run is also persisted as a CSV; a failed write
/// is logged and skipped without affecting the in-memory results.
pub fn run_sweep(
    base: &Params,
    probabilities: &[f64],
    seeds: &[u64],
    output_dir: Option<&Path>,
) -> Vec<RunRecord> {
    let mut records = Vec::with_capacity(probabilities.len() * seeds.len());
    for &probability in probabilities {
        for &seed in seeds {
            let params = Params {
                infection_probability: probability,
                seed,
                ..base.clone()
            };
            let series = Simulation::new(params).run();
            if let Some(dir) = output_dir {
                if let Err(e) = write_run_report(&series, dir, probability, seed) {
                    error!("failed to write report for probability {probability} seed {seed}: {e}");
                }
            }
            records.push(RunRecord {
                probability,
                seed,
                series,
            });
        }
        info!(
            "finished {} runs for infection probability {probability}",
            seeds.len()
        );
    }
    records
}

/// Cross-run statistics for one infection probability, over the final
/// cumulative infected and dead counts of each seed's run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SweepSummary {
    pub probability: f64,
    pub avg_infected: f64,
    pub med_infected: f64,
    pub std_infected: f64,
    pub average_median_difference_infected: f64,
    pub avg_dead: f64,
    pub med_dead: f64,
    pub std_dead: f64,
    pub average_median_difference_dead: f64,
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn median(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

// Population standard deviation.
fn std_dev(values: &[f64]) -> f64 {
    let avg = mean(values);
    let variance = values.iter().map(|v| (v - avg).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Summarizes the records that were run with `probability`. At least one
/// matching record is a precondition.
#[must_use]
pub fn summarize(records: &[RunRecord], probability: f64) -> SweepSummary {
    let mut infected = Vec::new();
    let mut dead = Vec::new();
    for record in records {
        if record.probability == probability {
            infected.push(f64::from(record.series.total_infected()));
            dead.push(f64::from(record.series.total_dead()));
        }
    }
    assert!(
        !infected.is_empty(),
        "no records for probability {probability}"
    );

    SweepSummary {
        probability,
        avg_infected: mean(&infected),
        med_infected: median(&infected),
        std_infected: std_dev(&infected),
        average_median_difference_infected: (mean(&infected) - median(&infected)).abs(),
        avg_dead: mean(&dead),
        med_dead: median(&dead),
        std_dead: std_dev(&dead),
        average_median_difference_dead: (mean(&dead) - median(&dead)).abs(),
    }
}

/// Reads seeds from a single-column CSV file, sorted ascending.
///
/// # Errors
///
/// Returns an `EpigridError` if the file cannot be read or a row is not an
/// integer seed.
pub fn load_seeds(path: &Path) -> Result<Vec<u64>, EpigridError> {
    let file = File::open(path)?;
    let mut reader = csv::ReaderBuilder::new().has_headers(false).from_reader(file);
    let mut seeds = Vec::new();
    for record in reader.records() {
        let record = record?;
        let field = record
            .get(0)
            .ok_or_else(|| EpigridError::ParamsError("empty row in seed file".to_string()))?;
        let seed = field.trim().parse::<u64>().map_err(|e| {
            EpigridError::ParamsError(format!("invalid seed {field:?}: {e}"))
        })?;
        seeds.push(seed);
    }
    seeds.sort_unstable();
    Ok(seeds)
}
