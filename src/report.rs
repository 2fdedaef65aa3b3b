//! CSV persistence for run results.
//!
//! Each run is written as one CSV keyed by infection probability and seed:
//! `<output_dir>/<probability>/<seed>.csv`, one row per simulated day with
//! the eight series as columns. Persistence failures are reported to the
//! caller and never touch the in-memory series.

use std::fs::create_dir_all;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::EpigridError;
use crate::tabulator::RunSeries;

/// One CSV row. Column names match the historical output format.
#[derive(Serialize)]
struct DailyRow {
    day: u32,
    susceptible_per_day: u32,
    infected_per_day: u32,
    sick_per_day: u32,
    recovered_per_day: u32,
    dead_per_day: u32,
    infected_accumulated: u32,
    recovered_accumulated: u32,
    dead_accumulated: u32,
}

/// Writes `series` to `<output_dir>/<probability>/<seed>.csv`, creating the
/// directories as needed, and returns the written path.
///
/// # Errors
///
/// Returns an `EpigridError` if a directory cannot be created or the CSV
/// cannot be written.
pub fn write_run_report(
    series: &RunSeries,
    output_dir: &Path,
    probability: f64,
    seed: u64,
) -> Result<PathBuf, EpigridError> {
    let run_dir = output_dir.join(probability.to_string());
    create_dir_all(&run_dir)?;
    let path = run_dir.join(format!("{seed}.csv"));

    let mut writer = csv::Writer::from_path(&path)?;
    for day in 0..series.days() as usize {
        writer.serialize(DailyRow {
            day: u32::try_from(day).unwrap(),
            susceptible_per_day: series.susceptible()[day],
            infected_per_day: series.infected()[day],
            sick_per_day: series.sick()[day],
            recovered_per_day: series.recovered()[day],
            dead_per_day: series.dead()[day],
            infected_accumulated: series.acc_infected()[day],
            recovered_accumulated: series.acc_recovered()[day],
            dead_accumulated: series.acc_dead()[day],
        })?;
    }
    writer.flush()?;
    Ok(path)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::params::{Params, SicknessInterval};
    use crate::sim::Simulation;
    use std::fs::File;
    use tempfile::tempdir;

    fn small_run() -> RunSeries {
        Simulation::new(Params {
            size: 3,
            infection_probability: 1.0,
            interval: SicknessInterval {
                min_days: 2,
                max_days: 2,
            },
            initial_infections: vec![(1, 1)],
            ..Default::default()
        })
        .run()
    }

    #[test]
    fn report_round_trips_through_csv() {
        let series = small_run();
        let temp_dir = tempdir().unwrap();

        let path = write_run_report(&series, temp_dir.path(), 1.0, 42).unwrap();
        assert_eq!(path, temp_dir.path().join("1").join("42.csv"));
        assert!(path.exists(), "CSV file should exist");

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers = reader.headers().unwrap().clone();
        assert_eq!(&headers[0], "day");
        assert_eq!(&headers[1], "susceptible_per_day");
        assert_eq!(&headers[6], "infected_accumulated");

        let mut rows = 0;
        for (day, record) in reader.records().enumerate() {
            let record = record.unwrap();
            assert_eq!(record[0].parse::<usize>().unwrap(), day);
            assert_eq!(
                record[1].parse::<u32>().unwrap(),
                series.susceptible()[day]
            );
            assert_eq!(
                record[6].parse::<u32>().unwrap(),
                series.acc_infected()[day]
            );
            rows += 1;
        }
        assert_eq!(rows, series.days());
    }

    #[test]
    fn nested_directories_created_per_probability() {
        let series = small_run();
        let temp_dir = tempdir().unwrap();
        let out = temp_dir.path().join("res");

        write_run_report(&series, &out, 0.045, 1).unwrap();
        write_run_report(&series, &out, 0.045, 2).unwrap();
        write_run_report(&series, &out, 0.5, 1).unwrap();

        assert!(out.join("0.045").join("1.csv").exists());
        assert!(out.join("0.045").join("2.csv").exists());
        assert!(out.join("0.5").join("1.csv").exists());
    }

    #[test]
    fn write_failure_is_an_error_not_a_panic() {
        let series = small_run();
        let temp_dir = tempdir().unwrap();
        // A plain file where the output directory should be.
        let blocked = temp_dir.path().join("blocked");
        File::create(&blocked).unwrap();

        let result = write_run_report(&series, &blocked, 0.5, 1);
        assert!(matches!(result, Err(EpigridError::IoError(_))));
        // The series itself is untouched and still usable.
        assert_eq!(series.days(), 4);
    }
}
