//! Command line entry point for the simulation.
//!
//! `run_with_args` parses the CLI, loads and validates parameters, and
//! either executes a single run or a probability x seed sweep, optionally
//! persisting every run as a CSV report.

use std::path::Path;

use clap::{Args, Command, FromArgMatches as _};

use crate::error::EpigridError;
use crate::log::{set_log_level, LevelFilter};
use crate::params::{load_params, Params};
use crate::report::write_run_report;
use crate::sim::Simulation;
use crate::sweep::{load_seeds, run_sweep, summarize, RunRecord};

/// Default cli arguments for the epigrid runner
#[derive(Args, Debug)]
pub struct BaseArgs {
    /// Optional path for a JSON parameters file; defaults apply without one
    #[arg(short, long, default_value = "")]
    pub config: String,

    /// Random seed, overriding the one in the parameters file
    #[arg(short, long)]
    pub random_seed: Option<u64>,

    /// Optional directory for per-run CSV reports
    #[arg(short, long, default_value = "")]
    pub output_dir: String,

    /// Set a global log level
    #[arg(short, long)]
    pub log_level: Option<LevelFilter>,

    /// Sweep these infection probabilities instead of doing a single run
    #[arg(short, long, value_delimiter = ',')]
    pub probabilities: Vec<f64>,

    /// Path to a single-column CSV of seeds to sweep
    #[arg(short, long, default_value = "")]
    pub seed_file: String,
}

fn create_cli() -> Command {
    let cli = Command::new("epigrid");
    BaseArgs::augment_args(cli)
}

/// Parses command line arguments and runs the simulation they describe,
/// returning one record per completed run.
///
/// # Errors
///
/// Returns an error if argument parsing, parameter loading, or report
/// writing fails
#[allow(clippy::missing_errors_doc)]
pub fn run_with_args() -> Result<Vec<RunRecord>, Box<dyn std::error::Error>> {
    let cli = create_cli();
    let matches = cli.get_matches();
    let args = BaseArgs::from_arg_matches(&matches)?;
    Ok(run_with_args_internal(args)?)
}

fn run_with_args_internal(args: BaseArgs) -> Result<Vec<RunRecord>, EpigridError> {
    if let Some(level) = args.log_level {
        set_log_level(level);
    }

    let mut params = if args.config.is_empty() {
        Params::default()
    } else {
        println!("Loading parameters from: {}", args.config);
        load_params(Path::new(&args.config))?
    };
    if let Some(seed) = args.random_seed {
        params.seed = seed;
    }

    let output_dir = if args.output_dir.is_empty() {
        None
    } else {
        Some(Path::new(&args.output_dir))
    };

    if args.probabilities.is_empty() {
        let probability = params.infection_probability;
        let seed = params.seed;
        let series = Simulation::new(params).run();
        if let Some(dir) = output_dir {
            let path = write_run_report(&series, dir, probability, seed)?;
            println!("Report written to: {}", path.display());
        }
        return Ok(vec![RunRecord {
            probability,
            seed,
            series,
        }]);
    }

    // Sweep mode
    for &probability in &args.probabilities {
        Params {
            infection_probability: probability,
            ..params.clone()
        }
        .validate()?;
    }
    let seeds = if args.seed_file.is_empty() {
        vec![params.seed]
    } else {
        load_seeds(Path::new(&args.seed_file))?
    };

    let records = run_sweep(&params, &args.probabilities, &seeds, output_dir);
    for &probability in &args.probabilities {
        let summary = summarize(&records, probability);
        println!("{}", serde_json::to_string(&summary)?);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::SicknessInterval;
    use std::io::Write;

    fn args() -> BaseArgs {
        BaseArgs {
            config: String::new(),
            random_seed: None,
            output_dir: String::new(),
            log_level: None,
            probabilities: Vec::new(),
            seed_file: String::new(),
        }
    }

    fn write_config(params: &Params) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", serde_json::to_string(params).unwrap()).unwrap();
        file
    }

    fn test_params() -> Params {
        Params {
            size: 3,
            infection_probability: 1.0,
            interval: SicknessInterval {
                min_days: 2,
                max_days: 2,
            },
            initial_infections: vec![(1, 1)],
            ..Default::default()
        }
    }

    #[test]
    fn default_run_without_initial_infections_ends_immediately() {
        let records = run_with_args_internal(args()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].series.days(), 0);
    }

    #[test]
    fn run_with_config_and_output_dir() {
        let config = write_config(&test_params());
        let temp_dir = tempfile::tempdir().unwrap();

        let records = run_with_args_internal(BaseArgs {
            config: config.path().to_str().unwrap().to_string(),
            output_dir: temp_dir.path().to_str().unwrap().to_string(),
            ..args()
        })
        .unwrap();

        assert_eq!(records[0].series.acc_infected(), &[1, 9, 9, 9]);
        assert!(temp_dir.path().join("1").join("0.csv").exists());
    }

    #[test]
    fn random_seed_overrides_config() {
        let config = write_config(&test_params());
        let records = run_with_args_internal(BaseArgs {
            config: config.path().to_str().unwrap().to_string(),
            random_seed: Some(77),
            ..args()
        })
        .unwrap();
        assert_eq!(records[0].seed, 77);
    }

    #[test]
    fn sweep_over_probabilities_and_seed_file() {
        let config = write_config(&test_params());
        let mut seed_file = tempfile::NamedTempFile::new().unwrap();
        writeln!(seed_file, "2").unwrap();
        writeln!(seed_file, "1").unwrap();

        let records = run_with_args_internal(BaseArgs {
            config: config.path().to_str().unwrap().to_string(),
            probabilities: vec![0.0, 1.0],
            seed_file: seed_file.path().to_str().unwrap().to_string(),
            ..args()
        })
        .unwrap();

        assert_eq!(records.len(), 4);
        // Seeds come back sorted ascending.
        assert_eq!(records[0].seed, 1);
        assert_eq!(records[1].seed, 2);
    }

    #[test]
    fn invalid_sweep_probability_rejected() {
        let result = run_with_args_internal(BaseArgs {
            probabilities: vec![1.5],
            ..args()
        });
        assert!(matches!(result, Err(EpigridError::ParamsError(_))));
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let result = run_with_args_internal(BaseArgs {
            config: "no/such/config.json".to_string(),
            ..args()
        });
        assert!(result.is_err());
    }
}
