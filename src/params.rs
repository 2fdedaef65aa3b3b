//! Run configuration for the simulation engine.
//!
//! The engine itself performs no range checking (violations are precondition
//! faults); every `Params` value handed to it must have passed `validate()`.
//! `load_params` is the file-based path: a JSON file is deserialized and
//! validated in one step.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::EpigridError;

/// Inclusive bounds on how many days an infection lasts, drawn uniformly
/// per person at infection time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SicknessInterval {
    pub min_days: u32,
    pub max_days: u32,
}

/// A validated simulation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Params {
    /// Grid side N; the population is N x N people.
    pub size: usize,
    /// Probability that a contagious neighbor infects a susceptible person
    /// on a given day.
    pub infection_probability: f64,
    pub interval: SicknessInterval,
    /// Daily probability that an infected person dies instead of riding out
    /// the infection.
    pub mortality_probability: f64,
    /// Grid coordinates force-infected on day 0.
    pub initial_infections: Vec<(usize, usize)>,
    pub seed: u64,
    /// Advisory only: whether the driver fires the per-day snapshot hook.
    /// Has no effect on simulation outcome.
    pub visualize: bool,
}

impl Default for Params {
    fn default() -> Self {
        Params {
            size: 50,
            infection_probability: 0.045,
            interval: SicknessInterval {
                min_days: 4,
                max_days: 8,
            },
            mortality_probability: 0.0,
            initial_infections: Vec::new(),
            seed: 0,
            visualize: false,
        }
    }
}

fn validate_probability(value: f64, name: &str) -> Result<(), EpigridError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(EpigridError::ParamsError(format!(
            "{name} must be between 0 and 1, got {value}"
        )));
    }
    Ok(())
}

impl Params {
    /// Checks every range and domain constraint the engine assumes.
    ///
    /// # Errors
    ///
    /// Returns `EpigridError::ParamsError` naming the first violated
    /// constraint.
    pub fn validate(&self) -> Result<(), EpigridError> {
        if self.size < 3 {
            return Err(EpigridError::ParamsError(format!(
                "grid side must be at least 3, got {}",
                self.size
            )));
        }
        validate_probability(self.infection_probability, "infection_probability")?;
        validate_probability(self.mortality_probability, "mortality_probability")?;
        if self.interval.min_days == 0 {
            return Err(EpigridError::ParamsError(
                "interval.min_days must be larger than 0".to_string(),
            ));
        }
        if self.interval.max_days < self.interval.min_days {
            return Err(EpigridError::ParamsError(format!(
                "interval.max_days ({}) must be at least interval.min_days ({})",
                self.interval.max_days, self.interval.min_days
            )));
        }
        for &(x, y) in &self.initial_infections {
            if x >= self.size || y >= self.size {
                return Err(EpigridError::ParamsError(format!(
                    "initial infection ({x}, {y}) is outside the {0} x {0} grid",
                    self.size
                )));
            }
        }
        Ok(())
    }
}

/// Loads and validates a `Params` from a JSON file.
///
/// # Errors
///
/// Returns an `EpigridError` if the file cannot be read, is not valid JSON
/// for `Params`, or fails validation.
pub fn load_params(path: &Path) -> Result<Params, EpigridError> {
    let config_file = File::open(path)
        .map_err(|e| EpigridError::ParamsError(format!("failed to open {}: {e}", path.display())))?;
    let params: Params = serde_json::from_reader(BufReader::new(config_file))?;
    params.validate()?;
    Ok(params)
}
