//! Per-day tabulation of population outcomes.
//!
//! After each day's update phase the driver tabulates the whole grid into a
//! `DayCounts` and appends it to the run's `RunSeries`, which maintains the
//! cumulative series as prefix sums.

use serde::Serialize;

use crate::people::HealthStatus;
use crate::population::Population;

/// Counts over the full population snapshot at the end of one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayCounts {
    pub day: u32,
    pub susceptible: u32,
    /// Newly infected today.
    pub infected: u32,
    /// Infected on a prior day and still infected.
    pub sick: u32,
    /// Became immune today.
    pub recovered: u32,
    /// Died today.
    pub dead: u32,
}

/// Tabulates the population snapshot for day `day`.
#[must_use]
pub fn tabulate_day(population: &Population, day: u32) -> DayCounts {
    let mut counts = DayCounts {
        day,
        susceptible: 0,
        infected: 0,
        sick: 0,
        recovered: 0,
        dead: 0,
    };
    for person in population.people() {
        match person.status() {
            HealthStatus::Susceptible => counts.susceptible += 1,
            HealthStatus::Infected => {
                if person.day_infected() == Some(day) {
                    counts.infected += 1;
                } else {
                    counts.sick += 1;
                }
            }
            HealthStatus::Immune => {
                if person.day_immunized() == Some(day) {
                    counts.recovered += 1;
                }
            }
            HealthStatus::Dead => {
                if person.day_died() == Some(day) {
                    counts.dead += 1;
                }
            }
        }
    }
    counts
}

/// The eight per-day series produced by one run, indexed by day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSeries {
    susceptible: Vec<u32>,
    infected: Vec<u32>,
    sick: Vec<u32>,
    recovered: Vec<u32>,
    dead: Vec<u32>,
    acc_infected: Vec<u32>,
    acc_recovered: Vec<u32>,
    acc_dead: Vec<u32>,
}

impl RunSeries {
    #[must_use]
    pub fn new() -> RunSeries {
        RunSeries::default()
    }

    /// Appends one day's counts, extending the cumulative series by prefix
    /// sum. Days must be recorded in order.
    pub fn record_day(&mut self, counts: DayCounts) {
        debug_assert_eq!(counts.day as usize, self.susceptible.len());
        self.susceptible.push(counts.susceptible);
        self.infected.push(counts.infected);
        self.sick.push(counts.sick);
        self.recovered.push(counts.recovered);
        self.dead.push(counts.dead);
        self.acc_infected
            .push(counts.infected + self.acc_infected.last().copied().unwrap_or(0));
        self.acc_recovered
            .push(counts.recovered + self.acc_recovered.last().copied().unwrap_or(0));
        self.acc_dead
            .push(counts.dead + self.acc_dead.last().copied().unwrap_or(0));
    }

    /// Total number of recorded days.
    #[must_use]
    pub fn days(&self) -> u32 {
        u32::try_from(self.susceptible.len()).unwrap()
    }

    #[must_use]
    pub fn susceptible(&self) -> &[u32] {
        &self.susceptible
    }

    #[must_use]
    pub fn infected(&self) -> &[u32] {
        &self.infected
    }

    #[must_use]
    pub fn sick(&self) -> &[u32] {
        &self.sick
    }

    #[must_use]
    pub fn recovered(&self) -> &[u32] {
        &self.recovered
    }

    #[must_use]
    pub fn dead(&self) -> &[u32] {
        &self.dead
    }

    #[must_use]
    pub fn acc_infected(&self) -> &[u32] {
        &self.acc_infected
    }

    #[must_use]
    pub fn acc_recovered(&self) -> &[u32] {
        &self.acc_recovered
    }

    #[must_use]
    pub fn acc_dead(&self) -> &[u32] {
        &self.acc_dead
    }

    /// Cumulative infections at the end of the run.
    #[must_use]
    pub fn total_infected(&self) -> u32 {
        self.acc_infected.last().copied().unwrap_or(0)
    }

    /// Cumulative deaths at the end of the run.
    #[must_use]
    pub fn total_dead(&self) -> u32 {
        self.acc_dead.last().copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::params::Params;
    use crate::population::Population;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn tabulate_freshly_built_population() {
        let params = Params {
            size: 4,
            initial_infections: vec![(1, 2)],
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(1);
        let population = Population::new(&params, &mut rng);

        let counts = tabulate_day(&population, 0);
        assert_eq!(counts.susceptible, 15);
        assert_eq!(counts.infected, 1);
        assert_eq!(counts.sick, 0);
        assert_eq!(counts.recovered, 0);
        assert_eq!(counts.dead, 0);
    }

    #[test]
    fn cumulative_series_are_prefix_sums() {
        let mut series = RunSeries::new();
        let per_day = [(3, 1, 0), (5, 0, 1), (0, 2, 2)];
        for (day, (infected, recovered, dead)) in per_day.into_iter().enumerate() {
            series.record_day(DayCounts {
                day: u32::try_from(day).unwrap(),
                susceptible: 0,
                infected,
                sick: 0,
                recovered,
                dead,
            });
        }

        assert_eq!(series.acc_infected(), &[3, 8, 8]);
        assert_eq!(series.acc_recovered(), &[1, 1, 3]);
        assert_eq!(series.acc_dead(), &[0, 1, 3]);
        for d in 0..series.days() as usize {
            let previous = if d > 0 { series.acc_infected()[d - 1] } else { 0 };
            assert_eq!(series.acc_infected()[d], series.infected()[d] + previous);
        }
        assert_eq!(series.total_infected(), 8);
        assert_eq!(series.total_dead(), 3);
    }

    #[test]
    fn empty_series() {
        let series = RunSeries::new();
        assert_eq!(series.days(), 0);
        assert_eq!(series.total_infected(), 0);
        assert_eq!(series.total_dead(), 0);
    }
}
