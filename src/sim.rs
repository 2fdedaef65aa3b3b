//! The day-stepped simulation driver.
//!
//! One `Simulation` is one run of the engine for a (configuration, seed)
//! pair: a freshly built population, a single seeded generator, and a day
//! counter. Each day runs three phases over the whole grid in the fixed
//! iteration order:
//!
//! 1. examine/infect: every contagious person attempts to infect each of
//!    their 8 neighbors,
//! 2. update: every person's infection progresses one day,
//! 3. tabulate: the grid snapshot is counted into the run series.
//!
//! The update phase runs strictly after the examine phase has finished for
//! the whole grid, so a same-day chain of infection-then-death cannot occur.
//! People infected during the examine phase are not contagious until a later
//! day (one-day incubation), so the phase never re-examines them.
//!
//! All random draws go through the run's single `StdRng`, totally ordered by
//! grid iteration order, then phase order, then day order. A fixed seed and
//! configuration therefore reproduce the exact state trajectory.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::log::{info, trace};
use crate::params::Params;
use crate::population::Population;
use crate::tabulator::{tabulate_day, RunSeries};

pub struct Simulation {
    params: Params,
    rng: StdRng,
    population: Population,
    current_day: u32,
}

impl Simulation {
    /// Builds the population for one run, seeding the generator from
    /// `params.seed`. `params` must already be validated.
    #[must_use]
    pub fn new(params: Params) -> Simulation {
        let mut rng = StdRng::seed_from_u64(params.seed);
        let population = Population::new(&params, &mut rng);
        Simulation {
            params,
            rng,
            population,
            current_day: 0,
        }
    }

    #[must_use]
    pub fn population(&self) -> &Population {
        &self.population
    }

    #[must_use]
    pub fn current_day(&self) -> u32 {
        self.current_day
    }

    /// Runs the day loop until no one is infected and returns the per-day
    /// series.
    pub fn run(&mut self) -> RunSeries {
        self.run_with_hook(|_, _| {})
    }

    /// Like `run`, but when the advisory `visualize` flag is set, hands a
    /// read-only snapshot of the population to `hook` at the end of each
    /// day. The hook never affects the simulation outcome.
    pub fn run_with_hook<F>(&mut self, mut hook: F) -> RunSeries
    where
        F: FnMut(&Population, u32),
    {
        info!(
            "simulating with seed {} and infection probability {}",
            self.params.seed, self.params.infection_probability
        );
        let mut series = RunSeries::new();

        // Monotone state transitions over a finite population guarantee
        // this loop terminates: every infected person resolves to Immune or
        // Dead within their drawn sickness duration.
        while self.population.infected_present() {
            let day = self.current_day;
            self.examine_and_infect(day);
            self.update(day);

            let counts = tabulate_day(&self.population, day);
            trace!(
                "day {day}: susceptible={} infected={} sick={} recovered={} dead={}",
                counts.susceptible,
                counts.infected,
                counts.sick,
                counts.recovered,
                counts.dead
            );
            series.record_day(counts);

            if self.params.visualize {
                hook(&self.population, day);
            }
            self.current_day += 1;
        }

        info!(
            "epidemic resolved after {} days: {} infected, {} dead",
            series.days(),
            series.total_infected(),
            series.total_dead()
        );
        series
    }

    /// Phase 1: every person contagious on `day` attempts to infect each of
    /// their neighbors, in the fixed neighbor order. Only reads infected
    /// people and only mutates susceptible ones.
    fn examine_and_infect(&mut self, day: u32) {
        for index in 0..self.population.len() {
            if !self.population.person(index).is_contagious(day) {
                continue;
            }
            let neighbors = *self.population.person(index).neighbors();
            for neighbor in neighbors {
                self.population.person_mut(neighbor).infect(
                    &mut self.rng,
                    self.params.infection_probability,
                    day,
                    self.params.interval,
                );
            }
        }
    }

    /// Phase 2: daily progression for everyone, strictly after phase 1.
    fn update(&mut self, day: u32) {
        for index in 0..self.population.len() {
            self.population.person_mut(index).update(
                &mut self.rng,
                day,
                self.params.mortality_probability,
            );
        }
    }
}
