//! People and the health state machine.
//!
//! Each person moves through a monotone, acyclic state machine:
//! Susceptible -> Infected -> {Immune, Dead}. Immune and Dead are terminal;
//! no field of a terminal person ever changes again. The two transitions are
//! `infect` (caller-driven, during the examine phase) and `update` (daily
//! progression). Both are guaranteed no-ops when the person is not in the
//! state the transition starts from.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::grid::NEIGHBOR_COUNT;
use crate::params::SicknessInterval;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthStatus {
    Susceptible,
    Infected,
    Immune,
    Dead,
}

/// One member of the population, fixed to a grid cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    id: usize,
    x: usize,
    y: usize,
    status: HealthStatus,
    /// Days the infection lasts, drawn at infection time. 0 until infected.
    sick_duration: u32,
    day_infected: Option<u32>,
    day_immunized: Option<u32>,
    day_died: Option<u32>,
    /// Linear indices of the 8 Moore neighbors, fixed at construction.
    neighbors: [usize; NEIGHBOR_COUNT],
}

impl Person {
    #[must_use]
    pub fn new(id: usize, x: usize, y: usize, neighbors: [usize; NEIGHBOR_COUNT]) -> Person {
        Person {
            id,
            x,
            y,
            status: HealthStatus::Susceptible,
            sick_duration: 0,
            day_infected: None,
            day_immunized: None,
            day_died: None,
            neighbors,
        }
    }

    #[must_use]
    pub fn id(&self) -> usize {
        self.id
    }

    #[must_use]
    pub fn position(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    #[must_use]
    pub fn status(&self) -> HealthStatus {
        self.status
    }

    #[must_use]
    pub fn sick_duration(&self) -> u32 {
        self.sick_duration
    }

    #[must_use]
    pub fn day_infected(&self) -> Option<u32> {
        self.day_infected
    }

    #[must_use]
    pub fn day_immunized(&self) -> Option<u32> {
        self.day_immunized
    }

    #[must_use]
    pub fn day_died(&self) -> Option<u32> {
        self.day_died
    }

    #[must_use]
    pub fn neighbors(&self) -> &[usize; NEIGHBOR_COUNT] {
        &self.neighbors
    }

    /// Whether this person spreads infection on `day`: infected, and at
    /// least one full day has elapsed since their own infection (one-day
    /// incubation before contagiousness).
    #[must_use]
    pub fn is_contagious(&self, day: u32) -> bool {
        self.status == HealthStatus::Infected && self.day_infected.is_some_and(|d| d < day)
    }

    /// Attempts to infect this person with one Bernoulli trial of success
    /// probability `probability`. No-op unless Susceptible. On success the
    /// sickness duration is drawn uniformly from `interval` (inclusive).
    pub fn infect<R: Rng>(
        &mut self,
        rng: &mut R,
        probability: f64,
        day: u32,
        interval: SicknessInterval,
    ) {
        if self.status != HealthStatus::Susceptible {
            return;
        }
        if rng.random_bool(probability) {
            self.status = HealthStatus::Infected;
            self.day_infected = Some(day);
            self.sick_duration = rng.random_range(interval.min_days..=interval.max_days);
        }
    }

    /// Advances this person's infection by one day. No-op unless Infected.
    ///
    /// Once the drawn sickness duration has elapsed the person recovers and
    /// becomes Immune; recovery takes priority over death. Otherwise one
    /// Bernoulli trial with `mortality_probability` decides whether the
    /// person dies today.
    pub fn update<R: Rng>(&mut self, rng: &mut R, day: u32, mortality_probability: f64) {
        if self.status != HealthStatus::Infected {
            return;
        }
        let infected_on = self
            .day_infected
            .expect("infected person must have a day of infection");
        if self.sick_duration > 0 && day - infected_on >= self.sick_duration {
            self.status = HealthStatus::Immune;
            self.day_immunized = Some(day);
        } else if rng.random_bool(mortality_probability) {
            self.status = HealthStatus::Dead;
            self.day_died = Some(day);
        }
    }
}
