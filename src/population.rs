//! The population: an arena of people on a toroidal grid.
//!
//! People cross-reference each other as neighbors, so the grid is stored as
//! a flat, exclusively-owned `Vec<Person>` addressed by linear index, and
//! each person's neighbor view is 8 indices into that arena rather than
//! owned copies. A population is built once per run and never resized.

use rand::Rng;

use crate::grid::Grid;
use crate::params::Params;
use crate::people::{HealthStatus, Person};

#[derive(Debug, Clone)]
pub struct Population {
    grid: Grid,
    people: Vec<Person>,
}

impl Population {
    /// Builds the N x N population for a run, wiring every person's
    /// neighbor view and force-infecting the configured initial coordinates
    /// on day 0 with probability 1.
    ///
    /// People are created in the run's fixed iteration order: outer loop
    /// over x, inner loop over y. The force-infections draw from `rng`
    /// through the ordinary `infect` path, so they are part of the run's
    /// deterministic draw sequence.
    pub fn new<R: Rng>(params: &Params, rng: &mut R) -> Population {
        let grid = Grid::new(params.size);
        let mut people = Vec::with_capacity(grid.cell_count());
        for x in 0..params.size {
            for y in 0..params.size {
                let mut person = Person::new(grid.index(x, y), x, y, grid.neighbors(x, y));
                if params.initial_infections.contains(&(x, y)) {
                    person.infect(rng, 1.0, 0, params.interval);
                }
                people.push(person);
            }
        }
        Population { grid, people }
    }

    #[must_use]
    pub fn grid(&self) -> Grid {
        self.grid
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.people.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// People in linear-index order, which is also the fixed iteration
    /// order of the day loop.
    #[must_use]
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    #[must_use]
    pub fn person(&self, index: usize) -> &Person {
        &self.people[index]
    }

    pub(crate) fn person_mut(&mut self, index: usize) -> &mut Person {
        &mut self.people[index]
    }

    /// Whether anyone is still infected. The day loop runs until this
    /// returns false.
    #[must_use]
    pub fn infected_present(&self) -> bool {
        self.people
            .iter()
            .any(|person| person.status() == HealthStatus::Infected)
    }
}
