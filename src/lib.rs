//! An agent-based epidemic simulation on a toroidal grid
//!
//! epigrid models the spread of an infection through a fixed population of
//! N x N people arranged on a torus. Each person is tied to a grid cell and
//! interacts with the 8 cells of its Moore neighborhood; grid edges wrap to
//! the opposite edge, so there are no boundary effects. Health states move
//! through a monotone state machine (Susceptible -> Infected -> Immune or
//! Dead), one day at a time, until no one is infected.
//!
//! A simulation usually consists of the following pieces working together:
//! * A validated [`params::Params`] configuration, typically loaded from a
//!   JSON file.
//! * A [`population::Population`] that owns all people and wires up their
//!   neighbor views over the [`grid::Grid`] topology.
//! * A [`sim::Simulation`] driver that advances the day loop and tabulates
//!   each day's outcomes into a [`tabulator::RunSeries`].
//! * A [`report`] writer that persists a run's series as a CSV keyed by
//!   infection probability and seed.
//! * A [`sweep`] layer that runs probability x seed batches for
//!   epidemic-threshold analysis.
//!
//! For a fixed seed and configuration, a run's sequence of random draws is
//! fully determined, so results reproduce exactly.

pub mod error;
pub mod grid;
pub mod log;
pub mod params;
pub mod people;
pub mod population;
pub mod report;
pub mod runner;
pub mod sim;
pub mod sweep;
pub mod tabulator;

pub mod prelude;

pub use crate::error::EpigridError;
pub use crate::log::{debug, error, info, trace, warn};
