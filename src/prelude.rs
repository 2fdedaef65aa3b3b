pub use crate::error::EpigridError;
pub use crate::grid::{Grid, NEIGHBOR_COUNT};
pub use crate::log::{debug, error, info, trace, warn};
pub use crate::params::{load_params, Params, SicknessInterval};
pub use crate::people::{HealthStatus, Person};
pub use crate::population::Population;
pub use crate::report::write_run_report;
pub use crate::sim::Simulation;
pub use crate::sweep::{load_seeds, run_sweep, summarize, RunRecord, SweepSummary};
pub use crate::tabulator::{tabulate_day, DayCounts, RunSeries};
