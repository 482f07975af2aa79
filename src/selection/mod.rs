//! Host-facing solver and solve results.
//!
//! [`StrategySolver`] owns the model, the strategy catalog, and the search
//! configuration. Hosts size the model with `refresh`, set budgets and
//! minima, register strategies, and call `solve`, which returns a
//! [`Selection`]: one activation flag per strategy plus a [`SolveStatus`].
//!
//! [`SolverParams`] bundles the same inputs for hosts that load them from
//! configuration.

mod params;
mod solver;
mod types;

pub use params::{SolverParams, StrategyParams};
pub use solver::StrategySolver;
pub use types::{Selection, SolveStatus};
