//! Exhaustive branch-and-bound search over binary decision vectors.
//!
//! The runner walks the decision tree depth-first, activating before
//! deactivating, and keeps an incumbent that is only replaced by
//! assignments that improve on it under the configured
//! [`DominanceRule`](crate::formulation::DominanceRule). Rows are kept
//! bounds-consistent at every node, and subtrees whose optimistic objective
//! vector cannot improve on the incumbent are discarded.
//!
//! # References
//!
//! - Land & Doig (1960), "An Automatic Method of Solving Discrete Programming Problems"
//! - Rossi, van Beek & Walsh (2006), "Handbook of Constraint Programming", ch. 3

mod config;
mod runner;

pub use config::{SearchConfig, VariableOrder};
pub use runner::{Incumbent, SearchOutcome, SearchRunner, SearchState, SearchStats, StopReason};
