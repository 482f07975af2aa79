//! Binary strategy selection under resource budgets and utility minima.
//!
//! Given a catalog of *strategies*, each with a cost per resource and a
//! utility per demand class, decide which to activate so that:
//!
//! - summed cost stays within every resource budget,
//! - summed utility reaches every class minimum,
//! - an ordered chain of objectives (resource usage, total utility,
//!   per-class activation counts) steers which feasible answer is kept.
//!
//! # Modules
//!
//! - **[`model`]**: strategies, catalog, budgets, minima, scaling factor
//! - **[`formulation`]**: scaled integer constraints and the objective chain
//! - **[`search`]**: exhaustive branch-and-bound with bounds propagation,
//!   seeded branching order, and node/time/flag cancellation
//! - **[`selection`]**: host-facing [`StrategySolver`](selection::StrategySolver)
//!   and [`Selection`](selection::Selection) results
//! - **[`error`]**: structural errors
//!
//! # Example
//!
//! ```
//! use u_stratsel::selection::{SolveStatus, StrategySolver};
//!
//! let mut solver = StrategySolver::new(1000.0)?;
//! solver.refresh(1, 1);
//! solver.set_resource_max(0, 10.0)?;
//! solver.add_strategy(0, vec![4.0], vec![5.0])?;
//! solver.add_strategy(1, vec![7.0], vec![3.0])?;
//!
//! let selection = solver.solve()?;
//! assert_eq!(selection.status, SolveStatus::Solved);
//! assert_eq!(selection.activation, vec![true, false]);
//! # Ok::<(), u_stratsel::error::SelectionError>(())
//! ```

pub mod error;
pub mod formulation;
pub mod model;
pub mod search;
pub mod selection;
