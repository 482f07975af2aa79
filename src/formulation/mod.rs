//! Constraint system and objective chain derived from the problem data.
//!
//! [`Formulation::build`] scales every Scalar into `i64` and produces:
//!
//! - one `<=` row per resource: `Σ cost_i[j] · x_i <= resource_max[j]`
//! - one `>=` row per class: `Σ utility_i[k] · x_i >= utility_min[k]`
//! - the [`ObjectiveChain`]: resource usage (minimize) per resource, total
//!   utility (maximize), activation count (maximize) per class
//!
//! [`DominanceRule`] decides how chain values of two assignments compare.

mod constraint;
mod objective;

pub use constraint::{ConstraintKind, Formulation, LinearConstraint, Sense};
pub use objective::{Direction, DominanceRule, ObjectiveChain, ObjectiveKind, ObjectiveTerm};
