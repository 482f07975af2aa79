//! Problem data: strategies, budgets, and requirements.
//!
//! - [`Strategy`] / [`StrategyCatalog`]: candidate strategies with per-resource
//!   cost and per-class utility vectors, kept in ascending id order
//! - [`Model`]: resource budgets, utility minima, and the scaling factor that
//!   maps Scalars onto exact `i64` arithmetic

mod requirements;
mod strategy;

pub use requirements::{Model, Scalar};
pub use strategy::{Strategy, StrategyCatalog};
