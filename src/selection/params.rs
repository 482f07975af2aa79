//! Host parameters for building a solver in one step.

use crate::error::{Result, SelectionError};
use crate::model::Scalar;
use crate::search::SearchConfig;

/// One strategy as supplied by the host.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrategyParams {
    pub id: u32,
    pub cost: Vec<Scalar>,
    pub utility: Vec<Scalar>,
}

/// Everything a host loads before a solve.
///
/// `resource_max` and `utility_min` may be shorter than the declared
/// dimensions; missing entries stay zero.
///
/// With the `serde` feature every field is optional in the serialized
/// form and falls back to [`SolverParams::default`].
///
/// # Examples
///
/// ```
/// use u_stratsel::selection::{SolverParams, StrategyParams, StrategySolver};
///
/// let params = SolverParams {
///     resource_count: 1,
///     class_count: 1,
///     resource_max: vec![10.0],
///     strategies: vec![
///         StrategyParams { id: 0, cost: vec![4.0], utility: vec![5.0] },
///         StrategyParams { id: 1, cost: vec![7.0], utility: vec![3.0] },
///     ],
///     ..SolverParams::default()
/// };
/// let solver = StrategySolver::from_params(&params).unwrap();
/// assert_eq!(solver.solve().unwrap().activation, vec![true, false]);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SolverParams {
    /// Multiplier applied to every Scalar before integer conversion.
    pub scaling_factor: Scalar,
    pub resource_count: usize,
    pub class_count: usize,
    pub resource_max: Vec<Scalar>,
    pub utility_min: Vec<Scalar>,
    pub strategies: Vec<StrategyParams>,
    pub search: SearchConfig,
}

impl Default for SolverParams {
    fn default() -> Self {
        Self {
            scaling_factor: 1000.0,
            resource_count: 0,
            class_count: 0,
            resource_max: Vec::new(),
            utility_min: Vec::new(),
            strategies: Vec::new(),
            search: SearchConfig::default(),
        }
    }
}

impl SolverParams {
    /// Checks the requirement vectors against the declared dimensions.
    ///
    /// Strategy vectors are checked when they are added to the solver.
    pub fn validate(&self) -> Result<()> {
        if self.resource_max.len() > self.resource_count {
            return Err(SelectionError::InvalidConfig(format!(
                "{} resource maxima for {} resources",
                self.resource_max.len(),
                self.resource_count
            )));
        }
        if self.utility_min.len() > self.class_count {
            return Err(SelectionError::InvalidConfig(format!(
                "{} utility minima for {} classes",
                self.utility_min.len(),
                self.class_count
            )));
        }
        Ok(())
    }
}
