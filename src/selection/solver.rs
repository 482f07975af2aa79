//! The host-facing solver: owns the model, the catalog, and the search
//! configuration.

use super::params::SolverParams;
use super::types::{Selection, SolveStatus};
use crate::error::Result;
use crate::formulation::Formulation;
use crate::model::{Model, Scalar, Strategy, StrategyCatalog};
use crate::search::{SearchConfig, SearchRunner};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

/// Strategy selection solver.
///
/// Mutators take `&mut self` and [`StrategySolver::solve`] takes `&self`,
/// so a solve always sees a catalog and model that cannot change under it.
/// Hosts sharing one solver across threads wrap it in a lock.
///
/// # Examples
///
/// ```
/// use u_stratsel::selection::{SolveStatus, StrategySolver};
///
/// let mut solver = StrategySolver::new(1000.0).unwrap();
/// solver.refresh(1, 1);
/// solver.set_resource_max(0, 10.0).unwrap();
/// solver.add_strategy(0, vec![4.0], vec![5.0]).unwrap();
/// solver.add_strategy(1, vec![7.0], vec![3.0]).unwrap();
///
/// let selection = solver.solve().unwrap();
/// assert_eq!(selection.status, SolveStatus::Solved);
/// assert_eq!(selection.activation, vec![true, false]);
/// ```
#[derive(Debug, Clone)]
pub struct StrategySolver {
    model: Model,
    catalog: StrategyCatalog,
    config: SearchConfig,
}

impl StrategySolver {
    /// Creates a solver with the given scaling factor and default search
    /// configuration. Call [`StrategySolver::refresh`] before adding
    /// strategies.
    pub fn new(scaling: Scalar) -> Result<Self> {
        Ok(Self {
            model: Model::new(scaling)?,
            catalog: StrategyCatalog::new(),
            config: SearchConfig::default(),
        })
    }

    /// Builds a fully configured solver from host parameters.
    pub fn from_params(params: &SolverParams) -> Result<Self> {
        params.validate()?;
        let mut solver = Self::new(params.scaling_factor)?.with_config(params.search.clone());
        solver.refresh(params.resource_count, params.class_count);
        for (j, &max) in params.resource_max.iter().enumerate() {
            solver.set_resource_max(j, max)?;
        }
        for (k, &min) in params.utility_min.iter().enumerate() {
            solver.set_utility_min(k, min)?;
        }
        for s in &params.strategies {
            solver.add_strategy(s.id, s.cost.clone(), s.utility.clone())?;
        }
        Ok(solver)
    }

    /// Replaces the search configuration (builder form).
    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// Replaces the search configuration used by later solves.
    pub fn set_config(&mut self, config: SearchConfig) {
        self.config = config;
    }

    /// Current search configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Budgets, minima, and scaling.
    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Registered strategies.
    pub fn catalog(&self) -> &StrategyCatalog {
        &self.catalog
    }

    /// Resizes the model and zeroes every budget and minimum.
    ///
    /// Strategies stay in the catalog; any whose vectors no longer match the
    /// new dimensions make the next solve fail with
    /// [`DimensionMismatch`](crate::error::SelectionError::DimensionMismatch).
    pub fn refresh(&mut self, resource_count: usize, class_count: usize) {
        info!(resource_count, class_count, "refreshing model");
        self.model.refresh(resource_count, class_count);
    }

    /// Sets the budget of resource `i`.
    pub fn set_resource_max(&mut self, i: usize, value: Scalar) -> Result<()> {
        self.model.set_resource_max(i, value)
    }

    /// Sets the utility minimum of class `i`.
    pub fn set_utility_min(&mut self, i: usize, value: Scalar) -> Result<()> {
        self.model.set_utility_min(i, value)
    }

    /// Zeroes every utility minimum; budgets and strategies are kept.
    pub fn reset_requirements(&mut self) {
        self.model.reset_requirements();
    }

    /// Registers a strategy, replacing any earlier one with the same id.
    pub fn add_strategy(&mut self, id: u32, cost: Vec<Scalar>, utility: Vec<Scalar>) -> Result<()> {
        self.catalog
            .add(Strategy::new(id, cost, utility), &self.model)
            .map(|_| ())
    }

    /// Removes every strategy; budgets and minima are kept.
    pub fn clear_strategies(&mut self) {
        self.catalog.clear();
    }

    /// The scaled constraint system the next solve would search.
    pub fn formulate(&self) -> Result<Formulation> {
        Formulation::build(&self.catalog, &self.model)
    }

    /// Runs the search to exhaustion or to the configured budget.
    ///
    /// Structural problems are errors; an empty feasible region is
    /// reported as [`SolveStatus::NoSolutionFound`].
    pub fn solve(&self) -> Result<Selection> {
        self.solve_inner(None)
    }

    /// Like [`StrategySolver::solve`], stopping early once `cancel` is set.
    pub fn solve_with_cancel(&self, cancel: Arc<AtomicBool>) -> Result<Selection> {
        self.solve_inner(Some(cancel))
    }

    fn solve_inner(&self, cancel: Option<Arc<AtomicBool>>) -> Result<Selection> {
        let formulation = self.formulate()?;
        info!(strategies = formulation.variable_count(), "solving");

        let outcome = SearchRunner::run_with_cancel(&formulation, &self.config, cancel);
        let selection = Selection::from_outcome(formulation.ids().to_vec(), outcome);

        match selection.status {
            SolveStatus::Solved => info!(active = ?selection.active_ids(), "solution found"),
            SolveStatus::NoSolutionFound => info!("no solution found"),
            SolveStatus::Cancelled => info!(
                reason = ?selection.stop_reason,
                has_incumbent = selection.is_solution_found(),
                "solve cancelled"
            ),
        }
        Ok(selection)
    }
}
