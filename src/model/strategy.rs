//! Strategies and the catalog that holds them.

use super::requirements::{check_finite, Model, Scalar};
use crate::error::{Result, SelectionError};
use std::collections::BTreeMap;

/// A candidate unit of work that can be activated or left off.
///
/// `cost[j]` is consumed from resource `j` when the strategy is active;
/// `utility[k]` is delivered to demand class `k`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Strategy {
    id: u32,
    cost: Vec<Scalar>,
    utility: Vec<Scalar>,
}

impl Strategy {
    /// Creates a strategy; dimensions are checked when it is added to a catalog.
    pub fn new(id: u32, cost: Vec<Scalar>, utility: Vec<Scalar>) -> Self {
        Self { id, cost, utility }
    }

    /// Caller-assigned identifier.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Cost per resource.
    pub fn cost(&self) -> &[Scalar] {
        &self.cost
    }

    /// Utility per demand class.
    pub fn utility(&self) -> &[Scalar] {
        &self.utility
    }

    /// Checks vector lengths and finiteness against the model dimensions.
    pub fn validate(&self, model: &Model) -> Result<()> {
        if self.cost.len() != model.resource_count() {
            return Err(SelectionError::DimensionMismatch {
                id: self.id,
                what: "cost",
                expected: model.resource_count(),
                actual: self.cost.len(),
            });
        }
        if self.utility.len() != model.class_count() {
            return Err(SelectionError::DimensionMismatch {
                id: self.id,
                what: "utility",
                expected: model.class_count(),
                actual: self.utility.len(),
            });
        }
        for (j, &c) in self.cost.iter().enumerate() {
            check_finite(c, || format!("strategy {} cost[{j}]", self.id))?;
        }
        for (k, &u) in self.utility.iter().enumerate() {
            check_finite(u, || format!("strategy {} utility[{k}]", self.id))?;
        }
        Ok(())
    }
}

/// The set of known strategies, iterated in ascending id order.
///
/// The iteration order is the decision-vector order: the strategy at
/// position `p` of [`StrategyCatalog::iter`] owns decision variable `p`.
/// With dense ids `0..n` the position is the id itself.
#[derive(Debug, Clone, Default)]
pub struct StrategyCatalog {
    strategies: BTreeMap<u32, Strategy>,
}

impl StrategyCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a strategy after validating it against `model`.
    ///
    /// A strategy with an id already in the catalog replaces the earlier
    /// one. On error the catalog is unchanged.
    pub fn add(&mut self, strategy: Strategy, model: &Model) -> Result<Option<Strategy>> {
        model.ensure_initialized()?;
        strategy.validate(model)?;
        Ok(self.strategies.insert(strategy.id, strategy))
    }

    /// Removes all strategies.
    pub fn clear(&mut self) {
        self.strategies.clear();
    }

    /// Number of registered strategies.
    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    /// Whether no strategy is registered.
    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    /// Looks up a strategy by id.
    pub fn get(&self, id: u32) -> Option<&Strategy> {
        self.strategies.get(&id)
    }

    /// Strategy ids in decision-vector order.
    pub fn ids(&self) -> Vec<u32> {
        self.strategies.keys().copied().collect()
    }

    /// Strategies in decision-vector order.
    pub fn iter(&self) -> impl Iterator<Item = &Strategy> {
        self.strategies.values()
    }
}
