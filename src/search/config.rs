//! Search configuration.

use crate::formulation::DominanceRule;

/// Order in which decision variables are branched on.
///
/// The order is fixed once per solve. Any order explores the full tree;
/// it only changes which feasible assignments are met first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VariableOrder {
    /// Seeded random permutation.
    #[default]
    Random,
    /// Ascending strategy id.
    Sequential,
    /// Variables with the largest total absolute coefficient first.
    MostConstrained,
}

/// Configuration for the branch-and-bound search.
///
/// # Examples
///
/// ```
/// use u_stratsel::formulation::DominanceRule;
/// use u_stratsel::search::{SearchConfig, VariableOrder};
///
/// let config = SearchConfig::default()
///     .with_seed(7)
///     .with_variable_order(VariableOrder::MostConstrained)
///     .with_dominance(DominanceRule::Lexicographic)
///     .with_node_limit(1_000_000);
/// assert_eq!(config.seed, Some(7));
/// assert_eq!(config.node_limit, 1_000_000);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Seed for [`VariableOrder::Random`]. `None` uses a fixed seed of 42,
    /// so repeated solves are reproducible either way.
    pub seed: Option<u64>,
    /// Branching order.
    pub variable_order: VariableOrder,
    /// Rule a solution must satisfy against the incumbent to replace it.
    pub dominance: DominanceRule,
    /// Maximum number of expanded nodes. 0 = no limit.
    pub node_limit: usize,
    /// Wall-clock budget in milliseconds. 0 = no limit.
    pub time_limit_ms: u64,
    /// Emit a progress event every this many nodes. 0 = never.
    pub log_period: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            seed: None,
            variable_order: VariableOrder::default(),
            dominance: DominanceRule::default(),
            node_limit: 0,
            time_limit_ms: 0,
            log_period: 100_000,
        }
    }
}

impl SearchConfig {
    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the branching order.
    pub fn with_variable_order(mut self, order: VariableOrder) -> Self {
        self.variable_order = order;
        self
    }

    /// Sets the acceptance rule.
    pub fn with_dominance(mut self, rule: DominanceRule) -> Self {
        self.dominance = rule;
        self
    }

    /// Sets the node budget.
    pub fn with_node_limit(mut self, n: usize) -> Self {
        self.node_limit = n;
        self
    }

    /// Sets the time budget in milliseconds.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = ms;
        self
    }

    /// Sets the progress log period in nodes.
    pub fn with_log_period(mut self, n: usize) -> Self {
        self.log_period = n;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.seed, None);
        assert_eq!(config.variable_order, VariableOrder::Random);
        assert_eq!(config.dominance, DominanceRule::Pareto);
        assert_eq!(config.node_limit, 0);
        assert_eq!(config.time_limit_ms, 0);
        assert_eq!(config.log_period, 100_000);
    }

    #[test]
    fn test_builders() {
        let config = SearchConfig::default()
            .with_time_limit_ms(250)
            .with_log_period(0)
            .with_variable_order(VariableOrder::Sequential);
        assert_eq!(config.time_limit_ms, 250);
        assert_eq!(config.log_period, 0);
        assert_eq!(config.variable_order, VariableOrder::Sequential);
    }
}
