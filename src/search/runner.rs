//! Branch-and-bound execution engine.
//!
//! # Algorithm
//!
//! 1. Normalize every constraint to `Σ a_i · x_i <= b`
//! 2. Fix a branching order over the decision variables
//! 3. Depth-first: branch on the next free variable, `1` before `0`
//! 4. At each node:
//!    a. Propagate bounds to fixpoint, forcing variables whose other value
//!       would make some row unsatisfiable; prune on conflict
//!    b. Prune if the optimistic objective vector of the subtree would not
//!       be accepted against the incumbent
//!    c. At a leaf, accept the assignment if it improves on the incumbent
//! 5. Stop on exhaustion, or at a node expansion once a budget is spent or
//!    cancellation is requested
//!
//! The incumbent only ever moves to assignments that improve on it, so the
//! last accepted assignment is the best one under the configured
//! [`DominanceRule`](crate::formulation::DominanceRule).

use super::config::{SearchConfig, VariableOrder};
use crate::formulation::{Direction, Formulation, Sense};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, trace};

/// Classification of a search node, and the terminal state of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchState {
    /// Feasible so far and may still improve on the incumbent; will branch.
    Exploring,
    /// Every variable is fixed and every constraint holds.
    SolutionFound,
    /// Infeasible, or cannot improve on the incumbent.
    Pruned,
    /// The whole tree was explored.
    Exhausted,
    /// A budget ran out or cancellation was requested.
    Cancelled,
}

/// Why a run stopped before exhausting the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StopReason {
    /// The external cancel flag was set.
    Requested,
    /// `node_limit` expansions were reached.
    NodeLimit,
    /// `time_limit_ms` elapsed.
    TimeLimit,
}

/// Counters collected during a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Expanded (branched) nodes.
    pub nodes: usize,
    /// Subtrees discarded by propagation or objective bounds.
    pub pruned: usize,
    /// Feasible full assignments reached.
    pub solutions_found: usize,
    /// Assignments that became the incumbent.
    pub solutions_accepted: usize,
    /// Variables fixed by propagation rather than branching.
    pub propagated: usize,
    /// Wall-clock time of the run in milliseconds.
    pub elapsed_ms: u64,
}

/// The best assignment accepted so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Incumbent {
    /// One entry per decision variable.
    pub assignment: Vec<bool>,
    /// Objective chain values of `assignment`.
    pub objective_values: Vec<i64>,
}

/// Result of a search run.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// [`SearchState::Exhausted`] or [`SearchState::Cancelled`].
    pub state: SearchState,
    /// Set when `state` is `Cancelled`.
    pub stop_reason: Option<StopReason>,
    /// Last accepted assignment, if any.
    pub best: Option<Incumbent>,
    pub stats: SearchStats,
}

/// Branch-and-bound runner.
pub struct SearchRunner;

impl SearchRunner {
    /// Explores the decision tree of `formulation`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_stratsel::formulation::Formulation;
    /// use u_stratsel::model::{Model, Strategy, StrategyCatalog};
    /// use u_stratsel::search::{SearchConfig, SearchRunner, SearchState};
    ///
    /// let mut model = Model::with_dimensions(1000.0, 1, 1).unwrap();
    /// model.set_resource_max(0, 10.0).unwrap();
    /// let mut catalog = StrategyCatalog::new();
    /// catalog.add(Strategy::new(0, vec![4.0], vec![5.0]), &model).unwrap();
    /// catalog.add(Strategy::new(1, vec![7.0], vec![3.0]), &model).unwrap();
    ///
    /// let formulation = Formulation::build(&catalog, &model).unwrap();
    /// let outcome = SearchRunner::run(&formulation, &SearchConfig::default());
    /// assert_eq!(outcome.state, SearchState::Exhausted);
    /// assert_eq!(outcome.best.unwrap().assignment, vec![true, false]);
    /// ```
    pub fn run(formulation: &Formulation, config: &SearchConfig) -> SearchOutcome {
        Self::run_with_cancel(formulation, config, None)
    }

    /// Explores the decision tree with an optional cancellation token.
    ///
    /// The flag is polled once per node expansion. A cancelled run returns
    /// the incumbent accepted so far, which always satisfies every
    /// constraint.
    pub fn run_with_cancel(
        formulation: &Formulation,
        config: &SearchConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> SearchOutcome {
        let mut search = Search::new(formulation, config, cancel);
        info!(
            variables = formulation.variable_count(),
            constraints = formulation.constraints().len(),
            objectives = formulation.objectives().len(),
            "search started"
        );

        search.visit();
        search.stats.elapsed_ms = search.started.elapsed().as_millis() as u64;

        let state = match search.stop {
            Some(_) => SearchState::Cancelled,
            None => SearchState::Exhausted,
        };
        info!(
            ?state,
            nodes = search.stats.nodes,
            pruned = search.stats.pruned,
            accepted = search.stats.solutions_accepted,
            elapsed_ms = search.stats.elapsed_ms,
            "search finished"
        );

        SearchOutcome {
            state,
            stop_reason: search.stop,
            best: search.incumbent,
            stats: search.stats,
        }
    }
}

/// A constraint in `<=` form with its running minimum activity.
struct Row {
    coefficients: Vec<i64>,
    bound: i64,
    /// Fixed contributions plus `min(0, a_i)` for every free variable.
    min_activity: i64,
}

/// An objective in maximize form with its running optimistic value.
struct ObjectiveBound {
    gains: Vec<i64>,
    direction: Direction,
    /// Fixed contributions plus `max(0, g_i)` for every free variable.
    optimistic: i64,
}

impl ObjectiveBound {
    /// Optimistic value in the term's own orientation.
    fn value(&self) -> i64 {
        match self.direction {
            Direction::Maximize => self.optimistic,
            Direction::Minimize => -self.optimistic,
        }
    }
}

struct Search<'a> {
    formulation: &'a Formulation,
    config: &'a SearchConfig,
    cancel: Option<Arc<AtomicBool>>,
    rows: Vec<Row>,
    bounds: Vec<ObjectiveBound>,
    order: Vec<usize>,
    domains: Vec<Option<bool>>,
    trail: Vec<usize>,
    incumbent: Option<Incumbent>,
    stats: SearchStats,
    stop: Option<StopReason>,
    started: Instant,
    deadline: Option<Instant>,
}

impl<'a> Search<'a> {
    fn new(
        formulation: &'a Formulation,
        config: &'a SearchConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Self {
        let rows: Vec<Row> = formulation
            .constraints()
            .iter()
            .map(|c| {
                let (coefficients, bound) = match c.sense {
                    Sense::LessOrEqual => (c.coefficients.clone(), c.rhs),
                    Sense::GreaterOrEqual => {
                        (c.coefficients.iter().map(|&a| -a).collect(), -c.rhs)
                    }
                };
                let min_activity = coefficients.iter().map(|&a| a.min(0)).sum();
                Row { coefficients, bound, min_activity }
            })
            .collect();

        let bounds = formulation
            .objectives()
            .terms()
            .iter()
            .map(|t| {
                let gains: Vec<i64> = match t.direction {
                    Direction::Maximize => t.coefficients.clone(),
                    Direction::Minimize => t.coefficients.iter().map(|&c| -c).collect(),
                };
                let optimistic = gains.iter().map(|&g| g.max(0)).sum();
                ObjectiveBound { gains, direction: t.direction, optimistic }
            })
            .collect();

        let n = formulation.variable_count();
        let order = branching_order(&rows, n, config);
        let started = Instant::now();
        let deadline = (config.time_limit_ms > 0)
            .then(|| started + Duration::from_millis(config.time_limit_ms));

        Self {
            formulation,
            config,
            cancel,
            rows,
            bounds,
            order,
            domains: vec![None; n],
            trail: Vec::with_capacity(n),
            incumbent: None,
            stats: SearchStats::default(),
            stop: None,
            started,
            deadline,
        }
    }

    /// Classifies the current node and acts on it.
    fn visit(&mut self) {
        match self.node_state() {
            SearchState::Exploring => self.branch(),
            SearchState::SolutionFound => self.record_solution(),
            SearchState::Pruned => self.stats.pruned += 1,
            SearchState::Exhausted | SearchState::Cancelled => {}
        }
    }

    fn node_state(&mut self) -> SearchState {
        if !self.propagate() {
            return SearchState::Pruned;
        }
        if self.trail.len() == self.domains.len() {
            return SearchState::SolutionFound;
        }
        if !self.may_improve() {
            return SearchState::Pruned;
        }
        SearchState::Exploring
    }

    fn branch(&mut self) {
        if self.should_stop() {
            return;
        }
        self.stats.nodes += 1;
        if self.config.log_period > 0 && self.stats.nodes % self.config.log_period == 0 {
            info!(
                nodes = self.stats.nodes,
                pruned = self.stats.pruned,
                found = self.stats.solutions_found,
                accepted = self.stats.solutions_accepted,
                depth = self.trail.len(),
                "search progress"
            );
        }

        let Some(var) = self.order.iter().copied().find(|&i| self.domains[i].is_none()) else {
            return;
        };

        for value in [true, false] {
            let mark = self.trail.len();
            self.fix(var, value);
            self.visit();
            self.undo_to(mark);
            if self.stop.is_some() {
                return;
            }
        }
    }

    fn record_solution(&mut self) {
        self.stats.solutions_found += 1;
        let assignment: Vec<bool> = self.domains.iter().map(|d| d.unwrap_or(false)).collect();
        debug_assert!(self.formulation.is_feasible(&assignment));

        let values = self.formulation.objectives().evaluate(&assignment);
        let accept = match &self.incumbent {
            None => true,
            Some(inc) => self.formulation.objectives().improves(
                self.config.dominance,
                &values,
                &inc.objective_values,
            ),
        };

        if accept {
            self.stats.solutions_accepted += 1;
            debug!(
                objective_values = ?values,
                accepted = self.stats.solutions_accepted,
                "solution accepted"
            );
            self.incumbent = Some(Incumbent { assignment, objective_values: values });
        } else {
            trace!(objective_values = ?values, "solution rejected");
        }
    }

    /// Whether some completion of the current node could be accepted.
    fn may_improve(&self) -> bool {
        let Some(inc) = &self.incumbent else {
            return true;
        };
        let optimistic: Vec<i64> = self.bounds.iter().map(ObjectiveBound::value).collect();
        self.formulation
            .objectives()
            .improves(self.config.dominance, &optimistic, &inc.objective_values)
    }

    /// Bounds propagation to fixpoint. Returns `false` on conflict.
    fn propagate(&mut self) -> bool {
        loop {
            let mut forced = Vec::new();
            for row in &self.rows {
                if row.min_activity > row.bound {
                    return false;
                }
                let slack = row.bound - row.min_activity;
                for (i, &a) in row.coefficients.iter().enumerate() {
                    if self.domains[i].is_some() || a == 0 {
                        continue;
                    }
                    // a > 0: taking it adds a; a < 0: leaving it adds -a
                    if a.unsigned_abs() > slack.unsigned_abs() {
                        forced.push((i, a < 0));
                    }
                }
            }
            if forced.is_empty() {
                return true;
            }
            for (i, value) in forced {
                match self.domains[i] {
                    None => {
                        self.fix(i, value);
                        self.stats.propagated += 1;
                    }
                    Some(v) if v != value => return false,
                    Some(_) => {}
                }
            }
        }
    }

    fn fix(&mut self, var: usize, value: bool) {
        self.domains[var] = Some(value);
        self.trail.push(var);
        for row in &mut self.rows {
            let a = row.coefficients[var];
            row.min_activity += taken(a, value) - a.min(0);
        }
        for bound in &mut self.bounds {
            let g = bound.gains[var];
            bound.optimistic += taken(g, value) - g.max(0);
        }
    }

    fn undo_to(&mut self, mark: usize) {
        while self.trail.len() > mark {
            let Some(var) = self.trail.pop() else {
                break;
            };
            let value = self.domains[var].take().unwrap_or(false);
            for row in &mut self.rows {
                let a = row.coefficients[var];
                row.min_activity -= taken(a, value) - a.min(0);
            }
            for bound in &mut self.bounds {
                let g = bound.gains[var];
                bound.optimistic -= taken(g, value) - g.max(0);
            }
        }
    }

    fn should_stop(&mut self) -> bool {
        if self.stop.is_some() {
            return true;
        }
        if let Some(ref flag) = self.cancel {
            if flag.load(Ordering::Relaxed) {
                self.stop = Some(StopReason::Requested);
            }
        }
        if self.stop.is_none()
            && self.config.node_limit > 0
            && self.stats.nodes >= self.config.node_limit
        {
            self.stop = Some(StopReason::NodeLimit);
        }
        if self.stop.is_none() && self.deadline.is_some_and(|d| Instant::now() >= d) {
            self.stop = Some(StopReason::TimeLimit);
        }
        if let Some(reason) = self.stop {
            info!(?reason, nodes = self.stats.nodes, "search stopped early");
        }
        self.stop.is_some()
    }
}

fn taken(coefficient: i64, value: bool) -> i64 {
    if value {
        coefficient
    } else {
        0
    }
}

fn branching_order(rows: &[Row], n: usize, config: &SearchConfig) -> Vec<usize> {
    let mut order: Vec<usize> = (0..n).collect();
    match config.variable_order {
        VariableOrder::Sequential => {}
        VariableOrder::Random => {
            let mut rng = StdRng::seed_from_u64(config.seed.unwrap_or(42));
            order.shuffle(&mut rng);
        }
        VariableOrder::MostConstrained => {
            let weight = |i: usize| -> u128 {
                rows.iter()
                    .map(|r| u128::from(r.coefficients[i].unsigned_abs()))
                    .sum()
            };
            order.sort_by_key(|&i| std::cmp::Reverse(weight(i)));
        }
    }
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formulation::DominanceRule;
    use crate::model::{Model, Strategy, StrategyCatalog};

    fn build<const R: usize, const K: usize>(
        resource_max: &[f64],
        utility_min: &[f64],
        strategies: &[([f64; R], [f64; K])],
    ) -> Formulation {
        let mut model = Model::with_dimensions(1000.0, R, K).unwrap();
        for (j, &m) in resource_max.iter().enumerate() {
            model.set_resource_max(j, m).unwrap();
        }
        for (k, &m) in utility_min.iter().enumerate() {
            model.set_utility_min(k, m).unwrap();
        }
        let mut catalog = StrategyCatalog::new();
        for (id, (cost, utility)) in strategies.iter().enumerate() {
            catalog
                .add(Strategy::new(id as u32, cost.to_vec(), utility.to_vec()), &model)
                .unwrap();
        }
        Formulation::build(&catalog, &model).unwrap()
    }

    fn scenario_a() -> Formulation {
        build(&[10.0], &[0.0], &[([4.0], [5.0]), ([7.0], [3.0])])
    }

    /// Every assignment, feasible or not, for small instances.
    fn all_assignments(n: usize) -> impl Iterator<Item = Vec<bool>> {
        (0u32..1 << n).map(move |mask| (0..n).map(|i| mask & (1 << i) != 0).collect())
    }

    #[test]
    fn test_scenario_a_every_order_and_seed() {
        let f = scenario_a();
        let orders = [
            VariableOrder::Random,
            VariableOrder::Sequential,
            VariableOrder::MostConstrained,
        ];
        for order in orders {
            for seed in 0..8 {
                let config = SearchConfig::default().with_variable_order(order).with_seed(seed);
                let outcome = SearchRunner::run(&f, &config);
                assert_eq!(outcome.state, SearchState::Exhausted);
                assert_eq!(
                    outcome.best.expect("feasible").assignment,
                    vec![true, false],
                    "order {order:?}, seed {seed}"
                );
            }
        }
    }

    #[test]
    fn test_scenario_a_objective_values() {
        let outcome = SearchRunner::run(&scenario_a(), &SearchConfig::default());
        // resource usage, total utility, activations in class 0
        assert_eq!(outcome.best.unwrap().objective_values, vec![4000, 5000, 1]);
    }

    #[test]
    fn test_scenario_a_lexicographic_prefers_lowest_usage() {
        // Resource usage leads the chain, so with no utility minimum the
        // empty assignment wins outright.
        let config = SearchConfig::default().with_dominance(DominanceRule::Lexicographic);
        let outcome = SearchRunner::run(&scenario_a(), &config);
        let best = outcome.best.unwrap();
        assert_eq!(best.assignment, vec![false, false]);
        assert_eq!(best.objective_values, vec![0, 0, 0]);
    }

    #[test]
    fn test_infeasible_has_no_incumbent() {
        let f = build(&[10.0], &[100.0], &[([4.0], [5.0]), ([7.0], [3.0])]);
        let outcome = SearchRunner::run(&f, &SearchConfig::default());
        assert_eq!(outcome.state, SearchState::Exhausted);
        assert!(outcome.best.is_none());
        assert_eq!(outcome.stats.solutions_found, 0);
    }

    #[test]
    fn test_zero_budget_forces_strategy_off() {
        let f = build(
            &[0.0, 10.0],
            &[0.0],
            &[([1.0, 1.0], [9.0]), ([0.0, 2.0], [1.0]), ([0.0, 3.0], [2.0])],
        );
        let outcome = SearchRunner::run(&f, &SearchConfig::default());
        let best = outcome.best.unwrap();
        assert!(!best.assignment[0]);
        assert_eq!(best.assignment, vec![false, true, true]);
        // strategy 0 is fixed at the root, never branched on
        assert!(outcome.stats.propagated >= 1);
    }

    #[test]
    fn test_propagation_forces_required_strategy() {
        // only strategy 1 can reach the utility minimum
        let f = build(&[10.0], &[6.0], &[([1.0], [1.0]), ([1.0], [6.0]), ([9.5], [0.0])]);
        let outcome = SearchRunner::run(
            &f,
            &SearchConfig::default().with_variable_order(VariableOrder::Sequential),
        );
        let best = outcome.best.unwrap();
        assert!(best.assignment[1]);
        assert!(f.is_feasible(&best.assignment));
    }

    #[test]
    fn test_lexicographic_matches_brute_force() {
        let f = build(
            &[6.0, 5.0],
            &[2.0, 1.0],
            &[
                ([1.0, 2.0], [1.0, 0.0]),
                ([2.0, 1.0], [0.0, 1.0]),
                ([3.0, 0.5], [2.0, 2.0]),
                ([0.5, 0.5], [0.5, 0.0]),
                ([4.0, 3.0], [3.0, 1.0]),
            ],
        );
        let chain = f.objectives();
        let mut expected: Option<Vec<i64>> = None;
        for x in all_assignments(f.variable_count()).filter(|x| f.is_feasible(x)) {
            let v = chain.evaluate(&x);
            let better = match &expected {
                None => true,
                Some(best) => chain.improves(DominanceRule::Lexicographic, &v, best),
            };
            if better {
                expected = Some(v);
            }
        }

        for seed in 0..5 {
            let config = SearchConfig::default()
                .with_dominance(DominanceRule::Lexicographic)
                .with_seed(seed);
            let outcome = SearchRunner::run(&f, &config);
            assert_eq!(outcome.best.map(|b| b.objective_values), expected);
        }
    }

    #[test]
    fn test_pareto_result_is_not_dominated() {
        let f = build(
            &[5.0],
            &[1.0, 0.0],
            &[
                ([1.0], [1.0, 0.0]),
                ([2.0], [2.0, 1.0]),
                ([2.0], [0.0, 3.0]),
                ([3.0], [1.0, 1.0]),
            ],
        );
        let outcome = SearchRunner::run(&f, &SearchConfig::default());
        let best = outcome.best.unwrap();
        for x in all_assignments(f.variable_count()).filter(|x| f.is_feasible(x)) {
            let v = f.objectives().evaluate(&x);
            assert!(
                !f.objectives().improves(DominanceRule::Pareto, &v, &best.objective_values),
                "{x:?} dominates the result"
            );
        }
    }

    #[test]
    fn test_strict_keeps_first_on_ties() {
        // Sequential order reaches [true, false] first; the cheaper and more
        // useful [false, true] ties on the activation count.
        let f = build(&[10.0], &[0.0], &[([7.0], [3.0]), ([4.0], [5.0])]);
        let sequential = SearchConfig::default().with_variable_order(VariableOrder::Sequential);

        let strict =
            SearchRunner::run(&f, &sequential.clone().with_dominance(DominanceRule::Strict));
        assert_eq!(strict.best.unwrap().assignment, vec![true, false]);

        let pareto = SearchRunner::run(&f, &sequential.with_dominance(DominanceRule::Pareto));
        assert_eq!(pareto.best.unwrap().assignment, vec![false, true]);
    }

    #[test]
    fn test_node_limit_cancels_with_feasible_incumbent() {
        let strategies: Vec<([f64; 1], [f64; 1])> = (0..14)
            .map(|i| ([1.0 + (i % 4) as f64], [1.0 + (i % 3) as f64]))
            .collect();
        let f = build(&[12.0], &[3.0], &strategies);

        let config = SearchConfig::default().with_node_limit(20);
        let outcome = SearchRunner::run(&f, &config);
        assert_eq!(outcome.state, SearchState::Cancelled);
        assert_eq!(outcome.stop_reason, Some(StopReason::NodeLimit));
        assert!(outcome.stats.nodes <= 20);
        if let Some(best) = outcome.best {
            assert!(f.is_feasible(&best.assignment));
        }
    }

    #[test]
    fn test_cancel_flag() {
        let f = scenario_a();
        let cancel = Arc::new(AtomicBool::new(true));
        let outcome = SearchRunner::run_with_cancel(&f, &SearchConfig::default(), Some(cancel));
        assert_eq!(outcome.state, SearchState::Cancelled);
        assert_eq!(outcome.stop_reason, Some(StopReason::Requested));
        assert!(outcome.best.is_none());
        assert_eq!(outcome.stats.nodes, 0);
    }

    #[test]
    fn test_empty_formulation() {
        let f = build::<1, 1>(&[1.0], &[0.0], &[]);
        let outcome = SearchRunner::run(&f, &SearchConfig::default());
        assert_eq!(outcome.state, SearchState::Exhausted);
        assert_eq!(outcome.best.unwrap().assignment, Vec::<bool>::new());

        let f = build::<1, 1>(&[1.0], &[0.5], &[]);
        assert!(SearchRunner::run(&f, &SearchConfig::default()).best.is_none());
    }

    #[test]
    fn test_reproducible() {
        let f = build(
            &[4.0],
            &[1.0],
            &[([1.0], [1.0]), ([1.0], [1.0]), ([2.0], [2.0]), ([2.0], [1.0])],
        );
        let config = SearchConfig::default().with_seed(99);
        let a = SearchRunner::run(&f, &config);
        let b = SearchRunner::run(&f, &config);
        assert_eq!(a.best, b.best);
        assert_eq!(a.stats.nodes, b.stats.nodes);
    }

    #[test]
    fn test_branching_order_most_constrained() {
        let f = build(&[10.0], &[0.0], &[([1.0], [0.0]), ([5.0], [0.0]), ([3.0], [0.0])]);
        let config = SearchConfig::default().with_variable_order(VariableOrder::MostConstrained);
        let search = Search::new(&f, &config, None);
        assert_eq!(search.order, vec![1, 2, 0]);
    }

    #[test]
    fn test_time_limit_cancels_with_feasible_incumbent() {
        // Conflicting usage and utility terms keep Pareto bounding weak, so
        // 40 strategies cannot be exhausted within the limit.
        let strategies: Vec<([f64; 1], [f64; 2])> = (0..40)
            .map(|i| ([1.0 + (i % 5) as f64], [(i % 3) as f64, 1.0 + (i % 4) as f64]))
            .collect();
        let f = build(&[60.0], &[2.0, 1.0], &strategies);

        let config = SearchConfig::default().with_time_limit_ms(10);
        let outcome = SearchRunner::run(&f, &config);
        assert_eq!(outcome.state, SearchState::Cancelled);
        assert_eq!(outcome.stop_reason, Some(StopReason::TimeLimit));
        assert!(outcome.stats.elapsed_ms >= 10);
        if let Some(best) = outcome.best {
            assert!(f.is_feasible(&best.assignment));
        }
    }
}
