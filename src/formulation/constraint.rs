//! Linear constraints over binary decision variables, and the builder that
//! derives them from a catalog and a model.

use super::objective::{Direction, ObjectiveChain, ObjectiveKind, ObjectiveTerm};
use crate::error::{Result, SelectionError};
use crate::model::{Model, StrategyCatalog};

/// Inequality sense of a [`LinearConstraint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sense {
    /// `activity <= rhs`
    LessOrEqual,
    /// `activity >= rhs`
    GreaterOrEqual,
}

/// Which requirement a constraint encodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKind {
    /// Budget of resource `j`.
    Resource(usize),
    /// Utility minimum of class `k`.
    Utility(usize),
}

/// `Σ coefficients[i] · x_i  (<= | >=)  rhs` in the scaled integer domain.
#[derive(Debug, Clone)]
pub struct LinearConstraint {
    pub kind: ConstraintKind,
    pub sense: Sense,
    /// One coefficient per decision variable.
    pub coefficients: Vec<i64>,
    pub rhs: i64,
}

impl LinearConstraint {
    /// Left-hand side for a full assignment.
    pub fn activity(&self, assignment: &[bool]) -> i64 {
        self.coefficients
            .iter()
            .zip(assignment)
            .filter_map(|(&c, &on)| on.then_some(c))
            .sum()
    }

    /// Whether `assignment` satisfies this row.
    pub fn is_satisfied(&self, assignment: &[bool]) -> bool {
        let activity = self.activity(assignment);
        match self.sense {
            Sense::LessOrEqual => activity <= self.rhs,
            Sense::GreaterOrEqual => activity >= self.rhs,
        }
    }
}

/// The scaled constraint system and objective chain for one solve.
///
/// Variable `p` corresponds to `ids()[p]`, the `p`-th strategy of the
/// catalog in ascending id order.
///
/// # Examples
///
/// ```
/// use u_stratsel::formulation::Formulation;
/// use u_stratsel::model::{Model, Strategy, StrategyCatalog};
///
/// let mut model = Model::with_dimensions(1000.0, 1, 1).unwrap();
/// model.set_resource_max(0, 10.0).unwrap();
///
/// let mut catalog = StrategyCatalog::new();
/// catalog.add(Strategy::new(0, vec![4.0], vec![5.0]), &model).unwrap();
/// catalog.add(Strategy::new(1, vec![7.0], vec![3.0]), &model).unwrap();
///
/// let formulation = Formulation::build(&catalog, &model).unwrap();
/// assert_eq!(formulation.constraints().len(), 2);
/// assert_eq!(formulation.objectives().len(), 3);
/// assert!(formulation.is_feasible(&[true, false]));
/// assert!(!formulation.is_feasible(&[true, true]));
/// ```
#[derive(Debug, Clone)]
pub struct Formulation {
    ids: Vec<u32>,
    constraints: Vec<LinearConstraint>,
    objectives: ObjectiveChain,
}

impl Formulation {
    /// Builds resource rows, utility rows, and the objective chain.
    ///
    /// An empty catalog yields a formulation with no variables; only an
    /// unsized model or a strategy that no longer matches the model
    /// dimensions is an error.
    pub fn build(catalog: &StrategyCatalog, model: &Model) -> Result<Self> {
        model.ensure_initialized()?;
        for strategy in catalog.iter() {
            strategy.validate(model)?;
        }

        let resources = model.resource_count();
        let classes = model.class_count();
        let mut constraints = Vec::with_capacity(resources + classes);
        let mut terms = Vec::with_capacity(resources + 1 + classes);

        for j in 0..resources {
            let coefficients = catalog
                .iter()
                .map(|s| model.scale(s.cost()[j], &format!("strategy {} cost[{j}]", s.id())))
                .collect::<Result<Vec<_>>>()?;
            let rhs = model.scale(model.resource_max()[j], &format!("resource_max[{j}]"))?;
            check_row(&coefficients, rhs, || format!("resource row {j}"))?;

            terms.push(ObjectiveTerm {
                kind: ObjectiveKind::ResourceUsage(j),
                direction: Direction::Minimize,
                coefficients: coefficients.clone(),
            });
            constraints.push(LinearConstraint {
                kind: ConstraintKind::Resource(j),
                sense: Sense::LessOrEqual,
                coefficients,
                rhs,
            });
        }

        let mut total_utility = vec![0i64; catalog.len()];
        for k in 0..classes {
            let coefficients = catalog
                .iter()
                .map(|s| model.scale(s.utility()[k], &format!("strategy {} utility[{k}]", s.id())))
                .collect::<Result<Vec<_>>>()?;
            let rhs = model.scale(model.utility_min()[k], &format!("utility_min[{k}]"))?;
            check_row(&coefficients, rhs, || format!("utility row {k}"))?;

            for (total, &c) in total_utility.iter_mut().zip(&coefficients) {
                *total = total
                    .checked_add(c)
                    .ok_or_else(|| SelectionError::CoefficientOverflow("total utility".into()))?;
            }
            constraints.push(LinearConstraint {
                kind: ConstraintKind::Utility(k),
                sense: Sense::GreaterOrEqual,
                coefficients,
                rhs,
            });
        }
        check_row(&total_utility, 0, || "total utility".into())?;

        terms.push(ObjectiveTerm {
            kind: ObjectiveKind::TotalUtility,
            direction: Direction::Maximize,
            coefficients: total_utility,
        });

        for k in 0..classes {
            terms.push(ObjectiveTerm {
                kind: ObjectiveKind::ClassActivations(k),
                direction: Direction::Maximize,
                coefficients: catalog
                    .iter()
                    .map(|s| i64::from(s.utility()[k] > 0.0))
                    .collect(),
            });
        }

        Ok(Self {
            ids: catalog.ids(),
            constraints,
            objectives: ObjectiveChain::new(terms),
        })
    }

    /// Number of decision variables (one per strategy).
    pub fn variable_count(&self) -> usize {
        self.ids.len()
    }

    /// Strategy id of each decision variable.
    pub fn ids(&self) -> &[u32] {
        &self.ids
    }

    /// Resource rows followed by utility rows.
    pub fn constraints(&self) -> &[LinearConstraint] {
        &self.constraints
    }

    /// The objective chain used to rank feasible assignments.
    pub fn objectives(&self) -> &ObjectiveChain {
        &self.objectives
    }

    /// Whether a full assignment satisfies every constraint exactly.
    pub fn is_feasible(&self, assignment: &[bool]) -> bool {
        assignment.len() == self.variable_count()
            && self.constraints.iter().all(|c| c.is_satisfied(assignment))
    }
}

/// Rejects rows whose worst-case activity could overflow `i64`.
fn check_row(coefficients: &[i64], rhs: i64, what: impl Fn() -> String) -> Result<()> {
    let overflow = || SelectionError::CoefficientOverflow(what());
    coefficients
        .iter()
        .try_fold(rhs.unsigned_abs(), |acc, &c| acc.checked_add(c.unsigned_abs()))
        .filter(|&weight| weight <= i64::MAX as u64)
        .map(|_| ())
        .ok_or_else(overflow)
}
